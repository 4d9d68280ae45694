//! Gesture messages from the host map and click classification.

use serde::{Deserialize, Serialize};

use crate::geometry::LatLng;
use crate::model::GeometryId;

use super::{EditFocus, EditorMode};

/// Map element a gesture landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// A point marker.
    Point { id: GeometryId },
    /// The body of a committed polygon.
    Polygon { id: GeometryId },
    /// A vertex handle of a committed polygon.
    Vertex { polygon: GeometryId, index: usize },
    /// The handle halfway along edge `edge` -> `edge + 1`.
    Midpoint { polygon: GeometryId, edge: usize },
    /// A vertex of the in-progress polygon.
    DraftVertex { index: usize },
}

/// Typed gesture emitted by the host map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// A click at `at`; `target` is `None` for bare map surface.
    Click {
        at: LatLng,
        #[serde(default)]
        target: Option<Target>,
    },
    DragStart { target: Target },
    /// End of a drag; `at` is where the handle was released.
    DragEnd { target: Target, at: LatLng },
}

/// What a bare map click does in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Insert a vertex into the focused polygon after the anchor.
    InsertVertex(GeometryId),
    AddPoint,
    /// Seed a new in-progress polygon with the click location.
    StartDrawing,
    /// Insert a vertex into the in-progress polygon after its anchor.
    ExtendDrawing,
    Nothing,
}

/// Classifies a bare map click. Rules are checked in precedence order.
pub fn classify_click(mode: EditorMode, focus: &EditFocus, drawing: bool) -> ClickAction {
    if let EditFocus::Polygon(id) = focus {
        if matches!(mode, EditorMode::Edit | EditorMode::Polygon) {
            return ClickAction::InsertVertex(id.clone());
        }
    }

    match mode {
        EditorMode::Edit => ClickAction::Nothing,
        EditorMode::Point if focus.is_none() => ClickAction::AddPoint,
        EditorMode::Polygon if focus.is_none() => {
            if drawing {
                ClickAction::ExtendDrawing
            } else {
                ClickAction::StartDrawing
            }
        }
        _ => ClickAction::Nothing,
    }
}
