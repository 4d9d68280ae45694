//! Drag/click arbitration and edit focus.

use crate::model::GeometryId;

use super::Target;

/// What is currently selected for editing. At most one thing at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditFocus {
    #[default]
    None,
    Point(GeometryId),
    Polygon(GeometryId),
}

impl EditFocus {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn point(&self) -> Option<&GeometryId> {
        match self {
            Self::Point(id) => Some(id),
            _ => None,
        }
    }

    pub fn polygon(&self) -> Option<&GeometryId> {
        match self {
            Self::Polygon(id) => Some(id),
            _ => None,
        }
    }
}

/// Tracks the active drag, the edit focus and the insertion anchors.
///
/// `vertex_anchor` is only ever set while a polygon is focused; it is the
/// vertex the next inserted vertex follows and the default delete target.
/// `draft_anchor` plays the same role for the in-progress polygon.
#[derive(Debug, Clone, Default)]
pub struct InteractionArbiter {
    drag: Option<Target>,
    focus: EditFocus,
    vertex_anchor: Option<usize>,
    draft_anchor: Option<usize>,
}

impl InteractionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, target: Target) {
        if let Some(previous) = self.drag.replace(target) {
            tracing::debug!("[arbiter] Drag started while {:?} was still held", previous);
        }
    }

    /// Releases the drag flag unconditionally, returning what was held.
    pub fn end_drag(&mut self) -> Option<Target> {
        self.drag.take()
    }

    /// A bare map click only counts when no handle is being dragged.
    pub fn accepts_click(&self) -> bool {
        !self.is_dragging()
    }

    pub fn focus(&self) -> &EditFocus {
        &self.focus
    }

    /// Replaces the focus. Always resets the vertex anchor.
    pub fn select(&mut self, focus: EditFocus) {
        tracing::debug!("[arbiter] Focus {:?} -> {:?}", self.focus, focus);
        self.focus = focus;
        self.vertex_anchor = None;
    }

    pub fn clear_focus(&mut self) {
        self.select(EditFocus::None);
    }

    pub fn vertex_anchor(&self) -> Option<usize> {
        self.vertex_anchor
    }

    /// Sets the vertex anchor. Refused unless a polygon is focused.
    pub fn set_vertex_anchor(&mut self, index: Option<usize>) -> bool {
        if self.focus.polygon().is_none() {
            return false;
        }
        self.vertex_anchor = index;
        true
    }

    pub fn draft_anchor(&self) -> Option<usize> {
        self.draft_anchor
    }

    pub fn set_draft_anchor(&mut self, index: Option<usize>) {
        self.draft_anchor = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_flag() {
        let mut arbiter = InteractionArbiter::new();
        assert!(arbiter.accepts_click());

        let target = Target::Point {
            id: GeometryId::from("a"),
        };
        arbiter.begin_drag(target.clone());
        assert!(arbiter.is_dragging());
        assert!(!arbiter.accepts_click());

        assert_eq!(arbiter.end_drag(), Some(target));
        assert!(!arbiter.is_dragging());
        assert_eq!(arbiter.end_drag(), None);
    }

    #[test]
    fn test_select_resets_anchor() {
        let mut arbiter = InteractionArbiter::new();
        arbiter.select(EditFocus::Polygon(GeometryId::from("p")));
        assert!(arbiter.set_vertex_anchor(Some(2)));
        assert_eq!(arbiter.vertex_anchor(), Some(2));

        arbiter.select(EditFocus::Polygon(GeometryId::from("q")));
        assert_eq!(arbiter.vertex_anchor(), None);
    }

    #[test]
    fn test_anchor_requires_polygon_focus() {
        let mut arbiter = InteractionArbiter::new();
        assert!(!arbiter.set_vertex_anchor(Some(0)));

        arbiter.select(EditFocus::Point(GeometryId::from("a")));
        assert!(!arbiter.set_vertex_anchor(Some(0)));
        assert_eq!(arbiter.vertex_anchor(), None);
    }
}
