//! Interactive point/polygon editor.
//!
//! An [`EditorSession`] owns everything one editing session needs: the
//! geometry model, the in-progress polygon, the interaction arbiter and the
//! undo history. The host map feeds it [`GestureEvent`]s and [`KeyInput`]s;
//! committed changes flow out through the model's [`ChangeListener`].
//!
//! Session operations never fail hard. Each returns an [`Outcome`] so the
//! embedding UI can show feedback when an edit is refused, or ignore it.

mod arbiter;
mod handles;
mod history;
mod input;
mod keyboard;

pub use arbiter::*;
pub use handles::*;
pub use history::*;
pub use input::*;
pub use keyboard::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::error::EditError;
use crate::geometry::{
    Bounds, LatLng, MIN_POLYGON_VERTICES, bounds_of, centroid, insert_at, insertion_index,
    midpoint, ring_contains,
};
use crate::model::{ChangeListener, GeometryId, GeometryModel, Point, Polygon};
use crate::overlay::ReferenceOverlay;
use crate::view::{MapView, initial_view};

/// Which gesture a map click performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    View,
    Point,
    Polygon,
    Edit,
}

impl EditorMode {
    /// Point markers can be selected and dragged.
    pub fn edits_points(self) -> bool {
        matches!(self, Self::Edit | Self::Point)
    }

    /// Polygons can be selected and reshaped.
    pub fn edits_polygons(self) -> bool {
        matches!(self, Self::Edit | Self::Polygon)
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::View => "view",
            Self::Point => "point",
            Self::Polygon => "polygon",
            Self::Edit => "edit",
        };
        f.write_str(name)
    }
}

/// What an applied operation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Committed points changed; the listener was notified.
    PointsChanged,
    /// Committed polygons changed; the listener was notified.
    PolygonsChanged,
    DrawingStarted,
    /// The in-progress polygon changed.
    DrawingChanged,
    DrawingCancelled,
    FocusChanged,
    AnchorChanged,
    DragStarted,
}

/// Result of a session operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(Effect),
    /// The gesture or command has no meaning in the current state.
    Ignored,
    /// The edit was attempted and refused; nothing changed.
    Refused(EditError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn effect(&self) -> Option<Effect> {
        match self {
            Self::Applied(effect) => Some(*effect),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&EditError> {
        match self {
            Self::Refused(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<Effect, EditError>> for Outcome {
    fn from(result: Result<Effect, EditError>) -> Self {
        match result {
            Ok(effect) => Self::Applied(effect),
            Err(err) => {
                tracing::debug!("[editor] Refused: {err}");
                Self::Refused(err)
            }
        }
    }
}

/// One editing session over a map's points and polygons.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    mode: EditorMode,
    model: GeometryModel,
    drawing: bool,
    draft: Vec<LatLng>,
    arbiter: InteractionArbiter,
    history: ActionHistory,
    overlay: Option<ReferenceOverlay>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl EditorSession {
    /// Starts a session from the caller's snapshot of the map geometry.
    pub fn new(points: Vec<Point>, polygons: Vec<Polygon>) -> Self {
        Self::with_config(points, polygons, EditorConfig::default())
    }

    pub fn with_config(points: Vec<Point>, polygons: Vec<Polygon>, config: EditorConfig) -> Self {
        let history = ActionHistory::new(config.history_limit);
        Self {
            config,
            mode: EditorMode::default(),
            model: GeometryModel::new(points, polygons),
            drawing: false,
            draft: Vec::new(),
            arbiter: InteractionArbiter::new(),
            history,
            overlay: None,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: EditorMode) -> Self {
        self.set_mode(mode);
        self
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.model.set_listener(Box::new(listener));
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: ReferenceOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    // ---- accessors ----

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn points(&self) -> &[Point] {
        self.model.points()
    }

    pub fn polygons(&self) -> &[Polygon] {
        self.model.polygons()
    }

    pub fn model(&self) -> &GeometryModel {
        &self.model
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Vertices of the in-progress polygon.
    pub fn draft(&self) -> &[LatLng] {
        &self.draft
    }

    pub fn can_finalize(&self) -> bool {
        self.drawing && self.draft.len() >= MIN_POLYGON_VERTICES
    }

    pub fn focus(&self) -> &EditFocus {
        self.arbiter.focus()
    }

    pub fn vertex_anchor(&self) -> Option<usize> {
        self.arbiter.vertex_anchor()
    }

    pub fn draft_anchor(&self) -> Option<usize> {
        self.arbiter.draft_anchor()
    }

    pub fn is_dragging(&self) -> bool {
        self.arbiter.is_dragging()
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn overlay(&self) -> Option<&ReferenceOverlay> {
        self.overlay.as_ref()
    }

    /// Ends the session, handing back the final collections.
    pub fn into_geometry(self) -> (Vec<Point>, Vec<Polygon>) {
        self.model.into_parts()
    }

    // ---- mode ----

    /// Switches mode immediately.
    ///
    /// Leaving polygon mode discards an unfinished drawing; focus is kept only
    /// when the new mode can still edit the focused kind.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == self.mode {
            return;
        }
        tracing::debug!("[editor] Mode {} -> {}", self.mode, mode);
        self.mode = mode;

        if self.drawing && mode != EditorMode::Polygon {
            self.discard_drawing();
        }

        let keep = match self.arbiter.focus() {
            EditFocus::None => true,
            EditFocus::Point(_) => mode.edits_points(),
            EditFocus::Polygon(_) => mode.edits_polygons(),
        };
        if !keep {
            self.arbiter.clear_focus();
        }
    }

    // ---- gestures ----

    /// Single entry point for host gestures.
    pub fn dispatch(&mut self, event: GestureEvent) -> Outcome {
        tracing::trace!("[editor] {:?}", event);
        match event {
            GestureEvent::Click { at, target: None } => self.click_map(at),
            GestureEvent::Click {
                at,
                target: Some(target),
            } => self.click_target(target, at),
            GestureEvent::DragStart { target } => self.drag_start(target),
            GestureEvent::DragEnd { target, at } => self.drag_end(target, at),
        }
    }

    /// A click on bare map surface.
    pub fn click_map(&mut self, at: LatLng) -> Outcome {
        if !self.arbiter.accepts_click() {
            tracing::debug!("[editor] Ignoring click released from a drag");
            return Outcome::Ignored;
        }

        match classify_click(self.mode, self.arbiter.focus(), self.drawing) {
            ClickAction::InsertVertex(polygon) => {
                let index = self
                    .model
                    .polygon(&polygon)
                    .map(|p| insertion_index(p.vertex_count(), self.arbiter.vertex_anchor()));
                match index {
                    Some(index) => self.insert_polygon_vertex(&polygon, index, at).into(),
                    None => self.drop_stale_focus(polygon),
                }
            }
            ClickAction::AddPoint => {
                let point = self.model.add_point(at);
                self.history.push(HistoryEntry::AddPoint { point });
                Outcome::Applied(Effect::PointsChanged)
            }
            ClickAction::StartDrawing => {
                self.drawing = true;
                self.draft = vec![at];
                self.arbiter.set_draft_anchor(Some(0));
                tracing::debug!("[editor] Drawing started");
                Outcome::Applied(Effect::DrawingStarted)
            }
            ClickAction::ExtendDrawing => {
                let anchor = self.arbiter.draft_anchor();
                let index = insertion_index(self.draft.len(), anchor);
                self.draft = insert_at(&self.draft, anchor, at);
                self.arbiter.set_draft_anchor(Some(index));
                self.history
                    .push(HistoryEntry::AddCurrentPolygonVertex { index });
                Outcome::Applied(Effect::DrawingChanged)
            }
            ClickAction::Nothing => Outcome::Ignored,
        }
    }

    /// A click on a marker, polygon body or handle.
    ///
    /// Clicks a target does not consume fall through to the map underneath.
    pub fn click_target(&mut self, target: Target, at: LatLng) -> Outcome {
        if !self.arbiter.accepts_click() {
            tracing::debug!("[editor] Ignoring click on {:?} during drag", target);
            return Outcome::Ignored;
        }

        match target {
            Target::Point { id } => {
                if !self.mode.edits_points() || self.arbiter.focus().polygon().is_some() {
                    return self.click_map(at);
                }
                if self.model.point(&id).is_none() {
                    return Outcome::Refused(EditError::UnknownPoint(id));
                }
                self.arbiter.select(EditFocus::Point(id));
                Outcome::Applied(Effect::FocusChanged)
            }
            Target::Polygon { id } => {
                if !self.mode.edits_polygons() || self.drawing {
                    return self.click_map(at);
                }
                if self.model.polygon(&id).is_none() {
                    return Outcome::Refused(EditError::UnknownPolygon(id));
                }
                if self.arbiter.focus().polygon() == Some(&id) {
                    self.arbiter.clear_focus();
                } else {
                    self.arbiter.select(EditFocus::Polygon(id));
                }
                Outcome::Applied(Effect::FocusChanged)
            }
            Target::Vertex { polygon, index } => {
                if !self.handles_visible_for(&polygon) {
                    return Outcome::Ignored;
                }
                match self.vertex_count(&polygon) {
                    Ok(len) if index < len => {
                        self.arbiter.set_vertex_anchor(Some(index));
                        Outcome::Applied(Effect::AnchorChanged)
                    }
                    Ok(len) => Outcome::Refused(EditError::VertexOutOfRange { index, len }),
                    Err(err) => Outcome::Refused(err),
                }
            }
            Target::Midpoint { polygon, edge } => {
                if !self.handles_visible_for(&polygon) {
                    return Outcome::Ignored;
                }
                self.insert_midpoint(&polygon, edge).into()
            }
            Target::DraftVertex { index } => {
                if !self.drawing {
                    return Outcome::Ignored;
                }
                if index >= self.draft.len() {
                    return Outcome::Refused(EditError::VertexOutOfRange {
                        index,
                        len: self.draft.len(),
                    });
                }
                self.arbiter.set_draft_anchor(Some(index));
                Outcome::Applied(Effect::AnchorChanged)
            }
        }
    }

    /// Raises the drag flag. Clicks are ignored until the matching drag end.
    pub fn drag_start(&mut self, target: Target) -> Outcome {
        tracing::debug!("[editor] Drag start {:?}", target);
        self.arbiter.begin_drag(target);
        Outcome::Applied(Effect::DragStarted)
    }

    /// Applies a drag at its release point.
    ///
    /// The drag flag is released before the move is attempted, so it never
    /// stays raised whatever the move's outcome.
    pub fn drag_end(&mut self, target: Target, at: LatLng) -> Outcome {
        let held = self.arbiter.end_drag();
        if held.as_ref() != Some(&target) {
            tracing::warn!("[editor] Drag ended on {:?} but {:?} was held", target, held);
        }

        if !self.is_draggable(&target) {
            tracing::debug!("[editor] {:?} is not draggable in {} mode", target, self.mode);
            return Outcome::Ignored;
        }

        let result = match target {
            Target::Point { id } => self
                .model
                .move_point(&id, at)
                .map(|_| Effect::PointsChanged),
            Target::Vertex { polygon, index } => self
                .model
                .move_vertex(&polygon, index, at)
                .map(|_| {
                    self.arbiter.set_vertex_anchor(Some(index));
                    Effect::PolygonsChanged
                }),
            Target::DraftVertex { index } => {
                let len = self.draft.len();
                match self.draft.get_mut(index) {
                    Some(vertex) => {
                        *vertex = at;
                        self.arbiter.set_draft_anchor(Some(index));
                        Ok(Effect::DrawingChanged)
                    }
                    None => Err(EditError::VertexOutOfRange { index, len }),
                }
            }
            Target::Polygon { .. } | Target::Midpoint { .. } => return Outcome::Ignored,
        };
        result.into()
    }

    /// Whether the host should let the user drag `target` right now.
    pub fn is_draggable(&self, target: &Target) -> bool {
        match target {
            Target::Point { .. } => {
                self.mode.edits_points() && self.arbiter.focus().polygon().is_none()
            }
            Target::Vertex { polygon, .. } => self.handles_visible_for(polygon),
            Target::DraftVertex { .. } => self.drawing,
            Target::Polygon { .. } | Target::Midpoint { .. } => false,
        }
    }

    // ---- drawing ----

    /// Commits the in-progress polygon. Refused below three vertices.
    pub fn finalize_polygon(&mut self) -> Outcome {
        if !self.can_finalize() {
            return Err::<Effect, _>(EditError::InvalidFinalize {
                vertices: self.draft.len(),
            })
            .into();
        }

        let coordinates = std::mem::take(&mut self.draft);
        let result = self.model.add_polygon(coordinates);
        match result {
            Ok(id) => {
                tracing::debug!("[editor] Finalized polygon {id}");
                self.drawing = false;
                self.arbiter.set_draft_anchor(None);
                self.history.clear();
                Outcome::Applied(Effect::PolygonsChanged)
            }
            Err(err) => Outcome::Refused(err),
        }
    }

    /// Discards the in-progress polygon and the session history.
    pub fn cancel_drawing(&mut self) -> Outcome {
        let was_drawing = self.drawing;
        self.discard_drawing();
        if was_drawing {
            Outcome::Applied(Effect::DrawingCancelled)
        } else {
            Outcome::Ignored
        }
    }

    fn discard_drawing(&mut self) {
        tracing::debug!(
            "[editor] Discarding drawing with {} vertices",
            self.draft.len()
        );
        self.drawing = false;
        self.draft.clear();
        self.arbiter.set_draft_anchor(None);
        self.history.clear();
    }

    // ---- undo ----

    /// Reverses the most recent creation.
    ///
    /// An entry whose reversal is refused is still consumed.
    pub fn undo(&mut self) -> Outcome {
        let Some(entry) = self.history.pop() else {
            return Outcome::Refused(EditError::NoActiveFocus);
        };
        tracing::debug!("[editor] Undo {:?}", entry);

        let result = match entry {
            HistoryEntry::AddPoint { point } => self.model.remove_point(&point).map(|_| {
                if self.arbiter.focus().point() == Some(&point) {
                    self.arbiter.clear_focus();
                }
                Effect::PointsChanged
            }),
            HistoryEntry::AddPolygonVertex { polygon, index } => {
                self.model.remove_vertex(&polygon, index).map(|_| {
                    if self.arbiter.focus().polygon() == Some(&polygon) {
                        self.arbiter.set_vertex_anchor(index.checked_sub(1));
                    }
                    Effect::PolygonsChanged
                })
            }
            HistoryEntry::AddCurrentPolygonVertex { index } => {
                if self.drawing && index < self.draft.len() {
                    self.draft.remove(index);
                    self.arbiter.set_draft_anchor(index.checked_sub(1));
                    Ok(Effect::DrawingChanged)
                } else {
                    Err(EditError::VertexOutOfRange {
                        index,
                        len: self.draft.len(),
                    })
                }
            }
        };
        result.into()
    }

    // ---- deletion and selection ----

    /// Deletes whatever is selected: the focused point, else the anchored
    /// vertex of the focused polygon, else the anchored in-progress vertex.
    pub fn delete_selected(&mut self) -> Outcome {
        let result = match (self.arbiter.focus().clone(), self.arbiter.vertex_anchor()) {
            (EditFocus::Point(id), _) => self.model.remove_point(&id).map(|_| {
                self.arbiter.clear_focus();
                self.history.point_removed(&id);
                Effect::PointsChanged
            }),
            (EditFocus::Polygon(id), Some(index)) => {
                self.model.remove_vertex(&id, index).map(|_| {
                    self.arbiter.set_vertex_anchor(Some(index.saturating_sub(1)));
                    self.history.polygon_vertex_removed(&id, index);
                    Effect::PolygonsChanged
                })
            }
            _ => match self.arbiter.draft_anchor() {
                Some(index) if self.drawing => self.remove_draft_vertex(index),
                _ => Err(EditError::NoActiveFocus),
            },
        };
        result.into()
    }

    fn remove_draft_vertex(&mut self, index: usize) -> Result<Effect, EditError> {
        let len = self.draft.len();
        if index >= len {
            return Err(EditError::VertexOutOfRange { index, len });
        }
        if len <= MIN_POLYGON_VERTICES {
            return Err(EditError::VertexCountViolation { polygon: None });
        }
        self.draft.remove(index);
        self.arbiter.set_draft_anchor(Some(index.saturating_sub(1)));
        self.history.draft_vertex_removed(index);
        Ok(Effect::DrawingChanged)
    }

    /// Deletes a point outright.
    pub fn delete_point(&mut self, id: &GeometryId) -> Outcome {
        let result = self.model.remove_point(id).map(|_| {
            if self.arbiter.focus().point() == Some(id) {
                self.arbiter.clear_focus();
            }
            self.history.point_removed(id);
            Effect::PointsChanged
        });
        result.into()
    }

    /// Deletes a whole polygon.
    pub fn delete_polygon(&mut self, id: &GeometryId) -> Outcome {
        let result = self.model.remove_polygon(id).map(|_| {
            if self.arbiter.focus().polygon() == Some(id) {
                self.arbiter.clear_focus();
            }
            self.history.polygon_removed(id);
            Effect::PolygonsChanged
        });
        result.into()
    }

    pub fn select_point(&mut self, id: &GeometryId) -> Outcome {
        if !self.mode.edits_points() {
            return Outcome::Ignored;
        }
        if self.model.point(id).is_none() {
            return Outcome::Refused(EditError::UnknownPoint(id.clone()));
        }
        self.arbiter.select(EditFocus::Point(id.clone()));
        Outcome::Applied(Effect::FocusChanged)
    }

    pub fn select_polygon(&mut self, id: &GeometryId) -> Outcome {
        if !self.mode.edits_polygons() || self.drawing {
            return Outcome::Ignored;
        }
        if self.model.polygon(id).is_none() {
            return Outcome::Refused(EditError::UnknownPolygon(id.clone()));
        }
        self.arbiter.select(EditFocus::Polygon(id.clone()));
        Outcome::Applied(Effect::FocusChanged)
    }

    /// Ends point or polygon editing.
    pub fn clear_focus(&mut self) -> Outcome {
        if self.arbiter.focus().is_none() {
            return Outcome::Ignored;
        }
        self.arbiter.clear_focus();
        Outcome::Applied(Effect::FocusChanged)
    }

    // ---- keyboard ----

    pub fn handle_key(&mut self, input: &KeyInput) -> Outcome {
        let Some(command) = self.config.keymap.resolve(input) else {
            return Outcome::Ignored;
        };
        tracing::debug!("[editor] Key {:?} -> {:?}", input.key, command);
        match command {
            KeyCommand::Undo => self.undo(),
            KeyCommand::Cancel if self.drawing => self.cancel_drawing(),
            KeyCommand::Cancel => Outcome::Ignored,
            KeyCommand::Delete => self.delete_selected(),
        }
    }

    // ---- rendering support ----

    /// Handles the host should draw for the current state.
    pub fn handles(&self) -> Vec<Handle> {
        let mut handles = Vec::new();
        if let Some(polygon) = self.focused_polygon() {
            if self.mode.edits_polygons() {
                handles.extend(polygon_handles(polygon));
            }
        }
        if self.drawing {
            handles.extend(draft_handles(&self.draft));
        }
        handles
    }

    /// Resolves what a click at `at` lands on: handles first, then point
    /// markers, then polygon bodies.
    pub fn pick(&self, at: LatLng) -> Option<Target> {
        let tolerance = self.config.handle_tolerance;
        let handles = self.handles();
        if let Some(handle) = hit_test(&handles, at, tolerance) {
            return Some(handle.target.clone());
        }

        let limit = tolerance * tolerance;
        let marker = self
            .points()
            .iter()
            .map(|p| (p, p.position().distance_sq(at)))
            .filter(|(_, d)| *d <= limit)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((point, _)) = marker {
            return Some(Target::Point {
                id: point.id.clone(),
            });
        }

        // topmost (last drawn) polygon first
        self.polygons()
            .iter()
            .rev()
            .find(|p| {
                bounds_of(p.coordinates.iter().copied()).is_some_and(|b| b.contains(at))
                    && ring_contains(&p.coordinates, at)
            })
            .map(|p| Target::Polygon { id: p.id.clone() })
    }

    /// Where the host should pan to show the current focus: the focused point,
    /// or the vertex average of the focused polygon.
    pub fn focus_center(&self) -> Option<LatLng> {
        match self.arbiter.focus() {
            EditFocus::None => None,
            EditFocus::Point(id) => self.model.point(id).map(Point::position),
            EditFocus::Polygon(_) => self
                .focused_polygon()
                .and_then(|p| centroid(&p.coordinates)),
        }
    }

    /// Where the host map should open.
    pub fn initial_view(&self) -> MapView {
        initial_view(self.points(), self.polygons(), &self.config.view)
    }

    /// Bounds of all session geometry, optionally including the overlay.
    pub fn bounds(&self, include_overlay: bool) -> Option<Bounds> {
        let own = self.points().iter().map(Point::position).chain(
            self.polygons()
                .iter()
                .flat_map(|p| p.coordinates.iter().copied()),
        );
        let overlay = self
            .overlay
            .iter()
            .filter(|_| include_overlay)
            .flat_map(ReferenceOverlay::coordinates);
        bounds_of(own.chain(overlay))
    }

    // ---- helpers ----

    fn focused_polygon(&self) -> Option<&Polygon> {
        self.arbiter
            .focus()
            .polygon()
            .and_then(|id| self.model.polygon(id))
    }

    fn handles_visible_for(&self, polygon: &GeometryId) -> bool {
        self.mode.edits_polygons() && self.arbiter.focus().polygon() == Some(polygon)
    }

    fn vertex_count(&self, polygon: &GeometryId) -> Result<usize, EditError> {
        self.model
            .polygon(polygon)
            .map(Polygon::vertex_count)
            .ok_or_else(|| EditError::UnknownPolygon(polygon.clone()))
    }

    fn insert_polygon_vertex(
        &mut self,
        polygon: &GeometryId,
        index: usize,
        at: LatLng,
    ) -> Result<Effect, EditError> {
        self.model.insert_vertex(polygon, index, at)?;
        self.arbiter.set_vertex_anchor(Some(index));
        self.history.push(HistoryEntry::AddPolygonVertex {
            polygon: polygon.clone(),
            index,
        });
        Ok(Effect::PolygonsChanged)
    }

    fn insert_midpoint(&mut self, polygon: &GeometryId, edge: usize) -> Result<Effect, EditError> {
        let coordinates = &self
            .model
            .polygon(polygon)
            .ok_or_else(|| EditError::UnknownPolygon(polygon.clone()))?
            .coordinates;
        let len = coordinates.len();
        if edge >= len {
            return Err(EditError::VertexOutOfRange { index: edge, len });
        }
        let at = midpoint(coordinates[edge], coordinates[(edge + 1) % len]);
        self.insert_polygon_vertex(polygon, edge + 1, at)
    }

    fn drop_stale_focus(&mut self, polygon: GeometryId) -> Outcome {
        tracing::warn!("[editor] Focused polygon {polygon} no longer exists");
        self.arbiter.clear_focus();
        Outcome::Refused(EditError::UnknownPolygon(polygon))
    }
}
