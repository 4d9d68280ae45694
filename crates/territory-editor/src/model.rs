//! In-memory point and polygon collections with change notification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EditError, Result};
use crate::geometry::{LatLng, MIN_POLYGON_VERTICES};

/// Opaque, stable identifier of a point or polygon.
///
/// Stored rows carry either text or integer ids, so both deserialize; the id
/// is always written back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct GeometryId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl From<RawId> for GeometryId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Self(s),
            RawId::Integer(n) => Self(n.to_string()),
        }
    }
}

impl GeometryId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GeometryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GeometryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<GeometryId> for String {
    fn from(value: GeometryId) -> Self {
        value.0
    }
}

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A freehand point marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: GeometryId,
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(id: impl Into<GeometryId>, at: LatLng) -> Self {
        Self {
            id: id.into(),
            lat: at.lat,
            lng: at.lng,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// A closed polygon. Consecutive coordinates form edges, wrapping last to first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: GeometryId,
    pub coordinates: Vec<LatLng>,
}

impl Polygon {
    pub fn new(id: impl Into<GeometryId>, coordinates: Vec<LatLng>) -> Self {
        Self {
            id: id.into(),
            coordinates,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.coordinates.len()
    }
}

/// Receives the full collection after every committed mutation.
///
/// Both methods default to doing nothing so listeners only implement what
/// they care about.
pub trait ChangeListener {
    fn points_changed(&mut self, _points: &[Point]) {}
    fn polygons_changed(&mut self, _polygons: &[Polygon]) {}
}

impl ChangeListener for () {}

type PointsCallback = Box<dyn FnMut(&[Point])>;
type PolygonsCallback = Box<dyn FnMut(&[Polygon])>;

/// Closure-based listener, the shape an embedding UI usually hands over.
#[derive(Default)]
pub struct ChangeCallbacks {
    on_points_change: Option<PointsCallback>,
    on_polygons_change: Option<PolygonsCallback>,
}

impl ChangeCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_points_change(mut self, f: impl FnMut(&[Point]) + 'static) -> Self {
        self.on_points_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_polygons_change(mut self, f: impl FnMut(&[Polygon]) + 'static) -> Self {
        self.on_polygons_change = Some(Box::new(f));
        self
    }
}

impl ChangeListener for ChangeCallbacks {
    fn points_changed(&mut self, points: &[Point]) {
        if let Some(cb) = self.on_points_change.as_mut() {
            cb(points);
        }
    }

    fn polygons_changed(&mut self, polygons: &[Polygon]) {
        if let Some(cb) = self.on_polygons_change.as_mut() {
            cb(polygons);
        }
    }
}

/// The session's own copy of the points and polygons being edited.
///
/// Every polygon holds at least [`MIN_POLYGON_VERTICES`] vertices at all times.
pub struct GeometryModel {
    points: Vec<Point>,
    polygons: Vec<Polygon>,
    listener: Box<dyn ChangeListener>,
}

impl fmt::Debug for GeometryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryModel")
            .field("points", &self.points)
            .field("polygons", &self.polygons)
            .finish_non_exhaustive()
    }
}

impl Default for GeometryModel {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl GeometryModel {
    /// Takes ownership of the initial collections. Polygons that already
    /// violate the vertex floor are dropped.
    pub fn new(points: Vec<Point>, polygons: Vec<Polygon>) -> Self {
        let polygons = polygons
            .into_iter()
            .filter(|polygon| {
                let valid = polygon.vertex_count() >= MIN_POLYGON_VERTICES;
                if !valid {
                    tracing::warn!(
                        "[model] Dropping polygon {} with {} vertices",
                        polygon.id,
                        polygon.vertex_count()
                    );
                }
                valid
            })
            .collect();

        Self {
            points,
            polygons,
            listener: Box::new(()),
        }
    }

    /// Replaces the change listener.
    pub fn set_listener(&mut self, listener: Box<dyn ChangeListener>) {
        self.listener = listener;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn point(&self, id: &GeometryId) -> Option<&Point> {
        self.points.iter().find(|p| &p.id == id)
    }

    pub fn polygon(&self, id: &GeometryId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| &p.id == id)
    }

    /// Consumes the model, returning the final collections.
    pub fn into_parts(self) -> (Vec<Point>, Vec<Polygon>) {
        (self.points, self.polygons)
    }

    /// Creates a point and returns its id. The point is appended last.
    pub fn add_point(&mut self, at: LatLng) -> GeometryId {
        let id = GeometryId::generate();
        self.points.push(Point::new(id.clone(), at));
        tracing::debug!("[model] Added point {id} at {:?}", at);
        self.notify_points();
        id
    }

    pub fn move_point(&mut self, id: &GeometryId, at: LatLng) -> Result<&[Point]> {
        let point = self
            .points
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| EditError::UnknownPoint(id.clone()))?;
        point.lat = at.lat;
        point.lng = at.lng;
        self.notify_points();
        Ok(&self.points)
    }

    pub fn remove_point(&mut self, id: &GeometryId) -> Result<&[Point]> {
        let index = self
            .points
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| EditError::UnknownPoint(id.clone()))?;
        self.points.remove(index);
        tracing::debug!("[model] Removed point {id}");
        self.notify_points();
        Ok(&self.points)
    }

    /// Commits a new polygon and returns its id.
    pub fn add_polygon(&mut self, coordinates: Vec<LatLng>) -> Result<GeometryId> {
        if coordinates.len() < MIN_POLYGON_VERTICES {
            return Err(EditError::VertexCountViolation { polygon: None });
        }
        let id = GeometryId::generate();
        tracing::debug!(
            "[model] Added polygon {id} with {} vertices",
            coordinates.len()
        );
        self.polygons.push(Polygon::new(id.clone(), coordinates));
        self.notify_polygons();
        Ok(id)
    }

    pub fn move_vertex(&mut self, id: &GeometryId, index: usize, at: LatLng) -> Result<&[Polygon]> {
        let polygon = self.polygon_mut(id)?;
        let len = polygon.coordinates.len();
        let vertex = polygon
            .coordinates
            .get_mut(index)
            .ok_or(EditError::VertexOutOfRange { index, len })?;
        *vertex = at;
        self.notify_polygons();
        Ok(&self.polygons)
    }

    /// Inserts a vertex so that it ends up at `index` (clamped to the end).
    pub fn insert_vertex(&mut self, id: &GeometryId, index: usize, at: LatLng) -> Result<&[Polygon]> {
        let polygon = self.polygon_mut(id)?;
        let index = index.min(polygon.coordinates.len());
        polygon.coordinates.insert(index, at);
        tracing::debug!("[model] Inserted vertex {index} into polygon {id}");
        self.notify_polygons();
        Ok(&self.polygons)
    }

    /// Removes a vertex unless that would leave fewer than three.
    pub fn remove_vertex(&mut self, id: &GeometryId, index: usize) -> Result<&[Polygon]> {
        let polygon = self.polygon_mut(id)?;
        let len = polygon.coordinates.len();
        if index >= len {
            return Err(EditError::VertexOutOfRange { index, len });
        }
        if len <= MIN_POLYGON_VERTICES {
            return Err(EditError::VertexCountViolation {
                polygon: Some(id.clone()),
            });
        }
        polygon.coordinates.remove(index);
        tracing::debug!("[model] Removed vertex {index} from polygon {id}");
        self.notify_polygons();
        Ok(&self.polygons)
    }

    pub fn remove_polygon(&mut self, id: &GeometryId) -> Result<&[Polygon]> {
        let index = self
            .polygons
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| EditError::UnknownPolygon(id.clone()))?;
        self.polygons.remove(index);
        tracing::debug!("[model] Removed polygon {id}");
        self.notify_polygons();
        Ok(&self.polygons)
    }

    fn polygon_mut(&mut self, id: &GeometryId) -> Result<&mut Polygon> {
        self.polygons
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| EditError::UnknownPolygon(id.clone()))
    }

    fn notify_points(&mut self) {
        self.listener.points_changed(&self.points);
    }

    fn notify_polygons(&mut self) {
        self.listener.polygons_changed(&self.polygons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Notification, RecordingListener, triangle, square};

    #[test]
    fn test_add_move_remove_point_notifies() {
        let (listener, log) = RecordingListener::new();
        let mut model = GeometryModel::default();
        model.set_listener(Box::new(listener));

        let id = model.add_point(LatLng::new(10.0, 20.0));
        assert_eq!(model.points().len(), 1);

        model.move_point(&id, LatLng::new(11.0, 21.0)).unwrap();
        assert_eq!(model.point(&id).unwrap().position(), LatLng::new(11.0, 21.0));

        assert!(model.remove_point(&id).unwrap().is_empty());

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert!(matches!(&log[0], Notification::Points(p) if p.len() == 1));
        assert!(matches!(&log[2], Notification::Points(p) if p.is_empty()));
    }

    #[test]
    fn test_unknown_ids_are_refused() {
        let mut model = GeometryModel::default();
        let ghost = GeometryId::from("ghost");
        assert_eq!(
            model.remove_point(&ghost).unwrap_err(),
            EditError::UnknownPoint(ghost.clone())
        );
        assert_eq!(
            model.remove_polygon(&ghost).unwrap_err(),
            EditError::UnknownPolygon(ghost)
        );
    }

    #[test]
    fn test_remove_vertex_respects_floor() {
        let (listener, log) = RecordingListener::new();
        let mut model = GeometryModel::new(Vec::new(), vec![triangle("t")]);
        model.set_listener(Box::new(listener));
        let id = GeometryId::from("t");

        let err = model.remove_vertex(&id, 0).unwrap_err();
        assert_eq!(err, EditError::VertexCountViolation { polygon: Some(id.clone()) });
        assert_eq!(model.polygon(&id).unwrap().vertex_count(), 3);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_remove_then_insert_vertex_round_trip() {
        let mut model = GeometryModel::new(Vec::new(), vec![square("s")]);
        let id = GeometryId::from("s");
        let original = model.polygon(&id).unwrap().coordinates.clone();

        for i in 0..original.len() {
            model.remove_vertex(&id, i).unwrap();
            model.insert_vertex(&id, i, original[i]).unwrap();
            assert_eq!(model.polygon(&id).unwrap().coordinates, original);
        }
    }

    #[test]
    fn test_move_vertex_out_of_range() {
        let mut model = GeometryModel::new(Vec::new(), vec![triangle("t")]);
        let err = model
            .move_vertex(&GeometryId::from("t"), 7, LatLng::default())
            .unwrap_err();
        assert_eq!(err, EditError::VertexOutOfRange { index: 7, len: 3 });
    }

    #[test]
    fn test_add_polygon_requires_three_vertices() {
        let mut model = GeometryModel::default();
        let err = model
            .add_polygon(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0)])
            .unwrap_err();
        assert_eq!(err, EditError::VertexCountViolation { polygon: None });
        assert!(model.polygons().is_empty());
    }

    #[test]
    fn test_invalid_initial_polygons_are_dropped() {
        let short = Polygon::new("short", vec![LatLng::new(0.0, 0.0)]);
        let model = GeometryModel::new(Vec::new(), vec![short, triangle("t")]);
        assert_eq!(model.polygons().len(), 1);
        assert_eq!(model.polygons()[0].id, GeometryId::from("t"));
    }

    #[test]
    fn test_ids_from_text_or_integer() {
        let json = r#"[
            { "id": 1700000000000, "lat": -2.9, "lng": -41.7 },
            { "id": "7f1c", "lat": 0, "lng": 0 }
        ]"#;
        let points: Vec<Point> = serde_json::from_str(json).unwrap();
        assert_eq!(points[0].id.as_str(), "1700000000000");
        assert_eq!(points[1].id.as_str(), "7f1c");

        let out = serde_json::to_value(&points[0]).unwrap();
        assert_eq!(out["id"], "1700000000000");
    }

    #[test]
    fn test_polygon_json_shape() {
        let polygon: Polygon =
            serde_json::from_str(r#"{ "id": "p", "coordinates": [[0, 0], [0, 1], [1, 1]] }"#)
                .unwrap();
        assert_eq!(polygon.coordinates[2], LatLng::new(1.0, 1.0));
    }

    #[test]
    fn test_callbacks_listener() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut model = GeometryModel::default();
        model.set_listener(Box::new(
            ChangeCallbacks::new().on_points_change(move |_| counter.set(counter.get() + 1)),
        ));
        model.add_point(LatLng::new(1.0, 1.0));
        model.add_point(LatLng::new(2.0, 2.0));
        assert_eq!(calls.get(), 2);
    }
}
