//! Latitude/longitude primitives and pure geometry operations.
//!
//! Every function here is total and side-effect free: inputs are borrowed,
//! results are freshly allocated.

use serde::{Deserialize, Serialize};

/// Minimum vertex count of any committed or in-progress polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A latitude/longitude pair.
///
/// Serialized as a `[lat, lng]` array, which is how polygon rings are stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Squared planar distance in degrees. Only used for nearest-handle ranking.
    pub fn distance_sq(self, other: LatLng) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        dlat * dlat + dlng * dlng
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned rectangle in lat/lng space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Degenerate bounds covering a single coordinate.
    pub fn from_coord(coord: LatLng) -> Self {
        Self {
            south_west: coord,
            north_east: coord,
        }
    }

    /// Grows the rectangle to include `coord`.
    pub fn extend(&mut self, coord: LatLng) {
        self.south_west.lat = self.south_west.lat.min(coord.lat);
        self.south_west.lng = self.south_west.lng.min(coord.lng);
        self.north_east.lat = self.north_east.lat.max(coord.lat);
        self.north_east.lng = self.north_east.lng.max(coord.lng);
    }

    pub fn contains(&self, coord: LatLng) -> bool {
        coord.lat >= self.south_west.lat
            && coord.lat <= self.north_east.lat
            && coord.lng >= self.south_west.lng
            && coord.lng <= self.north_east.lng
    }
}

/// Arithmetic mean of two coordinates.
pub fn midpoint(a: LatLng, b: LatLng) -> LatLng {
    LatLng::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

/// Midpoints of every edge of a closed ring, including the last-to-first edge.
///
/// Midpoint `i` sits between vertex `i` and vertex `(i + 1) % len`.
pub fn edge_midpoints(coordinates: &[LatLng]) -> Vec<LatLng> {
    let len = coordinates.len();
    (0..len)
        .map(|i| midpoint(coordinates[i], coordinates[(i + 1) % len]))
        .collect()
}

/// Position a value lands at when inserted after `anchor` in a sequence of `len`.
pub fn insertion_index(len: usize, anchor: Option<usize>) -> usize {
    match anchor {
        Some(index) => (index + 1).min(len),
        None => len,
    }
}

/// Returns a copy of `sequence` with `value` inserted immediately after `anchor`,
/// or appended when no anchor is given.
pub fn insert_at<T: Clone>(sequence: &[T], anchor: Option<usize>, value: T) -> Vec<T> {
    place_at(sequence, insertion_index(sequence.len(), anchor), value)
}

/// Returns a copy of `sequence` with `value` placed at `position` (clamped to the end).
pub fn place_at<T: Clone>(sequence: &[T], position: usize, value: T) -> Vec<T> {
    let mut out = Vec::with_capacity(sequence.len() + 1);
    out.extend_from_slice(sequence);
    out.insert(position.min(sequence.len()), value);
    out
}

/// Returns a copy of `sequence` without the element at `index`.
///
/// An out-of-range index yields an unchanged copy.
pub fn remove_at<T: Clone>(sequence: &[T], index: usize) -> Vec<T> {
    let mut out = sequence.to_vec();
    if index < out.len() {
        out.remove(index);
    }
    out
}

/// Vertex average of a ring. `None` for an empty ring.
pub fn centroid(coordinates: &[LatLng]) -> Option<LatLng> {
    if coordinates.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = coordinates.len() as f64;
    let (lat, lng) = coordinates
        .iter()
        .fold((0.0, 0.0), |(lat, lng), c| (lat + c.lat, lng + c.lng));
    Some(LatLng::new(lat / n, lng / n))
}

/// Minimal rectangle enclosing every coordinate. `None` when there are none.
pub fn bounds_of<I>(coordinates: I) -> Option<Bounds>
where
    I: IntoIterator<Item = LatLng>,
{
    let mut iter = coordinates.into_iter();
    let mut bounds = Bounds::from_coord(iter.next()?);
    for coord in iter {
        bounds.extend(coord);
    }
    Some(bounds)
}

/// Even-odd ray casting test of `point` against a closed ring.
pub fn ring_contains(coordinates: &[LatLng], point: LatLng) -> bool {
    let len = coordinates.len();
    if len < MIN_POLYGON_VERTICES {
        return false;
    }
    let mut inside = false;
    let mut j = len - 1;
    for i in 0..len {
        let a = coordinates[i];
        let b = coordinates[j];
        if (a.lng > point.lng) != (b.lng > point.lng) {
            let lat_at = (b.lat - a.lat) * (point.lng - a.lng) / (b.lng - a.lng) + a.lat;
            if point.lat < lat_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
