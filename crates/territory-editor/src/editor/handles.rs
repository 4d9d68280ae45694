//! Editing handles and hit testing.

use crate::geometry::{LatLng, edge_midpoints};
use crate::model::Polygon;

use super::Target;

/// A clickable/draggable affordance the host should draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub target: Target,
    pub position: LatLng,
}

impl Handle {
    pub fn is_vertex(&self) -> bool {
        matches!(
            self.target,
            Target::Vertex { .. } | Target::DraftVertex { .. }
        )
    }
}

/// Vertex handles followed by edge-midpoint handles of a polygon.
pub fn polygon_handles(polygon: &Polygon) -> Vec<Handle> {
    let vertices = polygon
        .coordinates
        .iter()
        .enumerate()
        .map(|(index, &position)| Handle {
            target: Target::Vertex {
                polygon: polygon.id.clone(),
                index,
            },
            position,
        });

    let midpoints = edge_midpoints(&polygon.coordinates)
        .into_iter()
        .enumerate()
        .map(|(edge, position)| Handle {
            target: Target::Midpoint {
                polygon: polygon.id.clone(),
                edge,
            },
            position,
        });

    vertices.chain(midpoints).collect()
}

/// Vertex handles of the in-progress polygon.
pub fn draft_handles(draft: &[LatLng]) -> Vec<Handle> {
    draft
        .iter()
        .enumerate()
        .map(|(index, &position)| Handle {
            target: Target::DraftVertex { index },
            position,
        })
        .collect()
}

/// Closest handle within `tolerance` of `at`.
///
/// Vertex handles win over midpoint handles regardless of distance, the way
/// vertex markers are stacked above midpoint markers on the map.
pub fn hit_test(handles: &[Handle], at: LatLng, tolerance: f64) -> Option<&Handle> {
    let limit = tolerance * tolerance;
    let nearest = |vertices: bool| {
        handles
            .iter()
            .filter(|h| h.is_vertex() == vertices)
            .map(|h| (h, h.position.distance_sq(at)))
            .filter(|(_, d)| *d <= limit)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(h, _)| h)
    };
    nearest(true).or_else(|| nearest(false))
}
