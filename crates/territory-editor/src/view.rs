//! Initial map center and zoom for a session.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::geometry::LatLng;
use crate::model::{Point, Polygon};

/// Where the host map should open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

/// Centers on the first point, else the first vertex of the first polygon,
/// else the configured fallback.
pub fn initial_view(points: &[Point], polygons: &[Polygon], config: &ViewConfig) -> MapView {
    let anchor = points.first().map(Point::position).or_else(|| {
        polygons
            .first()
            .and_then(|polygon| polygon.coordinates.first().copied())
    });

    match anchor {
        Some(center) => MapView {
            center,
            zoom: config.zoom_with_geometry,
        },
        None => MapView {
            center: config.default_center,
            zoom: config.zoom_empty,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::square;

    #[test]
    fn test_prefers_first_point() {
        let points = vec![Point::new("a", LatLng::new(5.0, 6.0))];
        let view = initial_view(&points, &[square("s")], &ViewConfig::default());
        assert_eq!(view.center, LatLng::new(5.0, 6.0));
        assert_eq!(view.zoom, 13);
    }

    #[test]
    fn test_falls_back_to_polygon_then_default() {
        let config = ViewConfig::default();
        let view = initial_view(&[], &[square("s")], &config);
        assert_eq!(view.center, LatLng::new(0.0, 0.0));
        assert_eq!(view.zoom, 13);

        let view = initial_view(&[], &[], &config);
        assert_eq!(view.center, config.default_center);
        assert_eq!(view.zoom, 12);
    }
}
