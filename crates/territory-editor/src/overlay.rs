//! Read-only reference layer from a parent map.
//!
//! A sub-map is drawn on top of its congregation or group so the coordinator
//! can line the new boundaries up. The overlay is rendered but never edited
//! and never reported back through change notifications.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, LatLng, bounds_of};
use crate::model::{Point, Polygon};

/// Kind of territory map, as stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapKind {
    #[default]
    #[serde(rename = "congregacao")]
    Congregation,
    #[serde(rename = "grupo")]
    Group,
    #[serde(rename = "submapa")]
    SubMap,
}

impl MapKind {
    /// Stroke color the map list and overlay use for this kind.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Congregation => "#3b82f6",
            Self::Group => "#10b981",
            Self::SubMap => "#f59e0b",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Congregation => "congregacao",
            Self::Group => "grupo",
            Self::SubMap => "submapa",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry of a parent map, shown for alignment only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceOverlay {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: MapKind,
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub polygons: Vec<Polygon>,
}

impl ReferenceOverlay {
    /// Every coordinate of every overlay point and polygon.
    pub fn coordinates(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.points.iter().map(Point::position).chain(
            self.polygons
                .iter()
                .flat_map(|p| p.coordinates.iter().copied()),
        )
    }

    pub fn bounds(&self) -> Option<Bounds> {
        bounds_of(self.coordinates())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.polygons.is_empty()
    }
}
