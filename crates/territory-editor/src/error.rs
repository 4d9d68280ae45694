//! Error taxonomy for geometry edits.
//!
//! None of these are fatal. The editor session reports them through
//! [`Outcome::Refused`](crate::editor::Outcome::Refused) and leaves the
//! geometry untouched.

use crate::geometry::MIN_POLYGON_VERTICES;
use crate::model::GeometryId;

/// Reason an edit was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    /// Removal would leave a polygon (or the in-progress polygon when `None`)
    /// with fewer than three vertices.
    #[error(
        "polygon {label} cannot drop below {min} vertices",
        label = polygon_label(.polygon),
        min = MIN_POLYGON_VERTICES
    )]
    VertexCountViolation { polygon: Option<GeometryId> },
    /// Delete or undo issued with nothing selected and no history.
    #[error("nothing is selected")]
    NoActiveFocus,
    /// Finalize requested before the in-progress polygon has three vertices.
    #[error("cannot finalize a polygon with {vertices} vertices")]
    InvalidFinalize { vertices: usize },
    #[error("unknown point '{0}'")]
    UnknownPoint(GeometryId),
    #[error("unknown polygon '{0}'")]
    UnknownPolygon(GeometryId),
    #[error("vertex {index} out of range for a polygon with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
}

fn polygon_label(polygon: &Option<GeometryId>) -> String {
    match polygon {
        Some(id) => format!("'{id}'"),
        None => "in progress".to_string(),
    }
}

pub type Result<T, E = EditError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EditError::VertexCountViolation {
            polygon: Some(GeometryId::from("p1")),
        };
        assert_eq!(err.to_string(), "polygon 'p1' cannot drop below 3 vertices");

        let err = EditError::VertexCountViolation { polygon: None };
        assert_eq!(err.to_string(), "polygon in progress cannot drop below 3 vertices");

        let err = EditError::InvalidFinalize { vertices: 2 };
        assert_eq!(err.to_string(), "cannot finalize a polygon with 2 vertices");
    }
}
