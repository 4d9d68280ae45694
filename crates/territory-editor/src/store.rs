//! Shared sink for change notifications.
//!
//! The session pushes full collections into the store; the persistence side
//! drains them whenever it is ready. Only the latest collection of each kind
//! is kept, so a slow consumer never replays stale intermediate states.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{ChangeListener, Point, Polygon};

/// Collections waiting to be persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingChanges {
    pub points: Option<Vec<Point>>,
    pub polygons: Option<Vec<Polygon>>,
}

impl PendingChanges {
    pub fn is_empty(&self) -> bool {
        self.points.is_none() && self.polygons.is_none()
    }
}

/// Cloneable handle; every clone sees the same pending state.
#[derive(Debug, Clone, Default)]
pub struct ChangeStore {
    inner: Arc<RwLock<ChangeStoreInner>>,
}

#[derive(Debug, Default)]
struct ChangeStoreInner {
    pending: PendingChanges,
    version: u64,
}

impl ChangeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every notification, for change detection.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.read().pending.is_empty()
    }

    /// Takes everything pending, leaving the store empty.
    pub fn take_pending(&self) -> PendingChanges {
        std::mem::take(&mut self.inner.write().pending)
    }
}

impl ChangeListener for ChangeStore {
    fn points_changed(&mut self, points: &[Point]) {
        let mut inner = self.inner.write();
        inner.pending.points = Some(points.to_vec());
        inner.version += 1;
    }

    fn polygons_changed(&mut self, polygons: &[Polygon]) {
        let mut inner = self.inner.write();
        inner.pending.polygons = Some(polygons.to_vec());
        inner.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLng;
    use crate::model::GeometryModel;
    use crate::test_utils::triangle;

    #[test]
    fn test_keeps_latest_and_drains() {
        let store = ChangeStore::new();
        let mut model = GeometryModel::default();
        model.set_listener(Box::new(store.clone()));

        model.add_point(LatLng::new(1.0, 1.0));
        model.add_point(LatLng::new(2.0, 2.0));
        assert_eq!(store.version(), 2);
        assert!(store.has_pending());

        let pending = store.take_pending();
        assert_eq!(pending.points.map(|p| p.len()), Some(2));
        assert!(pending.polygons.is_none());
        assert!(!store.has_pending());
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_handles_share_state_across_threads() {
        let store = ChangeStore::new();
        let mut writer = store.clone();
        std::thread::spawn(move || writer.polygons_changed(&[triangle("t")]))
            .join()
            .unwrap();
        assert_eq!(store.take_pending().polygons.unwrap()[0], triangle("t"));
    }
}
