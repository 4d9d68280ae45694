//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::LatLng;
use crate::model::{ChangeListener, Point, Polygon};

/// One change notification as seen by a listener.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Points(Vec<Point>),
    Polygons(Vec<Polygon>),
}

pub type NotificationLog = Rc<RefCell<Vec<Notification>>>;

/// Listener that records every notification into a shared log.
pub struct RecordingListener {
    log: NotificationLog,
}

impl RecordingListener {
    pub fn new() -> (Self, NotificationLog) {
        let log = NotificationLog::default();
        (Self { log: log.clone() }, log)
    }
}

impl ChangeListener for RecordingListener {
    fn points_changed(&mut self, points: &[Point]) {
        self.log.borrow_mut().push(Notification::Points(points.to_vec()));
    }

    fn polygons_changed(&mut self, polygons: &[Polygon]) {
        self.log
            .borrow_mut()
            .push(Notification::Polygons(polygons.to_vec()));
    }
}

pub fn ll(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

pub fn triangle(id: &str) -> Polygon {
    Polygon::new(id, vec![ll(0.0, 0.0), ll(0.0, 1.0), ll(1.0, 1.0)])
}

pub fn square(id: &str) -> Polygon {
    Polygon::new(
        id,
        vec![ll(0.0, 0.0), ll(0.0, 2.0), ll(2.0, 2.0), ll(2.0, 0.0)],
    )
}
