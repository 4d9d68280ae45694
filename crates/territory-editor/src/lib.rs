//! Territory Editor Core
//!
//! Interactive point and polygon editing for territory maps. The host map
//! widget renders and forwards gestures; this crate owns the geometry, the
//! drag/click arbitration, the undo history, the mode state machine and the
//! keyboard commands.
//!
//! - `geometry`: coordinates, bounds and the pure sequence operations
//! - `model`: committed points and polygons with change notification
//! - `editor`: the editing session driven by gestures and keys

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod model;
pub mod overlay;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, EditorConfig, ViewConfig};
pub use editor::{
    EditFocus, EditorMode, EditorSession, Effect, GestureEvent, Handle, KeyCommand, KeyInput,
    Keymap, Outcome, Target,
};
pub use error::EditError;
pub use geometry::{Bounds, LatLng, MIN_POLYGON_VERTICES};
pub use model::{ChangeCallbacks, ChangeListener, GeometryId, GeometryModel, Point, Polygon};
pub use overlay::{MapKind, ReferenceOverlay};
pub use store::{ChangeStore, PendingChanges};
pub use view::MapView;
