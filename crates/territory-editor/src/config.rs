//! Editor configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::editor::Keymap;
use crate::geometry::LatLng;

/// Error loading or validating an [`EditorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid editor config: {0}")]
    Invalid(String),
}

/// Initial map view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Center used when there is no geometry to center on.
    pub default_center: LatLng,
    /// Zoom when the session starts with at least one point or polygon.
    pub zoom_with_geometry: u8,
    /// Zoom when the session starts empty.
    pub zoom_empty: u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            // Parnaíba, Piauí
            default_center: LatLng::new(-2.9048, -41.7767),
            zoom_with_geometry: 13,
            zoom_empty: 12,
        }
    }
}

/// Settings for one editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub keymap: Keymap,
    pub view: ViewConfig,
    /// Hit-test radius for handles and markers, in degrees.
    pub handle_tolerance: f64,
    /// Maximum number of undo entries kept; the oldest are dropped first.
    pub history_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            keymap: Keymap::default(),
            view: ViewConfig::default(),
            handle_tolerance: 0.0001,
            history_limit: 256,
        }
    }
}

impl EditorConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid(
                "history_limit must be at least 1".to_string(),
            ));
        }
        if !self.handle_tolerance.is_finite() || self.handle_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "handle_tolerance must be a positive number, got {}",
                self.handle_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{KeyCommand, KeyInput};

    #[test]
    fn test_empty_json_is_default() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "view": { "default_center": [-23.55, -46.63] },
            "keymap": { "cancel": ["Ctrl+G"] },
            "history_limit": 16
        }"#;
        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.view.default_center, LatLng::new(-23.55, -46.63));
        assert_eq!(config.view.zoom_with_geometry, 13);
        assert_eq!(config.history_limit, 16);
        assert_eq!(
            config.keymap.resolve(&KeyInput::new("g").with_ctrl()),
            Some(KeyCommand::Cancel)
        );
    }

    #[test]
    fn test_validation() {
        let err = EditorConfig::from_json(r#"{ "history_limit": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EditorConfig::from_json(r#"{ "handle_tolerance": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EditorConfig::from_json(r#"{ "keymap": { "undo": ["Super+Z"] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EditorConfig::default();
        let json = config.to_json().unwrap();
        let loaded = EditorConfig::from_json(&json).unwrap();
        assert_eq!(loaded.keymap, config.keymap);
        assert_eq!(loaded.history_limit, config.history_limit);
        assert!((loaded.handle_tolerance - config.handle_tolerance).abs() < 1e-12);
        assert!((loaded.view.default_center.lat - config.view.default_center.lat).abs() < 1e-9);
    }
}
