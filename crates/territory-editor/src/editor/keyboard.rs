//! Keyboard command layer.
//!
//! Maps raw key presses to editor commands. Presses that originate in a
//! text-entry field never reach the editor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where keyboard focus was when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFocus {
    /// The map or anything else that is not a text field.
    #[default]
    Map,
    /// An input, textarea or select element.
    TextEntry,
}

impl InputFocus {
    /// Classifies a focused element by its tag name.
    pub fn from_tag_name(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "input" | "textarea" | "select" => Self::TextEntry,
            _ => Self::Map,
        }
    }
}

/// A key press as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyInput {
    /// Key name as the browser reports it (`"z"`, `"Escape"`, `"Delete"`).
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub focus: InputFocus,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn in_text_entry(mut self) -> Self {
        self.focus = InputFocus::TextEntry;
        self
    }
}

/// Editor command a key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Undo,
    Cancel,
    Delete,
}

/// Error parsing a key chord string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyChordError {
    #[error("empty key chord")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
}

/// A key plus the exact modifier set that must accompany it.
///
/// `Cmd`/`Meta` are folded into `ctrl` so one binding serves macOS too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyChord {
    key: String,
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl KeyChord {
    pub fn plain(key: &str) -> Self {
        Self {
            key: normalize_key(key),
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn matches(&self, input: &KeyInput) -> bool {
        self.key == normalize_key(&input.key)
            && self.ctrl == (input.ctrl || input.meta)
            && self.shift == input.shift
            && self.alt == input.alt
    }
}

fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

impl FromStr for KeyChord {
    type Err = KeyChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = match parts.pop() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(KeyChordError::Empty),
        };

        let mut chord = Self::plain(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "meta" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                other => return Err(KeyChordError::UnknownModifier(other.to_string())),
            }
        }
        Ok(chord)
    }
}

impl TryFrom<String> for KeyChord {
    type Error = KeyChordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyChord> for String {
    fn from(chord: KeyChord) -> Self {
        chord.to_string()
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        f.write_str(&self.key)
    }
}

/// Bindings for the three editor commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub undo: Vec<KeyChord>,
    pub cancel: Vec<KeyChord>,
    pub delete: Vec<KeyChord>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            undo: vec![KeyChord::ctrl("z")],
            cancel: vec![KeyChord::plain("Escape")],
            delete: vec![KeyChord::plain("Delete"), KeyChord::plain("Backspace")],
        }
    }
}

impl Keymap {
    /// Resolves a key press. Presses inside a text field resolve to nothing.
    pub fn resolve(&self, input: &KeyInput) -> Option<KeyCommand> {
        if input.focus == InputFocus::TextEntry {
            return None;
        }

        let bound = |chords: &[KeyChord]| chords.iter().any(|c| c.matches(input));
        if bound(&self.undo) {
            Some(KeyCommand::Undo)
        } else if bound(&self.cancel) {
            Some(KeyCommand::Cancel)
        } else if bound(&self.delete) {
            Some(KeyCommand::Delete)
        } else {
            None
        }
    }
}
