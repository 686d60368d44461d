//! Raw key-event model.
//!
//! Events at this layer are deliberately dumb: a key, its modifier state,
//! and whether the platform says the event targeted an editable text
//! surface. All framing intelligence lives downstream in the reader.

use crate::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key, as delivered by the platform input hook.
///
/// Only the distinctions the framing logic cares about are modeled:
/// printable characters accumulate, Enter/Tab terminate a frame, and
/// everything else is carried as an opaque named key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum KeyInput {
    /// A printable character key.
    Char(char),

    /// Enter/Return key. Terminates a frame.
    Enter,

    /// Tab key. Terminates a frame (common scanner suffix configuration).
    Tab,

    /// Any other named key (e.g. "Shift", "F5", "ArrowLeft"). Ignored by
    /// the framing logic.
    Other(String),
}

impl KeyInput {
    /// Create a printable character input.
    ///
    /// # Errors
    ///
    /// Returns an error if the character is a control character; control
    /// characters are never printable key values and indicate a broken
    /// platform mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use wedgescan_input::KeyInput;
    ///
    /// let input = KeyInput::printable('7').unwrap();
    /// assert_eq!(input.as_char(), Some('7'));
    ///
    /// assert!(KeyInput::printable('\u{0008}').is_err());
    /// ```
    pub fn printable(c: char) -> Result<Self> {
        if c.is_control() {
            return Err(InputError::invalid_data(format!(
                "Control character {:?} is not a printable key",
                c
            )));
        }
        Ok(Self::Char(c))
    }

    /// Check if this input is a printable character.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Get the character value if this is a printable input.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Check if this input terminates a frame (Enter or Tab).
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        matches!(self, Self::Enter | Self::Tab)
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::Enter => write!(f, "Enter"),
            Self::Tab => write!(f, "Tab"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Modifier state carried by a key event.
///
/// Events with any modifier held are chord shortcuts, not scan data, and
/// the framing logic drops them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModifiers {
    /// Control key held.
    pub ctrl: bool,

    /// Alt/Option key held.
    pub alt: bool,

    /// Meta/Command/Windows key held.
    pub meta: bool,
}

impl KeyModifiers {
    /// No modifiers held.
    pub const NONE: KeyModifiers = KeyModifiers {
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns `true` if any modifier is held.
    #[must_use]
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// One raw key-down event, produced by the platform and consumed once.
///
/// # Examples
///
/// ```
/// use wedgescan_input::{KeyInput, KeyModifiers, RawKeyEvent};
///
/// // A plain character key
/// let event = RawKeyEvent::char('A');
/// assert!(!event.modifiers.any());
/// assert!(!event.editable_target);
///
/// // Ctrl+C, as seen by a global hook
/// let chord = RawKeyEvent::new(KeyInput::Char('c'))
///     .with_modifiers(KeyModifiers { ctrl: true, ..KeyModifiers::NONE });
/// assert!(chord.modifiers.any());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawKeyEvent {
    /// The key that went down.
    pub input: KeyInput,

    /// Modifier state at the time of the event.
    pub modifiers: KeyModifiers,

    /// Whether the platform reports the event target as an editable text
    /// surface the user is actively controlling (focused text field,
    /// content-editable region, or equivalent). This is a capability bit
    /// set by the source, not a tag-name check in the core.
    pub editable_target: bool,
}

impl RawKeyEvent {
    /// Create an event with no modifiers, targeting a non-editable surface.
    #[must_use]
    pub fn new(input: KeyInput) -> Self {
        Self {
            input,
            modifiers: KeyModifiers::NONE,
            editable_target: false,
        }
    }

    /// Convenience constructor for a plain printable character.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::new(KeyInput::Char(c))
    }

    /// Convenience constructor for the Enter terminator.
    #[must_use]
    pub fn enter() -> Self {
        Self::new(KeyInput::Enter)
    }

    /// Convenience constructor for the Tab terminator.
    #[must_use]
    pub fn tab() -> Self {
        Self::new(KeyInput::Tab)
    }

    /// Set the modifier state.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the event as targeting an editable text surface.
    #[must_use]
    pub fn with_editable_target(mut self, editable: bool) -> Self {
        self.editable_target = editable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_valid() {
        let input = KeyInput::printable('z').unwrap();
        assert!(input.is_char());
        assert_eq!(input.as_char(), Some('z'));
        assert!(!input.is_terminator());
    }

    #[test]
    fn test_printable_rejects_control() {
        assert!(KeyInput::printable('\n').is_err());
        assert!(KeyInput::printable('\t').is_err());
        assert!(KeyInput::printable('\u{001B}').is_err());
    }

    #[test]
    fn test_terminators() {
        assert!(KeyInput::Enter.is_terminator());
        assert!(KeyInput::Tab.is_terminator());
        assert!(!KeyInput::Char('x').is_terminator());
        assert!(!KeyInput::Other("F5".to_string()).is_terminator());
    }

    #[test]
    fn test_modifiers_any() {
        assert!(!KeyModifiers::NONE.any());
        assert!(
            KeyModifiers {
                meta: true,
                ..KeyModifiers::NONE
            }
            .any()
        );
    }

    #[test]
    fn test_event_builders() {
        let event = RawKeyEvent::char('1')
            .with_modifiers(KeyModifiers {
                alt: true,
                ..KeyModifiers::NONE
            })
            .with_editable_target(true);

        assert_eq!(event.input.as_char(), Some('1'));
        assert!(event.modifiers.any());
        assert!(event.editable_target);
    }

    #[test]
    fn test_key_input_display() {
        assert_eq!(KeyInput::Char('A').to_string(), "A");
        assert_eq!(KeyInput::Enter.to_string(), "Enter");
        assert_eq!(KeyInput::Other("ArrowUp".to_string()).to_string(), "ArrowUp");
    }
}
