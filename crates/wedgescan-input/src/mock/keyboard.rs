//! Mock keyboard implementation for testing and development.
//!
//! This module provides a simulated key-event source that can be driven
//! programmatically, standing in for the platform's global key hook in
//! tests and hardware-free development.

use crate::{
    Result,
    error::InputError,
    event::{KeyInput, RawKeyEvent},
    traits::{KeyEventSource, SourceInfo},
};
use tokio::sync::mpsc;
use wedgescan_core::constants::MOCK_CHANNEL_CAPACITY;

/// Mock keyboard for testing and development.
///
/// Simulates a keyboard (or a wedge scanner pretending to be one) by
/// receiving events through an internal channel. Tests send events
/// programmatically using a [`MockKeyboardHandle`]; timing between events
/// is entirely under the test's control, which is what the framing tests
/// need.
///
/// # Examples
///
/// ```
/// use wedgescan_input::{KeyEventSource, MockKeyboard};
///
/// #[tokio::main]
/// async fn main() -> wedgescan_input::Result<()> {
///     let (mut keyboard, handle) = MockKeyboard::new();
///
///     // Simulate a scanner burst
///     tokio::spawn(async move {
///         handle.type_str("A1234567").await.unwrap();
///         handle.press_enter().await.unwrap();
///     });
///
///     let first = keyboard.next_event().await?;
///     assert_eq!(first.input.as_char(), Some('A'));
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockKeyboard {
    /// Channel receiver for simulated events
    event_rx: mpsc::Receiver<RawKeyEvent>,

    /// Device name
    name: String,
}

impl MockKeyboard {
    /// Create a new mock keyboard with the default name.
    ///
    /// Returns a tuple of (MockKeyboard, MockKeyboardHandle) where the
    /// handle is used to inject events.
    pub fn new() -> (Self, MockKeyboardHandle) {
        Self::with_name("Mock Keyboard".to_string())
    }

    /// Create a new mock keyboard with a custom name.
    pub fn with_name(name: String) -> (Self, MockKeyboardHandle) {
        let (event_tx, event_rx) = mpsc::channel(MOCK_CHANNEL_CAPACITY);

        let keyboard = Self {
            event_rx,
            name: name.clone(),
        };

        let handle = MockKeyboardHandle { event_tx, name };

        (keyboard, handle)
    }
}

impl Default for MockKeyboard {
    fn default() -> Self {
        Self::new().0
    }
}

impl KeyEventSource for MockKeyboard {
    async fn next_event(&mut self) -> Result<RawKeyEvent> {
        self.event_rx
            .recv()
            .await
            .ok_or_else(|| InputError::closed(self.name.clone()))
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo::new(self.name.clone(), "mock")
    }
}

/// Handle for driving a mock keyboard.
///
/// Cloneable; all clones feed the same keyboard.
///
/// # Examples
///
/// ```
/// use wedgescan_input::{KeyModifiers, MockKeyboard, RawKeyEvent};
///
/// #[tokio::main]
/// async fn main() -> wedgescan_input::Result<()> {
///     let (_keyboard, handle) = MockKeyboard::new();
///
///     // Plain characters and terminators
///     handle.press_char('7').await?;
///     handle.press_tab().await?;
///
///     // Full control over modifier/target state
///     handle
///         .send_event(
///             RawKeyEvent::char('c').with_modifiers(KeyModifiers {
///                 ctrl: true,
///                 ..KeyModifiers::NONE
///             }),
///         )
///         .await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MockKeyboardHandle {
    /// Channel sender for simulated events
    event_tx: mpsc::Sender<RawKeyEvent>,

    /// Device name
    name: String,
}

impl MockKeyboardHandle {
    /// Send a fully specified event.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyboard has been dropped and the channel
    /// is closed.
    pub async fn send_event(&self, event: RawKeyEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| InputError::closed(self.name.clone()))
    }

    /// Send a plain printable character.
    pub async fn press_char(&self, c: char) -> Result<()> {
        self.send_event(RawKeyEvent::char(c)).await
    }

    /// Send one event per character of `s`.
    ///
    /// Events are delivered back-to-back with no simulated delay; tests
    /// that need inter-key gaps insert them between calls.
    pub async fn type_str(&self, s: &str) -> Result<()> {
        for c in s.chars() {
            self.press_char(c).await?;
        }
        Ok(())
    }

    /// Send the Enter terminator.
    pub async fn press_enter(&self) -> Result<()> {
        self.send_event(RawKeyEvent::enter()).await
    }

    /// Send the Tab terminator.
    pub async fn press_tab(&self) -> Result<()> {
        self.send_event(RawKeyEvent::tab()).await
    }

    /// Send a named non-printable key.
    pub async fn press_other(&self, name: impl Into<String>) -> Result<()> {
        self.send_event(RawKeyEvent::new(KeyInput::Other(name.into())))
            .await
    }

    /// Get the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
