//! Key-event source abstraction for the wedgescan input-framing subsystem.
//!
//! A scanner operating in keyboard-wedge mode is indistinguishable from a
//! human at the device level: both produce a stream of key events. This
//! crate owns that stream. It defines the raw event model ([`RawKeyEvent`]),
//! the source trait readers consume ([`KeyEventSource`]), the process-wide
//! fan-out hub ([`KeyEventHub`]), and a scriptable mock keyboard for
//! development and testing without physical devices.
//!
//! # Design Philosophy
//!
//! - **Injectable, not ambient**: the platform's global key hook is wrapped
//!   in an explicit source with a subscribe/unsubscribe contract. A reader
//!   holds its own subscription handle; there is no implicit global wiring.
//! - **Async-first**: sources expose native `async fn` methods (Edition 2024
//!   RPITIT), so no `async_trait` macro is needed.
//! - **Mock-driven development**: every source has a controllable mock,
//!   following the same paired `(device, handle)` pattern as the rest of the
//!   workspace.
//!
//! # One Stream, Many Readers
//!
//! The underlying event stream is process-wide: only one global key hook can
//! exist per process. [`KeyEventHub`] fans it out over a broadcast channel,
//! so every subscription observes **every** event. Attaching two
//! timing-based readers at once therefore makes both consume every
//! keystroke; see the hub documentation for why that is a hazard and not a
//! multiplexing mode.
//!
//! # Examples
//!
//! ```
//! use wedgescan_input::{KeyEventHub, KeyEventSource, RawKeyEvent};
//!
//! #[tokio::main]
//! async fn main() -> wedgescan_input::Result<()> {
//!     let hub = KeyEventHub::new();
//!     let publisher = hub.publisher();
//!     let mut subscription = hub.subscribe();
//!
//!     publisher.publish(RawKeyEvent::char('4'));
//!
//!     let event = subscription.next_event().await?;
//!     assert_eq!(event.input.as_char(), Some('4'));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod event;
pub mod hub;
pub mod mock;
pub mod sources;
pub mod traits;

// Re-export commonly used types for convenience
pub use error::{InputError, Result};
pub use event::{KeyInput, KeyModifiers, RawKeyEvent};
pub use hub::{KeyEventHub, KeyEventPublisher, KeySubscription};
pub use mock::{MockKeyboard, MockKeyboardHandle};
pub use sources::AnyKeySource;
pub use traits::{KeyEventSource, SourceInfo};
