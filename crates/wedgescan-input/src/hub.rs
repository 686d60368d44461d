//! Process-wide key-event fan-out.
//!
//! A process (or browser tab, in the original deployment environment of
//! this subsystem) has exactly one global key hook. [`KeyEventHub`] wraps
//! it: the platform layer publishes every raw key-down event through a
//! [`KeyEventPublisher`], and each reader takes its own [`KeySubscription`]
//! with an explicit lifecycle — subscribe when the reader attaches, drop
//! when it is destroyed.
//!
//! # Concurrent Readers Are a Hazard, Not a Feature
//!
//! The hub is a broadcast channel: every subscription observes **every**
//! event. Two timing-based readers attached at the same time will both
//! accumulate every keystroke and both emit a frame for every scan. The hub
//! does not arbitrate between them — there is no "active reader" token —
//! so running more than one timing-based reader concurrently is a design
//! hazard the application must avoid. Coexisting configurations (e.g. an
//! RFID reader and a barcode reader with different framing rules) are only
//! safe when at most one of them is attached at a time.
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
//!
//!     let mut sub_a = hub.subscribe();
//!     let mut sub_b = hub.subscribe();
//!
//!     publisher.publish(RawKeyEvent::char('X'));
//!
//!     // Both subscriptions see the same event: this is the documented
//!     // two-reader hazard.
//!     assert_eq!(sub_a.next_event().await?.input.as_char(), Some('X'));
//!     assert_eq!(sub_b.next_event().await?.input.as_char(), Some('X'));
//!     Ok(())
//! }
//! ```

use crate::error::{InputError, Result};
use crate::event::RawKeyEvent;
use crate::traits::{KeyEventSource, SourceInfo};
use tokio::sync::broadcast;
use wedgescan_core::constants::KEY_EVENT_FANOUT_CAPACITY;

/// Process-wide key-event hub.
///
/// Owns the broadcast channel between the platform input hook and any
/// number of reader subscriptions. Dropping the hub (and every publisher
/// cloned from it) closes all subscriptions.
#[derive(Debug)]
pub struct KeyEventHub {
    tx: broadcast::Sender<RawKeyEvent>,
}

impl KeyEventHub {
    /// Create a hub with the default fan-out capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(KEY_EVENT_FANOUT_CAPACITY)
    }

    /// Create a hub with a custom fan-out capacity.
    ///
    /// A subscriber that falls more than `capacity` events behind starts
    /// losing the oldest events and sees [`InputError::Lagged`] on its next
    /// read.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Get a publisher for the platform layer to feed events through.
    ///
    /// Publishers are cheap to clone; all of them feed the same stream.
    #[must_use]
    pub fn publisher(&self) -> KeyEventPublisher {
        KeyEventPublisher {
            tx: self.tx.clone(),
        }
    }

    /// Take a new subscription.
    ///
    /// The subscription sees every event published after this call. Drop it
    /// to unsubscribe.
    #[must_use]
    pub fn subscribe(&self) -> KeySubscription {
        KeySubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of currently live subscriptions.
    ///
    /// Applications can use this to detect the two-concurrent-readers
    /// hazard before attaching another timing-based reader.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for KeyEventHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of the hub, held by the platform input hook.
#[derive(Debug, Clone)]
pub struct KeyEventPublisher {
    tx: broadcast::Sender<RawKeyEvent>,
}

impl KeyEventPublisher {
    /// Publish one raw key event to every live subscription.
    ///
    /// Returns the number of subscriptions that received the event. Zero is
    /// not an error: key events with no reader attached are simply dropped,
    /// exactly as a global hook behaves with no listener registered.
    pub fn publish(&self, event: RawKeyEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

/// One reader's view of the process-wide event stream.
#[derive(Debug)]
pub struct KeySubscription {
    rx: broadcast::Receiver<RawKeyEvent>,
}

impl KeyEventSource for KeySubscription {
    async fn next_event(&mut self) -> Result<RawKeyEvent> {
        match self.rx.recv().await {
            Ok(event) => Ok(event),
            Err(broadcast::error::RecvError::Closed) => Err(InputError::closed("key event hub")),
            Err(broadcast::error::RecvError::Lagged(missed)) => Err(InputError::lagged(missed)),
        }
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo::new("key event hub subscription", "hub")
    }
}
