//! Enum wrapper for key-event source dispatch.
//!
//! Native `async fn` in traits (RPITIT, Edition 2024) is not object-safe,
//! so `Box<dyn KeyEventSource>` is unavailable. This enum provides concrete
//! dispatch over the source implementations at zero cost, the same pattern
//! used for every device family in this workspace.
//!
//! # Examples
//!
//! ```
//! use wedgescan_input::{AnyKeySource, KeyEventHub};
//!
//! let hub = KeyEventHub::new();
//! let source = AnyKeySource::Hub(hub.subscribe());
//! ```

use crate::error::Result;
use crate::event::RawKeyEvent;
use crate::hub::KeySubscription;
use crate::mock::MockKeyboard;
use crate::traits::{KeyEventSource, SourceInfo};

/// Enum wrapper for key-event source dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyKeySource {
    /// A subscription to the process-wide hub.
    Hub(KeySubscription),

    /// A mock keyboard for development and testing.
    Mock(MockKeyboard),
}

impl KeyEventSource for AnyKeySource {
    async fn next_event(&mut self) -> Result<RawKeyEvent> {
        match self {
            Self::Hub(source) => source.next_event().await,
            Self::Mock(source) => source.next_event().await,
        }
    }

    fn source_info(&self) -> SourceInfo {
        match self {
            Self::Hub(source) => source.source_info(),
            Self::Mock(source) => source.source_info(),
        }
    }
}

impl From<KeySubscription> for AnyKeySource {
    fn from(sub: KeySubscription) -> Self {
        Self::Hub(sub)
    }
}

impl From<MockKeyboard> for AnyKeySource {
    fn from(keyboard: MockKeyboard) -> Self {
        Self::Mock(keyboard)
    }
}
