//! Key-event source trait definition.
//!
//! This module defines the contract between the framing reader and whatever
//! produces raw key events: the process-wide hub fed by a platform hook, or
//! a mock keyboard in tests. The trait uses native `async fn` methods
//! (Edition 2024 RPITIT), so it is not object-safe; use generic parameters
//! or the [`AnyKeySource`](crate::sources::AnyKeySource) enum wrapper for
//! dispatch.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::event::RawKeyEvent;

/// Metadata about a key-event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// Source name (e.g. "global hub subscription", "Mock Keyboard").
    pub name: String,

    /// Source kind, a stable short identifier for logs.
    pub kind: &'static str,
}

impl SourceInfo {
    /// Create a new SourceInfo.
    pub fn new(name: impl Into<String>, kind: &'static str) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A stream of raw key events consumed by one reader.
///
/// Implementations deliver events strictly in arrival order. Each value is
/// produced by the platform once and consumed once; there is no replay.
///
/// # Examples
///
/// ```no_run
/// use wedgescan_input::{KeyEventSource, Result};
///
/// async fn count_chars<S: KeyEventSource>(source: &mut S) -> Result<usize> {
///     let mut count = 0;
///     loop {
///         let event = source.next_event().await?;
///         if event.input.is_char() {
///             count += 1;
///         }
///         if event.input.is_terminator() {
///             return Ok(count);
///         }
///     }
/// }
/// ```
pub trait KeyEventSource: Send + Sync {
    /// Wait for the next key event.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source has closed ([`InputError::Closed`](crate::InputError::Closed))
    /// - The subscriber lagged and events were dropped
    ///   ([`InputError::Lagged`](crate::InputError::Lagged), recoverable —
    ///   call again to resume)
    async fn next_event(&mut self) -> Result<RawKeyEvent>;

    /// Get source metadata for diagnostics.
    fn source_info(&self) -> SourceInfo;
}
