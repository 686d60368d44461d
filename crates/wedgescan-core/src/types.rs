use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Origin of a recognized scan value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    /// Framed from a key-event burst emitted by a wedge device.
    Device,
    /// Explicitly submitted by the user through the manual entry path.
    Manual,
}

impl ScanSource {
    /// Stable string form, used in logs and serialized events.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanSource::Device => "device",
            ScanSource::Manual => "manual",
        }
    }

    /// Returns `true` if the value came from a wedge device burst.
    #[inline]
    #[must_use]
    pub fn is_device(self) -> bool {
        matches!(self, ScanSource::Device)
    }
}

impl fmt::Display for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, normalized scan identifier.
///
/// Produced by the frame validator after marker stripping and length checks.
/// The core hands it to the consumer and forgets it; persistence and lookup
/// are the consumer's concern.
///
/// # Examples
///
/// ```
/// use wedgescan_core::{ScanResult, ScanSource};
///
/// let result = ScanResult::new("04ABCDEF", ScanSource::Device);
/// assert_eq!(result.value, "04ABCDEF");
/// assert!(result.source.is_device());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The normalized scan value (markers stripped, whitespace trimmed).
    pub value: String,

    /// Where the value came from.
    pub source: ScanSource,

    /// When the frame was recognized.
    pub captured_at: DateTime<Utc>,
}

impl ScanResult {
    /// Create a scan result stamped with the current time.
    pub fn new(value: impl Into<String>, source: ScanSource) -> Self {
        Self {
            value: value.into(),
            source,
            captured_at: Utc::now(),
        }
    }

    /// Replace the capture timestamp.
    ///
    /// Useful in tests and when replaying recorded scan sessions.
    #[must_use]
    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = captured_at;
        self
    }

    /// Length of the normalized value in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns `true` if the value is empty.
    ///
    /// The validator never emits an empty result; this exists for symmetry
    /// with `len()`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.source)
    }
}

/// Recoverable scan validation failures.
///
/// Delivered to the consumer as events (device path) or returned directly
/// (manual path). A reader survives any of these: the buffer resets and
/// listening continues. Length variants carry the offending length, never
/// the rejected text, so discarded fragments cannot leak through error
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanError {
    /// Frame shorter than the configured minimum after normalization.
    #[error("Frame too short: {raw_length} chars, minimum {min_length}")]
    FrameTooShort { raw_length: usize, min_length: usize },

    /// Frame longer than the configured maximum after normalization.
    #[error("Frame too long: {raw_length} chars, maximum {max_length}")]
    FrameTooLong { raw_length: usize, max_length: usize },

    /// Manual entry was empty or whitespace-only.
    #[error("Manual entry was empty")]
    EmptyManualValue,
}

impl ScanError {
    /// Length of the rejected frame, if this is a length failure.
    #[must_use]
    pub fn raw_length(&self) -> Option<usize> {
        match self {
            ScanError::FrameTooShort { raw_length, .. }
            | ScanError::FrameTooLong { raw_length, .. } => Some(*raw_length),
            ScanError::EmptyManualValue => None,
        }
    }

    /// Returns `true` for the length-bound failures produced by the
    /// frame validator.
    #[must_use]
    pub fn is_length_error(&self) -> bool {
        self.raw_length().is_some()
    }
}

/// Identifier for one reader or sampler instance.
///
/// Generated at attach/start time and carried through log events so
/// concurrent instances can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Generate a fresh random instance id.
    #[must_use]
    pub fn new() -> Self {
        InstanceId(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
