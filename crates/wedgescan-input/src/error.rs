//! Error types for key-event source operations.

/// Result type alias for input source operations.
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur while consuming a key-event source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The source has shut down and will produce no further events.
    #[error("Event source closed: {source_name}")]
    Closed { source_name: String },

    /// The subscriber fell behind the broadcast stream and events were
    /// dropped. The subscription remains usable; the next call resumes at
    /// the oldest retained event.
    #[error("Event stream lagged, missed {missed} events")]
    Lagged { missed: u64 },

    /// Malformed event data from the platform layer.
    #[error("Invalid input data: {message}")]
    InvalidData { message: String },
}

impl InputError {
    /// Create a new closed-source error.
    pub fn closed(source_name: impl Into<String>) -> Self {
        Self::Closed {
            source_name: source_name.into(),
        }
    }

    /// Create a new lagged-stream error.
    pub fn lagged(missed: u64) -> Self {
        Self::Lagged { missed }
    }

    /// Create a new invalid data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Returns `true` if the error is recoverable by calling the source
    /// again (currently only [`InputError::Lagged`]).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Lagged { .. })
    }
}
