//! Frame reader configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use wedgescan_core::{
    Error, Result,
    constants::{
        DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_MAX_FRAME_LENGTH, DEFAULT_MIN_FRAME_LENGTH,
        MAX_BUFFER_CHARS, MAX_IDLE_TIMEOUT_MS, MIN_IDLE_TIMEOUT_MS,
    },
};

/// Immutable parameters controlling framing behavior for one reader.
///
/// Different device families typically need different configurations: RFID
/// badges framed with short numeric payloads, barcodes with prefix/suffix
/// markers programmed into the scanner. Each reader instance owns one
/// config for its whole lifetime.
///
/// # Invariants
///
/// Enforced at construction by [`FrameConfigBuilder::build`]:
/// - `0 < min_length <= max_length <= MAX_BUFFER_CHARS`
/// - `MIN_IDLE_TIMEOUT_MS <= idle_timeout <= MAX_IDLE_TIMEOUT_MS`
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wedgescan_reader::FrameConfig;
///
/// let config = FrameConfig::builder()
///     .idle_timeout(Duration::from_millis(100))
///     .min_length(8)
///     .max_length(50)
///     .prefix_marker('P')
///     .suffix_marker('S')
///     .build()
///     .unwrap();
///
/// assert_eq!(config.min_length(), 8);
/// assert_eq!(config.prefix_marker(), Some('P'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    idle_timeout: Duration,
    min_length: usize,
    max_length: usize,
    prefix_marker: Option<char>,
    suffix_marker: Option<char>,
    auto_clear_on_emit: bool,
    capture_editable_targets: bool,
}

impl FrameConfig {
    /// Create a builder with default values.
    #[must_use]
    pub fn builder() -> FrameConfigBuilder {
        FrameConfigBuilder::default()
    }

    /// Idle gap that separates frames.
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Minimum accepted frame length after normalization.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum accepted frame length after normalization.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Optional leading marker stripped once during normalization.
    #[must_use]
    pub fn prefix_marker(&self) -> Option<char> {
        self.prefix_marker
    }

    /// Optional trailing marker stripped once during normalization.
    #[must_use]
    pub fn suffix_marker(&self) -> Option<char> {
        self.suffix_marker
    }

    /// Whether the buffer resets after a frame is emitted.
    #[must_use]
    pub fn auto_clear_on_emit(&self) -> bool {
        self.auto_clear_on_emit
    }

    /// Whether events targeting editable text surfaces are accumulated.
    ///
    /// Off by default: a reader attached to the global stream must not
    /// swallow keystrokes the user is typing into a form field. A reader
    /// dedicated to its own input element turns this on.
    #[must_use]
    pub fn capture_editable_targets(&self) -> bool {
        self.capture_editable_targets
    }
}

impl Default for FrameConfig {
    /// Default configuration: 100ms idle timeout, 4-64 character frames,
    /// no markers, auto-clear on emit, editable targets ignored.
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            min_length: DEFAULT_MIN_FRAME_LENGTH,
            max_length: DEFAULT_MAX_FRAME_LENGTH,
            prefix_marker: None,
            suffix_marker: None,
            auto_clear_on_emit: true,
            capture_editable_targets: false,
        }
    }
}

/// Builder for [`FrameConfig`] with validation.
#[derive(Debug, Clone)]
pub struct FrameConfigBuilder {
    config: FrameConfig,
}

impl Default for FrameConfigBuilder {
    fn default() -> Self {
        Self {
            config: FrameConfig::default(),
        }
    }
}

impl FrameConfigBuilder {
    /// Set the idle gap that separates frames.
    #[must_use]
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.idle_timeout = timeout;
        self
    }

    /// Set the minimum accepted frame length.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.config.min_length = min;
        self
    }

    /// Set the maximum accepted frame length.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.config.max_length = max;
        self
    }

    /// Set the leading marker stripped once during normalization.
    #[must_use]
    pub fn prefix_marker(mut self, marker: char) -> Self {
        self.config.prefix_marker = Some(marker);
        self
    }

    /// Set the trailing marker stripped once during normalization.
    #[must_use]
    pub fn suffix_marker(mut self, marker: char) -> Self {
        self.config.suffix_marker = Some(marker);
        self
    }

    /// Set whether the buffer resets after a frame is emitted.
    #[must_use]
    pub fn auto_clear_on_emit(mut self, auto_clear: bool) -> Self {
        self.config.auto_clear_on_emit = auto_clear;
        self
    }

    /// Set whether events targeting editable surfaces are accumulated.
    #[must_use]
    pub fn capture_editable_targets(mut self, capture: bool) -> Self {
        self.config.capture_editable_targets = capture;
        self
    }

    /// Build the configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the length bounds or idle timeout violate the
    /// invariants documented on [`FrameConfig`].
    pub fn build(self) -> Result<FrameConfig> {
        let config = self.config;

        if config.min_length == 0 || config.min_length > config.max_length {
            return Err(Error::InvalidLengthBounds {
                min: config.min_length,
                max: config.max_length,
            });
        }

        if config.max_length > MAX_BUFFER_CHARS {
            return Err(Error::InvalidFrameConfig(format!(
                "max_length {} exceeds buffer cap {}",
                config.max_length, MAX_BUFFER_CHARS
            )));
        }

        let timeout_ms = config.idle_timeout.as_millis() as u64;
        if !(MIN_IDLE_TIMEOUT_MS..=MAX_IDLE_TIMEOUT_MS).contains(&timeout_ms) {
            return Err(Error::InvalidIdleTimeout {
                timeout_ms,
                min_ms: MIN_IDLE_TIMEOUT_MS,
                max_ms: MAX_IDLE_TIMEOUT_MS,
            });
        }

        Ok(config)
    }
}
