//! Manual entry path.
//!
//! Degraded-mode input: the user pastes or types a value into a dedicated
//! field and commits it explicitly. No timing heuristics apply — the value
//! was deliberately submitted — so this path goes straight to the
//! validator, bypassing the accumulator entirely.

use crate::config::FrameConfig;
use crate::validator::validate_frame;
use wedgescan_core::{ScanError, ScanResult, ScanSource};

/// Validate an explicitly submitted value.
///
/// Empty and whitespace-only submissions are rejected with
/// [`ScanError::EmptyManualValue`] before the validator runs; everything
/// else follows the same normalization and length rules as device frames,
/// stamped [`ScanSource::Manual`].
///
/// # Examples
///
/// ```
/// use wedgescan_core::{ScanError, ScanSource};
/// use wedgescan_reader::{FrameConfig, submit_manual};
///
/// let config = FrameConfig::default();
///
/// let result = submit_manual("  04ABCDEF  ", &config).unwrap();
/// assert_eq!(result.value, "04ABCDEF");
/// assert_eq!(result.source, ScanSource::Manual);
///
/// assert_eq!(
///     submit_manual("   ", &config).unwrap_err(),
///     ScanError::EmptyManualValue
/// );
/// ```
pub fn submit_manual(raw: &str, config: &FrameConfig) -> Result<ScanResult, ScanError> {
    if raw.trim().is_empty() {
        return Err(ScanError::EmptyManualValue);
    }

    validate_frame(raw, config, ScanSource::Manual)
}
