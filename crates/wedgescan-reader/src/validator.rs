//! Frame validation and normalization.
//!
//! A pure function of `(raw frame, config)`: no state, no side effects,
//! unit-testable without the accumulator or any timer. Both the device path
//! and the manual entry path funnel through [`validate_frame`]; they differ
//! only in the [`ScanSource`] they stamp.

use crate::config::FrameConfig;
use wedgescan_core::{ScanError, ScanResult, ScanSource};

/// Normalize a raw frame: trim surrounding whitespace, then strip exactly
/// one configured prefix marker and one configured suffix marker.
///
/// Markers are stripped at most once per side; a value that legitimately
/// starts with the marker character keeps its remaining occurrences.
fn normalize(raw: &str, config: &FrameConfig) -> String {
    let mut value = raw.trim();

    if let Some(prefix) = config.prefix_marker()
        && let Some(stripped) = value.strip_prefix(prefix)
    {
        value = stripped;
    }

    if let Some(suffix) = config.suffix_marker()
        && let Some(stripped) = value.strip_suffix(suffix)
    {
        value = stripped;
    }

    value.to_string()
}

/// Validate a raw accumulated frame against the configured bounds.
///
/// Returns a [`ScanResult`] stamped with `source` on success, or the
/// length-bound [`ScanError`] on failure. Errors carry lengths, never the
/// rejected text.
///
/// # Examples
///
/// ```
/// use wedgescan_core::{ScanError, ScanSource};
/// use wedgescan_reader::{FrameConfig, validate_frame};
///
/// let config = FrameConfig::builder()
///     .min_length(4)
///     .prefix_marker('P')
///     .suffix_marker('S')
///     .build()
///     .unwrap();
///
/// let result = validate_frame("P1234S", &config, ScanSource::Device).unwrap();
/// assert_eq!(result.value, "1234");
///
/// let err = validate_frame("P12S", &config, ScanSource::Device).unwrap_err();
/// assert_eq!(
///     err,
///     ScanError::FrameTooShort { raw_length: 2, min_length: 4 }
/// );
/// ```
pub fn validate_frame(
    raw: &str,
    config: &FrameConfig,
    source: ScanSource,
) -> Result<ScanResult, ScanError> {
    let value = normalize(raw, config);
    let length = value.chars().count();

    if length < config.min_length() {
        return Err(ScanError::FrameTooShort {
            raw_length: length,
            min_length: config.min_length(),
        });
    }

    if length > config.max_length() {
        return Err(ScanError::FrameTooLong {
            raw_length: length,
            max_length: config.max_length(),
        });
    }

    Ok(ScanResult::new(value, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn marker_config() -> FrameConfig {
        FrameConfig::builder()
            .min_length(4)
            .max_length(10)
            .prefix_marker('P')
            .suffix_marker('S')
            .build()
            .unwrap()
    }

    #[rstest]
    #[case("P1234S", "1234")] // both markers stripped
    #[case("1234", "1234")] // markers absent: value untouched
    #[case("P1234", "1234")] // prefix only
    #[case("1234S", "1234")] // suffix only
    #[case("  P1234S  ", "1234")] // whitespace trimmed before marker strip
    #[case("PP1234S", "P1234")] // at most one prefix stripped
    #[case("P1234SS", "1234S")] // at most one suffix stripped
    fn test_marker_stripping(#[case] raw: &str, #[case] expected: &str) {
        let result = validate_frame(raw, &marker_config(), ScanSource::Device).unwrap();
        assert_eq!(result.value, expected);
        assert_eq!(result.source, ScanSource::Device);
    }

    #[test]
    fn test_too_short_after_normalization() {
        // 7 characters against an 8-character minimum.
        let config = FrameConfig::builder().min_length(8).build().unwrap();
        let err = validate_frame("1234567", &config, ScanSource::Device).unwrap_err();
        assert_eq!(
            err,
            ScanError::FrameTooShort {
                raw_length: 7,
                min_length: 8
            }
        );
    }

    #[test]
    fn test_too_long_after_normalization() {
        let config = FrameConfig::builder().min_length(1).max_length(5).build().unwrap();
        let err = validate_frame("123456", &config, ScanSource::Device).unwrap_err();
        assert_eq!(
            err,
            ScanError::FrameTooLong {
                raw_length: 6,
                max_length: 5
            }
        );
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        let config = FrameConfig::builder().min_length(4).max_length(6).build().unwrap();

        assert!(validate_frame("1234", &config, ScanSource::Device).is_ok());
        assert!(validate_frame("123456", &config, ScanSource::Device).is_ok());
        assert!(validate_frame("123", &config, ScanSource::Device).is_err());
        assert!(validate_frame("1234567", &config, ScanSource::Device).is_err());
    }

    #[test]
    fn test_length_counted_after_stripping() {
        // "P123S" strips to "123": three characters, below the minimum of
        // four, even though the raw frame had five.
        let err = validate_frame("P123S", &marker_config(), ScanSource::Device).unwrap_err();
        assert_eq!(err.raw_length(), Some(3));
    }

    #[test]
    fn test_multibyte_values_counted_in_chars() {
        let config = FrameConfig::builder().min_length(4).max_length(4).build().unwrap();
        let result = validate_frame("\u{00E9}\u{00E9}\u{00E9}\u{00E9}", &config, ScanSource::Device);
        assert!(result.is_ok());
    }

    #[test]
    fn test_manual_source_stamped() {
        let config = FrameConfig::default();
        let result = validate_frame("1234", &config, ScanSource::Manual).unwrap();
        assert_eq!(result.source, ScanSource::Manual);
    }

    #[test]
    fn test_pure_function_no_hidden_state() {
        // Same inputs, same outputs, call after call.
        let config = marker_config();
        let a = validate_frame("P4321S", &config, ScanSource::Device).unwrap();
        let b = validate_frame("P4321S", &config, ScanSource::Device).unwrap();
        assert_eq!(a.value, b.value);
    }
}
