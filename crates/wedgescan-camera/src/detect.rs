//! Scan-presence heuristic.
//!
//! A coarse classifier, not a decoder: it estimates whether a frame likely
//! contains a dense optical code pattern, and nothing more. Two statistics
//! are computed over a subsampled luma plane:
//!
//! 1. **High-contrast fraction** — the share of sampled pixels that are
//!    very dark or very light. Printed codes are near-binary.
//! 2. **Transition fraction** — the share of adjacent sample pairs (within
//!    a row) whose brightness differs by at least the transition delta.
//!    Codes are densely textured; uniform frames are not, however dark or
//!    light they are.
//!
//! A frame classifies as [`PresenceVerdict::LikelyCode`] only when both
//! fractions exceed their fixed thresholds. Both statistics are pure
//! functions of `(frame, config)`, testable without a camera or a timer.

use crate::frame::PixelFrame;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use wedgescan_core::constants::{
    DARK_LUMA_MAX, DETECTOR_SAMPLE_STRIDE, LIGHT_LUMA_MIN, MIN_HIGH_CONTRAST_FRACTION,
    MIN_TRANSITION_FRACTION, TRANSITION_DELTA_MIN,
};

/// Thresholds for the presence heuristic.
///
/// The defaults come from `wedgescan-core::constants` and separate bar/
/// matrix patterns cleanly from uniform and natural frames; they are fixed
/// per sampler instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Luma at or below which a pixel counts as very dark.
    pub dark_luma_max: u8,

    /// Luma at or above which a pixel counts as very light.
    pub light_luma_min: u8,

    /// Minimum adjacent-sample luma difference counted as a transition.
    pub transition_delta_min: u8,

    /// Minimum high-contrast fraction for a code-like verdict.
    pub min_high_contrast_fraction: f32,

    /// Minimum transition fraction for a code-like verdict.
    pub min_transition_fraction: f32,

    /// Sample every Nth pixel of every Nth row.
    pub sample_stride: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            dark_luma_max: DARK_LUMA_MAX,
            light_luma_min: LIGHT_LUMA_MIN,
            transition_delta_min: TRANSITION_DELTA_MIN,
            min_high_contrast_fraction: MIN_HIGH_CONTRAST_FRACTION,
            min_transition_fraction: MIN_TRANSITION_FRACTION,
            sample_stride: DETECTOR_SAMPLE_STRIDE,
        }
    }
}

/// The two statistics the heuristic is built on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Fraction of sampled pixels that are very dark or very light.
    pub high_contrast_fraction: f32,

    /// Fraction of adjacent sample pairs that are brightness transitions.
    pub transition_fraction: f32,

    /// Number of pixels actually sampled.
    pub sampled_pixels: usize,
}

/// Presence verdict for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresenceVerdict {
    /// Both statistics exceeded their thresholds: a dense optical code is
    /// likely in view.
    LikelyCode,

    /// No code-like pattern detected.
    NoCode,
}

impl PresenceVerdict {
    /// Returns `true` if the verdict is [`PresenceVerdict::LikelyCode`].
    #[must_use]
    pub fn is_likely_code(self) -> bool {
        matches!(self, Self::LikelyCode)
    }
}

impl fmt::Display for PresenceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LikelyCode => write!(f, "likely-code"),
            Self::NoCode => write!(f, "no-code"),
        }
    }
}

/// One presence sample, emitted per sampling tick.
///
/// Ephemeral: consumed by the UI feedback path and dropped. Never treated
/// as a decoded value, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSample {
    /// When the frame was sampled.
    pub captured_at: DateTime<Utc>,

    /// The presence verdict.
    pub verdict: PresenceVerdict,

    /// The raw statistics behind the verdict, for diagnostics.
    pub stats: FrameStats,
}

impl CameraSample {
    /// Create a sample stamped with the current time.
    #[must_use]
    pub fn new(verdict: PresenceVerdict, stats: FrameStats) -> Self {
        Self {
            captured_at: Utc::now(),
            verdict,
            stats,
        }
    }
}

/// Compute the presence statistics for one frame.
///
/// Samples every `sample_stride`-th pixel of every `sample_stride`-th row;
/// transitions are measured between consecutive samples within a row.
#[must_use]
pub fn frame_stats(frame: &PixelFrame, config: &DetectorConfig) -> FrameStats {
    let stride = config.sample_stride.max(1);

    let mut sampled = 0usize;
    let mut high_contrast = 0usize;
    let mut pairs = 0usize;
    let mut transitions = 0usize;

    for y in (0..frame.height()).step_by(stride) {
        let mut prev: Option<u8> = None;
        for x in (0..frame.width()).step_by(stride) {
            let luma = frame.pixel(x, y);
            sampled += 1;

            if luma <= config.dark_luma_max || luma >= config.light_luma_min {
                high_contrast += 1;
            }

            if let Some(prev_luma) = prev {
                pairs += 1;
                if prev_luma.abs_diff(luma) >= config.transition_delta_min {
                    transitions += 1;
                }
            }
            prev = Some(luma);
        }
    }

    FrameStats {
        high_contrast_fraction: if sampled > 0 {
            high_contrast as f32 / sampled as f32
        } else {
            0.0
        },
        transition_fraction: if pairs > 0 {
            transitions as f32 / pairs as f32
        } else {
            0.0
        },
        sampled_pixels: sampled,
    }
}

/// Classify a frame's statistics into a presence verdict.
#[must_use]
pub fn classify(stats: &FrameStats, config: &DetectorConfig) -> PresenceVerdict {
    if stats.high_contrast_fraction >= config.min_high_contrast_fraction
        && stats.transition_fraction >= config.min_transition_fraction
    {
        PresenceVerdict::LikelyCode
    } else {
        PresenceVerdict::NoCode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Vertical bars alternating black/white every `bar` pixels: the
    /// shape of a 1D barcode filling the view.
    fn vertical_bars(width: usize, height: usize, bar: usize) -> PixelFrame {
        let luma = (0..width * height)
            .map(|i| {
                let x = i % width;
                if (x / bar) % 2 == 0 { 0u8 } else { 255u8 }
            })
            .collect();
        PixelFrame::new(width, height, luma).unwrap()
    }

    fn detect(frame: &PixelFrame) -> (FrameStats, PresenceVerdict) {
        let config = DetectorConfig::default();
        let stats = frame_stats(frame, &config);
        (stats, classify(&stats, &config))
    }

    #[test]
    fn test_bar_pattern_is_likely_code() {
        // 4-pixel bars survive the default stride-2 subsampling.
        let frame = vertical_bars(64, 48, 4);
        let (stats, verdict) = detect(&frame);

        assert_eq!(stats.high_contrast_fraction, 1.0);
        assert!(stats.transition_fraction >= 0.4);
        assert!(verdict.is_likely_code());
    }

    #[rstest]
    #[case(128)] // mid-gray: no contrast, no texture
    #[case(0)] // black: saturates contrast, zero texture
    #[case(255)] // white: same
    fn test_uniform_frames_are_no_code(#[case] luma: u8) {
        let frame = PixelFrame::uniform(64, 48, luma);
        let (stats, verdict) = detect(&frame);

        assert_eq!(stats.transition_fraction, 0.0);
        assert_eq!(verdict, PresenceVerdict::NoCode);
    }

    #[test]
    fn test_gradient_is_no_code() {
        // A smooth horizontal ramp: adjacent samples differ by far less
        // than the transition delta, and most pixels sit mid-range.
        let width = 256usize;
        let luma = (0..width * 8).map(|i| (i % width) as u8).collect();
        let frame = PixelFrame::new(width, 8, luma).unwrap();

        let (stats, verdict) = detect(&frame);
        assert_eq!(stats.transition_fraction, 0.0);
        assert!(stats.high_contrast_fraction < 0.6);
        assert_eq!(verdict, PresenceVerdict::NoCode);
    }

    #[test]
    fn test_contrast_without_texture_is_no_code() {
        // Left half black, right half white: plenty of contrast, but only
        // a single transition per row.
        let width = 64usize;
        let luma = (0..width * 32)
            .map(|i| if (i % width) < width / 2 { 0u8 } else { 255u8 })
            .collect();
        let frame = PixelFrame::new(width, 32, luma).unwrap();

        let (stats, verdict) = detect(&frame);
        assert_eq!(stats.high_contrast_fraction, 1.0);
        assert!(stats.transition_fraction < MIN_TRANSITION_FRACTION);
        assert_eq!(verdict, PresenceVerdict::NoCode);
    }

    #[test]
    fn test_stride_one_samples_every_pixel() {
        let config = DetectorConfig {
            sample_stride: 1,
            ..DetectorConfig::default()
        };
        let frame = PixelFrame::uniform(10, 10, 128);
        let stats = frame_stats(&frame, &config);
        assert_eq!(stats.sampled_pixels, 100);
    }

    #[test]
    fn test_stats_are_pure() {
        let frame = vertical_bars(32, 32, 4);
        let config = DetectorConfig::default();
        assert_eq!(frame_stats(&frame, &config), frame_stats(&frame, &config));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(PresenceVerdict::LikelyCode.to_string(), "likely-code");
        assert_eq!(PresenceVerdict::NoCode.to_string(), "no-code");
    }

    #[test]
    fn test_verdict_serde_kebab() {
        let json = serde_json::to_string(&PresenceVerdict::LikelyCode).unwrap();
        assert_eq!(json, "\"likely-code\"");
    }
}
