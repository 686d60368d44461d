//! Core constants for the wedgescan input-framing subsystem.
//!
//! This module defines the tuning constants used throughout the wedgescan
//! workspace: framing timeouts, frame length bounds, channel capacities, and
//! the fixed thresholds of the camera presence heuristic. Centralizing them
//! here keeps the reader and camera crates consistent and gives a single
//! place to reason about their interactions.
//!
//! # Timing Disambiguation
//!
//! A scanner in keyboard-wedge mode emits its captured value as a burst of
//! key events with inter-arrival gaps far below what a human can sustain.
//! The framing subsystem exploits exactly one signal: any gap of at least
//! [`DEFAULT_IDLE_TIMEOUT_MS`] between characters marks a frame boundary.
//!
//! ```
//! use wedgescan_core::constants::*;
//! use std::time::Duration;
//!
//! let timeout = Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS);
//! assert!(timeout.as_millis() >= MIN_IDLE_TIMEOUT_MS as u128);
//! ```

// ============================================================================
// Framing Timeouts
// ============================================================================

/// Default idle timeout separating frames (milliseconds).
///
/// Typical keyboard-wedge scanners deliver characters 5-30ms apart; human
/// typing rarely dips below 120ms between keystrokes. 100ms sits between the
/// two distributions with margin on both sides.
///
/// # Value: 100ms
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 100;

/// Minimum allowed idle timeout (milliseconds).
///
/// Values below this threshold would fragment genuine scanner bursts on
/// hosts under load, where event delivery itself can jitter by several
/// milliseconds.
///
/// # Value: 10ms
pub const MIN_IDLE_TIMEOUT_MS: u64 = 10;

/// Maximum allowed idle timeout (milliseconds).
///
/// Values above this threshold stop disambiguating at all: a slow human
/// typist stays inside the window and their keystrokes accumulate as if
/// they were a scan burst.
///
/// # Value: 2000ms
pub const MAX_IDLE_TIMEOUT_MS: u64 = 2000;

// ============================================================================
// Frame Length Bounds
// ============================================================================

/// Default minimum accepted frame length (characters, post-normalization).
///
/// # Value: 4 characters
pub const DEFAULT_MIN_FRAME_LENGTH: usize = 4;

/// Default maximum accepted frame length (characters, post-normalization).
///
/// # Value: 64 characters
pub const DEFAULT_MAX_FRAME_LENGTH: usize = 64;

/// Hard cap on accumulated buffer size (characters).
///
/// If the buffer grows beyond this without a frame boundary, the
/// accumulator resets it. This bounds memory against a stuck key or a
/// malfunctioning device streaming characters without ever terminating,
/// the same way the network stream parsers cap their reassembly buffers.
///
/// # Value: 512 characters
pub const MAX_BUFFER_CHARS: usize = 512;

// ============================================================================
// Channel Capacities
// ============================================================================

/// Capacity of per-device mock input channels.
pub const MOCK_CHANNEL_CAPACITY: usize = 32;

/// Capacity of the process-wide key-event broadcast channel.
///
/// Sized for burst traffic: a 64-character scan plus terminator fits eight
/// times over before a slow subscriber starts lagging.
pub const KEY_EVENT_FANOUT_CAPACITY: usize = 512;

/// Capacity of the scan-event channel between a reader task and its consumer.
pub const SCAN_EVENT_CAPACITY: usize = 32;

/// Capacity of the camera sample channel.
pub const CAMERA_SAMPLE_CAPACITY: usize = 8;

// ============================================================================
// Camera Sampling
// ============================================================================

/// Default interval between camera presence samples (milliseconds).
///
/// # Value: 500ms
///
/// Presence feedback is a UI hint; two samples per second track a user
/// aiming a camera without burning CPU on full-frame statistics.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 500;

/// Luma value at or below which a pixel counts as "very dark".
///
/// # Value: 64 (8-bit luma)
pub const DARK_LUMA_MAX: u8 = 64;

/// Luma value at or above which a pixel counts as "very light".
///
/// # Value: 192 (8-bit luma)
pub const LIGHT_LUMA_MIN: u8 = 192;

/// Minimum luma difference between adjacent samples to count as a
/// brightness transition.
///
/// # Value: 96
pub const TRANSITION_DELTA_MIN: u8 = 96;

/// Minimum fraction of sampled pixels that must be high-contrast (very dark
/// or very light) for a frame to classify as code-like.
///
/// Printed optical codes are near-binary: dark modules on a light quiet
/// zone. Natural scenes cluster in the mid-range.
///
/// # Value: 0.60
pub const MIN_HIGH_CONTRAST_FRACTION: f32 = 0.60;

/// Minimum fraction of adjacent sample pairs that must be brightness
/// transitions for a frame to classify as code-like.
///
/// Distinguishes a code from a uniformly dark or uniformly light frame,
/// both of which saturate the high-contrast statistic with zero texture.
///
/// # Value: 0.12
pub const MIN_TRANSITION_FRACTION: f32 = 0.12;

/// Pixel stride used when sampling a frame for statistics.
///
/// Statistics are computed over every Nth pixel of every Nth row. Stride 2
/// touches a quarter of the frame, which is ample for a presence verdict.
///
/// # Value: 2
pub const DETECTOR_SAMPLE_STRIDE: usize = 2;
