//! Camera device trait definition.
//!
//! The contract between the sampler and camera hardware. Like the other
//! device traits in this workspace it uses native `async fn` (Edition 2024
//! RPITIT) and is therefore not object-safe; use
//! [`AnyCameraDevice`](crate::devices::AnyCameraDevice) for dispatch.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::frame::PixelFrame;

/// Metadata about a camera device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    /// Device name (e.g. "Integrated Webcam", "Mock Camera").
    pub name: String,

    /// Device kind, a stable short identifier for logs.
    pub kind: &'static str,
}

impl CameraInfo {
    /// Create a new CameraInfo.
    pub fn new(name: impl Into<String>, kind: &'static str) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A camera the sampler can own.
///
/// Lifecycle: [`open`](Self::open) acquires the hardware (every live track
/// of the underlying media stream), [`grab_frame`](Self::grab_frame) reads
/// the current frame while open, [`close`](Self::close) releases every
/// track deterministically. Implementations must make `close` idempotent
/// and must not rely on drop order for hardware release.
pub trait CameraDevice: Send + Sync {
    /// Acquire the camera.
    ///
    /// # Errors
    ///
    /// Returns one of the acquisition errors — permission denied, device
    /// not found, device in use, or generic acquisition failure. On error
    /// the device remains closed and `open` may be retried.
    async fn open(&mut self) -> Result<()>;

    /// Grab the current frame as a luma plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is not open or the grab fails.
    async fn grab_frame(&mut self) -> Result<PixelFrame>;

    /// Release the camera, stopping every live track.
    ///
    /// Idempotent: closing a closed device is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the hardware release itself fails.
    async fn close(&mut self) -> Result<()>;

    /// Number of live tracks currently held on the camera stream.
    ///
    /// Zero whenever the device is closed.
    fn live_tracks(&self) -> usize;

    /// Get device metadata for diagnostics.
    fn camera_info(&self) -> CameraInfo;
}
