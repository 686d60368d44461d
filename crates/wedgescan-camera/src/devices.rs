//! Enum wrapper for camera device dispatch.
//!
//! Native `async fn` in traits (RPITIT, Edition 2024) is not object-safe,
//! so `Box<dyn CameraDevice>` is unavailable. This enum provides concrete
//! dispatch at zero cost. Real capture backends (V4L2, AVFoundation) slot
//! in as additional variants behind their feature flags.

use crate::error::Result;
use crate::frame::PixelFrame;
use crate::mock::MockCamera;
use crate::traits::{CameraDevice, CameraInfo};

/// Enum wrapper for camera device dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyCameraDevice {
    /// Mock camera for development and testing.
    Mock(MockCamera),
}

impl CameraDevice for AnyCameraDevice {
    async fn open(&mut self) -> Result<()> {
        match self {
            Self::Mock(device) => device.open().await,
        }
    }

    async fn grab_frame(&mut self) -> Result<PixelFrame> {
        match self {
            Self::Mock(device) => device.grab_frame().await,
        }
    }

    async fn close(&mut self) -> Result<()> {
        match self {
            Self::Mock(device) => device.close().await,
        }
    }

    fn live_tracks(&self) -> usize {
        match self {
            Self::Mock(device) => device.live_tracks(),
        }
    }

    fn camera_info(&self) -> CameraInfo {
        match self {
            Self::Mock(device) => device.camera_info(),
        }
    }
}

impl From<MockCamera> for AnyCameraDevice {
    fn from(camera: MockCamera) -> Self {
        Self::Mock(camera)
    }
}
