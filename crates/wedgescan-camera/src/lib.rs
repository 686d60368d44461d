//! Camera-based scan-presence detection.
//!
//! A parallel, independent pipeline to the keyboard-wedge reader: it never
//! produces scan values, only a coarse presence signal — "something
//! code-like is in view" — used for UI feedback while the user aims a
//! camera at a label. No symbology decoding happens here or anywhere in
//! this workspace.
//!
//! ```text
//! ┌──────────────┐   tick    ┌─────────────┐   stats    ┌──────────────┐
//! │ CameraDevice │──────────►│ PixelFrame  │───────────►│ CameraSample │
//! │ (hardware)   │  (grab)   │ (luma plane)│ (classify) │ channel      │
//! └──────────────┘           └─────────────┘            └──────────────┘
//! ```
//!
//! The presence heuristic is two pixel statistics over a subsampled luma
//! plane: the fraction of high-contrast (very dark or very light) pixels,
//! and the fraction of adjacent-sample brightness transitions. Printed
//! optical codes are near-binary and densely textured, so both fractions
//! run high; ordinary scenes rarely exceed both thresholds at once.
//!
//! [`CameraSampler::start`] owns the hardware handle: it opens the device,
//! samples on a fixed interval, and — on [`SamplerHandle::stop`] — closes
//! every live track *before* the sampling loop exits, so no tick can race
//! a released camera.
//!
//! # Example
//!
//! ```
//! use wedgescan_camera::{CameraSampler, MockCamera, PixelFrame, SamplerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wedgescan_camera::CameraError> {
//!     let (camera, handle) = MockCamera::new();
//!     handle.set_frame(PixelFrame::uniform(64, 48, 128))?;
//!
//!     let mut sampler = CameraSampler::start(camera.into(), SamplerConfig::default()).await?;
//!
//!     let sample = sampler.recv().await.unwrap();
//!     assert!(!sample.verdict.is_likely_code());
//!
//!     sampler.stop().await?;
//!     assert_eq!(handle.live_tracks(), 0);
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod devices;
pub mod error;
pub mod frame;
pub mod mock;
pub mod sampler;
pub mod traits;

// Re-export commonly used types for convenience
pub use detect::{CameraSample, DetectorConfig, FrameStats, PresenceVerdict, classify, frame_stats};
pub use devices::AnyCameraDevice;
pub use error::{CameraError, Result};
pub use frame::PixelFrame;
pub use mock::{MockCamera, MockCameraHandle};
pub use sampler::{CameraSampler, SamplerConfig, SamplerHandle};
pub use traits::{CameraDevice, CameraInfo};
