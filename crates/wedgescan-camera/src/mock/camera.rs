//! Mock camera implementation for testing and development.
//!
//! This module provides a simulated camera that can be controlled
//! programmatically: tests script the frame in view, make acquisition
//! fail with a chosen error, and observe the live-track count from
//! outside the sampler.

use crate::{
    Result,
    error::CameraError,
    frame::PixelFrame,
    traits::{CameraDevice, CameraInfo},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::watch;

/// Mock camera for testing and development.
///
/// Simulates a single-track camera stream. The "current frame" is a watch
/// channel: [`MockCameraHandle::set_frame`] replaces it, and every
/// subsequent grab sees the latest frame — exactly how sampling from a
/// live video element behaves.
///
/// # Examples
///
/// ```
/// use wedgescan_camera::{CameraDevice, MockCamera, PixelFrame};
///
/// #[tokio::main]
/// async fn main() -> wedgescan_camera::Result<()> {
///     let (mut camera, handle) = MockCamera::new();
///     handle.set_frame(PixelFrame::uniform(8, 8, 255))?;
///
///     camera.open().await?;
///     assert_eq!(handle.live_tracks(), 1);
///
///     let frame = camera.grab_frame().await?;
///     assert_eq!(frame.pixel(0, 0), 255);
///
///     camera.close().await?;
///     assert_eq!(handle.live_tracks(), 0);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockCamera {
    /// Receiver side of the current-frame channel.
    frame_rx: watch::Receiver<PixelFrame>,

    /// Shared live-track count, visible through the handle.
    live_tracks: Arc<AtomicUsize>,

    /// Scripted one-shot open failure.
    open_failure: Arc<Mutex<Option<CameraError>>>,

    /// Scripted one-shot grab failure.
    grab_failure: Arc<Mutex<Option<CameraError>>>,

    /// Device name.
    name: String,
}

impl MockCamera {
    /// Create a new mock camera with the default name.
    ///
    /// Returns a tuple of (MockCamera, MockCameraHandle). The camera
    /// starts closed, showing a uniform mid-gray frame.
    pub fn new() -> (Self, MockCameraHandle) {
        Self::with_name("Mock Camera".to_string())
    }

    /// Create a new mock camera with a custom name.
    pub fn with_name(name: String) -> (Self, MockCameraHandle) {
        let (frame_tx, frame_rx) = watch::channel(PixelFrame::uniform(64, 48, 128));
        let live_tracks = Arc::new(AtomicUsize::new(0));
        let open_failure = Arc::new(Mutex::new(None));
        let grab_failure = Arc::new(Mutex::new(None));

        let camera = Self {
            frame_rx,
            live_tracks: Arc::clone(&live_tracks),
            open_failure: Arc::clone(&open_failure),
            grab_failure: Arc::clone(&grab_failure),
            name: name.clone(),
        };

        let handle = MockCameraHandle {
            frame_tx,
            live_tracks,
            open_failure,
            grab_failure,
            name,
        };

        (camera, handle)
    }

    fn is_open(&self) -> bool {
        self.live_tracks.load(Ordering::SeqCst) > 0
    }
}

impl Default for MockCamera {
    fn default() -> Self {
        Self::new().0
    }
}

impl CameraDevice for MockCamera {
    async fn open(&mut self) -> Result<()> {
        let scripted = self
            .open_failure
            .lock()
            .expect("open failure lock poisoned")
            .take();
        if let Some(error) = scripted {
            // Acquisition failed: no track was ever acquired.
            return Err(error);
        }

        self.live_tracks.store(1, Ordering::SeqCst);
        Ok(())
    }

    async fn grab_frame(&mut self) -> Result<PixelFrame> {
        if !self.is_open() {
            return Err(CameraError::not_open("grab_frame"));
        }

        let scripted = self
            .grab_failure
            .lock()
            .expect("grab failure lock poisoned")
            .take();
        if let Some(error) = scripted {
            return Err(error);
        }

        Ok(self.frame_rx.borrow().clone())
    }

    async fn close(&mut self) -> Result<()> {
        self.live_tracks.store(0, Ordering::SeqCst);
        Ok(())
    }

    fn live_tracks(&self) -> usize {
        self.live_tracks.load(Ordering::SeqCst)
    }

    fn camera_info(&self) -> CameraInfo {
        CameraInfo::new(self.name.clone(), "mock")
    }
}

/// Handle for controlling a mock camera.
///
/// Cloneable; all clones control the same camera.
///
/// # Examples
///
/// ```
/// use wedgescan_camera::{CameraError, MockCamera};
///
/// let (_camera, handle) = MockCamera::new();
///
/// // Script the next acquisition to fail as if permission was denied.
/// handle.fail_next_open(CameraError::permission_denied("mock"));
/// ```
#[derive(Debug, Clone)]
pub struct MockCameraHandle {
    /// Sender side of the current-frame channel.
    frame_tx: watch::Sender<PixelFrame>,

    /// Shared live-track count.
    live_tracks: Arc<AtomicUsize>,

    /// Scripted one-shot open failure.
    open_failure: Arc<Mutex<Option<CameraError>>>,

    /// Scripted one-shot grab failure.
    grab_failure: Arc<Mutex<Option<CameraError>>>,

    /// Device name.
    name: String,
}

impl MockCameraHandle {
    /// Replace the frame currently in view.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera has been dropped.
    pub fn set_frame(&self, frame: PixelFrame) -> Result<()> {
        self.frame_tx
            .send(frame)
            .map_err(|_| CameraError::disconnected(self.name.clone()))
    }

    /// Make the next `open()` fail with the given error. One-shot: the
    /// open after that succeeds again, which is how acquisition retry
    /// after the user fixes the condition is exercised.
    pub fn fail_next_open(&self, error: CameraError) {
        *self
            .open_failure
            .lock()
            .expect("open failure lock poisoned") = Some(error);
    }

    /// Make the next `grab_frame()` fail with the given error. One-shot.
    pub fn fail_next_grab(&self, error: CameraError) {
        *self
            .grab_failure
            .lock()
            .expect("grab failure lock poisoned") = Some(error);
    }

    /// Number of live tracks currently held on the camera stream.
    #[must_use]
    pub fn live_tracks(&self) -> usize {
        self.live_tracks.load(Ordering::SeqCst)
    }

    /// Get the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
