//! Error types for camera operations.
//!
//! Acquisition failures are surfaced at `start()` time only and are never
//! retried automatically: the user re-triggers acquisition explicitly after
//! fixing the underlying condition (granting permission, plugging the
//! device in, closing the other application).

/// Result type alias for camera operations.
pub type Result<T> = std::result::Result<T, CameraError>;

/// Errors that can occur during camera operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CameraError {
    /// The user or platform denied camera access.
    #[error("Camera permission denied: {device}")]
    PermissionDenied { device: String },

    /// No camera device is available.
    #[error("Camera device not found: {device}")]
    DeviceNotFound { device: String },

    /// The camera is held by another process.
    #[error("Camera device in use: {device}")]
    DeviceInUse { device: String },

    /// Acquisition failed for a reason other than the above.
    #[error("Camera acquisition failed: {message}")]
    AcquisitionFailed { message: String },

    /// A frame could not be grabbed from an open device.
    #[error("Frame grab failed: {message}")]
    FrameGrab { message: String },

    /// An operation requires the device to be open.
    #[error("Camera not open: {operation}")]
    NotOpen { operation: String },

    /// The device side of a mock/driver channel has gone away.
    #[error("Camera disconnected: {device}")]
    Disconnected { device: String },

    /// Frame data inconsistent with its declared dimensions.
    #[error("Invalid frame: {message}")]
    InvalidFrame { message: String },
}

impl CameraError {
    /// Create a new permission denied error.
    pub fn permission_denied(device: impl Into<String>) -> Self {
        Self::PermissionDenied {
            device: device.into(),
        }
    }

    /// Create a new device not found error.
    pub fn device_not_found(device: impl Into<String>) -> Self {
        Self::DeviceNotFound {
            device: device.into(),
        }
    }

    /// Create a new device in use error.
    pub fn device_in_use(device: impl Into<String>) -> Self {
        Self::DeviceInUse {
            device: device.into(),
        }
    }

    /// Create a new acquisition failed error.
    pub fn acquisition_failed(message: impl Into<String>) -> Self {
        Self::AcquisitionFailed {
            message: message.into(),
        }
    }

    /// Create a new frame grab error.
    pub fn frame_grab(message: impl Into<String>) -> Self {
        Self::FrameGrab {
            message: message.into(),
        }
    }

    /// Create a new not-open error.
    pub fn not_open(operation: impl Into<String>) -> Self {
        Self::NotOpen {
            operation: operation.into(),
        }
    }

    /// Create a new disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }

    /// Create a new invalid frame error.
    pub fn invalid_frame(message: impl Into<String>) -> Self {
        Self::InvalidFrame {
            message: message.into(),
        }
    }

    /// Returns `true` for the acquisition-time failures surfaced by
    /// `start()`: permission denied, device not found, device in use, and
    /// generic acquisition failure.
    #[must_use]
    pub fn is_acquisition_error(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied { .. }
                | Self::DeviceNotFound { .. }
                | Self::DeviceInUse { .. }
                | Self::AcquisitionFailed { .. }
        )
    }
}
