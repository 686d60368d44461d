use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid frame configuration: {0}")]
    InvalidFrameConfig(String),

    #[error("Invalid idle timeout: {timeout_ms}ms (allowed {min_ms}-{max_ms}ms)")]
    InvalidIdleTimeout {
        timeout_ms: u64,
        min_ms: u64,
        max_ms: u64,
    },

    #[error("Invalid length bounds: min {min} must be > 0 and <= max {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
