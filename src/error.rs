//! Errors surfaced by the desktop cluster.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("window size {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    InvalidSize { width: u32, height: u32, min_width: u32, min_height: u32 },

    #[error("pixel scale {scale} must be between 1 and {max}")]
    InvalidScale { scale: u32, max: u32 },

    #[error("the cluster is no longer receiving commands")]
    ControllerDisconnected,
}
