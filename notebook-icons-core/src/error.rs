use thiserror::Error;

/// Errors originating from the icon geometry.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid icon size: {0} (must be >= 1)")]
    InvalidSize(u32),
}
