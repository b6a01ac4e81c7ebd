pub mod color;
pub mod error;
pub mod layout;

// Re-export primary types for convenience.
pub use color::Rgb;
pub use error::CoreError;
pub use layout::{IconLayout, Point, Rect, Segment};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
