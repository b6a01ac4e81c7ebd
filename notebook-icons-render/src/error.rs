use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from rendering and exporting icons.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("ICO encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Core(#[from] notebook_icons_core::CoreError),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
