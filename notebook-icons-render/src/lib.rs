pub mod batch;
pub mod canvas;
pub mod error;
pub mod export;
pub mod renderer;

pub use batch::{
    export_all, export_icon, manifest_icons, ExportedIcon, IconFormat, IconTarget, ManifestIcon,
    ICON_TARGETS,
};
pub use canvas::Canvas;
pub use error::RenderError;
pub use export::{encode_ico, encode_png, write_atomic};
pub use renderer::render;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
