use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::export::{encode_ico, encode_png, write_atomic};
use crate::renderer::render;

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// Container format of an exported icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Png,
    Ico,
}

impl IconFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Ico => "image/x-icon",
        }
    }
}

/// One file of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: &'static str,
    pub size: u32,
    pub format: IconFormat,
    /// Listed in the web app manifest `icons` array.
    pub in_manifest: bool,
}

/// Every file the exporter writes, in export order.
pub const ICON_TARGETS: [IconTarget; 4] = [
    IconTarget {
        file_name: "icon-192.png",
        size: 192,
        format: IconFormat::Png,
        in_manifest: true,
    },
    IconTarget {
        file_name: "icon-512.png",
        size: 512,
        format: IconFormat::Png,
        in_manifest: true,
    },
    IconTarget {
        file_name: "favicon.ico",
        size: 32,
        format: IconFormat::Ico,
        in_manifest: false,
    },
    IconTarget {
        file_name: "apple-touch-icon.png",
        size: 180,
        format: IconFormat::Png,
        in_manifest: false,
    },
];

/// A file written by [`export_icon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub target: IconTarget,
    pub path: PathBuf,
    pub bytes: u64,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Render one target and write it into `dir`, replacing any existing file.
pub fn export_icon(dir: &Path, target: &IconTarget) -> crate::Result<ExportedIcon> {
    let canvas = render(target.size)?;
    let path = dir.join(target.file_name);
    let bytes = match target.format {
        IconFormat::Png => write_atomic(&path, |w| encode_png(&canvas, w))?,
        IconFormat::Ico => write_atomic(&path, |w| encode_ico(&canvas, w))?,
    };
    debug!(file = target.file_name, size = target.size, bytes, "Exported icon");
    Ok(ExportedIcon {
        target: *target,
        path,
        bytes,
    })
}

/// Write the whole icon set into `dir`.
///
/// Targets are independent, so they are rendered and written in parallel.
/// The result follows [`ICON_TARGETS`] order. Stops at the first error;
/// files already written by other targets are left in place.
pub fn export_all(dir: &Path) -> crate::Result<Vec<ExportedIcon>> {
    let start = Instant::now();
    let exported = ICON_TARGETS
        .par_iter()
        .map(|target| export_icon(dir, target))
        .collect::<crate::Result<Vec<_>>>()?;
    info!(
        count = exported.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Icon set written to {}",
        dir.display()
    );
    Ok(exported)
}

// ---------------------------------------------------------------------------
// Web app manifest
// ---------------------------------------------------------------------------

/// An entry of the web app manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Manifest entries for the exported icons that belong in `manifest.json`.
pub fn manifest_icons(exported: &[ExportedIcon]) -> Vec<ManifestIcon> {
    exported
        .iter()
        .filter(|icon| icon.target.in_manifest)
        .map(|icon| ManifestIcon {
            src: icon.target.file_name.to_string(),
            sizes: format!("{0}x{0}", icon.target.size),
            mime_type: icon.target.format.mime_type(),
        })
        .collect()
}
