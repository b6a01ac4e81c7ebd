//! PNG and ICO encoding, and crash-safe file output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{DynamicImage, ExtendedColorType};
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Value of the `Software` tEXt chunk in every exported PNG.
pub const SOFTWARE_NAME: &str = "notebook-icons";

// ---------------------------------------------------------------------------
// Encoders
// ---------------------------------------------------------------------------

/// Encode a canvas as an 8-bit RGB PNG.
///
/// Uses the `png` crate directly so the file carries `Software` and
/// `Description` tEXt chunks.
pub fn encode_png<W: Write>(canvas: &Canvas, writer: W) -> crate::Result<()> {
    let size = canvas.size();
    let mut encoder = png::Encoder::new(writer, size, size);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), SOFTWARE_NAME.to_string())?;
    encoder.add_text_chunk(
        "Description".to_string(),
        format!("Notebook icon {size}x{size}"),
    )?;

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(canvas.as_raw())?;
    png_writer.finish()?;
    Ok(())
}

/// Encode a canvas as a single-frame ICO.
///
/// The frame is stored PNG-compressed at 32 bpp. ICO frames are limited
/// to 256 px; larger canvases fail with an image error.
pub fn encode_ico<W: Write>(canvas: &Canvas, writer: W) -> crate::Result<()> {
    let size = canvas.size();
    let rgba = DynamicImage::ImageRgb8(canvas.as_image().clone()).into_rgba8();
    let frame = IcoFrame::as_png(rgba.as_raw(), size, size, ExtendedColorType::Rgba8)?;
    IcoEncoder::new(writer).encode_images(&[frame])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Atomic output
// ---------------------------------------------------------------------------

/// Sibling path the encoder writes to before the final rename.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Removes the temporary file on drop unless it was renamed into place.
struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed temporary file {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Could not remove temporary file {}: {e}",
                self.path.display()
            ),
        }
    }
}

/// Write `path` by running `encode` into a temporary sibling file and
/// renaming it over `path`.
///
/// An existing file at `path` is replaced. If encoding, flushing or the
/// rename fails, the temporary file is deleted and the original error is
/// returned. Returns the size of the written file in bytes.
pub fn write_atomic<F>(path: &Path, encode: F) -> crate::Result<u64>
where
    F: FnOnce(&mut BufWriter<File>) -> crate::Result<()>,
{
    let tmp_path = temp_path_for(path);
    let file = File::create(&tmp_path).map_err(|e| RenderError::io(&tmp_path, e))?;
    let mut guard = TempFile {
        path: tmp_path,
        persisted: false,
    };

    let mut writer = BufWriter::new(file);
    encode(&mut writer)?;
    writer.flush().map_err(|e| RenderError::io(&guard.path, e))?;
    drop(writer);

    fs::rename(&guard.path, path).map_err(|e| RenderError::io(path, e))?;
    guard.persisted = true;

    let bytes = fs::metadata(path)
        .map_err(|e| RenderError::io(path, e))?
        .len();
    debug!("Wrote {} ({bytes} bytes)", path.display());
    Ok(bytes)
}
