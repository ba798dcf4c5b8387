//! Pure Rust codec backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (BMP, GIF, ICO, JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | RGBA / RGB conversion | `DynamicImage::into_rgba8` / `into_rgb8` |
//! | Encode (BMP, GIF, ICO, PNG, TIFF, WebP) | `RgbaImage::save_with_format`, format from extension |

use super::backend::{CodecError, ImageCodec};
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::path::Path;
use std::sync::LazyLock;

/// Output formats that can store an alpha channel. JPEG decodes but is not
/// a valid output. GIF alpha is 1-bit and its palette is quantized; ICO is
/// limited to 256x256.
const ALPHA_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("ico", ImageFormat::Ico),
    ("bmp", ImageFormat::Bmp),
    ("gif", ImageFormat::Gif),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static ALPHA_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    ALPHA_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the output extensions that have an alpha-capable encoder compiled in.
pub fn supported_output_extensions() -> &'static [&'static str] {
    &ALPHA_EXTENSIONS
}

fn output_format(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    ALPHA_CANDIDATES
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.writing_enabled())
        .map(|(_, fmt)| *fmt)
}

/// `image`-crate codec.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk, sniffing the format from its bytes.
fn load_image(path: &Path) -> Result<DynamicImage, CodecError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| CodecError::Decode(format!("{}: {}", path.display(), e)))
}

impl ImageCodec for RustCodec {
    fn decode_rgba(&self, path: &Path) -> Result<RgbaImage, CodecError> {
        Ok(load_image(path)?.into_rgba8())
    }

    fn decode_rgb(&self, path: &Path) -> Result<RgbImage, CodecError> {
        Ok(load_image(path)?.into_rgb8())
    }

    fn encode_rgba(&self, image: &RgbaImage, path: &Path) -> Result<(), CodecError> {
        let format = output_format(path).ok_or_else(|| {
            CodecError::Encode(format!(
                "{}: unsupported output format (expected one of: {})",
                path.display(),
                supported_output_extensions().join(", ")
            ))
        })?;
        image
            .save_with_format(path, format)
            .map_err(|e| CodecError::Encode(format!("{}: {}", path.display(), e)))
    }

    fn supports_output(&self, path: &Path) -> bool {
        output_format(path).is_some()
    }
}
