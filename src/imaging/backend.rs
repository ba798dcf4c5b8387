//! Image codec trait and shared error type.
//!
//! The transforms never touch files. The [`ImageCodec`] trait is the narrow
//! seam to whatever decodes a file into a pixel grid and encodes a grid back:
//!
//! | Operation | Pixel format handed over |
//! |---|---|
//! | `decode_rgba` | RGBA8, existing alpha kept (gray-key input) |
//! | `decode_rgb` | RGB8, any alpha dropped (black-to-alpha input) |
//! | `encode_rgba` | RGBA8, format chosen by the output extension |
//!
//! The production implementation is
//! [`RustCodec`](super::rust_backend::RustCodec), backed by the `image` crate.

use image::{RgbImage, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Trait for image codec backends.
///
/// Decoding must convert to the requested channel layout before returning;
/// the transforms assume the buffer already has the right shape.
pub trait ImageCodec: Sync {
    /// Decode a file into an RGBA8 grid.
    fn decode_rgba(&self, path: &Path) -> Result<RgbaImage, CodecError>;

    /// Decode a file into an RGB8 grid, treating the source as opaque.
    fn decode_rgb(&self, path: &Path) -> Result<RgbImage, CodecError>;

    /// Encode an RGBA8 grid to `path`, replacing any existing file.
    fn encode_rgba(&self, image: &RgbaImage, path: &Path) -> Result<(), CodecError>;

    /// Whether `path` names a format this codec can write with alpha intact.
    fn supports_output(&self, path: &Path) -> bool;
}
