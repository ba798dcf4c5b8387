//! Shared test utilities for the alpha-key test suite.
//!
//! Synthetic fixtures that look like the two kinds of input the tool is for:
//! an icon exported over a gray checkerboard, and a glow rendered on black.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let path = write_png(tmp.path(), "icon.png", &checkerboard_icon(16, 16));
//! ```

use image::{
    ImageBuffer, ImageFormat, Pixel, PixelWithColorType, Rgb, RgbImage, Rgba, RgbaImage,
};
use std::path::{Path, PathBuf};

/// Light and dark squares of the editor-style transparency checkerboard.
pub const CHECKER_LIGHT: Rgba<u8> = Rgba([204, 204, 204, 255]);
pub const CHECKER_DARK: Rgba<u8> = Rgba([153, 153, 153, 255]);

/// Foreground color painted in the middle of [`checkerboard_icon`].
pub const ICON_RED: Rgba<u8> = Rgba([220, 30, 30, 255]);

/// Per-pixel gray checkerboard with a 4x4 red square at the center.
pub fn checkerboard_icon(width: u32, height: u32) -> RgbaImage {
    let (cx, cy) = (width / 2, height / 2);
    let in_square = |x: u32, y: u32| {
        (cx.saturating_sub(2)..cx + 2).contains(&x) && (cy.saturating_sub(2)..cy + 2).contains(&y)
    };
    RgbaImage::from_fn(width, height, |x, y| {
        if in_square(x, y) {
            ICON_RED
        } else if (x + y) % 2 == 0 {
            CHECKER_LIGHT
        } else {
            CHECKER_DARK
        }
    })
}

/// A cyan radial glow centered in a black frame, fading by 40 per pixel.
pub fn glow_on_black(width: u32, height: u32) -> RgbImage {
    let (cx, cy) = ((width / 2) as f32, (height / 2) as f32);
    RgbImage::from_fn(width, height, |x, y| {
        let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        let v = (255.0 - d * 40.0).max(0.0) as u8;
        Rgb([0, v, v])
    })
}

/// Save an image as PNG under `dir` and return its path.
pub fn write_png<P>(dir: &Path, name: &str, image: &ImageBuffer<P, Vec<u8>>) -> PathBuf
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    let path = dir.join(name);
    image.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}
