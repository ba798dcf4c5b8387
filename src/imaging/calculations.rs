//! Pure per-pixel calculations.
//!
//! All functions here are pure and testable without any I/O or images. Every
//! output pixel depends only on the input pixel at the same coordinate, which
//! is what lets [`operations`](super::operations) split work by rows.

use super::params::GrayKeyThresholds;
use image::{Rgb, Rgba};

/// Fully transparent black, the replacement for keyed-out pixels.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Cheap color-intensity proxy: `max(R,G,B) - min(R,G,B)`. 0 is neutral gray.
pub fn saturation(r: u8, g: u8, b: u8) -> u8 {
    r.max(g).max(b) - r.min(g).min(b)
}

/// Luminance proxy: `max(R,G,B)`.
pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
    r.max(g).max(b)
}

/// Whether an RGBA pixel belongs to a mid-gray background.
///
/// Already-transparent pixels never classify as background, so they are
/// neither rewritten nor counted.
pub fn is_background_gray(pixel: Rgba<u8>, thresholds: &GrayKeyThresholds) -> bool {
    let Rgba([r, g, b, a]) = pixel;
    if a == 0 {
        return false;
    }

    let brightness = brightness(r, g, b);
    let is_gray = saturation(r, g, b) < thresholds.saturation;
    let is_too_bright = brightness > thresholds.white;
    let is_too_dark = brightness < thresholds.black;

    is_gray && !is_too_bright && !is_too_dark
}

/// Gray-key a single pixel: `Some(TRANSPARENT)` if it is background, `None`
/// if it must pass through bit-for-bit.
pub fn key_gray_pixel(pixel: Rgba<u8>, thresholds: &GrayKeyThresholds) -> Option<Rgba<u8>> {
    is_background_gray(pixel, thresholds).then_some(TRANSPARENT)
}

/// Divide the black-backdrop darkening out of one channel.
///
/// `alpha` must be non-zero. The clamp only matters if `channel > alpha`,
/// which cannot happen while alpha is derived as the channel maximum.
pub fn unpremultiply_channel(channel: u8, alpha: u8) -> u8 {
    debug_assert!(alpha > 0);
    (u32::from(channel) * 255 / u32::from(alpha)).min(255) as u8
}

/// Recover `(true color, alpha)` from an opaque pixel composited on black.
///
/// Alpha is `max(R,G,B)`; pure black becomes fully transparent black.
pub fn unpremultiply(pixel: Rgb<u8>) -> Rgba<u8> {
    let Rgb([r, g, b]) = pixel;
    let alpha = brightness(r, g, b);
    if alpha == 0 {
        return TRANSPARENT;
    }
    Rgba([
        unpremultiply_channel(r, alpha),
        unpremultiply_channel(g, alpha),
        unpremultiply_channel(b, alpha),
        alpha,
    ])
}
