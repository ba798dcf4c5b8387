//! Whole-buffer background transforms.
//!
//! Both transforms are per-pixel maps with no cross-pixel reads, so rows are
//! handed to rayon as disjoint slices and joined at the end. The result is
//! identical to a sequential scan in any order.

use super::calculations::{key_gray_pixel, unpremultiply};
use super::params::GrayKeyThresholds;
use image::{Pixel, Rgb, RgbImage, Rgba, RgbaImage};
use rayon::prelude::*;

const RGBA_CHANNELS: usize = 4;
const RGB_CHANNELS: usize = 3;

/// Key out mid-gray background pixels in place.
///
/// Each write lands on the coordinate whose classification was just read, and
/// no pixel reads its neighbours, so mutating the input buffer is safe.
/// Returns the number of pixels replaced with transparent black.
pub fn gray_key(image: &mut RgbaImage, thresholds: &GrayKeyThresholds) -> u64 {
    let row_len = image.width() as usize * RGBA_CHANNELS;
    if row_len == 0 || image.height() == 0 {
        return 0;
    }

    let samples: &mut [u8] = image;
    samples
        .par_chunks_mut(row_len)
        .map(|row| gray_key_row(row, thresholds))
        .sum()
}

/// Non-mutating form of [`gray_key`]: returns the keyed copy and the count.
pub fn gray_keyed(image: &RgbaImage, thresholds: &GrayKeyThresholds) -> (RgbaImage, u64) {
    let mut out = image.clone();
    let count = gray_key(&mut out, thresholds);
    (out, count)
}

fn gray_key_row(row: &mut [u8], thresholds: &GrayKeyThresholds) -> u64 {
    let mut count = 0;
    for samples in row.chunks_exact_mut(RGBA_CHANNELS) {
        let pixel = Rgba::<u8>::from_slice_mut(samples);
        if let Some(keyed) = key_gray_pixel(*pixel, thresholds) {
            *pixel = keyed;
            count += 1;
        }
    }
    count
}

/// Convert a black-background image into an un-premultiplied RGBA image.
///
/// Alpha is taken from each pixel's luminance (`max(R,G,B)`) and color is
/// divided back up to full strength. Returns a new buffer of the same size.
pub fn luminance_alpha(source: &RgbImage) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut out = RgbaImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let src_row = width as usize * RGB_CHANNELS;
    let dst_row = width as usize * RGBA_CHANNELS;
    let src: &[u8] = source;
    let dst: &mut [u8] = &mut out;

    dst.par_chunks_mut(dst_row)
        .zip(src.par_chunks(src_row))
        .for_each(|(dst, src)| {
            for (d, s) in dst
                .chunks_exact_mut(RGBA_CHANNELS)
                .zip(src.chunks_exact(RGB_CHANNELS))
            {
                *Rgba::<u8>::from_slice_mut(d) = unpremultiply(*Rgb::<u8>::from_slice(s));
            }
        });

    out
}
