//! Image background transforms in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode / encode** | `image` crate via [`RustCodec`] |
//! | **Gray-key removal** | [`gray_key`] (rayon, row-parallel) |
//! | **Black-to-alpha** | [`luminance_alpha`] (rayon, row-parallel) |
//!
//! The module is split into:
//! - **Calculations**: Pure per-pixel functions (unit testable)
//! - **Parameters**: Threshold constants and the method selector
//! - **Backend**: [`ImageCodec`] trait + [`RustCodec`]
//! - **Operations**: Whole-buffer transforms built on the calculations

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{CodecError, ImageCodec};
pub use calculations::{
    TRANSPARENT, brightness, is_background_gray, key_gray_pixel, saturation, unpremultiply,
};
pub use operations::{gray_key, gray_keyed, luminance_alpha};
pub use params::{
    BRIGHTNESS_BLACK, BRIGHTNESS_WHITE, GrayKeyThresholds, Method, SATURATION_THRESHOLD,
};
pub use rust_backend::RustCodec;
