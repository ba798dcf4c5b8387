//! Parameter types for the background transforms.
//!
//! These describe *which* transform runs and *where* its classification
//! boundaries sit. The pixel work itself lives in
//! [`operations`](super::operations) and [`calculations`](super::calculations).
//!
//! ## Types
//!
//! - [`GrayKeyThresholds`]: saturation/brightness gate for gray-key removal.
//!   Defaults to [`SATURATION_THRESHOLD`], [`BRIGHTNESS_WHITE`], [`BRIGHTNESS_BLACK`].
//! - [`Method`]: which of the two transforms a run applies.

use std::fmt;

/// Pixels with `max - min` strictly below this are considered neutral gray.
pub const SATURATION_THRESHOLD: u8 = 30;

/// Gray pixels brighter than this are protected highlights (245 itself is keyed).
pub const BRIGHTNESS_WHITE: u8 = 245;

/// Gray pixels darker than this are protected shadows (20 itself is keyed).
pub const BRIGHTNESS_BLACK: u8 = 20;

/// Classification gate for [`gray_key`](super::operations::gray_key).
///
/// A pixel is background iff `saturation < self.saturation` and
/// `self.black <= brightness <= self.white`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayKeyThresholds {
    pub saturation: u8,
    pub white: u8,
    pub black: u8,
}

impl Default for GrayKeyThresholds {
    fn default() -> Self {
        Self {
            saturation: SATURATION_THRESHOLD,
            white: BRIGHTNESS_WHITE,
            black: BRIGHTNESS_BLACK,
        }
    }
}

/// Which transform to apply to the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Remove a baked-in mid-gray (checkerboard) background.
    #[default]
    GrayKey,
    /// Treat a black background as premultiplied alpha and recover it.
    LuminanceAlpha,
}

impl Method {
    /// Select the method from the `--black-bg` flag.
    pub fn from_black_bg(black_bg: bool) -> Self {
        if black_bg {
            Method::LuminanceAlpha
        } else {
            Method::GrayKey
        }
    }

    /// Short console label used in progress lines.
    pub fn label(self) -> &'static str {
        match self {
            Method::GrayKey => "Gray Removal",
            Method::LuminanceAlpha => "Black-to-Alpha",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
