//! # alpha-key
//!
//! Turns an image's background into transparency. Two heuristics are
//! available, one per kind of broken or to-be-cut-out image:
//!
//! ```text
//! gray-key (default)   opaque RGBA ──classify gray──> gray pixels → (0,0,0,0)
//! black-to-alpha       opaque RGB  ──alpha = max──>   un-premultiplied RGBA
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | The two pixel transforms, their thresholds, and the codec seam |
//! | [`process`] | Single-image driver: existence check, decode, transform, encode |
//! | [`config`] | Optional TOML overrides for thresholds and worker count |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Gray-Key Removal
//!
//! Editors that export transparency as a flattened checkerboard leave a
//! background of neutral mid-grays. A pixel is removed when its channel spread
//! (`max - min`) is below 30 and its brightness (`max`) is within `20..=245`.
//! The two protected bands keep white highlights and black outlines that
//! happen to be gray. Already-transparent pixels are skipped, which makes the
//! transform idempotent.
//!
//! ## Black-to-Alpha
//!
//! An image rendered on pure black is read as if it were premultiplied:
//! `alpha = max(R,G,B)` and each channel is scaled back up by `255 / alpha`.
//! Glows and other additive effects keep their hue and fade smoothly into
//! transparency; pure black vanishes entirely.
//!
//! ## Row-Parallel Transforms
//!
//! No output pixel reads any input pixel but its own, so both transforms split
//! the buffer into rows and let [rayon](https://docs.rs/rayon) schedule them.
//! The worker count follows `processing.max_processes` or `--threads`.
//!
//! ## In-Place Overwrite
//!
//! By default the converted image replaces the input file. Pass `--output` to
//! write elsewhere; the transforms themselves never see paths.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
