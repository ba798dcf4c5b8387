//! Single-image driver: check, decode, transform, encode.
//!
//! ## Flow
//!
//! ```text
//! input path ──exists?──> decode (RGBA or RGB) ──> transform ──> encode ──> output path
//! ```
//!
//! The decode format depends on the method: gray-key needs RGBA so existing
//! transparency is respected, black-to-alpha needs RGB because it derives
//! alpha from scratch and ignores whatever alpha the source had.
//!
//! ## Output Path
//!
//! Without an explicit output the result overwrites the input file. There is
//! no backup; the caller opts into a separate file with [`Request::output`].
//!
//! ## Progress Events
//!
//! Progress is reported through an optional channel of [`ProcessEvent`]s so
//! the CLI can print while tests can run silently or assert on the events.

use crate::imaging::{
    CodecError, GrayKeyThresholds, ImageCodec, Method, RustCodec, gray_key, luminance_alpha,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Unsupported output format: {}", .0.display())]
    UnsupportedOutput(PathBuf),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// What to convert and how.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub input: PathBuf,
    /// Where to write the result. `None` overwrites `input`.
    pub output: Option<PathBuf>,
    pub method: Method,
    /// Only consulted by [`Method::GrayKey`].
    pub thresholds: GrayKeyThresholds,
}

impl Request {
    /// A request with default thresholds that overwrites its input.
    pub fn new(input: impl Into<PathBuf>, method: Method) -> Self {
        Self {
            input: input.into(),
            output: None,
            method,
            thresholds: GrayKeyThresholds::default(),
        }
    }

    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Result of a completed conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub method: Method,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Pixels made transparent. Only gray-key counts; black-to-alpha
    /// rewrites every pixel and reports `None`.
    pub pixels_cleared: Option<u64>,
}

/// Progress events emitted while converting.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    Started { method: Method, input: PathBuf },
    Keyed { pixels_cleared: u64 },
    Saved { output: PathBuf },
}

pub fn process(
    request: &Request,
    events: Option<Sender<ProcessEvent>>,
) -> Result<Report, ProcessError> {
    process_with_codec(&RustCodec::new(), request, events)
}

/// Run a conversion with a specific codec (allows testing with mock).
pub fn process_with_codec(
    codec: &impl ImageCodec,
    request: &Request,
    events: Option<Sender<ProcessEvent>>,
) -> Result<Report, ProcessError> {
    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    if !request.input.exists() {
        return Err(ProcessError::SourceNotFound(request.input.clone()));
    }
    let output = request.output_path();
    if !codec.supports_output(output) {
        return Err(ProcessError::UnsupportedOutput(output.to_path_buf()));
    }

    emit(ProcessEvent::Started {
        method: request.method,
        input: request.input.clone(),
    });

    let (image, pixels_cleared) = match request.method {
        Method::GrayKey => {
            let mut image = codec.decode_rgba(&request.input)?;
            log::debug!(
                "gray-key {}x{} with {:?}",
                image.width(),
                image.height(),
                request.thresholds
            );
            let count = gray_key(&mut image, &request.thresholds);
            emit(ProcessEvent::Keyed {
                pixels_cleared: count,
            });
            (image, Some(count))
        }
        Method::LuminanceAlpha => {
            let source = codec.decode_rgb(&request.input)?;
            log::debug!("black-to-alpha {}x{}", source.width(), source.height());
            (luminance_alpha(&source), None)
        }
    };

    codec.encode_rgba(&image, output)?;
    emit(ProcessEvent::Saved {
        output: output.to_path_buf(),
    });

    Ok(Report {
        method: request.method,
        output: output.to_path_buf(),
        width: image.width(),
        height: image.height(),
        pixels_cleared,
    })
}
