//! The conversion pipeline.
//!
//! One invocation runs one strictly sequential pipeline:
//!
//! ```text
//! read → probe/decode → crop? → bound selection → fit/fill → encode → write
//! ```
//!
//! Every stage is a hard failure point — the first error propagates out and
//! the run is over, with no retry and no cleanup of files written by earlier
//! stages (a chained crop intermediate may survive a later failure).
//!
//! ## Bound selection
//!
//! Animated inputs are resized within [`JobConfig::animated_bounds`]
//! (default 800×600) instead of [`JobConfig::static_bounds`] (default
//! 1920×1080). Multi-frame content pays the encode cost per frame, so it
//! gets the smaller budget. This is policy, not an oversight.
//!
//! ## Chained crop
//!
//! When [`CropConfig::chain_output`](crate::config::CropConfig) is set, the
//! cropped image is encoded and written there, then re-read and re-probed as
//! the new input for the resize stages — two files end up on disk.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{ConfigError, JobConfig};
use crate::imaging::{
    CodecError, CropRect, CropSpec, Dimensions, ImageCodec, ImageInfo, OutOfBounds, ResizePolicy,
    crop_rect, fill_dimensions, fit_dimensions, resolve_crop_center,
};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to decode {path}: {source}")]
    Decode { path: PathBuf, source: CodecError },
    #[error(transparent)]
    Crop(#[from] OutOfBounds),
    #[error(transparent)]
    Encode(CodecError),
    #[error("unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What one successful run did, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// The original input as probed, before any crop.
    pub source: ImageInfo,
    /// Crop rectangle applied to the source, if cropping was requested.
    pub crop: Option<CropRect>,
    /// The resize bound that was selected (static or animated).
    pub bound: Dimensions,
    /// Final output dimensions.
    pub target: Dimensions,
    /// Size of the encoded output in bytes.
    pub output_len: usize,
}

/// Probe and decode one input, rejecting zero-sized images.
fn decode_input<C: ImageCodec>(
    codec: &C,
    path: &Path,
    bytes: &[u8],
) -> Result<(ImageInfo, C::Image), PipelineError> {
    let decode_err = |source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let info = codec.probe(bytes).map_err(decode_err)?;
    if info.dimensions.width == 0 || info.dimensions.height == 0 {
        return Err(decode_err(CodecError::Decode(format!(
            "zero-sized image ({})",
            info.dimensions
        ))));
    }
    let image = codec.decode(bytes).map_err(decode_err)?;
    Ok((info, image))
}

fn read_file(path: &Path) -> Result<Vec<u8>, PipelineError> {
    fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    fs::write(path, bytes).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Run one end-to-end conversion.
pub fn run<C: ImageCodec>(codec: &C, config: &JobConfig) -> Result<RunSummary, PipelineError> {
    config.validate()?;

    let bytes = read_file(&config.input)?;
    let (mut info, mut image) = decode_input(codec, &config.input, &bytes)?;
    let source = info;

    let mut applied_crop = None;
    if let Some(crop) = &config.crop {
        let spec = CropSpec {
            center_x: crop.center_x,
            center_y: crop.center_y,
            width: crop.width,
            height: crop.height,
        };
        let spec = resolve_crop_center(spec, info.dimensions);
        let rect = crop_rect(spec, info.dimensions)?;
        image = codec.crop(image, rect);
        info.dimensions = Dimensions::new(rect.width(), rect.height());
        applied_crop = Some(rect);

        if let Some(chain_path) = &crop.chain_output {
            let encoded = codec
                .encode(image, &config.encode_options())
                .map_err(PipelineError::Encode)?;
            write_file(chain_path, &encoded)?;

            // The intermediate becomes the new input, re-probed from disk.
            let bytes = read_file(chain_path)?;
            (info, image) = decode_input(codec, chain_path, &bytes)?;
        }
    }

    let bound = if info.animated {
        config.animated_bounds
    } else {
        config.static_bounds
    };
    let target = match config.policy {
        ResizePolicy::Fit => fit_dimensions(info.dimensions, bound),
        ResizePolicy::Fill => fill_dimensions(bound),
    };
    // Fit returns the source size unchanged when it already fits; skip the
    // no-op resample.
    if target != info.dimensions {
        image = codec.resize(image, target);
    }

    let encoded = codec
        .encode(image, &config.encode_options())
        .map_err(PipelineError::Encode)?;
    let output_len = encoded.len();
    write_file(&config.output, &encoded)?;

    Ok(RunSummary {
        source,
        crop: applied_crop,
        bound,
        target,
        output_len,
    })
}
