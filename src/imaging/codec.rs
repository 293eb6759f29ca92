//! Codec trait and shared error type.
//!
//! The [`ImageCodec`] trait defines the five collaborator operations the
//! pipeline needs: probe, decode, crop, resize, and encode. The pipeline is
//! written against this trait so its sequencing logic can be tested with a
//! mock, without decoding a single real pixel.
//!
//! The production implementation is
//! [`WebpCodec`](super::webp_codec::WebpCodec) — `image` crate decoders and
//! resampling, libwebp lossy encoding.

use std::time::Duration;
use thiserror::Error;

use super::geometry::{CropRect, Dimensions};
use super::params::{EncodeOptions, ImageInfo};

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("encode did not finish within {}s", .0.as_secs())]
    EncodeTimeout(Duration),
}

/// Trait for image codec collaborators.
///
/// Operations take and return images by value — the pipeline threads one
/// image linearly through crop → resize → encode, and ownership lets the
/// encoder move the image onto a helper thread to honor its timeout (hence
/// the `Send + 'static` bound on [`Image`](ImageCodec::Image)).
///
/// `crop` and `resize` are infallible: the pipeline only calls them with a
/// validated in-bounds rectangle and positive target dimensions.
pub trait ImageCodec {
    type Image: Send + 'static;

    /// Read header metadata: natural dimensions plus the animated flag.
    fn probe(&self, bytes: &[u8]) -> Result<ImageInfo, CodecError>;

    /// Decode into an in-memory image.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, CodecError>;

    /// Keep only the given region.
    fn crop(&self, image: Self::Image, rect: CropRect) -> Self::Image;

    /// Resample to exactly `target` (the caller decides fit vs fill).
    fn resize(&self, image: Self::Image, target: Dimensions) -> Self::Image;

    /// Encode to the output format, bounded by `opts.timeout` wall-clock.
    fn encode(&self, image: Self::Image, opts: &EncodeOptions) -> Result<Vec<u8>, CodecError>;
}
