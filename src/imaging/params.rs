//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`pipeline`](crate::pipeline) (which decides what
//! to produce) and the [`codec`](super::codec) (which does the actual pixel
//! work). This separation allows swapping codecs (e.g. for testing with a
//! mock) without changing pipeline logic.

use std::time::Duration;

use super::geometry::Dimensions;

/// How to map the source image onto the target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Scale down to fit within the bounds, preserving aspect ratio.
    /// Never upscales.
    #[default]
    Fit,
    /// Force the exact target dimensions, ignoring the source aspect
    /// ratio. Distorts.
    Fill,
}

/// Options handed to the encoder.
///
/// `quality` is codec-specific (0–100 for WebP) and is forwarded to the
/// encoder without further validation; the CLI layer enforces the range.
/// `timeout` is the hard wall-clock bound on the encode — on expiry the
/// encode counts as failed, with no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub quality: u8,
    pub timeout: Duration,
}

/// Header metadata from a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub dimensions: Dimensions,
    /// Multi-frame content (animated GIF/WebP/APNG). Animated inputs get
    /// smaller resize bounds to keep encode time and output size down.
    pub animated: bool,
}
