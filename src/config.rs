//! Job configuration.
//!
//! One [`JobConfig`] is built from the parsed CLI arguments, validated, and
//! passed by reference through the pipeline — there is no ambient mutable
//! state. Validation runs before any file is opened, so malformed parameters
//! never cost a decode.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::imaging::{Dimensions, EncodeOptions, ResizePolicy};

/// Default resize bound for static images.
pub const DEFAULT_STATIC_BOUNDS: Dimensions = Dimensions {
    width: 1920,
    height: 1080,
};

/// Default resize bound for animated images. Smaller than the static bound
/// on purpose: every frame of multi-frame content pays the encode cost.
pub const DEFAULT_ANIMATED_BOUNDS: Dimensions = Dimensions {
    width: 800,
    height: 600,
};

/// Default WebP quality.
pub const DEFAULT_QUALITY: u8 = 30;

/// Hard wall-clock bound on a single encode. Expiry counts as an encode
/// failure; there is no retry.
pub const ENCODE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Crop settings, present only when cropping was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropConfig {
    /// Center of the region. `(0, 0)` means the image center — see
    /// [`resolve_crop_center`](crate::imaging::resolve_crop_center).
    pub center_x: u32,
    pub center_y: u32,
    /// Size of the region to keep. Must be positive.
    pub width: u32,
    pub height: u32,
    /// Chained variant: write the cropped intermediate image here and
    /// re-read it as the input for the resize stages.
    pub chain_output: Option<PathBuf>,
}

/// Everything one conversion run needs, fixed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub crop: Option<CropConfig>,
    /// Resize bound applied to static images.
    pub static_bounds: Dimensions,
    /// Resize bound applied to animated images.
    pub animated_bounds: Dimensions,
    pub policy: ResizePolicy,
    /// Forwarded to the encoder as-is.
    pub quality: u8,
    pub encode_timeout: Duration,
}

impl JobConfig {
    /// A job with the stock bounds, quality, and timeout.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            crop: None,
            static_bounds: DEFAULT_STATIC_BOUNDS,
            animated_bounds: DEFAULT_ANIMATED_BOUNDS,
            policy: ResizePolicy::Fit,
            quality: DEFAULT_QUALITY,
            encode_timeout: ENCODE_TIMEOUT,
        }
    }

    /// Reject parameter combinations the geometry engine is not defined for.
    ///
    /// The CLI layer already constrains individual flags; this is the seam
    /// that protects programmatic callers too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(crop) = &self.crop {
            if crop.width == 0 || crop.height == 0 {
                return Err(ConfigError::InvalidParameter(format!(
                    "crop dimensions must be positive, got {}x{}",
                    crop.width, crop.height
                )));
            }
        }
        for (name, bounds) in [
            ("resize", self.static_bounds),
            ("animated resize", self.animated_bounds),
        ] {
            if bounds.width == 0 || bounds.height == 0 {
                return Err(ConfigError::InvalidParameter(format!(
                    "{name} bounds must be positive, got {bounds}"
                )));
            }
        }
        Ok(())
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            quality: self.quality,
            timeout: self.encode_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> JobConfig {
        JobConfig::new("in.jpg", "out.webp")
    }

    #[test]
    fn stock_job_is_valid() {
        assert!(stock().validate().is_ok());
    }

    #[test]
    fn stock_defaults_match_policy() {
        let config = stock();
        assert_eq!(config.static_bounds, Dimensions::new(1920, 1080));
        assert_eq!(config.animated_bounds, Dimensions::new(800, 600));
        assert_eq!(config.policy, ResizePolicy::Fit);
        assert_eq!(config.quality, 30);
        assert_eq!(config.encode_timeout, Duration::from_secs(30));
    }

    #[test]
    fn zero_crop_width_is_rejected() {
        let mut config = stock();
        config.crop = Some(CropConfig {
            center_x: 0,
            center_y: 0,
            width: 0,
            height: 100,
            chain_output: None,
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("crop dimensions"));
    }

    #[test]
    fn zero_bounds_are_rejected() {
        let mut config = stock();
        config.static_bounds = Dimensions::new(0, 1080);
        assert!(config.validate().is_err());

        let mut config = stock();
        config.animated_bounds = Dimensions::new(800, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn encode_options_mirror_config() {
        let mut config = stock();
        config.quality = 85;
        let opts = config.encode_options();
        assert_eq!(opts.quality, 85);
        assert_eq!(opts.timeout, ENCODE_TIMEOUT);
    }
}
