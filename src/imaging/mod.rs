//! Image geometry and codec operations.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Probe** | `image::ImageReader` + per-format animation checks |
//! | **Decode** | `image` crate (pure Rust decoders) |
//! | **Crop / Resize** | `image::DynamicImage` (Lanczos3) |
//! | **Encode → WebP** | `webp` crate (libwebp, lossy) |
//!
//! The module is split into:
//! - **Geometry**: pure functions for dimension and crop math (unit testable)
//! - **Parameters**: data structures describing image operations
//! - **Codec**: [`ImageCodec`] trait + [`WebpCodec`]

pub mod codec;
mod geometry;
mod params;
pub mod webp_codec;

pub use codec::{CodecError, ImageCodec};
pub use geometry::{
    CropRect, CropSpec, Dimensions, OutOfBounds, crop_rect, fill_dimensions, fit_dimensions,
    resolve_crop_center,
};
pub use params::{EncodeOptions, ImageInfo, ResizePolicy};
pub use webp_codec::WebpCodec;
