//! Production codec — `image` crate decoders, libwebp lossy encoding.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Probe (dimensions) | `image::ImageReader::into_dimensions` |
//! | Probe (animation) | `GifDecoder` frames / `WebPDecoder::has_animation` / `PngDecoder::is_apng` |
//! | Decode (JPEG, PNG, GIF, WebP, TIFF) | `image` crate (pure Rust decoders) |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → WebP | `webp` crate (libwebp; the `image` crate only encodes lossless WebP) |
//!
//! The encode runs on a helper thread watched through an mpsc channel so the
//! wall-clock timeout is a hard bound. On expiry the abandoned thread is left
//! to finish and be discarded; the pipeline has already moved on to failure.

use std::io::Cursor;
use std::sync::mpsc::{self, RecvTimeoutError};

use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, DynamicImage, ImageFormat, ImageReader};

use super::codec::{CodecError, ImageCodec};
use super::geometry::{CropRect, Dimensions};
use super::params::{EncodeOptions, ImageInfo};

/// Codec backed by the `image` and `webp` crates.
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebpCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Sniff the container format from magic bytes.
fn guess_format(bytes: &[u8]) -> Result<ImageFormat, CodecError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::Decode(format!("cannot sniff image format: {e}")))?
        .format()
        .ok_or_else(|| CodecError::Decode("unrecognized image format".to_string()))
}

/// True when the GIF stream contains a second frame.
///
/// Decodes at most two frames; single-frame GIFs are treated as static.
fn gif_has_second_frame(bytes: &[u8]) -> Result<bool, CodecError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| CodecError::Decode(format!("broken GIF stream: {e}")))?;
    Ok(decoder.into_frames().take(2).count() > 1)
}

fn is_animated(format: ImageFormat, bytes: &[u8]) -> Result<bool, CodecError> {
    match format {
        ImageFormat::Gif => gif_has_second_frame(bytes),
        ImageFormat::WebP => {
            let decoder = WebPDecoder::new(Cursor::new(bytes))
                .map_err(|e| CodecError::Decode(format!("broken WebP stream: {e}")))?;
            Ok(decoder.has_animation())
        }
        ImageFormat::Png => PngDecoder::new(Cursor::new(bytes))
            .and_then(|d| d.is_apng())
            .map_err(|e| CodecError::Decode(format!("broken PNG stream: {e}"))),
        _ => Ok(false),
    }
}

impl ImageCodec for WebpCodec {
    type Image = DynamicImage;

    fn probe(&self, bytes: &[u8]) -> Result<ImageInfo, CodecError> {
        let format = guess_format(bytes)?;
        let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
            .into_dimensions()
            .map_err(|e| CodecError::Decode(format!("cannot read image header: {e}")))?;

        Ok(ImageInfo {
            dimensions: Dimensions::new(width, height),
            animated: is_animated(format, bytes)?,
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, CodecError> {
        let format = guess_format(bytes)?;
        ImageReader::with_format(Cursor::new(bytes), format)
            .decode()
            .map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn crop(&self, image: Self::Image, rect: CropRect) -> Self::Image {
        image.crop_imm(rect.x0, rect.y0, rect.width(), rect.height())
    }

    fn resize(&self, image: Self::Image, target: Dimensions) -> Self::Image {
        image.resize_exact(target.width, target.height, FilterType::Lanczos3)
    }

    fn encode(&self, image: Self::Image, opts: &EncodeOptions) -> Result<Vec<u8>, CodecError> {
        let quality = f32::from(opts.quality);
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            let encoded = webp::Encoder::from_rgba(rgba.as_raw(), width, height)
                .encode(quality)
                .to_vec();
            // The receiver may have given up on the timeout already.
            let _ = tx.send(encoded);
        });

        match rx.recv_timeout(opts.timeout) {
            Ok(bytes) => Ok(bytes),
            Err(RecvTimeoutError::Timeout) => Err(CodecError::EncodeTimeout(opts.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(CodecError::Encode(
                "encoder thread terminated abnormally".to_string(),
            )),
        }
    }
}
