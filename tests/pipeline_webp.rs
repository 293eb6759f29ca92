//! End-to-end pipeline tests with the production codec.
//!
//! Real JPEG/GIF in, real WebP out, through `pipeline::run`.

use image::{ImageEncoder, RgbImage};
use imgpress::config::{CropConfig, JobConfig};
use imgpress::imaging::{Dimensions, ImageCodec, ResizePolicy, WebpCodec};
use imgpress::pipeline::{self, PipelineError};
use std::path::Path;

/// Write a small valid JPEG with the given dimensions.
fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Probe an output file with the production codec.
fn probe(path: &Path) -> imgpress::imaging::ImageInfo {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[..4], b"RIFF", "output is not a WebP container");
    WebpCodec::new().probe(&bytes).unwrap()
}

#[test]
fn fit_downscales_oversized_jpeg() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    write_test_jpeg(&input, 2000, 1500);

    let config = JobConfig::new(&input, dir.path().join("out.webp"));
    let summary = pipeline::run(&WebpCodec::new(), &config).unwrap();

    assert_eq!(summary.target, Dimensions::new(1440, 1080));
    let info = probe(&config.output);
    assert_eq!(info.dimensions, Dimensions::new(1440, 1080));
    assert!(!info.animated);
}

#[test]
fn small_input_is_reencoded_unscaled() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    write_test_jpeg(&input, 320, 240);

    let config = JobConfig::new(&input, dir.path().join("out.webp"));
    let summary = pipeline::run(&WebpCodec::new(), &config).unwrap();

    assert_eq!(summary.target, Dimensions::new(320, 240));
    assert_eq!(probe(&config.output).dimensions, Dimensions::new(320, 240));
}

#[test]
fn center_crop_keeps_requested_region() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    write_test_jpeg(&input, 1000, 800);

    let mut config = JobConfig::new(&input, dir.path().join("out.webp"));
    config.crop = Some(CropConfig {
        center_x: 0,
        center_y: 0,
        width: 100,
        height: 100,
        chain_output: None,
    });
    let summary = pipeline::run(&WebpCodec::new(), &config).unwrap();

    let rect = summary.crop.unwrap();
    assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (450, 350, 550, 450));
    assert_eq!(probe(&config.output).dimensions, Dimensions::new(100, 100));
}

#[test]
fn fill_stretches_to_exact_bounds() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    write_test_jpeg(&input, 600, 300);

    let mut config = JobConfig::new(&input, dir.path().join("out.webp"));
    config.policy = ResizePolicy::Fill;
    config.static_bounds = Dimensions::new(300, 300);
    let summary = pipeline::run(&WebpCodec::new(), &config).unwrap();

    assert_eq!(summary.target, Dimensions::new(300, 300));
    assert_eq!(probe(&config.output).dimensions, Dimensions::new(300, 300));
}

#[test]
fn chained_crop_leaves_both_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    write_test_jpeg(&input, 1000, 800);

    let chain_path = dir.path().join("cropped.webp");
    let mut config = JobConfig::new(&input, dir.path().join("out.webp"));
    config.crop = Some(CropConfig {
        center_x: 500,
        center_y: 400,
        width: 200,
        height: 200,
        chain_output: Some(chain_path.clone()),
    });
    pipeline::run(&WebpCodec::new(), &config).unwrap();

    assert_eq!(probe(&chain_path).dimensions, Dimensions::new(200, 200));
    assert_eq!(probe(&config.output).dimensions, Dimensions::new(200, 200));
}

#[test]
fn corrupt_input_fails_at_decode() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    std::fs::write(&input, b"not an image at all").unwrap();

    let config = JobConfig::new(&input, dir.path().join("out.webp"));
    let err = pipeline::run(&WebpCodec::new(), &config).unwrap_err();
    assert!(matches!(err, PipelineError::Decode { .. }));
    assert!(!config.output.exists());
}

#[test]
fn out_of_bounds_crop_reports_rectangle() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.jpg");
    write_test_jpeg(&input, 100, 100);

    let mut config = JobConfig::new(&input, dir.path().join("out.webp"));
    config.crop = Some(CropConfig {
        center_x: 50,
        center_y: 50,
        width: 200,
        height: 200,
        chain_output: None,
    });
    let err = pipeline::run(&WebpCodec::new(), &config).unwrap_err();
    assert!(matches!(err, PipelineError::Crop(_)));
    assert!(err.to_string().contains("exceeds image bounds"));
}
