use clap::Parser;
use imgpress::config::{self, CropConfig, JobConfig};
use imgpress::imaging::{Dimensions, ResizePolicy, WebpCodec};
use imgpress::{output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "imgpress")]
#[command(about = "Crop, downscale, and re-encode a single image to lossy WebP")]
#[command(long_about = "\
Crop, downscale, and re-encode a single image to lossy WebP

Reads one image (JPEG, PNG, GIF, WebP, or TIFF), optionally crops a region
around a center point, scales the result down to fit the configured bounds,
and writes a lossy WebP file to the destination, replacing any existing
file.

Animated inputs (multi-frame GIF/WebP/APNG) are resized within the smaller
--gif-width/--gif-height bounds to keep encode time and output size down.

Cropping:

  --crop --crop-width W --crop-height H keeps a WxH region centered on
  (--crop-x, --crop-y). Leaving the center at its default (0, 0) selects
  the image center — which also means a crop literally centered on pixel
  (0, 0) cannot be requested. With --crop-output PATH the cropped image is
  written there first and re-read before resizing (two files are produced).

The first failing stage terminates the run with a non-zero exit status;
nothing is retried, and files already written by earlier stages are left
on disk.")]
#[command(version)]
struct Cli {
    /// Input image (JPEG, PNG, GIF, WebP, or TIFF)
    input: PathBuf,

    /// Destination for the WebP output — replaced if it exists
    output: PathBuf,

    /// Crop a region around a center point before resizing
    #[arg(long, requires_all = ["crop_width", "crop_height"])]
    crop: bool,

    /// Width of the crop region in pixels
    #[arg(long, requires = "crop", value_parser = clap::value_parser!(u32).range(1..))]
    crop_width: Option<u32>,

    /// Height of the crop region in pixels
    #[arg(long, requires = "crop", value_parser = clap::value_parser!(u32).range(1..))]
    crop_height: Option<u32>,

    /// Horizontal center of the crop region
    #[arg(long, default_value_t = 0, requires = "crop")]
    crop_x: u32,

    /// Vertical center of the crop region
    #[arg(long, default_value_t = 0, requires = "crop")]
    crop_y: u32,

    /// Write the cropped image here and re-read it before resizing
    #[arg(long, requires = "crop")]
    crop_output: Option<PathBuf>,

    /// Resize bound width for static images
    #[arg(long, default_value_t = config::DEFAULT_STATIC_BOUNDS.width,
          value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Resize bound height for static images
    #[arg(long, default_value_t = config::DEFAULT_STATIC_BOUNDS.height,
          value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Resize bound width for animated images
    #[arg(long, default_value_t = config::DEFAULT_ANIMATED_BOUNDS.width,
          value_parser = clap::value_parser!(u32).range(1..))]
    gif_width: u32,

    /// Resize bound height for animated images
    #[arg(long, default_value_t = config::DEFAULT_ANIMATED_BOUNDS.height,
          value_parser = clap::value_parser!(u32).range(1..))]
    gif_height: u32,

    /// Stretch to the exact bound dimensions instead of fitting within them
    #[arg(long)]
    resize_fill: bool,

    /// WebP quality (0-100)
    #[arg(long, default_value_t = config::DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,
}

fn build_config(cli: Cli) -> JobConfig {
    let crop = cli.crop.then(|| CropConfig {
        center_x: cli.crop_x,
        center_y: cli.crop_y,
        width: cli.crop_width.unwrap_or_default(),
        height: cli.crop_height.unwrap_or_default(),
        chain_output: cli.crop_output.clone(),
    });

    JobConfig {
        input: cli.input,
        output: cli.output,
        crop,
        static_bounds: Dimensions::new(cli.width, cli.height),
        animated_bounds: Dimensions::new(cli.gif_width, cli.gif_height),
        policy: if cli.resize_fill {
            ResizePolicy::Fill
        } else {
            ResizePolicy::Fit
        },
        quality: cli.quality,
        encode_timeout: config::ENCODE_TIMEOUT,
    }
}

fn main() -> ExitCode {
    let config = build_config(Cli::parse());

    match pipeline::run(&WebpCodec::new(), &config) {
        Ok(summary) => {
            output::print_summary(&config, &summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_map_to_stock_config() {
        let cli = Cli::parse_from(["imgpress", "in.jpg", "out.webp"]);
        let config = build_config(cli);
        assert_eq!(config, JobConfig::new("in.jpg", "out.webp"));
    }

    #[test]
    fn crop_flags_build_crop_config() {
        let cli = Cli::parse_from([
            "imgpress",
            "in.jpg",
            "out.webp",
            "--crop",
            "--crop-width",
            "100",
            "--crop-height",
            "80",
            "--crop-x",
            "500",
            "--crop-y",
            "400",
        ]);
        let config = build_config(cli);
        assert_eq!(
            config.crop,
            Some(CropConfig {
                center_x: 500,
                center_y: 400,
                width: 100,
                height: 80,
                chain_output: None,
            })
        );
    }

    #[test]
    fn crop_requires_dimensions() {
        let result = Cli::try_parse_from(["imgpress", "in.jpg", "out.webp", "--crop"]);
        assert!(result.is_err());
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        let result =
            Cli::try_parse_from(["imgpress", "in.jpg", "out.webp", "--quality", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn resize_fill_selects_fill_policy() {
        let cli = Cli::parse_from(["imgpress", "in.jpg", "out.webp", "--resize-fill"]);
        assert_eq!(build_config(cli).policy, ResizePolicy::Fill);
    }
}
