//! CLI output formatting.
//!
//! The `format_*` functions are pure — no I/O, no side effects — and return
//! the lines to print, so tests can assert on exact output. The `print_*`
//! wrappers write to stdout.
//!
//! # Output format
//!
//! ```text
//! Source: 4000x3000
//! Crop: (450,350)-(550,450) → 100x100
//! Resized to 1440x1080 (fit within 1920x1080)
//! Image processed and saved to out.webp (53412 bytes)
//! ```

use crate::config::JobConfig;
use crate::imaging::ResizePolicy;
use crate::pipeline::RunSummary;

/// Format the report for one successful run.
pub fn format_summary(config: &JobConfig, summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();

    let animated = if summary.source.animated {
        " (animated)"
    } else {
        ""
    };
    lines.push(format!("Source: {}{}", summary.source.dimensions, animated));

    // Dimensions entering the resize stage
    let mut resize_input = summary.source.dimensions;
    if let Some(rect) = summary.crop {
        resize_input = crate::imaging::Dimensions::new(rect.width(), rect.height());
        lines.push(format!("Crop: {} → {}", rect, resize_input));
    }

    lines.push(match config.policy {
        ResizePolicy::Fill => format!("Resized to {} (fill)", summary.target),
        ResizePolicy::Fit if summary.target == resize_input => {
            format!("Resize skipped ({} fits within {})", resize_input, summary.bound)
        }
        ResizePolicy::Fit => {
            format!("Resized to {} (fit within {})", summary.target, summary.bound)
        }
    });

    lines.push(format!(
        "Image processed and saved to {} ({} bytes)",
        config.output.display(),
        summary.output_len
    ));

    lines
}

/// Print the run report to stdout.
pub fn print_summary(config: &JobConfig, summary: &RunSummary) {
    for line in format_summary(config, summary) {
        println!("{line}");
    }
}
