//! Pure geometry functions for resize and crop planning.
//!
//! All functions here are pure and testable without any I/O or images.
//! The pipeline computes target dimensions and crop rectangles up front,
//! then hands them to the codec; nothing in this module touches pixels.

use std::fmt;
use thiserror::Error;

/// Width and height of an image or a resize bound, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both axes fit within `bound`.
    pub fn fits_within(self, bound: Dimensions) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A crop request: a center point plus the size of the region to keep.
///
/// A center of exactly `(0, 0)` is the "unset" sentinel and resolves to the
/// image's geometric center — see [`resolve_crop_center`]. This means a
/// literal crop centered on pixel (0, 0) cannot be expressed; a known wart,
/// kept for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSpec {
    pub center_x: u32,
    pub center_y: u32,
    pub width: u32,
    pub height: u32,
}

/// An axis-aligned crop rectangle, validated to lie inside the image.
///
/// Half-open on both axes: the region spans `x0..x1` by `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CropRect {
    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// A requested crop rectangle extends past the image edge.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("crop rectangle ({x0},{y0})-({x1},{y1}) exceeds image bounds {bounds}")]
pub struct OutOfBounds {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
    pub bounds: Dimensions,
}

/// Calculate dimensions that fit within a bound, preserving aspect ratio.
///
/// Never upscales: if `orig` already fits within `bound` on both axes it is
/// returned unchanged. Otherwise the binding axis is scaled to its bound and
/// the other axis follows the original aspect ratio, rounded to the nearest
/// pixel.
///
/// Callers must reject zero-sized images first; `orig.height == 0` divides
/// by zero.
///
/// # Arguments
/// * `orig` - Source image dimensions
/// * `bound` - Maximum allowed dimensions
///
/// # Examples
/// ```
/// # use imgpress::imaging::{Dimensions, fit_dimensions};
/// // 16:9 source into a 4:3 bound: width binds
/// assert_eq!(
///     fit_dimensions(Dimensions::new(1920, 1080), Dimensions::new(800, 600)),
///     Dimensions::new(800, 450)
/// );
///
/// // Already fits: returned unchanged, never upscaled
/// assert_eq!(
///     fit_dimensions(Dimensions::new(640, 480), Dimensions::new(800, 600)),
///     Dimensions::new(640, 480)
/// );
/// ```
pub fn fit_dimensions(orig: Dimensions, bound: Dimensions) -> Dimensions {
    if orig.fits_within(bound) {
        return orig;
    }

    let ratio = orig.width as f64 / orig.height as f64;
    if bound.width as f64 / ratio > bound.height as f64 {
        // Scaling to the width bound would overshoot the height bound, so
        // the height bound binds.
        Dimensions {
            width: (bound.height as f64 * ratio).round() as u32,
            height: bound.height,
        }
    } else {
        Dimensions {
            width: bound.width,
            height: (bound.width as f64 / ratio).round() as u32,
        }
    }
}

/// Calculate dimensions for a fill resize: the requested size, verbatim.
///
/// Fill ignores the source aspect ratio entirely and is expected to distort
/// the image. The identity is spelled out as a function so the policy choice
/// reads the same as [`fit_dimensions`] at the call site.
pub fn fill_dimensions(requested: Dimensions) -> Dimensions {
    requested
}

/// Resolve the `(0, 0)` center sentinel to the image's geometric center.
///
/// Only the exact combination `center_x == 0 && center_y == 0` resolves;
/// any other zero/non-zero mix is taken literally. Integer division, so odd
/// bounds truncate toward the top-left.
pub fn resolve_crop_center(spec: CropSpec, bounds: Dimensions) -> CropSpec {
    if spec.center_x == 0 && spec.center_y == 0 {
        CropSpec {
            center_x: bounds.width / 2,
            center_y: bounds.height / 2,
            ..spec
        }
    } else {
        spec
    }
}

/// Compute and validate the crop rectangle for a spec within image bounds.
///
/// All arithmetic is truncating integer math: an odd crop width or height
/// yields a rectangle one pixel smaller than requested, asymmetric around
/// the center. Kept bit-exact for compatibility.
///
/// # Errors
/// [`OutOfBounds`] when any edge of the rectangle falls outside the image.
pub fn crop_rect(spec: CropSpec, bounds: Dimensions) -> Result<CropRect, OutOfBounds> {
    let half_w = (spec.width / 2) as i64;
    let half_h = (spec.height / 2) as i64;
    let x0 = spec.center_x as i64 - half_w;
    let y0 = spec.center_y as i64 - half_h;
    let x1 = spec.center_x as i64 + half_w;
    let y1 = spec.center_y as i64 + half_h;

    if x0 < 0 || y0 < 0 || x1 > bounds.width as i64 || y1 > bounds.height as i64 {
        return Err(OutOfBounds {
            x0,
            y0,
            x1,
            y1,
            bounds,
        });
    }

    Ok(CropRect {
        x0: x0 as u32,
        y0: y0 as u32,
        x1: x1 as u32,
        y1: y1 as u32,
    })
}
