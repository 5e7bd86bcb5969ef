//! Pure calculation functions for the resize-or-copy decision.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;
use super::format::OutputFormat;
use super::params::{ResizePlan, SourceInfo, TargetSpec};

/// Files at or above this size may shrink when re-encoded, so they are never
/// fast-path copied unless no resize was requested at all.
pub const DEFAULT_SMALL_FILE_THRESHOLD: u64 = 150_000;

/// Replace unconstrained (zero) bounds with the matching source dimension.
pub fn resolve_bounds(source: Dimensions, target: TargetSpec) -> Dimensions {
    Dimensions {
        width: if target.max_width == 0 {
            source.width
        } else {
            target.max_width
        },
        height: if target.max_height == 0 {
            source.height
        } else {
            target.max_height
        },
    }
}

/// Fit `source` inside `bounds` without upscaling or distorting.
///
/// The side that overflows is clamped to its bound and the other side is
/// scaled with truncating integer math, never below one pixel. A source
/// that already fits is returned unchanged.
///
/// # Examples
/// ```
/// # use imgfit::imaging::{Dimensions, fit_within};
/// let src = Dimensions { width: 2000, height: 1000 };
/// let bounds = Dimensions { width: 500, height: 500 };
/// assert_eq!(fit_within(src, bounds), Dimensions { width: 500, height: 250 });
/// ```
pub fn fit_within(source: Dimensions, bounds: Dimensions) -> Dimensions {
    if source.width <= bounds.width && source.height <= bounds.height {
        return source;
    }

    let mut width = u64::from(source.width);
    let mut height = u64::from(source.height);
    let max_w = u64::from(bounds.width);
    let max_h = u64::from(bounds.height);

    if width > max_w {
        height = (height * max_w / width).max(1);
        width = max_w;
    }
    if height > max_h {
        width = (width * max_h / height).max(1);
        height = max_h;
    }

    // Both values are bounded by u32 inputs.
    Dimensions {
        width: width as u32,
        height: height as u32,
    }
}

/// Compute the output dimensions for the resample path.
pub fn plan_resize(source: Dimensions, target: TargetSpec) -> ResizePlan {
    let fitted = fit_within(source, resolve_bounds(source, target));
    ResizePlan {
        width: fitted.width,
        height: fitted.height,
    }
}

/// Decide whether the conversion degenerates into a raw byte copy.
///
/// Requires the output format to equal the input format, and then either no
/// bounds at all, or bounds that the source already fits in while the file
/// is smaller than `small_file_threshold`.
pub fn should_copy(
    source: &SourceInfo,
    target: TargetSpec,
    output: OutputFormat,
    small_file_threshold: u64,
) -> bool {
    if !source.format.matches(output) {
        return false;
    }
    if target.is_unconstrained() {
        return true;
    }
    let bounds = resolve_bounds(source.dimensions, target);
    let fits = bounds.width >= source.dimensions.width && bounds.height >= source.dimensions.height;
    fits && source.file_size < small_file_threshold
}
