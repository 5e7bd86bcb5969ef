//! High-level image operations.
//!
//! These functions combine calculations with backend execution. The copy
//! decision is made from a header probe alone; pixel data is only decoded
//! once the resample path has been chosen.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{plan_resize, should_copy};
use super::format::OutputFormat;
use super::params::{EncodeParams, Quality, ResizePlan, SourceInfo, TargetSpec};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Which of the two terminal paths a conversion takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Copy the input bytes verbatim.
    Copy,
    /// Decode, resample to `plan`, and encode with `params`.
    Resize {
        plan: ResizePlan,
        params: EncodeParams,
    },
}

/// Decide between copy and resize without executing anything.
pub fn plan_conversion(
    source: &SourceInfo,
    target: TargetSpec,
    quality: Quality,
    small_file_threshold: u64,
) -> Conversion {
    let output: OutputFormat = source.format.output_format();
    if should_copy(source, target, output, small_file_threshold) {
        return Conversion::Copy;
    }
    Conversion::Resize {
        plan: plan_resize(source.dimensions, target),
        params: EncodeParams::for_format(output, quality),
    }
}

/// Copy `source` to `output` byte for byte.
pub fn copy_image(backend: &impl ImageBackend, source: &Path, output: &Path) -> Result<u64> {
    backend.copy(source, output)
}

/// Fully decode `source`. Nothing is written on failure.
pub fn decode_image(backend: &impl ImageBackend, source: &Path) -> Result<image::DynamicImage> {
    backend.decode(source)
}

/// Resample a decoded image and check the result against the plan.
pub fn resample_image(
    backend: &impl ImageBackend,
    image: image::DynamicImage,
    plan: ResizePlan,
) -> Result<image::DynamicImage> {
    let resized = backend.resample(image, plan)?;
    if resized.width() != plan.width || resized.height() != plan.height {
        return Err(BackendError::InternalInvariant(format!(
            "resampled to {}x{} but planned {}x{}",
            resized.width(),
            resized.height(),
            plan.width,
            plan.height
        )));
    }
    Ok(resized)
}

/// Encode the final raster to `output`.
pub fn write_image(
    backend: &impl ImageBackend,
    image: &image::DynamicImage,
    params: &EncodeParams,
    output: &Path,
) -> Result<()> {
    backend.encode(image, params, output)
}
