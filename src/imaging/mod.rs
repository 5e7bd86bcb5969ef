//! Image processing — pure Rust on top of the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::with_guessed_format` + `into_dimensions` |
//! | **Decode** | `ImageReader::decode` (PNG, GIF, JPEG, BMP, TIFF) |
//! | **Resample** | Lanczos3 via `DynamicImage::resize_exact` |
//! | **Encode** | JPEG (quality), PNG (best compression), GIF |
//!
//! The module is split into:
//! - **Format**: input/output format enums and the output mapping
//! - **Calculations**: Pure functions for bounds, fit, and the copy decision
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod format;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    DEFAULT_SMALL_FILE_THRESHOLD, fit_within, plan_resize, resolve_bounds, should_copy,
};
pub use format::{OutputFormat, SourceFormat};
pub use operations::{Conversion, plan_conversion};
pub use params::{EncodeParams, Quality, ResizePlan, SourceInfo, TargetSpec};
pub use rust_backend::RustBackend;
