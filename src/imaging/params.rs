//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the [`operations`](super::operations) module (which decides between a
//! copy and a resize) and the [`backend`](super::backend) (which does the
//! actual pixel work).
//!
//! ## Types
//!
//! - [`Quality`] — JPEG quality (1–100, default 85). Clamped on construction.
//! - [`TargetSpec`] — Requested bounding box; `0` means "use the source dimension".
//! - [`ResizePlan`] — Resolved output dimensions.
//! - [`EncodeParams`] — Output format plus its codec settings.
//! - [`SourceInfo`] — What the header probe learned about the input.

use super::backend::Dimensions;
use super::format::{OutputFormat, SourceFormat};

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub const DEFAULT: u8 = 85;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Requested maximum output dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetSpec {
    pub max_width: u32,
    pub max_height: u32,
}

impl TargetSpec {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Both bounds are zero: keep the source size.
    pub fn is_unconstrained(&self) -> bool {
        self.max_width == 0 && self.max_height == 0
    }
}

/// Resolved output dimensions for the resample path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub width: u32,
    pub height: u32,
}

impl ResizePlan {
    pub fn is_identity(&self, source: Dimensions) -> bool {
        self.width == source.width && self.height == source.height
    }
}

/// Format-specific encoder settings.
///
/// PNG always uses best compression and GIF has no knobs, so only JPEG
/// carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeParams {
    Jpeg { quality: Quality },
    Png,
    Gif,
}

impl EncodeParams {
    /// Settings for `format`; `quality` only applies to JPEG.
    pub fn for_format(format: OutputFormat, quality: Quality) -> Self {
        match format {
            OutputFormat::Jpeg => EncodeParams::Jpeg { quality },
            OutputFormat::Png => EncodeParams::Png,
            OutputFormat::Gif => EncodeParams::Gif,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            EncodeParams::Jpeg { .. } => OutputFormat::Jpeg,
            EncodeParams::Png => OutputFormat::Png,
            EncodeParams::Gif => OutputFormat::Gif,
        }
    }
}

/// Result of a header-only probe of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub format: SourceFormat,
    pub dimensions: Dimensions,
    /// Size of the encoded file on disk, in bytes.
    pub file_size: u64,
}
