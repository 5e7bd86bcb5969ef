//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the five operations the pipeline needs:
//! identify, copy, decode, resample, and encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock so the decision logic can be exercised
//! without touching pixels.

use super::params::{EncodeParams, ResizePlan, SourceInfo};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(String),
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl BackendError {
    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        BackendError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Sniff the format and read dimensions from the header, without decoding
    /// pixel data.
    fn identify(&self, path: &Path) -> Result<SourceInfo, BackendError>;

    /// Copy the file verbatim. Returns the number of bytes written.
    fn copy(&self, source: &Path, output: &Path) -> Result<u64, BackendError>;

    /// Fully decode the image into memory.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Resample to exactly the planned dimensions.
    fn resample(&self, image: DynamicImage, plan: ResizePlan) -> Result<DynamicImage, BackendError>;

    /// Create or truncate `output` and write the encoded image.
    fn encode(
        &self,
        image: &DynamicImage,
        params: &EncodeParams,
        output: &Path,
    ) -> Result<(), BackendError>;
}
