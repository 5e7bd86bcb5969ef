//! The resize-or-copy pipeline.
//!
//! One call to [`convert`] handles one input file:
//!
//! ```text
//! identify ─┬─ copy path ──► byte copy                     (terminal)
//!           └─ resize path ─► decode → resample → encode   (terminal)
//! ```
//!
//! Exactly one of the two paths runs. Every failure is fatal and carries the
//! [`Stage`] it happened in, so the caller can report it without inspecting
//! the cause. Nothing here prints or exits; that is left to the binary.

use crate::config::ToolConfig;
use crate::imaging::operations::{
    copy_image, decode_image, plan_conversion, resample_image, write_image,
};
use crate::imaging::{
    BackendError, Conversion, Dimensions, ImageBackend, OutputFormat, Quality, ResizePlan,
    TargetSpec,
};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening, sniffing, probing, or decoding the input.
    OpenImage,
    /// Copying the input verbatim.
    FlatCopy,
    /// The input's dimensions are unusable.
    GetImageDimension,
    /// Resampling, encoding, or writing the output.
    WriteImage,
}

impl Stage {
    /// Operation codename reported to callers.
    pub fn codename(self) -> &'static str {
        match self {
            Stage::OpenImage => "openImage",
            Stage::FlatCopy => "flatCopy",
            Stage::GetImageDimension => "getImageDimension",
            Stage::WriteImage => "writeImage",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codename())
    }
}

#[derive(Error, Debug)]
#[error("{stage}: {source}")]
pub struct ConvertError {
    pub stage: Stage,
    #[source]
    pub source: BackendError,
}

impl ConvertError {
    pub fn new(stage: Stage, source: BackendError) -> Self {
        Self { stage, source }
    }
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, ConvertError>;
}

impl<T> AtStage<T> for Result<T, BackendError> {
    fn at(self, stage: Stage) -> Result<T, ConvertError> {
        self.map_err(|e| ConvertError::new(stage, e))
    }
}

/// Everything needed for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target: TargetSpec,
    pub quality: Quality,
    pub small_file_threshold: u64,
}

impl ConvertRequest {
    /// Build a request from CLI values; `quality` falls back to the config.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        target: TargetSpec,
        quality: Option<u8>,
        config: &ToolConfig,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            target,
            quality: quality.map(Quality::new).unwrap_or_else(|| config.quality()),
            small_file_threshold: config.copy.small_file_threshold,
        }
    }
}

/// What a successful conversion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Copied { bytes: u64 },
    Resized { plan: ResizePlan, format: OutputFormat },
}

/// Run the pipeline for `request`.
pub fn convert(
    backend: &impl ImageBackend,
    request: &ConvertRequest,
) -> Result<Outcome, ConvertError> {
    let input: &Path = &request.input;
    let output: &Path = &request.output;

    let source = backend.identify(input).at(Stage::OpenImage)?;
    log::debug!(
        "{}: {} {}x{}, {} bytes",
        input.display(),
        source.format,
        source.dimensions.width,
        source.dimensions.height,
        source.file_size
    );
    check_dimensions(source.dimensions, input)?;

    match plan_conversion(
        &source,
        request.target,
        request.quality,
        request.small_file_threshold,
    ) {
        Conversion::Copy => {
            log::info!("copying {} → {}", input.display(), output.display());
            let bytes = copy_image(backend, input, output).at(Stage::FlatCopy)?;
            Ok(Outcome::Copied { bytes })
        }
        Conversion::Resize { plan, params } => {
            log::info!(
                "resizing {} → {} as {} {}x{}",
                input.display(),
                output.display(),
                params.format(),
                plan.width,
                plan.height
            );
            log::debug!("encode params: {params:?}");
            let image = decode_image(backend, input).at(Stage::OpenImage)?;
            let resized = match resample_image(backend, image, plan) {
                Err(e @ BackendError::InternalInvariant(_)) => {
                    return Err(ConvertError::new(Stage::GetImageDimension, e));
                }
                other => other.at(Stage::WriteImage)?,
            };
            write_image(backend, &resized, &params, output).at(Stage::WriteImage)?;
            Ok(Outcome::Resized {
                plan,
                format: params.format(),
            })
        }
    }
}

/// A zero-area image has no aspect ratio to preserve.
fn check_dimensions(dimensions: Dimensions, input: &Path) -> Result<(), ConvertError> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(ConvertError::new(
            Stage::GetImageDimension,
            BackendError::InvalidDimensions(format!(
                "{} reports {}x{} pixels",
                input.display(),
                dimensions.width,
                dimensions.height
            )),
        ));
    }
    Ok(())
}
