//! Input and output format types.
//!
//! Inputs are identified by sniffing header bytes, never by extension. The
//! set of decodable inputs is wider than the set of outputs: lossless
//! formats with a cheap encoder stay as they are, everything else lands on
//! JPEG.
//!
//! | Input | Output |
//! |---|---|
//! | PNG | PNG |
//! | GIF | GIF |
//! | JPEG, BMP, TIFF | JPEG |

use super::backend::BackendError;
use image::ImageFormat;
use std::fmt;

/// Format of a source file as reported by the header sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Gif,
    Jpeg,
    Bmp,
    Tiff,
}

/// Format written to the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Gif,
    Jpeg,
}

impl SourceFormat {
    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Png => "png",
            SourceFormat::Gif => "gif",
            SourceFormat::Jpeg => "jpeg",
            SourceFormat::Bmp => "bmp",
            SourceFormat::Tiff => "tiff",
        }
    }

    /// Canonical output format for this input.
    pub fn output_format(self) -> OutputFormat {
        match self {
            SourceFormat::Png => OutputFormat::Png,
            SourceFormat::Gif => OutputFormat::Gif,
            SourceFormat::Jpeg | SourceFormat::Bmp | SourceFormat::Tiff => OutputFormat::Jpeg,
        }
    }

    /// True when writing `output` needs no re-encoding of this input.
    pub fn matches(self, output: OutputFormat) -> bool {
        matches!(
            (self, output),
            (SourceFormat::Png, OutputFormat::Png)
                | (SourceFormat::Gif, OutputFormat::Gif)
                | (SourceFormat::Jpeg, OutputFormat::Jpeg)
        )
    }
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
            OutputFormat::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<ImageFormat> for SourceFormat {
    type Error = BackendError;

    fn try_from(format: ImageFormat) -> Result<Self, Self::Error> {
        match format {
            ImageFormat::Png => Ok(SourceFormat::Png),
            ImageFormat::Gif => Ok(SourceFormat::Gif),
            ImageFormat::Jpeg => Ok(SourceFormat::Jpeg),
            ImageFormat::Bmp => Ok(SourceFormat::Bmp),
            ImageFormat::Tiff => Ok(SourceFormat::Tiff),
            other => Err(BackendError::UnsupportedFormat(format!(
                "no decoder for {other:?}"
            ))),
        }
    }
}
