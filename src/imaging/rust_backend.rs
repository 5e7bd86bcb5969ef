//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::with_guessed_format` + `into_dimensions` (header only) |
//! | Decode (PNG, GIF, JPEG, BMP, TIFF) | `ImageReader::decode` |
//! | Resample | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |
//! | Encode → PNG | `PngEncoder` with `CompressionType::Best` |
//! | Encode → GIF | `GifEncoder::encode_frame` (single frame) |
//!
//! Copy and encode both write into a staging file next to `output` and
//! rename it into place only once everything has been written, so a failure
//! never leaves a partial file behind nor touches an existing one.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::format::SourceFormat;
use super::params::{EncodeParams, ResizePlan, SourceInfo};
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, PngEncoder};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, Frame, ImageReader, Limits};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend {
    max_alloc: Option<u64>,
}

impl RustBackend {
    /// Backend that decodes images of any size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the bytes a single decode may allocate. `None` lifts the cap.
    pub fn with_max_alloc(max_alloc: Option<u64>) -> Self {
        Self { max_alloc }
    }

    /// Open `path` and sniff its format from the leading bytes.
    fn open_reader(&self, path: &Path) -> Result<(ImageReader<BufReader<File>>, u64), BackendError> {
        let file = File::open(path).map_err(|e| BackendError::file_access(path, e))?;
        let file_size = file
            .metadata()
            .map_err(|e| BackendError::file_access(path, e))?
            .len();
        let mut reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| BackendError::file_access(path, e))?;
        match self.max_alloc {
            Some(bytes) => {
                let mut limits = Limits::no_limits();
                limits.max_alloc = Some(bytes);
                reader.limits(limits);
            }
            None => reader.no_limits(),
        }
        Ok((reader, file_size))
    }
}

/// Create a staging file in the directory `output` will land in.
fn staging_file(output: &Path) -> Result<NamedTempFile, BackendError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = tempfile::Builder::new()
        .prefix(".imgfit-")
        .tempfile_in(dir)
        .map_err(|e| BackendError::file_access(output, e))?;
    // Staging files are created owner-only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| BackendError::file_access(output, e))?;
    }
    Ok(staged)
}

/// Move a fully written staging file onto `output`.
fn publish(staged: NamedTempFile, output: &Path) -> Result<(), BackendError> {
    staged
        .persist(output)
        .map(|_| ())
        .map_err(|e| BackendError::file_access(output, e.error))
}

fn sniffed_format<R: std::io::BufRead + Seek>(
    reader: &ImageReader<R>,
    path: &Path,
) -> Result<SourceFormat, BackendError> {
    let format = reader.format().ok_or_else(|| {
        BackendError::UnsupportedFormat(format!("{} is not a recognised image", path.display()))
    })?;
    SourceFormat::try_from(format)
}

/// JPEG has no alpha and only 8-bit samples.
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

fn write_encoded<W: Write>(
    image: &DynamicImage,
    params: &EncodeParams,
    writer: &mut W,
) -> image::ImageResult<()> {
    match params {
        EncodeParams::Jpeg { quality } => {
            let encoder = JpegEncoder::new_with_quality(&mut *writer, quality.value());
            jpeg_compatible(image).write_with_encoder(encoder)
        }
        EncodeParams::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut *writer,
                CompressionType::Best,
                image::codecs::png::FilterType::Adaptive,
            );
            image.write_with_encoder(encoder)
        }
        EncodeParams::Gif => {
            let mut encoder = GifEncoder::new(&mut *writer);
            encoder.encode_frame(Frame::new(image.to_rgba8()))
        }
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<SourceInfo, BackendError> {
        let (reader, file_size) = self.open_reader(path)?;
        let format = sniffed_format(&reader, path)?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| BackendError::Decode(format!("{} header: {e}", path.display())))?;
        Ok(SourceInfo {
            format,
            dimensions: Dimensions { width, height },
            file_size,
        })
    }

    fn copy(&self, source: &Path, output: &Path) -> Result<u64, BackendError> {
        // A file copied onto itself is already in place.
        if let (Ok(a), Ok(b)) = (source.canonicalize(), output.canonicalize()) {
            if a == b {
                return std::fs::metadata(source)
                    .map(|m| m.len())
                    .map_err(|e| BackendError::file_access(source, e));
            }
        }
        let mut reader = File::open(source).map_err(|e| BackendError::file_access(source, e))?;
        let mut staged = staging_file(output)?;
        let bytes = std::io::copy(&mut reader, staged.as_file_mut())
            .map_err(|e| BackendError::file_access(source, e))?;
        publish(staged, output)?;
        Ok(bytes)
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let (reader, _) = self.open_reader(path)?;
        sniffed_format(&reader, path)?;
        reader
            .decode()
            .map_err(|e| BackendError::Decode(format!("{}: {e}", path.display())))
    }

    fn resample(&self, image: DynamicImage, plan: ResizePlan) -> Result<DynamicImage, BackendError> {
        let source = Dimensions {
            width: image.width(),
            height: image.height(),
        };
        if plan.is_identity(source) {
            return Ok(image);
        }
        Ok(image.resize_exact(plan.width, plan.height, FilterType::Lanczos3))
    }

    fn encode(
        &self,
        image: &DynamicImage,
        params: &EncodeParams,
        output: &Path,
    ) -> Result<(), BackendError> {
        let mut staged = staging_file(output)?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            write_encoded(image, params, &mut writer)
                .map_err(|e| BackendError::Encode(format!("{}: {e}", params.format())))?;
            writer
                .flush()
                .map_err(|e| BackendError::file_access(output, e))?;
        }
        publish(staged, output)
    }
}
