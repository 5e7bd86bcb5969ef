#![allow(unused)]

use assert_cmd::{Command, cargo};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Helper to create a Command for the imgfit binary.
pub fn imgfit_cmd() -> Command {
    Command::new(cargo::cargo_bin!("imgfit"))
}

/// Helper to get a fresh temp directory.
pub fn temp_dir() -> TempDir {
    tempdir().expect("failed to create temp dir")
}

/// Write a synthetic gradient image and return its path.
pub fn write_image(dir: &Path, name: &str, format: ImageFormat, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
        .save_with_format(&path, format)
        .expect("failed to write test image");
    path
}

/// Decoded dimensions and sniffed format of `path`.
pub fn probe(path: &Path) -> (u32, u32, ImageFormat) {
    let reader = image::ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap();
    let format = reader.format().unwrap();
    let (w, h) = reader.into_dimensions().unwrap();
    (w, h, format)
}

pub fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}
