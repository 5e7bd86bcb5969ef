//! # imgfit
//!
//! A single-shot image transcoder. Given an input image, optional maximum
//! width/height, and an output path, it either copies the input verbatim or
//! writes a scaled-down, re-encoded version that fits the bounds.
//!
//! # Pipeline
//!
//! ```text
//! identify (header only) → decide → copy                       (terminal)
//!                                 ↘ decode → resample → encode (terminal)
//! ```
//!
//! Exactly one of the two paths runs per invocation. Every stage returns a
//! `Result`; the binary inspects the final result once, prints the three-line
//! report, and picks the exit code.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Format mapping, fit math, copy decision, and the `image`-crate backend |
//! | [`convert`] | Runs the pipeline and tags failures with their stage codename |
//! | [`output`] | The `OK` / `Error` stdout protocol |
//! | [`config`] | Copy threshold and default JPEG quality from an optional TOML file |
//!
//! # Design Decisions
//!
//! ## Probe Before Decode
//!
//! The copy decision only needs the format, the pixel dimensions, and the
//! file size. All three come from the header and the filesystem, so a file
//! that ends up copied is never fully decoded.
//!
//! ## Coarse Output Mapping
//!
//! PNG and GIF are passed through; JPEG, BMP and TIFF all become JPEG. See
//! [`imaging::format`].
//!
//! ## Lanczos3 Only
//!
//! Downscaling uses the windowed-sinc Lanczos3 kernel. Cheaper filters alias
//! visibly on photographic content.

pub mod config;
pub mod convert;
pub mod imaging;
pub mod output;
