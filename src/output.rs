//! Result reporting on stdout.
//!
//! Callers parse exactly three lines:
//!
//! ```text
//! OK                    Error
//! <empty>               <stage codename>
//! <empty>               <detail>
//! ```
//!
//! The stage codename is one of `openImage`, `flatCopy`,
//! `getImageDimension`, `writeImage`. The detail is the underlying error
//! message folded onto a single line.
//!
//! [`format_outcome`] is pure and returns the lines; [`print_outcome`] writes
//! them to stdout. Logging goes to stderr and never interleaves with these.

use crate::convert::{ConvertError, Outcome};
use std::io::Write;

/// Format the three protocol lines for a pipeline result.
pub fn format_outcome(result: &Result<Outcome, ConvertError>) -> [String; 3] {
    match result {
        Ok(_) => ["OK".to_string(), String::new(), String::new()],
        Err(err) => [
            "Error".to_string(),
            err.stage.codename().to_string(),
            single_line(&err.source.to_string()),
        ],
    }
}

/// Write the protocol lines to stdout.
pub fn print_outcome(result: &Result<Outcome, ConvertError>) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in format_outcome(result) {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()
}

/// Collapse line breaks so a detail can never add protocol lines.
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Stage;
    use crate::imaging::{BackendError, OutputFormat, ResizePlan};

    #[test]
    fn success_is_ok_and_two_blank_lines() {
        let result = Ok(Outcome::Resized {
            plan: ResizePlan {
                width: 1,
                height: 1,
            },
            format: OutputFormat::Png,
        });
        assert_eq!(format_outcome(&result), ["OK", "", ""]);
    }

    #[test]
    fn copy_success_reports_identically() {
        let result = Ok(Outcome::Copied { bytes: 42 });
        assert_eq!(format_outcome(&result), ["OK", "", ""]);
    }

    #[test]
    fn failure_reports_codename_and_detail() {
        let result = Err(ConvertError::new(
            Stage::OpenImage,
            BackendError::UnsupportedFormat("x.bin is not a recognised image".to_string()),
        ));
        assert_eq!(
            format_outcome(&result),
            [
                "Error",
                "openImage",
                "unsupported image format: x.bin is not a recognised image"
            ]
        );
    }

    #[test]
    fn multiline_detail_is_folded() {
        let result = Err(ConvertError::new(
            Stage::WriteImage,
            BackendError::Encode("first\nsecond\r\n  third".to_string()),
        ));
        let lines = format_outcome(&result);
        assert_eq!(lines[1], "writeImage");
        assert_eq!(lines[2], "encode failed: first second third");
    }
}
