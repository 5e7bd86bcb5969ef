use clap::Parser;
use imgfit::convert::{ConvertRequest, Outcome, convert};
use imgfit::imaging::{RustBackend, TargetSpec};
use imgfit::{config, output};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for a failed conversion.
const FAILURE_EXIT_CODE: u8 = 255;
/// Exit status for unusable arguments or config, matching clap's.
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "imgfit")]
#[command(version, about = "Fit an image inside a bounding box, or copy it if nothing would change")]
#[command(long_about = "\
Fit an image inside a bounding box, or copy it if nothing would change.

The input format is sniffed from the file header. PNG and GIF stay as they
are; JPEG, BMP and TIFF are written as JPEG. The image is scaled down with
Lanczos3 to fit within --width x --height, keeping its aspect ratio and
never upscaling. A bound of 0 means no constraint.

If the output format equals the input and either no bounds are given, or the
image already fits and is a small file, the input is copied byte for byte.

Result on stdout (three lines):
  OK / <empty> / <empty>
  Error / openImage|flatCopy|getImageDimension|writeImage / <detail>")]
struct Cli {
    /// Maximum width in pixels, 0 for no constraint
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Maximum height in pixels, 0 for no constraint
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// JPEG quality (1-100) [default: 85, or jpeg.quality from --config]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Source image
    #[arg(long, required_unless_present = "gen_config")]
    input: Option<PathBuf>,

    /// Destination path (its directory must exist)
    #[arg(long, required_unless_present = "gen_config")]
    output: Option<PathBuf>,

    /// TOML file overriding the copy threshold, default quality and decode cap
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a documented config file with all defaults and exit
    #[arg(long)]
    gen_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let tool_config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: invalid config: {e}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    // clap enforces both when --gen-config is absent.
    let (Some(input), Some(output_path)) = (cli.input, cli.output) else {
        eprintln!("error: --input and --output are required");
        return ExitCode::from(USAGE_EXIT_CODE);
    };

    let request = ConvertRequest::new(
        input,
        output_path,
        TargetSpec::new(cli.width, cli.height),
        cli.quality,
        &tool_config,
    );
    let backend = RustBackend::with_max_alloc(tool_config.decode.max_alloc_bytes);
    let result = convert(&backend, &request);

    match &result {
        Ok(Outcome::Copied { bytes }) => log::info!("file copied ({bytes} bytes)"),
        Ok(Outcome::Resized { plan, format }) => {
            log::info!("file resized to {}x{} {format}", plan.width, plan.height)
        }
        Err(e) => log::error!("{e}"),
    }

    if let Err(e) = output::print_outcome(&result) {
        log::error!("failed to write result: {e}");
        return ExitCode::from(FAILURE_EXIT_CODE);
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(FAILURE_EXIT_CODE)
    }
}
