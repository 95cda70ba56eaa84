//! detframe - decode an X-ray detector frame blob and report its shape.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use detframe::{cbf, config::Cli, decode, tiff, FrameFormat, PixelData};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let buffer = match std::fs::read(&cli.file) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("Cannot read {}: {}", cli.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.format.forced() {
        None => decode(&buffer),
        Some(FrameFormat::Cbf) => cbf::decode(&buffer)
            .map(PixelData::I32)
            .map_err(Into::into),
        Some(FrameFormat::Tiff) => tiff::decode(&buffer).map_err(Into::into),
    };

    match result {
        Ok(pixels) => {
            let (d0, d1) = pixels.dims();
            info!("{}: {} bytes", cli.file.display(), buffer.len());
            println!("shape ({d0}, {d1}) dtype {}", pixels.dtype_name());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Decode failed for {}: {}", cli.file.display(), e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with env-filter support.
///
/// `RUST_LOG` takes precedence; the verbose flag lowers the default level
/// to debug.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
