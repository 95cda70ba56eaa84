//! CLI configuration for the `detframe` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::detect::FrameFormat;

/// Which decoder to run on the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Sniff the format from the buffer contents
    Auto,
    /// Force the CBF byte-offset decoder
    Cbf,
    /// Force the TIFF decoder
    Tiff,
}

impl FormatArg {
    /// The forced format, or `None` for auto-detection.
    pub fn forced(self) -> Option<FrameFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Cbf => Some(FrameFormat::Cbf),
            FormatArg::Tiff => Some(FrameFormat::Tiff),
        }
    }
}

/// detframe - decode an X-ray detector frame blob and report its shape.
///
/// Reads the whole file into memory, decodes it as CBF or TIFF, and prints
/// the frame dimensions and element type.
#[derive(Parser, Debug, Clone)]
#[command(name = "detframe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the frame blob to decode.
    pub file: PathBuf,

    /// Input format.
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

// =============================================================================
// Tests
// =============================================================================
