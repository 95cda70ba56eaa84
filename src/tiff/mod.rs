//! Minimal TIFF 6.0 decoder for uncompressed single-strip greyscale frames.
//!
//! Detector-adjacent TIFF producers (MAR165 and friends) write plain,
//! uncompressed, effectively single-strip files. This module parses exactly
//! that subset: classic TIFF header, one IFD, inline tag values, and a
//! contiguous pixel strip.

mod decoder;
mod parser;
mod tags;

pub use decoder::decode;
pub use parser::{ByteOrder, TiffHeader, IFD_ENTRY_SIZE, TIFF_HEADER_SIZE};
pub use tags::{FieldType, SampleFormat, TiffTag, COMPRESSION_NONE, PHOTOMETRIC_RGB};
