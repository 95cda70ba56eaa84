//! Frame format detection.
//!
//! The data-acquisition broker hands over raw byte blobs without reliable
//! file names, so the caller sniffs the format from the first bytes: CBF
//! containers open with an ASCII `###CBF:` version banner, TIFF files with
//! the II/MM byte-order marker and version 42.

use crate::bytes::{find_subsequence, read_u16_be, read_u16_le};
use crate::cbf::BYTE_OFFSET_MARKER;
use crate::error::DecodeError;
use crate::frame::PixelData;
use crate::{cbf, tiff};

// =============================================================================
// FrameFormat
// =============================================================================

/// Prefix of the CBF version banner as sent by the broker.
const CBF_BANNER: &[u8] = b"###CBF:";

/// Detected frame format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// Crystallographic Binary Format with byte-offset compression
    Cbf,
    /// Classic TIFF
    Tiff,
}

impl FrameFormat {
    /// Get a human-readable name for the format.
    pub const fn name(&self) -> &'static str {
        match self {
            FrameFormat::Cbf => "CBF",
            FrameFormat::Tiff => "TIFF",
        }
    }
}

// =============================================================================
// Format Detection
// =============================================================================

/// Whether the buffer opens with a classic TIFF header (II/MM plus version 42).
pub fn is_tiff_header(buffer: &[u8]) -> bool {
    if buffer.len() < 4 {
        return false;
    }
    match &buffer[0..2] {
        b"II" => read_u16_le(&buffer[2..4]) == 42,
        b"MM" => read_u16_be(&buffer[2..4]) == 42,
        _ => false,
    }
}

/// Whether the buffer looks like a CBF container.
///
/// Either the broker's `###CBF:` banner opens the blob, or the byte-offset
/// conversion marker appears in the header (files read from disk may lack
/// the banner).
pub fn is_cbf_header(buffer: &[u8]) -> bool {
    buffer.starts_with(CBF_BANNER) || find_subsequence(buffer, BYTE_OFFSET_MARKER).is_some()
}

/// Detect the frame format from the buffer contents.
pub fn detect_format(buffer: &[u8]) -> Option<FrameFormat> {
    if buffer.starts_with(CBF_BANNER) {
        Some(FrameFormat::Cbf)
    } else if is_tiff_header(buffer) {
        Some(FrameFormat::Tiff)
    } else if is_cbf_header(buffer) {
        Some(FrameFormat::Cbf)
    } else {
        None
    }
}

/// Detect the format and decode the frame.
///
/// # Errors
/// `DecodeError::UnknownFormat` when the buffer matches neither signature,
/// otherwise the wrapped CBF or TIFF error.
pub fn decode(buffer: &[u8]) -> Result<PixelData, DecodeError> {
    match detect_format(buffer).ok_or(DecodeError::UnknownFormat)? {
        FrameFormat::Cbf => Ok(PixelData::I32(cbf::decode(buffer)?)),
        FrameFormat::Tiff => Ok(tiff::decode(buffer)?),
    }
}

// =============================================================================
// Tests
// =============================================================================
