//! CBF (Crystallographic Binary Format) byte-offset decoder.
//!
//! Pilatus-style detectors emit frames as a hybrid container: an ASCII CIF
//! header followed by a byte-offset compressed binary section. [`decode`]
//! parses the header, decompresses the stream, and validates the result
//! against the declared dimensions.

mod decompress;
mod header;

pub use decompress::{decompress, ESCAPE_SENTINEL};
pub use header::{
    CbfHeader, BINARY_END_MARKER, BINARY_START_MARKER, BYTE_OFFSET_MARKER, KEY_FAST_DIM,
    KEY_NUM_ELEMENTS, KEY_PADDING, KEY_SECOND_DIM,
};

use crate::error::CbfError;
use crate::frame::Frame;

/// Decode a CBF blob into a `(fast_dim, slow_dim)` column-major i32 frame.
///
/// The buffer is borrowed for the duration of the call and never mutated;
/// nothing is retained between calls.
///
/// # Errors
/// Any header parse failure (see [`CbfHeader::parse`]), a truncated escape
/// payload, or a `DimensionMismatch` when the decompressed length minus
/// padding disagrees with the declared element count (or the declared
/// dimensions disagree with each other).
pub fn decode(buffer: &[u8]) -> Result<Frame<i32>, CbfError> {
    let header = CbfHeader::parse(buffer)?;
    let stream = &buffer[header.data.clone()];
    let mut values = decompress(stream, header.padding)?;

    let expected = header
        .elements
        .checked_add(header.padding)
        .ok_or(CbfError::DimensionMismatch {
            expected: header.elements,
            actual: values.len(),
        })?;
    if values.len() != expected {
        return Err(CbfError::DimensionMismatch {
            expected,
            actual: values.len(),
        });
    }

    values.truncate(header.elements);
    Frame::from_vec(header.fast_dim, header.slow_dim, values).ok_or(
        CbfError::DimensionMismatch {
            expected: header.elements,
            actual: header
                .fast_dim
                .checked_mul(header.slow_dim)
                .unwrap_or(usize::MAX),
        },
    )
}

// =============================================================================
// Tests
// =============================================================================
