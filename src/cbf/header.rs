//! CBF container header parsing.
//!
//! A CBF file is a text/binary hybrid: an ASCII CIF header carrying
//! `X-Binary-*` key/value lines, followed by a binary section bracketed by
//! fixed byte markers. This module locates the binary section and recovers
//! the four integer header fields the decompressor needs.
//!
//! The offset arithmetic around each field follows the CIF text-trailer
//! convention: a value runs from the end of its key up to the CRLF that
//! precedes the next key (2 bytes), and the padding value additionally
//! precedes CRLF CRLF, a form feed, and the 3-byte start marker (8 bytes).

use std::ops::Range;

use crate::bytes::find_subsequence;
use crate::error::CbfError;

// =============================================================================
// Markers
// =============================================================================

/// Conversion marker present when the binary section is byte-offset compressed.
pub const BYTE_OFFSET_MARKER: &[u8] = b"x-CBF_BYTE_OFFSET";

/// The binary data stream begins immediately after these bytes.
pub const BINARY_START_MARKER: &[u8] = &[0x1A, 0x04, 0xD5];

/// The binary section trailer; the data stream ends shortly before it.
pub const BINARY_END_MARKER: &[u8] = b"--CIF-BINARY-FORMAT-SECTION---";

/// Key for the total element count.
pub const KEY_NUM_ELEMENTS: &[u8] = b"X-Binary-Number-of-Elements:";

/// Key for the fastest-varying dimension.
pub const KEY_FAST_DIM: &[u8] = b"X-Binary-Size-Fastest-Dimension:";

/// Key for the second (slow) dimension.
pub const KEY_SECOND_DIM: &[u8] = b"X-Binary-Size-Second-Dimension:";

/// Key for the number of padding bytes trailing the compressed stream.
pub const KEY_PADDING: &[u8] = b"X-Binary-Size-Padding:";

// =============================================================================
// CbfHeader
// =============================================================================

/// Parsed CBF header fields plus the location of the compressed data stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CbfHeader {
    /// Declared total number of image elements.
    pub elements: usize,

    /// Fastest-varying dimension of the image.
    pub fast_dim: usize,

    /// Second (slow) dimension of the image.
    pub slow_dim: usize,

    /// Number of padding bytes at the end of the compressed stream.
    pub padding: usize,

    /// Byte range of the compressed data stream within the buffer.
    pub data: Range<usize>,
}

impl CbfHeader {
    /// Locate the binary section and parse the four header fields.
    ///
    /// # Errors
    /// - `MarkerNotFound` if the conversion marker, either section marker,
    ///   or any of the four keys is absent
    /// - `MetadataParse` if a field is not ASCII integer text
    /// - `EmptyBinarySection` if the section end precedes its start
    /// - `BufferTooShort` if a field span falls outside the buffer
    pub fn parse(buffer: &[u8]) -> Result<Self, CbfError> {
        find_subsequence(buffer, BYTE_OFFSET_MARKER)
            .ok_or(CbfError::MarkerNotFound("x-CBF_BYTE_OFFSET"))?;

        let data_start = find_subsequence(buffer, BINARY_START_MARKER)
            .ok_or(CbfError::MarkerNotFound("binary start marker"))?
            + BINARY_START_MARKER.len();

        // The two bytes before the end marker are the CRLF terminating the
        // stream, not data.
        let end_pos = find_subsequence(buffer, BINARY_END_MARKER)
            .ok_or(CbfError::MarkerNotFound("--CIF-BINARY-FORMAT-SECTION---"))?;
        let data_end = end_pos
            .checked_sub(2)
            .ok_or(CbfError::EmptyBinarySection)?;
        if data_end < data_start {
            return Err(CbfError::EmptyBinarySection);
        }

        let pos_elements = find_key(buffer, KEY_NUM_ELEMENTS, "X-Binary-Number-of-Elements")?;
        let pos_fast = find_key(buffer, KEY_FAST_DIM, "X-Binary-Size-Fastest-Dimension")?;
        let pos_second = find_key(buffer, KEY_SECOND_DIM, "X-Binary-Size-Second-Dimension")?;
        let pos_padding = find_key(buffer, KEY_PADDING, "X-Binary-Size-Padding")?;

        let elements = parse_field(
            buffer,
            pos_elements + KEY_NUM_ELEMENTS.len(),
            pos_fast.checked_sub(2),
            "X-Binary-Number-of-Elements",
        )?;
        let fast_dim = parse_field(
            buffer,
            pos_fast + KEY_FAST_DIM.len(),
            pos_second.checked_sub(2),
            "X-Binary-Size-Fastest-Dimension",
        )?;
        let slow_dim = parse_field(
            buffer,
            pos_second + KEY_SECOND_DIM.len(),
            pos_padding.checked_sub(2),
            "X-Binary-Size-Second-Dimension",
        )?;
        let padding = parse_field(
            buffer,
            pos_padding + KEY_PADDING.len(),
            data_start.checked_sub(8),
            "X-Binary-Size-Padding",
        )?;

        Ok(CbfHeader {
            elements,
            fast_dim,
            slow_dim,
            padding,
            data: data_start..data_end,
        })
    }
}

fn find_key(buffer: &[u8], key: &[u8], name: &'static str) -> Result<usize, CbfError> {
    find_subsequence(buffer, key).ok_or(CbfError::MarkerNotFound(name))
}

/// Parse the ASCII integer text in `buffer[from..to]`, trimming whitespace.
fn parse_field(
    buffer: &[u8],
    from: usize,
    to: Option<usize>,
    field: &'static str,
) -> Result<usize, CbfError> {
    let to = to.ok_or(CbfError::BufferTooShort {
        required: from,
        actual: buffer.len(),
    })?;
    let span = buffer
        .get(from..to)
        .ok_or(CbfError::BufferTooShort {
            required: to,
            actual: buffer.len(),
        })?;
    let text = std::str::from_utf8(span).map_err(|_| CbfError::MetadataParse {
        field,
        message: "field is not ASCII text".to_string(),
    })?;
    text.trim()
        .parse::<usize>()
        .map_err(|e| CbfError::MetadataParse {
            field,
            message: e.to_string(),
        })
}

// =============================================================================
// Tests
// =============================================================================
