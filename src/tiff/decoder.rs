//! IFD walk and strip reinterpretation.
//!
//! Decodes an uncompressed, effectively single-strip greyscale TIFF blob:
//! walk the first IFD, collect the tags that carry interpreted semantics,
//! validate the declared strip size against the dimensions, and reinterpret
//! the strip bytes as the typed element array the sample-format and
//! bits-per-sample tags select.

use tracing::{debug, warn};

use crate::error::TiffError;
use crate::frame::{Frame, PixelData};

use super::parser::{ByteOrder, TiffHeader, IFD_ENTRY_SIZE};
use super::tags::{FieldType, SampleFormat, TiffTag, COMPRESSION_NONE, PHOTOMETRIC_RGB};

// =============================================================================
// IFD Summary
// =============================================================================

/// Tag values collected while walking the IFD.
#[derive(Debug, Default)]
struct IfdSummary {
    width: Option<i64>,
    height: Option<i64>,
    bits_per_sample: Option<i64>,
    strip_offset: Option<i64>,
    rows_per_strip: Option<i64>,
    strip_byte_count: Option<i64>,
    sample_format: Option<i64>,
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a TIFF blob into a `(width, height)` column-major typed frame.
///
/// The buffer is borrowed for the duration of the call and never mutated.
/// Unknown tags are ignored; entries with an unsupported field type are
/// skipped. A non-zero next-IFD pointer is logged and not followed.
///
/// # Errors
/// See [`TiffError`]; every failure condition of the format contract maps to
/// a distinct variant.
pub fn decode(buffer: &[u8]) -> Result<PixelData, TiffError> {
    let header = TiffHeader::parse(buffer)?;
    let byte_order = header.byte_order;
    let ifd_offset = header.ifd_offset as usize;

    let entry_count = byte_order.read_u16(checked_slice(buffer, ifd_offset, 2)?) as usize;

    let mut summary = IfdSummary::default();
    for index in 0..entry_count {
        let entry_offset = ifd_offset + 2 + index * IFD_ENTRY_SIZE;
        let entry = checked_slice(buffer, entry_offset, IFD_ENTRY_SIZE)?;

        let tag_id = byte_order.read_u16(&entry[0..2]);
        let type_id = byte_order.read_u16(&entry[2..4]);
        let _value_count = byte_order.read_u32(&entry[4..8]);

        let Some(field_type) = FieldType::from_u16(type_id) else {
            debug!(tag = tag_id, field_type = type_id, "skipping IFD entry with unsupported field type");
            continue;
        };
        let value = read_inline_value(byte_order, field_type, &entry[8..12]);

        let Some(tag) = TiffTag::from_u16(tag_id) else {
            continue;
        };
        match tag {
            TiffTag::ImageWidth => summary.width = Some(value),
            TiffTag::ImageLength => summary.height = Some(value),
            TiffTag::BitsPerSample => summary.bits_per_sample = Some(value),
            TiffTag::Compression => {
                if value != i64::from(COMPRESSION_NONE) {
                    return Err(TiffError::UnsupportedCompression(
                        u16::try_from(value).unwrap_or(u16::MAX),
                    ));
                }
            }
            TiffTag::PhotometricInterpretation => {
                if value == i64::from(PHOTOMETRIC_RGB) {
                    return Err(TiffError::RgbUnsupported);
                }
            }
            TiffTag::StripOffsets => summary.strip_offset = Some(value),
            TiffTag::RowsPerStrip => summary.rows_per_strip = Some(value),
            TiffTag::StripByteCounts => summary.strip_byte_count = Some(value),
            TiffTag::SampleFormat => summary.sample_format = Some(value),
        }
    }

    // Multi-image TIFFs are not followed; flag and carry on with the first.
    let next_ifd_offset = ifd_offset + 2 + entry_count * IFD_ENTRY_SIZE;
    if let Ok(bytes) = checked_slice(buffer, next_ifd_offset, 4) {
        let next_ifd = byte_order.read_u32(bytes);
        if next_ifd != 0 {
            warn!(offset = next_ifd, "multi-image TIFF: next IFD not read");
        }
    }

    reinterpret_strip(buffer, byte_order, &summary)
}

/// Validate the collected tags and reinterpret the strip bytes.
fn reinterpret_strip(
    buffer: &[u8],
    byte_order: ByteOrder,
    summary: &IfdSummary,
) -> Result<PixelData, TiffError> {
    let width = require_dimension(summary.width, "ImageWidth")?;
    let height = require_dimension(summary.height, "ImageLength")?;
    let bits = require_dimension(summary.bits_per_sample, "BitsPerSample")?;
    let strip_offset = require_dimension(summary.strip_offset, "StripOffsets")?;
    let strip_byte_count = require_dimension(summary.strip_byte_count, "StripByteCounts")?;

    // Default unsigned when the tag is absent, like MAR165 output
    let sample_format_raw = summary.sample_format.unwrap_or(1);

    if let Some(rows) = summary.rows_per_strip {
        if rows != i64::try_from(height).unwrap_or(-1) {
            debug!(rows_per_strip = rows, "strip layout differs from image height; strip treated as contiguous");
        }
    }

    // Compare in bits so a non-byte-aligned product cannot truncate into a
    // false match
    let total_bits = width
        .checked_mul(height)
        .and_then(|p| p.checked_mul(bits))
        .ok_or(TiffError::InvalidTagValue {
            tag: "ImageWidth",
            message: "dimensions overflow".to_string(),
        })?;
    let expected = total_bits / 8;
    if Some(total_bits) != strip_byte_count.checked_mul(8) {
        return Err(TiffError::StripSizeMismatch {
            expected,
            declared: strip_byte_count,
        });
    }

    let unsupported = TiffError::UnsupportedSampleFormat {
        sample_format: u16::try_from(sample_format_raw).unwrap_or(u16::MAX),
        bits_per_sample: u16::try_from(bits).unwrap_or(u16::MAX),
    };
    let sample_format = SampleFormat::from_u16(
        u16::try_from(sample_format_raw).map_err(|_| unsupported.clone())?,
    )
    .ok_or_else(|| unsupported.clone())?;

    let strip = checked_slice(buffer, strip_offset as usize, strip_byte_count as usize)?;
    let width = width as usize;
    let height = height as usize;
    let mismatch = TiffError::StripSizeMismatch {
        expected,
        declared: strip_byte_count,
    };

    let pixels = match (sample_format, bits) {
        (SampleFormat::UnsignedInt, 8) => PixelData::U8(
            Frame::from_vec(width, height, strip.to_vec()).ok_or(mismatch)?,
        ),
        (SampleFormat::UnsignedInt, 16) => PixelData::U16(
            Frame::from_vec(width, height, read_elements(strip, 2, |c| byte_order.read_u16(c)))
                .ok_or(mismatch)?,
        ),
        (SampleFormat::UnsignedInt, 32) => PixelData::U32(
            Frame::from_vec(width, height, read_elements(strip, 4, |c| byte_order.read_u32(c)))
                .ok_or(mismatch)?,
        ),
        (SampleFormat::SignedInt, 16) => PixelData::I16(
            Frame::from_vec(width, height, read_elements(strip, 2, |c| byte_order.read_i16(c)))
                .ok_or(mismatch)?,
        ),
        (SampleFormat::SignedInt, 32) => PixelData::I32(
            Frame::from_vec(width, height, read_elements(strip, 4, |c| byte_order.read_i32(c)))
                .ok_or(mismatch)?,
        ),
        (SampleFormat::Float, 32) => PixelData::F32(
            Frame::from_vec(width, height, read_elements(strip, 4, |c| byte_order.read_f32(c)))
                .ok_or(mismatch)?,
        ),
        _ => return Err(unsupported),
    };
    Ok(pixels)
}

// =============================================================================
// Helpers
// =============================================================================

/// Bounds-checked sub-slice of `len` bytes at `offset`.
fn checked_slice(buffer: &[u8], offset: usize, len: usize) -> Result<&[u8], TiffError> {
    let end = offset.checked_add(len).ok_or(TiffError::BufferTooShort {
        required: usize::MAX,
        actual: buffer.len(),
    })?;
    buffer.get(offset..end).ok_or(TiffError::BufferTooShort {
        required: end,
        actual: buffer.len(),
    })
}

/// Interpret the inline value bytes of an IFD entry according to its type.
fn read_inline_value(byte_order: ByteOrder, field_type: FieldType, bytes: &[u8]) -> i64 {
    match field_type {
        FieldType::Byte => i64::from(bytes[0]),
        FieldType::Short => i64::from(byte_order.read_u16(&bytes[0..2])),
        FieldType::Long => i64::from(byte_order.read_u32(&bytes[0..4])),
        FieldType::SShort => i64::from(byte_order.read_i16(&bytes[0..2])),
        FieldType::SLong => i64::from(byte_order.read_i32(&bytes[0..4])),
        FieldType::Float => byte_order.read_f32(&bytes[0..4]) as i64,
    }
}

/// A required tag value, validated non-negative.
fn require_dimension(value: Option<i64>, tag: &'static str) -> Result<u64, TiffError> {
    let value = value.ok_or(TiffError::MissingTag(tag))?;
    u64::try_from(value).map_err(|_| TiffError::InvalidTagValue {
        tag,
        message: format!("negative value {value}"),
    })
}

/// Split the strip into fixed-width chunks and decode each element.
fn read_elements<T>(strip: &[u8], width: usize, read: impl Fn(&[u8]) -> T) -> Vec<T> {
    strip.chunks_exact(width).map(read).collect()
}

// =============================================================================
// Tests
// =============================================================================
