//! TIFF tag and field type definitions.
//!
//! The vocabulary for the minimal TIFF reader: field types that determine how
//! inline values are encoded, the tag IDs carrying interpreted semantics, and
//! the sample-format values that select the pixel element type.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how a tag value is encoded.
///
/// Only the six types observed in detector output are defined; entries with
/// any other type are skipped during parsing. TIFF 6.0 defines twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer
    Byte = 1,

    /// Unsigned 16-bit integer
    Short = 3,

    /// Unsigned 32-bit integer
    Long = 4,

    /// Signed 16-bit integer
    SShort = 8,

    /// Signed 32-bit integer
    SLong = 9,

    /// IEEE 32-bit float
    Float = 11,
}

impl FieldType {
    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for unsupported or unknown type values.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            8 => Some(FieldType::SShort),
            9 => Some(FieldType::SLong),
            11 => Some(FieldType::Float),
            _ => None,
        }
    }

    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte => 1,
            FieldType::Short | FieldType::SShort => 2,
            FieldType::Long | FieldType::SLong | FieldType::Float => 4,
        }
    }
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// TIFF tag IDs carrying interpreted semantics for single-strip greyscale
/// frames. Tags not listed here are ignored during parsing, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    /// Image width in pixels
    ImageWidth = 256,

    /// Image height (length) in pixels
    ImageLength = 257,

    /// Bits per sample (8, 16 or 32)
    BitsPerSample = 258,

    /// Compression scheme; only uncompressed (1) is accepted
    Compression = 259,

    /// Photometric interpretation; RGB (2) is refused
    PhotometricInterpretation = 262,

    /// Byte offset of the pixel strip
    StripOffsets = 273,

    /// Row count per strip; recorded but unused, the strip is assumed
    /// contiguous
    RowsPerStrip = 278,

    /// Byte count of the pixel strip
    StripByteCounts = 279,

    /// Sample format (1=unsigned, 2=signed, 3=float); defaults to unsigned
    /// when absent, like MAR165 output
    SampleFormat = 339,
}

impl TiffTag {
    /// Create a TiffTag from its numeric value.
    ///
    /// Returns `None` for unrecognized tags.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            256 => Some(TiffTag::ImageWidth),
            257 => Some(TiffTag::ImageLength),
            258 => Some(TiffTag::BitsPerSample),
            259 => Some(TiffTag::Compression),
            262 => Some(TiffTag::PhotometricInterpretation),
            273 => Some(TiffTag::StripOffsets),
            278 => Some(TiffTag::RowsPerStrip),
            279 => Some(TiffTag::StripByteCounts),
            339 => Some(TiffTag::SampleFormat),
            _ => None,
        }
    }

    /// Get the numeric tag ID.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

// =============================================================================
// Sample Format and Fixed Values
// =============================================================================

/// Compression value for uncompressed data, the only scheme accepted.
pub const COMPRESSION_NONE: u16 = 1;

/// Photometric interpretation value for RGB, which is refused.
pub const PHOTOMETRIC_RGB: u16 = 2;

/// SampleFormat tag values selecting the pixel element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum SampleFormat {
    /// Unsigned integer samples
    UnsignedInt = 1,

    /// Signed (two's complement) integer samples
    SignedInt = 2,

    /// IEEE floating point samples
    Float = 3,
}

impl SampleFormat {
    /// Create a SampleFormat from its numeric value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(SampleFormat::UnsignedInt),
            2 => Some(SampleFormat::SignedInt),
            3 => Some(SampleFormat::Float),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
