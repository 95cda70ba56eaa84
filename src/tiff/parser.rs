//! TIFF header parsing.
//!
//! # TIFF Header Structure (classic TIFF, 8 bytes)
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Version (42 = 0x002A)
//! Bytes 4-7: Offset to first IFD (4 bytes)
//! ```
//!
//! BigTIFF (version 43) is not produced by the detectors this crate targets
//! and is rejected as an invalid version.

use crate::bytes::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};
use crate::error::TiffError;

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Version number for classic TIFF
const VERSION_TIFF: u16 = 42;

/// Size of a classic TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

/// Size of an IFD entry in bytes (2 tag + 2 type + 4 count + 4 value/offset)
pub const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of a TIFF file.
///
/// Declared by the first two bytes of the header; all multi-byte values in
/// the file, including the pixel strip, are read respecting this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Read an i16 from a byte slice using this byte order.
    #[inline]
    pub fn read_i16(self, bytes: &[u8]) -> i16 {
        self.read_u16(bytes) as i16
    }

    /// Read an i32 from a byte slice using this byte order.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        self.read_u32(bytes) as i32
    }

    /// Read an f32 from a byte slice using this byte order.
    #[inline]
    pub fn read_f32(self, bytes: &[u8]) -> f32 {
        f32::from_bits(self.read_u32(bytes))
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the file
    pub byte_order: ByteOrder,

    /// Offset to the first IFD in the buffer
    pub ifd_offset: u32,
}

impl TiffHeader {
    /// Parse a TIFF header from the start of a buffer.
    ///
    /// # Errors
    /// - `BufferTooShort` if there aren't enough bytes for the header
    /// - `InvalidByteOrder` if the byte-order bytes are not II or MM
    /// - `InvalidVersion` if the version is not 42
    pub fn parse(buffer: &[u8]) -> Result<Self, TiffError> {
        if buffer.len() < 4 {
            return Err(TiffError::BufferTooShort {
                required: 4,
                actual: buffer.len(),
            });
        }

        // Byte order is checked as a raw byte pattern
        let marker = u16::from_le_bytes([buffer[0], buffer[1]]);
        let byte_order = match marker {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(TiffError::InvalidByteOrder(marker)),
        };

        let version = byte_order.read_u16(&buffer[2..4]);
        if version != VERSION_TIFF {
            return Err(TiffError::InvalidVersion(version));
        }

        if buffer.len() < TIFF_HEADER_SIZE {
            return Err(TiffError::BufferTooShort {
                required: TIFF_HEADER_SIZE,
                actual: buffer.len(),
            });
        }
        let ifd_offset = byte_order.read_u32(&buffer[4..8]);

        Ok(TiffHeader {
            byte_order,
            ifd_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
