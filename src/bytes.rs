//! Byte-level helpers shared by the decoders.
//!
//! Both decoders operate on an in-memory `&[u8]` buffer owned by the caller.
//! The helpers here cover the two primitives they need: fixed-width endian
//! reads and sub-sequence search (used to locate CBF markers).

// =============================================================================
// Endian Helper Functions
// =============================================================================

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

// =============================================================================
// Sub-sequence Search
// =============================================================================

/// Find the first occurrence of `needle` in `haystack`.
///
/// Returns the byte index of the first match, or `None` if the needle does
/// not occur (or is empty). CBF markers are a few dozen bytes at most and
/// occur near the start of the buffer, so a straightforward scan is enough.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

// =============================================================================
// Tests
// =============================================================================
