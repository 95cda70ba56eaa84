//! Shared helpers: a reference byte-offset encoder and blob builders.

use detframe::cbf::{BINARY_END_MARKER, BINARY_START_MARKER};

// =============================================================================
// Reference Byte-Offset Encoder
// =============================================================================

/// Encode pixel values with byte-offset compression.
///
/// Each pixel becomes a signed delta from the previous one (starting from 0):
/// one byte for -127..=127, a 3-byte escape for deltas fitting 16 bits
/// (excluding -32768, whose payload would collide with the 32-bit escape
/// introducer), a 7-byte escape otherwise.
pub fn encode_byte_offsets(pixels: &[i32]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut prev: i64 = 0;
    for &pixel in pixels {
        let delta = i64::from(pixel) - prev;
        prev = i64::from(pixel);
        if (-127..=127).contains(&delta) {
            out.push((delta as i8) as u8);
        } else if (-32767..=32767).contains(&delta) {
            out.push(128);
            out.extend_from_slice(&(delta as i16).to_le_bytes());
        } else {
            out.push(128);
            out.push(0);
            out.push(128);
            out.extend_from_slice(&(delta as u32).to_le_bytes());
        }
    }
    out
}

// =============================================================================
// CBF Container Builder
// =============================================================================

/// Wrap an already-compressed stream in a CBF container with the given
/// header values, padding it with `padding` zero bytes.
pub fn build_cbf_container(
    elements: usize,
    fast: usize,
    slow: usize,
    padding: usize,
    stream: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"###CBF: VERSION 1.5\r\n");
    buf.extend_from_slice(b"_array_data.data\r\n;\r\n");
    buf.extend_from_slice(
        b"Content-Transfer-Encoding: BINARY\r\nconversions=\"x-CBF_BYTE_OFFSET\"\r\n",
    );
    buf.extend_from_slice(format!("X-Binary-Number-of-Elements: {elements}\r\n").as_bytes());
    buf.extend_from_slice(format!("X-Binary-Size-Fastest-Dimension: {fast}\r\n").as_bytes());
    buf.extend_from_slice(format!("X-Binary-Size-Second-Dimension: {slow}\r\n").as_bytes());
    buf.extend_from_slice(format!("X-Binary-Size-Padding: {padding}\r\n").as_bytes());
    buf.extend_from_slice(b"\r\n\x0C");
    buf.extend_from_slice(BINARY_START_MARKER);
    buf.extend_from_slice(stream);
    buf.extend(std::iter::repeat(0u8).take(padding));
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(BINARY_END_MARKER);
    buf.extend_from_slice(b"-\r\n;");
    buf
}

/// Encode a `(fast, slow)` column-major pixel image into a full CBF blob.
pub fn build_cbf(pixels: &[i32], fast: usize, slow: usize, padding: usize) -> Vec<u8> {
    assert_eq!(pixels.len(), fast * slow);
    let stream = encode_byte_offsets(pixels);
    build_cbf_container(pixels.len(), fast, slow, padding, &stream)
}

// =============================================================================
// TIFF Builder
// =============================================================================

/// One IFD entry: tag, field type, count, raw value bytes.
pub struct IfdEntry(pub u16, pub u16, pub u32, pub [u8; 4]);

/// Byte offset of the strip placed by [`build_tiff_le`].
pub fn strip_offset(num_entries: usize) -> u32 {
    (8 + 2 + num_entries * 12 + 4) as u32
}

/// Assemble a little-endian classic TIFF: header, one IFD, a zero next-IFD
/// pointer, then the strip bytes.
pub fn build_tiff_le(entries: &[IfdEntry], strip: &[u8]) -> Vec<u8> {
    let mut buf = vec![0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
    buf.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for IfdEntry(tag, ftype, count, value) in entries {
        buf.extend_from_slice(&tag.to_le_bytes());
        buf.extend_from_slice(&ftype.to_le_bytes());
        buf.extend_from_slice(&count.to_le_bytes());
        buf.extend_from_slice(value);
    }
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(strip);
    buf
}

pub fn short(v: u16) -> [u8; 4] {
    let b = v.to_le_bytes();
    [b[0], b[1], 0, 0]
}

pub fn long(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}

/// The standard nine-entry greyscale IFD used across the TIFF tests.
pub fn greyscale_entries(
    width: u16,
    height: u16,
    bits: u16,
    strip_bytes: u32,
    sample_format: u16,
) -> Vec<IfdEntry> {
    let offset = strip_offset(9);
    vec![
        IfdEntry(256, 3, 1, short(width)),
        IfdEntry(257, 3, 1, short(height)),
        IfdEntry(258, 3, 1, short(bits)),
        IfdEntry(259, 3, 1, short(1)),
        IfdEntry(262, 3, 1, short(0)),
        IfdEntry(273, 4, 1, long(offset)),
        IfdEntry(278, 3, 1, short(height)),
        IfdEntry(279, 4, 1, long(strip_bytes)),
        IfdEntry(339, 3, 1, short(sample_format)),
    ]
}

/// Deterministic pseudo-random pixel generator (LCG) for round-trip images.
pub fn lcg_pixels(count: usize, seed: u64, amplitude: i64) -> Vec<i32> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) as i64 % amplitude) as i32
        })
        .collect()
}
