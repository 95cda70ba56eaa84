//! Byte-offset decompression.
//!
//! The CBF "byte offset" scheme stores each pixel as a signed delta from the
//! previous pixel. A delta fits one byte when it lies in -127..=127; the
//! byte value 128 is an escape sentinel introducing a wider delta:
//!
//! - sentinel followed by two bytes that are NOT `(0, 128)`: those two bytes
//!   are a little-endian 16-bit delta (3 bytes consumed),
//! - sentinel followed by `(0, 128)`: the next four bytes are a little-endian
//!   32-bit delta (7 bytes consumed).
//!
//! Decompression scans escapes left to right, sign-adjusts the remaining
//! plain bytes, drops escape payload bytes, and takes the inclusive running
//! sum of the deltas in wrapping 32-bit arithmetic.

use crate::error::CbfError;

/// Escape sentinel byte introducing a multi-byte delta.
pub const ESCAPE_SENTINEL: u8 = 128;

/// Decompress a byte-offset stream into pixel values.
///
/// `padding` is the declared number of trailing padding bytes: a sentinel
/// located within `padding` bytes of the end of the stream is treated as a
/// plain byte rather than an escape, so the scan never reads payload out of
/// the padded region by accident. The returned vector still contains the
/// values accumulated over the padding bytes; the caller truncates to the
/// declared element count after validating the length.
///
/// # Errors
/// `BufferTooShort` if an escape payload extends past the end of the stream.
pub fn decompress(stream: &[u8], padding: usize) -> Result<Vec<i32>, CbfError> {
    let n = stream.len();
    let mut deltas: Vec<i64> = stream.iter().map(|&b| i64::from(b)).collect();
    // Payload bytes of an escape are dropped from the delta sequence; the
    // sentinel position itself stays and carries the decoded delta.
    let mut payload = vec![false; n];

    // Sentinels at or beyond this index are plain bytes, not escapes.
    let escape_limit = n.saturating_sub(padding);

    let mut i = 0;
    while i < escape_limit {
        if stream[i] != ESCAPE_SENTINEL {
            i += 1;
            continue;
        }
        if i + 2 >= n {
            return Err(CbfError::BufferTooShort {
                required: i + 3,
                actual: n,
            });
        }
        if stream[i + 1] != 0 || stream[i + 2] != ESCAPE_SENTINEL {
            // 16-bit delta, wraparound past 32768
            let mut delta = i64::from(stream[i + 1]) + i64::from(stream[i + 2]) * 256;
            if delta > 32768 {
                delta -= 65536;
            }
            deltas[i] = delta;
            payload[i + 1] = true;
            payload[i + 2] = true;
            i += 3;
        } else {
            if i + 6 >= n {
                return Err(CbfError::BufferTooShort {
                    required: i + 7,
                    actual: n,
                });
            }
            // 32-bit delta, wraparound past 2^31
            let mut delta = i64::from(stream[i + 3])
                + i64::from(stream[i + 4]) * 256
                + i64::from(stream[i + 5]) * 65536
                + i64::from(stream[i + 6]) * 16777216;
            if delta > 2147483648 {
                delta -= 4294967296;
            }
            deltas[i] = delta;
            for flag in payload.iter_mut().take(i + 7).skip(i + 1) {
                *flag = true;
            }
            i += 7;
        }
    }

    // 8-bit two's-complement adjustment for plain bytes above the sentinel.
    // Sentinel positions hold their decoded escape delta (their raw byte is
    // exactly 128, never above it) and payload bytes are excluded, so only
    // genuine single-byte deltas are adjusted. A plain 128, which can only
    // survive past the escape limit, stays +128.
    for (idx, delta) in deltas.iter_mut().enumerate() {
        if !payload[idx] && stream[idx] > ESCAPE_SENTINEL {
            *delta -= 256;
        }
    }

    // Inclusive running sum over the surviving deltas, numpy int32 semantics.
    let mut values = Vec::with_capacity(n);
    let mut acc: i32 = 0;
    for (idx, &delta) in deltas.iter().enumerate() {
        if payload[idx] {
            continue;
        }
        acc = acc.wrapping_add(delta as i32);
        values.push(acc);
    }
    Ok(values)
}

// =============================================================================
// Tests
// =============================================================================
