//! End-to-end TIFF decoder tests against synthetic blobs.

use detframe::error::TiffError;
use detframe::{decode, detect_format, tiff, DecodeError, FrameFormat, PixelData};

use super::test_utils::{build_tiff_le, greyscale_entries, long, short, strip_offset, IfdEntry};

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_2x2_column_major_scenario() {
    // II, magic 42, width=2, height=2, bits=8, compression=1, photometric=0,
    // rowsperstrip=2, stripbytecount=4, sampleformat=1, strip [10,20,30,40]
    // -> [[10,30],[20,40]]
    let entries = greyscale_entries(2, 2, 8, 4, 1);
    let blob = build_tiff_le(&entries, &[10, 20, 30, 40]);
    let PixelData::U8(frame) = tiff::decode(&blob).unwrap() else {
        panic!("expected u8 frame");
    };
    assert_eq!(frame.dims(), (2, 2));
    assert_eq!(frame.get(0, 0), Some(10));
    assert_eq!(frame.get(0, 1), Some(30));
    assert_eq!(frame.get(1, 0), Some(20));
    assert_eq!(frame.get(1, 1), Some(40));
}

#[test]
fn test_tag_dispatch_64x32_u16() {
    // Tags 256=64, 257=32, 258=16, 259=1, 339=1 with a 4096-byte strip
    let strip: Vec<u8> = (0..64u32 * 32)
        .flat_map(|i| ((i * 7) as u16).to_le_bytes())
        .collect();
    let entries = greyscale_entries(64, 32, 16, 4096, 1);
    let pixels = tiff::decode(&build_tiff_le(&entries, &strip)).unwrap();
    assert_eq!(pixels.dims(), (64, 32));
    assert_eq!(pixels.dtype_name(), "uint16");
    let PixelData::U16(frame) = pixels else {
        panic!("expected u16 frame");
    };
    // Element (1, 0) is the second strip value
    assert_eq!(frame.get(1, 0), Some(7));
}

#[test]
fn test_typed_variants() {
    // u32
    let strip: Vec<u8> = [70000u32, 1].iter().flat_map(|v| v.to_le_bytes()).collect();
    let entries = greyscale_entries(2, 1, 32, 8, 1);
    let PixelData::U32(frame) = tiff::decode(&build_tiff_le(&entries, &strip)).unwrap() else {
        panic!("expected u32 frame");
    };
    assert_eq!(frame.as_slice(), &[70000, 1]);

    // i32
    let strip: Vec<u8> = [-70000i32, 3].iter().flat_map(|v| v.to_le_bytes()).collect();
    let entries = greyscale_entries(2, 1, 32, 8, 2);
    let PixelData::I32(frame) = tiff::decode(&build_tiff_le(&entries, &strip)).unwrap() else {
        panic!("expected i32 frame");
    };
    assert_eq!(frame.as_slice(), &[-70000, 3]);

    // f32
    let strip: Vec<u8> = [0.25f32, -8.0].iter().flat_map(|v| v.to_le_bytes()).collect();
    let entries = greyscale_entries(2, 1, 32, 8, 3);
    let PixelData::F32(frame) = tiff::decode(&build_tiff_le(&entries, &strip)).unwrap() else {
        panic!("expected f32 frame");
    };
    assert_eq!(frame.as_slice(), &[0.25, -8.0]);
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_lzw_compression_rejected() {
    let mut entries = greyscale_entries(2, 2, 8, 4, 1);
    entries[3] = IfdEntry(259, 3, 1, short(5));
    assert!(matches!(
        tiff::decode(&build_tiff_le(&entries, &[0; 4])),
        Err(TiffError::UnsupportedCompression(5))
    ));
}

#[test]
fn test_rgb_rejected() {
    let mut entries = greyscale_entries(2, 2, 8, 4, 1);
    entries[4] = IfdEntry(262, 3, 1, short(2));
    assert!(matches!(
        tiff::decode(&build_tiff_le(&entries, &[0; 4])),
        Err(TiffError::RgbUnsupported)
    ));
}

#[test]
fn test_wrong_strip_byte_count_rejected() {
    let mut entries = greyscale_entries(2, 2, 8, 5, 1);
    entries[5] = IfdEntry(273, 4, 1, long(strip_offset(9)));
    assert!(matches!(
        tiff::decode(&build_tiff_le(&entries, &[0; 5])),
        Err(TiffError::StripSizeMismatch {
            expected: 4,
            declared: 5
        })
    ));
}

#[test]
fn test_unsupported_bit_depth_rejected() {
    // 64-bit samples have no reader
    let entries = greyscale_entries(2, 2, 64, 32, 1);
    assert!(matches!(
        tiff::decode(&build_tiff_le(&entries, &[0; 32])),
        Err(TiffError::UnsupportedSampleFormat {
            sample_format: 1,
            bits_per_sample: 64
        })
    ));
}

#[test]
fn test_truncated_header_rejected() {
    assert!(matches!(
        tiff::decode(&[0x49, 0x49]),
        Err(TiffError::BufferTooShort { .. })
    ));
    assert!(matches!(
        tiff::decode(&[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00]),
        Err(TiffError::BufferTooShort { .. })
    ));
}

// =============================================================================
// Auto-detection
// =============================================================================

#[test]
fn test_detect_and_decode() {
    let entries = greyscale_entries(2, 2, 8, 4, 1);
    let blob = build_tiff_le(&entries, &[1, 2, 3, 4]);
    assert_eq!(detect_format(&blob), Some(FrameFormat::Tiff));
    let pixels = decode(&blob).unwrap();
    assert_eq!(pixels.dims(), (2, 2));
    assert_eq!(pixels.dtype_name(), "uint8");
}

#[test]
fn test_unknown_blob_rejected() {
    assert!(matches!(
        decode(b"\x89PNG\r\n\x1a\n"),
        Err(DecodeError::UnknownFormat)
    ));
}
