use thiserror::Error;

/// Errors that can occur when decoding a CBF (Crystallographic Binary Format) blob.
#[derive(Debug, Clone, Error)]
pub enum CbfError {
    /// A required magic or key byte sequence is absent from the buffer.
    #[error("Marker not found: {0}")]
    MarkerNotFound(&'static str),

    /// A header field expected to be ASCII integer text failed to parse.
    #[error("Invalid header field {field}: {message}")]
    MetadataParse {
        field: &'static str,
        message: String,
    },

    /// A fixed-offset read would exceed the buffer bounds.
    #[error("Buffer too short: need at least {required} bytes, got {actual}")]
    BufferTooShort { required: usize, actual: usize },

    /// The binary data section ends before it starts.
    #[error("Binary data section is empty or inverted")]
    EmptyBinarySection,

    /// Reconstructed element count does not match the declared dimensions.
    #[error("Dimension mismatch: decompressed {actual} values, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors that can occur when decoding a TIFF blob.
#[derive(Debug, Clone, Error)]
pub enum TiffError {
    /// A fixed-offset read would exceed the buffer bounds.
    #[error("Buffer too short: need at least {required} bytes, got {actual}")]
    BufferTooShort { required: usize, actual: usize },

    /// Invalid byte-order marker (not II or MM).
    #[error("Invalid TIFF byte-order marker: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// Invalid TIFF version number (must be 42).
    #[error("Invalid TIFF version: expected 42, got {0}")]
    InvalidVersion(u16),

    /// A tag required to interpret the image is missing from the IFD.
    #[error("Missing required tag: {0}")]
    MissingTag(&'static str),

    /// Tag carries a value that cannot be used (e.g. negative dimension).
    #[error("Invalid tag value for {tag}: {message}")]
    InvalidTagValue { tag: &'static str, message: String },

    /// Compressed data is not supported.
    #[error("Unsupported compression: {0} (only uncompressed data is supported)")]
    UnsupportedCompression(u16),

    /// RGB photometric interpretation is refused; only greyscale data is supported.
    #[error("Unsupported photometric interpretation: RGB")]
    RgbUnsupported,

    /// No reader for this sample-format / bit-depth combination.
    #[error("Unsupported sample format {sample_format} with {bits_per_sample} bits per sample")]
    UnsupportedSampleFormat {
        sample_format: u16,
        bits_per_sample: u16,
    },

    /// Declared strip byte count disagrees with width * height * bits / 8.
    #[error("Strip size mismatch: dimensions imply {expected} bytes, strip declares {declared}")]
    StripSizeMismatch { expected: u64, declared: u64 },
}

/// Top-level error for the auto-detecting decode entry point.
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    /// CBF decoding error
    #[error("CBF error: {0}")]
    Cbf(#[from] CbfError),

    /// TIFF decoding error
    #[error("TIFF error: {0}")]
    Tiff(#[from] TiffError),

    /// The buffer matches neither a CBF nor a TIFF signature.
    #[error("Unrecognized frame format")]
    UnknownFormat,
}
