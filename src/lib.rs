//! # detframe
//!
//! Decoders for raw X-ray detector frame blobs.
//!
//! Data-acquisition brokers at beamlines hand live-view consumers a raw byte
//! buffer per frame. This library turns those buffers into dense 2D numeric
//! arrays, and nothing else: no I/O, no caching, no shared state. Both
//! decoders are pure functions over a borrowed buffer and can be called
//! concurrently on independent frames.
//!
//! ## Formats
//!
//! - **CBF** (Crystallographic Binary Format): a hybrid ASCII/binary
//!   container whose binary section is byte-offset compressed (Pilatus
//!   detectors). Decodes to a column-major `i32` frame.
//! - **TIFF**: the minimal uncompressed single-strip greyscale subset of
//!   TIFF 6.0 (MAR165 and similar). Decodes to a typed frame of
//!   u8/u16/u32/i16/i32/f32 per the sample-format and bits-per-sample tags.
//!
//! Decoded frames are column-major (first axis fastest): element `(i, j)`
//! sits at flat index `i + j * dim0`. Failures are typed errors; a failed
//! decode never yields a partial or degenerate image.
//!
//! ## Example
//!
//! ```rust,no_run
//! use detframe::{decode, DecodeError};
//!
//! fn show(buffer: &[u8]) -> Result<(), DecodeError> {
//!     let pixels = decode(buffer)?;
//!     let (d0, d1) = pixels.dims();
//!     println!("shape ({d0}, {d1}) dtype {}", pixels.dtype_name());
//!     Ok(())
//! }
//! ```

pub mod bytes;
pub mod cbf;
pub mod config;
pub mod detect;
pub mod error;
pub mod frame;
pub mod tiff;

// Re-export commonly used types
pub use detect::{decode, detect_format, is_cbf_header, is_tiff_header, FrameFormat};
pub use error::{CbfError, DecodeError, TiffError};
pub use frame::{Frame, PixelData};
