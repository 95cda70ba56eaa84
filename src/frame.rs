//! Column-major 2D frame containers.
//!
//! Detector frames are dense 2D arrays stored in column-major (Fortran)
//! order: the first axis varies fastest in memory, so element `(i, j)` lives
//! at flat index `i + j * dim0`. This matches the element order both decoders
//! produce and is load-bearing for bit-exact compatibility with downstream
//! consumers of the decoded pixel stream.

// =============================================================================
// Frame
// =============================================================================

/// A dense 2D array in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    dim0: usize,
    dim1: usize,
    data: Vec<T>,
}

impl<T: Copy> Frame<T> {
    /// Build a frame from a flat column-major vector.
    ///
    /// Returns `None` if `data.len()` does not equal `dim0 * dim1`
    /// (including on overflow of the product).
    pub fn from_vec(dim0: usize, dim1: usize, data: Vec<T>) -> Option<Self> {
        let expected = dim0.checked_mul(dim1)?;
        if data.len() != expected {
            return None;
        }
        Some(Self { dim0, dim1, data })
    }

    /// Shape as `(dim0, dim1)`, dim0 being the fastest-varying axis.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.dim0, self.dim1)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the frame holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked element access at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i >= self.dim0 || j >= self.dim1 {
            return None;
        }
        Some(self.data[i + j * self.dim0])
    }

    /// The flat column-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the frame, returning the flat column-major vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// =============================================================================
// PixelData
// =============================================================================

/// A decoded frame with its element type resolved at runtime.
///
/// TIFF blobs declare their element type through the sample-format and
/// bits-per-sample tags; this enum carries whichever variant was found.
/// CBF decodes always produce `I32`.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    U8(Frame<u8>),
    U16(Frame<u16>),
    U32(Frame<u32>),
    I16(Frame<i16>),
    I32(Frame<i32>),
    F32(Frame<f32>),
}

impl PixelData {
    /// Shape as `(dim0, dim1)` regardless of element type.
    pub fn dims(&self) -> (usize, usize) {
        match self {
            PixelData::U8(f) => f.dims(),
            PixelData::U16(f) => f.dims(),
            PixelData::U32(f) => f.dims(),
            PixelData::I16(f) => f.dims(),
            PixelData::I32(f) => f.dims(),
            PixelData::F32(f) => f.dims(),
        }
    }

    /// Element type name, numpy-style.
    pub const fn dtype_name(&self) -> &'static str {
        match self {
            PixelData::U8(_) => "uint8",
            PixelData::U16(_) => "uint16",
            PixelData::U32(_) => "uint32",
            PixelData::I16(_) => "int16",
            PixelData::I32(_) => "int32",
            PixelData::F32(_) => "float32",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
