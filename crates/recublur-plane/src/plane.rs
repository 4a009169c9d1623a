use crate::error::PlaneError;

/// Plane size in pixels
///
/// A struct to represent the size of a video plane in pixels.
///
/// # Examples
///
/// ```
/// use recublur_plane::PlaneSize;
///
/// let plane_size = PlaneSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(plane_size.width, 10);
/// assert_eq!(plane_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneSize {
    /// Width of the plane in pixels
    pub width: usize,
    /// Height of the plane in pixels
    pub height: usize,
}

impl std::fmt::Display for PlaneSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PlaneSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for PlaneSize {
    fn from(size: [usize; 2]) -> Self {
        PlaneSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Row alignment of working buffers, in bytes.
///
/// Matches the alignment the host runtime uses for its own frame planes so
/// that rows of the float working buffer start on the same boundaries.
pub const PLANE_ALIGNMENT: usize = 32;

/// Round `width` up to the next stride (in samples of `T`) whose byte length
/// is a multiple of [`PLANE_ALIGNMENT`].
///
/// # Examples
///
/// ```
/// use recublur_plane::aligned_stride;
///
/// assert_eq!(aligned_stride::<f32>(10), 16);
/// assert_eq!(aligned_stride::<u8>(64), 64);
/// ```
pub fn aligned_stride<T>(width: usize) -> usize {
    let samples = PLANE_ALIGNMENT / std::mem::size_of::<T>();
    if samples <= 1 {
        width
    } else {
        width.div_ceil(samples) * samples
    }
}

/// Trait for plane sample types.
///
/// The seam between the host's integer sample depths (8 and 16-bit) and the
/// floating point working representation used for filtering. Integer
/// conversions round to nearest and saturate.
pub trait PlaneDtype: Copy + Default + Send + Sync {
    /// Convert the sample to f32.
    fn to_f32(self) -> f32;
    /// Convert an f32 value to the sample type.
    fn from_f32(val: f32) -> Self;
}

impl PlaneDtype for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(val: f32) -> Self {
        val
    }
}

impl PlaneDtype for u8 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(val: f32) -> Self {
        val.round().clamp(0.0, 255.0) as u8
    }
}

impl PlaneDtype for u16 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(val: f32) -> Self {
        val.round().clamp(0.0, 65535.0) as u16
    }
}

/// Represents a single video plane: a row-major 2D buffer of samples with an
/// explicit row stride.
///
/// The stride is measured in samples and may exceed the width; the samples
/// between `width` and `stride` on each row are alignment padding and carry
/// no pixel data.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    data: Vec<T>,
    size: PlaneSize,
    stride: usize,
}

impl<T> Plane<T> {
    /// Create a new plane from sample data with `stride == width`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length does not match the plane size.
    ///
    /// # Examples
    ///
    /// ```
    /// use recublur_plane::{Plane, PlaneSize};
    ///
    /// let plane = Plane::<u8>::new(
    ///     PlaneSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(plane.width(), 10);
    /// assert_eq!(plane.height(), 20);
    /// assert_eq!(plane.stride(), 10);
    /// ```
    pub fn new(size: PlaneSize, data: Vec<T>) -> Result<Self, PlaneError> {
        Self::new_with_stride(size, size.width, data)
    }

    /// Create a new plane from sample data with an explicit row stride.
    ///
    /// # Errors
    ///
    /// Returns an error if `stride < width` or if the data length does not
    /// match `stride * height`.
    pub fn new_with_stride(
        size: PlaneSize,
        stride: usize,
        data: Vec<T>,
    ) -> Result<Self, PlaneError> {
        if stride < size.width {
            return Err(PlaneError::InvalidStride(stride, size.width));
        }
        if data.len() != stride * size.height {
            return Err(PlaneError::InvalidDataLength(
                data.len(),
                stride * size.height,
            ));
        }

        Ok(Self { data, size, stride })
    }

    /// Create a new plane filled with a value, with `stride == width`.
    pub fn from_size_val(size: PlaneSize, val: T) -> Result<Self, PlaneError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height];
        Plane::new(size, data)
    }

    /// Create a new plane filled with a value, with the row stride rounded up
    /// to the alignment boundary given by [`aligned_stride`].
    pub fn from_size_val_aligned(size: PlaneSize, val: T) -> Result<Self, PlaneError>
    where
        T: Clone,
    {
        let stride = aligned_stride::<T>(size.width);
        let data = vec![val; stride * size.height];
        Plane::new_with_stride(size, stride, data)
    }

    /// The size of the plane in pixels.
    pub fn size(&self) -> PlaneSize {
        self.size
    }

    /// The width of the plane in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the plane in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The row stride of the plane in samples.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The full strided sample storage, padding included.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The full strided sample storage as mutable, padding included.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The valid samples of row `r`, padding excluded.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.stride;
        &self.data[start..start + self.size.width]
    }

    /// The valid samples of row `r` as mutable, padding excluded.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start = r * self.stride;
        &mut self.data[start..start + self.size.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_size() {
        let size = PlaneSize {
            width: 10,
            height: 20,
        };
        assert_eq!(size.width, 10);
        assert_eq!(size.height, 20);

        let size: PlaneSize = [10, 20].into();
        assert_eq!(size.width, 10);
        assert_eq!(size.height, 20);
    }

    #[test]
    fn test_plane_new() -> Result<(), PlaneError> {
        let plane = Plane::<u8>::new(
            PlaneSize {
                width: 4,
                height: 3,
            },
            vec![7u8; 12],
        )?;
        assert_eq!(plane.width(), 4);
        assert_eq!(plane.height(), 3);
        assert_eq!(plane.stride(), 4);
        assert_eq!(plane.as_slice().len(), 12);
        Ok(())
    }

    #[test]
    fn test_plane_new_wrong_length() {
        let res = Plane::<u8>::new(
            PlaneSize {
                width: 4,
                height: 3,
            },
            vec![0u8; 11],
        );
        assert_eq!(res, Err(PlaneError::InvalidDataLength(11, 12)));
    }

    #[test]
    fn test_plane_invalid_stride() {
        let res = Plane::<u8>::new_with_stride(
            PlaneSize {
                width: 4,
                height: 3,
            },
            3,
            vec![0u8; 9],
        );
        assert_eq!(res, Err(PlaneError::InvalidStride(3, 4)));
    }

    #[test]
    fn test_plane_rows_with_stride() -> Result<(), PlaneError> {
        let size = PlaneSize {
            width: 2,
            height: 2,
        };
        // stride 4: two padding samples at the end of each row
        let mut plane = Plane::new_with_stride(size, 4, vec![1u8, 2, 0, 0, 3, 4, 0, 0])?;
        assert_eq!(plane.row(0), &[1, 2]);
        assert_eq!(plane.row(1), &[3, 4]);

        plane.row_mut(1)[0] = 9;
        assert_eq!(plane.as_slice()[4], 9);
        Ok(())
    }

    #[test]
    fn test_aligned_stride() {
        assert_eq!(aligned_stride::<f32>(1), 8);
        assert_eq!(aligned_stride::<f32>(8), 8);
        assert_eq!(aligned_stride::<f32>(9), 16);
        assert_eq!(aligned_stride::<u8>(33), 64);
        assert_eq!(aligned_stride::<u16>(16), 16);
    }

    #[test]
    fn test_from_size_val_aligned() -> Result<(), PlaneError> {
        let plane = Plane::<f32>::from_size_val_aligned(
            PlaneSize {
                width: 10,
                height: 2,
            },
            0.0,
        )?;
        assert_eq!(plane.stride(), 16);
        assert_eq!(plane.as_slice().len(), 32);
        Ok(())
    }

    #[test]
    fn test_dtype_round_and_saturate() {
        assert_eq!(u8::from_f32(254.6), 255);
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(-1.0), 0);
        assert_eq!(u8::from_f32(127.5), 128);
        assert_eq!(u16::from_f32(65534.7), 65535);
        assert_eq!(u16::from_f32(70000.0), 65535);
        assert_eq!(u16::from_f32(-0.4), 0);
        assert_eq!(f32::from_f32(1.25), 1.25);
        assert_eq!(1000u16.to_f32(), 1000.0);
    }
}
