use crate::{Plane, PlaneDtype, PlaneError};

fn check_same_size<T, U>(src: &Plane<T>, dst: &Plane<U>) -> Result<(), PlaneError> {
    if src.size() != dst.size() {
        return Err(PlaneError::InvalidPlaneSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }
    Ok(())
}

/// Load a plane into a floating point working plane.
///
/// Copies the valid region row by row; the two planes may have different row
/// strides. Padding samples of `dst` are left untouched.
///
/// # Errors
///
/// Returns an error if the plane sizes do not match.
pub fn convert_to_f32<T>(src: &Plane<T>, dst: &mut Plane<f32>) -> Result<(), PlaneError>
where
    T: PlaneDtype,
{
    check_same_size(src, dst)?;

    for r in 0..src.height() {
        dst.row_mut(r)
            .iter_mut()
            .zip(src.row(r).iter())
            .for_each(|(out, &inp)| *out = inp.to_f32());
    }

    Ok(())
}

/// Store a floating point working plane back into a plane of the host sample
/// depth, rounding to nearest and saturating.
///
/// # Errors
///
/// Returns an error if the plane sizes do not match.
pub fn convert_from_f32<T>(src: &Plane<f32>, dst: &mut Plane<T>) -> Result<(), PlaneError>
where
    T: PlaneDtype,
{
    check_same_size(src, dst)?;

    for r in 0..src.height() {
        dst.row_mut(r)
            .iter_mut()
            .zip(src.row(r).iter())
            .for_each(|(out, &inp)| *out = T::from_f32(inp));
    }

    Ok(())
}

/// Copy the valid region of `src` into `dst`, row by row.
///
/// The two planes may have different row strides.
///
/// # Errors
///
/// Returns an error if the plane sizes do not match.
pub fn copy_plane<T>(src: &Plane<T>, dst: &mut Plane<T>) -> Result<(), PlaneError>
where
    T: Copy,
{
    check_same_size(src, dst)?;

    for r in 0..src.height() {
        dst.row_mut(r).copy_from_slice(src.row(r));
    }

    Ok(())
}

/// Cast the valid samples of a plane to a different type, multiplying by a
/// scale factor.
///
/// Useful for moving between host sample depths, e.g. scaling an 8-bit plane
/// into a 16-bit one or normalizing into `[0, 1]` floats.
///
/// Example:
///
/// ```
/// use recublur_plane::{Plane, PlaneSize};
/// use recublur_plane::ops::cast_and_scale;
///
/// let plane = Plane::<u8>::new(
///     PlaneSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0u8, 255],
/// ).unwrap();
///
/// let mut plane_f32 = Plane::from_size_val(plane.size(), 0.0f32).unwrap();
///
/// cast_and_scale(&plane, &mut plane_f32, 1.0 / 255.0).unwrap();
///
/// assert_eq!(plane_f32.row(0), &[0.0, 1.0]);
/// ```
pub fn cast_and_scale<T, U>(src: &Plane<T>, dst: &mut Plane<U>, scale: U) -> Result<(), PlaneError>
where
    T: Copy + num_traits::NumCast,
    U: Copy + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    check_same_size(src, dst)?;

    for r in 0..src.height() {
        dst.row_mut(r)
            .iter_mut()
            .zip(src.row(r).iter())
            .try_for_each(|(out, &inp)| {
                let x = U::from(inp).ok_or(PlaneError::CastError(
                    std::any::type_name::<U>().to_string(),
                ))?;
                *out = x * scale;
                Ok::<(), PlaneError>(())
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlaneSize;

    #[test]
    fn test_convert_round_trip_u16() -> Result<(), PlaneError> {
        let size = PlaneSize {
            width: 3,
            height: 2,
        };
        let src = Plane::<u16>::new(size, vec![0, 512, 65535, 1, 2, 3])?;
        let mut work = Plane::<f32>::from_size_val_aligned(size, 0.0)?;
        let mut back = Plane::<u16>::from_size_val(size, 0)?;

        convert_to_f32(&src, &mut work)?;
        assert_eq!(work.row(0), &[0.0, 512.0, 65535.0]);

        convert_from_f32(&work, &mut back)?;
        assert_eq!(back.row(0), src.row(0));
        assert_eq!(back.row(1), src.row(1));
        Ok(())
    }

    #[test]
    fn test_convert_size_mismatch() -> Result<(), PlaneError> {
        let src = Plane::<u8>::from_size_val(
            PlaneSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Plane::<f32>::from_size_val(
            PlaneSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;
        let res = convert_to_f32(&src, &mut dst);
        assert_eq!(res, Err(PlaneError::InvalidPlaneSize(2, 2, 3, 2)));
        Ok(())
    }

    #[test]
    fn test_copy_plane_across_strides() -> Result<(), PlaneError> {
        let size = PlaneSize {
            width: 2,
            height: 2,
        };
        let src = Plane::new_with_stride(size, 3, vec![1u8, 2, 0, 3, 4, 0])?;
        let mut dst = Plane::from_size_val(size, 0u8)?;
        copy_plane(&src, &mut dst)?;
        assert_eq!(dst.as_slice(), &[1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_cast_and_scale_u8_to_u16() -> Result<(), PlaneError> {
        let size = PlaneSize {
            width: 2,
            height: 1,
        };
        let src = Plane::<u8>::new(size, vec![0, 255])?;
        let mut dst = Plane::<u16>::from_size_val(size, 0)?;
        cast_and_scale(&src, &mut dst, 257)?;
        assert_eq!(dst.row(0), &[0, 65535]);
        Ok(())
    }
}
