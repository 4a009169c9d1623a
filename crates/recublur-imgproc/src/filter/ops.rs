use rayon::prelude::*;
use recublur_plane::{ops, Plane, PlaneDtype, PlaneError};
use thiserror::Error;

use super::recursive::recursive_gaussian_2d;
use crate::parallel::ExecutionStrategy;

/// Errors that can occur in plane-level blur operations.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// A sigma parameter is negative.
    #[error("sigma must be non-negative, got {0}")]
    InvalidSigma(f64),

    /// The multi-plane driver was given mismatched slice lengths.
    #[error("source, destination and sigma counts must match ({0}, {1}, {2})")]
    PlaneCountMismatch(usize, usize, usize),

    /// A plane buffer operation failed.
    #[error(transparent)]
    Plane(#[from] PlaneError),
}

fn check_sigma(sigma: (f64, f64)) -> Result<(), FilterError> {
    if sigma.0 < 0.0 {
        return Err(FilterError::InvalidSigma(sigma.0));
    }
    if sigma.1 < 0.0 {
        return Err(FilterError::InvalidSigma(sigma.1));
    }
    Ok(())
}

/// Blur a plane with the recursive Gaussian approximation.
///
/// The source plane is loaded into an aligned floating point working buffer,
/// filtered vertically then horizontally, and stored back at the source
/// sample depth with rounding and saturation. `sigma` is xy-ordered
/// `(horizontal, vertical)`; a zero sigma disables that axis, and a plane
/// whose sigmas are both zero is copied through unprocessed.
///
/// # Arguments
///
/// * `src` - The source plane.
/// * `dst` - The destination plane, same size as the source.
/// * `sigma` - Gaussian standard deviation per axis, `(horizontal, vertical)`.
///
/// # Errors
///
/// Returns an error if a sigma is negative or the plane sizes do not match.
pub fn recursive_gaussian_blur<T>(
    src: &Plane<T>,
    dst: &mut Plane<T>,
    sigma: (f64, f64),
) -> Result<(), FilterError>
where
    T: PlaneDtype,
{
    check_sigma(sigma)?;

    if sigma == (0.0, 0.0) {
        ops::copy_plane(src, dst)?;
        return Ok(());
    }

    let mut work = Plane::<f32>::from_size_val_aligned(src.size(), 0.0)?;
    ops::convert_to_f32(src, &mut work)?;

    let (height, width, stride) = (work.height(), work.width(), work.stride());
    recursive_gaussian_2d(work.as_slice_mut(), height, width, stride, sigma);

    ops::convert_from_f32(&work, dst)?;
    Ok(())
}

/// Blur a floating point plane in place, without the depth conversion round
/// trip.
///
/// For callers that already keep their planes in the working representation
/// (e.g. a retinex-style chain running several sigmas over one float plane).
///
/// # Errors
///
/// Returns an error if a sigma is negative.
pub fn recursive_gaussian_blur_inplace(
    plane: &mut Plane<f32>,
    sigma: (f64, f64),
) -> Result<(), FilterError> {
    check_sigma(sigma)?;

    let (height, width, stride) = (plane.height(), plane.width(), plane.stride());
    recursive_gaussian_2d(plane.as_slice_mut(), height, width, stride, sigma);
    Ok(())
}

/// Blur the planes of a frame, each with its own sigma pair, with execution
/// strategy control.
///
/// Planes are independent and each invocation owns its buffers exclusively,
/// so they parallelize freely; the engine itself stays single-threaded per
/// plane.
///
/// # Arguments
///
/// * `srcs` - The source planes of the frame.
/// * `dsts` - The destination planes, sizes matching plane for plane.
/// * `sigmas` - One `(horizontal, vertical)` sigma pair per plane.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
pub fn recursive_gaussian_blur_planes_with_strategy<T>(
    srcs: &[Plane<T>],
    dsts: &mut [Plane<T>],
    sigmas: &[(f64, f64)],
    strategy: ExecutionStrategy,
) -> Result<(), FilterError>
where
    T: PlaneDtype,
{
    if srcs.len() != dsts.len() || srcs.len() != sigmas.len() {
        return Err(FilterError::PlaneCountMismatch(
            srcs.len(),
            dsts.len(),
            sigmas.len(),
        ));
    }

    let num_pixels = srcs.iter().map(|p| p.width() * p.height()).sum();

    if strategy.is_parallel(num_pixels) {
        dsts.par_iter_mut()
            .zip(srcs.par_iter().zip(sigmas.par_iter()))
            .try_for_each(|(dst, (src, &sigma))| recursive_gaussian_blur(src, dst, sigma))
    } else {
        dsts.iter_mut()
            .zip(srcs.iter().zip(sigmas.iter()))
            .try_for_each(|(dst, (src, &sigma))| recursive_gaussian_blur(src, dst, sigma))
    }
}

/// Blur the planes of a frame, each with its own sigma pair.
///
/// Uses [`ExecutionStrategy::Auto`] (parallel for frames of ≥100K pixels,
/// serial otherwise). For explicit control, use
/// [`recursive_gaussian_blur_planes_with_strategy`].
pub fn recursive_gaussian_blur_planes<T>(
    srcs: &[Plane<T>],
    dsts: &mut [Plane<T>],
    sigmas: &[(f64, f64)],
) -> Result<(), FilterError>
where
    T: PlaneDtype,
{
    recursive_gaussian_blur_planes_with_strategy(srcs, dsts, sigmas, ExecutionStrategy::Auto)
}
