use num_traits::Float;

/// Feedback coefficients of the 4th-order recursive Gaussian approximation.
///
/// The coefficients sum to one, so a constant signal maps to itself (unit DC
/// gain). They are derived once per sigma by [`recursive_coeffs`] and shared
/// by the vertical and horizontal passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecursiveCoeffs<T> {
    /// Input gain.
    pub b: T,
    /// Feedback tap at distance 1.
    pub b1: T,
    /// Feedback tap at distance 2.
    pub b2: T,
    /// Feedback tap at distance 3.
    pub b3: T,
}

/// Derive the recursive filter coefficients for a Gaussian of standard
/// deviation `sigma`.
///
/// Follows the Young-van Vliet style approximation: an intermediate `q` is
/// fitted from sigma (two fit regimes, switching at `sigma = 2.5`), the raw
/// feedback terms are cubic polynomials in `q`, and the result is normalized
/// to unit DC gain. The intermediate math runs in f64 and the result is cast
/// to the sample type.
///
/// A sigma of zero flags a plane axis as unprocessed: callers skip the pass
/// entirely instead of deriving degenerate coefficients, so this function
/// expects `sigma > 0`.
///
/// # Arguments
///
/// * `sigma` - The desired Gaussian standard deviation, positive.
///
/// # Returns
///
/// The four feedback coefficients.
pub fn recursive_coeffs<T>(sigma: f64) -> RecursiveCoeffs<T>
where
    T: Float + From<f32>,
{
    let q = if sigma < 2.5 {
        3.97156 - 4.14554 * (1.0 - 0.26891 * sigma).sqrt()
    } else {
        0.98711 * sigma - 0.96330
    };

    let b0 = 1.57825 + 2.44413 * q + 1.4281 * q * q + 0.422205 * q * q * q;
    let b1 = 2.44413 * q + 2.85619 * q * q + 1.26661 * q * q * q;
    let b2 = -(1.4281 * q * q + 1.26661 * q * q * q);
    let b3 = 0.422205 * q * q * q;

    RecursiveCoeffs {
        b: ((1.0 - (b1 + b2 + b3) / b0) as f32).into(),
        b1: ((b1 / b0) as f32).into(),
        b2: ((b2 / b0) as f32).into(),
        b3: ((b3 / b0) as f32).into(),
    }
}

/// Apply the recursive filter along the column (vertical) axis, in place.
///
/// `buf` holds `height` rows of `width` valid samples each, `stride` samples
/// apart (`stride >= width`); it must already contain the input signal.
/// Each column gets a forward (top to bottom) causal sub-pass followed by a
/// backward (bottom to top) anti-causal sub-pass, which compose to a
/// zero-phase response. Out-of-range rows are treated as copies of the
/// nearest edge row (edge replication), realized by seeding the causal state
/// from the first and last row respectively.
///
/// Single-threaded, allocation-free, O(height * width).
pub fn recursive_filter_vertical<T>(
    buf: &mut [T],
    height: usize,
    width: usize,
    stride: usize,
    coeffs: &RecursiveCoeffs<T>,
) where
    T: Float,
{
    if height == 0 || width == 0 {
        return;
    }
    debug_assert!(stride >= width);
    debug_assert!(buf.len() >= stride * (height - 1) + width);

    let RecursiveCoeffs { b, b1, b2, b3 } = *coeffs;
    let upper = stride * height;

    for col in 0..width {
        // forward: row 0 seeds the causal state and stays as-is
        let mut i = col;
        let mut p1 = buf[i];
        let mut p2 = p1;
        let mut p3 = p1;

        i += stride;
        while i < upper {
            let p0 = b * buf[i] + b1 * p1 + b2 * p2 + b3 * p3;
            p3 = p2;
            p2 = p1;
            p1 = p0;
            buf[i] = p0;
            i += stride;
        }

        // backward: seeded from the forward output at the last row
        i -= stride;
        p1 = buf[i];
        p2 = p1;
        p3 = p1;

        while i > col {
            i -= stride;
            let p0 = b * buf[i] + b1 * p1 + b2 * p2 + b3 * p3;
            p3 = p2;
            p2 = p1;
            p1 = p0;
            buf[i] = p0;
        }
    }
}

/// Apply the recursive filter along the row (horizontal) axis, in place.
///
/// Same contract as [`recursive_filter_vertical`], with rows processed
/// independently: a left-to-right causal sub-pass, then a right-to-left
/// anti-causal sub-pass seeded from the already-updated rightmost sample.
/// The backward half reads the forward half's output, so the two halves of a
/// row must stay strictly sequential.
pub fn recursive_filter_horizontal<T>(
    buf: &mut [T],
    height: usize,
    width: usize,
    stride: usize,
    coeffs: &RecursiveCoeffs<T>,
) where
    T: Float,
{
    if height == 0 || width == 0 {
        return;
    }
    debug_assert!(stride >= width);
    debug_assert!(buf.len() >= stride * (height - 1) + width);

    let RecursiveCoeffs { b, b1, b2, b3 } = *coeffs;

    for r in 0..height {
        let row = &mut buf[r * stride..r * stride + width];

        let mut p1 = row[0];
        let mut p2 = p1;
        let mut p3 = p1;

        for x in 1..width {
            let p0 = b * row[x] + b1 * p1 + b2 * p2 + b3 * p3;
            p3 = p2;
            p2 = p1;
            p1 = p0;
            row[x] = p0;
        }

        p1 = row[width - 1];
        p2 = p1;
        p3 = p1;

        for x in (0..width - 1).rev() {
            let p0 = b * row[x] + b1 * p1 + b2 * p2 + b3 * p3;
            p3 = p2;
            p2 = p1;
            p1 = p0;
            row[x] = p0;
        }
    }
}

/// Apply the separable 2D recursive Gaussian blur to a strided buffer, in
/// place: vertical pass first, then horizontal.
///
/// `sigma` is xy-ordered `(horizontal, vertical)`; an axis whose sigma is
/// zero is skipped entirely (identity). Sigmas must be non-negative; callers
/// validate at the plane-level boundary.
///
/// # Arguments
///
/// * `buf` - The strided sample buffer, holding the input signal.
/// * `height` - Number of rows.
/// * `width` - Valid samples per row.
/// * `stride` - Samples per row including padding (`stride >= width`).
/// * `sigma` - Gaussian standard deviation per axis, `(horizontal, vertical)`.
pub fn recursive_gaussian_2d<T>(
    buf: &mut [T],
    height: usize,
    width: usize,
    stride: usize,
    sigma: (f64, f64),
) where
    T: Float + From<f32>,
{
    if sigma.1 > 0.0 {
        let coeffs = recursive_coeffs(sigma.1);
        recursive_filter_vertical(buf, height, width, stride, &coeffs);
    }
    if sigma.0 > 0.0 {
        let coeffs = recursive_coeffs(sigma.0);
        recursive_filter_horizontal(buf, height, width, stride, &coeffs);
    }
}
