//! Leaf constructors.

use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use rand::Rng;

/// Creates one leaf per value, in order.
pub fn from_slice(values: &[f64]) -> Vec<Scalar> {
    values.iter().copied().map(Scalar::new).collect()
}

/// Creates a leaf with a value drawn uniformly from `[low, high)`.
///
/// # Errors
/// [`ScalarGradError::InvalidRange`] unless `low < high`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Result<Scalar, ScalarGradError> {
    if low.is_nan() || high.is_nan() || low >= high {
        return Err(ScalarGradError::InvalidRange { low, high });
    }
    Ok(Scalar::new(rng.gen_range(low..high)))
}

/// Creates `n` independent uniform leaves. See [`uniform`].
pub fn uniform_vec<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Result<Vec<Scalar>, ScalarGradError> {
    (0..n).map(|_| uniform(rng, low, high)).collect()
}
