//! Floating point scalar the inertia kernels are generic over.

use num_traits::{Float, FloatConst};

/// Real scalar used by the principal moment and principal axis kernels.
///
/// Implemented for `f32` and `f64`. The kernels only need `num_traits::Float`
/// arithmetic plus a lossless way to spell literal constants.
pub trait Scalar: Float + FloatConst + std::fmt::Debug + Send + Sync + 'static {
    /// Convert a literal `f64` constant into this scalar type.
    fn from_f64(v: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

/// Compare two scalars with a tolerance that is absolute near zero and
/// relative for large magnitudes: `|a - b| <= tol * max(1, |a|, |b|)`.
#[inline]
pub fn approx_eq<T: Scalar>(a: T, b: T, tol: T) -> bool {
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= tol * scale
}

/// Compare two scalars with a purely absolute tolerance.
#[inline]
pub(crate) fn abs_eq<T: Scalar>(a: T, b: T, tol: T) -> bool {
    (a - b).abs() <= tol
}
