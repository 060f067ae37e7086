//! Closed-form principal moments of a symmetric 3x3 inertia tensor.
//!
//! The tensor is passed as its diagonal `[Ixx, Iyy, Izz]` and off-diagonal
//! `[Ixy, Ixz, Iyz]` entries. Eigenvalues are obtained from the trigonometric
//! solution of the characteristic cubic, following
//! M. Kronenburg, "A Method for Fast Diagonalization of a 2x2 or 3x3 Real
//! Symmetric Matrix", <http://arxiv.org/abs/1306.6291v4>.

use crate::scalar::{abs_eq, Scalar};

/// Largest of the three diagonal moments.
#[inline]
pub(crate) fn max_diagonal<T: Scalar>(diagonal: &[T; 3]) -> T {
    diagonal[0].max(diagonal[1]).max(diagonal[2])
}

/// Compute the principal moments (eigenvalues) of a symmetric 3x3 tensor.
///
/// `tol` is relative and scaled by the largest diagonal moment.
///
/// If every off-diagonal entry is within tolerance of zero the diagonal is
/// returned as is, **without sorting**. Otherwise the three moments are
/// returned in ascending order.
///
/// # Arguments
///
/// * `diagonal` - The diagonal moments `[Ixx, Iyy, Izz]`.
/// * `off_diagonal` - The products of inertia `[Ixy, Ixz, Iyz]`.
/// * `tol` - The relative tolerance.
///
/// Example:
///
/// ```
/// use kornia_inertia::eigen::principal_moments;
///
/// let moments = principal_moments([2.0, 2.0, 3.0], [0.0, 0.0, 0.5], 1e-6);
/// assert!(moments[0] <= moments[1] && moments[1] <= moments[2]);
/// ```
pub fn principal_moments<T: Scalar>(diagonal: [T; 3], off_diagonal: [T; 3], tol: T) -> [T; 3] {
    let tol = tol * max_diagonal(&diagonal);
    if off_diagonal.iter().all(|&x| abs_eq(x, T::zero(), tol)) {
        log::trace!("inertia tensor already diagonal");
        return diagonal;
    }

    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    let nine = T::from_f64(9.0);
    let twenty_seven = T::from_f64(27.0);

    let [d0, d1, d2] = diagonal;
    let [p0, p1, p2] = off_diagonal;

    // coefficients of the characteristic cubic
    let b = d0 + d1 + d2;
    let c = d0 * d1 - p0 * p0 + d0 * d2 - p1 * p1 + d1 * d2 - p2 * p2;
    let d = d0 * p2 * p2 + d1 * p1 * p1 + d2 * p0 * p0 - d0 * d1 * d2 - two * p0 * p1 * p2;

    // p is a sum of squares that only vanishes for a diagonal tensor with
    // three equal moments; its inverse power is used below.
    let p = b * b - three * c;
    if p < tol * tol {
        log::trace!("inertia tensor has a triple principal moment");
        let mean = b / three;
        return [mean, mean, mean];
    }

    let q = two * b * b * b - nine * b * c - twenty_seven * d;
    let arg = (q / (two * p * p.sqrt())).max(-T::one()).min(T::one());
    let delta = arg.acos();

    let sqrt_p = p.sqrt();
    let two_pi = two * T::PI();
    let root = |angle: T| (b + two * sqrt_p * (angle / three).cos()) / three;

    let mut moments = [root(delta), root(delta + two_pi), root(delta - two_pi)];
    sort3(&mut moments);
    moments
}

/// Sort three values in ascending order.
#[inline]
fn sort3<T: Scalar>(v: &mut [T; 3]) {
    if v[1] < v[0] {
        v.swap(0, 1);
    }
    if v[2] < v[1] {
        v.swap(1, 2);
    }
    if v[1] < v[0] {
        v.swap(0, 1);
    }
}

/// Check whether three moments can be the principal moments of a rigid body.
///
/// All moments must be strictly positive and satisfy the strict triangle
/// inequality `m0 + m1 > m2`, `m1 + m2 > m0`, `m2 + m0 > m1`.
pub fn valid_moments<T: Scalar>(moments: [T; 3]) -> bool {
    let [m0, m1, m2] = moments;
    m0 > T::zero()
        && m1 > T::zero()
        && m2 > T::zero()
        && m0 + m1 > m2
        && m1 + m2 > m0
        && m2 + m0 > m1
}

/// Sylvester's criterion on the leading principal minors of the tensor.
///
/// Cheaper than a full eigen-decomposition; does not look at the mass.
pub fn is_positive_definite<T: Scalar>(diagonal: [T; 3], off_diagonal: [T; 3]) -> bool {
    let [d0, d1, d2] = diagonal;
    let [p0, p1, p2] = off_diagonal;
    let minor2 = d0 * d1 - p0 * p0;
    let det = d0 * (d1 * d2 - p2 * p2) - p0 * (p0 * d2 - p2 * p1) + p1 * (p0 * p2 - d1 * p1);
    d0 > T::zero() && minor2 > T::zero() && det > T::zero()
}
