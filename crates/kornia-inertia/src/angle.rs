//! Angle helpers shared by the principal axis solver.

use crate::scalar::Scalar;

/// Wrap an angle in radians to the interval `(-pi, pi]`.
pub fn wrap_to_pi<T: Scalar>(angle: T) -> T {
    let pi = T::PI();
    let two_pi = pi + pi;
    let mut wrapped = angle % two_pi;
    if wrapped > pi {
        wrapped = wrapped - two_pi;
    } else if wrapped <= -pi {
        wrapped = wrapped + two_pi;
    }
    wrapped
}

/// Angle of the 2-vector `v` measured from the x axis.
///
/// Returns zero when the squared length of `v` is below `tol_sq`, where the
/// direction of `v` carries no information.
pub fn angle2<T: Scalar>(v: [T; 2], tol_sq: T) -> T {
    if v[0] * v[0] + v[1] * v[1] < tol_sq {
        return T::zero();
    }
    v[1].atan2(v[0])
}

/// Squared chord distance between two angles on the unit circle.
///
/// Unlike a raw difference, angles close to `pi` and `-pi` come out close.
#[inline]
pub fn sin_cos_distance<T: Scalar>(a: T, b: T) -> T {
    let (sa, ca) = a.sin_cos();
    let (sb, cb) = b.sin_cos();
    (sa - sb) * (sa - sb) + (ca - cb) * (ca - cb)
}

/// Square root that maps non-positive inputs to zero.
#[inline]
pub fn clamped_sqrt<T: Scalar>(x: T) -> T {
    if x <= T::zero() {
        return T::zero();
    }
    x.sqrt()
}

/// `acos` with its argument clamped to `[-1, 1]` against round-off.
#[inline]
pub fn clamped_acos<T: Scalar>(x: T) -> T {
    x.max(-T::one()).min(T::one()).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_wrap_to_pi() {
        assert_relative_eq!(wrap_to_pi(0.5f64), 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_to_pi(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_to_pi(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_to_pi(PI), PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_to_pi(-PI), PI, epsilon = 1e-12);
        assert!(sin_cos_distance(wrap_to_pi(5.0 * PI), PI) < 1e-12);
    }

    #[test]
    fn test_angle2() {
        assert_relative_eq!(angle2([0.0f64, 1.0], 1e-12), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(angle2([-1.0f64, 0.0], 1e-12), PI, epsilon = 1e-12);
        // too short to define a direction
        assert_eq!(angle2([1e-7f64, -1e-7], 1e-12), 0.0);
    }

    #[test]
    fn test_sin_cos_distance_wraps() {
        let near = sin_cos_distance(PI - 1e-3, -PI + 1e-3);
        let far = sin_cos_distance(0.0f64, PI);
        assert!(near < 1e-5);
        assert_relative_eq!(far, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_sqrt_and_acos() {
        assert_eq!(clamped_sqrt(-4.0f64), 0.0);
        assert_eq!(clamped_sqrt(4.0f64), 2.0);
        assert_eq!(clamped_acos(1.0 + 1e-9f64), 0.0);
        assert_relative_eq!(clamped_acos(-1.5f64), PI, epsilon = 1e-12);
    }
}
