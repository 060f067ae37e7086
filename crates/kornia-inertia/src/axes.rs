//! Closed-form principal axes of a symmetric 3x3 inertia tensor.
//!
//! The eigenvectors are parameterised by three Euler angles `(phi1, phi2, phi3)`
//! whose magnitudes follow from the principal moments. Their signs are not
//! fixed by the closed form, so the candidates are scored against two
//! independent estimates of `phi1` and the most consistent one wins.
//!
//! Reference: M. Kronenburg, "A Method for Fast Diagonalization of a 2x2 or
//! 3x3 Real Symmetric Matrix", <http://arxiv.org/abs/1306.6291v4>.

use crate::angle::{angle2, clamped_acos, clamped_sqrt, sin_cos_distance, wrap_to_pi};
use crate::eigen::max_diagonal;
use crate::scalar::{abs_eq, Scalar};

/// Euler angles, composed as `Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles<T> {
    /// Rotation about x, in radians.
    pub roll: T,
    /// Rotation about y, in radians.
    pub pitch: T,
    /// Rotation about z, in radians.
    pub yaw: T,
}

/// Outcome of the principal axis solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrincipalAxes<T> {
    /// The tensor is already diagonal in its frame, the offset is the identity.
    Aligned,
    /// The offset is the inverse of `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    ///
    /// When `swap_extremes` is set the result is post-multiplied by a
    /// quarter turn about y, which exchanges the smallest and largest axes.
    Rotated {
        /// Angles of the inverse offset rotation.
        angles: EulerAngles<T>,
        /// Whether the repeated moments sit at the large end of the sorted moments.
        swap_extremes: bool,
    },
    /// Both disambiguation vectors vanished. This implies a diagonal tensor and
    /// should never be reached; callers surface it as an invalid orientation.
    Inconsistent,
}

// sign combinations (phi2, phi3) tried by the general branch
const SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)];

/// Solve for the rotation between the body frame and the principal frame.
///
/// # Arguments
///
/// * `diagonal` - The diagonal moments `[Ixx, Iyy, Izz]`.
/// * `off_diagonal` - The products of inertia `[Ixy, Ixz, Iyz]`.
/// * `moments` - The principal moments, as returned by [`crate::eigen::principal_moments`].
/// * `tol` - Relative tolerance, scaled by the largest diagonal moment.
/// * `angle_tol_sq` - Squared length below which a 2-vector has no direction.
///
/// PRECONDITION: when `moments` differs from `diagonal` it is sorted ascending.
pub fn principal_axes<T: Scalar>(
    diagonal: [T; 3],
    off_diagonal: [T; 3],
    moments: [T; 3],
    tol: T,
    angle_tol_sq: T,
) -> PrincipalAxes<T> {
    let tol = tol * max_diagonal(&diagonal);

    // covers the diagonal case and three equal moments
    if (0..3).all(|i| abs_eq(moments[i], diagonal[i], tol)) {
        log::trace!("inertia tensor aligned with its principal axes");
        return PrincipalAxes::Aligned;
    }

    let two = T::from_f64(2.0);
    let tol_sq = tol * tol;

    let f1 = [off_diagonal[0], -off_diagonal[1]];
    let f2 = [diagonal[1] - diagonal[2], -two * off_diagonal[2]];
    let f1_small = norm_sq(f1) < tol_sq;
    let f2_small = norm_sq(f2) < tol_sq;

    if f1_small && f2_small {
        log::warn!(
            "principal axes undefined for diagonal {:?} and off-diagonal {:?}",
            diagonal,
            off_diagonal
        );
        return PrincipalAxes::Inconsistent;
    }

    let phi = Phi {
        f1,
        f2,
        f1_small,
        f2_small,
        angle_tol_sq,
    };

    // moments are sorted, a repeated value shows up as a vanishing adjacent gap
    if abs_eq(moments[0] - moments[1], T::zero(), tol) {
        log::trace!("repeated principal moments at the small end");
        phi.repeated(diagonal, moments, 2)
    } else if abs_eq(moments[1] - moments[2], T::zero(), tol) {
        log::trace!("repeated principal moments at the large end");
        phi.repeated(diagonal, moments, 0)
    } else {
        log::trace!("distinct principal moments");
        phi.distinct(diagonal, off_diagonal, moments)
    }
}

#[inline]
fn norm_sq<T: Scalar>(v: [T; 2]) -> T {
    v[0] * v[0] + v[1] * v[1]
}

/// Auxiliary vectors from the tensor entries, shared by both branches.
struct Phi<T> {
    f1: [T; 2],
    f2: [T; 2],
    f1_small: bool,
    f2_small: bool,
    angle_tol_sq: T,
}

impl<T: Scalar> Phi<T> {
    /// First estimate of phi1, from `g1` and `f1`.
    fn phi11(&self, g1: [T; 2]) -> T {
        wrap_to_pi(angle2(g1, self.angle_tol_sq) - angle2(self.f1, self.angle_tol_sq))
    }

    /// Second estimate of phi1, from `g2` and `f2`.
    fn phi12(&self, g2: [T; 2]) -> T {
        let half = T::from_f64(0.5);
        wrap_to_pi(half * (angle2(g2, self.angle_tol_sq) - angle2(self.f2, self.angle_tol_sq)))
    }

    /// Two equal moments: one degree of freedom left, phi3 is zero.
    fn repeated(&self, diagonal: [T; 3], moments: [T; 3], unequal: usize) -> PrincipalAxes<T> {
        let half = T::from_f64(0.5);
        let two = T::from_f64(2.0);

        let diff = moments[1] - moments[unequal];
        // s = cos(phi2)^2, in [0, 1] up to round-off
        let mut s = (diagonal[0] - moments[unequal]) / diff;
        if !s.is_finite() {
            s = T::one();
        }
        let mut phi2 = clamped_acos(clamped_sqrt(s));

        let g1 = [T::zero(), half * diff * (two * phi2).sin()];
        let g2 = [diff * s, T::zero()];

        // f2 cannot vanish here, so phi12 is always defined
        let phi1 = self.phi12(g2);

        if !self.f1_small {
            // pick the sign of phi2 whose phi11 agrees with phi12
            let phi11_pos = self.phi11(g1);
            let phi11_neg = self.phi11([-g1[0], -g1[1]]);
            if sin_cos_distance(phi1, phi11_neg) < sin_cos_distance(phi1, phi11_pos) {
                phi2 = -phi2;
            }
        }

        PrincipalAxes::Rotated {
            angles: EulerAngles {
                roll: -phi1,
                pitch: -phi2,
                yaw: T::zero(),
            },
            swap_extremes: unequal == 0,
        }
    }

    /// Three distinct moments.
    fn distinct(&self, diagonal: [T; 3], off_diagonal: [T; 3], moments: [T; 3]) -> PrincipalAxes<T> {
        let half = T::from_f64(0.5);
        let two = T::from_f64(2.0);
        let one = T::one();

        let [m0, m1, m2] = moments;
        let [p0, p1, _] = off_diagonal;
        let d0 = diagonal[0];

        // v = cos(phi2)^2, w = cos(phi3)^2
        let v = (p0 * p0 + p1 * p1 + (d0 - m2) * (d0 + m2 - m0 - m1)) / ((m1 - m2) * (m2 - m0));
        let mut w = (d0 - m2 + (m2 - m1) * v) / ((m0 - m1) * v);
        if !w.is_finite() {
            // v == 0: x is the axis of the largest moment, phi2 = pi/2 and
            // phi3 collapses onto phi1
            w = one;
        }

        let sqrt_v = clamped_sqrt(v);
        let phi2 = clamped_acos(sqrt_v);
        let phi3 = clamped_acos(clamped_sqrt(w));

        // g1, g2 for phi2, phi3 >= 0
        let g1 = [
            half * (m0 - m1) * sqrt_v * (two * phi3).sin(),
            half * ((m0 - m1) * w + m1 - m2) * (two * phi2).sin(),
        ];
        let g2 = [
            (m0 - m1) * (one + (v - two) * w) + (m1 - m2) * v,
            (m0 - m1) * phi2.sin() * (two * phi3).sin(),
        ];

        let (phi1, sign2, sign3) = if self.f1_small {
            (self.phi12(g2), one, one)
        } else if self.f2_small {
            (self.phi11(g1), one, one)
        } else {
            self.search_signs(g1, g2)
        };

        PrincipalAxes::Rotated {
            angles: EulerAngles {
                roll: -phi1,
                pitch: -(sign2 * phi2),
                yaw: -(sign3 * phi3),
            },
            swap_extremes: false,
        }
    }

    /// Try every sign combination of (phi2, phi3) and keep the one where both
    /// estimates of phi1 agree best. Returns `(phi1, sign2, sign3)`.
    fn search_signs(&self, g1: [T; 2], g2: [T; 2]) -> (T, T, T) {
        let (mut best_err, mut best) = (T::infinity(), (T::zero(), T::one(), T::one()));
        for (s2, s3) in SIGNS {
            let (s2, s3) = (T::from_f64(s2), T::from_f64(s3));
            let phi11 = self.phi11([s3 * g1[0], s2 * g1[1]]);
            let phi12 = self.phi12([g2[0], s2 * s3 * g2[1]]);
            let err = sin_cos_distance(phi11, phi12);
            if err < best_err {
                best_err = err;
                best = (phi11, s2, s3);
            }
        }
        best
    }
}
