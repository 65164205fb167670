//! Spherical interpolation between unit quaternions.

use crate::{
    traits::{is_negligible2, Real},
    Quat,
};

impl<T: Real> Quat<T> {
    /// Spherical linear interpolation from `self` (at `s = 0`) to `other` (at `s = 1`).
    ///
    /// Interpolates along the arc that `self` and `other` span on the 4D unit sphere, which may be
    /// the longer of the two possible rotations. Use [`Quat::slerp_shortest`] to always take the
    /// shorter one. Nearly identical inputs fall back to linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let a = euler_z(0.0);
    /// let b = euler_z(1.0);
    /// approx::assert_relative_eq!(a.slerp(b, 0.25), euler_z(0.25), epsilon = 1e-12);
    /// ```
    pub fn slerp(self, other: Self, s: T) -> Self {
        let d = self.dot_quat(other);
        let cos_theta = d.w;
        let sin_theta2 = d.vector_part().length2();
        let (u, v) = if is_negligible2(sin_theta2) {
            (T::ONE - s, s)
        } else {
            let sin_theta = sin_theta2.sqrt();
            let theta = sin_theta.atan2(cos_theta);
            (
                ((T::ONE - s) * theta).sin() / sin_theta,
                (s * theta).sin() / sin_theta,
            )
        };
        self * u + other * v
    }

    /// Like [`Quat::slerp`], but negates `other` if needed so that the shorter rotation is taken.
    pub fn slerp_shortest(self, other: Self, s: T) -> Self {
        let other = if self.dot(other) < T::ZERO {
            -other
        } else {
            other
        };
        self.slerp(other, s)
    }

    /// Spherical cubic interpolation between `self` and `other`, shaped by the inner control
    /// points `a` and `b`.
    ///
    /// Passes through `self` at `s = 0` and `other` at `s = 1`.
    pub fn squad(self, a: Self, b: Self, other: Self, s: T) -> Self {
        let three = T::from_f64(3.0);
        let outer = self.slerp(other, s);
        let inner = a.slerp(b, s);
        outer.slerp(inner, three * s * (T::ONE - s))
    }
}
