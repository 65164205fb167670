use std::fmt;

use crate::{
    traits::{is_negligible2, Number, One, Real, Zero},
    vec3, vec4, Vec3, Vector, XYZW,
};

mod interp;
mod ops;

/// A quaternion `w + xi + yj + zk`.
///
/// Unit-length quaternions are used to represent rotations in 3D space. Unit length is a
/// convention that this type never enforces: the generalized operations ([`Quat::exp`],
/// [`Quat::ln`], [`Quat::sqrt`]) accept any quaternion and treat its length as a uniform scale,
/// while the `_unit` variants assume (and do not check) unit length.
///
/// Components are accessible as fields `x`, `y`, `z` (imaginary parts) and `w` (real part).
///
/// None of the operations panic. Degenerate inputs (zero-length quaternions passed to
/// [`Quat::inverse`] or [`Quat::normalize`]) propagate non-finite values.
#[derive(Clone, Copy, Hash, PartialEq)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

/// Shorthand for [`Quat::from_components`].
pub const fn quat<T>(x: T, y: T, z: T, w: T) -> Quat<T> {
    Quat {
        vec: vec4(x, y, z, w),
    }
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, representing no rotation.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        quat(x, y, z, w)
    }

    /// Creates a quaternion from its imaginary (vector) part and its real (scalar) part.
    pub fn from_vector_scalar(v: Vec3<T>, w: T) -> Self {
        let [x, y, z] = v.into_array();
        quat(x, y, z, w)
    }

    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    pub const fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    pub fn into_array(self) -> [T; 4] {
        self.vec.into_array()
    }

    /// Returns the imaginary part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.vec.truncate()
    }
}

impl<T: Number> Quat<T> {
    /// Returns the conjugate `w - xi - yj - zk`.
    ///
    /// For unit quaternions this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.into_array();
        quat(-x, -y, -z, w)
    }

    /// Returns the 4D dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns `conjugate(self) * other`, the rotation taking `self` to `other`.
    pub fn dot_quat(self, other: Self) -> Self {
        self.conjugate() * other
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Returns the multiplicative inverse `conjugate(self) / |self|²`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let q = quat(1.0, 2.0, 3.0, 4.0);
    /// approx::assert_relative_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
    /// ```
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length2()
    }
}

impl<T: Real> Quat<T> {
    /// Returns the length of this quaternion.
    #[doc(alias = "abs")]
    #[doc(alias = "norm")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Returns a copy of this quaternion scaled to unit length.
    pub fn normalize(self) -> Self {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Rotates `v` by this (unit) quaternion, computing `q * (v, 0) * conjugate(q)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let q = euler_z(std::f64::consts::FRAC_PI_2);
    /// approx::assert_abs_diff_eq!(q.rotate_vector(Vec3::X), Vec3::Y, epsilon = 1e-12);
    /// ```
    pub fn rotate_vector(self, v: Vec3<T>) -> Vec3<T> {
        (self * Self::from_vector_scalar(v, T::ZERO) * self.conjugate()).vector_part()
    }

    /// Returns the rotation encoded by this quaternion as `axis * angle`.
    ///
    /// Also works for non-unit quaternions, whose length is ignored. The identity maps to the zero
    /// vector.
    pub fn arg(self) -> Vec3<T> {
        let [x, y, z, w] = self.into_array();
        let sin_theta = (x * x + y * y + z * z).sqrt();
        let theta = sin_theta.atan2(w);
        let two = T::ONE + T::ONE;
        let s = if is_negligible2(theta * theta) {
            two / w
        } else {
            two * theta / sin_theta
        };
        vec3(x * s, y * s, z * s)
    }

    /// Computes the quaternion exponential.
    ///
    /// The real part of `self` becomes a uniform scale `e^w` of the result, and the imaginary
    /// part a rotation by twice its length. [`Quat::ln`] is the inverse.
    pub fn exp(self) -> Self {
        let [x, y, z, w] = self.into_array();
        let phi2 = x * x + y * y + z * z;
        let m = w.exp();
        let (r, s) = if is_negligible2(phi2) {
            let half = T::from_f64(0.5);
            let sixth = T::from_f64(1.0 / 6.0);
            (m * (T::ONE - phi2 * half), m * (T::ONE - phi2 * sixth))
        } else {
            let phi = phi2.sqrt();
            let (sin, cos) = phi.sin_cos();
            (m * cos, m * sin / phi)
        };
        quat(x * s, y * s, z * s, r)
    }

    /// Computes the natural logarithm of this quaternion.
    ///
    /// The result's real part is `ln |self|`, and its imaginary part is half the rotation vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let q = euler_x(1.0) * 3.0;
    /// let ln = q.ln();
    /// approx::assert_relative_eq!(ln.w, 3.0f64.ln(), epsilon = 1e-12);
    /// approx::assert_relative_eq!(ln.exp(), q, epsilon = 1e-12);
    /// ```
    pub fn ln(self) -> Self {
        let [x, y, z, w] = self.into_array();
        let v2 = x * x + y * y + z * z;
        let w2 = w * w;
        let s = if w > T::ZERO && is_negligible2(v2 / w2) {
            // Series of `atan2(v, w) / v` around `v = 0`.
            (T::ONE - v2 / (T::from_f64(3.0) * w2)) / w
        } else if v2 > T::ZERO {
            let v = v2.sqrt();
            v.atan2(w) / v
        } else {
            // Real and non-positive: the rotation axis is undefined, keep the vector part at 0.
            T::ONE
        };
        quat(x * s, y * s, z * s, T::from_f64(0.5) * (w2 + v2).ln())
    }

    /// Computes the principal square root, so that `q.sqrt() * q.sqrt() == q`.
    ///
    /// The result has length `sqrt(|q|)` and half the rotation angle of `q`.
    pub fn sqrt(self) -> Self {
        self.sqrt_with_length(self.length())
    }

    /// Square root of a unit quaternion: half the rotation angle about the same axis.
    pub fn sqrt_unit(self) -> Self {
        self.sqrt_with_length(T::ONE)
    }

    fn sqrt_with_length(self, length: T) -> Self {
        let [x, y, z, w] = self.into_array();
        let half = T::from_f64(0.5);
        let len = (half * (w + length)).sqrt();
        let s = half / len;
        quat(x * s, y * s, z * s, len)
    }

    /// Exponential of the pure quaternion `(v, 0)`, always a unit quaternion.
    ///
    /// `Quat::exp_unit(v)` rotates by `2 |v|` about `v`.
    pub fn exp_unit(v: Vec3<T>) -> Self {
        let phi2 = v.length2();
        let (r, s) = if is_negligible2(phi2) {
            let half = T::from_f64(0.5);
            let sixth = T::from_f64(1.0 / 6.0);
            (T::ONE - phi2 * half, T::ONE - phi2 * sixth)
        } else {
            let phi = phi2.sqrt();
            let (sin, cos) = phi.sin_cos();
            (cos, sin / phi)
        };
        Self::from_vector_scalar(v * s, r)
    }

    /// Logarithm of a unit quaternion, returned as its (purely imaginary) vector part.
    pub fn log_unit(self) -> Vec3<T> {
        let [x, y, z, w] = self.into_array();
        let v2 = x * x + y * y + z * z;
        let s = if is_negligible2(v2) {
            T::ONE - v2 / T::from_f64(3.0)
        } else {
            let v = v2.sqrt();
            v.atan2(w) / v
        };
        vec3(x * s, y * s, z * s)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let XYZW { x, y, z, w, .. } = &**self;
        f.debug_tuple("quat").field(x).field(y).field(z).field(w).finish()
    }
}

impl<T> std::ops::Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &XYZW<T> {
        &self.vec
    }
}

impl<T> std::ops::DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut XYZW<T> {
        &mut self.vec
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::*;

    #[test]
    fn fields() {
        let mut q = quat(1, 2, 3, 4);
        assert_eq!((q.x, q.y, q.z, q.w), (1, 2, 3, 4));
        q.w = 5;
        assert_eq!(q.into_array(), [1, 2, 3, 5]);
        assert_eq!(format!("{q:?}"), "quat(1, 2, 3, 5)");
    }

    #[test]
    fn hamilton_units() {
        let i = quat(1, 0, 0, 0);
        let j = quat(0, 1, 0, 0);
        let k = quat(0, 0, 1, 0);
        let minus_one = quat(0, 0, 0, -1);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = quat(0.5, -1.0, 2.0, 0.25);
        assert_eq!(q.conjugate().conjugate(), q);
        assert_relative_eq!(q.inverse() * q, Quat::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(q / q, Quat::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(q.dot_quat(q), Quat::IDENTITY * q.length2(), epsilon = 1e-12);
    }

    #[test]
    fn arg_of_identity_is_zero() {
        assert_eq!(Quat::<f64>::IDENTITY.arg(), Vec3::ZERO);
        assert_eq!(Quat::<f32>::IDENTITY.log_unit(), Vec3::ZERO);
    }

    #[test]
    fn arg_is_axis_times_angle() {
        let q = axis_angle(vec3(0.0, 0.6, 0.8), 1.2);
        assert_relative_eq!(q.arg(), vec3(0.0, 0.72, 0.96), epsilon = 1e-12);
        // Length is ignored.
        assert_relative_eq!((q * 4.0).arg(), vec3(0.0, 0.72, 0.96), epsilon = 1e-12);
    }

    #[test]
    fn log_exp() {
        for angle in [1.0, 0.0001, 0.0] {
            let q = euler_x(angle);
            assert_relative_eq!(q.ln().exp(), q, epsilon = 1e-12);
            assert_relative_eq!(Quat::exp_unit(q.log_unit()), q, epsilon = 1e-12);
            assert_relative_eq!(q.log_unit(), q.ln().vector_part(), epsilon = 1e-12);
        }
    }

    #[test]
    fn log_exp_scaled() {
        let q = euler_xyz(vec3(0.3, -0.2, 0.9)) * 2.5;
        assert_relative_eq!(q.ln().exp(), q, epsilon = 1e-12);

        // Tiny rotation, so the series branch of `ln` is taken.
        let q = euler_y(1e-7) * 2.0;
        assert_relative_eq!(q.ln().exp(), q, epsilon = 1e-12);
    }

    #[test]
    fn ln_off_the_positive_real_axis() {
        // Purely imaginary: a half turn.
        let q = quat(1e-7, 0.0, 0.0, 0.0);
        let ln = q.ln();
        assert_relative_eq!(ln.x, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(ln.w, 1e-7f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(ln.exp(), q, epsilon = 1e-15);

        // Close to a half turn, with and without scale.
        for scale in [1.0, 3.0] {
            let q = quat(1e-7, 0.0, 0.0, -1.0) * scale;
            let ln = q.ln();
            assert!(ln.x > 1.5);
            assert_abs_diff_eq!(ln.exp(), q, epsilon = 1e-12);
        }

        let ln = quat(0.0, 0.0, 0.0, -2.0).ln();
        assert_eq!(ln.vector_part(), Vec3::ZERO);
        assert_relative_eq!(ln.w, 2.0f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn exp_is_continuous_across_threshold() {
        let eps = DEGENERATE_EPSILON;
        for phi in [eps * 0.999, eps, eps * 1.001] {
            let expected = quat(phi * (1.0 - phi * phi / 6.0), 0.0, 0.0, 1.0 - phi * phi / 2.0);
            let q = Quat::from_vector_scalar(vec3(phi, 0.0, 0.0), 0.0).exp();
            assert_abs_diff_eq!(q, expected, epsilon = 1e-15);
            let v = Quat::exp_unit(vec3(phi, 0.0, 0.0));
            assert_abs_diff_eq!(v, expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn ln_and_arg_are_continuous_across_threshold() {
        let eps = DEGENERATE_EPSILON;
        for scale in [0.5, 1.0, 2.0] {
            for v in [eps * 0.999, eps, eps * 1.001] {
                // Exact values for a rotation by `2 * theta`, scaled.
                let theta = v.atan2(1.0);
                let q = quat(v, 0.0, 0.0, 1.0) * scale;
                let ln = q.ln();
                assert_relative_eq!(ln.x, theta, max_relative = 1e-12);
                assert_relative_eq!(
                    ln.w,
                    scale.ln() + 0.5 * (1.0 + v * v).ln(),
                    epsilon = 1e-15
                );
                assert_relative_eq!(q.arg().x, 2.0 * theta, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn sqrt_squares_back() {
        let q = quat(0.3, -1.2, 0.8, 2.0);
        let r = q.sqrt();
        assert_relative_eq!(r * r, q, epsilon = 1e-12);
        assert_relative_eq!(r.length(), q.length().sqrt(), epsilon = 1e-12);

        let u = euler_zyx(vec3(0.4, 1.1, -0.7));
        let r = u.sqrt_unit();
        assert_relative_eq!(r * r, u, epsilon = 1e-12);
        assert_relative_eq!(r, u.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn rotate_vector_matches_matrix() {
        let q = euler_xyz(vec3(0.2f64, 0.6, 0.44));
        let v = vec3(1.0, -2.0, 0.5);
        assert_relative_eq!(q.rotate_vector(v), rotate(q) * v, epsilon = 1e-12);
    }

    #[test]
    fn pod() {
        let q = quat(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::cast::<_, [f32; 4]>(q), [1.0, 2.0, 3.0, 4.0]);
    }
}
