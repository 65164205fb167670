//! Conversions between unit quaternions and other rotation parameterizations.
//!
//! - Axis-angle and single-axis rotations ([`axis_angle`], [`euler_x`], ...).
//! - Euler angles in any of the six Tait-Bryan orders ([`euler`], [`get_euler`]).
//! - Rotation vectors, whose direction is the axis and whose length is the angle ([`rq`],
//!   [`get_rq`]).
//! - Swing-twist splits: a rotation `r = swing * twist`, where the twist rotates about one
//!   coordinate axis and the swing ("saddle") rotates about an axis perpendicular to it
//!   ([`get_twist_x`], [`get_saddle_yz`], ...).
//!
//! All angles are in radians.

use crate::{
    traits::{is_negligible2, Real},
    vec2, Quat, Vec2, Vec3, Vector,
};

/// The order in which three single-axis rotations are applied.
///
/// Orders are named by the sequence in which the rotations act on a vector: [`EulerOrder::Xyz`]
/// rotates about X first and Z last, so the combined quaternion is `qz * qy * qx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    Xyz,
    Yzx,
    Zxy,
    Xzy,
    Yxz,
    Zyx,
}

impl EulerOrder {
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Yzx,
        Self::Zxy,
        Self::Xzy,
        Self::Yxz,
        Self::Zyx,
    ];

    /// Returns the axis indices (0 = X, 1 = Y, 2 = Z) in application order.
    pub fn axes(self) -> [usize; 3] {
        match self {
            Self::Xyz => [0, 1, 2],
            Self::Yzx => [1, 2, 0],
            Self::Zxy => [2, 0, 1],
            Self::Xzy => [0, 2, 1],
            Self::Yxz => [1, 0, 2],
            Self::Zyx => [2, 1, 0],
        }
    }

    /// Cyclic orders have a right-handed axis sequence.
    fn is_cyclic(self) -> bool {
        matches!(self, Self::Xyz | Self::Yzx | Self::Zxy)
    }
}

/// Rotation by `angle` about the coordinate axis with index `axis`.
fn axis_rotation<T: Real>(axis: usize, angle: T) -> Quat<T> {
    let (sin, cos) = (angle * T::from_f64(0.5)).sin_cos();
    Quat::from_vec(Vector::from_fn(|i| match i {
        3 => cos,
        i if i == axis => sin,
        _ => T::ZERO,
    }))
}

/// Creates a rotation by `angle` about `axis`, which must be of unit length.
///
/// # Examples
///
/// ```
/// # use deform_linalg::*;
/// let q = axis_angle(Vec3::Z, std::f64::consts::PI);
/// approx::assert_abs_diff_eq!(q, quat(0.0, 0.0, 1.0, 0.0), epsilon = 1e-12);
/// ```
pub fn axis_angle<T: Real>(axis: Vec3<T>, angle: T) -> Quat<T> {
    let (sin, cos) = (angle * T::from_f64(0.5)).sin_cos();
    Quat::from_vector_scalar(axis * sin, cos)
}

pub fn euler_x<T: Real>(angle: T) -> Quat<T> {
    axis_rotation(0, angle)
}

pub fn euler_y<T: Real>(angle: T) -> Quat<T> {
    axis_rotation(1, angle)
}

pub fn euler_z<T: Real>(angle: T) -> Quat<T> {
    axis_rotation(2, angle)
}

/// Combines three rotations about the coordinate axes, applied in `order`.
///
/// `angles.x` is always the angle about X, no matter where X falls in the order.
pub fn euler<T: Real>(order: EulerOrder, angles: Vec3<T>) -> Quat<T> {
    let [first, second, third] = order.axes();
    axis_rotation(third, angles[third])
        * axis_rotation(second, angles[second])
        * axis_rotation(first, angles[first])
}

/// `euler_z(angles.z) * euler_y(angles.y) * euler_x(angles.x)`
pub fn euler_xyz<T: Real>(angles: Vec3<T>) -> Quat<T> {
    euler(EulerOrder::Xyz, angles)
}

/// `euler_x(angles.x) * euler_z(angles.z) * euler_y(angles.y)`
pub fn euler_yzx<T: Real>(angles: Vec3<T>) -> Quat<T> {
    euler(EulerOrder::Yzx, angles)
}

/// `euler_y(angles.y) * euler_x(angles.x) * euler_z(angles.z)`
pub fn euler_zxy<T: Real>(angles: Vec3<T>) -> Quat<T> {
    euler(EulerOrder::Zxy, angles)
}

/// `euler_y(angles.y) * euler_z(angles.z) * euler_x(angles.x)`
pub fn euler_xzy<T: Real>(angles: Vec3<T>) -> Quat<T> {
    euler(EulerOrder::Xzy, angles)
}

/// `euler_z(angles.z) * euler_x(angles.x) * euler_y(angles.y)`
pub fn euler_yxz<T: Real>(angles: Vec3<T>) -> Quat<T> {
    euler(EulerOrder::Yxz, angles)
}

/// `euler_x(angles.x) * euler_y(angles.y) * euler_z(angles.z)`
pub fn euler_zyx<T: Real>(angles: Vec3<T>) -> Quat<T> {
    euler(EulerOrder::Zyx, angles)
}

/// Returns the rotation angle of a unit quaternion, in `[0, 2π]`.
pub fn angle<T: Real>(q: Quat<T>) -> T {
    let two = T::from_f64(2.0);
    two * q.vector_part().length().atan2(q.w)
}

/// Returns the signed rotation angle of `q` about the unit vector `axis`.
pub fn angle_about<T: Real>(axis: Vec3<T>, q: Quat<T>) -> T {
    let two = T::from_f64(2.0);
    two * axis.dot(q.vector_part()).atan2(q.w)
}

/// Angle of a rotation that is known to be about X only.
pub fn get_euler_x<T: Real>(q: Quat<T>) -> T {
    T::from_f64(2.0) * q.x.atan2(q.w)
}

/// Angle of a rotation that is known to be about Y only.
pub fn get_euler_y<T: Real>(q: Quat<T>) -> T {
    T::from_f64(2.0) * q.y.atan2(q.w)
}

/// Angle of a rotation that is known to be about Z only.
pub fn get_euler_z<T: Real>(q: Quat<T>) -> T {
    T::from_f64(2.0) * q.z.atan2(q.w)
}

/// Recovers the angle shared by two vectors that are both scaled copies of `(sin(a/2), cos(a/2))`.
///
/// One of them may be degenerate, or they may point in opposite directions; they are combined with
/// a consistent sign before taking the angle.
fn euler_from_vectors<T: Real>(ax: T, ay: T, bx: T, by: T) -> T {
    let (x, y) = if ax * bx + ay * by > T::ZERO {
        (ax + bx, ay + by)
    } else {
        (ax - bx, ay - by)
    };
    T::from_f64(2.0) * x.atan2(y)
}

/// Decomposes a unit quaternion into Euler angles for the given order.
///
/// This is the inverse of [`euler`]: the outermost rotation is peeled off first, and the remaining
/// two-axis rotation is split into its two angles. The result is indexed by axis like the input of
/// [`euler`].
///
/// # Examples
///
/// ```
/// # use deform_linalg::*;
/// let angles = vec3(0.2, 0.6, 0.44);
/// let q = euler(EulerOrder::Zxy, angles);
/// approx::assert_relative_eq!(get_euler(EulerOrder::Zxy, q), angles, epsilon = 1e-12);
/// ```
pub fn get_euler<T: Real>(order: EulerOrder, q: Quat<T>) -> Vec3<T> {
    let [i, j, k] = order.axes();
    let two = T::from_f64(2.0);
    // Sign of `e_j × e_i` relative to `e_k`.
    let handed = if order.is_cyclic() { -T::ONE } else { T::ONE };

    let c = q.into_vec();
    let w = c[3];
    let outer = (two * (w * c[k] - handed * c[i] * c[j]))
        .atan2(w * w - c[k] * c[k] + c[i] * c[i] - c[j] * c[j]);

    // Undo the outer rotation, leaving `q_j * q_i`.
    let p = (axis_rotation(k, -outer) * q).into_vec();
    let cross = handed * p[k];
    let first = euler_from_vectors(p[i], p[3], cross, p[j]);
    let second = euler_from_vectors(p[j], p[3], cross, p[i]);

    let mut angles = Vec3::ZERO;
    angles[i] = first;
    angles[j] = second;
    angles[k] = outer;
    angles
}

pub fn get_euler_xyz<T: Real>(q: Quat<T>) -> Vec3<T> {
    get_euler(EulerOrder::Xyz, q)
}

pub fn get_euler_yzx<T: Real>(q: Quat<T>) -> Vec3<T> {
    get_euler(EulerOrder::Yzx, q)
}

pub fn get_euler_zxy<T: Real>(q: Quat<T>) -> Vec3<T> {
    get_euler(EulerOrder::Zxy, q)
}

pub fn get_euler_xzy<T: Real>(q: Quat<T>) -> Vec3<T> {
    get_euler(EulerOrder::Xzy, q)
}

pub fn get_euler_yxz<T: Real>(q: Quat<T>) -> Vec3<T> {
    get_euler(EulerOrder::Yxz, q)
}

pub fn get_euler_zyx<T: Real>(q: Quat<T>) -> Vec3<T> {
    get_euler(EulerOrder::Zyx, q)
}

/// Converts a rotation vector (axis scaled by angle) to a unit quaternion.
pub fn rq<T: Real>(v: Vec3<T>) -> Quat<T> {
    let half = T::from_f64(0.5);
    let theta2 = v.length2();
    let theta = theta2.sqrt();
    let (sin, cos) = (theta * half).sin_cos();
    let scale = if is_negligible2(theta2) {
        half * cos
    } else {
        sin / theta
    };
    Quat::from_vector_scalar(v * scale, cos)
}

/// Converts a unit quaternion to a rotation vector. Inverse of [`rq`].
pub fn get_rq<T: Real>(q: Quat<T>) -> Vec3<T> {
    q.arg()
}

/// Indices of the two axes spanning the plane perpendicular to `axis`, in right-handed order.
fn plane_of(axis: usize) -> (usize, usize) {
    ((axis + 1) % 3, (axis + 2) % 3)
}

/// Swing rotation about an axis in the plane perpendicular to `twist_axis`.
fn saddle_about<T: Real>(twist_axis: usize, swing: Vec2<T>) -> Quat<T> {
    let (b, c) = plane_of(twist_axis);
    let mut v = Vec3::ZERO;
    v[b] = swing.x;
    v[c] = swing.y;
    rq(v)
}

/// Rotation about an axis in the YZ plane, given as the rotation vector `(0, u.x, u.y)`.
pub fn saddle_yz<T: Real>(u: Vec2<T>) -> Quat<T> {
    saddle_about(0, u)
}

/// Rotation about an axis in the ZX plane, given as the rotation vector `(u.y, 0, u.x)`.
pub fn saddle_zx<T: Real>(u: Vec2<T>) -> Quat<T> {
    saddle_about(1, u)
}

/// Rotation about an axis in the XY plane, given as the rotation vector `(u.x, u.y, 0)`.
pub fn saddle_xy<T: Real>(u: Vec2<T>) -> Quat<T> {
    saddle_about(2, u)
}

/// Rotation about an axis in the plane spanned by `s` and `t`, given as the rotation vector
/// `s * u.x + t * u.y`.
pub fn saddle<T: Real>(s: Vec3<T>, t: Vec3<T>, u: Vec2<T>) -> Quat<T> {
    rq(s * u.x + t * u.y)
}

/// Normalized twist part `(sin, cos)` of `q` about `axis`, and the length it was normalized by.
fn twist_parts<T: Real>(axis: usize, q: Quat<T>) -> (T, T, T) {
    let c = q.into_vec();
    let (qa, w) = (c[axis], c[3]);
    let aw2 = w * w + qa * qa;
    let aw = aw2.sqrt();
    if is_negligible2(aw2) {
        // A half turn about an axis in the plane: any twist works, pick none.
        (aw, T::ZERO, T::ONE)
    } else {
        (aw, qa / aw, w / aw)
    }
}

fn get_twist<T: Real>(axis: usize, q: Quat<T>) -> T {
    let (_, sin, cos) = twist_parts(axis, q);
    T::from_f64(2.0) * sin.atan2(cos)
}

fn get_saddle<T: Real>(axis: usize, q: Quat<T>) -> Vec2<T> {
    let (aw, sin, cos) = twist_parts(axis, q);
    let (b, c) = plane_of(axis);
    let v = q.into_vec();
    let s = cos * cos + sin * sin;
    let mut swing = Vector::ZERO;
    swing[b] = (v[b] * cos - v[c] * sin) / s;
    swing[c] = (v[c] * cos + v[b] * sin) / s;
    swing[3] = aw;
    let r = get_rq(Quat::from_vec(swing));
    vec2(r[b], r[c])
}

/// Twist angle about X of `q = swing * twist`, where the swing has no X component.
pub fn get_twist_x<T: Real>(q: Quat<T>) -> T {
    get_twist(0, q)
}

/// Twist angle about Y of `q = swing * twist`, where the swing has no Y component.
pub fn get_twist_y<T: Real>(q: Quat<T>) -> T {
    get_twist(1, q)
}

/// Twist angle about Z of `q = swing * twist`, where the swing has no Z component.
pub fn get_twist_z<T: Real>(q: Quat<T>) -> T {
    get_twist(2, q)
}

/// Swing part of `q = saddle_yz(swing) * euler_x(twist)`.
///
/// # Examples
///
/// ```
/// # use deform_linalg::*;
/// let q = saddle_yz(vec2(0.3, -0.5)) * euler_x(0.8);
/// approx::assert_relative_eq!(get_saddle_yz(q), vec2(0.3, -0.5), epsilon = 1e-12);
/// approx::assert_relative_eq!(get_twist_x(q), 0.8, epsilon = 1e-12);
/// ```
pub fn get_saddle_yz<T: Real>(q: Quat<T>) -> Vec2<T> {
    get_saddle(0, q)
}

/// Swing part of `q = saddle_zx(swing) * euler_y(twist)`.
pub fn get_saddle_zx<T: Real>(q: Quat<T>) -> Vec2<T> {
    get_saddle(1, q)
}

/// Swing part of `q = saddle_xy(swing) * euler_z(twist)`.
pub fn get_saddle_xy<T: Real>(q: Quat<T>) -> Vec2<T> {
    get_saddle(2, q)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::*;

    #[test]
    fn single_axis() {
        let s = 0.5f64.sqrt();
        assert_abs_diff_eq!(euler_x(FRAC_PI_2), quat(s, 0.0, 0.0, s), epsilon = 1e-12);
        assert_abs_diff_eq!(euler_y(FRAC_PI_2), quat(0.0, s, 0.0, s), epsilon = 1e-12);
        assert_abs_diff_eq!(euler_z(FRAC_PI_2), quat(0.0, 0.0, s, s), epsilon = 1e-12);
        assert_relative_eq!(euler_y(0.7), axis_angle(Vec3::Y, 0.7), epsilon = 1e-12);

        assert_relative_eq!(get_euler_x(euler_x(1.3)), 1.3, epsilon = 1e-12);
        assert_relative_eq!(get_euler_y(euler_y(-0.4)), -0.4, epsilon = 1e-12);
        assert_relative_eq!(get_euler_z(euler_z(3.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn euler_order_composition() {
        let a = vec3(0.2, 0.6, 0.44);
        let (x, y, z) = (euler_x(a.x), euler_y(a.y), euler_z(a.z));
        assert_relative_eq!(euler_xyz(a), z * y * x, epsilon = 1e-12);
        assert_relative_eq!(euler_yzx(a), x * z * y, epsilon = 1e-12);
        assert_relative_eq!(euler_zxy(a), y * x * z, epsilon = 1e-12);
        assert_relative_eq!(euler_xzy(a), y * z * x, epsilon = 1e-12);
        assert_relative_eq!(euler_yxz(a), z * x * y, epsilon = 1e-12);
        assert_relative_eq!(euler_zyx(a), x * y * z, epsilon = 1e-12);
    }

    #[test]
    fn euler_round_trip_all_orders() {
        let angles = vec3(0.2, 0.6, 0.44);
        for order in EulerOrder::ALL {
            let q = euler(order, angles);
            assert_relative_eq!(get_euler(order, q), angles, epsilon = 1e-12);
        }
        assert_relative_eq!(get_euler_xyz(euler_xyz(angles)), angles, epsilon = 1e-12);
        assert_relative_eq!(get_euler_yzx(euler_yzx(angles)), angles, epsilon = 1e-12);
        assert_relative_eq!(get_euler_zxy(euler_zxy(angles)), angles, epsilon = 1e-12);
        assert_relative_eq!(get_euler_xzy(euler_xzy(angles)), angles, epsilon = 1e-12);
        assert_relative_eq!(get_euler_yxz(euler_yxz(angles)), angles, epsilon = 1e-12);
        assert_relative_eq!(get_euler_zyx(euler_zyx(angles)), angles, epsilon = 1e-12);
    }

    #[test]
    fn euler_of_quaternion_round_trips() {
        for q in [
            quat(-0.5f32, -0.5, -0.5, 0.5),
            quat(-0.68404281f32, -0.069696546, 0.014538541, 0.72595894),
        ] {
            let angles = get_euler_xyz(q);
            assert_abs_diff_eq!(euler_xyz(angles), q, epsilon = 1e-5);
        }
    }

    #[test]
    fn angles() {
        let q = axis_angle(vec3(0.0, 0.6, -0.8), 2.5);
        assert_relative_eq!(angle(q), 2.5, epsilon = 1e-12);
        assert_relative_eq!(angle_about(vec3(0.0, 0.6, -0.8), q), 2.5, epsilon = 1e-12);
        assert_relative_eq!(angle_about(vec3(0.0, -0.6, 0.8), q), -2.5, epsilon = 1e-12);
        assert_eq!(angle(Quat::<f64>::IDENTITY), 0.0);
    }

    #[test]
    fn rotation_vectors() {
        let v = vec3(0.3, -1.2, 0.4);
        let q = rq(v);
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(q, axis_angle(v.normalize(), v.length()), epsilon = 1e-12);
        assert_relative_eq!(get_rq(q), v, epsilon = 1e-12);

        assert_eq!(rq(Vec3::<f64>::ZERO), Quat::IDENTITY);
        let tiny = vec3(1e-8, 0.0, -2e-8);
        assert_relative_eq!(get_rq(rq(tiny)), tiny, epsilon = 1e-20);
    }

    #[test]
    fn saddles() {
        let u = vec2(0.25, -0.7);
        assert_relative_eq!(saddle_yz(u), rq(vec3(0.0, u.x, u.y)), epsilon = 1e-12);
        assert_relative_eq!(saddle_zx(u), rq(vec3(u.y, 0.0, u.x)), epsilon = 1e-12);
        assert_relative_eq!(saddle_xy(u), rq(vec3(u.x, u.y, 0.0)), epsilon = 1e-12);
        assert_relative_eq!(
            saddle(Vec3::Y, Vec3::Z, u),
            saddle_yz(u),
            epsilon = 1e-12
        );
    }

    #[test]
    fn swing_twist_recombines() {
        let q = euler_xyz(vec3(0.3, -0.9, 1.4));

        let (swing, twist) = (get_saddle_yz(q), get_twist_x(q));
        assert_relative_eq!(saddle_yz(swing) * euler_x(twist), q, epsilon = 1e-12);

        let (swing, twist) = (get_saddle_zx(q), get_twist_y(q));
        assert_relative_eq!(saddle_zx(swing) * euler_y(twist), q, epsilon = 1e-12);

        let (swing, twist) = (get_saddle_xy(q), get_twist_z(q));
        assert_relative_eq!(saddle_xy(swing) * euler_z(twist), q, epsilon = 1e-12);
    }

    #[test]
    fn twist_of_pure_swing_is_zero() {
        let q = saddle_xy(vec2(0.4, 0.1));
        assert_abs_diff_eq!(get_twist_z(q), 0.0, epsilon = 1e-12);

        // Half turn about X leaves no room for a twist about Y.
        let q = euler_x(PI);
        assert_eq!(get_twist_y(q), 0.0);
        assert_relative_eq!(get_saddle_zx(q), vec2(0.0, PI), epsilon = 1e-12);
    }
}
