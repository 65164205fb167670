//! Construction of transformation matrices, and extraction of their parts.
//!
//! All matrices act on column vectors (`p' = m * p`), and a transform is composed as
//! `translate * rotate * scale`: the scale (or shear/stretch) is applied first, the translation
//! last. Homogeneous matrices keep the translation in their last column.

use crate::{
    traits::Real, vec3, Mat2, Mat2x3, Mat3, Mat3x2, Mat3x4, Mat4, Matrix, Quat, Vec2, Vec3,
    Vector,
};

/// Columns of the rotation matrix of a unit quaternion.
fn rotation_columns<T: Real>(q: Quat<T>) -> [Vec3<T>; 3] {
    let [x, y, z, w] = q.into_array();
    let two = T::from_f64(2.0);
    let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
    let (xy, yz, zx) = (x * y, y * z, z * x);
    let (wx, wy, wz) = (w * x, w * y, w * z);
    [
        vec3(ww + xx - yy - zz, two * (xy + wz), two * (zx - wy)),
        vec3(two * (xy - wz), ww - xx + yy - zz, two * (yz + wx)),
        vec3(two * (zx + wy), two * (yz - wx), ww - xx - yy + zz),
    ]
}

/// Embeds a linear map and a translation into a homogeneous 4x4 matrix.
fn homogeneous<T: Real>(translate: Vec3<T>, [x, y, z]: [Vec3<T>; 3]) -> Mat4<T> {
    Matrix::from_columns([
        x.extend(T::ZERO),
        y.extend(T::ZERO),
        z.extend(T::ZERO),
        translate.extend(T::ONE),
    ])
}

/// Embeds a 2D linear map and a translation into a homogeneous 3x3 matrix.
fn homogeneous_2d<T: Real>(translate: Vec2<T>, [x, y]: [Vec2<T>; 2]) -> Mat3<T> {
    Matrix::from_columns([
        x.extend(T::ZERO),
        y.extend(T::ZERO),
        translate.extend(T::ONE),
    ])
}

/// Rotation matrix of a unit quaternion.
///
/// # Examples
///
/// ```
/// # use deform_linalg::*;
/// let m = rotate(euler_z(std::f64::consts::FRAC_PI_2));
/// approx::assert_abs_diff_eq!(m * Vec3::X, Vec3::Y, epsilon = 1e-12);
/// ```
pub fn rotate<T: Real>(q: Quat<T>) -> Mat3<T> {
    Matrix::from_columns(rotation_columns(q))
}

/// Uniform scale matrix.
pub fn scale<T: Real>(s: T) -> Mat3<T> {
    Matrix::from_diagonal(Vector::splat(s))
}

/// Non-uniform scale matrix.
pub fn scale3<T: Real>(s: Vec3<T>) -> Mat3<T> {
    Matrix::from_diagonal(s)
}

pub fn translate<T: Real>(t: Vec3<T>) -> Mat4<T> {
    homogeneous(t, Mat3::identity().into_columns())
}

pub fn translate_rotate<T: Real>(t: Vec3<T>, q: Quat<T>) -> Mat4<T> {
    homogeneous(t, rotation_columns(q))
}

pub fn translate_scale<T: Real>(t: Vec3<T>, s: Vec3<T>) -> Mat4<T> {
    homogeneous(t, scale3(s).into_columns())
}

/// Scales by `s`, then rotates by `q`, then translates by `t`.
pub fn translate_rotate_scale<T: Real>(t: Vec3<T>, q: Quat<T>, s: Vec3<T>) -> Mat4<T> {
    let [x, y, z] = rotation_columns(q);
    homogeneous(t, [x * s.x, y * s.y, z * s.z])
}

pub fn translate_rotate_uniform_scale<T: Real>(t: Vec3<T>, q: Quat<T>, s: T) -> Mat4<T> {
    translate_rotate_scale(t, q, Vector::splat(s))
}

/// Applies a symmetric stretch, then rotates by `q`, then translates by `t`.
///
/// The stretch is packed into a 3x2 matrix whose first column holds the diagonal `(xx, yy, zz)`
/// and whose second column holds the off-diagonal elements `(xy, xz, yz)`.
pub fn translate_rotate_stretch<T: Real>(t: Vec3<T>, q: Quat<T>, stretch: Mat3x2<T>) -> Mat4<T> {
    let [diag, off] = stretch.into_columns();
    #[rustfmt::skip]
    let symmetric = Mat3::from_rows([
        [diag.x, off.x,  off.y],
        [off.x,  diag.y, off.z],
        [off.y,  off.z,  diag.z],
    ]);
    homogeneous(t, (rotate(q) * symmetric).into_columns())
}

/// Shears, then translates by `t`.
///
/// `shear.x` shears X by Y, `shear.y` shears X by Z, and `shear.z` shears Y by Z.
pub fn translate_shear<T: Real>(t: Vec3<T>, shear: Vec3<T>) -> Mat4<T> {
    translate_shear_scale(t, shear, Vector::splat(T::ONE))
}

/// Scales, then shears, then translates by `t`.
pub fn translate_shear_scale<T: Real>(t: Vec3<T>, shear: Vec3<T>, s: Vec3<T>) -> Mat4<T> {
    let (o, i) = (T::ZERO, T::ONE);
    homogeneous(
        t,
        [
            vec3(i, o, o) * s.x,
            vec3(shear.x, i, o) * s.y,
            vec3(shear.y, shear.z, i) * s.z,
        ],
    )
}

/// Applies the linear map `m`, then translates by `t`.
pub fn translate_matrix3<T: Real>(t: Vec3<T>, m: Mat3<T>) -> Mat4<T> {
    homogeneous(t, m.into_columns())
}

/// Creates a view matrix for a camera at `position` looking at `target`, like `gluLookAt`.
///
/// This is the inverse of the camera's world transform: the camera looks down its local -Z axis
/// with `up` roughly along its local +Y axis.
pub fn look_at<T: Real>(position: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Mat4<T> {
    let z = (position - target).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    let o = T::ZERO;
    Matrix::from_rows([
        x.extend(-x.dot(position)),
        y.extend(-y.dot(position)),
        z.extend(-z.dot(position)),
        [o, o, o, T::ONE].into(),
    ])
}

/// Orthographic projection with the film size factored out.
///
/// `film_scale` is the orthographic width per film size and `film_offset` the film offset per film
/// size. The near plane is at `z = -znear`, the far plane at `z = -zfar`.
pub fn orthographic_film<T: Real>(
    film_scale: Vec2<T>,
    film_offset: Vec2<T>,
    znear: T,
    zfar: T,
) -> Mat4<T> {
    let inv_nf = T::ONE / (znear - zfar);
    let (o, i, two) = (T::ZERO, T::ONE, T::from_f64(2.0));
    #[rustfmt::skip]
    let m = Matrix::from_rows([
        [film_scale.x, o,            o,                     film_offset.x],
        [o,            film_scale.y, o,                     film_offset.y],
        [o,            o,            two * inv_nf,          (zfar + znear) * inv_nf],
        [o,            o,            o,                     i],
    ]);
    m
}

/// Perspective projection with the film size factored out.
///
/// `focal` is the focal length per film size and `film_offset` the film offset per film size. The
/// near plane is at `z = -znear`, the far plane at `z = -zfar`.
pub fn perspective_film<T: Real>(
    focal: Vec2<T>,
    film_offset: Vec2<T>,
    znear: T,
    zfar: T,
) -> Mat4<T> {
    let inv_nf = T::ONE / (znear - zfar);
    let (o, i, two) = (T::ZERO, T::ONE, T::from_f64(2.0));
    #[rustfmt::skip]
    let m = Matrix::from_rows([
        [focal.x, o,       film_offset.x,           o],
        [o,       focal.y, film_offset.y,           o],
        [o,       o,       (zfar + znear) * inv_nf, two * zfar * znear * inv_nf],
        [o,       o,       -i,                      o],
    ]);
    m
}

/// Orthographic projection like `glOrtho`.
pub fn orthographic<T: Real>(left: T, right: T, bottom: T, top: T, znear: T, zfar: T) -> Mat4<T> {
    let inv_rl = T::ONE / (right - left);
    let inv_tb = T::ONE / (top - bottom);
    let inv_nf = T::ONE / (znear - zfar);
    let (o, i, two) = (T::ZERO, T::ONE, T::from_f64(2.0));
    #[rustfmt::skip]
    let m = Matrix::from_rows([
        [two * inv_rl, o,            o,            -(right + left) * inv_rl],
        [o,            two * inv_tb, o,            -(top + bottom) * inv_tb],
        [o,            o,            two * inv_nf, (zfar + znear) * inv_nf],
        [o,            o,            o,            i],
    ]);
    m
}

/// Perspective projection like `glFrustum`. The extents are given on the near plane.
pub fn frustum<T: Real>(left: T, right: T, bottom: T, top: T, znear: T, zfar: T) -> Mat4<T> {
    let inv_rl = T::ONE / (right - left);
    let inv_tb = T::ONE / (top - bottom);
    let inv_nf = T::ONE / (znear - zfar);
    let (o, i, two) = (T::ZERO, T::ONE, T::from_f64(2.0));
    #[rustfmt::skip]
    let m = Matrix::from_rows([
        [two * znear * inv_rl, o,                    (right + left) * inv_rl, o],
        [o,                    two * znear * inv_tb, (top + bottom) * inv_tb, o],
        [o,                    o,                    (zfar + znear) * inv_nf, two * zfar * znear * inv_nf],
        [o,                    o,                    -i,                      o],
    ]);
    m
}

/// `1 / tan(fov / 2)` for a field of view in degrees.
fn focal_from_fov<T: Real>(fov_degrees: T) -> T {
    let half_degree = T::from_f64(std::f64::consts::PI / 360.0);
    T::ONE / (fov_degrees * half_degree).tan()
}

/// Symmetric perspective projection from the horizontal field of view in degrees.
///
/// `aspect` is width over height.
pub fn perspective_x<T: Real>(fovx: T, aspect: T, znear: T, zfar: T) -> Mat4<T> {
    let f = focal_from_fov(fovx);
    perspective_film(Vector::from([f, f * aspect]), Vector::ZERO, znear, zfar)
}

/// Symmetric perspective projection from the vertical field of view in degrees, like
/// `gluPerspective`.
pub fn perspective_y<T: Real>(fovy: T, aspect: T, znear: T, zfar: T) -> Mat4<T> {
    let f = focal_from_fov(fovy);
    perspective_film(Vector::from([f / aspect, f]), Vector::ZERO, znear, zfar)
}

pub fn translate_2d<T: Real>(t: Vec2<T>) -> Mat3<T> {
    homogeneous_2d(t, Mat2::identity().into_columns())
}

pub fn translate_rotate_2d<T: Real>(t: Vec2<T>, angle: T) -> Mat3<T> {
    homogeneous_2d(t, rotate_2d(angle).into_columns())
}

pub fn translate_scale_2d<T: Real>(t: Vec2<T>, s: Vec2<T>) -> Mat3<T> {
    homogeneous_2d(t, Mat2::from_diagonal(s).into_columns())
}

/// Scales by `s`, then rotates counterclockwise by `angle`, then translates by `t`.
///
/// # Examples
///
/// ```
/// # use deform_linalg::*;
/// let m = translate_rotate_scale_2d(Vec2::ZERO, std::f64::consts::FRAC_PI_2, vec2(2.0, 2.0));
/// approx::assert_abs_diff_eq!(m * vec3(1.0, 0.0, 1.0), vec3(0.0, 2.0, 1.0), epsilon = 1e-12);
/// ```
pub fn translate_rotate_scale_2d<T: Real>(t: Vec2<T>, angle: T, s: Vec2<T>) -> Mat3<T> {
    homogeneous_2d(t, rotate_scale_2d(angle, s).into_columns())
}

/// Scales by `s`, then shears X by Y, then translates by `t`.
pub fn translate_shear_scale_2d<T: Real>(t: Vec2<T>, shear: T, s: Vec2<T>) -> Mat3<T> {
    let [x, y] = [Vector::from([s.x, T::ZERO]), Vector::from([shear * s.y, s.y])];
    homogeneous_2d(t, [x, y])
}

/// Applies the 2D linear map `m`, then translates by `t`.
pub fn translate_matrix2<T: Real>(t: Vec2<T>, m: Mat2<T>) -> Mat3<T> {
    homogeneous_2d(t, m.into_columns())
}

/// Counterclockwise rotation by `angle`.
pub fn rotate_2d<T: Real>(angle: T) -> Mat2<T> {
    let (sin, cos) = angle.sin_cos();
    Matrix::from_rows([[cos, -sin], [sin, cos]])
}

/// Scales by `s`, then rotates counterclockwise by `angle`.
pub fn rotate_scale_2d<T: Real>(angle: T, s: Vec2<T>) -> Mat2<T> {
    rotate_2d(angle) * Mat2::from_diagonal(s)
}

/// Translation part of a homogeneous transform.
pub fn position<T: Real>(m: Mat4<T>) -> Vec3<T> {
    m.column(3).truncate()
}

/// Upper-left 3x3 block of a homogeneous transform.
pub fn linear<T: Real>(m: Mat4<T>) -> Mat3<T> {
    Matrix::from_fn(|row, col| m[(row, col)])
}

/// Top three rows of a homogeneous transform.
pub fn affine<T: Real>(m: Mat4<T>) -> Mat3x4<T> {
    Matrix::from_fn(|row, col| m[(row, col)])
}

/// Top two rows of a 2D homogeneous transform.
pub fn linear_2d<T: Real>(m: Mat3<T>) -> Mat2x3<T> {
    Matrix::from_fn(|row, col| m[(row, col)])
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Transforms a point, ignoring the projective row.
    pub fn transform_position(&self, p: Vec3<T>) -> Vec3<T> {
        affine(*self).transform_position(p)
    }

    /// Transforms a direction, ignoring the translation and the projective row.
    pub fn transform_direction(&self, d: Vec3<T>) -> Vec3<T> {
        affine(*self).transform_direction(d)
    }
}

impl<T: Real> Matrix<T, 3, 4> {
    /// Transforms a point.
    pub fn transform_position(&self, p: Vec3<T>) -> Vec3<T> {
        *self * p.extend(T::ONE)
    }

    /// Transforms a direction, ignoring the translation.
    pub fn transform_direction(&self, d: Vec3<T>) -> Vec3<T> {
        *self * d.extend(T::ZERO)
    }
}

/// Extracts the rotation of a pure rotation matrix, using Shepperd's method.
///
/// The returned quaternion may be either of the two equivalent signs.
pub fn rotation<T: Real>(m: Mat3<T>) -> Quat<T> {
    let quarter = T::from_f64(0.25);
    let half = T::from_f64(0.5);
    let two = T::from_f64(2.0);
    // `a(col, row)`
    let a = |col: usize, row: usize| m[(row, col)];
    let [xx, yy, zz] = m.into_diagonal().into_array();
    let trace = xx + yy + zz;

    if trace > T::ZERO {
        let s = half / (trace + T::ONE).sqrt();
        Quat::from_components(
            (a(1, 2) - a(2, 1)) * s,
            (a(2, 0) - a(0, 2)) * s,
            (a(0, 1) - a(1, 0)) * s,
            quarter / s,
        )
    } else if xx > yy && xx > zz {
        let s = two * (T::ONE + xx - yy - zz).sqrt();
        Quat::from_components(
            quarter * s,
            (a(1, 0) + a(0, 1)) / s,
            (a(2, 0) + a(0, 2)) / s,
            (a(1, 2) - a(2, 1)) / s,
        )
    } else if yy > zz {
        let s = two * (T::ONE + yy - xx - zz).sqrt();
        Quat::from_components(
            (a(1, 0) + a(0, 1)) / s,
            quarter * s,
            (a(2, 1) + a(1, 2)) / s,
            (a(2, 0) - a(0, 2)) / s,
        )
    } else {
        let s = two * (T::ONE + zz - xx - yy).sqrt();
        Quat::from_components(
            (a(2, 0) + a(0, 2)) / s,
            (a(2, 1) + a(1, 2)) / s,
            quarter * s,
            (a(0, 1) - a(1, 0)) / s,
        )
    }
}

impl<T: Real> Quat<T> {
    /// Extracts the rotation of a pure rotation matrix. See [`rotation`].
    pub fn from_rotation_matrix(m: Mat3<T>) -> Self {
        rotation(m)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::*;

    /// Checks that `a` equals `b` up to the quaternion double cover.
    fn assert_same_rotation(a: Quat<f64>, b: Quat<f64>) {
        let b = if a.dot(b) < 0.0 { -b } else { b };
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn rotation_matrix_is_orthonormal() {
        let m = rotate(euler_xyz(vec3(0.3, -1.1, 2.0)));
        assert_relative_eq!(m.transpose() * m, Mat3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_extraction_all_branches() {
        for angles in [
            vec3(0.2, 0.4, 0.6),
            vec3(-0.2, 0.4, 0.6),
            vec3(0.2, 0.4, -0.6),
            vec3(2.2, 0.4, 4.6),
            vec3(-2.2, 0.4, 4.6),
            vec3(2.2, 0.4, -4.6),
            // Half turns hit the `xx`, `yy` and `zz` branches.
            vec3(3.1, 0.0, 0.0),
            vec3(0.0, 3.1, 0.0),
            vec3(0.0, 0.0, 3.1),
        ] {
            let q = euler_xyz(angles);
            assert_same_rotation(rotation(rotate(q)), q);
            assert_same_rotation(Quat::from_rotation_matrix(rotate(q)), q);
        }
    }

    #[test]
    fn trs_order() {
        let t = vec3(1.0, 2.0, 3.0);
        let q = euler_zxy(vec3(0.5, -0.3, 1.2));
        let s = vec3(2.0, 0.5, -1.0);
        let m = translate_rotate_scale(t, q, s);
        assert_relative_eq!(
            m,
            translate(t)
                * translate_matrix3(Vec3::ZERO, rotate(q))
                * translate_scale(Vec3::ZERO, s),
            epsilon = 1e-12
        );

        let p = vec3(0.3, 0.7, -0.2);
        assert_relative_eq!(
            m.transform_position(p),
            q.rotate_vector(p * s) + t,
            epsilon = 1e-12
        );
        assert_relative_eq!(m.transform_direction(p), q.rotate_vector(p * s), epsilon = 1e-12);
        assert_eq!(position(m), t);
        assert_eq!(affine(m).transform_position(p), m.transform_position(p));
        assert_relative_eq!(linear(m), rotate(q) * scale3(s), epsilon = 1e-12);
    }

    #[test]
    fn uniform_scale() {
        let t = vec3(-1.0, 0.0, 4.0);
        let q = euler_x(0.9);
        assert_eq!(
            translate_rotate_uniform_scale(t, q, 3.0),
            translate_rotate_scale(t, q, Vector::splat(3.0))
        );
        assert_eq!(
            translate_matrix3(t, scale(3.0)),
            translate_scale(t, Vector::splat(3.0))
        );
        assert_eq!(linear(translate_rotate(t, q)), rotate(q));
    }

    #[test]
    fn stretch_is_rotated_symmetric_matrix() {
        let t = vec3(0.0, 1.0, 0.0);
        let q = euler_y(0.4);
        // Diagonal stretch matches a plain scale.
        let stretch = Mat3x2::from_columns([vec3(2.0, 3.0, 4.0), Vec3::ZERO]);
        assert_relative_eq!(
            translate_rotate_stretch(t, q, stretch),
            translate_rotate_scale(t, q, vec3(2.0, 3.0, 4.0)),
            epsilon = 1e-12
        );

        let stretch = Mat3x2::from_columns([vec3(1.0, 2.0, 3.0), vec3(0.1, 0.2, 0.3)]);
        #[rustfmt::skip]
        let symmetric = Mat3::from_rows([
            [1.0, 0.1, 0.2],
            [0.1, 2.0, 0.3],
            [0.2, 0.3, 3.0],
        ]);
        assert_relative_eq!(
            linear(translate_rotate_stretch(t, q, stretch)),
            rotate(q) * symmetric,
            epsilon = 1e-12
        );
    }

    #[test]
    fn shear() {
        let m = translate_shear(Vec3::ZERO, vec3(0.5, 0.25, 2.0));
        assert_eq!(m.transform_position(Vec3::Y), vec3(0.5, 1.0, 0.0));
        assert_eq!(m.transform_position(Vec3::Z), vec3(0.25, 2.0, 1.0));

        let ones = vec3(1.0, 1.0, 1.0);
        let s = vec3(2.0, 3.0, 4.0);
        let m = translate_shear_scale(ones, ones, s);
        assert_eq!(m.transform_position(Vec3::Z), vec3(5.0, 5.0, 5.0));
        assert_eq!(linear(m), linear(translate_shear(Vec3::ZERO, ones)) * scale3(s));
    }

    #[test]
    fn look_at_inverts_camera_transform() {
        let position = vec3(1.0, 2.0, 5.0);
        let target = vec3(-1.0, 0.5, 0.0);
        let up = Vec3::Y;
        let view = look_at(position, target, up);

        let z = (position - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        let camera = translate_matrix3(position, Mat3::from_columns([x, y, z]));
        assert_relative_eq!(view, camera.inverse(), epsilon = 1e-12);

        // The target lies straight ahead.
        let p = view.transform_position(target);
        assert_abs_diff_eq!(p.truncate(), Vec2::ZERO, epsilon = 1e-12);
        assert!(p.z < 0.0);
    }

    #[test]
    fn projections_map_planes() {
        // Points on the near and far planes map to -1 and +1 depth after the divide.
        let project = |m: Mat4<f64>, p: Vec3<f64>| {
            let h = m * p.extend(1.0);
            h.truncate() / h.w
        };

        let m = perspective_y(90.0, 2.0, 1.0, 100.0);
        let near = project(m, vec3(0.0, 1.0, -1.0));
        assert_relative_eq!(near, vec3(0.0, 1.0, -1.0), epsilon = 1e-12);
        let far = project(m, vec3(200.0, 0.0, -100.0));
        assert_relative_eq!(far, vec3(1.0, 0.0, 1.0), epsilon = 1e-12);

        let mx = perspective_x(90.0, 2.0, 1.0, 100.0);
        assert_relative_eq!(mx[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(mx[(1, 1)], 2.0, epsilon = 1e-12);

        let m = frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0);
        let corner = project(m, vec3(1.0, -1.0, -1.0));
        assert_relative_eq!(corner, vec3(1.0, -1.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(
            m,
            perspective_film(Vector::splat(1.0), Vec2::ZERO, 1.0, 100.0),
            epsilon = 1e-12
        );

        let m = orthographic(-2.0, 2.0, -1.0, 1.0, 1.0, 11.0);
        let near = project(m, vec3(2.0, -1.0, -1.0));
        assert_relative_eq!(near, vec3(1.0, -1.0, -1.0), epsilon = 1e-12);
        let far = project(m, vec3(-2.0, 1.0, -11.0));
        assert_relative_eq!(far, vec3(-1.0, 1.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(
            m,
            orthographic_film(vec2(0.5, 1.0), Vec2::ZERO, 1.0, 11.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn transforms_2d() {
        let m = translate_rotate_scale_2d(Vec2::ZERO, FRAC_PI_2, vec2(2.0, 2.0));
        assert_abs_diff_eq!(m * vec3(1.0, 0.0, 1.0), vec3(0.0, 2.0, 1.0), epsilon = 1e-12);

        let t = vec2(3.0, -1.0);
        let m = translate_rotate_scale_2d(t, 0.7, vec2(2.0, 0.5));
        assert_relative_eq!(
            m,
            translate_2d(t)
                * translate_rotate_2d(Vec2::ZERO, 0.7)
                * translate_scale_2d(Vec2::ZERO, vec2(2.0, 0.5)),
            epsilon = 1e-12
        );
        assert_eq!(m, translate_matrix2(t, rotate_scale_2d(0.7, vec2(2.0, 0.5))));

        let m = translate_shear_scale_2d(t, 0.5, vec2(2.0, 4.0));
        assert_eq!(m * vec3(0.0, 1.0, 1.0), vec3(5.0, 3.0, 1.0));
        assert_eq!(linear_2d(m).column(2), t);

        assert_abs_diff_eq!(rotate_2d(FRAC_PI_2) * Vec2::X, Vec2::Y, epsilon = 1e-12);
    }
}
