use std::{array, fmt};

use crate::traits::{Number, Real, Sqrt, Zero};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// Two-element vector.
pub type Vec2<T> = Vector<T, 2>;
/// Single-precision [`Vec2`].
pub type Vec2f = Vec2<f32>;
/// Three-element vector, used for positions, directions and rotation vectors.
pub type Vec3<T> = Vector<T, 3>;
/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Four-element vector, used for homogeneous coordinates.
pub type Vec4<T> = Vector<T, 4>;
/// Single-precision [`Vec4`].
pub type Vec4f = Vec4<f32>;

/// Column vector of `N` elements of type `T`.
///
/// Build one with [`vec2`], [`vec3`] or [`vec4`], from an array via [`From`], by repeating a value
/// with [`Vector::splat`], or element by element with [`Vector::from_fn`]. [`Vector::ZERO`] and the
/// per-axis constants `X`, `Y`, `Z` and `W` cover the common fixed values.
///
/// Vectors of length 2 to 4 deref to structs with `x`, `y`, `z` and `w` fields; every vector can
/// also be indexed directly. With a [`bytemuck::Pod`] element type the vector is `Pod` as well.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Number> Vector<T, 2> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Number> Vector<T, 3> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Number> Vector<T, 4> {
    /// Unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// Unit vector along the W axis.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// assert_eq!(Vector::splat(2), vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec3(0, 2, 4));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let v = vec2(1, 2).zip(vec2(3.0, 4.0));
    /// assert_eq!(v, vec2((1, 3.0), (2, 4.0)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let [x, y, z] = vec3(1, 2, 3).into_array();
    /// assert_eq!((x, y, z), (1, 2, 3));
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it produces NaN elements.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Element-wise absolute value.
    pub fn abs(self) -> Self
    where
        T: Real,
    {
        self.map(Real::abs)
    }

    /// Sum of all elements.
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ZERO, |acc, e| acc + e)
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Copy> Vector<T, 2> {
    /// Appends `z` to this vector.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Copy> Vector<T, 3> {
    /// Drops the `z` element.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends `w` to this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).extend(1), vec4(1, 2, 3, 1));
    /// ```
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Drops the `w` element.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("vec")?;
        f.debug_list().entries(&self.0).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Creates a 2-dimensional vector.
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Creates a 3-dimensional vector.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a 4-dimensional vector.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
