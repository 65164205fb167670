use std::{array, fmt};

use crate::{
    traits::{Number, Real, Zero},
    Vector,
};

mod ops;

/// A 2x2 square matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 square matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 square matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 square matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 square matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 square matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns (a 2D affine transform).
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 3 rows and 2 columns, used to pack a symmetric stretch.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns (a 3D affine transform).
pub type Mat3x4<T> = Matrix<T, 3, 4>;

/// A matrix with `R` rows and `C` columns, stored in column-major order.
///
/// Matrices act on column vectors: `m * v` transforms `v`, and `a * b` applies `b` first. Elements
/// are indexed as `m[(row, col)]`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] build a matrix from arrays or vectors.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_diagonal`] creates a diagonal square matrix.
/// - [`Matrix::ZERO`] and [`Matrix::identity`] create the obvious matrices.
///
/// Like [`Vector`], matrices implement [`bytemuck::Pod`] when their elements do.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let m = Matrix::from_rows([[5, 6, 7], [8, 9, 4]]);
    /// assert_eq!(m, Matrix::from_columns([[5, 8], [6, 9], [7, 4]]));
    /// assert_eq!(m[(1, 2)], 4);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Builds a matrix column by column, matching the storage order.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the row and column of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let m: Mat2<usize> = Matrix::from_fn(|row, col| 2 * row + col);
    /// assert_eq!(m, Matrix::from_rows([[0, 1], [2, 3]]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Maps every element through `f`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns the transposed matrix.
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[row][col])
    }

    /// Returns the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from(self.0[col])
    }

    /// Returns the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns the columns of this matrix as vectors.
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0.map(Vector::from)
    }

    /// Returns an iterator over all elements in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().flatten()
    }

    /// Bounds-checked access to the element in `row` and `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns the maximum absolute column sum (the matrix 1-norm).
    pub fn norm_1(&self) -> T
    where
        T: Real,
    {
        self.0
            .iter()
            .map(|col| col.iter().fold(T::ZERO, |acc, e| acc + e.abs()))
            .fold(T::ZERO, Real::max)
    }

    /// Returns the maximum absolute row sum (the matrix ∞-norm).
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1.0, -2.0],
    ///     [3.0,  0.5],
    /// ]);
    /// assert_eq!(m.norm_1(), 4.0);
    /// assert_eq!(m.norm_inf(), 3.5);
    /// ```
    pub fn norm_inf(&self) -> T
    where
        T: Real,
    {
        (0..R)
            .map(|row| self.row(row).abs().sum())
            .fold(T::ZERO, Real::max)
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix, with 1 on the diagonal and 0 everywhere else.
    pub fn identity() -> Self
    where
        T: Number,
    {
        Self::from_diagonal(Vector::splat(T::ONE))
    }

    /// Creates a square matrix with `diag` on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let m = Mat3::from_diagonal([1, 2, 3]);
    /// assert_eq!(m.into_diagonal(), vec3(1, 2, 3));
    /// assert_eq!(m.trace(), 6);
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the elements on the diagonal of this matrix.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the sum of the diagonal elements.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Computes the inverse of this matrix.
    ///
    /// There is no singularity check: a singular matrix yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        let inv_det = T::ONE / self.determinant();
        Self([[d * inv_det, -c * inv_det], [-b * inv_det, a * inv_det]])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Computes the determinant as the scalar triple product of the columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// assert_eq!(Mat3::<i32>::identity().determinant(), 1);
    /// assert_eq!(Mat3::from_diagonal([2, 3, -1]).determinant(), -6);
    /// ```
    pub fn determinant(&self) -> T {
        let [x, y, z] = self.into_columns();
        x.dot(y.cross(z))
    }

    /// Returns the transpose of the adjugate, i.e. the cofactor matrix.
    ///
    /// Its columns are the pairwise cross products of this matrix's columns, so
    /// `a.adjoint_transpose().transpose() * a == a.determinant() * I`.
    pub fn adjoint_transpose(&self) -> Self {
        let [x, y, z] = self.into_columns();
        Self::from_columns([y.cross(z), z.cross(x), x.cross(y)])
    }

    /// Computes the inverse of this matrix.
    ///
    /// There is no singularity check: a singular matrix yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let inv_det = T::ONE / self.determinant();
        self.adjoint_transpose().transpose() * inv_det
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Pairwise 2x2 minors of the top two rows and the bottom two rows.
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let m = |row: usize, col: usize| self.0[col][row];
        let top = |c0: usize, c1: usize| m(0, c0) * m(1, c1) - m(1, c0) * m(0, c1);
        let bottom = |c0: usize, c1: usize| m(2, c0) * m(3, c1) - m(3, c0) * m(2, c1);
        (
            [top(0, 1), top(0, 2), top(0, 3), top(1, 2), top(1, 3), top(2, 3)],
            [
                bottom(0, 1),
                bottom(0, 2),
                bottom(0, 3),
                bottom(1, 2),
                bottom(1, 3),
                bottom(2, 3),
            ],
        )
    }

    pub fn determinant(&self) -> T {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Computes the inverse of this matrix by Laplace expansion along the top two rows.
    ///
    /// There is no singularity check: a singular matrix yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.minors();
        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        let inv_det = T::ONE / det;
        let a = |row: usize, col: usize| self.0[col][row];

        #[rustfmt::skip]
        let inv = Self::from_rows([
            [
                a(1, 1) * c5 - a(1, 2) * c4 + a(1, 3) * c3,
                -a(0, 1) * c5 + a(0, 2) * c4 - a(0, 3) * c3,
                a(3, 1) * s5 - a(3, 2) * s4 + a(3, 3) * s3,
                -a(2, 1) * s5 + a(2, 2) * s4 - a(2, 3) * s3,
            ],
            [
                -a(1, 0) * c5 + a(1, 2) * c2 - a(1, 3) * c1,
                a(0, 0) * c5 - a(0, 2) * c2 + a(0, 3) * c1,
                -a(3, 0) * s5 + a(3, 2) * s2 - a(3, 3) * s1,
                a(2, 0) * s5 - a(2, 2) * s2 + a(2, 3) * s1,
            ],
            [
                a(1, 0) * c4 - a(1, 1) * c2 + a(1, 3) * c0,
                -a(0, 0) * c4 + a(0, 1) * c2 - a(0, 3) * c0,
                a(3, 0) * s4 - a(3, 1) * s2 + a(3, 3) * s0,
                -a(2, 0) * s4 + a(2, 1) * s2 - a(2, 3) * s0,
            ],
            [
                -a(1, 0) * c3 + a(1, 1) * c1 - a(1, 2) * c0,
                a(0, 0) * c3 - a(0, 1) * c1 + a(0, 2) * c0,
                -a(3, 0) * s3 + a(3, 1) * s1 - a(3, 2) * s0,
                a(2, 0) * s3 - a(2, 1) * s1 + a(2, 2) * s0,
            ],
        ]);
        inv * inv_det
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    /// Formats the matrix row by row, which reads like the usual math notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries((0..C).map(|col| &self.0 .0[col][self.1]))
                    .finish()
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row(self, row)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn debug() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(format!("{m:?}"), "[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn rows_and_columns() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.column(1), vec2(2, 5));
        assert_eq!(m.row(1), vec3(4, 5, 6));
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.transpose().row(2), vec2(3, 6));
    }

    #[test]
    fn determinants() {
        assert_eq!(Mat2::from_rows([[1, 2], [3, 4]]).determinant(), -2);

        #[rustfmt::skip]
        let m = Mat3::from_rows([
            [2, 0, 1],
            [1, 3, 2],
            [1, 1, 2],
        ]);
        assert_eq!(m.determinant(), 6);

        #[rustfmt::skip]
        let m = Mat4::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(m.determinant(), 30);
        assert_eq!(m.transpose().determinant(), 30);
    }

    #[test]
    fn adjoint_transpose_scales_inverse() {
        #[rustfmt::skip]
        let m = Mat3::from_rows([
            [2, 0, 1],
            [1, 3, 2],
            [1, 1, 2],
        ]);
        let det = m.determinant();
        assert_eq!(m.adjoint_transpose().transpose() * m, Mat3::identity() * det);
    }

    #[test]
    fn inverses() {
        let m2 = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        approx::assert_relative_eq!(m2 * m2.inverse(), Mat2::identity(), epsilon = 1e-12);

        #[rustfmt::skip]
        let m3 = Mat3::from_rows([
            [2.0, 0.0, 1.0],
            [1.0, 3.0, 2.0],
            [1.0, 1.0, 2.0],
        ]);
        approx::assert_relative_eq!(m3.inverse() * m3, Mat3::identity(), epsilon = 1e-12);

        #[rustfmt::skip]
        let m4 = Mat4::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        approx::assert_relative_eq!(m4 * m4.inverse(), Mat4::identity(), epsilon = 1e-12);
        approx::assert_relative_eq!(m4.inverse() * m4, Mat4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn norms() {
        #[rustfmt::skip]
        let m = Mat3::from_rows([
            [1.0, -7.0, 0.0],
            [2.0,  1.0, 1.0],
            [-3.0, 0.5, 1.0],
        ]);
        assert_eq!(m.norm_1(), 8.5);
        assert_eq!(m.norm_inf(), 8.0);
        assert_eq!(m.transpose().norm_1(), m.norm_inf());
    }

    #[test]
    fn pod() {
        let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        // Column-major.
        assert_eq!(floats, &[1.0, 3.0, 2.0, 4.0]);
    }
}
