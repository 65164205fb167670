use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

impl<T: PartialEq, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: Number, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

impl<T: Number, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

impl<T: Number, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

/// `Matrix * scalar`
impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|e| e * rhs)
    }
}

impl<T: Number, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// `Matrix * Matrix`
impl<T: Number, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix::from_fn(|row, col| {
            (0..K).fold(T::ZERO, |acc, k| acc + self[(row, k)] * rhs[(k, col)])
        })
    }
}

/// `Matrix * Vector`
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn mul_mat_vec() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(m * vec3(1, 0, -1), vec2(-2, -2));
    }

    #[test]
    fn mul_mat_mat() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [1, 0],
            [0, 1],
            [2, 2],
        ]);
        assert_eq!(a * b, Matrix::from_rows([[7, 8], [16, 17]]));
        assert_eq!(a * Mat3::identity(), a);
    }

    #[test]
    fn elementwise() {
        let a = Mat2::from_rows([[1.0f32, 2.0], [3.0, 4.0]]);
        let mut b = a;
        b += a;
        assert_eq!(b, 2.0 * a);
        b -= a * 3.0;
        assert_eq!(b, -a);
        assert_eq!(a - a, Mat2::ZERO);
    }
}
