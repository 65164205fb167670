//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::traits::Number;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == *other
    }
}

impl<T: Number, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

/// Element-wise operators between two vectors.
macro_rules! elementwise {
    ($($trait:ident :: $method:ident, $assign:ident :: $assign_method:ident, $op:tt;)+) => {
        $(
            impl<T: Number, const N: usize> $trait for Vector<T, N> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self::from_fn(|i| self.0[i] $op rhs.0[i])
                }
            }

            impl<T: Number, const N: usize> $assign for Vector<T, N> {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

impl<T: Number, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|e| e * rhs)
    }
}

impl<T: Number, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Number, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|e| e / rhs)
    }
}

impl<T: Number, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64);
