use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{quat, traits::Number, Quat};

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.into_array();
        let [bx, by, bz, bw] = rhs.into_array();
        quat(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `a / b == a * b.inverse()`
impl<T: Number> Div for Quat<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Number> DivAssign for Quat<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::from_vec(self.into_vec() + rhs.into_vec())
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Quat::from_vec(self.into_vec() - rhs.into_vec())
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::from_vec(-self.into_vec())
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Quat::from_vec(self.into_vec() * rhs)
    }
}

impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Quat::from_vec(self.into_vec() / rhs)
    }
}

impl<T: Number> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl Mul<Quat<$t>> for $t {
                type Output = Quat<$t>;

                fn mul(self, rhs: Quat<$t>) -> Quat<$t> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64);
