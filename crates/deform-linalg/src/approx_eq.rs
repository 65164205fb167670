//! [`approx`] trait implementations.
//!
//! Compound values are approximately equal if all of their elements are, using the element type's
//! comparison and tolerances.

use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Quat, Vector};

fn all_pairs<'a, T: 'a>(
    a: impl IntoIterator<Item = &'a T>,
    b: impl IntoIterator<Item = &'a T>,
    mut eq: impl FnMut(&T, &T) -> bool,
) -> bool {
    a.into_iter().zip(b).all(|(a, b)| eq(a, b))
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        all_pairs(self.as_slice(), other.as_slice(), |a, b| {
            a.abs_diff_eq(b, epsilon)
        })
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        all_pairs(self.as_slice(), other.as_slice(), |a, b| {
            a.relative_eq(b, epsilon, max_relative)
        })
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        all_pairs(self.as_slice(), other.as_slice(), |a, b| {
            a.ulps_eq(b, epsilon, max_ulps)
        })
    }
}

impl<T: AbsDiffEq, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        all_pairs(self.iter(), other.iter(), |a, b| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        all_pairs(self.iter(), other.iter(), |a, b| {
            a.relative_eq(b, epsilon, max_relative)
        })
    }
}

impl<T: UlpsEq, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        all_pairs(self.iter(), other.iter(), |a, b| {
            a.ulps_eq(b, epsilon, max_ulps)
        })
    }
}

// Quaternions compare component-wise, so `q` and `-q` are different even though they encode the
// same rotation.

impl<T: AbsDiffEq> AbsDiffEq for Quat<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_vec().abs_diff_eq(other.as_vec(), epsilon)
    }
}

impl<T: RelativeEq> RelativeEq for Quat<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.as_vec()
            .relative_eq(other.as_vec(), epsilon, max_relative)
    }
}

impl<T: UlpsEq> UlpsEq for Quat<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_vec().ulps_eq(other.as_vec(), epsilon, max_ulps)
    }
}
