use std::{fmt, ops};

/// Magnitude below which a quantity is treated as zero by the degenerate-case fallbacks.
///
/// Every guard in this crate compares a *squared* quantity against `DEGENERATE_EPSILON²`, so the
/// thresholds behave identically no matter whether the code has a length or its square at hand.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalars.
///
/// Everything transcendental (rotations, decompositions, quaternion exponentials) is generic over
/// this trait. [`f32`] and [`f64`] implement it.
pub trait Real: Number + PartialOrd + Trig + Sqrt + fmt::Debug {
    fn abs(self) -> Self;
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Converts a literal constant to `Self`, rounding if necessary.
    fn from_f64(value: f64) -> Self;

    /// Returns the larger of `self` and `other`.
    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

/// Returns whether a squared magnitude is small enough to take a degenerate-case fallback.
#[inline]
pub(crate) fn is_negligible2<T: Real>(squared: T) -> bool {
    squared <= T::from_f64(DEGENERATE_EPSILON * DEGENERATE_EPSILON)
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    $types::sin(self)
                }

                fn tan(self) -> Self {
                    $types::tan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $types::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    $types::sin_cos(self)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Real for $types {
                fn abs(self) -> Self {
                    $types::abs(self)
                }

                fn exp(self) -> Self {
                    $types::exp(self)
                }

                fn ln(self) -> Self {
                    $types::ln(self)
                }

                fn from_f64(value: f64) -> Self {
                    value as $types
                }

                fn max(self, other: Self) -> Self {
                    $types::max(self, other)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negligible_threshold_is_squared() {
        assert!(is_negligible2(1e-13_f64));
        assert!(is_negligible2(0.9e-12_f64));
        assert!(!is_negligible2(1.1e-12_f64));
        // 1e-6 itself is a length, not a squared length.
        assert!(!is_negligible2(1e-6_f32));
    }

    #[test]
    fn real_max() {
        assert_eq!(Real::max(1.0_f32, 2.0), 2.0);
        assert_eq!(Real::max(-1.0_f64, -2.0), -1.0);
    }
}
