//! Named field access for small vectors.
//!
//! `Vector<T, N>` is `#[repr(transparent)]` over `[T; N]`, and each view struct below is
//! `#[repr(C)]` with `N` fields of type `T` followed by a zero-sized marker, so both share the same
//! layout and a reference to one can be reinterpreted as a reference to the other.

use std::ops::{Deref, DerefMut};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($n:literal => $view:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { &*(self as *const Self).cast::<$view<T>>() }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { &mut *(self as *mut Self).cast::<$view<T>>() }
            }
        }
    };
}

view!(2 => XY);
view!(3 => XYZ);
view!(4 => XYZW);
