//! Linear algebra kernel for 3D deformation and animation.
//!
//! This crate provides small, fixed-size vectors and matrices, quaternions, and the rotation
//! machinery that rigging and deformation code needs on top of them:
//!
//! - Quaternion algebra, including `exp`, `ln` and `sqrt` for quaternions that encode a rotation
//!   combined with a uniform scale, and cheaper variants for unit quaternions.
//! - [Polar][PolarOptions] and [QR][Mat3::qr_decomposition] decomposition of 3x3 matrices.
//! - Transform matrix constructors (translate, rotate, scale, shear, stretch, projections) and
//!   [`rotation`] extraction from a rotation matrix.
//! - Rotation parameterizations: axis-angle, Euler angles in all six axis orders, rotation vectors,
//!   and the saddle (swing) / twist split.
//!
//! # Conventions
//!
//! - Matrices are stored column-major and act on column vectors. `a * b` applies `b` first, and
//!   translations occupy the last column.
//! - The quaternion product `a * b` likewise applies `b` first.
//! - Euler orders name the axes in the order the rotations are applied: [`euler_xyz`] rotates
//!   about X, then Y, then Z.
//! - Angles are in radians, except for the field of view of [`perspective_x`] and
//!   [`perspective_y`].
//!
//! # Degenerate input
//!
//! Nothing in this crate panics on bad input. Near-singular cases (tiny angles, zero-length
//! vectors, vanishing Givens pivots) switch to a series expansion or an identity fallback once a
//! squared magnitude drops to [`DEGENERATE_EPSILON`]² or below. Inputs without a meaningful
//! result, like the inverse of the zero quaternion, produce non-finite values. The polar
//! decomposition is the only operation that reports failure through a [`Result`].

mod approx_eq;
mod decompose;
mod error;
mod matrix;
mod quat;
mod rotation;
mod traits;
mod transform;
mod vector;

pub use decompose::*;
pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use rotation::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
