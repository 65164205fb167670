//! Polar and QR decomposition of 3x3 matrices.
//!
//! Both factor a matrix into a rotation and a remainder: the [polar decomposition] into a rotation
//! and a symmetric stretch, the [QR decomposition] into a rotation and an upper-triangular matrix.
//!
//! [polar decomposition]: https://en.wikipedia.org/wiki/Polar_decomposition
//! [QR decomposition]: https://en.wikipedia.org/wiki/QR_decomposition

use crate::{
    error::DecomposeError,
    traits::{is_negligible2, Real},
    Mat3,
};

/// Parameters of the iterative polar decomposition.
///
/// # Examples
///
/// ```
/// # use deform_linalg::*;
/// let options = PolarOptions::default().with_max_iterations(20);
/// let m = rotate(euler_z(0.3)) * Mat3::from_diagonal([1.0, 2.0, 3.0]);
/// let polar = options.decompose(m).unwrap();
/// assert!(polar.converged());
/// approx::assert_relative_eq!(polar.rotation(), rotate(euler_z(0.3)), epsilon = 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarOptions {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for PolarOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarOptions {
    /// Default relative tolerance on the 1-norm of the per-iteration update.
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    pub const fn new() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the convergence tolerance.
    ///
    /// The iteration stops once the 1-norm of the change of the iterate drops to `tolerance` times
    /// the 1-norm of the iterate.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Sets the maximum number of Newton iterations before giving up.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Computes the polar decomposition `a = Q * S` with the scaled Newton iteration of Higham, as
    /// popularized by Shoemake.
    ///
    /// If `a` has a negative determinant, `Q` is orthonormal but contains a reflection, which is
    /// reported through [`PolarDecomposition::determinant`].
    ///
    /// Reaching [`PolarOptions::max_iterations`] is not an error: the last iterate is returned and
    /// [`PolarDecomposition::converged`] is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeError::Singular`] if an iterate has a determinant of exactly zero.
    pub fn decompose<T: Real>(&self, a: Mat3<T>) -> Result<PolarDecomposition<T>, DecomposeError> {
        let tolerance = T::from_f64(self.tolerance);
        let half = T::from_f64(0.5);

        // Iterating on the transpose makes the adjugate columns line up with the iterate's columns.
        let mut mk = a.transpose();
        let mut m_one = mk.norm_1();
        let mut m_inf = mk.norm_inf();
        let mut iteration = 0;
        let converged = loop {
            if iteration == self.max_iterations {
                log::debug!(
                    "polar decomposition did not converge within {} iterations",
                    self.max_iterations
                );
                break false;
            }
            iteration += 1;

            let madjt = mk.adjoint_transpose();
            let det = mk.column(0).dot(madjt.column(0));
            if det == T::ZERO {
                log::debug!("polar decomposition of singular matrix {a:?} (iteration {iteration})");
                return Err(DecomposeError::Singular { iteration });
            }

            let madjt_one = madjt.norm_1();
            let madjt_inf = madjt.norm_inf();
            let gamma =
                ((madjt_one * madjt_inf / (m_one * m_inf)).sqrt() / det.abs()).sqrt();
            let g1 = gamma * half;
            let g2 = half / (gamma * det);

            let prev = mk;
            mk = mk * g1 + madjt * g2;
            let e_one = (prev - mk).norm_1();
            m_one = mk.norm_1();
            m_inf = mk.norm_inf();

            log::trace!("polar iteration {iteration}: det={det:?}, change={e_one:?}");

            if e_one <= m_one * tolerance {
                break true;
            }
        };

        Ok(PolarDecomposition {
            rotation: mk.transpose(),
            input: a,
            determinant: a.determinant(),
            iterations: iteration,
            converged,
        })
    }
}

/// Result of a polar decomposition `A = Q * S`.
#[derive(Debug, Clone, Copy)]
pub struct PolarDecomposition<T> {
    rotation: Mat3<T>,
    input: Mat3<T>,
    determinant: T,
    iterations: usize,
    converged: bool,
}

impl<T: Real> PolarDecomposition<T> {
    /// Returns the orthonormal factor `Q`.
    #[inline]
    pub fn rotation(&self) -> Mat3<T> {
        self.rotation
    }

    /// Computes the symmetric stretch factor `S = Qᵀ * A`.
    pub fn stretch(&self) -> Mat3<T> {
        self.rotation.transpose() * self.input
    }

    /// Returns the determinant of the decomposed matrix.
    ///
    /// A negative value means that [`PolarDecomposition::rotation`] contains a reflection.
    #[inline]
    pub fn determinant(&self) -> T {
        self.determinant
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns whether the iteration reached the requested tolerance.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Turns an unconverged result into [`DecomposeError::NotConverged`].
    pub fn into_converged(self) -> Result<Self, DecomposeError> {
        if self.converged {
            Ok(self)
        } else {
            Err(DecomposeError::NotConverged {
                iterations: self.iterations,
            })
        }
    }
}

/// Result of a QR decomposition `A = Q * R`.
#[derive(Debug, Clone, Copy)]
pub struct QrDecomposition<T> {
    q: Mat3<T>,
    r: Mat3<T>,
}

impl<T: Copy> QrDecomposition<T> {
    /// Returns the rotation `Q`. Its determinant is always +1.
    #[inline]
    pub fn q(&self) -> Mat3<T> {
        self.q
    }

    /// Returns the upper-triangular factor `R`.
    #[inline]
    pub fn r(&self) -> Mat3<T> {
        self.r
    }

    pub fn into_parts(self) -> (Mat3<T>, Mat3<T>) {
        (self.q, self.r)
    }
}

impl<T: Real> Mat3<T> {
    /// Computes the polar decomposition with the default [`PolarOptions`].
    pub fn polar_decomposition(self) -> Result<PolarDecomposition<T>, DecomposeError> {
        PolarOptions::default().decompose(self)
    }

    /// Computes the QR decomposition using three Givens rotations.
    ///
    /// Matrices with a negative determinant are negated before the elimination, so that `Q` is
    /// always a proper rotation and the sign ends up in `R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use deform_linalg::*;
    /// let a = Mat3::from_rows([
    ///     [1.0, 2.0, 0.5],
    ///     [0.0, 1.0, 3.0],
    ///     [2.0, 0.0, 1.0],
    /// ]);
    /// let qr = a.qr_decomposition();
    /// approx::assert_relative_eq!(qr.q() * qr.r(), a, epsilon = 1e-12);
    /// assert_eq!(qr.r()[(2, 0)], 0.0);
    /// ```
    pub fn qr_decomposition(self) -> QrDecomposition<T> {
        let negate = self.determinant() < T::ZERO;
        let mut r = if negate { -self } else { self };

        let (c1, s1) = eliminate(&mut r, 0, 1, 2);
        let (c2, s2) = eliminate(&mut r, 0, 0, 1);
        let (c3, s3) = eliminate(&mut r, 1, 1, 2);

        let q = plane_rotation(1, 2, c1, s1)
            * plane_rotation(0, 1, c2, s2)
            * plane_rotation(1, 2, c3, s3);
        let r = if negate { -r } else { r };

        QrDecomposition { q, r }
    }
}

/// Computes the Givens rotation `(c, s)` that maps `(a, b)` to `(r, 0)`, and `r`.
#[inline]
fn givens<T: Real>(a: T, b: T) -> (T, T, T) {
    let r2 = a * a + b * b;
    let r = r2.sqrt();
    if is_negligible2(r2) {
        (T::ONE, T::ZERO, r)
    } else {
        (a / r, b / r, r)
    }
}

#[inline]
fn rotate<T: Real>(c: T, s: T, a: T, b: T) -> (T, T) {
    (c * a + s * b, -s * a + c * b)
}

/// Zeroes `m[(j, col)]` by rotating rows `i` and `j`, and returns the rotation used.
///
/// Columns left of `col` must already be zero in both rows.
fn eliminate<T: Real>(m: &mut Mat3<T>, col: usize, i: usize, j: usize) -> (T, T) {
    let (c, s, r) = givens(m[(i, col)], m[(j, col)]);
    m[(i, col)] = r;
    m[(j, col)] = T::ZERO;
    for k in col + 1..3 {
        let (a, b) = rotate(c, s, m[(i, k)], m[(j, k)]);
        m[(i, k)] = a;
        m[(j, k)] = b;
    }
    (c, s)
}

/// The transpose of the Givens rotation `(c, s)` acting on rows `i` and `j`.
fn plane_rotation<T: Real>(i: usize, j: usize, c: T, s: T) -> Mat3<T> {
    let mut m = Mat3::identity();
    m[(i, i)] = c;
    m[(i, j)] = -s;
    m[(j, i)] = s;
    m[(j, j)] = c;
    m
}
