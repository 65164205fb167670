//! Errors reported by the matrix decompositions.

use thiserror::Error;

/// Reasons a polar decomposition can fail.
///
/// Everything else in this crate is total: invalid input propagates as NaN or infinity instead of
/// returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// The matrix (or one of its Newton iterates) has a zero determinant, so it has no unique
    /// rotational part.
    #[error("matrix is singular (determinant became zero in iteration {iteration})")]
    Singular { iteration: usize },

    /// The iteration did not reach the requested tolerance.
    ///
    /// Only returned by [`PolarDecomposition::into_converged`], since the unconverged result is
    /// often still usable.
    ///
    /// [`PolarDecomposition::into_converged`]: crate::PolarDecomposition::into_converged
    #[error("polar decomposition did not converge within {iterations} iterations")]
    NotConverged { iterations: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DecomposeError::Singular { iteration: 1 };
        assert!(err.to_string().contains("singular"));
        let err = DecomposeError::NotConverged { iterations: 100 };
        assert!(err.to_string().contains("100"));
    }
}
