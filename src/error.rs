//! Error types for strang

use thiserror::Error;

/// Result type alias using [`MatrixError`].
pub type Result<T> = core::result::Result<T, MatrixError>;

/// Errors returned by matrix construction, arithmetic and decompositions.
///
/// ```
/// use strang::{Matrix, MatrixError};
///
/// let a = Matrix::fill(2, 3, 1_i32);
/// let b = Matrix::fill(4, 3, 1_i32);
/// assert_eq!(
///     (&a * &b).unwrap_err(),
///     MatrixError::DimensionMismatch { op: "*", lhs: (2, 3), rhs: (4, 3) },
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation.
    #[error("dimension mismatch: {}x{} {op} {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// Operation symbol or name
        op: &'static str,
        /// Left operand `(rows, cols)`
        lhs: (usize, usize),
        /// Right operand `(rows, cols)`
        rhs: (usize, usize),
    },

    /// A 1-based row or column index lies outside `1..=len`.
    #[error("index {index} out of range 1..={len}")]
    IndexOutOfRange {
        /// The offending 1-based index
        index: usize,
        /// Number of rows or columns on that axis
        len: usize,
    },

    /// The operation is only defined for square matrices.
    #[error("matrix is not square: {nrows}x{ncols}")]
    NotSquare {
        /// Row count
        nrows: usize,
        /// Column count
        ncols: usize,
    },

    /// Split column outside `1..ncols`.
    #[error("cannot split a matrix with {ncols} columns at column {column}")]
    InvalidSplit {
        /// Requested split column (1-based, inclusive in the left part)
        column: usize,
        /// Column count of the matrix
        ncols: usize,
    },

    /// A flat value sequence does not hold exactly `rows * cols` elements.
    #[error("expected {expected} values, got {got}")]
    SizeMismatch {
        /// `rows * cols`
        expected: usize,
        /// Supplied length
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let e = MatrixError::DimensionMismatch { op: "+", lhs: (2, 2), rhs: (3, 2) };
        assert_eq!(e.to_string(), "dimension mismatch: 2x2 + 3x2");

        let e = MatrixError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(e.to_string(), "index 4 out of range 1..=3");

        let e = MatrixError::NotSquare { nrows: 2, ncols: 3 };
        assert_eq!(e.to_string(), "matrix is not square: 2x3");

        let e = MatrixError::InvalidSplit { column: 3, ncols: 3 };
        assert_eq!(e.to_string(), "cannot split a matrix with 3 columns at column 3");

        let e = MatrixError::SizeMismatch { expected: 6, got: 5 };
        assert_eq!(e.to_string(), "expected 6 values, got 5");
    }
}
