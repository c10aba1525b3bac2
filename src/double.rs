//! Double-precision facade for foreign-language bindings.
//!
//! [`DoubleMatrix`] pins the element type to `f64` and the anchors to
//! `0.0` / `1.0`, and exposes the flat, method-per-operation surface a
//! binding generator expects: `identity`, `scalar_mul`, `matrix_mul`,
//! `equal`, `as_string`, plus constructors and bulk value setters.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::Result;
use crate::Matrix;

/// `f64` matrix with fixed `0.0` / `1.0` anchors.
///
/// ```
/// use strang::DoubleMatrix;
///
/// let a = DoubleMatrix::identity(2, 2);
/// let b = a.scalar_mul(3.0);
/// assert_eq!(b.as_string(), "[  3  0  ]\n[  0  3  ]");
/// assert!(a.matrix_mul(&b).unwrap().equal(&b));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleMatrix {
    inner: Matrix<f64>,
}

impl DoubleMatrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            inner: Matrix::new(rows, cols, 0.0, 1.0),
        }
    }

    /// Every cell set to `fill`.
    pub fn with_fill(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            inner: Matrix::filled(rows, cols, 0.0, 1.0, fill),
        }
    }

    /// Cells taken from a row-major slice of exactly `rows * cols` values.
    pub fn from_values(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        Ok(Self {
            inner: Matrix::from_values(rows, cols, 0.0, 1.0, values.to_vec())?,
        })
    }

    /// `rows x cols` identity.
    pub fn identity(rows: usize, cols: usize) -> Self {
        Self {
            inner: Matrix::identity(rows, cols, 0.0, 1.0),
        }
    }

    /// Number of rows.
    pub fn rows_count(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn columns_count(&self) -> usize {
        self.inner.ncols()
    }

    /// Value at 1-based `(row, col)`.
    pub fn get_value(&self, row: usize, col: usize) -> Result<f64> {
        self.inner.get(row, col).copied()
    }

    /// Overwrite 1-based `(row, col)`, returning the previous value.
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) -> Result<f64> {
        self.inner.set(row, col, value)
    }

    /// Overwrite every cell from a row-major slice.
    ///
    /// ```
    /// use strang::DoubleMatrix;
    /// let mut m = DoubleMatrix::new(2, 2);
    /// m.set_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get_value(2, 1).unwrap(), 3.0);
    /// assert!(m.set_values(&[1.0]).is_err());
    /// ```
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        self.inner = Matrix::from_values(
            self.inner.nrows(),
            self.inner.ncols(),
            0.0,
            1.0,
            values.to_vec(),
        )?;
        Ok(())
    }

    /// `self * scalar`.
    pub fn scalar_mul(&self, scalar: f64) -> Self {
        Self {
            inner: &self.inner * scalar,
        }
    }

    /// Matrix product `self * rhs`.
    pub fn matrix_mul(&self, rhs: &DoubleMatrix) -> Result<Self> {
        Ok(Self {
            inner: self.inner.matmul(&rhs.inner)?,
        })
    }

    /// Tolerant equality, as `==`.
    pub fn equal(&self, rhs: &DoubleMatrix) -> bool {
        self.inner == rhs.inner
    }

    /// The display rendering, as `to_string()`.
    pub fn as_string(&self) -> String {
        self.inner.to_string()
    }

    /// Borrow the underlying engine matrix.
    pub fn as_matrix(&self) -> &Matrix<f64> {
        &self.inner
    }

    /// Unwrap into the underlying engine matrix.
    pub fn into_inner(self) -> Matrix<f64> {
        self.inner
    }
}

impl Default for DoubleMatrix {
    /// An empty `0 x 0` matrix.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for DoubleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
