use core::ops::Div;

use crate::error::{MatrixError, Result};
use crate::linalg::LuDecomposition;
use crate::traits::{ElementOps, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements, seeded with the zero anchor.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = self.zero.clone();
        for i in 0..n {
            sum = sum + self.at(i, i).clone();
        }
        sum
    }
}

impl<T: ElementOps + Div<Output = T>> Matrix<T> {
    /// LU decomposition with partial row pivoting.
    ///
    /// Fails with [`MatrixError::NotSquare`] for non-square matrices. See
    /// [`LuDecomposition`].
    pub fn lu(&self) -> Result<LuDecomposition<T>> {
        LuDecomposition::new(self)
    }

    /// LU decomposition as a `(L, U, is_singular)` triple.
    ///
    /// ```
    /// use strang::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]).unwrap();
    /// let (l, u, singular) = a.to_lu().unwrap();
    /// assert!(!singular);
    /// assert_eq!(l[(2, 1)], 1.5);
    /// assert_eq!(u[(2, 2)], -1.5);
    /// ```
    pub fn to_lu(&self) -> Result<(Matrix<T>, Matrix<T>, bool)> {
        Ok(self.lu()?.into_parts())
    }

    /// Determinant via LU decomposition.
    ///
    /// Returns the zero anchor for singular matrices. Fails with
    /// [`MatrixError::NotSquare`] for non-square matrices.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]).unwrap();
    /// assert!((m.det().unwrap() - (-14.0)).abs() < 1e-12);
    /// assert!(Matrix::<f64>::zeros(2, 3).det().is_err());
    /// ```
    pub fn det(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.lu()?.det())
    }
}
