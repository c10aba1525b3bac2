use alloc::vec::Vec;

use crate::error::{MatrixError, Result};

use super::Matrix;

impl<T: Clone> Matrix<T> {
    /// Extract the sub-matrix of columns `first..=last` (0-based), keeping
    /// all rows and this matrix's anchors.
    fn column_range(&self, first: usize, last: usize) -> Self {
        let width = last + 1 - first;
        let mut data = Vec::with_capacity(self.nrows * width);
        for i in 0..self.nrows {
            let start = i * self.ncols;
            data.extend_from_slice(&self.data[start + first..=start + last]);
        }
        Matrix {
            data,
            nrows: self.nrows,
            ncols: width,
            zero: self.zero.clone(),
            one: self.one.clone(),
        }
    }

    /// Place `rhs` to the right of `self`.
    ///
    /// Both matrices must have the same number of rows. The result has
    /// `self.ncols() + rhs.ncols()` columns and keeps `self`'s anchors.
    ///
    /// ```
    /// use strang::Matrix;
    /// let a = Matrix::from_rows(2, 1, &[1, 4]).unwrap();
    /// let b = Matrix::from_rows(2, 2, &[2, 3, 5, 6]).unwrap();
    /// let c = a.concat(&b).unwrap();
    /// assert_eq!(c, Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap());
    /// ```
    pub fn concat(&self, rhs: &Self) -> Result<Self> {
        if self.nrows != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                op: "concat",
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let ncols = self.ncols + rhs.ncols;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for i in 0..self.nrows {
            data.extend_from_slice(&self.data[i * self.ncols..(i + 1) * self.ncols]);
            data.extend_from_slice(&rhs.data[i * rhs.ncols..(i + 1) * rhs.ncols]);
        }
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols,
            zero: self.zero.clone(),
            one: self.one.clone(),
        })
    }

    /// Split into `(left, right)` after 1-based column `column`.
    ///
    /// `left` holds columns `1..=column`, `right` the remainder. Valid for
    /// `1 <= column < ncols`, so neither part is empty; anything else is
    /// [`MatrixError::InvalidSplit`].
    ///
    /// ```
    /// use strang::Matrix;
    /// let a = Matrix::from_fn(2, 4, |i, j| (i * 10 + j) as i32);
    /// let (left, right) = a.split(1).unwrap();
    /// assert_eq!(left.ncols(), 1);
    /// assert_eq!(right.ncols(), 3);
    /// assert_eq!(left.concat(&right).unwrap(), a);
    /// assert!(a.split(4).is_err());
    /// ```
    pub fn split(&self, column: usize) -> Result<(Self, Self)> {
        if column == 0 || column >= self.ncols {
            return Err(MatrixError::InvalidSplit {
                column,
                ncols: self.ncols,
            });
        }
        let left = self.column_range(0, column - 1);
        let right = self.column_range(column, self.ncols - 1);
        Ok((left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat4x5() -> Matrix<i32> {
        Matrix::from_fn(4, 5, |i, j| ((i - 1) * 5 + (j - 1)) as i32)
    }

    #[test]
    fn concat_shapes() {
        let a = Matrix::fill(3, 2, 1_i32);
        let b = Matrix::fill(3, 4, 2_i32);
        let c = a.concat(&b).unwrap();
        assert_eq!(c.nrows(), 3);
        assert_eq!(c.ncols(), 6);
        assert_eq!(c[(3, 2)], 1);
        assert_eq!(c[(3, 3)], 2);
    }

    #[test]
    fn concat_row_mismatch() {
        let a = Matrix::<i32>::zeros(3, 2);
        let b = Matrix::<i32>::zeros(2, 2);
        assert_eq!(
            a.concat(&b).unwrap_err(),
            MatrixError::DimensionMismatch { op: "concat", lhs: (3, 2), rhs: (2, 2) },
        );
    }

    #[test]
    fn concat_keeps_lhs_anchors() {
        let a = Matrix::filled(1, 1, 0, 1, 5);
        let b = Matrix::filled(1, 1, 3, 4, 6);
        let c = a.concat(&b).unwrap();
        assert_eq!((*c.zero(), *c.one()), (0, 1));
    }

    #[test]
    fn split_extract() {
        let m = mat4x5();
        let (left, right) = m.split(2).unwrap();
        assert_eq!(left.ncols(), 2);
        assert_eq!(right.ncols(), 3);
        assert_eq!(left[(2, 1)], 5);
        assert_eq!(left[(4, 2)], 16);
        assert_eq!(right[(1, 1)], 2);
        assert_eq!(right[(4, 3)], 19);
    }

    #[test]
    fn split_roundtrip_every_column() {
        let m = mat4x5();
        for c in 1..m.ncols() {
            let (left, right) = m.split(c).unwrap();
            assert_eq!(left.concat(&right).unwrap(), m);
        }
    }

    #[test]
    fn split_out_of_bounds() {
        let m = mat4x5();
        assert_eq!(m.split(0).unwrap_err(), MatrixError::InvalidSplit { column: 0, ncols: 5 });
        assert_eq!(m.split(5).unwrap_err(), MatrixError::InvalidSplit { column: 5, ncols: 5 });
        assert!(Matrix::<i32>::zeros(3, 1).split(1).is_err());
    }
}
