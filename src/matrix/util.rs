use alloc::vec::Vec;
use core::fmt;

use crate::error::Result;

use super::{check_index, Matrix};

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Clone> Matrix<T> {
    /// Apply a function to every element, keeping shape and anchors.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1, 4, 9, 16]).unwrap();
    /// let r = m.map(|x| x + 1);
    /// assert_eq!(r[(2, 2)], 17);
    /// ```
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        Matrix {
            data: self.data.iter().cloned().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            zero: self.zero.clone(),
            one: self.one.clone(),
        }
    }

    /// Apply a function to every element, producing a matrix over another
    /// element type with the given anchors.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_rows(1, 2, &[1.5_f64, 2.5]).unwrap();
    /// let r = m.map_into(0_i32, 1, |x| x as i32);
    /// assert_eq!(r.as_slice(), &[1, 2]);
    /// ```
    pub fn map_into<U>(&self, zero: U, one: U, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().cloned().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            zero,
            one,
        }
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use strang::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(2, 1)], 2);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.at(i, j).clone());
            }
        }
        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
            zero: self.zero.clone(),
            one: self.one.clone(),
        }
    }

    /// Values of 1-based row `row`, left to right.
    pub fn row_values(&self, row: usize) -> Result<Vec<T>> {
        check_index(row, self.nrows)?;
        let start = (row - 1) * self.ncols;
        Ok(self.data[start..start + self.ncols].to_vec())
    }

    /// Values of 1-based column `col`, top to bottom.
    pub fn col_values(&self, col: usize) -> Result<Vec<T>> {
        check_index(col, self.ncols)?;
        Ok((0..self.nrows).map(|i| self.at(i, col - 1).clone()).collect())
    }

    /// Return a copy with 1-based rows `a` and `b` exchanged.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_rows(3, 1, &[1, 2, 3]).unwrap();
    /// let s = m.swap_rows(1, 3).unwrap();
    /// assert_eq!(s.as_slice(), &[3, 2, 1]);
    /// assert_eq!(m.swap_rows(2, 2).unwrap(), m);
    /// ```
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Self> {
        let mut m = self.clone();
        m.swap_rows_mut(a, b)?;
        Ok(m)
    }

    /// Return a copy with 1-based columns `a` and `b` exchanged.
    pub fn swap_columns(&self, a: usize, b: usize) -> Result<Self> {
        let mut m = self.clone();
        m.swap_columns_mut(a, b)?;
        Ok(m)
    }
}

// ── Row / Column manipulation ───────────────────────────────────────

impl<T> Matrix<T> {
    /// Swap two 1-based rows in place.
    pub fn swap_rows_mut(&mut self, a: usize, b: usize) -> Result<()> {
        check_index(a, self.nrows)?;
        check_index(b, self.nrows)?;
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap((a - 1) * n + j, (b - 1) * n + j);
            }
        }
        Ok(())
    }

    /// Swap two 1-based columns in place.
    pub fn swap_columns_mut(&mut self, a: usize, b: usize) -> Result<()> {
        check_index(a, self.ncols)?;
        check_index(b, self.ncols)?;
        if a != b {
            for i in 0..self.nrows {
                let ia = i * self.ncols + (a - 1);
                let ib = i * self.ncols + (b - 1);
                self.data.swap(ia, ib);
            }
        }
        Ok(())
    }
}

impl<T: Clone> Matrix<T> {
    /// `size x size` identity with rows (equivalently columns) `c1` and `c2`
    /// exchanged. Left-multiplying by it swaps rows `c1` and `c2`.
    ///
    /// ```
    /// use strang::Matrix;
    /// let p = Matrix::permutation(3, 0, 1, 1, 3).unwrap();
    /// assert_eq!(p.as_slice(), &[0, 0, 1, 0, 1, 0, 1, 0, 0]);
    /// assert_eq!(Matrix::permutation(3, 0, 1, 2, 2).unwrap(), Matrix::eye(3, 3));
    /// assert!(Matrix::permutation(3, 0, 1, 0, 2).is_err());
    /// ```
    pub fn permutation(size: usize, zero: T, one: T, c1: usize, c2: usize) -> Result<Self> {
        check_index(c1, size)?;
        check_index(c2, size)?;
        let mut p = Self::identity(size, size, zero, one);
        p.swap_rows_mut(c1, c2)?;
        Ok(p)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Rows render as `[  v1  v2  ]`, joined by newlines, with no trailing
    /// newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            write!(f, "[  ")?;
            for j in 0..self.ncols {
                write!(f, "{}  ", self.at(i, j))?;
            }
            write!(f, "]")?;
            if i + 1 < self.nrows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn map() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(1, 1)], 2.0);
        assert_eq!(doubled[(2, 2)], 8.0);
    }

    #[test]
    fn transpose() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn swap_rows() {
        let m = Matrix::from_rows(3, 1, &[1, 2, 3]).unwrap();
        assert_eq!(m.swap_rows(1, 3).unwrap(), Matrix::from_rows(3, 1, &[3, 2, 1]).unwrap());
        assert_eq!(m.swap_rows(1, 3).unwrap(), m.swap_rows(3, 1).unwrap());
        assert_eq!(m.swap_rows(2, 2).unwrap(), m);
    }

    #[test]
    fn swap_rows_out_of_range() {
        let m = Matrix::from_rows(3, 1, &[1, 2, 3]).unwrap();
        assert_eq!(m.swap_rows(1, 4).unwrap_err(), MatrixError::IndexOutOfRange { index: 4, len: 3 });
        assert_eq!(m.swap_rows(0, 1).unwrap_err(), MatrixError::IndexOutOfRange { index: 0, len: 3 });
    }

    #[test]
    fn swap_columns() {
        let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        let s = m.swap_columns(1, 3).unwrap();
        assert_eq!(s.as_slice(), &[3, 2, 1, 6, 5, 4]);
        assert_eq!(s, m.swap_columns(3, 1).unwrap());
        assert_eq!(m.swap_columns(2, 2).unwrap(), m);
        assert!(m.swap_columns(1, 4).is_err());
    }

    #[test]
    fn swap_matches_permutation_product() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as i64);
        let p = Matrix::permutation(3, 0, 1, 1, 2).unwrap();
        assert_eq!((&p * &m).unwrap(), m.swap_rows(1, 2).unwrap());
        assert_eq!((&m * &p).unwrap(), m.swap_columns(1, 2).unwrap());
    }

    #[test]
    fn row_col_values() {
        let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.row_values(2).unwrap(), [4, 5, 6]);
        assert_eq!(m.col_values(2).unwrap(), [2, 5]);
        assert!(m.row_values(3).is_err());
        assert!(m.col_values(0).is_err());
    }

    #[test]
    fn display() {
        let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(m.to_string(), "[  1  2  ]\n[  3  4  ]");
    }

    #[test]
    fn display_float_and_single_row() {
        let m = Matrix::from_rows(1, 3, &[1.0, -0.5, 15.5]).unwrap();
        assert_eq!(format!("{}", m), "[  1  -0.5  15.5  ]");
        assert_eq!(Matrix::<i32>::zeros(0, 3).to_string(), "");
    }
}
