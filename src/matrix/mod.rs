pub mod aliases;
mod block;
mod ops;
mod square;
mod util;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::traits::ElementOps;

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage. Every matrix carries its own `zero` and `one`
/// anchors, so the element type only needs ring operations. Public indices
/// are 1-based `(row, col)` pairs.
///
/// # Examples
///
/// ```
/// use strang::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(1, 2)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id: Matrix<i32> = Matrix::eye(3, 3);
/// assert_eq!(id[(1, 1)], 1);
/// assert_eq!(id[(1, 2)], 0);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) zero: T,
    pub(crate) one: T,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Clone> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with the `zero` anchor.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::new(2, 3, 0.0_f64, 1.0);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(2, 3)], 0.0);
    /// ```
    pub fn new(nrows: usize, ncols: usize, zero: T, one: T) -> Self {
        Self {
            data: vec![zero.clone(); nrows * ncols],
            nrows,
            ncols,
            zero,
            one,
        }
    }

    /// Create a matrix with every cell set to `value`.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::filled(2, 3, 0_i64, 1, -10);
    /// assert!(m.iter().all(|&x| x == -10));
    /// assert_eq!(*m.zero(), 0);
    /// ```
    pub fn filled(nrows: usize, ncols: usize, zero: T, one: T, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
            zero,
            one,
        }
    }

    /// Create a matrix from an owned row-major `Vec<T>`.
    ///
    /// Fails with [`MatrixError::SizeMismatch`] unless
    /// `values.len() == nrows * ncols`.
    ///
    /// ```
    /// use strang::{Matrix, MatrixError};
    /// let m = Matrix::from_values(2, 2, 0, 1, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m[(2, 1)], 3);
    ///
    /// let err = Matrix::from_values(2, 2, 0, 1, vec![1, 2, 3]).unwrap_err();
    /// assert_eq!(err, MatrixError::SizeMismatch { expected: 4, got: 3 });
    /// ```
    pub fn from_values(nrows: usize, ncols: usize, zero: T, one: T, values: Vec<T>) -> Result<Self> {
        if values.len() != nrows * ncols {
            return Err(MatrixError::SizeMismatch {
                expected: nrows * ncols,
                got: values.len(),
            });
        }
        Ok(Self {
            data: values,
            nrows,
            ncols,
            zero,
            one,
        })
    }

    /// Create an `nrows x ncols` matrix with `one` on the main diagonal and
    /// `zero` elsewhere. Rectangular shapes are allowed.
    ///
    /// ```
    /// use strang::Matrix;
    /// let id = Matrix::identity(4, 3, 0, 1);
    /// assert_eq!(id[(3, 3)], 1);
    /// assert_eq!(id[(4, 3)], 0);
    /// ```
    pub fn identity(nrows: usize, ncols: usize, zero: T, one: T) -> Self {
        let mut m = Self::new(nrows, ncols, zero, one);
        for i in 0..nrows.min(ncols) {
            m.data[i * ncols + i] = m.one.clone();
        }
        m
    }

    /// Create a matrix by calling `f(row, col)` for each element in
    /// row-major order, with 1-based `row` and `col`.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_fn_with(2, 2, 0, 1, |i, j| 10 * i + j);
    /// assert_eq!(m[(2, 1)], 21);
    /// ```
    pub fn from_fn_with(
        nrows: usize,
        ncols: usize,
        zero: T,
        one: T,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 1..=nrows {
            for j in 1..=ncols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            nrows,
            ncols,
            zero,
            one,
        }
    }
}

impl<T: ElementOps> Matrix<T> {
    /// Zero-filled matrix using the element type's own anchors.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::<f32>::zeros(3, 4);
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::new(nrows, ncols, T::zero(), T::one())
    }

    /// Matrix with every cell set to `value`, using the element type's anchors.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self::filled(nrows, ncols, T::zero(), T::one(), value)
    }

    /// Identity-shaped matrix using the element type's anchors.
    pub fn eye(nrows: usize, ncols: usize) -> Self {
        Self::identity(nrows, ncols, T::zero(), T::one())
    }

    /// Create a matrix from a row-major slice.
    ///
    /// ```
    /// use strang::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(1, 3)], 3);
    /// assert_eq!(m[(2, 1)], 4);
    /// assert!(Matrix::from_rows(2, 3, &[1, 2]).is_err());
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self> {
        Self::from_values(nrows, ncols, T::zero(), T::one(), row_major.to_vec())
    }

    /// Create a matrix by calling `f(row, col)` (1-based) for each element.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_fn_with(nrows, ncols, T::zero(), T::one(), f)
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// The additive anchor this matrix was built with.
    #[inline]
    pub fn zero(&self) -> &T {
        &self.zero
    }

    /// The multiplicative anchor this matrix was built with.
    #[inline]
    pub fn one(&self) -> &T {
        &self.one
    }

    /// Elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow the element at 1-based `(row, col)`.
    ///
    /// ```
    /// use strang::{Matrix, MatrixError};
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.get(2, 2), Ok(&4));
    /// assert_eq!(m.get(0, 1), Err(MatrixError::IndexOutOfRange { index: 0, len: 2 }));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let k = self.offset(row, col)?;
        Ok(&self.data[k])
    }

    /// Overwrite the element at 1-based `(row, col)`, returning the
    /// previous value.
    ///
    /// ```
    /// use strang::Matrix;
    /// let mut m = Matrix::fill(2, 2, 5_u32);
    /// assert_eq!(m.set(1, 2, 9), Ok(5));
    /// assert_eq!(m[(1, 2)], 9);
    /// ```
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<T> {
        let k = self.offset(row, col)?;
        Ok(core::mem::replace(&mut self.data[k], value))
    }

    /// Translate a 1-based `(row, col)` into a buffer offset.
    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> Result<usize> {
        check_index(row, self.nrows)?;
        check_index(col, self.ncols)?;
        Ok((row - 1) * self.ncols + (col - 1))
    }

    /// 0-based element access for internal loops.
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.ncols + j]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[i * self.ncols + j]
    }
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index == 0 || index > len {
        return Err(MatrixError::IndexOutOfRange { index, len });
    }
    Ok(())
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// 1-based element access. Panics when out of range.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset(row, col) {
            Ok(k) => &self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset(row, col) {
            Ok(k) => &mut self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl<T: ElementOps> PartialEq for Matrix<T> {
    /// Shapes must match, then elements are compared pairwise in row-major
    /// order with [`ElementOps::compare`]. Anchors do not take part.
    fn eq(&self, other: &Self) -> bool {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| T::approx_eq(a, b))
    }
}
