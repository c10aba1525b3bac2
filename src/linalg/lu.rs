use core::ops::Div;

use log::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::traits::ElementOps;
use crate::Matrix;

#[inline]
fn is_zero<T: ElementOps>(x: &T, zero: &T) -> bool {
    T::approx_eq(x, zero)
}

/// LU decomposition with partial row pivoting of a square matrix.
///
/// Holds `L` (with the row exchanges folded back in, so `L * U` is the
/// original matrix), the upper-triangular `U`, the accumulated row
/// permutation, and whether a singular pivot was met.
///
/// Pivoting takes the first row at or below the diagonal whose entry is
/// non-zero under [`ElementOps::compare`], not the largest one. The trailing
/// diagonal entry of `U` marks the matrix singular only when it is exactly
/// the zero anchor.
///
/// # Example
///
/// ```
/// use strang::Matrix;
///
/// let a = Matrix::from_rows(3, 3, &[1.0_f64, 4.0, -3.0, -2.0, 8.0, 5.0, 3.0, 4.0, 7.0]).unwrap();
/// let lu = a.lu().unwrap();
/// assert!(!lu.is_singular());
/// assert_eq!(lu.u()[(3, 3)], 15.5);
/// assert_eq!((lu.l() * lu.u()).unwrap(), a);
/// assert_eq!(lu.det(), 248.0);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
    perm: Matrix<T>,
    singular: bool,
    swaps: usize,
}

impl<T: ElementOps + Div<Output = T>> LuDecomposition<T> {
    /// Decompose a square matrix.
    ///
    /// A singular matrix is not an error: the decomposition is still
    /// produced and [`is_singular`](Self::is_singular) reports it.
    /// Non-square input fails with [`MatrixError::NotSquare`].
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: a.nrows,
                ncols: a.ncols,
            });
        }
        let n = a.nrows;
        let zero = a.zero.clone();
        let one = a.one.clone();

        let mut u = a.clone();
        let mut l = Matrix::identity(n, n, zero.clone(), one.clone());
        let mut perm = l.clone();
        let mut singular = false;
        let mut swaps = 0;

        for col in 0..n.saturating_sub(1) {
            let Some(pivot_row) = (col..n).find(|&r| !is_zero(u.at(r, col), &zero)) else {
                debug!("LU: pivot column {} has no non-zero entry", col + 1);
                singular = true;
                continue;
            };

            if pivot_row != col {
                trace!("LU: exchanging rows {} and {}", col + 1, pivot_row + 1);
                let exchange = Matrix::permutation(n, zero.clone(), one.clone(), col + 1, pivot_row + 1)?;
                u = exchange.matmul(&u)?;
                perm = exchange.matmul(&perm)?;
                // Multipliers already stored in L travel with their rows
                for k in 0..col {
                    l.data.swap(col * n + k, pivot_row * n + k);
                }
                swaps += 1;
            }

            let pivot = u.at(col, col).clone();
            for row in (col + 1)..n {
                if is_zero(u.at(row, col), &zero) {
                    continue;
                }
                let factor = u.at(row, col).clone() / pivot.clone();
                *l.at_mut(row, col) = factor.clone();
                for j in (col + 1)..n {
                    let val = u.at(col, j).clone();
                    let cur = u.at(row, j).clone();
                    *u.at_mut(row, j) = cur - factor.clone() * val;
                }
                *u.at_mut(row, col) = zero.clone();
            }
        }

        // Exact comparison, unlike the pivot search
        if n > 0 && *u.at(n - 1, n - 1) == zero {
            debug!("LU: trailing pivot U[{n}][{n}] is zero");
            singular = true;
        }

        // Undo the row reordering so that L * U reproduces `a` itself
        let l = perm.transpose().matmul(&l)?;

        Ok(Self {
            l,
            u,
            perm,
            singular,
            swaps,
        })
    }

    /// Determinant: product of `U`'s diagonal, negated once per row
    /// exchange, or the zero anchor when singular.
    pub fn det(&self) -> T {
        if self.singular {
            return self.u.zero.clone();
        }
        let n = self.u.nrows;
        let mut d = self.u.one.clone();
        for i in 0..n {
            d = d * self.u.at(i, i).clone();
        }
        if self.swaps % 2 == 1 {
            d = self.u.zero.clone() - d;
        }
        d
    }
}

impl<T> LuDecomposition<T> {
    /// The lower factor, with row exchanges undone.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper-triangular factor.
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Accumulated row permutation `P`, so that `P * A` is the pivoted matrix.
    #[inline]
    pub fn permutation(&self) -> &Matrix<T> {
        &self.perm
    }

    /// Whether a degenerate pivot column or a zero trailing pivot was met.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Number of row exchanges performed while pivoting.
    #[inline]
    pub fn row_swaps(&self) -> usize {
        self.swaps
    }

    /// Consume the decomposition, returning `(L, U, is_singular)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>, bool) {
        (self.l, self.u, self.singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(n: usize, values: &[f64]) -> Matrix<f64> {
        Matrix::from_rows(n, n, values).unwrap()
    }

    #[test]
    fn reference_decomposition() {
        let a = m(3, &[1.0, 4.0, -3.0, -2.0, 8.0, 5.0, 3.0, 4.0, 7.0]);
        let (l, u, singular) = LuDecomposition::new(&a).unwrap().into_parts();
        assert!(!singular);
        assert_eq!(l, m(3, &[1.0, 0.0, 0.0, -2.0, 1.0, 0.0, 3.0, -0.5, 1.0]));
        assert_eq!(u, m(3, &[1.0, 4.0, -3.0, 0.0, 16.0, -1.0, 0.0, 0.0, 15.5]));
        assert_eq!((&l * &u).unwrap(), a);
    }

    #[test]
    fn pivoting_reconstructs_original() {
        let a = m(3, &[0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert!(!lu.is_singular());
        assert_eq!(lu.row_swaps(), 1);
        assert_eq!((lu.l() * lu.u()).unwrap(), a);
        // P * A == (P * L) * U with P * L unit lower triangular
        let pl = (lu.permutation() * lu.l()).unwrap();
        for i in 1..=3 {
            assert_eq!(pl[(i, i)], 1.0);
            for j in (i + 1)..=3 {
                assert_eq!(pl[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn pivoting_with_stored_multipliers() {
        // Second pivot column needs an exchange after row 3's multiplier is stored
        let a = m(3, &[1.0, 2.0, 3.0, 2.0, 4.0, 7.0, 3.0, 5.0, 1.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert!(!lu.is_singular());
        assert_eq!(lu.row_swaps(), 1);
        assert_eq!((lu.l() * lu.u()).unwrap(), a);
        assert!((lu.det() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_column_is_singular() {
        let a = m(3, &[0.0, 1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert!(lu.is_singular());
        assert_eq!(lu.det(), 0.0);
    }

    #[test]
    fn zero_trailing_pivot_is_singular() {
        let a = m(2, &[1.0, 2.0, 2.0, 4.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert!(lu.is_singular());
        assert_eq!(lu.u()[(2, 2)], 0.0);
        assert_eq!((lu.l() * lu.u()).unwrap(), a);
    }

    #[test]
    fn tiny_trailing_pivot_is_not_singular() {
        let a = m(1, &[1e-17]);
        let (_, u, singular) = LuDecomposition::new(&a).unwrap().into_parts();
        assert!(!singular);
        assert_eq!(u[(1, 1)], 1e-17);
        assert_eq!(a.det().unwrap(), 1e-17);

        // Sub-epsilon trailing entry under a regular first pivot
        let b = m(2, &[1.0, 0.0, 0.0, 1e-17]);
        let lu = LuDecomposition::new(&b).unwrap();
        assert!(!lu.is_singular());
        assert_eq!(lu.det(), 1e-17);
    }

    #[test]
    fn one_by_one() {
        let lu = LuDecomposition::new(&m(1, &[5.0])).unwrap();
        assert!(!lu.is_singular());
        assert_eq!(lu.det(), 5.0);
        assert!(LuDecomposition::new(&m(1, &[0.0])).unwrap().is_singular());
    }

    #[test]
    fn empty() {
        let lu = LuDecomposition::new(&Matrix::<f64>::zeros(0, 0)).unwrap();
        assert!(!lu.is_singular());
        assert_eq!(lu.det(), 1.0);
    }

    #[test]
    fn not_square() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            LuDecomposition::new(&a).unwrap_err(),
            MatrixError::NotSquare { nrows: 2, ncols: 3 },
        );
    }

    #[test]
    fn integer_elements() {
        let a = Matrix::from_rows(2, 2, &[2_i64, 1, 4, 3]).unwrap();
        let lu = LuDecomposition::new(&a).unwrap();
        assert_eq!(lu.l().as_slice(), &[1, 0, 2, 1]);
        assert_eq!(lu.u().as_slice(), &[2, 1, 0, 1]);
        assert_eq!(lu.det(), 2);
    }
}
