use alloc::vec::Vec;
use core::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

use crate::error::{MatrixError, Result};
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Combine two equally shaped matrices cell by cell.
    ///
    /// The result takes the anchors of `rhs`.
    fn zip_with(&self, rhs: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| f(a.clone(), b.clone()))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
            zero: rhs.zero.clone(),
            one: rhs.one.clone(),
        })
    }

    /// Matrix product `(M×N) * (N×P) → (M×P)`.
    ///
    /// Each cell is accumulated from `self`'s zero anchor, and the result
    /// inherits `self`'s anchors. Same as `&a * &b`.
    ///
    /// ```
    /// use strang::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_rows(2, 2, &[4, 3, 2, 1]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c, Matrix::from_rows(2, 2, &[8, 5, 20, 13]).unwrap());
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                op: "*",
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            for k in 0..p {
                let mut acc = self.zero.clone();
                for j in 0..n {
                    acc = acc + self.at(i, j).clone() * rhs.at(j, k).clone();
                }
                data.push(acc);
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
            zero: self.zero.clone(),
            one: self.one.clone(),
        })
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: &T) -> Self {
        self.map(|x| x * scalar.clone())
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

macro_rules! impl_elementwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>>;

            fn $method(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
                self.zip_with(rhs, stringify!($op), |a, b| a $op b)
            }
        }

        impl<T: Scalar> $trait<Matrix<T>> for Matrix<T> {
            type Output = Result<Matrix<T>>;

            fn $method(self, rhs: Matrix<T>) -> Result<Matrix<T>> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Result<Matrix<T>>;

            fn $method(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>>;

            fn $method(self, rhs: Matrix<T>) -> Result<Matrix<T>> {
                self.$method(&rhs)
            }
        }
    };
}

impl_elementwise!(Add, add, +);
impl_elementwise!(Sub, sub, -);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let zero = self.zero.clone();
        self.map(|x| zero.clone() - x)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: Self) -> Result<Matrix<T>> {
        self.matmul(&rhs)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.matmul(rhs)
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: Matrix<T>) -> Result<Matrix<T>> {
        self.matmul(&rhs)
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(&rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = x.clone() * rhs.clone();
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ── Scalar division: matrix * (one / scalar) ────────────────────────

/// Multiplies by `one / rhs`. For integer elements the reciprocal truncates,
/// so `m / 2` is the zero matrix.
impl<T: Scalar + Div<Output = T>> Div<T> for Matrix<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<T: Scalar + Div<Output = T>> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.scale(&(self.one.clone() / rhs))
    }
}

impl<T: Scalar + Div<Output = T>> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        let reciprocal = self.one.clone() / rhs;
        *self *= reciprocal;
    }
}
