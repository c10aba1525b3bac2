//! # strang
//!
//! Generic dense-matrix algebra, no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use strang::Matrix;
//!
//! let a = Matrix::from_rows(3, 3, &[1.0_f64, 4.0, -3.0, -2.0, 8.0, 5.0, 3.0, 4.0, 7.0]).unwrap();
//! let (l, u, singular) = a.to_lu().unwrap();
//! assert!(!singular);
//! assert_eq!((&l * &u).unwrap(), a);
//! assert_eq!(a.det().unwrap(), 248.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions,
//!   row-major `Vec<T>` storage and explicit `zero` / `one` anchors. Indices
//!   are 1-based. Shape-checked operators (`+`, `-`, `*` between matrices)
//!   return [`Result`]; scalar `*`, `/` and negation are infallible.
//!   Includes transpose, row/column swaps, permutation matrices,
//!   concatenation and splitting.
//!
//! - [`linalg`] — [`LuDecomposition`] (Gaussian elimination with partial row
//!   pivoting) and the determinant built on it.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — all matrix elements (`Clone + Debug + Add + Sub + Mul`)
//!   - [`ElementOps`] — anchors and the equality comparator: exact for
//!     integers, absolute machine-epsilon tolerance for `f32` / `f64`
//!
//! - [`double`] — [`DoubleMatrix`], an `f64` facade for foreign bindings.
//!
//! - [`error`] — [`MatrixError`] and the crate [`Result`] alias.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` |
//! | `libm`  | always  | Pure-Rust software float fallback (not a feature) |
//!
//! Without `std` the crate is `no_std` and float math falls back to `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod double;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use double::DoubleMatrix;
pub use error::{MatrixError, Result};
pub use linalg::LuDecomposition;
pub use matrix::Matrix;
pub use matrix::aliases::{Matrixf32, Matrixf64, Matrixi32, Matrixi64, Matrixu32, Matrixu64};
pub use traits::{ElementOps, Scalar};
