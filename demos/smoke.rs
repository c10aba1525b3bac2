//! Builds a few matrices and prints what the engine does with them.
//!
//! Run with `RUST_LOG=debug cargo run --example smoke` to see LU diagnostics.

use strang::{DoubleMatrix, Matrix, Result};

fn main() -> Result<()> {
    env_logger::init();

    let id = Matrix::<i32>::eye(3, 3);
    println!("{}", (&id + &id)?);
    println!("{}", (&(&id - &id)? - &id)?);
    println!("{}", 999_i32 * &id * 666);

    let a = Matrix::fill(3, 3, 1_i32);
    let b = Matrix::fill(3, 4, 1_i32);
    println!("\n{a} *\n{b} =\n{}", (&a * &b)?);

    let m = Matrix::from_rows(3, 3, &[1.0, 4.0, -3.0, -2.0, 8.0, 5.0, 3.0, 4.0, 7.0])?;
    let (l, u, singular) = m.to_lu()?;
    println!("\nL =\n{l}\nU =\n{u}\nsingular: {singular}, det = {}", m.det()?);

    let singular = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0])?;
    println!("\ndet of\n{singular}\n= {}", singular.det()?);

    let d = DoubleMatrix::identity(2, 2).scalar_mul(2.5);
    println!("\n{}", d.as_string());

    if let Err(e) = &a * &Matrix::fill(4, 3, 1) {
        println!("\n3x3 * 4x3: {e}");
    }

    Ok(())
}
