use criterion::{criterion_group, criterion_main, Criterion};
use strang::Matrix;

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant matrices, so LU never meets a zero pivot
// ---------------------------------------------------------------------------

fn dominant(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| (i * j) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 })
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");

    for n in [4, 16, 64] {
        let a = Matrix::from_fn(n, n, |i, j| (i * n + j) as f64);
        let m = Matrix::from_fn(n, n, |i, j| (i + j) as f64);
        g.bench_function(format!("{n}x{n}"), |b| {
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Structural operations
// ---------------------------------------------------------------------------

fn transpose(c: &mut Criterion) {
    let a = Matrix::from_fn(64, 48, |i, j| (i * 48 + j) as f64);
    c.bench_function("transpose_64x48", |b| {
        b.iter(|| std::hint::black_box(&a).transpose())
    });
}

fn swap_rows(c: &mut Criterion) {
    let a = dominant(64);
    c.bench_function("swap_rows_64", |b| {
        b.iter(|| std::hint::black_box(&a).swap_rows(1, 64))
    });
}

// ---------------------------------------------------------------------------
// LU / determinant
// ---------------------------------------------------------------------------

fn lu(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu");

    for n in [4, 16, 32] {
        let a = dominant(n);
        g.bench_function(format!("{n}x{n}"), |b| b.iter(|| std::hint::black_box(&a).lu()));
    }

    g.finish();
}

fn det(c: &mut Criterion) {
    let a = dominant(16);
    c.bench_function("det_16x16", |b| b.iter(|| std::hint::black_box(&a).det()));
}

criterion_group!(benches, matmul, transpose, swap_rows, lu, det);
criterion_main!(benches);
