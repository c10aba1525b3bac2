use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::{Float, One, Zero};

/// Trait for types that can be stored in a [`Matrix`](crate::Matrix).
///
/// Blanket-implemented for all types satisfying the bounds. The engine never
/// asks `T` for its own 0 or 1: every matrix carries explicit anchors, so
/// this trait only needs the ring operations.
pub trait Scalar: Clone + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> {}

impl<T: Clone + Debug + Add<Output = T> + Sub<Output = T> + Mul<Output = T>> Scalar for T {}

/// Per-type element capabilities: anchors and the equality comparator.
///
/// Implemented for every primitive integer type with exact comparison and
/// for `f32` / `f64` with an absolute machine-epsilon tolerance. Matrix
/// equality, LU pivot search and the anchor-free constructors all go through
/// this trait. `PartialEq` stays available for bit-exact checks.
///
/// ```
/// use core::cmp::Ordering;
/// use strang::ElementOps;
///
/// assert_eq!(i32::compare(&3, &3), Ordering::Equal);
/// assert_eq!(i32::compare(&3, &2), Ordering::Greater);
///
/// // 0.1 + 0.2 differs from 0.3 by less than f64::EPSILON
/// assert_eq!(f64::compare(&(0.1 + 0.2), &0.3), Ordering::Equal);
/// assert_eq!(f64::epsilon(), Some(f64::EPSILON));
/// assert_eq!(u8::epsilon(), None);
/// ```
pub trait ElementOps: Scalar + PartialEq {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Three-way comparison. `Equal` is the only outcome matrix equality
    /// cares about; for floats it is a tolerance band, not bit identity.
    fn compare(a: &Self, b: &Self) -> Ordering;

    /// Absolute comparison tolerance, `None` for exact types.
    fn epsilon() -> Option<Self>;

    /// Whether `a` and `b` compare `Equal`.
    #[inline]
    fn approx_eq(a: &Self, b: &Self) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }
}

macro_rules! impl_element_ops_exact {
    ($($t:ty),*) => {
        $(
            impl ElementOps for $t {
                #[inline] fn zero() -> $t { <$t as Zero>::zero() }
                #[inline] fn one() -> $t { <$t as One>::one() }

                #[inline]
                fn compare(a: &$t, b: &$t) -> Ordering {
                    if a > b {
                        Ordering::Greater
                    } else if a == b {
                        Ordering::Equal
                    } else {
                        Ordering::Less
                    }
                }

                #[inline] fn epsilon() -> Option<$t> { None }
            }
        )*
    };
}

impl_element_ops_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_element_ops_float {
    ($($t:ty),*) => {
        $(
            impl ElementOps for $t {
                #[inline] fn zero() -> $t { <$t as Zero>::zero() }
                #[inline] fn one() -> $t { <$t as One>::one() }

                #[inline]
                fn compare(a: &$t, b: &$t) -> Ordering {
                    if Float::abs(*a - *b) < <$t as Float>::epsilon() {
                        Ordering::Equal
                    } else if a > b {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    }
                }

                #[inline] fn epsilon() -> Option<$t> { Some(<$t as Float>::epsilon()) }
            }
        )*
    };
}

impl_element_ops_float!(f32, f64);
