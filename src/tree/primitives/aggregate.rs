//! Summable element types.
//!
//! Every node in the tree stores the aggregate of the elements below it.
//! The aggregate here is always a sum: `Default` is the identity (zero) and
//! `combine` is addition.
//!
//! Integer sums wrap on overflow so that a tree never panics on caller
//! input. Float sums are plain IEEE addition.

/// A value that can be summed inside the tree.
pub trait Aggregate: Clone + Default {
    /// Combine two aggregates.
    fn combine(&self, other: &Self) -> Self;
}

macro_rules! wrapping_aggregate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Aggregate for $ty {
                #[inline(always)]
                fn combine(&self, other: &Self) -> Self {
                    return self.wrapping_add(*other);
                }
            }
        )*
    };
}

wrapping_aggregate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_aggregate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Aggregate for $ty {
                #[inline(always)]
                fn combine(&self, other: &Self) -> Self {
                    return *self + *other;
                }
            }
        )*
    };
}

float_aggregate!(f32, f64);
