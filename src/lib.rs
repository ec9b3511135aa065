//! Fixed-pivot and randomized-pivot quicksort, plus the harness that times how both scale.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_with_rng<T, R>(v: &[T], _rng: &mut R) -> Vec<T>
            where
                T: Ord + Clone,
                R: rand::Rng + ?Sized,
            {
                sort(v)
            }
        }
    };
    ($name:expr, uses_rng) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_with_rng<T, R>(v: &[T], rng: &mut R) -> Vec<T>
            where
                T: Ord + Clone,
                R: rand::Rng + ?Sized,
            {
                sort_with_rng(v, rng)
            }
        }
    };
}

pub mod analysis;
pub mod error;
pub mod experiment;
pub mod measure;
pub mod patterns;
pub mod plot;
pub mod quicksort;

pub use error::{Error, Result};
pub use quicksort::{fixed_pivot, random_pivot};
pub use sort_test_tools::Sort;
