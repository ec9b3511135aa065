//! Recursive quicksort that picks its pivot uniformly at random on every call.
//!
//! Expected O(n log n) comparisons no matter how the input is arranged. The random source is
//! passed in, so a seeded generator makes a run reproducible.

use rand::Rng;

use crate::quicksort::partition::{partition_at, Partition};

sort_impl!("quicksort_random_pivot", uses_rng);

/// Returns a sorted copy of `v`, drawing pivots from the thread local generator.
#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_with_rng(v, &mut rand::thread_rng())
}

/// Returns a sorted copy of `v`, drawing pivots from `rng`.
#[inline]
pub fn sort_with_rng<T, R>(v: &[T], rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    quicksort(v, rng, &mut |a: &T, b: &T| a.lt(b))
}

/// Like [`sort_with_rng`], also returning how many element comparisons were made.
pub fn sort_counting_comparisons<T, R>(v: &[T], rng: &mut R) -> (Vec<T>, u64)
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let mut comparisons = 0u64;
    let sorted = quicksort(v, rng, &mut |a: &T, b: &T| {
        comparisons += 1;
        a.lt(b)
    });

    (sorted, comparisons)
}

fn quicksort<T, R, F>(v: &[T], rng: &mut R, is_less: &mut F) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return v.to_vec();
    }

    let pivot_pos = rng.gen_range(0..len);
    let Partition { left, pivot, right } = partition_at(v, pivot_pos, is_less);

    Partition {
        left: quicksort(&left, rng, is_less),
        pivot,
        right: quicksort(&right, rng, is_less),
    }
    .concat()
}
