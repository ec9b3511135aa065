//! Recursive quicksort that always picks the last element as pivot.
//!
//! Sorted, reverse sorted and all-equal inputs degrade it to quadratic time and linear recursion
//! depth.

use crate::quicksort::partition::{partition_at, Partition};

sort_impl!("quicksort_fixed_pivot");

/// Returns a sorted copy of `v`.
#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b))
}

/// Like [`sort`], also returning how many element comparisons were made.
pub fn sort_counting_comparisons<T>(v: &[T]) -> (Vec<T>, u64)
where
    T: Ord + Clone,
{
    let mut comparisons = 0u64;
    let sorted = quicksort(v, &mut |a: &T, b: &T| {
        comparisons += 1;
        a.lt(b)
    });

    (sorted, comparisons)
}

fn quicksort<T, F>(v: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return v.to_vec();
    }

    let Partition { left, pivot, right } = partition_at(v, v.len() - 1, is_less);

    Partition {
        left: quicksort(&left, is_less),
        pivot,
        right: quicksort(&right, is_less),
    }
    .concat()
}
