//! Out-of-place partitioning around a pivot picked by position.

/// The result of splitting a sequence around one of its elements.
///
/// `left` holds every other element that is not greater than `pivot`, `right` every element that
/// is. Once both sides are sorted, `left ++ [pivot] ++ right` is sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<T> {
    pub left: Vec<T>,
    pub pivot: T,
    pub right: Vec<T>,
}

impl<T> Partition<T> {
    /// Joins the three parts in order.
    pub fn concat(self) -> Vec<T> {
        let Partition {
            mut left,
            pivot,
            right,
        } = self;

        left.reserve(right.len() + 1);
        left.push(pivot);
        left.extend(right);

        left
    }
}

/// Splits `v` around the element at `pivot_pos`.
///
/// Only the pivot position itself is excluded. Elements equal to the pivot value at any other
/// position are compared like everything else and end up in `left`. Relative order is preserved
/// on both sides.
///
/// Panics if `pivot_pos` is out of bounds.
pub fn partition_at<T, F>(v: &[T], pivot_pos: usize, is_less: &mut F) -> Partition<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let pivot = v[pivot_pos].clone();

    let mut left = Vec::new();
    let mut right = Vec::new();

    for (i, elem) in v.iter().enumerate() {
        if i == pivot_pos {
            continue;
        }

        // elem <= pivot is !(pivot < elem), one comparison per element.
        if is_less(&pivot, elem) {
            right.push(elem.clone());
        } else {
            left.push(elem.clone());
        }
    }

    Partition { left, pivot, right }
}
