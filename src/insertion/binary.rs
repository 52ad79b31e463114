use super::insertion_slot;
use crate::{Less, Sortable};

/// Sorts a slice using binary insertion sort: the slot for each element is
/// found by binary search over the sorted prefix, then the displaced block is
/// rotated right by one instead of swapping element by element.
///
/// *O*(*n* log *n*) comparisons, *O*(*n*^2) moves worst-case. The search
/// places each element after all equal elements already in the prefix, so the
/// sort is stable.
pub(super) fn sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    for i in 1..v.len() {
        let slot = insertion_slot(&v[..i], &v[i], is_less);
        if slot != i {
            v[slot..=i].rotate_right(1);
        }
    }
}
