use super::shift_tail;
use crate::{Less, Sortable};

/// Sorts a slice using plain insertion sort, which is *O*(*n*^2) worst-case
/// and *O*(*n*) on already sorted input.
pub(super) fn sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    for i in 1..v.len() {
        shift_tail(&mut v[..=i], is_less);
    }
}
