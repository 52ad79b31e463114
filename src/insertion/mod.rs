use crate::{Less, Sortable};

mod basic;
mod binary;
mod binary_paired;
mod paired;

pub(crate) fn basic_insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    basic::sort(v, is_less);
    debug_assert!(v.is_sorted_by(|a, b| !is_less(b, a)));
}

pub(crate) fn binary_insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    binary::sort(v, is_less);
    debug_assert!(v.is_sorted_by(|a, b| !is_less(b, a)));
}

pub(crate) fn binary_paired_insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    binary_paired::sort(v, is_less);
    debug_assert!(v.is_sorted_by(|a, b| !is_less(b, a)));
}

pub(crate) fn paired_insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    paired::sort(v, is_less);
    debug_assert!(v.is_sorted_by(|a, b| !is_less(b, a)));
}

/// Shifts the last element of `v` to the left until it encounters a smaller
/// or equal element. Equal neighbors never swap, which keeps every caller
/// stable.
pub(super) fn shift_tail<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let mut j = v.len() - 1;
    while j > 0 && is_less(&v[j], &v[j - 1]) {
        v.swap(j, j - 1);
        j -= 1;
    }
}

/// Returns the index one past the rightmost element of the sorted slice `v`
/// that is `<=` key, i.e. the slot where inserting `key` keeps `v` sorted and
/// places it after all equal elements.
pub(super) fn insertion_slot<T, F>(v: &[T], key: &T, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut s = 0;
    let mut e = v.len();
    while s < e {
        let m = s + (e - s) / 2;
        if is_less(key, &v[m]) {
            e = m;
        } else {
            s = m + 1;
        }
    }
    s
}
