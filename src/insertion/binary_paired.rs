use super::{insertion_slot, shift_tail};
use crate::{Less, Sortable};

/// Binary insertion sort that inserts two elements per outer iteration.
///
/// Each pair is locally ordered with one compare-swap, its minimum is
/// inserted into the sorted prefix by binary search, and the search for the
/// maximum is then restricted to the slots right of the minimum. That roughly
/// halves the searched range compared to running the plain binary variant
/// twice, while the move count stays *O*(*n*^2) worst-case.
pub(super) fn sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    let n = v.len();
    if n >= 2 && is_less(&v[1], &v[0]) {
        v.swap(0, 1);
    }

    // Whether a partner exists is checked per iteration: for n = 3 the loop
    // runs once with no partner and falls through to the single-element path.
    let mut i = 2;
    while i < n {
        if i + 1 < n {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
            }

            // v[i] is the pair minimum, v[i + 1] the maximum.
            let slot = insertion_slot(&v[..i], &v[i], is_less);
            if slot != i {
                v[slot..=i].rotate_right(1);
            }

            // The maximum cannot land left of the minimum, which now sits at
            // `slot`, so only v[slot..=i] needs to be searched.
            let slot_hi = slot + insertion_slot(&v[slot..=i], &v[i + 1], is_less);
            if slot_hi != i + 1 {
                v[slot_hi..=i + 1].rotate_right(1);
            }
        } else {
            shift_tail(&mut v[..=i], is_less);
        }
        i += 2;
    }
}
