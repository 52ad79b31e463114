use super::shift_tail;
use crate::{Less, Sortable};

/// Paired insertion sort with a merge-style shift: displaced prefix elements
/// move in one right-to-left walk per pair instead of being searched for.
///
/// The walk shifts everything strictly greater than the pair maximum two
/// slots to the right, drops the maximum and minimum into the opened gap, and
/// then settles the minimum further left with bounded adjacent swaps. All
/// comparisons are strict, so equal elements keep their order.
pub(super) fn sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Sortable,
    F: Less<T>,
{
    let n = v.len();
    if n < 2 {
        return;
    }
    if is_less(&v[1], &v[0]) {
        v.swap(0, 1);
    }

    let mut i = 2;
    while i < n {
        if i + 1 < n {
            let (min_num, max_num) = if is_less(&v[i + 1], &v[i]) {
                (v[i + 1].clone(), v[i].clone())
            } else {
                (v[i].clone(), v[i + 1].clone())
            };

            // Walk the sorted prefix right to left, moving every element
            // greater than the pair maximum two slots to the right.
            let mut j = i;
            let mut k = i + 1;
            while j > 0 && is_less(&max_num, &v[j - 1]) {
                v[k] = v[j - 1].clone();
                k -= 1;
                j -= 1;
            }
            v[j + 1] = max_num;
            v[j] = min_num;

            // The minimum may belong further left than the maximum did.
            let mut l = j;
            while l > 0 && is_less(&v[l], &v[l - 1]) {
                v.swap(l, l - 1);
                l -= 1;
            }
        } else {
            shift_tail(&mut v[..=i], is_less);
        }
        i += 2;
    }
}
