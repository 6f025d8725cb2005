//! Recursive top-down merge sort over a contiguous element range.

/// Sorts `arr` in place, non-decreasing, or non-increasing when `reverse` is set.
///
/// Each level copies its two halves into temporary buffers, sorts them
/// ascending, then merges back. Only the outermost merge honours `reverse`: it
/// writes the ascending merge order from the back of `arr` to the front. Equal
/// elements are not guaranteed to keep their relative order.
pub fn merge_sort<T: Clone + PartialOrd>(arr: &mut [T], reverse: bool) {
    let sz = arr.len();
    if sz <= 1 {
        return;
    }

    // left gets floor(sz / 2), right the remainder
    let lsz = sz / 2;
    let mut left = arr[..lsz].to_vec();
    let mut right = arr[lsz..].to_vec();

    merge_sort(&mut left, false);
    merge_sort(&mut right, false);

    let slot = |index: usize| if reverse { sz - 1 - index } else { index };

    let mut index = 0;
    let mut l = 0;
    let mut r = 0;
    while l < left.len() && r < right.len() {
        if left[l] < right[r] {
            arr[slot(index)] = left[l].clone();
            l += 1;
        } else {
            arr[slot(index)] = right[r].clone();
            r += 1;
        }
        index += 1;
    }

    // drain whichever half still has elements
    for x in left[l..].iter().chain(right[r..].iter()) {
        arr[slot(index)] = x.clone();
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_ascending() {
        let mut v = vec![5, 3, 9, 1, 1, 8, -2, 7];
        merge_sort(&mut v, false);
        assert_eq!(v, vec![-2, 1, 1, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_sorts_descending() {
        let mut v = vec![5, 3, 9, 1, 1, 8, -2];
        merge_sort(&mut v, true);
        assert_eq!(v, vec![9, 8, 5, 3, 1, 1, -2]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        merge_sort(&mut empty, false);
        assert!(empty.is_empty());

        let mut one = vec![42];
        merge_sort(&mut one, true);
        assert_eq!(one, vec![42]);

        let mut two = vec![1.5, -0.5];
        merge_sort(&mut two, false);
        assert_eq!(two, vec![-0.5, 1.5]);
    }

    #[test]
    fn test_sorts_subslice_only() {
        let mut v = vec![9, 4, 3, 2, 0];
        merge_sort(&mut v[1..4], false);
        assert_eq!(v, vec![9, 2, 3, 4, 0]);
    }
}
