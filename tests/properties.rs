//! Property-based checks for indexing, ownership and ordering.

use clin::Tensor;
use proptest::prelude::*;

// 1-4 dimensions, small non-zero extents
fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..6, 1..=4)
}

fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..64)
}

fn vector(data: Vec<i32>) -> Tensor<i32> {
    Tensor::from_vec(&[data.len()], data).unwrap()
}

fn sorted_copy(mut v: Vec<i32>) -> Vec<i32> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn prop_size_is_product(shape in shape_strategy()) {
        let t = Tensor::<u8>::from_shape(&shape);
        prop_assert_eq!(t.size(), shape.iter().product::<usize>());
        prop_assert_eq!(t.rank(), shape.len());
        prop_assert_eq!(t.shape(), shape.as_slice());
    }

    #[test]
    fn prop_index_is_a_bijection(shape in shape_strategy()) {
        let t = Tensor::<u8>::from_shape(&shape);
        let mut seen = vec![false; t.size()];

        for flat in 0..t.size() {
            let coords = t.desc().unravel(flat).unwrap();
            let back = t.index(&coords).unwrap();
            prop_assert_eq!(back, flat);
            prop_assert!(!seen[back]);
            seen[back] = true;
        }
        prop_assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn prop_copy_is_independent(data in prop::collection::vec(-50i32..50, 1..32)) {
        let a = vector(data.clone());
        let mut b = a.clone();
        b.set(0, data[0] + 1).unwrap();
        prop_assert_eq!(*a.get(0).unwrap(), data[0]);
    }

    #[test]
    fn prop_move_transfers_everything(shape in shape_strategy()) {
        let mut a = Tensor::<i64>::ones(&shape);
        let mut b = Tensor::new();
        b.move_from(&mut a);
        prop_assert_eq!(b.shape(), shape.as_slice());
        prop_assert_eq!(b.sum(), b.size() as i64);
        prop_assert_eq!(a.size(), 0);
        prop_assert_eq!(a.rank(), 0);
    }

    #[test]
    fn prop_sort_is_sorted_permutation(data in values_strategy()) {
        let mut t = vector(data.clone());
        t.sort(false);
        prop_assert!(t.is_sorted());
        prop_assert_eq!(t.as_slice().to_vec(), sorted_copy(data));
    }

    #[test]
    fn prop_reverse_sort_is_non_increasing(data in values_strategy()) {
        let mut t = vector(data.clone());
        t.sort(true);
        prop_assert!(t.as_slice().windows(2).all(|w| w[0] >= w[1]));

        let mut expected = sorted_copy(data);
        expected.reverse();
        prop_assert_eq!(t.as_slice().to_vec(), expected);
    }

    #[test]
    fn prop_reverse_is_self_inverse(data in values_strategy()) {
        let mut t = vector(data.clone());
        t.reverse();
        t.reverse();
        prop_assert_eq!(t.as_slice(), data.as_slice());
    }

    #[test]
    fn prop_mode_has_max_frequency(data in values_strategy()) {
        let t = vector(data.clone());
        let modes = t.mode();
        prop_assert_eq!(modes.is_empty(), data.is_empty());

        let count = |v: i32| data.iter().filter(|&&x| x == v).count();
        let best = data.iter().map(|&v| count(v)).max().unwrap_or(0);
        for &m in &modes {
            prop_assert_eq!(count(m), best);
        }
        let expected: Vec<i32> = {
            let mut vals: Vec<i32> = data.iter().copied().filter(|&v| count(v) == best).collect();
            vals.sort();
            vals.dedup();
            vals
        };
        prop_assert_eq!(modes, expected);
    }
}
