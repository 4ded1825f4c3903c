//! Property-based tests over randomly generated data and strides.

use proptest::prelude::*;
use quickcheck::quickcheck;
use strider::prelude::*;

proptest! {
    #[test]
    fn adapt_round_trips_any_vec(data in proptest::collection::vec(any::<i64>(), 0..256)) {
        let round_tripped: Vec<i64> = adapt(&data).map(|x: &i64| *x).collect();
        prop_assert_eq!(round_tripped, data);
    }

    #[test]
    fn map_matches_std_iterator_map(data in proptest::collection::vec(any::<i32>(), 0..128)) {
        let ours: Vec<i64> = adapt(&data).map(|x: &i32| i64::from(*x) * 3).collect();
        let std: Vec<i64> = data.iter().map(|x| i64::from(*x) * 3).collect();
        prop_assert_eq!(ours, std);
    }

    #[test]
    fn filter_matches_std_iterator_filter(data in proptest::collection::vec(any::<i16>(), 0..128)) {
        let ours: Vec<&i16> = adapt(&data).filter(|x: &i16| *x % 2 == 0).collect();
        let std: Vec<&i16> = data.iter().filter(|x| **x % 2 == 0).collect();
        prop_assert_eq!(ours, std);
    }

    #[test]
    fn filtering_twice_changes_nothing(data in proptest::collection::vec(any::<i32>(), 0..128)) {
        let pred = |x: &i32| *x > 0;
        let once: Vec<&i32> = adapt(&data).filter(pred).collect();
        let twice: Vec<&i32> = adapt(&data).filter(pred).filter(pred).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reversal_is_an_involution(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let twice: Vec<&u8> = adapt(&data).rev().rev().collect();
        let plain: Vec<&u8> = adapt(&data).collect();
        prop_assert_eq!(twice, plain);
    }

    #[test]
    fn reversal_matches_std_rev(data in proptest::collection::vec(any::<i32>(), 0..128)) {
        let ours: Vec<&i32> = adapt(&data).rev().collect();
        let std: Vec<&i32> = data.iter().rev().collect();
        prop_assert_eq!(ours, std);
    }

    #[test]
    fn enumerate_indices_are_consecutive(data in proptest::collection::vec(any::<i8>(), 0..128)) {
        let pairs: Vec<(usize, &i8)> = adapt(&data).enumerate().collect();
        for (expected, (index, value)) in pairs.iter().enumerate() {
            prop_assert_eq!(*index, expected);
            prop_assert_eq!(*value, &data[expected]);
        }
    }

    #[test]
    fn zip_stops_at_the_shorter_source(
        a in proptest::collection::vec(any::<i32>(), 0..64),
        b in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let pairs: Vec<(&i32, &i32)> = zip(adapt(&a), adapt(&b)).collect();
        prop_assert_eq!(pairs.len(), a.len().min(b.len()));
        for (i, (x, y)) in pairs.iter().enumerate() {
            prop_assert_eq!(*x, &a[i]);
            prop_assert_eq!(*y, &b[i]);
        }
    }

    #[test]
    fn counting_agrees_with_std_step_by(begin in -200i64..200, step in 1usize..16, span in 0i64..400) {
        let end = begin + span;
        let ours: Vec<i64> = range_by(begin, step as i64, end).collect();
        let std: Vec<i64> = (begin..end).step_by(step).collect();
        prop_assert_eq!(ours, std);
    }

    #[test]
    fn len_is_exact_for_random_access_pipelines(data in proptest::collection::vec(any::<u16>(), 0..128)) {
        let r = adapt(&data).map(|x: &u16| u32::from(*x)).rev();
        prop_assert_eq!(r.len(), Some(data.len()));
        let driven: Vec<u32> = r.collect();
        prop_assert_eq!(driven.len(), data.len());
    }
}

quickcheck! {
    fn qc_collect_preserves_order(data: Vec<i32>) -> bool {
        let collected: Vec<i32> = adapt(&data).map(|x: &i32| *x).collect();
        collected == data
    }

    fn qc_filter_then_map_commutes_with_map_then_filter(data: Vec<i32>) -> bool {
        // An even source value doubles to a multiple of four, so selecting
        // before or after the doubling keeps the same elements.
        let a: Vec<i64> = adapt(&data)
            .filter(|x: &i32| *x % 2 == 0)
            .map(|x: &i32| i64::from(*x) * 2)
            .collect();
        let b: Vec<i64> = adapt(&data)
            .map(|x: &i32| i64::from(*x) * 2)
            .filter(|x: i64| x % 4 == 0)
            .collect();
        a == b
    }

    fn qc_single_pass_source_matches_slice_source(data: Vec<u8>) -> bool {
        let from_iter: Vec<u8> = adapt_iter(data.iter().copied()).collect();
        from_iter == data
    }
}
