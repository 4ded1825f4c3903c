//! End-to-end pipeline tests through the public facade.

use strider::prelude::*;
use strider::{fast, BoundsErrorKind, CursorOp};

#[test]
fn filter_map_pipeline_over_a_vec() {
    let data = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let result: Vec<i32> = adapt(&data)
        .filter(|x: &i32| x % 2 == 0)
        .map(|x: &i32| x * 2)
        .collect();
    assert_eq!(result, vec![4, 8, 12, 16]);
}

#[test]
fn pipelines_are_lazy_until_driven() {
    let data = vec![1, 2, 3];
    let mut calls = 0usize;
    let counting = Shared::new(move |x: &i32| {
        calls += 1;
        (*x, calls)
    });

    // The call counter only moves once the pipeline is driven; both bound
    // cursors share the one transform, so the count is global.
    let touched: Vec<(i32, usize)> = adapt(&data).map(counting).collect();
    assert_eq!(touched, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn enumerate_zip_and_spread_compose() {
    let names = ["ada", "grace", "edsger"];
    let scores = [99, 97, 95];
    let lines: Vec<String> = zip(adapt(&names), adapt(&scores))
        .map(|name: &&str, score: &i32| format!("{name}={score}"))
        .collect();
    assert_eq!(lines, vec!["ada=99", "grace=97", "edsger=95"]);
}

#[test]
fn counting_ranges_feed_pipelines() {
    let result: Vec<i32> = range_by(0, 2, 10).map(|x: i32| x + 1).rev().collect();
    assert_eq!(result, vec![9, 7, 5, 3, 1]);
}

#[test]
fn reversal_of_a_filtered_range() {
    let data = vec![1, 2, 3, 4, 5, 6];
    let result: Vec<&i32> = adapt(&data).filter(|x: &i32| x % 3 != 0).rev().collect();
    assert_eq!(result, vec![&5, &4, &2, &1]);
}

#[test]
fn tiers_degrade_exactly_where_documented() {
    let data = [1, 2, 3];
    assert_eq!(adapt(&data).tier(), Tier::RandomAccess);
    assert_eq!(adapt(&data).map(|x: &i32| *x).tier(), Tier::RandomAccess);
    assert_eq!(adapt(&data).enumerate().tier(), Tier::RandomAccess);
    assert_eq!(adapt(&data).rev().tier(), Tier::RandomAccess);
    assert_eq!(adapt(&data).filter(|_: &i32| true).tier(), Tier::Bidirectional);
    assert_eq!(adapt(&data).zip(adapt(&data)).tier(), Tier::Forward);
    assert_eq!(adapt_iter(data.iter().copied()).tier(), Tier::Input);
}

#[test]
fn checked_cursors_signal_misuse() {
    let a = [1, 2, 3];
    let b = [4, 5, 6];
    let first = adapt(&a).into_bounds().first;
    let stray = adapt(&b).into_bounds().first;

    let err = first.matches(&stray).unwrap_err();
    assert_eq!(err.kind(), BoundsErrorKind::BoundsMismatch);
    assert_eq!(err.op(), CursorOp::Compare);
    assert_eq!(err.to_string(), "compare: cursors have mismatched bounds");

    let mut end = adapt(&a).into_bounds().last;
    assert_eq!(end.advance().unwrap_err().kind(), BoundsErrorKind::StepPastEnd);
    assert_eq!(end.get().unwrap_err().kind(), BoundsErrorKind::DerefAtEnd);
}

#[test]
fn unchecked_pipelines_match_checked_ones_on_valid_input() {
    let data = vec![10, 20, 30, 40];
    let checked: Vec<i32> = adapt(&data).filter(|x: &i32| *x > 15).map(|x: &i32| x / 10).collect();
    let unchecked: Vec<i32> = fast::adapt(&data)
        .filter(|x: &i32| *x > 15)
        .map(|x: &i32| x / 10)
        .collect();
    assert_eq!(checked, unchecked);
    assert_eq!(checked, vec![2, 3, 4]);
}

#[test]
fn const_view_demotes_and_delegates() {
    let data = vec![7, 8, 9];
    let viewed: Vec<&i32> = adapt(&data).as_const().rev().collect();
    assert_eq!(viewed, vec![&9, &8, &7]);
}

#[test]
fn between_restricts_to_a_subrange() {
    let data = [0, 1, 2, 3, 4, 5];
    let bounds = adapt(&data).into_bounds();
    let mut from = bounds.first;
    let mut to = bounds.last;
    from.seek(1).unwrap();
    to.seek(-1).unwrap();
    let middle: Vec<&i32> = between(from, to).collect();
    assert_eq!(middle, vec![&1, &2, &3, &4]);
}

#[test]
fn single_pass_sources_run_a_full_pipeline() {
    let words = ["alpha", "beta", "gamma"];
    let lengths: Vec<(usize, usize)> = adapt_iter(words.iter().map(|w| w.len()))
        .enumerate()
        .collect();
    assert_eq!(lengths, vec![(0, 5), (1, 4), (2, 5)]);
}

#[test]
fn exact_size_survives_value_preserving_adaptors() {
    let data = [1, 2, 3, 4, 5];
    let driven = adapt(&data).map(|x: &i32| x * 2).rev().into_iter();
    assert_eq!(driven.len(), 5);
    assert_eq!(driven.size_hint(), (5, Some(5)));
}

#[test]
fn float_counting_is_usable_in_pipelines() {
    let halves: Vec<f64> = range_by(0.0, 0.5, 2.0).collect();
    assert_eq!(halves.len(), 4);
    let sum: f64 = halves.iter().sum();
    assert!((sum - 3.0).abs() < 1e-9);
}
