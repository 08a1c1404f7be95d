use rstest::rstest;
use tributary_core::common_tests::cursor_contract_tests::*;
use tributary_core::{
    Cursor, PairCursor, empty, from_fn, from_vec, inc_range_by, range, range_by, repeat,
    replayable, seq, slice,
};

static PRIMES: [u32; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

fn counter(limit: i32) -> impl Cursor<Item = i32> {
    let mut n = 0;
    from_fn(move || {
        n += 1;
        (n <= limit).then_some(n)
    })
}

#[rstest]
#[case::range(range(0, 10))]
#[case::slice(slice(&PRIMES).map(|p| *p as i32))]
#[case::from_vec(from_vec(vec![4, 8, 15, 16, 23, 42]))]
#[case::seq(seq(vec![1, 2, 3]))]
#[case::from_fn(counter(4))]
#[case::filter(range(0, 20).filter(|x| x % 3 == 0))]
#[case::take(repeat(7).take(5))]
#[case::chain(range(0, 3).chain(range(10, 13)))]
#[case::kv_values(range(5, 9).enumerate().as_kv().map(|kv| kv.value))]
fn test_nothing_current_before_advance<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_value_none_before_advance(cursor);
}

#[rstest]
#[case::range(range(0, 10))]
#[case::empty(empty())]
#[case::seq(seq(vec![1, 2, 3]))]
#[case::from_fn(counter(4))]
#[case::filter_map(range(0, 10).filter_map(|x| (x > 4).then_some(x * 2)))]
#[case::take(repeat(7).take(5))]
#[case::chain(range(0, 3).chain(empty()))]
fn test_exhaustion<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_exhaustion_is_idempotent(cursor);
}

#[rstest]
#[case::range(range(0, 10))]
#[case::repeat(repeat(1))]
#[case::seq(seq(0..))]
#[case::from_fn(counter(100))]
#[case::map(range(0, 10).map(|x| x + 1))]
#[case::filter(repeat(2).filter(|x| *x > 0))]
#[case::take(range(0, 100).take(3))]
#[case::chain(range(0, 3).chain(repeat(9)))]
#[case::kv_values(range(5, 9).enumerate().as_kv().map(|kv| kv.value))]
fn test_abort<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_abort_is_idempotent(cursor);
}

#[rstest]
#[case::range(range(0, 10))]
#[case::repeat(repeat(1))]
#[case::seq(seq(0..))]
#[case::map(range(0, 10).map(|x| x + 1))]
#[case::take(repeat(3).take(4))]
#[case::chain(range(0, 2).chain(repeat(9)))]
fn test_abort_while_active<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_abort_mid_run(cursor);
}

#[rstest]
#[case::range(range(0, 10))]
#[case::range_by(range_by(0, 100, 7))]
#[case::inc_range_by(inc_range_by(10, -10, -4))]
#[case::empty(empty())]
#[case::seq_known(seq(vec![1, 2, 3]))]
#[case::seq_hinted(seq((0..50).filter(|x| x % 7 == 0)))]
#[case::from_fn(counter(4))]
#[case::filter(range(0, 20).filter(|x| x % 3 == 0))]
#[case::take_infinite(repeat(7).take(5))]
#[case::take_short(range(0, 2).take(5))]
#[case::take_unknown(counter(10).take(3))]
#[case::chain(range(0, 3).chain(range(10, 13)))]
#[case::chain_unknown(counter(3).chain(range(0, 3)))]
fn test_size<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_size_bounds_collect(cursor);
}

#[rstest]
#[case::range(|| range(0, 10))]
#[case::seq(|| seq(vec![1, 2, 3]))]
#[case::from_fn(|| counter(6))]
#[case::filter(|| range(0, 20).filter(|x| x % 3 == 0))]
#[case::take(|| repeat(7).take(5))]
#[case::zip_keys(|| range(0, 5).zip(range(10, 20)).as_kv().map(|kv| kv.key + kv.value))]
fn test_native_iterator_view<C, F>(#[case] make: F)
where
    C: Cursor<Item = i32>,
    F: Fn() -> C,
{
    test_iter_matches_pulls(make);
}

#[rstest]
#[case::range(range(0, 10))]
#[case::slice(slice(&PRIMES).map(|p| *p as i32))]
#[case::from_vec(from_vec(vec![4, 8, 15, 16, 23, 42]))]
#[case::replayable(replayable((0..30).step_by(4)))]
#[case::filter(range(0, 20).filter(|x| x % 3 == 0))]
#[case::take(repeat(7).take(5))]
#[case::chain(range(0, 3).chain(range(10, 13)))]
#[case::enumerate(range(3, 6).enumerate().map2(|i, x| (i, x * i as i32)).as_kv().map(|kv| kv.value))]
fn test_reset<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_reset_replays(cursor);
}

#[rstest]
#[case::range(range(0, 10))]
#[case::repeat(repeat(1))]
#[case::filter(range(0, 20).filter(|x| x % 3 == 0))]
#[case::take(range(0, 100).take(3))]
#[case::chain(range(0, 3).chain(range(10, 13)))]
fn test_revive_after_abort<C: Cursor<Item = i32>>(#[case] cursor: C) {
    test_reset_after_abort(cursor);
}

#[rstest]
#[case::range(|| range(0, 10), 4)]
#[case::from_vec(|| from_vec(vec![1, 1, 2, 3, 5, 8]), 2)]
#[case::seq(|| seq(vec![9, 8, 7]), 1)]
#[case::map(|| range(0, 6).map(|x| x * x), 3)]
#[case::chain(|| range(0, 3).chain(range(10, 13)), 4)]
fn test_early_exit<C, F>(#[case] make: F, #[case] stop_after: usize)
where
    C: Cursor<Item = i32>,
    F: Fn() -> C,
{
    test_iter_early_exit(make, stop_after);
}
