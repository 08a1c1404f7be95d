use std::fmt::Debug;

use crate::cursor::Cursor;
use crate::size::IteratorSize;

/// Nothing is current before the first advance
pub fn test_value_none_before_advance<C: Cursor>(cursor: C) {
    assert!(cursor.value().is_none());
}

/// Once exhausted, every later advance fails and nothing is current
pub fn test_exhaustion_is_idempotent<C: Cursor>(mut cursor: C) {
    while cursor.advance() {}

    for _ in 0..3 {
        assert!(!cursor.advance());
        assert!(cursor.value().is_none());
    }
}

/// Abort may be called any number of times, before or after advancing
pub fn test_abort_is_idempotent<C: Cursor>(mut cursor: C) {
    cursor.abort();
    cursor.abort();
    assert!(!cursor.advance());
    assert!(cursor.value().is_none());
    assert_eq!(cursor.size().allocate(), 0);
}

/// Abort in the middle of a run stops the cursor
pub fn test_abort_mid_run<C: Cursor>(mut cursor: C) {
    assert!(cursor.advance(), "cursor under test must not be empty");
    cursor.abort();

    assert!(cursor.value().is_none());
    assert!(!cursor.advance());
    cursor.abort();
    assert!(!cursor.advance());
}

/// The reported size is consistent with what a full drain yields
pub fn test_size_bounds_collect<C: Cursor>(mut cursor: C) {
    let size = cursor.size();
    let len = cursor.collect().len();

    match size {
        IteratorSize::Known(n) => assert_eq!(len, n, "Known size must be exact"),
        IteratorSize::AtMost(n) => assert!(len <= n, "AtMost({n}) exceeded by {len}"),
        IteratorSize::Unknown => {}
        IteratorSize::Infinite => panic!("finite cursor reported as infinite"),
    }
}

/// The native iterator view yields exactly what the pull protocol does
pub fn test_iter_matches_pulls<C, F>(make: F)
where
    C: Cursor,
    C::Item: PartialEq + Debug,
    F: Fn() -> C,
{
    let mut pulled = Vec::new();
    let mut cursor = make();
    while cursor.advance() {
        pulled.extend(cursor.take_value());
    }

    let mut cursor = make();
    let viewed: Vec<C::Item> = cursor.iter().collect();
    assert_eq!(viewed, pulled);

    let owned: Vec<C::Item> = make().into_seq().collect();
    assert_eq!(owned, pulled);
}

/// Reset replays the same elements from the start
pub fn test_reset_replays<C>(mut cursor: C)
where
    C: Cursor,
    C::Item: PartialEq + Debug,
{
    let first = cursor.collect();
    cursor.reset().expect("cursor under test must be resettable");
    assert_eq!(cursor.collect(), first);
}

/// Reset after abort revives a resettable cursor
pub fn test_reset_after_abort<C>(mut cursor: C)
where
    C: Cursor,
    C::Item: PartialEq + Debug,
{
    let size = cursor.size();
    cursor.advance();
    cursor.abort();

    cursor.reset().expect("cursor under test must be resettable");
    assert_eq!(cursor.size(), size);
    assert!(cursor.value().is_none());
}

/// Breaking out of the native iterator view leaves the cursor usable
pub fn test_iter_early_exit<C>(make: impl Fn() -> C, stop_after: usize)
where
    C: Cursor,
    C::Item: PartialEq + Debug,
{
    let expected = make().collect();
    assert!(expected.len() > stop_after, "cursor under test is too short");

    let mut cursor = make();
    let head: Vec<C::Item> = cursor.iter().take(stop_after).collect();
    let tail = cursor.collect();

    assert_eq!(head.len() + tail.len(), expected.len());
    assert_eq!(head.into_iter().chain(tail).collect::<Vec<_>>(), expected);
}
