//! Operations that drive a cursor to a concrete result.
//!
//! These are also available as provided methods on [`Cursor`].

use crate::cursor::Cursor;

/// Drains `cursor` into a vector pre-sized from its [`IteratorSize`].
///
/// # Panics
///
/// Panics if the cursor reports an infinite size.
pub fn collect<C: Cursor + ?Sized>(cursor: &mut C) -> Vec<C::Item> {
    let mut out = Vec::with_capacity(cursor.size().allocate());
    drain_into(cursor, &mut out);
    out
}

/// Drains `cursor`, appending to caller-supplied storage.
///
/// # Panics
///
/// Panics if the cursor reports an infinite size.
pub fn collect_into<C: Cursor + ?Sized>(cursor: &mut C, out: &mut Vec<C::Item>) {
    out.reserve(cursor.size().allocate());
    drain_into(cursor, out);
}

fn drain_into<C: Cursor + ?Sized>(cursor: &mut C, out: &mut Vec<C::Item>) {
    while cursor.advance() {
        if let Some(value) = cursor.take_value() {
            out.push(value);
        }
    }
}

/// Applies `f` to every remaining element, strictly left to right.
pub fn fold<C, B, F>(cursor: &mut C, init: B, mut f: F) -> B
where
    C: Cursor + ?Sized,
    F: FnMut(B, C::Item) -> B,
{
    let mut acc = init;
    while cursor.advance() {
        if let Some(value) = cursor.take_value() {
            acc = f(acc, value);
        }
    }
    acc
}

/// Returns false at the first element not matching `predicate`.
///
/// The cursor is left positioned on that element; it is neither drained nor
/// aborted.
pub fn all<C, P>(cursor: &mut C, mut predicate: P) -> bool
where
    C: Cursor + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    while cursor.advance() {
        if !cursor.value().is_some_and(&mut predicate) {
            return false;
        }
    }
    true
}

/// Returns true at the first element matching `predicate`.
///
/// The cursor is left positioned on that element; it is neither drained nor
/// aborted.
pub fn any<C, P>(cursor: &mut C, mut predicate: P) -> bool
where
    C: Cursor + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    while cursor.advance() {
        if cursor.value().is_some_and(&mut predicate) {
            return true;
        }
    }
    false
}

/// Drains `cursor` and returns the number of elements it yielded.
pub fn count<C: Cursor + ?Sized>(cursor: &mut C) -> usize {
    let mut n = 0;
    while cursor.advance() {
        n += 1;
    }
    n
}

// ============================================================================
// Tests
// ============================================================================
