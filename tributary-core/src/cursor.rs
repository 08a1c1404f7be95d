//! The pull protocol implemented by every source and adapter.
//!
//! A cursor moves through the states
//!
//! ```text
//! Fresh ──advance──▶ Active ──advance (nothing left)──▶ Exhausted
//!   │                  │                                   │
//!   └──────────────────┴────────────── abort ──────────────┴──▶ Aborted
//! ```
//!
//! `reset` brings a cursor back to `Fresh` when its source can replay.
//!
//! There is exactly one consumption protocol: explicit pulls on the cursor.
//! The lazy-sequence view returned by [`Cursor::iter`] borrows the cursor
//! mutably, so explicit pulls cannot be interleaved with a running `for` loop:
//!
//! ```compile_fail
//! use tributary_core::{Cursor, range};
//!
//! let mut cursor = range(0, 3);
//! for x in cursor.iter() {
//!     cursor.advance();
//! }
//! ```

use crate::adapters::{Chain, Filter, FilterMap, Map, Take, Zip};
use crate::error::Result;
use crate::pair::{Enumerate, FromKV, KV};
use crate::size::IteratorSize;
use crate::terminal;

/// Pull-based iteration over a sequence of items.
pub trait Cursor {
    /// The type of the elements produced by this cursor.
    type Item;

    /// Steps to the next element.
    ///
    /// Returns `false` once the sequence is exhausted or the cursor was
    /// aborted; every later call returns `false` as well.
    fn advance(&mut self) -> bool;

    /// Returns the current element.
    ///
    /// `None` before the first successful [`advance`](Self::advance), after
    /// exhaustion, after [`abort`](Self::abort), and after the element was
    /// moved out with [`take_value`](Self::take_value).
    fn value(&self) -> Option<&Self::Item>;

    /// Moves the current element out of the cursor.
    fn take_value(&mut self) -> Option<Self::Item>;

    /// Stops the cursor. Idempotent; propagates to upstream cursors.
    fn abort(&mut self);

    /// Restarts the cursor from the first element.
    ///
    /// One-shot sources return [`Error::ResetUnsupported`](crate::Error::ResetUnsupported).
    fn reset(&mut self) -> Result<()>;

    /// Reports how many elements remain.
    fn size(&self) -> IteratorSize;

    // ========================================================================
    // Lazy-sequence views
    // ========================================================================

    /// Borrows the cursor as a native [`Iterator`].
    ///
    /// Breaking out of the loop leaves the cursor positioned after the last
    /// element the loop received.
    fn iter(&mut self) -> Seq<'_, Self>
    where
        Self: Sized,
    {
        Seq { cursor: self }
    }

    /// Turns the cursor into a native [`Iterator`].
    fn into_seq(self) -> IntoSeq<Self>
    where
        Self: Sized,
    {
        IntoSeq { cursor: self }
    }

    // ========================================================================
    // Adapters
    // ========================================================================

    /// Transforms every element with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keeps only the elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transforms elements with `f`, dropping those mapped to `None`.
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F, U>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, f)
    }

    /// Yields at most `n` elements, then aborts the upstream cursor.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Pairs every element with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Yields all elements of `self`, then all elements of `other`.
    fn chain<C>(self, other: C) -> Chain<Self, C>
    where
        Self: Sized,
        C: Cursor<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Pairs elements of `self` (keys) with elements of `other` (values).
    fn zip<C>(self, other: C) -> Zip<Self, C>
    where
        Self: Sized,
        C: Cursor,
    {
        Zip::new(self, other)
    }

    /// Reinterprets a cursor of [`KV`] items as a pair cursor.
    fn into_pairs<K, V>(self) -> FromKV<Self, K, V>
    where
        Self: Sized + Cursor<Item = KV<K, V>>,
    {
        crate::pair::from_kv(self)
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    /// Drains the cursor into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is infinite.
    fn collect(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        terminal::collect(self)
    }

    /// Drains the cursor, appending to `out`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is infinite.
    fn collect_into(&mut self, out: &mut Vec<Self::Item>)
    where
        Self: Sized,
    {
        terminal::collect_into(self, out)
    }

    /// Folds the remaining elements left to right.
    fn fold<B, F>(&mut self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        terminal::fold(self, init, f)
    }

    /// Returns true if every remaining element matches; stops at the first miss.
    fn all<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::all(self, predicate)
    }

    /// Returns true if any remaining element matches; stops at the first hit.
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::any(self, predicate)
    }

    /// Drains the cursor and returns how many elements it yielded.
    fn count(&mut self) -> usize
    where
        Self: Sized,
    {
        terminal::count(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn value(&self) -> Option<&Self::Item> {
        (**self).value()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        (**self).take_value()
    }

    fn abort(&mut self) {
        (**self).abort()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn size(&self) -> IteratorSize {
        (**self).size()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn value(&self) -> Option<&Self::Item> {
        (**self).value()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        (**self).take_value()
    }

    fn abort(&mut self) {
        (**self).abort()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn size(&self) -> IteratorSize {
        (**self).size()
    }
}

// ============================================================================
// Seq - borrowing lazy-sequence view
// ============================================================================

/// Native [`Iterator`] over a borrowed cursor. Created by [`Cursor::iter`].
pub struct Seq<'a, C: ?Sized> {
    cursor: &'a mut C,
}

impl<C: Cursor + ?Sized> Iterator for Seq<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        pull(self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size().size_hint()
    }
}

// ============================================================================
// IntoSeq - owning lazy-sequence view
// ============================================================================

/// Native [`Iterator`] owning its cursor. Created by [`Cursor::into_seq`].
pub struct IntoSeq<C> {
    cursor: C,
}

impl<C> IntoSeq<C> {
    /// Gives the cursor back, positioned after the last element yielded.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for IntoSeq<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        pull(&mut self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size().size_hint()
    }
}

fn pull<C: Cursor + ?Sized>(cursor: &mut C) -> Option<C::Item> {
    if cursor.advance() {
        cursor.take_value()
    } else {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{range, slice};

    #[test]
    fn test_iter_early_exit_resumes() {
        let mut cursor = range(0, 10);

        for x in cursor.iter() {
            if x == 3 {
                break;
            }
        }

        assert!(cursor.advance());
        assert_eq!(cursor.value(), Some(&4));
    }

    #[test]
    fn test_into_seq_size_hint() {
        let data = [1, 2, 3];
        let mut seq = slice(&data).into_seq();

        assert_eq!(seq.size_hint(), (3, Some(3)));
        seq.next();
        assert_eq!(seq.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_into_seq_into_inner() {
        let mut seq = range(0, 5).into_seq();
        seq.next();
        seq.next();

        let mut cursor = seq.into_inner();
        assert_eq!(cursor.collect(), vec![2, 3, 4]);
    }

    #[test]
    fn test_boxed_dyn_cursor() {
        let mut cursor: Box<dyn Cursor<Item = i32>> = Box::new(range(0, 3));

        assert_eq!(cursor.size(), IteratorSize::Known(3));
        let collected: Vec<i32> = cursor.iter().collect();
        assert_eq!(collected, vec![0, 1, 2]);
    }

    #[test]
    fn test_mut_ref_cursor_is_aborted_by_take() {
        let mut cursor = range(0, 6);

        let first: Vec<i32> = (&mut cursor).take(2).collect();
        assert_eq!(first, vec![0, 1]);

        // Take stops its upstream once the budget is spent.
        assert!(!cursor.advance());
    }

    #[test]
    fn test_value_before_advance_is_none() {
        let cursor = range(0, 3);
        assert_eq!(cursor.value(), None);
    }

    #[test]
    fn test_take_value_empties_slot() {
        let mut cursor = range(0, 3);
        assert!(cursor.advance());
        assert_eq!(cursor.take_value(), Some(0));
        assert_eq!(cursor.value(), None);
    }
}
