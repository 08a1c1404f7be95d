//! Key/value iteration.
//!
//! [`PairCursor`] is the paired counterpart of [`Cursor`](crate::Cursor):
//! the same lifecycle and sizing rules, with a key and a value per step.
//!
//! # Organization
//!
//! - [`enumerate`] - position-keyed pairs from a plain cursor
//! - [`adapters`] - `map2` and `filter2`
//! - [`kv`] - conversions between pair cursors and cursors of [`KV`]

pub mod adapters;
pub mod enumerate;
pub mod kv;

pub use adapters::{Filter2, Map2};
pub use enumerate::Enumerate;
pub use kv::{AsKV, FromKV, KV, from_kv};

use crate::error::Result;
use crate::size::IteratorSize;

/// Pull-based iteration over key/value pairs.
pub trait PairCursor {
    type Key;
    type Value;

    /// Steps to the next pair. See [`Cursor::advance`](crate::Cursor::advance).
    fn advance(&mut self) -> bool;

    /// Key of the current pair.
    fn key(&self) -> Option<&Self::Key>;

    /// Value of the current pair.
    fn value(&self) -> Option<&Self::Value>;

    /// Moves the current pair out of the cursor.
    fn take_pair(&mut self) -> Option<(Self::Key, Self::Value)>;

    fn abort(&mut self);

    fn reset(&mut self) -> Result<()>;

    fn size(&self) -> IteratorSize;

    /// Borrows the cursor as a native [`Iterator`] of tuples.
    fn iter(&mut self) -> PairSeq<'_, Self>
    where
        Self: Sized,
    {
        PairSeq { cursor: self }
    }

    /// Turns the cursor into a native [`Iterator`] of tuples.
    fn into_seq(self) -> IntoPairSeq<Self>
    where
        Self: Sized,
    {
        IntoPairSeq { cursor: self }
    }

    /// Transforms every pair with `f`.
    fn map2<K, V, F>(self, f: F) -> Map2<Self, F, K, V>
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value) -> (K, V),
    {
        Map2::new(self, f)
    }

    /// Keeps only the pairs matching `predicate`.
    fn filter2<P>(self, predicate: P) -> Filter2<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        Filter2::new(self, predicate)
    }

    /// Flattens the pairs into a plain cursor of [`KV`] items.
    fn as_kv(self) -> AsKV<Self>
    where
        Self: Sized,
    {
        AsKV::new(self)
    }

    /// Drains the cursor into a vector of tuples.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is infinite.
    fn collect_pairs(&mut self) -> Vec<(Self::Key, Self::Value)>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(self.size().allocate());
        while self.advance() {
            if let Some(pair) = self.take_pair() {
                out.push(pair);
            }
        }
        out
    }
}

/// Native [`Iterator`] over a borrowed pair cursor. Created by [`PairCursor::iter`].
pub struct PairSeq<'a, C: ?Sized> {
    cursor: &'a mut C,
}

impl<C: PairCursor + ?Sized> Iterator for PairSeq<'_, C> {
    type Item = (C::Key, C::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.take_pair()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size().size_hint()
    }
}

/// Native [`Iterator`] owning a pair cursor. Created by [`PairCursor::into_seq`].
pub struct IntoPairSeq<C> {
    cursor: C,
}

impl<C: PairCursor> Iterator for IntoPairSeq<C> {
    type Item = (C::Key, C::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.take_pair()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size().size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::cursor::Cursor;
    use crate::sources::{range, slice};

    #[test]
    fn test_pair_seq_into_map() {
        let names = ["zero", "one", "two"];
        let by_index: HashMap<usize, &&str> = slice(&names).enumerate().iter().collect();

        assert_eq!(by_index.len(), 3);
        assert_eq!(by_index[&1], &"one");
    }

    #[test]
    fn test_into_pair_seq() {
        let pairs: Vec<(usize, i32)> = range(10, 13).enumerate().into_seq().collect();
        assert_eq!(pairs, vec![(0, 10), (1, 11), (2, 12)]);
    }
}
