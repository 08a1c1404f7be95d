//! Cursors over native Rust iterators and closures.

use std::iter::Fuse;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::size::IteratorSize;

/// Wraps a native sequence as a one-shot cursor.
///
/// The size is derived from the iterator's `size_hint`. Resetting returns
/// [`Error::ResetUnsupported`]; see [`replayable`] for iterators that can be
/// cloned.
pub fn seq<I: IntoIterator>(items: I) -> FromSeq<I::IntoIter> {
    FromSeq {
        inner: Some(items.into_iter().fuse()),
        current: None,
    }
}

/// Wraps a cloneable iterator; a pristine clone is kept so the cursor can
/// replay from the start on reset.
pub fn replayable<I: Iterator + Clone>(items: I) -> Replayable<I> {
    Replayable {
        inner: items.clone().fuse(),
        pristine: items,
        current: None,
        aborted: false,
    }
}

/// Creates a one-shot cursor yielding the values of `f` until it returns `None`.
pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> FromFn<F, T> {
    FromFn {
        f,
        current: None,
        done: false,
    }
}

// ============================================================================
// FromSeq
// ============================================================================

/// One-shot cursor over a native iterator. Created by [`seq`].
pub struct FromSeq<I: Iterator> {
    // `None` once aborted; dropping the iterator releases what it holds.
    inner: Option<Fuse<I>>,
    current: Option<I::Item>,
}

impl<I: Iterator> Cursor for FromSeq<I> {
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.current = self.inner.as_mut().and_then(Iterator::next);
        self.current.is_some()
    }

    fn value(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.inner = None;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        Err(Error::ResetUnsupported)
    }

    fn size(&self) -> IteratorSize {
        match &self.inner {
            Some(inner) => IteratorSize::from_size_hint(inner.size_hint()),
            None => IteratorSize::Known(0),
        }
    }
}

// ============================================================================
// Replayable
// ============================================================================

/// Resettable cursor over a cloneable iterator. Created by [`replayable`].
pub struct Replayable<I: Iterator> {
    inner: Fuse<I>,
    pristine: I,
    current: Option<I::Item>,
    aborted: bool,
}

impl<I: Iterator + Clone> Cursor for Replayable<I> {
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.current = if self.aborted {
            None
        } else {
            self.inner.next()
        };
        self.current.is_some()
    }

    fn value(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.aborted = true;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        self.inner = self.pristine.clone().fuse();
        self.current = None;
        self.aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.aborted {
            return IteratorSize::Known(0);
        }
        IteratorSize::from_size_hint(self.inner.size_hint())
    }
}

// ============================================================================
// FromFn
// ============================================================================

/// One-shot cursor over a closure. Created by [`from_fn`].
pub struct FromFn<F, T> {
    f: F,
    current: Option<T>,
    done: bool,
}

impl<T, F: FnMut() -> Option<T>> Cursor for FromFn<F, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }

        self.current = (self.f)();
        self.done = self.current.is_none();
        !self.done
    }

    fn value(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.done = true;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        Err(Error::ResetUnsupported)
    }

    fn size(&self) -> IteratorSize {
        if self.done {
            IteratorSize::Known(0)
        } else {
            IteratorSize::Unknown
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_moves_owned_values() {
        let mut cursor = seq(vec![String::from("a"), String::from("b")]);
        assert_eq!(cursor.size(), IteratorSize::Known(2));
        assert_eq!(cursor.collect(), vec!["a", "b"]);
    }

    #[test]
    fn test_seq_size_from_hint() {
        let cursor = seq((0..10).filter(|x| x % 3 == 0));
        assert_eq!(cursor.size(), IteratorSize::AtMost(10));

        let cursor = seq(std::iter::repeat(0));
        assert_eq!(cursor.size(), IteratorSize::Infinite);
    }

    #[test]
    fn test_seq_reset_unsupported() {
        let mut cursor = seq([1, 2]);
        assert!(matches!(cursor.reset(), Err(Error::ResetUnsupported)));
    }

    #[test]
    fn test_seq_abort() {
        let mut cursor = seq(0..);
        assert!(cursor.advance());
        cursor.abort();
        assert!(!cursor.advance());
        assert_eq!(cursor.size(), IteratorSize::Known(0));
    }

    #[test]
    fn test_replayable_reset() {
        let mut cursor = replayable([1, 2, 3].into_iter());
        assert_eq!(cursor.collect(), vec![1, 2, 3]);

        cursor.reset().unwrap();
        assert!(cursor.advance());
        assert_eq!(cursor.value(), Some(&1));
    }

    #[test]
    fn test_from_fn() {
        let mut n = 0;
        let mut cursor = from_fn(|| {
            n += 1;
            (n <= 3).then_some(n)
        });

        assert_eq!(cursor.size(), IteratorSize::Unknown);
        assert_eq!(cursor.collect(), vec![1, 2, 3]);
        assert!(!cursor.advance());
        assert_eq!(cursor.size(), IteratorSize::Known(0));
    }
}
