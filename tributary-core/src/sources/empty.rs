//! The two trivial sources: nothing at all, and the same value forever.

use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::size::IteratorSize;

/// Creates a cursor that yields nothing.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _phantom: PhantomData,
    }
}

/// Creates an infinite cursor yielding clones of `value`.
///
/// Bound it with [`take`](Cursor::take) before collecting.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat {
        value,
        current: None,
        aborted: false,
    }
}

/// Cursor with no elements. Created by [`empty`].
#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        false
    }

    fn value(&self) -> Option<&Self::Item> {
        None
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        None
    }

    fn abort(&mut self) {}

    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        IteratorSize::Known(0)
    }
}

/// Infinite cursor over one value. Created by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    current: Option<T>,
    aborted: bool,
}

impl<T: Clone> Cursor for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.aborted {
            return false;
        }
        self.current = Some(self.value.clone());
        true
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
        self.aborted = false;
        self.current = None;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.aborted {
            IteratorSize::Known(0)
        } else {
            IteratorSize::Infinite
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let mut cursor = empty::<i32>();
        assert!(!cursor.advance());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.size(), IteratorSize::Known(0));
    }

    #[test]
    fn test_repeat_is_infinite_until_aborted() {
        let mut cursor = repeat('x');
        assert_eq!(cursor.size(), IteratorSize::Infinite);

        for _ in 0..100 {
            assert!(cursor.advance());
        }
        assert_eq!(cursor.value(), Some(&'x'));

        cursor.abort();
        assert!(!cursor.advance());
        assert_eq!(cursor.size(), IteratorSize::Known(0));
    }
}
