//! Cursors over contiguous storage.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::size::IteratorSize;

/// Creates a cursor over the elements of `items`, by reference.
pub fn slice<T>(items: &[T]) -> SliceCursor<'_, T> {
    SliceCursor {
        items,
        position: 0,
        current: None,
        aborted: false,
    }
}

/// Creates a cursor over an owned vector, yielding clones of its elements.
///
/// The vector is kept so the cursor can be reset. Use [`seq`](crate::seq) to
/// move elements out of a vector instead.
pub fn from_vec<T: Clone>(items: Vec<T>) -> VecCursor<T> {
    VecCursor {
        items,
        position: 0,
        current: None,
        aborted: false,
    }
}

// ============================================================================
// SliceCursor
// ============================================================================

/// Cursor over a borrowed slice. Created by [`slice`].
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: usize,
    current: Option<&'a T>,
    aborted: bool,
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> bool {
        if self.aborted {
            return false;
        }

        self.current = self.items.get(self.position);
        if self.current.is_some() {
            self.position += 1;
        }
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
        self.position = 0;
        self.current = None;
        self.aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.aborted {
            return IteratorSize::Known(0);
        }
        IteratorSize::Known(self.items.len() - self.position)
    }
}

// ============================================================================
// VecCursor
// ============================================================================

/// Cursor over an owned vector. Created by [`from_vec`].
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    items: Vec<T>,
    position: usize,
    current: Option<T>,
    aborted: bool,
}

impl<T> VecCursor<T> {
    /// Gives back the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Cursor for VecCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.aborted {
            return false;
        }

        self.current = self.items.get(self.position).cloned();
        if self.current.is_some() {
            self.position += 1;
        }
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
        self.position = 0;
        self.current = None;
        self.aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.aborted {
            return IteratorSize::Known(0);
        }
        IteratorSize::Known(self.items.len() - self.position)
    }
}

// ============================================================================
// Tests
// ============================================================================
