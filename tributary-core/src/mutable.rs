//! Cursors that can write back into the storage they walk.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::size::IteratorSize;

/// A [`Cursor`] that can modify the element it is positioned on.
pub trait CursorMut: Cursor {
    /// Replaces the current element, both in the cursor and in the storage.
    fn set(&mut self, value: Self::Item) -> Result<()>;

    /// Removes the current element from the storage.
    ///
    /// The next [`advance`](Cursor::advance) continues with its successor.
    fn delete(&mut self) -> Result<()>;
}

/// Creates a writable cursor over a borrowed slice.
///
/// Elements are yielded as clones; [`CursorMut::set`] writes through to the
/// slice. A slice cannot shrink, so [`CursorMut::delete`] always fails.
pub fn slice_mut<T: Clone>(items: &mut [T]) -> SliceMut<'_, T> {
    SliceMut {
        items,
        position: 0,
        index: None,
        current: None,
        aborted: false,
    }
}

/// Creates a writable cursor over a borrowed vector, supporting deletion.
pub fn vec_mut<T: Clone>(items: &mut Vec<T>) -> VecMut<'_, T> {
    VecMut {
        items,
        position: 0,
        index: None,
        current: None,
        aborted: false,
    }
}

// ============================================================================
// SliceMut
// ============================================================================

/// Writable cursor over a slice. Created by [`slice_mut`].
pub struct SliceMut<'a, T> {
    items: &'a mut [T],
    position: usize,
    // Storage index of the element last yielded; cleared on exhaustion.
    index: Option<usize>,
    current: Option<T>,
    aborted: bool,
}

impl<T: Clone> Cursor for SliceMut<'_, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        (self.index, self.current) = step(&*self.items, &mut self.position, self.aborted);
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
        self.index = None;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        self.index = None;
        self.current = None;
        self.aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        remaining(self.items.len(), self.position, self.aborted)
    }
}

impl<T: Clone> CursorMut for SliceMut<'_, T> {
    fn set(&mut self, value: T) -> Result<()> {
        let index = self.index.ok_or(Error::NoCurrent)?;
        self.items[index] = value.clone();
        self.current = Some(value);
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        self.index.ok_or(Error::NoCurrent)?;
        Err(Error::DeleteUnsupported)
    }
}

// ============================================================================
// VecMut
// ============================================================================

/// Writable cursor over a vector. Created by [`vec_mut`].
pub struct VecMut<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    index: Option<usize>,
    current: Option<T>,
    aborted: bool,
}

impl<T: Clone> Cursor for VecMut<'_, T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        (self.index, self.current) = step(self.items.as_slice(), &mut self.position, self.aborted);
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
        self.index = None;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        self.index = None;
        self.current = None;
        self.aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        remaining(self.items.len(), self.position, self.aborted)
    }
}

impl<T: Clone> CursorMut for VecMut<'_, T> {
    fn set(&mut self, value: T) -> Result<()> {
        let index = self.index.ok_or(Error::NoCurrent)?;
        self.items[index] = value.clone();
        self.current = Some(value);
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let index = self.index.take().ok_or(Error::NoCurrent)?;
        self.items.remove(index);
        self.current = None;
        // The successor now sits at the removed element's slot.
        self.position = index;
        Ok(())
    }
}

fn step<T: Clone>(items: &[T], position: &mut usize, aborted: bool) -> (Option<usize>, Option<T>) {
    if aborted {
        return (None, None);
    }

    match items.get(*position) {
        Some(item) => {
            let index = *position;
            *position += 1;
            (Some(index), Some(item.clone()))
        }
        None => (None, None),
    }
}

fn remaining(len: usize, position: usize, aborted: bool) -> IteratorSize {
    if aborted {
        IteratorSize::Known(0)
    } else {
        IteratorSize::Known(len.saturating_sub(position))
    }
}

// ============================================================================
// Tests
// ============================================================================
