use crate::cursor::Cursor;
use crate::error::Result;
use crate::pair::PairCursor;
use crate::size::IteratorSize;

/// Pairs each element with its zero-based position. Created by
/// [`Cursor::enumerate`].
///
/// The index is synthesized here, not read from upstream, and restarts only
/// when the cursor is reset.
pub struct Enumerate<C: Cursor> {
    inner: C,
    next_index: usize,
    current: Option<(usize, C::Item)>,
}

impl<C: Cursor> Enumerate<C> {
    pub(crate) fn new(inner: C) -> Self {
        Enumerate {
            inner,
            next_index: 0,
            current: None,
        }
    }
}

impl<C: Cursor> PairCursor for Enumerate<C> {
    type Key = usize;
    type Value = C::Item;

    fn advance(&mut self) -> bool {
        self.current = if self.inner.advance() {
            self.inner.take_value().map(|value| (self.next_index, value))
        } else {
            None
        };

        if self.current.is_some() {
            self.next_index += 1;
        }
        self.current.is_some()
    }

    fn key(&self) -> Option<&Self::Key> {
        self.current.as_ref().map(|(index, _)| index)
    }

    fn value(&self) -> Option<&Self::Value> {
        self.current.as_ref().map(|(_, value)| value)
    }

    fn take_pair(&mut self) -> Option<(Self::Key, Self::Value)> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.current = None;
        self.inner.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()?;
        self.current = None;
        self.next_index = 0;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        self.inner.size()
    }
}
