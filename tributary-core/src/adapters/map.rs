use crate::cursor::Cursor;
use crate::error::Result;
use crate::size::IteratorSize;

/// Applies a function to every element. Created by [`Cursor::map`].
///
/// Exactly one output per input, in order, so the size is passed through.
pub struct Map<C, F, U> {
    inner: C,
    f: F,
    current: Option<U>,
}

impl<C, F, U> Map<C, F, U> {
    pub(crate) fn new(inner: C, f: F) -> Self {
        Map {
            inner,
            f,
            current: None,
        }
    }

    /// Gives back the upstream cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, F, U> Cursor for Map<C, F, U>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.current = if self.inner.advance() {
            self.inner.take_value().map(&mut self.f)
        } else {
            None
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
        self.current = None;
        self.inner.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.current = None;
        self.inner.reset()
    }

    fn size(&self) -> IteratorSize {
        self.inner.size()
    }
}
