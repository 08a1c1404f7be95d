use crate::cursor::Cursor;
use crate::error::Result;
use crate::size::IteratorSize;

/// Yields at most `n` elements of the upstream. Created by [`Cursor::take`].
///
/// Once the budget is spent the upstream is aborted, which releases
/// generator workers blocked on their next yield. The upstream is aborted at
/// most once per run, whether the budget ran out or [`abort`](Cursor::abort)
/// was called.
pub struct Take<C> {
    inner: C,
    limit: usize,
    remaining: usize,
    upstream_aborted: bool,
}

impl<C: Cursor> Take<C> {
    pub(crate) fn new(inner: C, limit: usize) -> Self {
        Take {
            inner,
            limit,
            remaining: limit,
            upstream_aborted: false,
        }
    }

    /// Number of elements this cursor may still yield.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn abort_upstream(&mut self) {
        if !self.upstream_aborted {
            self.upstream_aborted = true;
            self.inner.abort();
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if self.remaining == 0 {
            self.abort_upstream();
            return false;
        }

        if self.inner.advance() {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    fn value(&self) -> Option<&Self::Item> {
        self.inner.value()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.inner.take_value()
    }

    fn abort(&mut self) {
        self.remaining = 0;
        self.abort_upstream();
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()?;
        self.remaining = self.limit;
        self.upstream_aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.remaining == 0 {
            return IteratorSize::Known(0);
        }
        self.inner.size().intersect(IteratorSize::Known(self.remaining))
    }
}
