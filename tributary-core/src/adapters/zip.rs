use crate::cursor::Cursor;
use crate::error::Result;
use crate::pair::PairCursor;
use crate::size::IteratorSize;

/// Pairs the elements of two cursors. Created by [`Cursor::zip`].
///
/// Elements of the first cursor become keys, elements of the second one
/// values. Iteration ends as soon as either side ends, and the other side is
/// aborted at that point.
pub struct Zip<A: Cursor, B: Cursor> {
    left: A,
    right: B,
    current: Option<(A::Item, B::Item)>,
}

impl<A: Cursor, B: Cursor> Zip<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Zip {
            left,
            right,
            current: None,
        }
    }
}

impl<A: Cursor, B: Cursor> PairCursor for Zip<A, B> {
    type Key = A::Item;
    type Value = B::Item;

    fn advance(&mut self) -> bool {
        self.current = None;
        if self.left.advance() && self.right.advance() {
            if let (Some(key), Some(value)) = (self.left.take_value(), self.right.take_value()) {
                self.current = Some((key, value));
            }
        }

        if self.current.is_none() {
            self.abort();
        }
        self.current.is_some()
    }

    fn key(&self) -> Option<&Self::Key> {
        self.current.as_ref().map(|(key, _)| key)
    }

    fn value(&self) -> Option<&Self::Value> {
        self.current.as_ref().map(|(_, value)| value)
    }

    fn take_pair(&mut self) -> Option<(Self::Key, Self::Value)> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.current = None;
        self.left.abort();
        self.right.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.left.reset()?;
        self.current = None;
        // Never pair a rewound left side with a right side mid-run.
        if let Err(error) = self.right.reset() {
            self.abort();
            return Err(error);
        }
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        self.left.size().intersect(self.right.size())
    }
}
