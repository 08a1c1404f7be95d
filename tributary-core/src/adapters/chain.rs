use crate::cursor::Cursor;
use crate::error::Result;
use crate::size::IteratorSize;

/// All elements of one cursor followed by all elements of another.
/// Created by [`Cursor::chain`].
pub struct Chain<A, B> {
    first: A,
    second: B,
    on_second: bool,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Chain {
            first,
            second,
            on_second: false,
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> bool {
        if !self.on_second {
            if self.first.advance() {
                return true;
            }
            self.on_second = true;
        }
        self.second.advance()
    }

    fn value(&self) -> Option<&Self::Item> {
        if self.on_second {
            self.second.value()
        } else {
            self.first.value()
        }
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        if self.on_second {
            self.second.take_value()
        } else {
            self.first.take_value()
        }
    }

    fn abort(&mut self) {
        self.first.abort();
        self.second.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.first.reset()?;
        // A half-reset chain would skip the restored first side.
        if let Err(error) = self.second.reset() {
            self.abort();
            return Err(error);
        }
        self.on_second = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.on_second {
            self.second.size()
        } else {
            self.first.size().concat(self.second.size())
        }
    }
}
