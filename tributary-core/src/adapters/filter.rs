use crate::cursor::Cursor;
use crate::error::Result;
use crate::size::IteratorSize;

// ============================================================================
// Filter
// ============================================================================

/// Keeps the elements matching a predicate. Created by [`Cursor::filter`].
pub struct Filter<C: Cursor, P> {
    inner: C,
    predicate: P,
    current: Option<C::Item>,
}

impl<C: Cursor, P> Filter<C, P> {
    pub(crate) fn new(inner: C, predicate: P) -> Self {
        Filter {
            inner,
            predicate,
            current: None,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        self.current = None;
        while self.inner.advance() {
            if self.inner.value().is_some_and(&mut self.predicate) {
                self.current = self.inner.take_value();
                break;
            }
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
        self.current = None;
        self.inner.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.current = None;
        self.inner.reset()
    }

    fn size(&self) -> IteratorSize {
        self.inner.size().subset()
    }
}

// ============================================================================
// FilterMap
// ============================================================================

/// Maps elements through a partial function, dropping `None` results.
/// Created by [`Cursor::filter_map`].
pub struct FilterMap<C, F, U> {
    inner: C,
    f: F,
    current: Option<U>,
}

impl<C, F, U> FilterMap<C, F, U> {
    pub(crate) fn new(inner: C, f: F) -> Self {
        FilterMap {
            inner,
            f,
            current: None,
        }
    }
}

impl<C, F, U> Cursor for FilterMap<C, F, U>
where
    C: Cursor,
    F: FnMut(C::Item) -> Option<U>,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.current = None;
        while self.current.is_none() && self.inner.advance() {
            self.current = self.inner.take_value().and_then(&mut self.f);
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
        self.current = None;
        self.inner.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.current = None;
        self.inner.reset()
    }

    fn size(&self) -> IteratorSize {
        self.inner.size().subset()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::size::IteratorSize;
    use crate::sources::{empty, range, repeat};

    #[test]
    fn test_filter_basic() {
        let mut evens = range(0, 10).filter(|x| x % 2 == 0);
        assert_eq!(evens.collect(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_filter_degrades_known_size() {
        let evens = range(0, 10).filter(|x| x % 2 == 0);
        assert_eq!(evens.size(), IteratorSize::AtMost(10));
    }

    #[test]
    fn test_filter_keeps_infinite() {
        let odd = repeat(1).filter(|x| x % 2 == 1);
        assert_eq!(odd.size(), IteratorSize::Infinite);
    }

    #[test]
    fn test_filter_no_match() {
        let mut none = range(0, 100).filter(|_| false);
        assert!(!none.advance());
        assert!(!none.advance());
        assert_eq!(none.value(), None);
    }

    #[test]
    fn test_filter_empty() {
        assert!(empty::<i32>().filter(|_| true).collect().is_empty());
    }

    #[test]
    fn test_filter_map() {
        let words = ["1", "two", "3", "four"];
        let mut numbers = crate::sources::slice(&words).filter_map(|w| w.parse::<i32>().ok());

        assert_eq!(numbers.size(), IteratorSize::AtMost(4));
        assert_eq!(numbers.collect(), vec![1, 3]);
    }

    #[test]
    fn test_filter_map_reset() {
        let mut halves = range(0, 6).filter_map(|x| (x % 2 == 0).then_some(x / 2));
        assert_eq!(halves.collect(), vec![0, 1, 2]);
        halves.reset().unwrap();
        assert_eq!(halves.collect(), vec![0, 1, 2]);
    }
}
