use crate::error::Result;
use crate::pair::PairCursor;
use crate::size::IteratorSize;

// ============================================================================
// Map2
// ============================================================================

/// Transforms every pair. Created by [`PairCursor::map2`].
pub struct Map2<C, F, K, V> {
    inner: C,
    f: F,
    current: Option<(K, V)>,
}

impl<C, F, K, V> Map2<C, F, K, V> {
    pub(crate) fn new(inner: C, f: F) -> Self {
        Map2 {
            inner,
            f,
            current: None,
        }
    }
}

impl<C, F, K, V> PairCursor for Map2<C, F, K, V>
where
    C: PairCursor,
    F: FnMut(C::Key, C::Value) -> (K, V),
{
    type Key = K;
    type Value = V;

    fn advance(&mut self) -> bool {
        self.current = if self.inner.advance() {
            self.inner
                .take_pair()
                .map(|(key, value)| (self.f)(key, value))
        } else {
            None
        };
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

// ============================================================================
// Filter2
// ============================================================================

/// Keeps the pairs matching a predicate. Created by [`PairCursor::filter2`].
pub struct Filter2<C: PairCursor, P> {
    inner: C,
    predicate: P,
    current: Option<(C::Key, C::Value)>,
}

impl<C: PairCursor, P> Filter2<C, P> {
    pub(crate) fn new(inner: C, predicate: P) -> Self {
        Filter2 {
            inner,
            predicate,
            current: None,
        }
    }
}

impl<C, P> PairCursor for Filter2<C, P>
where
    C: PairCursor,
    P: FnMut(&C::Key, &C::Value) -> bool,
{
    type Key = C::Key;
    type Value = C::Value;

    fn advance(&mut self) -> bool {
        self.current = None;
        while self.inner.advance() {
            let keep = match (self.inner.key(), self.inner.value()) {
                (Some(key), Some(value)) => (self.predicate)(key, value),
                _ => false,
            };
            if keep {
                self.current = self.inner.take_pair();
                break;
            }
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
