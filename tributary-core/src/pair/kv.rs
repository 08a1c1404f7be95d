use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::pair::PairCursor;
use crate::size::IteratorSize;

/// A key/value pair travelling through a plain [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KV<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KV<K, V> {
    pub fn new(key: K, value: V) -> Self {
        KV { key, value }
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KV<K, V> {
    fn from((key, value): (K, V)) -> Self {
        KV { key, value }
    }
}

impl<K, V> From<KV<K, V>> for (K, V) {
    fn from(kv: KV<K, V>) -> Self {
        kv.into_pair()
    }
}

/// Reinterprets a cursor of [`KV`] items as a [`PairCursor`].
pub fn from_kv<C, K, V>(inner: C) -> FromKV<C, K, V>
where
    C: Cursor<Item = KV<K, V>>,
{
    FromKV {
        inner,
        _kv: PhantomData,
    }
}

// ============================================================================
// AsKV
// ============================================================================

/// Plain cursor over the pairs of a [`PairCursor`]. Created by
/// [`PairCursor::as_kv`].
pub struct AsKV<C: PairCursor> {
    inner: C,
    current: Option<KV<C::Key, C::Value>>,
}

impl<C: PairCursor> AsKV<C> {
    pub(crate) fn new(inner: C) -> Self {
        AsKV {
            inner,
            current: None,
        }
    }
}

impl<C: PairCursor> Cursor for AsKV<C> {
    type Item = KV<C::Key, C::Value>;

    fn advance(&mut self) -> bool {
        self.current = if self.inner.advance() {
            self.inner.take_pair().map(KV::from)
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

// ============================================================================
// FromKV
// ============================================================================

/// Pair cursor over a cursor of [`KV`] items. Created by [`from_kv`].
pub struct FromKV<C, K, V> {
    inner: C,
    _kv: PhantomData<fn() -> (K, V)>,
}

impl<C, K, V> PairCursor for FromKV<C, K, V>
where
    C: Cursor<Item = KV<K, V>>,
{
    type Key = K;
    type Value = V;

    fn advance(&mut self) -> bool {
        self.inner.advance()
    }

    fn key(&self) -> Option<&Self::Key> {
        self.inner.value().map(|kv| &kv.key)
    }

    fn value(&self) -> Option<&Self::Value> {
        self.inner.value().map(|kv| &kv.value)
    }

    fn take_pair(&mut self) -> Option<(Self::Key, Self::Value)> {
        self.inner.take_value().map(KV::into_pair)
    }

    fn abort(&mut self) {
        self.inner.abort();
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }

    fn size(&self) -> IteratorSize {
        self.inner.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{from_vec, range};

    #[test]
    fn test_as_kv_flattens() {
        let mut flat = range(7, 9).enumerate().as_kv();

        assert_eq!(flat.size(), IteratorSize::Known(2));
        assert_eq!(flat.collect(), vec![KV::new(0, 7), KV::new(1, 8)]);
    }

    #[test]
    fn test_as_kv_with_plain_terminals() {
        let mut flat = range(0, 5).enumerate().as_kv();
        assert!(flat.all(|kv| kv.key as i32 == kv.value));
    }

    #[test]
    fn test_from_kv() {
        let items = from_vec(vec![KV::new("a", 1), KV::new("b", 2)]);
        let mut pairs = from_kv(items);

        assert!(pairs.advance());
        assert_eq!(pairs.key(), Some(&"a"));
        assert_eq!(pairs.value(), Some(&1));
        assert_eq!(pairs.collect_pairs(), vec![("b", 2)]);
    }

    #[test]
    fn test_into_pairs_round_trip_through_filter() {
        let mut kept = range(0, 6)
            .enumerate()
            .as_kv()
            .filter(|kv| kv.value % 2 == 0)
            .into_pairs();

        assert_eq!(kept.collect_pairs(), vec![(0, 0), (2, 2), (4, 4)]);
    }

    #[test]
    fn test_into_pairs_borrows_owned_entries() {
        let mut pairs = from_vec(vec![KV::new(String::from("left"), vec![1, 2])]).into_pairs();

        assert!(pairs.advance());
        assert_eq!(pairs.key().map(String::as_str), Some("left"));
        assert_eq!(pairs.value().map(Vec::len), Some(2));
        assert_eq!(pairs.take_pair(), Some((String::from("left"), vec![1, 2])));
        assert!(!pairs.advance());
    }

    #[test]
    fn test_kv_tuple_conversions() {
        let kv: KV<&str, u8> = ("k", 1).into();
        let (key, value): (&str, u8) = kv.into();
        assert_eq!((key, value), ("k", 1));
    }
}
