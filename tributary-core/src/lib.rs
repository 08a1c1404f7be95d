//! Pull-based cursors with lazy adapters and cardinality tracking.
//!
//! Every source and adapter implements [`Cursor`], a small pull protocol
//! (`advance`, `value`, `abort`, `reset`, `size`). Adapters own their upstream
//! cursor, so a chain like
//!
//! ```text
//! range(0, 100)
//!     │
//!     └── filter(even) ── map(square) ── take(5)
//! ```
//!
//! is driven entirely by the outermost cursor. Any cursor can be consumed as a
//! native [`Iterator`] through [`Cursor::iter`] or [`Cursor::into_seq`].
//!
//! # Example
//!
//! ```
//! use tributary_core::{Cursor, IteratorSize, range};
//!
//! let mut evens = range(0, 10).filter(|x| x % 2 == 0).map(|x| x * x);
//! assert_eq!(evens.size(), IteratorSize::AtMost(10));
//! assert_eq!(evens.collect(), vec![0, 4, 16, 36, 64]);
//! ```
//!
//! Concurrent generators live in the `tributary-crossbeam` crate.

pub mod adapters;
pub mod common_tests;
pub mod cursor;
pub mod error;
pub mod mutable;
pub mod pair;
pub mod size;
pub mod sources;
pub mod terminal;

// Re-exports for convenience
pub use adapters::{Chain, Filter, FilterMap, Map, Take, Zip};
pub use cursor::{Cursor, IntoSeq, Seq};
pub use error::{Error, Result};
pub use mutable::{CursorMut, SliceMut, VecMut, slice_mut, vec_mut};
pub use pair::{
    AsKV, Enumerate, Filter2, FromKV, IntoPairSeq, KV, Map2, PairCursor, PairSeq, from_kv,
};
pub use size::{ALLOCATION_CEILING, IteratorSize};
pub use sources::{
    Empty, FromFn, FromSeq, Range, RangeValue, Repeat, Replayable, SliceCursor, VecCursor, empty,
    from_fn, from_vec, inc_range, inc_range_by, range, range_by, repeat, replayable, seq, slice,
    try_range,
};
