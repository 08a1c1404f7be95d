//! Cursors that produce elements without an upstream cursor.
//!
//! # Organization
//!
//! - [`slice`] - borrowed slices and owned vectors
//! - [`range`] - numeric ranges with exact sizing
//! - [`seq`] - native `Iterator`s and closures
//! - [`empty`] - the empty and the infinite cursor

pub mod empty;
pub mod range;
pub mod seq;
pub mod slice;

pub use empty::{Empty, Repeat, empty, repeat};
pub use range::{Range, RangeValue, inc_range, inc_range_by, range, range_by, try_range};
pub use seq::{FromFn, FromSeq, Replayable, from_fn, replayable, seq};
pub use slice::{SliceCursor, VecCursor, from_vec, slice};
