//! Cursors wrapping one or two upstream cursors.
//!
//! Each adapter owns its upstream. `abort` and `reset` always propagate, and
//! the reported size follows what the adapter can still guarantee:
//!
//! | adapter      | size                                   |
//! |--------------|----------------------------------------|
//! | `map`        | upstream size                          |
//! | `filter`     | `upstream.subset()`                    |
//! | `filter_map` | `upstream.subset()`                    |
//! | `take(n)`    | `upstream.intersect(Known(remaining))` |
//! | `chain`      | `first.concat(second)`                 |
//! | `zip`        | `left.intersect(right)`                |

pub mod chain;
pub mod filter;
pub mod map;
pub mod take;
pub mod zip;

pub use chain::Chain;
pub use filter::{Filter, FilterMap};
pub use map::Map;
pub use take::Take;
pub use zip::Zip;
