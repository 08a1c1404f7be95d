//! Crossbeam-based generators and channels for tributary cursors.
//!
//! A generator runs a body on its own worker thread and hands every yielded
//! value to the consuming [`Cursor`](tributary_core::Cursor) over a
//! zero-capacity `crossbeam::channel`. Each yield blocks until the consumer
//! pulls it, and stopping the consumer (abort, drop, or a spent
//! [`take`](tributary_core::Cursor::take)) makes the next yield return
//! [`Aborted`].
//!
//! # Usage
//!
//! ```
//! use tributary_core::Cursor;
//! use tributary_crossbeam::generate;
//!
//! let mut evens = generate(|co| {
//!     for i in 0.. {
//!         co.yield_value(i * 2)?;
//!     }
//!     Ok(())
//! })
//! .take(3);
//!
//! assert_eq!(evens.collect(), vec![0, 2, 4]);
//! ```
//!
//! # Organization
//!
//! - [`generator`] - plain generators, panics re-raised on the consumer
//! - [`result_generator`] - generators yielding `Result`, failures as elements
//! - [`chan`](mod@chan) - cursor to channel and channel to cursor
//! - [`options`] - worker thread configuration

pub mod chan;
pub mod error;
pub mod generator;
pub mod options;
pub mod result_generator;

pub use chan::{ChanCursor, chan, from_chan};
pub use error::{Aborted, GenerateError, GeneratorPanic};
pub use generator::{Consumer, Generator, generate};
pub use options::GeneratorOptions;
pub use result_generator::{ResultConsumer, ResultGenerator, generate_results};
