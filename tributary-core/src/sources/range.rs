//! Numeric ranges with exact sizing.
//!
//! A range walks from `from` towards `to` in steps of `|step|`. The element
//! count is computed up front, so a range reports [`IteratorSize::Known`]
//! unless the count does not fit in a `usize`. Elements are computed as `from ± n·|step|`, which
//! keeps float ranges free of accumulated rounding drift.

use std::fmt;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::size::IteratorSize;

/// Numeric types a [`Range`] can walk over.
///
/// Implemented for all primitive integers up to 64 bits, `isize`, `usize`,
/// `f32` and `f64`.
pub trait RangeValue: Copy + PartialOrd + fmt::Debug {
    const ZERO: Self;
    const ONE: Self;

    /// Returns false for values a range cannot be built from (NaN, infinities).
    fn is_valid(self) -> bool {
        true
    }

    fn is_negative(self) -> bool;

    /// Number of elements in the range, assuming it passed validation.
    ///
    /// `None` when the count does not fit in a `usize`.
    fn span(from: Self, to: Self, step: Self, inclusive: bool) -> Option<usize>;

    /// The `n`-th element: `from + n·|step|`, or `from - n·|step|` when descending.
    fn offset(from: Self, step: Self, n: usize, descending: bool) -> Self;
}

macro_rules! impl_range_value_int {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[allow(unused_comparisons)]
            fn is_negative(self) -> bool {
                self < 0
            }

            fn span(from: Self, to: Self, step: Self, inclusive: bool) -> Option<usize> {
                let distance = (to as i128 - from as i128).unsigned_abs();
                let step = (step as i128).unsigned_abs();
                if step == 0 {
                    return Some(usize::from(inclusive && distance == 0));
                }

                let count = if inclusive {
                    distance / step + 1
                } else {
                    distance.div_ceil(step)
                };
                usize::try_from(count).ok()
            }

            fn offset(from: Self, step: Self, n: usize, descending: bool) -> Self {
                let delta = (step as i128).unsigned_abs() as i128 * n as i128;
                let value = if descending {
                    from as i128 - delta
                } else {
                    from as i128 + delta
                };
                value as Self
            }
        }
    )*};
}

macro_rules! impl_range_value_float {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn is_valid(self) -> bool {
                self.is_finite()
            }

            fn is_negative(self) -> bool {
                self < 0.0
            }

            fn span(from: Self, to: Self, step: Self, inclusive: bool) -> Option<usize> {
                let distance = (to - from).abs();
                let step = step.abs();
                if step == 0.0 {
                    return Some(usize::from(inclusive && distance == 0.0));
                }

                let quotient = distance / step;
                let count = if inclusive {
                    quotient.floor() + 1.0
                } else {
                    quotient.ceil()
                };
                // `usize::MAX as f64` may round up past `usize::MAX`.
                (f64::from(count) < usize::MAX as f64).then_some(count as usize)
            }

            fn offset(from: Self, step: Self, n: usize, descending: bool) -> Self {
                let delta = step.abs() * n as $t;
                if descending { from - delta } else { from + delta }
            }
        }
    )*};
}

impl_range_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_range_value_float!(f32, f64);

// ============================================================================
// Constructors
// ============================================================================

/// Half-open range `[from, to)` stepping by one towards `to`.
///
/// # Panics
///
/// Panics if a bound is not finite.
pub fn range<T: RangeValue>(from: T, to: T) -> Range<T> {
    unit_step(from, to, false)
}

/// Closed range `[from, to]` stepping by one towards `to`.
///
/// # Panics
///
/// Panics if a bound is not finite.
pub fn inc_range<T: RangeValue>(from: T, to: T) -> Range<T> {
    unit_step(from, to, true)
}

/// Half-open range `[from, to)` with an explicit signed step.
///
/// # Panics
///
/// Panics if the step cannot walk from `from` to `to`, see [`try_range`].
pub fn range_by<T: RangeValue>(from: T, to: T, step: T) -> Range<T> {
    try_range(from, to, step, false).unwrap_or_else(|error| panic!("{error}"))
}

/// Closed range `[from, to]` with an explicit signed step.
///
/// # Panics
///
/// Panics if the step cannot walk from `from` to `to`, see [`try_range`].
pub fn inc_range_by<T: RangeValue>(from: T, to: T, step: T) -> Range<T> {
    try_range(from, to, step, true).unwrap_or_else(|error| panic!("{error}"))
}

/// Builds a range, rejecting configurations that cannot be walked.
///
/// - a zero `step` is only accepted when `from == to`; the range then holds
///   that single value if `inclusive`, and nothing otherwise;
/// - a positive `step` requires `to >= from`, a negative one `to <= from`;
/// - float bounds and steps must be finite.
pub fn try_range<T: RangeValue>(from: T, to: T, step: T, inclusive: bool) -> Result<Range<T>> {
    if !(from.is_valid() && to.is_valid() && step.is_valid()) {
        return Err(Error::InvalidRange {
            reason: "bounds and step must be finite",
        });
    }

    if step == T::ZERO {
        if from != to {
            return Err(Error::InvalidRange {
                reason: "zero step requires equal bounds",
            });
        }
    } else if step.is_negative() {
        if to > from {
            return Err(Error::InvalidRange {
                reason: "negative step cannot reach a higher bound",
            });
        }
    } else if to < from {
        return Err(Error::InvalidRange {
            reason: "positive step cannot reach a lower bound",
        });
    }

    Ok(Range::new(from, to, step, step.is_negative(), inclusive))
}

fn unit_step<T: RangeValue>(from: T, to: T, inclusive: bool) -> Range<T> {
    assert!(
        from.is_valid() && to.is_valid(),
        "invalid range: bounds and step must be finite"
    );
    Range::new(from, to, T::ONE, to < from, inclusive)
}

// ============================================================================
// Range
// ============================================================================

/// Cursor over an arithmetic progression.
#[derive(Debug, Clone)]
pub struct Range<T> {
    from: T,
    to: T,
    step: T,
    descending: bool,
    inclusive: bool,
    count: usize,
    // False when the true count overflowed and `count` saturated.
    exact: bool,
    index: usize,
    current: Option<T>,
    aborted: bool,
}

impl<T: RangeValue> Range<T> {
    fn new(from: T, to: T, step: T, descending: bool, inclusive: bool) -> Self {
        let span = T::span(from, to, step, inclusive);
        Range {
            from,
            to,
            step,
            descending,
            inclusive,
            count: span.unwrap_or(usize::MAX),
            exact: span.is_some(),
            index: 0,
            current: None,
            aborted: false,
        }
    }

    /// Total number of elements, independent of the current position.
    ///
    /// Saturates at `usize::MAX`, e.g. for `inc_range(0u64, u64::MAX)` on
    /// 64-bit targets.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `(from, to, inclusive)`.
    pub fn bounds(&self) -> (T, T, bool) {
        (self.from, self.to, self.inclusive)
    }
}

impl<T: RangeValue> Cursor for Range<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.aborted || self.index >= self.count {
            self.current = None;
            return false;
        }

        self.current = Some(T::offset(self.from, self.step, self.index, self.descending));
        self.index += 1;
        true
    }

    fn value(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn take_value(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn abort(&mut self) {
        self.aborted = true;
        self.current = None;
    }

    fn reset(&mut self) -> Result<()> {
        self.index = 0;
        self.current = None;
        self.aborted = false;
        Ok(())
    }

    fn size(&self) -> IteratorSize {
        if self.aborted {
            return IteratorSize::Known(0);
        }
        if !self.exact {
            return IteratorSize::AtMost(usize::MAX);
        }
        IteratorSize::Known(self.count - self.index)
    }
}

// ============================================================================
// Tests
// ============================================================================
