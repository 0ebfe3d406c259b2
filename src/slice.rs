// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use num_integer::Integer;

use crate::error::ShapeError;
use crate::Ix;

/// A range with step size along one axis.
///
/// `start` and `end` must lie within `0..=len` of the axis they are applied
/// to and `step` must be positive. If `end` is `None`, the slice extends to
/// the end of the axis.
///
/// ## Examples
///
/// `Slice::new(0, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)`.
///
/// `Slice::new(a, Some(b), 2)` is every second element from `a` until `b`.
/// It can also be created with `Slice::from(a..b).step_by(2)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: isize,
    pub end: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(i..)` or `Slice::from(j..k)`.
    pub fn new(start: isize, end: Option<isize>, step: isize) -> Slice {
        Slice { start, end, step }
    }

    /// The full range of an axis.
    #[inline]
    pub fn full() -> Slice {
        Slice::from(..)
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        Slice {
            step: self.step * step,
            ..self
        }
    }

    /// Resolve the slice against an axis of length `len`, returning its
    /// first index, number of elements and step.
    ///
    /// **Errors** if `step` is not positive, if `start` or `end` is outside
    /// `0..=len` or if `end` is before `start`.
    pub(crate) fn resolve(&self, axis: usize, len: Ix) -> Result<(Ix, Ix, Ix), ShapeError> {
        if self.step <= 0 {
            return Err(ShapeError::invalid_argument(format!(
                "step must be positive, got {} for axis {}", self.step, axis)));
        }
        let end = self.end.unwrap_or(len as isize);
        for bound in [self.start, end] {
            if bound < 0 || bound as usize > len {
                return Err(ShapeError::out_of_bounds(bound, Some(axis), len));
            }
        }
        if end < self.start {
            return Err(ShapeError::invalid_argument(format!(
                "slice end {} is before start {} for axis {}", end, self.start, axis)));
        }
        let start = self.start as usize;
        let step = self.step as usize;
        let count = Integer::div_ceil(&(end as usize - start), &step);
        Ok((start, count, step))
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice {
                Slice {
                    start: r.start as isize,
                    end: Some(r.end as isize),
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice {
                Slice {
                    start: r.start as isize,
                    end: None,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice {
                Slice {
                    start: 0,
                    end: Some(r.end as isize),
                    step: 1,
                }
            }
        }
    }
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice {
            start: 0,
            end: None,
            step: 1,
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..", self.start)?;
        if let Some(end) = self.end {
            write!(f, "{}", end)?;
        }
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn resolve_counts_rounding_up() {
        assert_eq!(Slice::from(..).resolve(0, 5), Ok((0, 5, 1)));
        assert_eq!(Slice::from(1..5).step_by(2).resolve(0, 5), Ok((1, 2, 2)));
        assert_eq!(Slice::from(1..6).step_by(2).resolve(0, 6), Ok((1, 3, 2)));
        assert_eq!(Slice::from(3..3).resolve(0, 3), Ok((3, 0, 1)));
    }

    #[test]
    fn resolve_rejects_bad_slices() {
        let kind = |s: Slice| s.resolve(1, 4).map_err(|e| e.kind());
        assert_eq!(kind(Slice::new(0, None, 0)), Err(ErrorKind::InvalidArgument));
        assert_eq!(kind(Slice::new(0, None, -1)), Err(ErrorKind::InvalidArgument));
        assert_eq!(kind(Slice::new(-1, None, 1)), Err(ErrorKind::OutOfBounds));
        assert_eq!(kind(Slice::new(0, Some(5), 1)), Err(ErrorKind::OutOfBounds));
        assert_eq!(kind(Slice::new(3, Some(2), 1)), Err(ErrorKind::InvalidArgument));
        let e = Slice::new(0, Some(5), 1).resolve(1, 4).unwrap_err();
        assert_eq!(e.index_detail(), Some((5, Some(1), 4)));
    }

    #[test]
    fn display() {
        assert_eq!(Slice::from(1..4).step_by(2).to_string(), "1..4;2");
        assert_eq!(Slice::from(..).to_string(), "0..");
    }
}
