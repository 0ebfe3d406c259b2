// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::Ix;

/// An error related to array shape, layout or indexing.
///
/// Every operation in this crate that can be misused returns `ShapeError`
/// instead of panicking. Errors compare equal when their [`ErrorKind`]s are
/// equal; the attached detail is only for diagnostics.
#[derive(Clone, Debug)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    detail: Detail,
}

/// Error code for an error related to array shape, layout or indexing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// malformed argument: wrong index length, changed size in reshape, bad step, ...
    InvalidArgument,
    /// shapes that can not be broadcast together
    IncompatibleShape,
    /// incompatible layout: the strides can not be remapped without a copy
    IncompatibleLayout,
    /// index or slot outside of its valid range
    OutOfBounds,
    /// operation not available for this rank or storage
    Unsupported,
    /// size of the shape does not fit in `isize`
    Overflow,
}

#[derive(Clone, Debug)]
enum Detail {
    None,
    Message(Box<str>),
    Shapes(Box<[Ix]>, Box<[Ix]>),
    Index {
        index: isize,
        axis: Option<usize>,
        bound: usize,
    },
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError` without any detail.
    pub fn from_kind(kind: ErrorKind) -> Self {
        ShapeError {
            repr: kind,
            detail: Detail::None,
        }
    }

    pub(crate) fn with_message(kind: ErrorKind, msg: impl Into<String>) -> Self {
        ShapeError {
            repr: kind,
            detail: Detail::Message(msg.into().into_boxed_str()),
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::InvalidArgument, msg)
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Unsupported, msg)
    }

    /// An index `index` that is not below `bound`, optionally along `axis`.
    pub(crate) fn out_of_bounds(index: isize, axis: Option<usize>, bound: usize) -> Self {
        ShapeError {
            repr: ErrorKind::OutOfBounds,
            detail: Detail::Index { index, axis, bound },
        }
    }

    pub(crate) fn axis_out_of_bounds(axis: usize, ndim: usize) -> Self {
        Self::with_message(
            ErrorKind::OutOfBounds,
            format!("axis {} is out of bounds for an array with {} dimensions", axis, ndim),
        )
    }

    /// Return the offending index, axis and bound of an out of bounds error.
    pub fn index_detail(&self) -> Option<(isize, Option<usize>, usize)> {
        match self.detail {
            Detail::Index { index, axis, bound } => Some((index, axis, bound)),
            _ => None,
        }
    }

    /// Return the pair of shapes involved in the error, if any.
    pub fn shapes(&self) -> Option<(&[Ix], &[Ix])> {
        match &self.detail {
            Detail::Shapes(a, b) => Some((&a[..], &b[..])),
            _ => None,
        }
    }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Eq for ShapeError {}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::IncompatibleLayout => "incompatible layout (not contiguous)",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::Unsupported => "unsupported operation",
            ErrorKind::Overflow => "arithmetic overflow in shape size",
        }
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr.description())?;
        match &self.detail {
            Detail::None => Ok(()),
            Detail::Message(msg) => write!(f, ": {}", msg),
            Detail::Shapes(a, b) => write!(f, ": {:?} and {:?}", a, b),
            Detail::Index {
                index,
                axis: Some(axis),
                bound,
            } => write!(
                f,
                ": index {} is out of bounds for axis {} with size {}",
                index, axis, bound
            ),
            Detail::Index {
                index,
                axis: None,
                bound,
            } => write!(f, ": index {} is out of bounds for size {}", index, bound),
        }
    }
}

/// Shapes `a` and `b` can not be broadcast together.
pub fn incompatible_shapes(a: &[Ix], b: &[Ix]) -> ShapeError {
    ShapeError {
        repr: ErrorKind::IncompatibleShape,
        detail: Detail::Shapes(a.into(), b.into()),
    }
}

/// A reshape from `from` to `to` that changes the number of elements.
pub fn changed_size(from: &[Ix], to: &[Ix]) -> ShapeError {
    ShapeError {
        repr: ErrorKind::InvalidArgument,
        detail: Detail::Shapes(from.into(), to.into()),
    }
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError::from_kind(k)
}
