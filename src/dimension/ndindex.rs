// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::Debug;

use crate::dimension::offset_2d;
use crate::error::ShapeError;
use crate::layout::Layout;
use crate::Ix;

/// Single integers, tuples, fixed size arrays and vectors that can be used
/// to index an array.
///
/// A single `usize` is a *linear* index, decomposed in column major order
/// (axis 0 varies fastest). Everything else is a multi-index with one entry
/// per axis.
///
/// ```
/// use ndstride::IntArray;
///
/// let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
/// assert_eq!(a.get(3), Ok(3));
/// assert_eq!(a.get((1, 1)), Ok(3));
/// assert_eq!(a.get([1, 2]), Ok(5));
/// a.set((1, 1), 40).unwrap();
/// assert_eq!(a.get(3), Ok(40));
/// ```
pub trait NdIndex: Debug {
    /// Return the storage slot of this index, or an error if it does not
    /// address an element of `layout`.
    #[doc(hidden)]
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError>;
}

impl NdIndex for Ix {
    #[inline]
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_checked(*self)
    }
}

impl NdIndex for (Ix, Ix) {
    #[inline]
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        if layout.ndim() != 2 {
            return layout.slot_of(&[self.0, self.1]);
        }
        let shape = layout.shape();
        if self.0 >= shape[0] {
            return Err(ShapeError::out_of_bounds(self.0 as isize, Some(0), shape[0]));
        }
        if self.1 >= shape[1] {
            return Err(ShapeError::out_of_bounds(self.1 as isize, Some(1), shape[1]));
        }
        Ok(offset_2d(self.0, self.1, layout.offset(), layout.strides()))
    }
}

impl NdIndex for (Ix, Ix, Ix) {
    #[inline]
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_of(&[self.0, self.1, self.2])
    }
}

impl NdIndex for (Ix, Ix, Ix, Ix) {
    #[inline]
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_of(&[self.0, self.1, self.2, self.3])
    }
}

impl<const N: usize> NdIndex for [Ix; N] {
    #[inline]
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_of(self)
    }
}

impl<'a> NdIndex for &'a [Ix] {
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_of(self)
    }
}

impl NdIndex for Vec<Ix> {
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_of(self)
    }
}

impl<'a> NdIndex for &'a Vec<Ix> {
    fn index_checked(&self, layout: &Layout) -> Result<Ix, ShapeError> {
        layout.slot_of(self)
    }
}
