// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// An axis index.
///
/// An *n*-dimensional array has *n* axes (dimensions). Axis *0* varies
/// fastest in the linear, column major, traversal of an array and *n*-1
/// slowest.
///
/// Methods that take a dimension argument use this type so that call sites
/// can not confuse an axis with an element index.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Axis(pub usize);

impl Axis {
    /// Return the index of the axis.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Axis {
    #[inline]
    fn from(index: usize) -> Self {
        Axis(index)
    }
}
