// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::Index;
use std::ops::IndexMut;

use crate::Ix;

/// Read a shape or stride slice front to back.
pub(in crate::dimension) struct Forward<S>(pub(crate) S);
/// Read a shape or stride slice back to front.
pub(in crate::dimension) struct Reverse<S>(pub(crate) S);

impl Index<usize> for Forward<&[Ix]> {
    type Output = Ix;

    #[inline]
    fn index(&self, index: usize) -> &Ix {
        &self.0[index]
    }
}

impl Index<usize> for Forward<&mut [Ix]> {
    type Output = Ix;

    #[inline]
    fn index(&self, index: usize) -> &Ix {
        &self.0[index]
    }
}

impl IndexMut<usize> for Forward<&mut [Ix]> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Ix {
        &mut self.0[index]
    }
}

impl Index<usize> for Reverse<&[Ix]> {
    type Output = Ix;

    #[inline]
    fn index(&self, index: usize) -> &Ix {
        &self.0[self.0.len() - index - 1]
    }
}

impl Index<usize> for Reverse<&mut [Ix]> {
    type Output = Ix;

    #[inline]
    fn index(&self, index: usize) -> &Ix {
        &self.0[self.0.len() - index - 1]
    }
}

impl IndexMut<usize> for Reverse<&mut [Ix]> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Ix {
        let len = self.0.len();
        &mut self.0[len - index - 1]
    }
}

/// Indexable sequence with length
pub(in crate::dimension) trait Sequence: Index<usize, Output = Ix> {
    fn len(&self) -> usize;
}

/// Indexable sequence with length (mut)
pub(in crate::dimension) trait SequenceMut: Sequence + IndexMut<usize> {}

impl Sequence for Forward<&[Ix]> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Sequence for Forward<&mut [Ix]> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl SequenceMut for Forward<&mut [Ix]> {}

impl Sequence for Reverse<&[Ix]> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Sequence for Reverse<&mut [Ix]> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl SequenceMut for Reverse<&mut [Ix]> {}
