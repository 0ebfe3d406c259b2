// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::FusedIterator;
use std::ops::Range;

use crate::dimension::Axis;
use crate::element::Element;
use crate::error::ShapeError;
use crate::Array;

/// An iterator over the elements of an array, in linear order.
///
/// Elements are read from storage as the iterator advances; writes made
/// through an alias in the meantime are observed.
///
/// Iterator element type is `A`.
pub struct Iter<'a, A> {
    array: &'a Array<A>,
    range: Range<usize>,
}

impl<'a, A> Iter<'a, A> {
    pub(crate) fn new(array: &'a Array<A>) -> Self {
        Iter {
            array,
            range: 0..array.len(),
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = A;
    #[inline]
    fn next(&mut self) -> Option<A> {
        self.range.next().map(|i| self.array.get_linear(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    #[inline]
    fn next_back(&mut self) -> Option<A> {
        self.range.next_back().map(|i| self.array.get_linear(i))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

/// An iterator over the one-dimensional vectors along an axis, see
/// [`Array::vector_iter`].
///
/// Iterator element type is `Array<A>`, a view of the source.
pub struct VectorIter<A> {
    array: Array<A>,
    ax: usize,
    range: Range<usize>,
}

impl<A: Element> Iterator for VectorIter<A> {
    type Item = Array<A>;

    fn next(&mut self) -> Option<Array<A>> {
        let i = self.range.next()?;
        Some(self.array.vector_at(self.ax, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<A: Element> ExactSizeIterator for VectorIter<A> {}

impl<A: Element> Array<A> {
    /// Return an iterator over the `vectors(axis)` one-dimensional vectors
    /// along `axis`, in the order of [`.vector()`](Array::vector).
    ///
    /// The vectors are views, except when `self` has a broadcast (zero
    /// stride) axis; then `self` is copied once and the vectors are views of
    /// the copy.
    ///
    /// **Errors** if the axis is out of bounds.
    ///
    /// ```
    /// use ndstride::{Axis, IntArray};
    ///
    /// let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
    /// let sums: Vec<i32> = a.vector_iter(Axis(0)).unwrap()
    ///     .map(|v| v.iter().sum())
    ///     .collect();
    /// assert_eq!(sums, vec![1, 5, 9]);
    /// ```
    pub fn vector_iter(&self, axis: Axis) -> Result<VectorIter<A>, ShapeError> {
        let ax = self.layout().check_axis(axis)?;
        let n = self.vectors(axis)?;
        let array = if self.layout().has_zero_stride() { self.copy() } else { self.clone() };
        Ok(VectorIter {
            array,
            ax,
            range: 0..n,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, IntArray};

    #[test]
    fn iter_is_double_ended() {
        let a = IntArray::range(0, 6).reshape((2, 3)).unwrap().transpose();
        assert_eq!(a.iter().len(), 6);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![0, 2, 4, 1, 3, 5]);
        assert_eq!(a.iter().rev().collect::<Vec<_>>(), vec![5, 3, 1, 4, 2, 0]);
    }

    #[test]
    fn vector_iter_yields_every_vector() {
        let a = IntArray::range(0, 3).broadcast((2, 3)).unwrap();
        for axis in 0..2 {
            let n = a.vectors(Axis(axis)).unwrap();
            let it = a.vector_iter(Axis(axis)).unwrap();
            assert_eq!(it.len(), n);
            let vs: Vec<_> = it.collect();
            assert_eq!(vs.len(), n);
            for (i, v) in vs.iter().enumerate() {
                assert_eq!(v.to_vec(), a.vector(Axis(axis), i).unwrap().to_vec());
            }
        }
        let t = IntArray::range(0, 24).reshape((2, 3, 4)).unwrap().transpose();
        let sums: Vec<i32> = t.vector_iter(Axis(1)).unwrap().map(|v| v.iter().sum()).collect();
        assert_eq!(sums.len(), 8);
        assert_eq!(sums.iter().sum::<i32>(), (0..24).sum::<i32>());
    }
}
