// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Advanced indexing: gather and scatter with integer index arrays.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::dimension;
use crate::element::{BooleanArray, Element, IntArray};
use crate::error::{ErrorKind, ShapeError};
use crate::slice::Slice;
use crate::{Array, Ix};

/// An indexer for one axis: a basic range, or an array of integer indices.
///
/// A list of indexers that are all basic selects a view, see
/// [`Array::slice`]. As soon as one of them is an integer array, indexing
/// gathers the addressed elements into a fresh array; see
/// [`Array::get_indexed`] for the shape of the result.
#[derive(Clone, Debug)]
pub enum Indexer {
    /// A range with step along the axis
    Slice(Slice),
    /// Integer indices along the axis
    Array(IntArray),
}

impl Indexer {
    /// Return true if this is a basic (range) indexer.
    #[inline]
    pub fn is_basic(&self) -> bool {
        matches!(self, Indexer::Slice(_))
    }
}

impl From<Slice> for Indexer {
    fn from(s: Slice) -> Indexer {
        Indexer::Slice(s)
    }
}

impl From<IntArray> for Indexer {
    fn from(a: IntArray) -> Indexer {
        Indexer::Array(a)
    }
}

impl From<Vec<i32>> for Indexer {
    fn from(v: Vec<i32>) -> Indexer {
        Indexer::Array(IntArray::from_vec(v))
    }
}

macro_rules! indexer_from_range {
    ($($r:ty),*) => {
        $(
        impl From<$r> for Indexer {
            fn from(r: $r) -> Indexer {
                Indexer::Slice(Slice::from(r))
            }
        }
        )*
    };
}

indexer_from_range!(Range<usize>, RangeFrom<usize>, RangeTo<usize>, RangeFull);

/// The shape of an advanced indexing result, and one index array per axis
/// of the source, each broadcast to that shape.
#[derive(Debug)]
pub(crate) struct IndexPlan {
    shape: Box<[Ix]>,
    indices: Vec<IntArray>,
}

impl IndexPlan {
    /// Resolve `indexers` against an array of shape `shape`. At least one
    /// indexer must be an integer array; axes after the last indexer are
    /// taken whole.
    ///
    /// The integer arrays are broadcast together. If they are adjacent, the
    /// broadcast shape replaces them in the result shape; if a range lies
    /// between two of them, the broadcast shape comes first, followed by the
    /// lengths of all ranges in order.
    pub(crate) fn new(shape: &[Ix], indexers: &[Indexer]) -> Result<IndexPlan, ShapeError> {
        let ndim = shape.len();
        let full = Indexer::Slice(Slice::full());
        let indexers: Vec<&Indexer> = indexers
            .iter()
            .chain(std::iter::repeat(&full))
            .take(ndim)
            .collect();

        let advanced: Vec<usize> = (0..ndim).filter(|&d| !indexers[d].is_basic()).collect();
        let (first, last) = match (advanced.first(), advanced.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => return Err(ShapeError::invalid_argument("no integer array among the indexers")),
        };
        let bshape = dimension::broadcast_shapes(indexers.iter().filter_map(|ix| match ix {
            Indexer::Array(a) => Some(a.shape()),
            Indexer::Slice(_) => None,
        }))?;
        let blen = bshape.len();
        let adjacent = last - first + 1 == advanced.len();

        // resolved (start, count, step) of the basic axes
        let mut ranges = vec![None; ndim];
        for (d, ix) in indexers.iter().enumerate() {
            if let Indexer::Slice(s) = ix {
                ranges[d] = Some(s.resolve(d, shape[d])?);
            }
        }

        // position of the broadcast block in the result, then of each range
        let bpos = if adjacent { ranges[..first].iter().flatten().count() } else { 0 };
        let mut result = Vec::with_capacity(blen + ndim);
        let mut positions = vec![0; ndim];
        for (d, range) in ranges.iter().enumerate() {
            if let Some((_, count, _)) = *range {
                if result.len() == bpos {
                    result.extend_from_slice(&bshape);
                }
                positions[d] = result.len();
                result.push(count);
            }
        }
        if result.len() == bpos {
            result.extend_from_slice(&bshape);
        }
        let rank = result.len();
        let result: Box<[Ix]> = result.into_boxed_slice();
        dimension::size_of_shape_checked(&result)?;

        let mut indices = Vec::with_capacity(ndim);
        for (d, ix) in indexers.iter().enumerate() {
            let mut padded = vec![1; rank];
            let index = match (ix, ranges[d]) {
                (Indexer::Slice(_), Some((start, count, step))) => {
                    padded[positions[d]] = count;
                    let values = (0..count)
                        .map(|k| index_value(start + k * step))
                        .collect::<Result<Vec<i32>, _>>()?;
                    IntArray::from_vec(values).reshape(padded)?
                }
                (Indexer::Array(a), _) => {
                    padded[bpos..bpos + blen].copy_from_slice(&bshape);
                    a.broadcast(bshape.clone())?.reshape(padded)?
                }
                (Indexer::Slice(s), None) => {
                    return Err(ShapeError::invalid_argument(format!("unresolved slice {}", s)))
                }
            };
            indices.push(index.broadcast(result.clone())?);
        }
        Ok(IndexPlan {
            shape: result,
            indices,
        })
    }

    pub(crate) fn shape(&self) -> &[Ix] {
        &self.shape
    }

    /// Number of elements addressed.
    pub(crate) fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Storage slots, in linear order of the result, of the elements of
    /// `array` the plan addresses.
    ///
    /// **Errors** naming the axis if any index is out of bounds.
    pub(crate) fn slots<A>(&self, array: &Array<A>) -> Result<Vec<Ix>, ShapeError> {
        let shape = array.shape();
        let strides = array.strides();
        (0..self.len())
            .map(|i| {
                let mut slot = array.offset();
                for (d, index) in self.indices.iter().enumerate() {
                    let v = index.get_linear(i);
                    if v < 0 || v as usize >= shape[d] {
                        return Err(ShapeError::out_of_bounds(v as isize, Some(d), shape[d]));
                    }
                    slot += v as usize * strides[d];
                }
                Ok(slot)
            })
            .collect()
    }
}

/// Convert a resolved range position to an index array element.
#[inline]
fn index_value(i: usize) -> Result<i32, ShapeError> {
    i32::try_from(i).map_err(|_| {
        ShapeError::with_message(ErrorKind::Overflow, format!("index {} does not fit an index array", i))
    })
}

impl<A> Array<A>
where
    A: Element,
{
    /// Index the array with one [`Indexer`] per axis, starting with axis 0;
    /// axes after the last indexer are taken whole.
    ///
    /// If every indexer is a range, the result is a view (see
    /// [`.slice()`](Array::slice)). Otherwise the elements are gathered
    /// into a fresh array: the integer arrays are broadcast together, and the
    /// broadcast shape takes their place in the result shape if they are
    /// adjacent. If ranges separate them, the broadcast shape comes first,
    /// followed by the lengths of all ranges in order.
    ///
    /// **Errors** if there are no indexers or more than the array has axes,
    /// if the integer arrays can not be broadcast together, or if any index
    /// is out of bounds (naming the axis).
    ///
    /// ```
    /// use ndstride::{Indexer, IntArray};
    ///
    /// let a = IntArray::range(0, 24).reshape((2, 3, 4)).unwrap();
    /// let b = a.get_indexed(&[
    ///     Indexer::from(vec![0, 1]),
    ///     Indexer::from(..),
    ///     Indexer::from(vec![3, 2]),
    /// ]).unwrap();
    /// assert_eq!(b.shape(), &[2, 3]);
    /// assert_eq!(b.get((1, 2)), a.get((1, 2, 2)));
    /// ```
    pub fn get_indexed(&self, indexers: &[Indexer]) -> Result<Array<A>, ShapeError> {
        self.check_indexer_count(indexers.len())?;
        if let Some(slices) = basic_slices(indexers) {
            return self.slice(&slices);
        }
        let plan = IndexPlan::new(self.shape(), indexers)?;
        let values = plan.slots(self)?.into_iter().map(|s| self.data.read(s)).collect();
        Array::from_shape_vec(plan.shape(), values)
    }

    /// Assign `values`, broadcast to the shape of the indexing result, to
    /// the elements that [`.get_indexed()`](Array::get_indexed) with the
    /// same indexers would gather.
    ///
    /// Nothing is written unless every index is in bounds. If an element is
    /// addressed more than once, the last assignment in linear order wins.
    ///
    /// **Errors** under the same conditions as `get_indexed`, and if
    /// `values` can not be broadcast to the result shape.
    pub fn set_indexed(&self, indexers: &[Indexer], values: &Array<A>) -> Result<(), ShapeError> {
        self.check_indexer_count(indexers.len())?;
        if let Some(slices) = basic_slices(indexers) {
            let view = self.slice(&slices)?;
            return view.assign(&values.broadcast(view.shape())?);
        }
        let plan = IndexPlan::new(self.shape(), indexers)?;
        let values = values.broadcast(plan.shape())?.to_vec();
        for (slot, v) in plan.slots(self)?.into_iter().zip(values) {
            self.data.write(slot, v);
        }
        Ok(())
    }

    /// Select with one list of indices per leading axis. The lists must have
    /// the same length `n`; the result has shape `n` followed by the lengths
    /// of the remaining axes, and entry `j` is the subarray at the `j`th
    /// index of every list.
    ///
    /// **Errors** if there are no lists or more than the array has axes, if
    /// their lengths differ or if an index is out of bounds.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 12).reshape((3, 4)).unwrap();
    /// let b = a.select_indices(&[vec![2, 0]]).unwrap();
    /// assert_eq!(b.shape(), &[2, 4]);
    /// assert_eq!(b.get((0, 1)), a.get((2, 1)));
    /// ```
    pub fn select_indices(&self, indices: &[Vec<usize>]) -> Result<Array<A>, ShapeError> {
        self.check_indexer_count(indices.len())?;
        let n = indices[0].len();
        let mut indexers = Vec::with_capacity(indices.len());
        for (d, list) in indices.iter().enumerate() {
            if list.len() != n {
                return Err(ShapeError::invalid_argument(format!(
                    "index lists of lengths {} and {} can not be used together", n, list.len())));
            }
            let values = list
                .iter()
                .map(|&i| {
                    i32::try_from(i)
                        .map_err(|_| ShapeError::out_of_bounds(isize::MAX, Some(d), self.shape()[d]))
                })
                .collect::<Result<Vec<_>, _>>()?;
            indexers.push(Indexer::from(values));
        }
        self.get_indexed(&indexers)
    }

    /// Return the elements where `mask` is true, in linear order, as a
    /// one-dimensional array.
    ///
    /// **Errors** if `mask` does not have the shape of `self`.
    pub fn get_masked(&self, mask: &BooleanArray) -> Result<Array<A>, ShapeError> {
        self.check_mask(mask)?;
        Ok(Array::from_iter(
            self.iter().zip(mask.iter()).filter(|(_, m)| *m).map(|(x, _)| x)))
    }

    /// Set the elements where `mask` is true to `value`.
    ///
    /// **Errors** if `mask` does not have the shape of `self`.
    pub fn set_masked(&self, mask: &BooleanArray, value: A) -> Result<(), ShapeError> {
        self.check_mask(mask)?;
        for (i, m) in mask.iter().enumerate() {
            if m {
                self.set_linear(i, value.clone());
            }
        }
        Ok(())
    }

    fn check_mask(&self, mask: &BooleanArray) -> Result<(), ShapeError> {
        if mask.shape() == self.shape() {
            Ok(())
        } else {
            Err(ShapeError::invalid_argument(format!(
                "mask of shape {:?} for an array of shape {:?}", mask.shape(), self.shape())))
        }
    }
}

fn basic_slices(indexers: &[Indexer]) -> Option<Vec<Slice>> {
    indexers
        .iter()
        .map(|ix| match ix {
            Indexer::Slice(s) => Some(*s),
            Indexer::Array(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn plan_shape(shape: &[Ix], indexers: &[Indexer]) -> Vec<Ix> {
        IndexPlan::new(shape, indexers).unwrap().shape().to_vec()
    }

    #[test]
    fn range_past_index_array_limit_overflows() {
        let big = i32::MAX as usize + 1;
        assert_eq!(index_value(big).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(index_value(big - 1).unwrap(), i32::MAX);
        let indexers = [Slice::new(big as isize, None, 1).into(), Indexer::from(vec![0])];
        let e = IndexPlan::new(&[big + 2, 1], &indexers).err().unwrap();
        assert_eq!(e.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn adjacent_arrays_take_their_place() {
        let ix = |v: Vec<i32>| Indexer::from(v);
        assert_eq!(plan_shape(&[5, 6, 7], &[Indexer::from(..), ix(vec![0, 1, 2]), ix(vec![1, 1, 1])]),
                   vec![5, 3]);
        assert_eq!(plan_shape(&[5, 6, 7], &[ix(vec![0, 1])]), vec![2, 6, 7]);
        assert_eq!(plan_shape(&[5, 6, 7, 8], &[Indexer::from(1..3), ix(vec![0, 1]), ix(vec![2, 2])]),
                   vec![2, 2, 8]);
    }

    #[test]
    fn separated_arrays_go_first() {
        let a = IntArray::from_vec(vec![0, 1, 0, 1]).reshape((2, 2)).unwrap();
        let plan = plan_shape(&[5, 6, 7], &[a.clone().into(), Indexer::from(1..4), a.into()]);
        assert_eq!(plan, vec![2, 2, 3]);
    }

    #[test]
    fn arrays_must_broadcast() {
        let e = IndexPlan::new(&[5, 6], &[vec![0, 1].into(), vec![0, 1, 2].into()]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    }

    #[test]
    fn out_of_bounds_names_the_axis() {
        let a = IntArray::zeros((2, 3)).unwrap();
        let e = a.get_indexed(&[Indexer::from(..), vec![0, 3].into()]).unwrap_err();
        assert_eq!(e.index_detail(), Some((3, Some(1), 3)));
        let e = a.get_indexed(&[vec![-1].into()]).unwrap_err();
        assert_eq!(e.index_detail(), Some((-1, Some(0), 2)));
    }

    #[test]
    fn indexer_count() {
        let a = IntArray::zeros((2, 3)).unwrap();
        assert_eq!(a.get_indexed(&[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
        let too_many = [Indexer::from(..), Indexer::from(..), Indexer::from(..)];
        assert_eq!(a.get_indexed(&too_many).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn scatter_is_all_or_nothing() {
        let a = IntArray::zeros(4).unwrap();
        let values = IntArray::from_vec(vec![1, 2]);
        assert!(a.set_indexed(&[vec![0, 4].into()], &values).is_err());
        assert_eq!(a.to_vec(), vec![0, 0, 0, 0]);
        a.set_indexed(&[vec![3, 1].into()], &values).unwrap();
        assert_eq!(a.to_vec(), vec![0, 2, 0, 1]);
    }

    #[test]
    fn masks() {
        let a = IntArray::range(0, 4).reshape((2, 2)).unwrap();
        let m = BooleanArray::from_shape_vec((2, 2), vec![false, true, false, true]).unwrap();
        assert_eq!(a.get_masked(&m).unwrap().to_vec(), vec![1, 3]);
        a.set_masked(&m, 9).unwrap();
        assert_eq!(a.to_vec(), vec![0, 9, 2, 9]);
        let wrong = BooleanArray::zeros(4).unwrap();
        assert!(a.get_masked(&wrong).is_err());
    }
}
