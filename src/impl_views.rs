// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods that derive a view of an array: a new layout over the same
//! storage. None of them touches an element, except for the documented
//! copies of `reshape`, `ravel` and `vector`.

use crate::dimension::{self, Axis, IntoShape};
use crate::element::Element;
use crate::error::{ErrorKind, ShapeError};
use crate::layout::Layout;
use crate::slice::Slice;
use crate::{Array, Ix};

impl<A> Array<A> {
    /// Select the subview `index` along axis 0, removing that axis.
    ///
    /// **Errors** with `Unsupported` for a one-dimensional array and if
    /// `index` is out of bounds.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
    /// assert_eq!(a.select(1).unwrap().to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn select(&self, index: Ix) -> Result<Array<A>, ShapeError> {
        self.select_axis(Axis(0), index)
    }

    /// Select the subview `index` along `axis`, removing that axis.
    ///
    /// **Errors** with `Unsupported` for a one-dimensional array and if
    /// `axis` or `index` is out of bounds.
    ///
    /// ```
    /// use ndstride::{Axis, IntArray};
    ///
    /// let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
    /// assert_eq!(a.select_axis(Axis(1), 2).unwrap().to_vec(), vec![4, 5]);
    /// ```
    pub fn select_axis(&self, axis: Axis, index: Ix) -> Result<Array<A>, ShapeError> {
        let ax = self.layout.check_axis(axis)?;
        if self.ndim() == 1 {
            return Err(ShapeError::unsupported("select on a one-dimensional array"));
        }
        let len = self.shape()[ax];
        if index >= len {
            return Err(ShapeError::out_of_bounds(index as isize, Some(ax), len));
        }
        let offset = self.offset() + index * self.strides()[ax];
        let shape = dimension::remove_axis(self.shape(), ax);
        let strides = dimension::remove_axis(self.strides(), ax);
        Ok(self.view_with(Layout::derive(offset, shape, strides)))
    }

    /// Return a sliced view of the array, one [`Slice`] per axis starting
    /// with axis 0. Axes without a slice are kept whole.
    ///
    /// **Errors** if `slices` is empty or has more entries than the array has
    /// axes, or if any slice is invalid for its axis (see [`Slice`]).
    ///
    /// ```
    /// use ndstride::{IntArray, Slice};
    ///
    /// let a = IntArray::range(0, 12).reshape((3, 4)).unwrap();
    /// let b = a.slice(&[Slice::from(1..3), Slice::from(..).step_by(2)]).unwrap();
    /// assert_eq!(b.shape(), &[2, 2]);
    /// assert_eq!(b.to_vec(), vec![1, 2, 7, 8]);
    /// ```
    pub fn slice(&self, slices: &[Slice]) -> Result<Array<A>, ShapeError> {
        self.check_indexer_count(slices.len())?;
        let mut offset = self.offset();
        let mut shape: Box<[Ix]> = self.shape().into();
        let mut strides: Box<[Ix]> = self.strides().into();
        for (axis, s) in slices.iter().enumerate() {
            let (start, count, step) = s.resolve(axis, shape[axis])?;
            offset += start * strides[axis];
            shape[axis] = count;
            // the step never moves from a single element
            if count > 1 {
                strides[axis] = strides[axis].checked_mul(step).ok_or_else(|| {
                    ShapeError::with_message(ErrorKind::Overflow, "slice stride overflows")
                })?;
            }
        }
        Ok(self.view_with(Layout::derive(offset, shape, strides)))
    }

    pub(crate) fn check_indexer_count(&self, n: usize) -> Result<(), ShapeError> {
        if n == 0 {
            Err(ShapeError::invalid_argument("too few indexers"))
        } else if n > self.ndim() {
            Err(ShapeError::invalid_argument(format!(
                "too many indexers: {} for an array with {} dimensions", n, self.ndim())))
        } else {
            Ok(())
        }
    }

    /// Return a view of the same storage with an arbitrary layout.
    ///
    /// **Errors** if `shape` and `strides` do not have the same, non-zero,
    /// length, or if some element of the view would lie outside the storage.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 9);
    /// let b = a.as_view(1, &[2, 2], &[3, 1]).unwrap();
    /// assert_eq!(b.to_vec(), vec![1, 4, 2, 5]);
    /// assert!(a.as_view(1, &[3, 3], &[1, 3]).is_err());
    /// ```
    pub fn as_view(&self, offset: Ix, shape: &[Ix], strides: &[Ix]) -> Result<Array<A>, ShapeError> {
        let layout = Layout::from_parts(offset, shape.into(), strides.into())?;
        let storage_len = self.data.len();
        if layout.size() > 0 {
            match layout.max_slot() {
                None => return Err(ShapeError::with_message(
                    ErrorKind::Overflow, "storage slot of the last element overflows")),
                Some(slot) if slot >= storage_len => {
                    return Err(ShapeError::out_of_bounds(slot as isize, None, storage_len))
                }
                Some(_) => {}
            }
        }
        Ok(self.view_with(layout))
    }

    /// Transpose the array by reversing its axes. A one-dimensional array is
    /// returned as is.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.get((2, 1)), a.get((1, 2)));
    /// ```
    pub fn transpose(&self) -> Array<A> {
        if self.ndim() == 1 {
            return self.clone();
        }
        let shape = self.shape().iter().rev().cloned().collect();
        let strides = self.strides().iter().rev().cloned().collect();
        let layout = Layout::from_parts_sized(self.offset(), shape, strides, self.len());
        self.view_with(layout)
    }

    /// Return a view of the array with shape `shape`, with the elements in
    /// the same linear order.
    ///
    /// **Errors** with `InvalidArgument` if the number of elements differs,
    /// and with `IncompatibleLayout` if the strides of `self` do not allow a
    /// view; see [`.reshape()`](Array::reshape) for a version that copies
    /// instead.
    pub fn reshape_view<Sh>(&self, shape: Sh) -> Result<Array<A>, ShapeError>
    where
        Sh: IntoShape,
    {
        let layout = self.layout.reshaped(shape.into_shape())?;
        Ok(self.view_with(layout))
    }

    /// Return a view of the array broadcast to `shape`.
    ///
    /// Axes are matched starting from the last one; axes of length one are
    /// repeated with stride zero, and new leading axes are added with stride
    /// zero. Several indices of the result then address the same storage
    /// slot: a write through one of them is seen through all of them.
    ///
    /// **Errors** naming both shapes if `self` can not be broadcast to
    /// `shape`.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 5);
    /// let b = a.broadcast((2, 5)).unwrap();
    /// assert_eq!(b.strides(), &[0, 1]);
    /// assert_eq!(b.select(1).unwrap().to_vec(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn broadcast<Sh>(&self, shape: Sh) -> Result<Array<A>, ShapeError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape();
        let strides = dimension::broadcast_strides(self.strides(), self.shape(), &shape)?;
        let layout = Layout::from_parts(self.offset(), shape, strides)?;
        Ok(self.view_with(layout))
    }

    /// Broadcast `self` and `other` to their common shape.
    ///
    /// **Errors** naming both shapes if they are not compatible.
    pub fn broadcast_with<B>(&self, other: &Array<B>) -> Result<(Array<A>, Array<B>), ShapeError> {
        let shape = dimension::co_broadcast(self.shape(), other.shape())?;
        Ok((self.broadcast(shape.clone())?, other.broadcast(shape)?))
    }

    /// The vector `index` along `axis`, without copying a broadcast array.
    fn vector_view(&self, axis: Axis, index: usize) -> Result<Array<A>, ShapeError> {
        let ax = self.layout.check_axis(axis)?;
        let n = self.vectors(axis)?;
        if index >= n {
            return Err(ShapeError::out_of_bounds(index as isize, None, n));
        }
        Ok(self.vector_at(ax, index))
    }

    /// View of vector `index` along axis `ax`; both must be in bounds.
    pub(crate) fn vector_at(&self, ax: usize, index: usize) -> Array<A> {
        let rest_shape = dimension::remove_axis(self.shape(), ax);
        let rest_strides = dimension::remove_axis(self.strides(), ax);
        let fixed = dimension::unravel_index(index, &rest_shape);
        let offset = dimension::offset_of(&fixed, self.offset(), &rest_strides);
        let shape = Box::new([self.shape()[ax]]);
        let strides = Box::new([self.strides()[ax]]);
        self.view_with(Layout::derive(offset, shape, strides))
    }
}

impl<A> Array<A>
where
    A: Element,
{
    /// Return the array with shape `shape`, with the elements in the same
    /// linear order.
    ///
    /// The result is a view of `self` when the strides allow it: always for
    /// a contiguous column major array, and otherwise when every group of
    /// merged or split axes is contiguous by itself. If not, `self` is first
    /// copied into fresh storage and the result is a view of the copy.
    ///
    /// **Errors** if the number of elements differs.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 9).reshape((3, 3)).unwrap();
    /// let b = a.transpose().reshape((1, 9)).unwrap();
    /// assert!(!b.shares_storage(&a));
    /// assert_eq!(b.to_vec(), vec![0, 3, 6, 1, 4, 7, 2, 5, 8]);
    /// ```
    pub fn reshape<Sh>(&self, shape: Sh) -> Result<Array<A>, ShapeError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape();
        match self.layout.reshaped(shape.clone()) {
            Ok(layout) => Ok(self.view_with(layout)),
            Err(e) if e.kind() == ErrorKind::IncompatibleLayout => self.copy().reshape_view(shape),
            Err(e) => Err(e),
        }
    }

    /// Return the elements as a one-dimensional array, in linear order. This
    /// is a view when the strides allow it, and a copy otherwise.
    pub fn ravel(&self) -> Array<A> {
        let len = self.len();
        match self.layout.reshaped(Box::new([len])) {
            Ok(layout) => self.view_with(layout),
            Err(_) => {
                let layout = Layout::from_parts_sized(0, Box::new([len]), Box::new([1]), len);
                self.copy().view_with(layout)
            }
        }
    }

    /// Return the one-dimensional vector `index` along `axis`: all other axes
    /// are held fixed at the multi-index obtained by decomposing `index` over
    /// their lengths in column major order, while `axis` varies.
    ///
    /// `index` must be below [`.vectors(axis)`](Array::vectors). The result is
    /// a view, except when `self` has a broadcast (zero stride) axis; then it
    /// is a view of a copy of `self`.
    ///
    /// **Errors** if `axis` or `index` is out of bounds.
    ///
    /// ```
    /// use ndstride::{Axis, IntArray};
    ///
    /// let a = IntArray::range(0, 27).reshape((3, 3, 3)).unwrap();
    /// assert_eq!(a.vector(Axis(1), 1).unwrap().to_vec(), vec![1, 4, 7]);
    /// assert_eq!(a.vector(Axis(0), 4).unwrap().to_vec(), vec![12, 13, 14]);
    /// ```
    pub fn vector(&self, axis: Axis, index: usize) -> Result<Array<A>, ShapeError> {
        if self.layout.has_zero_stride() {
            self.copy().vector_view(axis, index)
        } else {
            self.vector_view(axis, index)
        }
    }

    /// Assign `other` to the vector `index` along `axis`, see
    /// [`.vector()`](Array::vector).
    ///
    /// **Errors** if `axis` or `index` is out of bounds or if `other` does
    /// not have as many elements as the vector.
    pub fn set_vector(&self, axis: Axis, index: usize, other: &Array<A>) -> Result<(), ShapeError> {
        self.vector_view(axis, index)?.assign(other)
    }
}

/// Broadcast every array in `arrays` to their common shape.
///
/// **Errors** if `arrays` is empty or if the shapes are not compatible.
///
/// ```
/// use ndstride::{broadcast_arrays, IntArray};
///
/// let a = IntArray::range(0, 3).reshape((3, 1)).unwrap();
/// let b = IntArray::range(0, 4).reshape((1, 4)).unwrap();
/// let ab = broadcast_arrays(&[a, b]).unwrap();
/// assert_eq!(ab[0].shape(), &[3, 4]);
/// assert_eq!(ab[1].shape(), &[3, 4]);
/// ```
pub fn broadcast_arrays<A>(arrays: &[Array<A>]) -> Result<Vec<Array<A>>, ShapeError> {
    let shape = dimension::broadcast_shapes(arrays.iter().map(|a| a.shape()))?;
    arrays.iter().map(|a| a.broadcast(shape.clone())).collect()
}
