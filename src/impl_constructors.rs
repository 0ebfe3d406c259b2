// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays.

use std::rc::Rc;

use crate::data_repr::{OwnedRepr, Storage};
use crate::dimension::{self, IntoShape};
use crate::element::Element;
use crate::error::ShapeError;
use crate::layout::Layout;
use crate::{Array, IntArray, Order};

impl<A> Array<A>
where
    A: Element,
{
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```rust
    /// use ndstride::DoubleArray;
    ///
    /// let array = DoubleArray::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        let len = v.len();
        let layout = Layout::from_parts_sized(0, Box::new([len]), Box::new([1]), len);
        Array::with_layout(Rc::new(OwnedRepr::from_vec(v)), layout)
    }

    /// Create a one-dimensional array from an iterable.
    ///
    /// ```rust
    /// use ndstride::IntArray;
    ///
    /// let array = IntArray::from_iter((0..5).map(|x| x * x));
    /// assert_eq!(array.to_vec(), vec![0, 1, 4, 9, 16]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::from_vec(iterable.into_iter().collect())
    }

    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Errors** if `shape` has no axes or if its number of elements would
    /// overflow `isize`.
    ///
    /// ```
    /// use ndstride::DoubleArray;
    ///
    /// let a = DoubleArray::from_elem((2, 2, 2), 1.).unwrap();
    /// assert_eq!(a.len(), 8);
    /// assert!(a.iter().all(|x| x == 1.));
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Result<Self, ShapeError>
    where
        Sh: IntoShape,
    {
        let layout = Layout::new(shape.into_shape())?;
        let data = OwnedRepr::from_elem(layout.size(), elem);
        Ok(Array::with_layout(Rc::new(data), layout))
    }

    /// Create an array with default values (zero for the numeric kinds,
    /// `false` for `bool`), shape `shape`.
    ///
    /// **Errors** if `shape` has no axes or if its number of elements would
    /// overflow `isize`.
    pub fn zeros<Sh>(shape: Sh) -> Result<Self, ShapeError>
    where
        Sh: IntoShape,
    {
        Self::from_elem(shape, A::default())
    }

    /// Create an array from a vector `v` of elements in column major order.
    ///
    /// **Errors** if the length of `v` is not the number of elements of
    /// `shape`.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.get((0, 1)), Ok(3));
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ShapeError>
    where
        Sh: IntoShape,
    {
        Self::from_shape_vec_order(shape, v, Order::ColumnMajor)
    }

    /// Create an array from a vector `v` of elements laid out in `order`.
    ///
    /// The array uses `v` as its storage without reordering it, so an array
    /// built in row major order is a strided view of its storage: linear
    /// indices keep counting in column major order.
    ///
    /// ```
    /// use ndstride::{IntArray, Order};
    ///
    /// let a = IntArray::from_shape_vec_order((2, 3), vec![1, 2, 3, 4, 5, 6], Order::RowMajor)
    ///     .unwrap();
    /// assert_eq!(a.get((0, 1)), Ok(2));
    /// assert_eq!(a.to_vec(), vec![1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn from_shape_vec_order<Sh>(shape: Sh, v: Vec<A>, order: Order) -> Result<Self, ShapeError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape();
        let size = Layout::new(shape.clone())?.size();
        if size != v.len() {
            return Err(ShapeError::invalid_argument(format!(
                "{} elements do not fill shape {:?}", v.len(), shape)));
        }
        let strides = dimension::strides_for_order(&shape, order);
        let layout = Layout::from_parts_sized(0, shape, strides, size);
        Ok(Array::with_layout(Rc::new(OwnedRepr::from_vec(v)), layout))
    }

    /// Create a fresh array with default values of the same element kind as
    /// `self` and shape `shape`.
    ///
    /// **Errors** with `Unsupported` if `self` does not own its storage, as
    /// for the type adapter views.
    pub fn new_empty_array<Sh>(&self, shape: Sh) -> Result<Self, ShapeError>
    where
        Sh: IntoShape,
    {
        if !self.data.is_owned() {
            return Err(ShapeError::unsupported("new array from a view that does not own its storage"));
        }
        Self::zeros(shape)
    }
}

impl<A> Array<A> {
    /// Create a contiguous array of shape `shape` over `storage`, which may be
    /// any implementation of [`Storage`].
    ///
    /// **Errors** if `storage` has fewer slots than the shape has elements.
    pub fn from_storage<Sh>(shape: Sh, storage: Rc<dyn Storage<A>>) -> Result<Self, ShapeError>
    where
        Sh: IntoShape,
    {
        let layout = Layout::new(shape.into_shape())?;
        if layout.size() > storage.len() {
            return Err(ShapeError::out_of_bounds(layout.size() as isize - 1, None, storage.len()));
        }
        Ok(Array::with_layout(storage, layout))
    }

    /// An array with an already established `layout` over `data`.
    #[inline]
    pub(crate) fn with_layout(data: Rc<dyn Storage<A>>, layout: Layout) -> Self {
        debug_assert!(layout.max_slot().map_or(true, |s| s < data.len()));
        Array { data, layout }
    }

    /// A new array sharing storage with `self`.
    #[inline]
    pub(crate) fn view_with(&self, layout: Layout) -> Self {
        Array::with_layout(self.data.clone(), layout)
    }
}

impl IntArray {
    /// Create a one-dimensional array of the integers `start..end`, empty if
    /// `end <= start`.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// assert_eq!(IntArray::range(2, 5).to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn range(start: i32, end: i32) -> Self {
        Self::from_iter(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn shape_vec_checks_length() {
        let e = IntArray::from_shape_vec((2, 2), vec![1, 2, 3]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn storage_must_cover_the_shape() {
        let s: Rc<dyn Storage<i32>> = Rc::new(OwnedRepr::from_vec(vec![0; 5]));
        assert!(Array::from_storage((2, 2), s.clone()).is_ok());
        let e = Array::from_storage((2, 3), s).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn zero_size_arrays() {
        let a = IntArray::zeros((3, 0)).unwrap();
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
        assert_eq!(a.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn empty_arrays_need_owned_storage() {
        let a = IntArray::range(0, 4);
        let b = a.new_empty_array((2, 3)).unwrap();
        assert_eq!(b.shape(), &[2, 3]);
        assert!(b.iter().all(|x| x == 0));
        let e = a.as_f64().new_empty_array(2).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn row_major_storage_is_a_view() {
        let a = IntArray::from_shape_vec_order((2, 2), vec![1, 2, 3, 4], Order::RowMajor).unwrap();
        assert_eq!(a.strides(), &[2, 1]);
        assert!(a.is_view());
        assert!(a.is_contiguous());
    }
}
