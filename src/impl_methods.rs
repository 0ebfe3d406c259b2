// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::rc::Rc;

use crate::data_repr::OwnedRepr;
use crate::dimension::{Axis, NdIndex};
use crate::element::Element;
use crate::error::ShapeError;
use crate::iterators::Iter;
use crate::layout::Layout;
use crate::{Array, Ix};

/// # Methods For All Arrays
impl<A> Array<A> {
    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Return whether the array has any elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the array
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Return the shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[Ix] {
        self.layout.shape()
    }

    /// Return the strides of the array as a slice.
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        self.layout.strides()
    }

    /// Return the storage slot of the first element.
    #[inline]
    pub fn offset(&self) -> Ix {
        self.layout.offset()
    }

    /// Return the layout (shape, strides and offset) of the array.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Return the length of `axis`.
    ///
    /// **Errors** if the axis is out of bounds.
    pub fn len_of(&self, axis: Axis) -> Result<Ix, ShapeError> {
        self.layout.len_of(axis)
    }

    /// Return the stride of `axis`.
    ///
    /// **Errors** if the axis is out of bounds.
    pub fn stride_of(&self, axis: Axis) -> Result<Ix, ShapeError> {
        self.layout.stride_of(axis)
    }

    /// The axis that varies fastest in memory.
    #[inline]
    pub fn major_stride_index(&self) -> usize {
        self.layout.major_stride_index()
    }

    /// Stride of the axis that varies fastest in memory.
    #[inline]
    pub fn major_stride(&self) -> Ix {
        self.layout.major_stride()
    }

    /// Return true if the major stride is one.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Return true if the layout of the array differs from that of a fresh
    /// array of the same shape, i.e. it was derived from another array.
    #[inline]
    pub fn is_view(&self) -> bool {
        self.layout.is_view()
    }

    /// Return true if `self` and `other` read and write the same storage,
    /// also when one of them reads it through a type adapter.
    #[inline]
    pub fn shares_storage<B>(&self, other: &Array<B>) -> bool {
        self.data.root() == other.data.root()
    }

    /// Return true if the array has two axes.
    #[inline]
    pub fn is_matrix(&self) -> bool {
        self.ndim() == 2
    }

    /// Return true if the array has two axes of equal length.
    pub fn is_square(&self) -> bool {
        self.is_matrix() && self.shape()[0] == self.shape()[1]
    }

    /// Return true if the array has one axis, or two axes one of which has
    /// length one.
    pub fn is_vector(&self) -> bool {
        match *self.shape() {
            [_] => true,
            [r, c] => r == 1 || c == 1,
            _ => false,
        }
    }

    /// Return the number of rows of a matrix.
    ///
    /// **Errors** with `Unsupported` if the array does not have two axes.
    pub fn rows(&self) -> Result<Ix, ShapeError> {
        self.ensure_matrix("rows").map(|_| self.shape()[0])
    }

    /// Return the number of columns of a matrix.
    ///
    /// **Errors** with `Unsupported` if the array does not have two axes.
    pub fn columns(&self) -> Result<Ix, ShapeError> {
        self.ensure_matrix("columns").map(|_| self.shape()[1])
    }

    pub(crate) fn ensure_matrix(&self, what: &str) -> Result<(), ShapeError> {
        if self.is_matrix() {
            Ok(())
        } else {
            Err(ShapeError::unsupported(format!(
                "{} of an array with {} dimensions", what, self.ndim())))
        }
    }

    /// Return the number of vectors along `axis`: the number of elements
    /// divided by the length of the axis.
    ///
    /// **Errors** if the axis is out of bounds.
    pub fn vectors(&self, axis: Axis) -> Result<usize, ShapeError> {
        let len = self.len_of(axis)?;
        Ok(if len == 0 { 0 } else { self.len() / len })
    }

    /// Return the element at `index`.
    ///
    /// `index` is either a linear index (a single `usize`, counted in column
    /// major order) or a multi-index with one entry per axis; see
    /// [`NdIndex`].
    ///
    /// **Errors** if the index has the wrong number of entries or is out of
    /// bounds.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 6).reshape((3, 2)).unwrap();
    /// assert_eq!(a.get((2, 1)), Ok(5));
    /// assert!(a.get((3, 0)).is_err());
    /// ```
    pub fn get<I>(&self, index: I) -> Result<A, ShapeError>
    where
        I: NdIndex,
    {
        index.index_checked(&self.layout).map(|slot| self.data.read(slot))
    }

    /// Set the element at `index` to `value`; the change is visible through
    /// every array sharing storage with `self`.
    ///
    /// **Errors** if the index has the wrong number of entries or is out of
    /// bounds.
    pub fn set<I>(&self, index: I, value: A) -> Result<(), ShapeError>
    where
        I: NdIndex,
    {
        index.index_checked(&self.layout).map(|slot| self.data.write(slot, value))
    }

    /// Element at linear index `i`, which must be below `len()`.
    #[inline]
    pub(crate) fn get_linear(&self, i: Ix) -> A {
        self.data.read(self.layout.slot(i))
    }

    #[inline]
    pub(crate) fn set_linear(&self, i: Ix, value: A) {
        self.data.write(self.layout.slot(i), value)
    }

    /// Return an iterator over the elements in linear order.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(self)
    }

    /// Return the elements in linear order.
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().collect()
    }

    /// Set the element at linear index `to` to the element at linear index
    /// `from` of `other`.
    ///
    /// **Errors** if either index is out of bounds.
    pub fn set_from(&self, to: Ix, other: &Array<A>, from: Ix) -> Result<(), ShapeError> {
        let value = other.get(from)?;
        self.set(to, value)
    }

    /// Swap the elements at linear indices `a` and `b`.
    ///
    /// **Errors** if either index is out of bounds.
    pub fn swap(&self, a: Ix, b: Ix) -> Result<(), ShapeError> {
        let sa = self.layout.slot_checked(a)?;
        let sb = self.layout.slot_checked(b)?;
        let va = self.data.read(sa);
        let vb = self.data.read(sb);
        self.data.write(sa, vb);
        self.data.write(sb, va);
        Ok(())
    }

    /// Assign the elements of `other` to `self`, pairing them up in linear
    /// order.
    ///
    /// The shapes may differ as long as the number of elements is the same.
    /// If the two arrays share storage the elements of `other` are read
    /// before any is written.
    ///
    /// **Errors** if the number of elements differs.
    pub fn assign(&self, other: &Array<A>) -> Result<(), ShapeError> {
        if self.len() != other.len() {
            return Err(ShapeError::invalid_argument(format!(
                "can not assign {} elements to an array of {} elements", other.len(), self.len())));
        }
        if self.shares_storage(other) {
            let values: Vec<A> = other.iter().collect();
            for (i, v) in values.into_iter().enumerate() {
                self.set_linear(i, v);
            }
        } else {
            for i in 0..self.len() {
                self.set_linear(i, other.get_linear(i));
            }
        }
        Ok(())
    }

    /// Return the backing buffer of the array, all of its storage slots
    /// in storage order.
    ///
    /// **Errors** with `Unsupported` if the storage does not own a buffer, as
    /// for the type adapter views.
    pub fn into_raw_vec(self) -> Result<Vec<A>, ShapeError> {
        self.data
            .to_vec()
            .ok_or_else(|| ShapeError::unsupported("the storage of this array is not an owned buffer"))
    }
}

impl<A> Array<A>
where
    A: Element,
{
    /// Set every element to `value`.
    pub fn assign_elem(&self, value: A) {
        for i in 0..self.len() {
            self.set_linear(i, value.clone());
        }
    }

    /// Return a copy of the array in fresh, contiguous storage that no other
    /// array aliases. Elements are copied in linear order, so the copy has
    /// the standard column major layout.
    pub fn copy(&self) -> Array<A> {
        let data = OwnedRepr::from_vec(self.to_vec());
        let layout = Layout::from_parts_sized(
            0,
            self.shape().into(),
            crate::dimension::default_strides(self.shape()),
            self.len(),
        );
        Array::with_layout(Rc::new(data), layout)
    }
}
