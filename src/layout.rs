// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension::{self, Axis};
use crate::error::{changed_size, ShapeError};
use crate::Ix;

/// The geometry of an array: shape, strides and the offset of the first
/// element in its storage.
///
/// A `Layout` is an immutable value. Every view derivation builds a new one
/// from plain shape and stride buffers; the number of elements and the major
/// stride index are computed once, when the layout is created.
///
/// Strides are counted in storage slots and are never negative. A stride of
/// zero repeats the same slot along an axis, which is how broadcasting is
/// represented.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    shape: Box<[Ix]>,
    strides: Box<[Ix]>,
    offset: Ix,
    size: usize,
    major: usize,
}

impl Layout {
    /// Create the layout of a fresh, contiguous array of `shape`, starting at
    /// slot zero.
    ///
    /// **Errors** if `shape` has no axes or if its size overflows.
    pub fn new(shape: Box<[Ix]>) -> Result<Layout, ShapeError> {
        let size = checked_rank_and_size(&shape)?;
        let strides = dimension::default_strides(&shape);
        Ok(Layout::from_parts_sized(0, shape, strides, size))
    }

    /// Create a layout from its parts.
    ///
    /// **Errors** if the shape and strides do not have the same, non-zero,
    /// length or if the size of the shape overflows. No storage bounds are
    /// checked here; see `Array::as_view`.
    pub fn from_parts(offset: Ix, shape: Box<[Ix]>, strides: Box<[Ix]>)
        -> Result<Layout, ShapeError>
    {
        if shape.len() != strides.len() {
            return Err(ShapeError::invalid_argument(format!(
                "shape {:?} and strides {:?} have different lengths", shape, strides)));
        }
        let size = checked_rank_and_size(&shape)?;
        Ok(Layout::from_parts_sized(offset, shape, strides, size))
    }

    /// Derive a layout whose size the caller has already established, such
    /// as any view of an existing layout.
    pub(crate) fn from_parts_sized(offset: Ix, shape: Box<[Ix]>, strides: Box<[Ix]>, size: usize)
        -> Layout
    {
        debug_assert_eq!(shape.len(), strides.len());
        debug_assert_eq!(size, shape.iter().product::<usize>());
        let major = dimension::infer_major(&shape, &strides);
        Layout {
            shape,
            strides,
            offset,
            size,
            major,
        }
    }

    /// Derive a layout from a sub-block, slice or selection of this one.
    pub(crate) fn derive(offset: Ix, shape: Box<[Ix]>, strides: Box<[Ix]>) -> Layout {
        let size = shape.iter().product();
        Layout::from_parts_sized(offset, shape, strides, size)
    }

    #[inline]
    pub fn shape(&self) -> &[Ix] {
        &self.shape
    }

    #[inline]
    pub fn strides(&self) -> &[Ix] {
        &self.strides
    }

    #[inline]
    pub fn offset(&self) -> Ix {
        self.offset
    }

    /// Number of elements, the product of the shape.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The axis that varies fastest in memory.
    #[inline]
    pub fn major_stride_index(&self) -> usize {
        self.major
    }

    #[inline]
    pub fn major_stride(&self) -> Ix {
        self.strides[self.major]
    }

    /// Length of `axis`.
    pub fn len_of(&self, axis: Axis) -> Result<Ix, ShapeError> {
        self.check_axis(axis).map(|i| self.shape[i])
    }

    /// Stride of `axis`.
    pub fn stride_of(&self, axis: Axis) -> Result<Ix, ShapeError> {
        self.check_axis(axis).map(|i| self.strides[i])
    }

    pub(crate) fn check_axis(&self, axis: Axis) -> Result<usize, ShapeError> {
        if axis.index() < self.ndim() {
            Ok(axis.index())
        } else {
            Err(ShapeError::axis_out_of_bounds(axis.index(), self.ndim()))
        }
    }

    /// Return true if the major stride is one.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.major_stride() == 1
    }

    /// Return true if this layout is the column major layout of a fresh array
    /// of the same shape.
    pub fn is_standard_layout(&self) -> bool {
        self.offset == 0 && *self.strides == *dimension::default_strides(&self.shape)
    }

    /// Return true if this layout differs from the layout of a fresh array:
    /// it starts at a non-zero slot or has other strides.
    #[inline]
    pub fn is_view(&self) -> bool {
        !self.is_standard_layout()
    }

    /// Return true if some axis of length > 1 has stride zero, i.e. several
    /// indices map to the same storage slot.
    pub fn has_zero_stride(&self) -> bool {
        self.shape.iter().zip(&*self.strides).any(|(&d, &s)| d > 1 && s == 0)
    }

    /// Storage slot of the linear index `index`, which must be below `size`.
    #[inline]
    pub(crate) fn slot(&self, index: Ix) -> Ix {
        debug_assert!(index < self.size);
        dimension::linear_offset(index, self.offset, &self.strides, &self.shape)
    }

    /// Storage slot of the linear index `index`.
    ///
    /// **Errors** if `index` is not below `size`.
    pub fn slot_checked(&self, index: Ix) -> Result<Ix, ShapeError> {
        if index < self.size {
            Ok(self.slot(index))
        } else {
            Err(ShapeError::out_of_bounds(index as isize, None, self.size))
        }
    }

    /// Storage slot of the multi-index `index`.
    ///
    /// **Errors** if `index` does not have one entry per axis, or if an entry
    /// is outside its axis.
    pub fn slot_of(&self, index: &[Ix]) -> Result<Ix, ShapeError> {
        if index.len() != self.ndim() {
            return Err(ShapeError::invalid_argument(format!(
                "index of length {} for an array with {} dimensions", index.len(), self.ndim())));
        }
        for (axis, (&i, &len)) in index.iter().zip(&*self.shape).enumerate() {
            if i >= len {
                return Err(ShapeError::out_of_bounds(i as isize, Some(axis), len));
            }
        }
        Ok(dimension::offset_of(index, self.offset, &self.strides))
    }

    /// Largest storage slot this layout can reach, `None` if it is empty.
    pub fn max_slot(&self) -> Option<Ix> {
        dimension::max_slot(self.offset, &self.shape, &self.strides)
    }

    /// Return the layout of the same elements seen through `shape`, if that
    /// is possible without moving any element.
    ///
    /// **Errors** with `InvalidArgument` if the sizes differ and with
    /// `IncompatibleLayout` if the elements would need to be copied.
    pub(crate) fn reshaped(&self, shape: Box<[Ix]>) -> Result<Layout, ShapeError> {
        let size = checked_rank_and_size(&shape)?;
        if size != self.size {
            return Err(changed_size(&self.shape, &shape));
        }
        if size == 0 {
            let strides = dimension::default_strides(&shape);
            return Ok(Layout::from_parts_sized(self.offset, shape, strides, size));
        }
        let strides = if dimension::is_column_major(&self.shape, &self.strides) {
            dimension::default_strides(&shape)
        } else {
            dimension::reshape_strides(&self.shape, &self.strides, &shape, crate::Order::ColumnMajor)?
        };
        Ok(Layout::from_parts_sized(self.offset, shape, strides, size))
    }
}

fn checked_rank_and_size(shape: &[Ix]) -> Result<usize, ShapeError> {
    if shape.is_empty() {
        return Err(ShapeError::invalid_argument("an array must have at least one dimension"));
    }
    dimension::size_of_shape_checked(shape)
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("offset", &self.offset)
            .field("major", &self.major)
            .finish()
    }
}
