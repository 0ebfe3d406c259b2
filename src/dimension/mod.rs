// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic.
//!
//! Everything in this module operates on plain `&[Ix]` shapes and strides.
//! Linear indices are always interpreted in column major order: axis 0
//! varies fastest.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Ix, Order};

pub use self::axis::Axis;
pub use self::broadcast::{broadcast_shapes, broadcast_strides, co_broadcast, is_broadcast_compatible};
pub use self::into_shape::IntoShape;
pub use self::ndindex::NdIndex;
pub(crate) use self::reshape::reshape_strides;

mod axis;
mod broadcast;
mod into_shape;
mod ndindex;
mod reshape;
mod sequence;

/// Compute the number of elements of `shape`.
///
/// **Errors** with `Overflow` if the product of the non-zero axis lengths does
/// not fit in `isize`; the strides of such a shape could not be represented
/// even if one axis is zero.
pub fn size_of_shape_checked(shape: &[Ix]) -> Result<usize, ShapeError> {
    let size_nonzero = shape
        .iter()
        .filter(|&&d| d != 0)
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
    if size_nonzero > isize::MAX as usize {
        Err(from_kind(ErrorKind::Overflow))
    } else {
        Ok(shape.iter().product())
    }
}

/// Strides of a fresh, contiguous array: `stride[0] = 1` and
/// `stride[d] = stride[d - 1] * shape[d - 1]`.
///
/// `shape` must have passed [`size_of_shape_checked`].
pub fn default_strides(shape: &[Ix]) -> Box<[Ix]> {
    let mut acc = 1;
    shape
        .iter()
        .map(|&d| {
            let s = acc;
            acc *= d;
            s
        })
        .collect()
}

/// Strides of a fresh, contiguous array of `shape` laid out in `order`.
pub fn strides_for_order(shape: &[Ix], order: Order) -> Box<[Ix]> {
    match order {
        Order::ColumnMajor => default_strides(shape),
        Order::RowMajor => {
            let mut strides = shape.to_vec();
            let mut acc = 1;
            for (s, &d) in strides.iter_mut().zip(shape).rev() {
                *s = acc;
                acc *= d;
            }
            strides.into_boxed_slice()
        }
    }
}

/// Return `values` with the element at `axis` removed.
pub fn remove_axis(values: &[Ix], axis: usize) -> Box<[Ix]> {
    debug_assert!(axis < values.len());
    values[..axis].iter().chain(&values[axis + 1..]).cloned().collect()
}

/// Storage slot of the linear (column major) index `index`.
///
/// `index` must be below the size of `shape`.
#[inline]
pub fn linear_offset(index: Ix, offset: Ix, strides: &[Ix], shape: &[Ix]) -> Ix {
    match strides.len() {
        1 => offset + index * strides[0],
        2 => {
            let rows = shape[0];
            let col = index / rows;
            offset + (index - rows * col) * strides[0] + col * strides[1]
        }
        _ => {
            let mut index = index;
            let mut offset = offset;
            for (&len, &s) in shape.iter().zip(strides) {
                let next = index / len;
                offset += (index - len * next) * s;
                index = next;
            }
            offset
        }
    }
}

/// Storage slot of the row and column pair `(i, j)`.
#[inline(always)]
pub fn offset_2d(i: Ix, j: Ix, offset: Ix, strides: &[Ix]) -> Ix {
    offset + i * strides[0] + j * strides[1]
}

/// Storage slot of the multi-index `index`.
#[inline]
pub fn offset_of(index: &[Ix], offset: Ix, strides: &[Ix]) -> Ix {
    index
        .iter()
        .zip(strides)
        .fold(offset, |acc, (&i, &s)| acc + i * s)
}

/// Decompose the linear (column major) index `index` into a multi-index.
pub fn unravel_index(index: Ix, shape: &[Ix]) -> Vec<Ix> {
    let mut index = index;
    shape
        .iter()
        .map(|&len| {
            let sub = index % len;
            index /= len;
            sub
        })
        .collect()
}

/// Largest storage slot reachable through `shape` and `strides`, or `None`
/// for an empty shape. Also `None` if the computation overflows.
pub fn max_slot(offset: Ix, shape: &[Ix], strides: &[Ix]) -> Option<Ix> {
    if shape.iter().any(|&d| d == 0) {
        return None;
    }
    shape
        .iter()
        .zip(strides)
        .try_fold(offset, |acc, (&d, &s)| (d - 1).checked_mul(s).and_then(|x| acc.checked_add(x)))
}

/// The axis that varies fastest in memory: the axis of length > 1 with the
/// smallest stride, or the smallest stride overall if every axis has length
/// at most one. Ties go to the lowest axis.
pub fn infer_major(shape: &[Ix], strides: &[Ix]) -> usize {
    let candidates = || shape.iter().zip(strides).enumerate();
    let pick = |long_only: bool| {
        candidates()
            .filter(|&(_, (&d, _))| !long_only || d > 1)
            .min_by_key(|&(i, (_, &s))| (s, i))
            .map(|(i, _)| i)
    };
    pick(true).or_else(|| pick(false)).unwrap_or(0)
}

/// Return true if `strides` is the column major contiguous layout of `shape`.
///
/// Axes of length one may have any stride.
pub fn is_column_major(shape: &[Ix], strides: &[Ix]) -> bool {
    let mut expected = 1;
    for (&d, &s) in shape.iter().zip(strides) {
        if d != 1 && s != expected {
            return false;
        }
        expected *= d;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn strides_are_column_major() {
        assert_eq!(&*default_strides(&[3, 4, 5]), &[1, 3, 12]);
        assert_eq!(&*default_strides(&[7]), &[1]);
        assert_eq!(&*default_strides(&[2, 0, 3]), &[1, 2, 0]);
        assert_eq!(&*strides_for_order(&[3, 4, 5], Order::RowMajor), &[20, 5, 1]);
    }

    #[test]
    fn size_overflow_is_detected() {
        assert_eq!(size_of_shape_checked(&[2, 3, 4]), Ok(24));
        assert_eq!(size_of_shape_checked(&[2, 0, 4]), Ok(0));
        let e = size_of_shape_checked(&[usize::MAX, 2]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Overflow);
        let e = size_of_shape_checked(&[usize::MAX / 2, 0, 4]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn remove_axis_keeps_order() {
        assert_eq!(&*remove_axis(&[1, 2, 3], 0), &[2, 3]);
        assert_eq!(&*remove_axis(&[1, 2, 3], 1), &[1, 3]);
        assert_eq!(&*remove_axis(&[1, 2, 3], 2), &[1, 2]);
    }

    #[test]
    fn fast_paths_match_general_loop() {
        let shape = [3, 4];
        let strides = [5, 17];
        for i in 0..12 {
            let idx = unravel_index(i, &shape);
            assert_eq!(linear_offset(i, 2, &strides, &shape), offset_of(&idx, 2, &strides));
            assert_eq!(linear_offset(i, 2, &strides, &shape), offset_2d(idx[0], idx[1], 2, &strides));
        }
    }

    #[test]
    fn major_axis() {
        assert_eq!(infer_major(&[3, 3], &[1, 3]), 0);
        assert_eq!(infer_major(&[3, 3], &[3, 1]), 1);
        assert_eq!(infer_major(&[1, 4], &[1, 3]), 1);
        assert_eq!(infer_major(&[3, 4], &[0, 1]), 0);
        assert_eq!(infer_major(&[1, 1], &[4, 2]), 1);
    }

    #[test]
    fn max_slot_of_layouts() {
        assert_eq!(max_slot(0, &[3, 3], &[1, 3]), Some(8));
        assert_eq!(max_slot(4, &[2, 2], &[1, 3]), Some(8));
        assert_eq!(max_slot(0, &[0, 3], &[1, 0]), None);
    }

    quickcheck! {
        fn linear_index_round_trip(shape: Vec<u8>, offset: u8) -> TestResult {
            let shape: Vec<Ix> = shape.into_iter().take(5).map(|d| d as usize % 5 + 1).collect();
            if shape.is_empty() {
                return TestResult::discard();
            }
            let strides = default_strides(&shape);
            let size: usize = shape.iter().product();
            let offset = offset as usize;
            for i in 0..size {
                let idx = unravel_index(i, &shape);
                if linear_offset(i, offset, &strides, &shape) != offset_of(&idx, offset, &strides) {
                    return TestResult::failed();
                }
            }
            TestResult::passed()
        }

        fn linear_index_round_trip_strided(shape: Vec<u8>, strides: Vec<u8>, offset: u8) -> TestResult {
            let shape: Vec<Ix> = shape.into_iter().take(5).map(|d| d as usize % 4 + 1).collect();
            if shape.len() < 3 {
                return TestResult::discard();
            }
            let mut strides: Vec<Ix> = strides.into_iter().map(|s| s as usize % 13).collect();
            strides.resize(shape.len(), 1);
            let size: usize = shape.iter().product();
            let offset = offset as usize;
            for i in 0..size {
                let mut rest = i;
                let mut slot = offset;
                for (&len, &stride) in shape.iter().zip(&strides) {
                    slot += rest % len * stride;
                    rest /= len;
                }
                if linear_offset(i, offset, &strides, &shape) != slot
                    || offset_of(&unravel_index(i, &shape), offset, &strides) != slot
                {
                    return TestResult::failed();
                }
            }
            TestResult::passed()
        }

        fn default_layout_is_column_major(shape: Vec<u8>) -> bool {
            let shape: Vec<Ix> = shape.into_iter().take(6).map(|d| d as usize % 6).collect();
            is_column_major(&shape, &default_strides(&shape))
        }
    }
}
