// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::dimension::sequence::{Forward, Reverse, Sequence, SequenceMut};
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Ix, Order};

/// Compute the strides that let an array of shape `from` and strides
/// `strides` be seen as shape `to`, visiting elements in the same `order`.
///
/// **Errors** with `IncompatibleLayout` when some group of merged or split
/// axes is not contiguous in memory; the caller must then copy.
///
/// Preconditions: `from` and `to` have the same, non-zero, number of elements.
pub(crate) fn reshape_strides(from: &[Ix], strides: &[Ix], to: &[Ix], order: Order)
    -> Result<Box<[Ix]>, ShapeError>
{
    debug_assert_eq!(from.len(), strides.len());
    let mut to_strides = vec![0; to.len()];
    match order {
        Order::RowMajor => {
            reshape_strides_c(&Forward(from), &Forward(strides),
                              &Forward(to), Forward(&mut to_strides[..]))?;
        }
        Order::ColumnMajor => {
            reshape_strides_c(&Reverse(from), &Reverse(strides),
                              &Reverse(to), Reverse(&mut to_strides[..]))?;
        }
    }
    Ok(to_strides.into_boxed_slice())
}

/// Walk `from_dim` and `to_dim` together from the slowest varying axis,
/// grouping consecutive axes until the products of the two groups agree.
/// Within each group of `from` axes the stride of each axis must equal the
/// length times the stride of the next faster axis; then the group is one
/// contiguous run and can be split up in any way on the `to` side.
///
/// The sequences are read in row major order; reverse them (see `Sequence`)
/// for column major order.
fn reshape_strides_c<D, E, E2>(from_dim: &D, from_strides: &D, to_dim: &E, mut to_strides: E2)
    -> Result<(), ShapeError>
where
    D: Sequence,
    E: Sequence,
    E2: SequenceMut,
{
    // cursors into the from and to dimensions
    let mut fi = 0;
    let mut ti = 0;

    while fi < from_dim.len() && ti < to_dim.len() {
        let mut fd = from_dim[fi];
        let mut fs = from_strides[fi];
        let mut td = to_dim[ti];

        if fd == td {
            to_strides[ti] = from_strides[fi];
            fi += 1;
            ti += 1;
            continue;
        }

        if fd == 1 {
            fi += 1;
            continue;
        }

        if td == 1 {
            to_strides[ti] = 1;
            ti += 1;
            continue;
        }

        if fd == 0 || td == 0 {
            debug_assert!(false, "zero dim not handled by this function");
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }

        // the run covered by this group, to be distributed over the `to` axes
        let mut fstride_whole = fs * fd;
        let mut fd_product = fd;
        let mut td_product = td;

        while fd_product != td_product {
            if fd_product < td_product {
                // take another axis on the from side
                fi += 1;
                if fi >= from_dim.len() {
                    return Err(from_kind(ErrorKind::IncompatibleShape));
                }
                fd = from_dim[fi];
                fd_product *= fd;
                if fd > 1 {
                    let fs_old = fs;
                    fs = from_strides[fi];
                    if fs_old != fd * fs {
                        return Err(from_kind(ErrorKind::IncompatibleLayout));
                    }
                }
            } else {
                // take another axis on the to side, first assigning the stride
                // of the axis we leave behind
                fstride_whole /= td;
                to_strides[ti] = fstride_whole;
                ti += 1;
                if ti >= to_dim.len() {
                    return Err(from_kind(ErrorKind::IncompatibleShape));
                }
                td = to_dim[ti];
                td_product *= td;
            }
        }

        fstride_whole /= td;
        to_strides[ti] = fstride_whole;

        fi += 1;
        ti += 1;
    }

    // skip past 1-dims at the end
    while fi < from_dim.len() && from_dim[fi] == 1 {
        fi += 1;
    }

    while ti < to_dim.len() && to_dim[ti] == 1 {
        to_strides[ti] = 1;
        ti += 1;
    }

    if fi < from_dim.len() || ti < to_dim.len() {
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }

    Ok(())
}

#[test]
fn test_reshape_strides() {
    macro_rules! test_reshape {
        (fail $order:ident from $from:expr, $stride:expr, to $to:expr) => {
            let res = reshape_strides(&$from, &$stride, &$to, Order::$order);
            assert_eq!(res.map_err(|e| e.kind()), Err(ErrorKind::IncompatibleLayout),
                       "reshape {:?} {:?} to {:?}", $from, $stride, $to);
        };
        (ok $order:ident from $from:expr, $stride:expr, to $to:expr, $to_stride:expr) => {{
            let res = reshape_strides(&$from, &$stride, &$to, Order::$order);
            let res = res.expect("Expected successful reshape");
            assert_eq!(&*res, &$to_stride[..], "mismatch in strides");
        }};
    }

    // column major, the native order of arrays in this crate
    test_reshape!(ok F from [2, 3], [1, 2], to [6], [1]);
    test_reshape!(ok F from [6], [1], to [2, 3], [1, 2]);
    test_reshape!(ok F from [3, 4, 5], [1, 3, 12], to [12, 5], [1, 12]);
    test_reshape!(ok F from [3, 4, 5], [1, 3, 12], to [3, 20], [1, 3]);
    test_reshape!(ok F from [4, 4], [1, 4], to [2, 2, 2, 2], [1, 2, 4, 8]);
    test_reshape!(ok F from [16], [4], to [2, 2, 4], [4, 8, 16]);
    test_reshape!(ok F from [3, 4, 5], [1, 3, 1], to [12, 5], [1, 1]);

    // transposed 3x3 can not be flattened without a copy
    test_reshape!(fail F from [3, 3], [3, 1], to [1, 9]);
    test_reshape!(fail F from [3, 3], [3, 1], to [9]);
    // a sub-block of a 4x4 keeps its columns apart
    test_reshape!(fail F from [2, 2], [1, 4], to [4]);
    // but merging only the columns of the sub-block is fine
    test_reshape!(ok F from [2, 2], [1, 4], to [2, 2, 1], [1, 4, 1]);

    // row major
    test_reshape!(ok C from [3, 4, 5], [20, 5, 1], to [12, 5], [5, 1]);
    test_reshape!(ok C from [4, 4], [8, 1], to [2, 2, 2, 2], [16, 8, 2, 1]);
    test_reshape!(fail C from [3, 4, 5], [1, 3, 12], to [12, 5]);

    // preserve stride if shape matches
    test_reshape!(ok F from [10], [2], to [10], [2]);
    test_reshape!(ok F from [2, 10], [1, 2], to [2, 10], [1, 2]);

    // broadcast shapes
    test_reshape!(ok F from [7, 5, 4, 3], [1, 7, 0, 0], to [35, 12], [1, 0]);
    test_reshape!(fail F from [7, 5, 4, 3], [1, 7, 0, 0], to [15, 28]);

    // one-filled shapes
    test_reshape!(ok F from [10], [1], to [1, 10, 1, 1, 1], [1, 1, 1, 1, 1]);
    test_reshape!(ok F from [10, 1, 1, 1, 1], [1, 1, 1, 1, 1], to [10], [1]);
    test_reshape!(ok F from [1, 2, 1, 5, 1], [1, 1, 1, 2, 1], to [10], [1]);
}
