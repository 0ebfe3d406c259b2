// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndstride::prelude::*;
use ndstride::{broadcast_arrays, co_broadcast};

use defmac::defmac;

#[test]
fn broadcast_column_against_matrix() {
    let a = IntArray::range(0, 3).reshape((3, 1)).unwrap();
    let b = IntArray::zeros((3, 4)).unwrap();
    let (x, y) = a.broadcast_with(&b).unwrap();
    assert_eq!(x.shape(), &[3, 4]);
    assert_eq!(y.shape(), &[3, 4]);
    assert_eq!(x.strides(), &[1, 0]);
    for j in 0..4 {
        for i in 0..3 {
            assert_eq!(x.get((i, j)), Ok(i as i32));
        }
    }
    assert!(x.shares_storage(&a));
}

#[test]
fn incompatible_shapes_are_named() {
    let a = DoubleArray::zeros((2, 3)).unwrap();
    let b = DoubleArray::zeros((4, 3)).unwrap();
    let e = a.broadcast_with(&b).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    assert_eq!(e.shapes(), Some((&[2, 3][..], &[4, 3][..])));
    let msg = e.to_string();
    assert!(msg.contains("[2, 3]") && msg.contains("[4, 3]"), "{}", msg);
}

#[test]
fn vector_to_rows() {
    let v = IntArray::range(1, 6);
    let b = v.broadcast((2, 5)).unwrap();
    assert_eq!(b.shape(), &[2, 5]);
    assert_eq!(b.strides(), &[0, 1]);
    for i in 0..2 {
        assert_eq!(b.select(i).unwrap().to_vec(), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn writes_through_broadcast_alias() {
    let v = IntArray::range(0, 3);
    let b = v.broadcast((3, 4)).unwrap_err();
    assert_eq!(b.kind(), ErrorKind::IncompatibleShape);

    let b = v.broadcast((4, 3)).unwrap();
    b.set((2, 1), 9).unwrap();
    assert_eq!(v.to_vec(), vec![0, 9, 2]);
    assert_eq!(b.get((0, 1)), Ok(9));
}

#[test]
fn broadcast_many() {
    defmac!(shaped s => IntArray::zeros(s).unwrap());
    let arrays = vec![shaped!((3, 1)), shaped!((1, 4)), shaped!((2, 1, 1))];
    let out = broadcast_arrays(&arrays).unwrap();
    for a in &out {
        assert_eq!(a.shape(), &[2, 3, 4]);
    }
    assert_eq!(&*co_broadcast(&[3, 1], &[1, 4]).unwrap(), &[3, 4]);
}

#[test]
fn broadcast_vector_along_axis_copies_once() {
    let v = IntArray::range(0, 3);
    let b = v.broadcast((2, 3)).unwrap();
    let rows: Vec<Vec<i32>> = b.vector_iter(Axis(1)).unwrap().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![0, 1, 2], vec![0, 1, 2]]);
    let row = b.vector(Axis(1), 0).unwrap();
    assert!(!row.shares_storage(&v));
}
