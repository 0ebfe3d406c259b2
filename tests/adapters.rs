// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndstride::prelude::*;
use num_complex::Complex64;

use approx::assert_abs_diff_eq;

#[test]
fn int_as_double_writes_back() {
    let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
    let d = a.as_f64();
    assert_eq!(d.shape(), a.shape());
    assert_abs_diff_eq!(d.get((1, 2)).unwrap(), 5.);
    d.set((0, 0), 2.75).unwrap();
    assert_eq!(a.get((0, 0)), Ok(2));
}

#[test]
fn views_of_adapters_keep_converting() {
    let a = LongArray::from_vec((0..9).collect());
    let d = a.as_f64().reshape((3, 3)).unwrap();
    let col = d.select_axis(Axis(1), 2).unwrap();
    assert_eq!(col.to_vec(), vec![6., 7., 8.]);
    col.set(1, -1.).unwrap();
    assert_eq!(a.get(7), Ok(-1));
}

#[test]
fn bool_and_complex() {
    let a = IntArray::from_vec(vec![0, 1, 2, 0]);
    assert_eq!(a.as_bool().to_vec(), vec![false, true, false, false]);
    let c = a.as_complex();
    assert_eq!(c.get(2), Ok(Complex64::new(2., 0.)));
    c.set(3, Complex64::new(4.5, 1.)).unwrap();
    assert_eq!(a.get(3), Ok(4));
}

#[test]
fn identity_cast_is_the_same_array() {
    let a = DoubleArray::from_vec(vec![1., 2.]);
    let b = a.as_f64();
    assert!(b.shares_storage(&a));
    assert_eq!(b, a);
}

#[test]
fn adapter_has_no_raw_storage() {
    let a = IntArray::range(0, 4);
    let d = a.as_f64();
    assert_eq!(d.into_raw_vec().unwrap_err().kind(), ErrorKind::Unsupported);
    assert_eq!(a.into_raw_vec(), Ok(vec![0, 1, 2, 3]));
}

#[test]
fn assign_from_an_adapted_alias() {
    let a = IntArray::range(0, 4).reshape((2, 2)).unwrap();
    let d = a.as_f64();
    d.assign(&a.transpose().as_f64()).unwrap();
    assert_eq!(a.to_vec(), vec![0, 2, 1, 3]);
    assert!(a.as_bool().shares_storage(&d));
}
