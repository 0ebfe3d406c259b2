// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndstride::prelude::*;

#[test]
fn gather_matches_manual_gather() {
    let a = IntArray::range(0, 24).reshape((2, 3, 4)).unwrap();
    let rows = IntArray::from_vec(vec![1, 0]);
    let deep = IntArray::from_vec(vec![3, 1]);
    let b = a
        .get_indexed(&[rows.clone().into(), Indexer::from(..), deep.clone().into()])
        .unwrap();
    // the advanced axes are not adjacent, so the broadcast axis comes first
    assert_eq!(b.shape(), &[2, 3]);
    for k in 0..2 {
        for j in 0..3 {
            let i0 = rows.get(k).unwrap() as usize;
            let i2 = deep.get(k).unwrap() as usize;
            assert_eq!(b.get((k, j)), a.get((i0, j, i2)));
        }
    }
    assert!(!b.shares_storage(&a));
}

#[test]
fn adjacent_advanced_axes_stay_in_place() {
    let a = IntArray::range(0, 24).reshape((2, 3, 4)).unwrap();
    let b = a
        .get_indexed(&[Indexer::from(..), vec![2, 0].into(), vec![1, 3].into()])
        .unwrap();
    assert_eq!(b.shape(), &[2, 2]);
    assert_eq!(b.get((1, 0)), a.get((1, 2, 1)));
    assert_eq!(b.get((0, 1)), a.get((0, 0, 3)));
}

#[test]
fn out_of_bounds_index_writes_nothing() {
    let a = IntArray::range(0, 6);
    let before = a.to_vec();
    let e = a
        .set_indexed(&[vec![0, 6].into()], &IntArray::from_vec(vec![-1]))
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.to_vec(), before);

    a.set_indexed(&[vec![0, 5].into()], &IntArray::from_vec(vec![-1])).unwrap();
    assert_eq!(a.to_vec(), vec![-1, 1, 2, 3, 4, -1]);
}

#[test]
fn select_and_mask() {
    let a = IntArray::range(0, 12).reshape((3, 4)).unwrap();
    let b = a.select_indices(&[vec![2, 0], vec![1, 3]]).unwrap();
    assert_eq!(b.to_vec(), vec![5, 9]);
    assert!(a.select_indices(&[vec![2, 0], vec![1]]).is_err());

    let mask = a.as_bool();
    let odd = a.get_masked(&mask).unwrap();
    assert_eq!(odd.to_vec(), vec![1]);

    let mask = BooleanArray::from_shape_vec((3, 4), (0..12).map(|i| i % 5 == 0).collect()).unwrap();
    a.set_masked(&mask, 0).unwrap();
    assert_eq!(a.get(5), Ok(0));
    assert_eq!(a.get(10), Ok(0));
    assert_eq!(a.get(11), Ok(11));
    let wrong = BooleanArray::from_elem(12, true).unwrap();
    assert!(a.get_masked(&wrong).is_err());
}
