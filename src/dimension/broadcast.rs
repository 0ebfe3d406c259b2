// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use itertools::izip;

use crate::error::{incompatible_shapes, ShapeError};
use crate::Ix;

/// Return true if `a` and `b` can be broadcast together.
///
/// Shapes are compared starting with the trailing axis; two axis lengths are
/// compatible if they are equal or one of them is 1. Axes beyond the length
/// of the shorter shape count as 1.
pub fn is_broadcast_compatible(a: &[Ix], b: &[Ix]) -> bool {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .all(|(&x, &y)| x == y || x == 1 || y == 1)
}

/// Calculate the common shape for a pair of array shapes, that they can be
/// broadcast to. Return an error naming both shapes if they are not
/// compatible.
///
/// Uses the [NumPy broadcasting rules]
//  (https://docs.scipy.org/doc/numpy/user/basics.broadcasting.html#general-broadcasting-rules).
pub fn co_broadcast(shape1: &[Ix], shape2: &[Ix]) -> Result<Box<[Ix]>, ShapeError> {
    // swap the order if shape2 is longer
    if shape1.len() < shape2.len() {
        return co_broadcast(shape2, shape1)
            .map_err(|_| incompatible_shapes(shape1, shape2));
    }
    let k = shape1.len() - shape2.len();
    let mut out: Box<[Ix]> = shape1.into();
    for (out, &s2) in izip!(&mut out[k..], shape2) {
        if *out != s2 {
            if *out == 1 {
                *out = s2;
            } else if s2 != 1 {
                return Err(incompatible_shapes(shape1, shape2));
            }
        }
    }
    Ok(out)
}

/// Calculate the common shape of every shape in `shapes`.
///
/// **Errors** if `shapes` is empty or if any pair is not compatible.
pub fn broadcast_shapes<'a, I>(shapes: I) -> Result<Box<[Ix]>, ShapeError>
where
    I: IntoIterator<Item = &'a [Ix]>,
{
    let mut shapes = shapes.into_iter();
    let first = shapes
        .next()
        .ok_or_else(|| ShapeError::invalid_argument("no shapes to broadcast"))?;
    shapes.try_fold(Box::<[Ix]>::from(first), |acc, shape| co_broadcast(&acc, shape))
}

/// Return the strides that make an array of shape `from` with strides
/// `strides` look like an array of shape `to`.
///
/// Broadcasting works by returning a "fake stride" where elements to repeat
/// are in axes with 0 stride, so that several indexes point to the same
/// element. Axes are aligned at the trailing end: an axis of length 1 in
/// `from` gets stride 0, an axis of matching length keeps its stride and the
/// leading axes that only exist in `to` get stride 0.
///
/// **Errors** naming both shapes if `from` can not be broadcast into `to`.
pub fn broadcast_strides(strides: &[Ix], from: &[Ix], to: &[Ix]) -> Result<Box<[Ix]>, ShapeError> {
    debug_assert_eq!(strides.len(), from.len());
    if to.len() < from.len() {
        return Err(incompatible_shapes(from, to));
    }
    let mut new_strides = vec![0; to.len()];
    // begin at the back (the least significant dimension)
    for (dr, &er, &es, &tr) in izip!(new_strides.iter_mut().rev(), from.iter().rev(),
                                     strides.iter().rev(), to.iter().rev())
    {
        if er == tr && er != 1 {
            // keep stride
            *dr = es;
        } else if er == 1 {
            // dead dimension, zero stride
            *dr = 0;
        } else {
            return Err(incompatible_shapes(from, to));
        }
    }
    Ok(new_strides.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use quickcheck::quickcheck;

    #[test]
    fn compatible_shapes() {
        assert!(is_broadcast_compatible(&[3, 1], &[3, 4]));
        assert!(is_broadcast_compatible(&[5], &[2, 5]));
        assert!(is_broadcast_compatible(&[2, 1, 2, 1], &[2, 4, 2, 2]));
        assert!(!is_broadcast_compatible(&[2, 3], &[4, 3]));
        assert!(!is_broadcast_compatible(&[32, 1, 2], &[2, 1]));
    }

    #[test]
    fn combined_shape() {
        assert_eq!(&*co_broadcast(&[3, 1], &[3, 4]).unwrap(), &[3, 4]);
        assert_eq!(&*co_broadcast(&[5], &[2, 5]).unwrap(), &[2, 5]);
        assert_eq!(&*co_broadcast(&[2, 5], &[5]).unwrap(), &[2, 5]);
        assert_eq!(&*co_broadcast(&[1, 4, 1], &[7, 1, 1, 3]).unwrap(), &[7, 1, 4, 3]);
        assert_eq!(&*co_broadcast(&[0, 1], &[1, 3]).unwrap(), &[0, 3]);
    }

    #[test]
    fn incompatible_names_both_shapes() {
        let e = co_broadcast(&[2, 3], &[4, 3]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
        assert_eq!(e.shapes(), Some((&[2, 3][..], &[4, 3][..])));

        // the order of the shapes is kept when the second is longer
        let e = co_broadcast(&[3], &[2, 4]).unwrap_err();
        assert_eq!(e.shapes(), Some((&[3][..], &[2, 4][..])));
    }

    #[test]
    fn strides_for_broadcast() {
        assert_eq!(&*broadcast_strides(&[1], &[5], &[2, 5]).unwrap(), &[0, 1]);
        assert_eq!(&*broadcast_strides(&[1, 3], &[3, 1], &[3, 4]).unwrap(), &[1, 0]);
        assert_eq!(&*broadcast_strides(&[1, 2], &[2, 1], &[4, 2, 1]).unwrap(), &[0, 1, 0]);
        assert!(broadcast_strides(&[1, 2], &[2, 3], &[2, 4]).is_err());
        assert!(broadcast_strides(&[1, 2], &[2, 3], &[3]).is_err());
    }

    #[test]
    fn many_shapes() {
        let shapes: [&[Ix]; 3] = [&[3, 1], &[1, 4], &[2, 1, 1]];
        assert_eq!(&*broadcast_shapes(shapes.iter().cloned()).unwrap(), &[2, 3, 4]);
        assert!(broadcast_shapes(std::iter::empty()).is_err());
    }

    quickcheck! {
        fn broadcast_is_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
            let a: Vec<Ix> = a.into_iter().take(4).map(|d| d as usize % 3 + 1).collect();
            let b: Vec<Ix> = b.into_iter().take(4).map(|d| d as usize % 3 + 1).collect();
            let ab = co_broadcast(&a, &b).ok();
            let ba = co_broadcast(&b, &a).ok();
            ab == ba && ab.is_some() == is_broadcast_compatible(&a, &b)
        }

        fn broadcast_with_self_is_identity(a: Vec<u8>) -> bool {
            let a: Vec<Ix> = a.into_iter().take(5).map(|d| d as usize % 4).collect();
            co_broadcast(&a, &a).map(|s| *s == *a).unwrap_or(false)
        }
    }
}
