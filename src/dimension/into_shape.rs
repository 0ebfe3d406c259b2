// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple, array and vector to shape conversion.

use crate::Ix;

/// $m: macro callback
/// $m is called with $arg and then the indices corresponding to the size argument
macro_rules! index {
    ($m:ident $arg:tt 1) => ($m!($arg 0));
    ($m:ident $arg:tt 2) => ($m!($arg 0 1));
    ($m:ident $arg:tt 3) => ($m!($arg 0 1 2));
    ($m:ident $arg:tt 4) => ($m!($arg 0 1 2 3));
    ($m:ident $arg:tt 5) => ($m!($arg 0 1 2 3 4));
    ($m:ident $arg:tt 6) => ($m!($arg 0 1 2 3 4 5));
}

macro_rules! sub {
    ($_x:tt $y:tt) => {
        $y
    };
}

macro_rules! tuple_type {
    ([$T:ident] $($index:tt)*) => (
        ( $(sub!($index $T), )* )
    )
}

macro_rules! array_expr {
    ([$self_:expr] $($index:tt)*) => (
        [$($self_ . $index, )*]
    )
}

/// Argument conversion into an array shape.
///
/// A shape is a list of axis lengths; it can be given as a single length, a
/// tuple, a fixed size array, a slice or a vector.
///
/// ```
/// use ndstride::IntoShape;
///
/// assert_eq!(&*5usize.into_shape(), &[5]);
/// assert_eq!(&*(2usize, 3usize).into_shape(), &[2, 3]);
/// assert_eq!(&*[2usize, 3, 4].into_shape(), &[2, 3, 4]);
/// assert_eq!(&*vec![4usize, 1].into_shape(), &[4, 1]);
/// ```
pub trait IntoShape {
    fn into_shape(self) -> Box<[Ix]>;
}

impl IntoShape for Ix {
    #[inline]
    fn into_shape(self) -> Box<[Ix]> {
        Box::new([self])
    }
}

impl<const N: usize> IntoShape for [Ix; N] {
    #[inline]
    fn into_shape(self) -> Box<[Ix]> {
        Box::new(self)
    }
}

impl<const N: usize> IntoShape for &[Ix; N] {
    #[inline]
    fn into_shape(self) -> Box<[Ix]> {
        self[..].into()
    }
}

impl IntoShape for &[Ix] {
    #[inline]
    fn into_shape(self) -> Box<[Ix]> {
        self.into()
    }
}

impl IntoShape for Vec<Ix> {
    #[inline]
    fn into_shape(self) -> Box<[Ix]> {
        self.into_boxed_slice()
    }
}

impl IntoShape for &Vec<Ix> {
    #[inline]
    fn into_shape(self) -> Box<[Ix]> {
        self[..].into()
    }
}

impl IntoShape for Box<[Ix]> {
    #[inline(always)]
    fn into_shape(self) -> Box<[Ix]> {
        self
    }
}

macro_rules! tuple_into_shape {
    ($($n:tt)*) => {
        $(
        impl IntoShape for index!(tuple_type [Ix] $n) {
            #[inline]
            fn into_shape(self) -> Box<[Ix]> {
                Box::new(index!(array_expr [self] $n))
            }
        }
        )*
    };
}

tuple_into_shape!(1 2 3 4 5 6);
