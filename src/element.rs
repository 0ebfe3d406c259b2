// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element kinds and the conversion table between them.

use std::fmt::Debug;

use num_complex::Complex64;
use num_traits::{AsPrimitive, One, Zero};

use crate::Array;

/// Elements that can be stored in an [`Array`].
///
/// Fresh arrays are filled with `A::default()`; elements are cloned out of
/// storage on every read. Any `Clone + Default + Debug + 'static` type
/// qualifies, so reference types such as `String` or `Rc<T>` work as well as
/// the numeric kinds.
pub trait Element: Clone + Default + Debug + 'static {}

impl<T> Element for T where T: Clone + Default + Debug + 'static {}

/// An array of `f64`.
pub type DoubleArray = Array<f64>;
/// An array of `i32`.
pub type IntArray = Array<i32>;
/// An array of `i64`.
pub type LongArray = Array<i64>;
/// An array of `bool`.
pub type BooleanArray = Array<bool>;
/// An array of `Complex64`.
pub type ComplexArray = Array<Complex64>;

/// Conversion of one element kind into another, used by the type adapter
/// views (`as_f64`, `as_i32`, ...).
///
/// The conversions are total but lossy:
///
/// - between numeric kinds: an `as` cast, truncating toward zero (and
///   saturating) from `f64` to the integer kinds;
/// - from complex: the real part, cast as above;
/// - to complex: the value as the real part, zero imaginary part;
/// - from `bool`: `1` or `0`;
/// - to `bool`: `true` if the value equals one, for every other value
///   `false`.
///
/// A kind converted into itself is the identity.
pub trait CastElement<B>: Element {
    fn cast_element(self) -> B;
}

macro_rules! cast_identity {
    ($($t:ty),*) => {
        $(
        impl CastElement<$t> for $t {
            #[inline(always)]
            fn cast_element(self) -> $t {
                self
            }
        }
        )*
    };
}

cast_identity!(f64, i32, i64, bool, Complex64);

macro_rules! cast_numeric {
    ($($from:ty => $to:ty),*) => {
        $(
        impl CastElement<$to> for $from {
            #[inline(always)]
            fn cast_element(self) -> $to {
                self.as_()
            }
        }
        )*
    };
}

cast_numeric!(f64 => i32, f64 => i64, i32 => f64, i32 => i64, i64 => f64, i64 => i32);

macro_rules! cast_bool {
    ($($t:ty),*) => {
        $(
        impl CastElement<bool> for $t {
            #[inline(always)]
            fn cast_element(self) -> bool {
                self.is_one()
            }
        }

        impl CastElement<$t> for bool {
            #[inline(always)]
            fn cast_element(self) -> $t {
                if self { <$t>::one() } else { <$t>::zero() }
            }
        }
        )*
    };
}

cast_bool!(f64, i32, i64, Complex64);

macro_rules! cast_complex {
    ($($t:ty),*) => {
        $(
        impl CastElement<$t> for Complex64 {
            #[inline(always)]
            fn cast_element(self) -> $t {
                self.re.as_()
            }
        }

        impl CastElement<Complex64> for $t {
            #[inline(always)]
            fn cast_element(self) -> Complex64 {
                Complex64::new(self.as_(), 0.)
            }
        }
        )*
    };
}

cast_complex!(f64, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn cast<A: CastElement<B>, B>(a: A) -> B {
        a.cast_element()
    }

    #[test]
    fn numeric_truncates_toward_zero() {
        assert_eq!(cast::<f64, i32>(2.9), 2);
        assert_eq!(cast::<f64, i32>(-2.9), -2);
        assert_eq!(cast::<f64, i64>(1e12), 1_000_000_000_000);
        assert_eq!(cast::<i64, i32>(7), 7);
    }

    #[test]
    fn only_one_is_true() {
        assert!(cast::<i32, bool>(1));
        assert!(!cast::<i32, bool>(0));
        assert!(!cast::<i32, bool>(2));
        assert!(cast::<f64, bool>(1.));
        assert!(!cast::<f64, bool>(0.5));
        assert!(cast::<Complex64, bool>(Complex64::new(1., 0.)));
        assert!(!cast::<Complex64, bool>(Complex64::new(1., 1.)));
        assert_eq!(cast::<bool, i64>(true), 1);
        assert_eq!(cast::<bool, f64>(false), 0.);
    }

    #[test]
    fn complex_keeps_the_real_part() {
        assert_eq!(cast::<Complex64, f64>(Complex64::new(2.5, -1.)), 2.5);
        assert_eq!(cast::<Complex64, i32>(Complex64::new(-2.5, 3.)), -2);
        assert_eq!(cast::<i32, Complex64>(4), Complex64::new(4., 0.));
    }
}
