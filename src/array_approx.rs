// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Approximate equality of arrays, elementwise in linear order.
//!
//! Arrays of different shapes are never approximately equal.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Array;

impl<A> Array<A> {
    /// A test for equality that uses the elementwise absolute difference to compute the
    /// approximate equality of two arrays.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        <Self as AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if the values are far
    /// apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq<B>(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon)
        -> bool
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        <Self as RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> AbsDiffEq<Array<B>> for Array<A>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::abs_diff_eq(&a, &b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> RelativeEq<Array<B>> for Array<A>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter().zip(other.iter()).all(move |(a, b)| {
            A::relative_eq(&a, &b, epsilon.clone(), max_relative.clone())
        })
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, B> UlpsEq<Array<B>> for Array<A>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::ulps_eq(&a, &b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use approx::{
        assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne,
        assert_ulps_eq, assert_ulps_ne,
    };

    fn pair() -> (DoubleArray, DoubleArray) {
        let a = DoubleArray::from_shape_vec((2, 2), vec![0., -0.000010001, 2., 100000000.]).unwrap();
        let b = DoubleArray::from_shape_vec((2, 2), vec![0., -0.000010002, 1., 100000001.]).unwrap();
        (a, b)
    }

    #[test]
    fn abs_diff_eq() {
        let (a, b) = pair();
        assert_abs_diff_ne!(a, b);
        b.set((0, 1), 2.).unwrap();
        assert_abs_diff_ne!(a, b, epsilon = 1e-9);
        assert_abs_diff_eq!(a, b, epsilon = 1.);

        // Make sure we can compare different shapes without failure.
        let c = DoubleArray::from_vec(vec![1., 2.]);
        assert_abs_diff_ne!(a, c);
    }

    #[test]
    fn relative_eq() {
        let (a, b) = pair();
        assert_relative_ne!(a, b);
        b.set((0, 1), 2.).unwrap();
        assert_relative_eq!(a, b, max_relative = 1e-3);
        assert_relative_ne!(a.ravel(), b);
    }

    #[test]
    fn ulps_eq() {
        let (a, b) = pair();
        assert_ulps_ne!(a, b);
        b.set((0, 1), 2.).unwrap();
        assert_ulps_ne!(a, b);
        let c = a.copy();
        assert_ulps_eq!(a, c);
    }
}
