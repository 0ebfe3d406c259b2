// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::hash;
use std::iter::FromIterator;

use crate::element::Element;
use crate::iterators::Iter;
use crate::Array;

impl<A> Clone for Array<A> {
    /// Return a second handle to the same storage, with the same layout.
    /// Use [`.copy()`](Array::copy) for independent storage.
    fn clone(&self) -> Array<A> {
        Array {
            data: self.data.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl<A, B> PartialEq<Array<B>> for Array<A>
where
    A: PartialEq<B>,
{
    /// Return `true` if the arrays have the same shape and equal elements.
    /// Strides, offsets and storage are not compared.
    fn eq(&self, other: &Array<B>) -> bool {
        self.shape() == other.shape() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}

impl<A: hash::Hash> hash::Hash for Array<A> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<A: Element> FromIterator<A> for Array<A> {
    fn from_iter<I>(iterable: I) -> Array<A>
    where
        I: IntoIterator<Item = A>,
    {
        Array::from_vec(iterable.into_iter().collect())
    }
}

impl<A: Element> From<Vec<A>> for Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    fn from(v: Vec<A>) -> Self {
        Array::from_vec(v)
    }
}

impl<'a, A> IntoIterator for &'a Array<A> {
    type Item = A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("offset", &self.offset())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DoubleArray, IntArray};

    #[test]
    fn equality_ignores_layout() {
        let a = IntArray::range(0, 4).reshape((2, 2)).unwrap();
        let b = IntArray::from_vec(vec![0, 2, 1, 3]).reshape((2, 2)).unwrap().transpose();
        assert_eq!(a, b);
        assert_ne!(a, a.ravel());
    }

    #[test]
    fn debug_lists_elements() {
        let a = DoubleArray::from_vec(vec![1., 2.]);
        assert_eq!(format!("{:?}", a),
                   "Array { shape: [2], strides: [1], offset: 0, elements: [1.0, 2.0] }");
    }

    #[test]
    fn collect_into_array() {
        let a: IntArray = (0..3).collect();
        assert_eq!(a.shape(), &[3]);
        let b = IntArray::from(vec![0, 1, 2]);
        assert_eq!(a, b);
    }
}
