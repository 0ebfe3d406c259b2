// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type adapter views: the same storage read and written as another
//! element kind.

use std::any::Any;
use std::rc::Rc;

use num_complex::Complex64;

use crate::data_repr::ConvertRepr;
use crate::element::{CastElement, Element};
use crate::Array;

impl<A> Array<A>
where
    A: Element,
{
    /// Return a view of the array with element type `B`: every read converts
    /// the stored element with `to`, and every write converts the new
    /// element back with `from`.
    ///
    /// The view has the layout of `self` and shares its storage; no element
    /// is converted until it is accessed. Further views derived from the
    /// adapter keep converting.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 4);
    /// let s = a.adapt(|x: i32| x.to_string(), |s: String| s.parse().unwrap_or(0));
    /// assert_eq!(s.get(3), Ok("3".to_string()));
    /// s.set(0, "12".to_string()).unwrap();
    /// assert_eq!(a.get(0), Ok(12));
    /// ```
    pub fn adapt<B, F, G>(&self, to: F, from: G) -> Array<B>
    where
        B: Element,
        F: Fn(A) -> B + 'static,
        G: Fn(B) -> A + 'static,
    {
        let data = ConvertRepr::new(self.data.clone(), Rc::new(to), Rc::new(from));
        Array::with_layout(Rc::new(data), self.layout.clone())
    }

    /// Return a view of the array as element kind `B`, converting with the
    /// [`CastElement`] table in both directions.
    ///
    /// Casting to the element kind of `self` returns `self` (a clone of the
    /// handle, sharing storage and layout) without an adapter in between.
    pub fn cast<B>(&self) -> Array<B>
    where
        A: CastElement<B>,
        B: CastElement<A>,
    {
        let same: Box<dyn Any> = Box::new(self.clone());
        match same.downcast::<Array<B>>() {
            Ok(same) => *same,
            Err(_) => self.adapt(<A as CastElement<B>>::cast_element,
                                 <B as CastElement<A>>::cast_element),
        }
    }
}

macro_rules! as_kind {
    ($($name:ident => $t:ty, $alias:ident;)*) => {
        impl<A> Array<A>
        where
            A: Element,
        {
            $(
            #[doc = concat!("Return a view of the array as [`", stringify!($alias), "`]; see ")]
            #[doc = "[`.cast()`](Array::cast) and [`CastElement`](crate::CastElement) for the"]
            #[doc = "conversions."]
            pub fn $name(&self) -> Array<$t>
            where
                A: CastElement<$t>,
                $t: CastElement<A>,
            {
                self.cast()
            }
            )*
        }
    };
}

as_kind! {
    as_f64 => f64, DoubleArray;
    as_i32 => i32, IntArray;
    as_i64 => i64, LongArray;
    as_bool => bool, BooleanArray;
    as_complex => Complex64, ComplexArray;
}

#[cfg(test)]
mod tests {
    use crate::{Axis, ComplexArray, DoubleArray, IntArray};
    use num_complex::Complex64;

    #[test]
    fn identity_shares_everything() {
        let a = IntArray::range(0, 6).reshape((2, 3)).unwrap().transpose();
        let b = a.as_i32();
        assert!(b.shares_storage(&a));
        assert_eq!(b.layout(), a.layout());
        // an adapter reads and writes the storage of its source
        assert!(a.as_f64().shares_storage(&a));
        assert!(a.as_f64().as_bool().shares_storage(&a.as_i64()));
    }

    #[test]
    fn writes_convert_back() {
        let a = DoubleArray::from_vec(vec![0.5, 1.0, 2.7]);
        let i = a.as_i32();
        assert_eq!(i.to_vec(), vec![0, 1, 2]);
        i.set(0, 4).unwrap();
        assert_eq!(a.get(0), Ok(4.));
        let b = a.as_bool();
        assert_eq!(b.to_vec(), vec![false, true, false]);
        b.set(2, true).unwrap();
        assert_eq!(a.get(2), Ok(1.));
    }

    #[test]
    fn complex_views() {
        let c = ComplexArray::from_vec(vec![Complex64::new(1.5, 2.), Complex64::new(-3., 1.)]);
        assert_eq!(c.as_f64().to_vec(), vec![1.5, -3.]);
        assert_eq!(c.as_i64().to_vec(), vec![1, -3]);
        c.as_f64().set(1, 8.).unwrap();
        assert_eq!(c.get(1), Ok(Complex64::new(8., 0.)));
    }

    #[test]
    fn adapters_compose_with_views() {
        let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
        let col = a.as_f64().select_axis(Axis(1), 2).unwrap();
        assert_eq!(col.to_vec(), vec![4., 5.]);
        col.set(1, 50.).unwrap();
        assert_eq!(a.get((1, 2)), Ok(50));
        assert!(a.as_f64().into_raw_vec().is_err());
    }
}
