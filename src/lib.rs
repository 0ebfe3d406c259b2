// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndstride"]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(
    clippy::many_single_char_names,
    clippy::len_without_is_empty,
    clippy::new_ret_no_self
)]

//! The `ndstride` crate provides an *n*-dimensional container for general
//! elements, [`Array`], built on a shape, a list of strides and an offset
//! into shared storage.
//!
//! ## Highlights
//!
//! - Arrays of any rank ≥ 1, with element kinds `f64` ([`DoubleArray`]),
//!   `i32` ([`IntArray`]), `i64` ([`LongArray`]), `bool` ([`BooleanArray`]),
//!   [`Complex64`](num_complex::Complex64) ([`ComplexArray`]) or any other
//!   [`Element`].
//! - Views: selecting, slicing, transposing, sub-blocks, vectors along an
//!   axis and the diagonal never copy elements; they derive a new
//!   [`Layout`] over the same storage.
//! - Reshaping is a view whenever the strides allow it, and a copy otherwise.
//! - Broadcasting with zero strides, and advanced indexing with integer
//!   arrays (gather and scatter).
//! - Type adapters: [`Array::as_f64`], [`Array::as_i32`], ... read and write
//!   the same storage through another element kind.
//!
//! ## Linear order
//!
//! Fresh arrays are laid out in column major order, and *linear indices*
//! always count in column major order: axis 0 varies fastest. The element
//! at linear index `i` of a `3 × 3` array is at row `i % 3`, column `i / 3`,
//! whatever the strides of the array are.
//!
//! ```
//! use ndstride::{Axis, IntArray};
//!
//! // 0 3 6
//! // 1 4 7
//! // 2 5 8
//! let a = IntArray::range(0, 9).reshape((3, 3)).unwrap();
//! let column = a.select_axis(Axis(1), 1).unwrap();
//! assert_eq!(column.to_vec(), vec![3, 4, 5]);
//!
//! // views share storage with their source
//! column.set(0, 30).unwrap();
//! assert_eq!(a.get((0, 1)), Ok(30));
//! ```
//!
//! ## Errors
//!
//! Every operation that can be misused returns a [`ShapeError`], whose
//! [`ErrorKind`] tells invalid arguments, incompatible shapes, out of bounds
//! indices, unsupported operations and size overflow apart.
//!
//! ## Thread safety
//!
//! Arrays are single threaded: storage is shared through [`Rc`](std::rc::Rc)
//! and mutated through shared references, so `Array` is neither `Send` nor
//! `Sync`. Element access is never synchronized. An explicit
//! [`.copy()`](Array::copy) is the way to get storage no other array aliases.
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `approx`: implementations of the `approx` traits `AbsDiffEq`,
//!   `RelativeEq` and `UlpsEq` for arrays.

use std::rc::Rc;

pub use crate::advanced::Indexer;
pub use crate::data_repr::{ConvertRepr, OwnedRepr, Storage};
pub use crate::dimension::{
    broadcast_shapes, broadcast_strides, co_broadcast, is_broadcast_compatible, Axis, IntoShape,
    NdIndex,
};
pub use crate::element::{
    BooleanArray, CastElement, ComplexArray, DoubleArray, Element, IntArray, LongArray,
};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::impl_views::broadcast_arrays;
pub use crate::iterators::{Iter, VectorIter};
pub use crate::layout::Layout;
pub use crate::order::Order;
pub use crate::slice::Slice;

mod advanced;
#[cfg(feature = "approx")]
mod array_approx;
mod arraytraits;
mod data_repr;
mod dimension;
mod element;
mod error;
mod impl_2d;
mod impl_adapters;
mod impl_constructors;
mod impl_methods;
mod impl_views;
mod iterators;
mod layout;
mod order;
pub mod prelude;
mod slice;

/// Array index type
pub type Ix = usize;

/// An *n*-dimensional array.
///
/// An array is a [`Layout`] (shape, strides and offset) over a shared,
/// reference counted [`Storage`]. Cloning an array is cheap and gives a
/// second handle to the same elements; use [`.copy()`](Array::copy) for
/// independent storage.
///
/// Since storage is shared, element access takes `&self`: [`.set()`] through
/// any view writes to the storage every other alias reads from.
///
/// [`.set()`]: Array::set
pub struct Array<A> {
    data: Rc<dyn Storage<A>>,
    layout: Layout,
}
