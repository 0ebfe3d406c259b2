// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndstride prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use ndstride::prelude::*;
//!
//! let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
//! assert_eq!(a.select_axis(Axis(1), 0).unwrap().to_vec(), vec![0, 1]);
//! ```

#[doc(no_inline)]
pub use crate::{Array, BooleanArray, ComplexArray, DoubleArray, IntArray, LongArray};

#[doc(no_inline)]
pub use crate::{Axis, Indexer, Layout, Order, Slice};

#[doc(no_inline)]
pub use crate::{CastElement, Element, IntoShape, NdIndex, Storage};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};
