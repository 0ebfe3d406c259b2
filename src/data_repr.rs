// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Ix;

/// A flat, fixed length buffer of elements addressed by storage slot.
///
/// Arrays never touch their elements except through this trait, and every
/// array holds its storage behind an `Rc`, so any number of arrays can alias
/// the same buffer. Writes go straight to the buffer and are visible through
/// every alias at once.
///
/// Implementations use interior mutability and are not thread safe; see the
/// crate documentation.
pub trait Storage<A> {
    /// Read the element at `slot`.
    ///
    /// Panics if `slot` is not below `len()`; arrays only pass slots their
    /// layout has been checked against.
    fn read(&self, slot: Ix) -> A;

    /// Write `value` at `slot`.
    fn write(&self, slot: Ix, value: A);

    /// Number of slots.
    fn len(&self) -> usize;

    /// Return true if the storage has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identity of the buffer this storage finally reads and writes. Two
    /// storages alias each other exactly when their roots are equal.
    fn root(&self) -> *const () {
        (self as *const Self).cast::<()>()
    }

    /// Return true if this storage owns its buffer rather than reading
    /// through another storage.
    fn is_owned(&self) -> bool {
        false
    }

    /// Return a copy of the whole buffer, if this storage owns one.
    fn to_vec(&self) -> Option<Vec<A>> {
        None
    }
}

/// Storage that owns its elements.
pub struct OwnedRepr<A> {
    data: RefCell<Box<[A]>>,
}

impl<A> OwnedRepr<A> {
    pub fn from_vec(v: Vec<A>) -> Self {
        OwnedRepr {
            data: RefCell::new(v.into_boxed_slice()),
        }
    }

    /// Storage of `len` elements, each a clone of `elem`.
    pub fn from_elem(len: usize, elem: A) -> Self
    where
        A: Clone,
    {
        Self::from_vec(vec![elem; len])
    }
}

impl<A: Clone> Storage<A> for OwnedRepr<A> {
    #[inline]
    fn read(&self, slot: Ix) -> A {
        self.data.borrow()[slot].clone()
    }

    #[inline]
    fn write(&self, slot: Ix, value: A) {
        self.data.borrow_mut()[slot] = value;
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.borrow().len()
    }

    fn is_owned(&self) -> bool {
        true
    }

    fn to_vec(&self) -> Option<Vec<A>> {
        Some(self.data.borrow().to_vec())
    }
}

impl<A: fmt::Debug> fmt::Debug for OwnedRepr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.borrow().iter()).finish()
    }
}

/// Storage that reads and writes through another storage of element type
/// `B`, converting each element on the way.
///
/// `to` converts stored elements on read and `from` converts new elements on
/// write. Nothing is cached, so the source and the converted storage always
/// agree.
pub struct ConvertRepr<B, A> {
    source: Rc<dyn Storage<B>>,
    to: Rc<dyn Fn(B) -> A>,
    from: Rc<dyn Fn(A) -> B>,
}

impl<B, A> ConvertRepr<B, A> {
    pub fn new(source: Rc<dyn Storage<B>>, to: Rc<dyn Fn(B) -> A>, from: Rc<dyn Fn(A) -> B>)
        -> Self
    {
        ConvertRepr { source, to, from }
    }
}

impl<B, A> Storage<A> for ConvertRepr<B, A> {
    #[inline]
    fn read(&self, slot: Ix) -> A {
        (self.to)(self.source.read(slot))
    }

    #[inline]
    fn write(&self, slot: Ix, value: A) {
        self.source.write(slot, (self.from)(value))
    }

    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }

    fn root(&self) -> *const () {
        self.source.root()
    }
}
