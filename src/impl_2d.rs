// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional arrays.

use crate::element::Element;
use crate::error::ShapeError;
use crate::layout::Layout;
use crate::{Array, Ix};

/// # Methods For 2-D Arrays
///
/// Every method here **errors** with `Unsupported` if the array does not
/// have exactly two axes.
impl<A> Array<A> {
    /// Return a view of the `rows × cols` block whose first element is at
    /// row `row_offset`, column `col_offset`.
    ///
    /// **Errors** if the block does not fit in the array.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 16).reshape((4, 4)).unwrap();
    /// let b = a.get_view(1, 2, 2, 2).unwrap();
    /// assert_eq!(b.to_vec(), vec![9, 10, 13, 14]);
    /// ```
    pub fn get_view(&self, row_offset: Ix, col_offset: Ix, rows: Ix, cols: Ix)
        -> Result<Array<A>, ShapeError>
    {
        self.ensure_matrix("sub-block")?;
        let (m, n) = (self.shape()[0], self.shape()[1]);
        for (axis, start, len, bound) in [(0, row_offset, rows, m), (1, col_offset, cols, n)] {
            let end = start.checked_add(len).unwrap_or(usize::MAX);
            if end > bound {
                return Err(ShapeError::out_of_bounds(end as isize, Some(axis), bound));
            }
        }
        let s = self.strides();
        let offset = self.offset() + row_offset * s[0] + col_offset * s[1];
        Ok(self.view_with(Layout::derive(offset, Box::new([rows, cols]), s.into())))
    }

    /// Return row `index` as a `1 × columns` view.
    ///
    /// **Errors** if `index` is out of bounds.
    pub fn row(&self, index: Ix) -> Result<Array<A>, ShapeError> {
        let cols = self.columns()?;
        self.get_view(index, 0, 1, cols)
            .map_err(|_| ShapeError::out_of_bounds(index as isize, Some(0), self.shape()[0]))
    }

    /// Return column `index` as a `rows × 1` view.
    ///
    /// **Errors** if `index` is out of bounds.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 6).reshape((2, 3)).unwrap();
    /// let c = a.column(2).unwrap();
    /// assert_eq!(c.shape(), &[2, 1]);
    /// assert_eq!(c.to_vec(), vec![4, 5]);
    /// ```
    pub fn column(&self, index: Ix) -> Result<Array<A>, ShapeError> {
        let rows = self.rows()?;
        self.get_view(0, index, rows, 1)
            .map_err(|_| ShapeError::out_of_bounds(index as isize, Some(1), self.shape()[1]))
    }

    /// Return a one-dimensional view of the main diagonal.
    ///
    /// The view steps by the sum of the two axis strides: `rows + 1` for a
    /// fresh array, and whatever the strides of a transposed or sliced view
    /// add up to otherwise.
    ///
    /// ```
    /// use ndstride::IntArray;
    ///
    /// let a = IntArray::range(0, 6).reshape((3, 2)).unwrap();
    /// assert_eq!(a.diagonal().unwrap().to_vec(), vec![0, 4]);
    /// ```
    pub fn diagonal(&self) -> Result<Array<A>, ShapeError> {
        self.ensure_matrix("diagonal")?;
        let len = self.shape()[0].min(self.shape()[1]);
        let stride = self.strides()[0] + self.strides()[1];
        Ok(self.view_with(Layout::derive(self.offset(), Box::new([len]), Box::new([stride]))))
    }
}

impl<A> Array<A>
where
    A: Element,
{
    /// Assign `other` to row `index`.
    ///
    /// **Errors** if `index` is out of bounds or if `other` does not have
    /// as many elements as a row.
    pub fn set_row(&self, index: Ix, other: &Array<A>) -> Result<(), ShapeError> {
        self.row(index)?.assign(other)
    }

    /// Assign `other` to column `index`.
    ///
    /// **Errors** if `index` is out of bounds or if `other` does not have
    /// as many elements as a column.
    pub fn set_column(&self, index: Ix, other: &Array<A>) -> Result<(), ShapeError> {
        self.column(index)?.assign(other)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::IntArray;

    #[test]
    fn block_bounds() {
        let a = IntArray::zeros((3, 3)).unwrap();
        assert!(a.get_view(1, 1, 2, 2).is_ok());
        let e = a.get_view(2, 0, 2, 1).unwrap_err();
        assert_eq!(e.index_detail(), Some((4, Some(0), 3)));
        assert!(a.get_view(0, usize::MAX, 1, 2).is_err());
        let v = IntArray::zeros(3).unwrap();
        assert_eq!(v.get_view(0, 0, 1, 1).unwrap_err().kind(), ErrorKind::Unsupported);
        assert_eq!(v.diagonal().unwrap_err().kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn rows_and_columns_alias() {
        let a = IntArray::zeros((2, 3)).unwrap();
        a.set_row(1, &IntArray::from_vec(vec![1, 2, 3])).unwrap();
        a.set_column(0, &IntArray::from_vec(vec![7, 8])).unwrap();
        assert_eq!(a.to_vec(), vec![7, 8, 0, 2, 0, 3]);
        assert_eq!(a.row(2).unwrap_err().index_detail(), Some((2, Some(0), 2)));
    }

    #[test]
    fn diagonal_of_a_transposed_block() {
        let a = IntArray::range(0, 16).reshape((4, 4)).unwrap();
        let d = a.get_view(1, 1, 3, 2).unwrap().transpose().diagonal().unwrap();
        assert_eq!(d.to_vec(), vec![5, 10]);
    }
}
