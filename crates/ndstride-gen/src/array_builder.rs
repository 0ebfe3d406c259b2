// Copyright 2024 ndstride developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndstride::Array;
use ndstride::Element;
use ndstride::IntoShape;
use ndstride::Ix;
use ndstride::Order;
use ndstride::ShapeError;

use num_traits::Num;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    shape: Box<[Ix]>,
    memory_order: Order,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in memory order
    Sequential,
    Zero,
}

impl ArrayBuilder
{
    pub fn new(shape: impl IntoShape) -> Self
    {
        ArrayBuilder {
            shape: shape.into_shape(),
            memory_order: Order::F,
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn memory_order(mut self, order: Order) -> Self
    {
        self.memory_order = order;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// Build the array; its storage holds the generated elements in order,
    /// laid out in the chosen memory order.
    pub fn build<T>(self) -> Result<Array<T>, ShapeError>
    where T: Num + Element
    {
        let mut current = T::zero();
        let size: usize = self.shape.iter().product();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let elements = (0..size)
            .map(|_| {
                let ret = current.clone();
                if !use_zeros {
                    current = ret.clone() + T::one();
                }
                ret
            })
            .collect();
        Array::from_shape_vec_order(self.shape, elements, self.memory_order)
    }
}

#[test]
fn test_order()
{
    let (m, n) = (12, 13);
    let c = ArrayBuilder::new((m, n))
        .memory_order(Order::C)
        .build::<i32>()
        .unwrap();
    let f = ArrayBuilder::new((m, n))
        .memory_order(Order::F)
        .build::<i32>()
        .unwrap();

    assert_eq!(c.shape(), &[m, n]);
    assert_eq!(f.shape(), &[m, n]);
    assert_eq!(c.strides(), &[n, 1]);
    assert_eq!(f.strides(), &[1, m]);
    assert_eq!(c.get((0, 1)), Ok(1));
    assert_eq!(f.get((1, 0)), Ok(1));
    assert!(c.is_view());
    assert!(!f.is_view());
}

#[test]
fn test_zero()
{
    let z = ArrayBuilder::new([2, 3, 4])
        .generator(ElementGenerator::Zero)
        .build::<f64>()
        .unwrap();
    assert!(z.iter().all(|x| x == 0.));
}
