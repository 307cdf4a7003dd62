// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::Float;
use std::ops::{Add, Sub};

use crate::geometry::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn from_vals<V>(vals: [V; 2]) -> Self
    where
        V: Into<T>,
    {
        let [x, y] = vals;
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn vector_to(&self, other: &Self) -> Vector2<T> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    pub fn add_vector(&self, v: &Vector2<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        self.vector_to(other).norm_squared()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        let two = T::one() + T::one();
        Self::new((self.x + other.x) / two, (self.y + other.y) / two)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> Sub for Point2<T> {
    type Output = Vector2<T>;

    fn sub(self, rhs: Point2<T>) -> Vector2<T> {
        rhs.vector_to(&self)
    }
}

impl<'a, 'b, T: Float> Sub<&'b Point2<T>> for &'a Point2<T> {
    type Output = Vector2<T>;

    fn sub(self, rhs: &'b Point2<T>) -> Vector2<T> {
        rhs.vector_to(self)
    }
}

impl<T: Float> Add<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn add(self, rhs: Vector2<T>) -> Point2<T> {
        self.add_vector(&rhs)
    }
}
