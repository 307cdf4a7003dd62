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
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vector2<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; twice the signed triangle area.
    pub fn cross(&self, other: &Vector2<T>) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// `None` for the zero vector.
    pub fn normalized(&self) -> Option<Vector2<T>> {
        let n = self.norm();
        if n.is_zero() || !n.is_finite() {
            return None;
        }
        Some(Vector2::new(self.x / n, self.y / n))
    }

    pub fn scale(&self, s: T) -> Self {
        Vector2::new(self.x * s, self.y * s)
    }
}

impl<T: Float> Add for Vector2<T> {
    type Output = Vector2<T>;
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Vector2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Float> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: T) -> Vector2<T> {
        self.scale(rhs)
    }
}
