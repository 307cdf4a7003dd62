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

use crate::geometry::Point2;

/// An axis-aligned box in UV space. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2<T> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Float> Aabb2<T> {
    pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
        Aabb2 { min, max }
    }

    /// Build from `(u_min, u_max, v_min, v_max)` bounds, reordering swapped pairs.
    pub fn from_bounds(u_min: T, u_max: T, v_min: T, v_max: T) -> Self {
        Self::from_points(&Point2::new(u_min, v_min), &Point2::new(u_max, v_max))
    }

    /// `[0,1]²`
    pub fn unit() -> Self {
        Aabb2::new(Point2::origin(), Point2::new(T::one(), T::one()))
    }

    /// Build the smallest box containing two points.
    pub fn from_points(a: &Point2<T>, b: &Point2<T>) -> Self {
        Aabb2::new(a.min(b), a.max(b))
    }

    pub fn from_triangle(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Self {
        Self::from_points(a, b).expand_to(c)
    }

    pub fn from_center(center: &Point2<T>, half_u: T, half_v: T) -> Self {
        Aabb2::new(
            Point2::new(center.x - half_u, center.y - half_v),
            Point2::new(center.x + half_u, center.y + half_v),
        )
    }

    pub fn min(&self) -> &Point2<T> {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &Point2<T> {
        &self.max
    }

    pub fn u_min(&self) -> T {
        self.min.x
    }

    pub fn u_max(&self) -> T {
        self.max.x
    }

    pub fn v_min(&self) -> T {
        self.min.y
    }

    pub fn v_max(&self) -> T {
        self.max.y
    }

    /// `(u_min, u_max, v_min, v_max)`
    pub fn bounds(&self) -> (T, T, T, T) {
        (self.min.x, self.max.x, self.min.y, self.max.y)
    }

    pub fn expand_to(&self, p: &Point2<T>) -> Self {
        Aabb2::new(self.min.min(p), self.max.max(p))
    }

    pub fn union(&self, other: &Aabb2<T>) -> Aabb2<T> {
        Aabb2::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Does this box intersect `other`? Touching boxes intersect.
    pub fn intersects(&self, other: &Aabb2<T>) -> bool {
        !(self.max.x < other.min.x
            || other.max.x < self.min.x
            || self.max.y < other.min.y
            || other.max.y < self.min.y)
    }

    /// Inclusive containment: points on the boundary are inside.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Clamp both corners into `[0,1]²`.
    pub fn clamp_to_unit(&self) -> Self {
        let clamp = |t: T| t.max(T::zero()).min(T::one());
        Aabb2::new(
            Point2::new(clamp(self.min.x), clamp(self.min.y)),
            Point2::new(clamp(self.max.x), clamp(self.max.y)),
        )
    }

    pub fn center(&self) -> Point2<T> {
        self.min.midpoint(&self.max)
    }

    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }
}
