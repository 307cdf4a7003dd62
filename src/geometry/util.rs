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

use crate::geometry::{Point2, Vector2};

/// Relative tolerance below which a triangle counts as zero-area.
pub const EPS: f64 = 1e-10;

/// Precomputed barycentric frame of a UV triangle `(v0, v1, v2)`.
///
/// A query point is expressed as `p = v0 + a·(v2 − v0) + b·(v1 − v0)`; it lies
/// inside the triangle iff `a ≥ 0`, `b ≥ 0` and `a + b ≤ 1`. Building the frame
/// once per triangle leaves two dot products and two divisions per query.
#[derive(Debug, Clone, Copy)]
pub struct BarycentricFrame<T> {
    origin: Point2<T>,
    e2: Vector2<T>,
    e1: Vector2<T>,
    dot00: T,
    dot01: T,
    dot11: T,
    denom: T,
}

impl<T: Float> BarycentricFrame<T> {
    /// `None` for degenerate (zero-area or non-finite) triangles.
    pub fn new(v0: &Point2<T>, v1: &Point2<T>, v2: &Point2<T>) -> Option<Self> {
        let e2 = v0.vector_to(v2);
        let e1 = v0.vector_to(v1);

        let dot00 = e2.dot(&e2);
        let dot01 = e2.dot(&e1);
        let dot11 = e1.dot(&e1);

        let denom = dot00 * dot11 - dot01 * dot01;
        if is_degenerate(denom, dot00 * dot11) {
            return None;
        }

        Some(Self {
            origin: *v0,
            e2,
            e1,
            dot00,
            dot01,
            dot11,
            denom,
        })
    }

    /// `(a, b)`: coefficients of `v2 − v0` and `v1 − v0`.
    #[inline(always)]
    pub fn coords(&self, p: &Point2<T>) -> (T, T) {
        let ep = self.origin.vector_to(p);
        let dot02 = self.e2.dot(&ep);
        let dot12 = self.e1.dot(&ep);

        let a = (self.dot11 * dot02 - self.dot01 * dot12) / self.denom;
        let b = (self.dot00 * dot12 - self.dot01 * dot02) / self.denom;
        (a, b)
    }

    /// Closed-triangle membership: edges and vertices are inside.
    #[inline(always)]
    pub fn contains(&self, p: &Point2<T>) -> bool {
        let (a, b) = self.coords(p);
        a >= T::zero() && b >= T::zero() && a + b <= T::one()
    }
}

/// `denom` is `|e1|²·|e2|²·sin²θ`; compare it against `scale = |e1|²·|e2|²`
/// so the test does not depend on the triangle's absolute size.
#[inline(always)]
fn is_degenerate<T: Float>(denom: T, scale: T) -> bool {
    let eps = T::from(EPS).unwrap_or_else(T::epsilon);
    // NaN fails the comparison and is reported as degenerate.
    !(denom > eps * scale)
}

pub fn is_degenerate_triangle<T: Float>(v0: &Point2<T>, v1: &Point2<T>, v2: &Point2<T>) -> bool {
    BarycentricFrame::new(v0, v1, v2).is_none()
}

pub fn barycentric_coords<T: Float>(
    p: &Point2<T>,
    v0: &Point2<T>,
    v1: &Point2<T>,
    v2: &Point2<T>,
) -> Option<(T, T)> {
    BarycentricFrame::new(v0, v1, v2).map(|frame| frame.coords(p))
}

/// Degenerate triangles contain no points.
pub fn point_in_triangle<T: Float>(
    p: &Point2<T>,
    v0: &Point2<T>,
    v1: &Point2<T>,
    v2: &Point2<T>,
) -> bool {
    BarycentricFrame::new(v0, v1, v2).is_some_and(|frame| frame.contains(p))
}
