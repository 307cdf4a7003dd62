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

//! Analytic masks: discs and boxes tested directly against pixel sample
//! points, independent of any triangle geometry.

use crate::{
    geometry::{Aabb2, Point2},
    raster::{Grid, grid::sample_point},
};

/// Pixels whose sample point lies within `radius` of `center` (boundary
/// included).
pub fn disc_mask(resolution: usize, center: &Point2<f64>, radius: f64) -> Grid {
    let r2 = radius * radius;
    Grid::from_fn(resolution, |row, col| {
        let p = sample_point(resolution, row, col);
        if p.distance_squared_to(center) <= r2 {
            1.0
        } else {
            0.0
        }
    })
}

/// Pixels whose sample point lies inside `bounds` (boundary included).
pub fn box_mask(resolution: usize, bounds: &Aabb2<f64>) -> Grid {
    Grid::from_fn(resolution, |row, col| {
        if bounds.contains(&sample_point(resolution, row, col)) {
            1.0
        } else {
            0.0
        }
    })
}

/// Whole cells `[floor(u_min·R), floor(u_max·R)) × [floor(v_min·R), floor(v_max·R))`.
///
/// Used for coarse proposal boxes, where the box edges are snapped to the
/// cell lattice instead of tested per sample point.
pub fn box_cells_mask(resolution: usize, bounds: &Aabb2<f64>) -> Grid {
    let r = resolution as f64;
    let cell = |t: f64| (t.clamp(0.0, 1.0) * r).floor() as usize;
    let (col_min, col_max) = (cell(bounds.u_min()), cell(bounds.u_max()));
    let (row_min, row_max) = (cell(bounds.v_min()), cell(bounds.v_max()));

    Grid::from_fn(resolution, |row, col| {
        if (row_min..row_max).contains(&row) && (col_min..col_max).contains(&col) {
            1.0
        } else {
            0.0
        }
    })
}
