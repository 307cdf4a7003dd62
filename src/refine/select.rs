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

use log::trace;

use crate::{geometry::Point2, raster::Grid};

/// Pixel `(row, col)` holding `uv`, or `None` outside the raster.
///
/// The unit square is closed: a coordinate of exactly 1.0 lands in the last
/// row or column instead of falling off the edge.
pub fn uv_to_pixel(uv: &Point2<f64>, resolution: usize) -> Option<(usize, usize)> {
    let col = axis_index(uv.x, resolution)?;
    let row = axis_index(uv.y, resolution)?;
    Some((row, col))
}

fn axis_index(t: f64, resolution: usize) -> Option<usize> {
    if resolution == 0 || !t.is_finite() {
        return None;
    }
    if t == 1.0 {
        return Some(resolution - 1);
    }
    let i = (t * resolution as f64).floor();
    if i < 0.0 || i >= resolution as f64 {
        return None;
    }
    Some(i as usize)
}

/// Indices of the vertices whose UV falls on a set pixel of `mask`, ascending.
/// Vertices with UVs outside the raster are skipped.
///
/// Pixel lookup follows [`uv_to_pixel`]: a coordinate of exactly 1.0 selects
/// the last row or column, so vertices on the far edge of `[0,1]²` are kept.
pub fn select_vertices(uv: &[Point2<f64>], mask: &Grid) -> Vec<usize> {
    let resolution = mask.resolution();
    let mut outside = 0usize;
    let selected = uv
        .iter()
        .enumerate()
        .filter_map(|(i, p)| match uv_to_pixel(p, resolution) {
            Some((row, col)) => mask.is_set(row, col).then_some(i),
            None => {
                outside += 1;
                None
            }
        })
        .collect();
    if outside > 0 {
        trace!("{outside} of {} vertices have UVs outside the raster", uv.len());
    }
    selected
}
