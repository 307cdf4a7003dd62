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

use log::{debug, trace};

use crate::{
    error::Result,
    geometry::{Aabb2, Point2, util::BarycentricFrame},
    mesh::Mesh,
    raster::{Grid, OccupancyGrid, grid::sample_point},
};

/// Render `mesh` into an occupancy grid, then stack `tags` after it in the
/// given order. Each tag must already be `resolution × resolution`.
pub fn render(mesh: &Mesh, resolution: usize, tags: &[Grid]) -> Result<OccupancyGrid> {
    let mut grid = OccupancyGrid::new(rasterize_occupancy(mesh, resolution));
    for tag in tags {
        grid.push_channel(tag.clone())?;
    }
    Ok(grid)
}

/// Binary occupancy of every triangle of `mesh`, OR-accumulated.
pub fn rasterize_occupancy(mesh: &Mesh, resolution: usize) -> Grid {
    let mut grid = Grid::zeros(resolution);
    let mut degenerate = 0usize;
    let mut rejected = 0usize;

    for f in 0..mesh.face_count() {
        let [a, b, c] = mesh.face_uvs(f);
        match rasterize_triangle(&mut grid, &a, &b, &c) {
            TriangleCoverage::Drawn => {}
            TriangleCoverage::Degenerate => {
                debug!("skipping zero-area UV triangle {f} of {}", mesh.face_count());
                degenerate += 1;
            }
            TriangleCoverage::OutsideDomain => rejected += 1,
        }
    }

    trace!(
        "rasterized {} triangles at {resolution}x{resolution}: {degenerate} degenerate, {rejected} outside [0,1]²",
        mesh.face_count()
    );
    grid
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleCoverage {
    Drawn,
    Degenerate,
    OutsideDomain,
}

/// Set every pixel whose sample point lies in the closed triangle `(a, b, c)`.
/// Pixels are only ever set, never cleared.
pub fn rasterize_triangle(
    grid: &mut Grid,
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
) -> TriangleCoverage {
    let bounds = Aabb2::from_triangle(a, b, c);
    if !bounds.intersects(&Aabb2::unit()) {
        return TriangleCoverage::OutsideDomain;
    }

    let Some(frame) = BarycentricFrame::new(a, b, c) else {
        return TriangleCoverage::Degenerate;
    };

    let resolution = grid.resolution();
    let (col_min, col_max) = pixel_span(bounds.u_min(), bounds.u_max(), resolution);
    let (row_min, row_max) = pixel_span(bounds.v_min(), bounds.v_max(), resolution);

    for row in row_min..row_max {
        for col in col_min..col_max {
            if frame.contains(&sample_point(resolution, row, col)) {
                grid[(row, col)] = 1.0;
            }
        }
    }
    TriangleCoverage::Drawn
}

/// Half-open pixel range `[floor(lo·R), floor(hi·R) + 1)` clipped to `[0, R]`.
/// A sample point lying exactly on `hi` stays in range.
fn pixel_span(lo: f64, hi: f64, resolution: usize) -> (usize, usize) {
    let r = resolution as f64;
    let start = (lo * r).floor().clamp(0.0, r) as usize;
    let end = ((hi * r).floor() + 1.0).clamp(0.0, r) as usize;
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_span_clips_to_grid() {
        assert_eq!(pixel_span(-0.5, 2.0, 8), (0, 8));
        assert_eq!(pixel_span(-2.0, -1.0, 8), (0, 0));
        assert_eq!(pixel_span(0.25, 0.5, 8), (2, 5));
        assert_eq!(pixel_span(0.26, 0.49, 8), (2, 4));
    }
}
