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

//! Fixed-resolution UV rasters.
//!
//! Every raster path in the crate samples pixel `(row, col)` at the UV point
//! `(col / R, row / R)`, the lower-left corner of the cell. Ground-truth masks
//! and inference-time occupancy therefore line up without a half-pixel shift.

pub mod grid;
pub mod rasterize;
pub mod shapes;

pub use grid::{Grid, OccupancyGrid};
pub use rasterize::{TriangleCoverage, rasterize_occupancy, rasterize_triangle, render};
pub use shapes::{box_cells_mask, box_mask, disc_mask};

pub const DEFAULT_RESOLUTION: usize = 256;

/// Pixels above this value count as set.
pub const OCCUPANCY_THRESHOLD: f32 = 0.5;
