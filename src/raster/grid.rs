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

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::{
    error::{Result, UvGridError},
    geometry::Point2,
    raster::OCCUPANCY_THRESHOLD,
};

/// One `R×R` channel of scalars, row-major with row = V and column = U.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    resolution: usize,
    data: Vec<f32>,
}

impl Grid {
    pub fn zeros(resolution: usize) -> Self {
        Self::filled(resolution, 0.0)
    }

    pub fn filled(resolution: usize, value: f32) -> Self {
        Self {
            resolution,
            data: vec![value; resolution * resolution],
        }
    }

    pub fn from_vec(resolution: usize, data: Vec<f32>) -> Result<Self> {
        let expected = resolution * resolution;
        if data.len() != expected {
            return Err(UvGridError::GridShapeMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { resolution, data })
    }

    pub fn from_fn(resolution: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(resolution * resolution);
        for row in 0..resolution {
            for col in 0..resolution {
                data.push(f(row, col));
            }
        }
        Self { resolution, data }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Row-major offset of `(row, col)`. Both coordinates are bounds-checked so
    /// an overlong column never wraps into the next row.
    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.resolution && col < self.resolution,
            "pixel ({row}, {col}) out of range for {0}x{0} grid",
            self.resolution
        );
        row * self.resolution + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.resolution && col < self.resolution {
            Some(self.data[row * self.resolution + col])
        } else {
            None
        }
    }

    /// Panics when `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.offset(row, col);
        self.data[idx] = value;
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v > OCCUPANCY_THRESHOLD)
    }

    /// UV point sampled by pixel `(row, col)`.
    pub fn sample_point(&self, row: usize, col: usize) -> Point2<f64> {
        sample_point(self.resolution, row, col)
    }

    pub fn count_above(&self, threshold: f32) -> usize {
        self.data.iter().filter(|&&v| v > threshold).count()
    }

    /// `(row, col)` of every pixel above `threshold`, in row-major order.
    pub fn pixels_above(&self, threshold: f32) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > threshold)
            .map(|(i, _)| (i / self.resolution, i % self.resolution))
            .collect()
    }

    /// True when every value is exactly 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0 || v == 1.0)
    }

    pub fn map(&self, f: impl Fn(f32) -> f32) -> Grid {
        Grid {
            resolution: self.resolution,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}

/// UV point sampled by pixel `(row, col)` of an `R×R` raster.
#[inline(always)]
pub fn sample_point(resolution: usize, row: usize, col: usize) -> Point2<f64> {
    let r = resolution as f64;
    Point2::new(col as f64 / r, row as f64 / r)
}

/// A stack of equally sized channels. Channel 0 is binary occupancy; any
/// further channels follow in the order they were pushed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyGrid {
    resolution: usize,
    channels: Vec<Grid>,
}

impl OccupancyGrid {
    pub fn new(occupancy: Grid) -> Self {
        Self {
            resolution: occupancy.resolution(),
            channels: vec![occupancy],
        }
    }

    pub fn push_channel(&mut self, channel: Grid) -> Result<()> {
        if channel.resolution() != self.resolution {
            return Err(UvGridError::GridShapeMismatch {
                expected: self.resolution * self.resolution,
                found: channel.len(),
            });
        }
        self.channels.push(channel);
        Ok(())
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn occupancy(&self) -> &Grid {
        &self.channels[0]
    }

    pub fn channels(&self) -> &[Grid] {
        &self.channels
    }

    pub fn channel(&self, i: usize) -> Option<&Grid> {
        self.channels.get(i)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// `(C, R, R)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.channels.len(), self.resolution, self.resolution)
    }

    /// All channels concatenated, `C×R×R` values.
    pub fn to_flat(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.channels.len() * self.resolution * self.resolution);
        for channel in &self.channels {
            out.extend_from_slice(channel.as_slice());
        }
        out
    }
}
