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

use crate::{
    error::{Result, UvGridError},
    ops::{Envelope, ParamVector},
    raster::{Grid, OccupancyGrid},
};

/// One synthesized training example. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub mesh_id: String,
    pub grid: OccupancyGrid,
    pub mask: Grid,
    pub params: ParamVector,
    pub envelope: Envelope,
}

/// A batch of samples laid out as parallel columns, ready for a columnar
/// store. Index `i` of every column belongs to the same sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shard {
    pub grids: Vec<OccupancyGrid>,
    pub masks: Vec<Grid>,
    pub params: Vec<ParamVector>,
    pub mesh_ids: Vec<String>,
    /// Envelopes serialized to JSON.
    pub envelopes: Vec<String>,
}

impl Shard {
    /// Split `samples` into columns. Every grid must share the first sample's
    /// `C×R×R` shape and every mask its `R×R` shape.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self> {
        let mut shard = Shard::default();
        let Some(first) = samples.first() else {
            return Ok(shard);
        };
        let grid_shape = first.grid.shape();
        let (channels, resolution, _) = grid_shape;

        for sample in samples {
            if sample.grid.shape() != grid_shape {
                let (c, r, _) = sample.grid.shape();
                return Err(UvGridError::GridShapeMismatch {
                    expected: channels * resolution * resolution,
                    found: c * r * r,
                });
            }
            if sample.mask.resolution() != resolution {
                return Err(UvGridError::GridShapeMismatch {
                    expected: resolution * resolution,
                    found: sample.mask.len(),
                });
            }
            shard.envelopes.push(sample.envelope.to_json()?);
            shard.grids.push(sample.grid);
            shard.masks.push(sample.mask);
            shard.params.push(sample.params);
            shard.mesh_ids.push(sample.mesh_id);
        }
        Ok(shard)
    }

    pub fn len(&self) -> usize {
        self.mesh_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mesh_ids.is_empty()
    }

    /// `(C, R, R)` of every grid, `None` for an empty shard.
    pub fn grid_shape(&self) -> Option<(usize, usize, usize)> {
        self.grids.first().map(OccupancyGrid::shape)
    }
}
