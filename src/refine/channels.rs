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

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    ops::{OpType, RefinedParams, UvBoxRecord},
    raster::{Grid, OccupancyGrid, box_cells_mask},
};

/// Occupancy, proposal box, operation indicator, thickness.
pub const MODEL_INPUT_CHANNELS: usize = 4;

/// Stand-in thickness until per-pixel wall thickness is measured.
pub const THICKNESS_PLACEHOLDER: f32 = 0.5;

/// A coarse edit proposal to be refined: a UV box, the operation kind and any
/// rough parameter guesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub uv_box: UvBoxRecord,
    pub op_type: OpType,
    #[serde(default)]
    pub rough_params: Option<RefinedParams>,
}

/// Stack the model input channels in their fixed order:
///
/// 0. mesh occupancy
/// 1. proposal box, snapped to whole cells
/// 2. operation indicator: all ones for `add_hole`, zeros otherwise
/// 3. thickness placeholder
pub fn assemble_input(occupancy: &Grid, proposal: &Proposal) -> Result<OccupancyGrid> {
    let resolution = occupancy.resolution();
    let mut input = OccupancyGrid::new(occupancy.clone());

    input.push_channel(box_cells_mask(resolution, &proposal.uv_box.to_aabb()))?;

    let indicator = match proposal.op_type {
        OpType::AddHole => 1.0,
        OpType::ExtrudeRegion => 0.0,
    };
    input.push_channel(Grid::filled(resolution, indicator))?;
    input.push_channel(Grid::filled(resolution, THICKNESS_PLACEHOLDER))?;

    Ok(input)
}
