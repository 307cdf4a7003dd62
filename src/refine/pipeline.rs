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

use log::debug;
use serde::Serialize;

use crate::{
    error::{Result, UvGridError},
    mesh::Mesh,
    ops::{ParamVector, RefinedParams},
    raster::{Grid, OccupancyGrid, rasterize_occupancy},
    refine::{
        channels::{Proposal, assemble_input},
        confidence::confidence,
        postprocess::{DEFAULT_THRESHOLD, postprocess},
        select::select_vertices,
    },
};

/// Raw model output: a soft mask and a normalized parameter vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub mask: Grid,
    pub params: ParamVector,
}

/// A segmentation/regression model the caller has loaded. The engine only
/// borrows it for the duration of one call.
pub trait MaskModel {
    fn predict(&self, input: &OccupancyGrid) -> Result<Prediction>;
}

impl<F> MaskModel for F
where
    F: Fn(&OccupancyGrid) -> Result<Prediction>,
{
    fn predict(&self, input: &OccupancyGrid) -> Result<Prediction> {
        self(input)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Refinement {
    #[serde(rename = "mask_vertex_ids")]
    pub vertex_ids: Vec<usize>,
    pub params: RefinedParams,
    pub confidence: f64,
    /// Postprocessed binary mask.
    #[serde(rename = "mask_rasterized")]
    pub mask: Grid,
}

/// Refine `proposal` on `mesh` with `model`.
///
/// Rasterizes the mesh, assembles the model input, runs inference, keeps the
/// dominant component of the predicted mask, maps it to vertices and scores
/// the raw prediction.
pub fn refine<M: MaskModel + ?Sized>(
    mesh: &Mesh,
    proposal: &Proposal,
    model: &M,
    resolution: usize,
) -> Result<Refinement> {
    let occupancy = rasterize_occupancy(mesh, resolution);
    let input = assemble_input(&occupancy, proposal)?;

    let prediction = model.predict(&input)?;
    if prediction.mask.resolution() != resolution {
        return Err(UvGridError::GridShapeMismatch {
            expected: resolution * resolution,
            found: prediction.mask.len(),
        });
    }

    let mask = postprocess(&prediction.mask, DEFAULT_THRESHOLD);
    let vertex_ids = select_vertices(mesh.uv(), &mask);
    let score = confidence(&prediction.mask, &prediction.params);
    debug!(
        "refined {} proposal: {} vertices, confidence {score:.3}",
        proposal.op_type,
        vertex_ids.len()
    );

    Ok(Refinement {
        vertex_ids,
        params: prediction.params.decode(proposal.op_type),
        confidence: score,
        mask,
    })
}
