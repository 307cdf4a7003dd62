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

//! Randomized ground-truth operations over the occupied part of a UV grid.
//!
//! Every draw comes from the caller's RNG, so a seeded stream reproduces the
//! same operation. The hole-diameter ceiling `1 − 2·min_wall_thickness/100`
//! is a coarse proxy for the wall-thickness rule: it ignores the actual local
//! thickness of the part. Hole masks are Euclidean discs over the pixel
//! sample points rather than rasterized polygons.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, UvGridError},
    geometry::{Aabb2, Point2},
    mesh::Mesh,
    ops::{
        OpType,
        params::{
            CapType, DIAMETER_SCALE_MM, ExtrudeDirection, ExtrudeMode, ExtrudeParams, HoleParams,
            HoleShape, OpParams, ParamVector,
        },
    },
    raster::{Grid, OCCUPANCY_THRESHOLD, OccupancyGrid, box_mask, disc_mask},
};

/// Bounds for sampled operations. Lengths in millimetres unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub min_wall_thickness: f64,
    pub min_feature_size: f64,
    /// Largest hole diameter, in UV units.
    pub max_hole_diameter: f64,
    /// Range of each extrude extent, in UV units.
    pub extrude_size: (f64, f64),
    pub extrude_height_mm: (f64, f64),
    pub taper_angle_degrees: (f64, f64),
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_wall_thickness: 1.0,
            min_feature_size: 0.5,
            max_hole_diameter: 0.2,
            extrude_size: (0.05, 0.2),
            extrude_height_mm: (1.0, 10.0),
            taper_angle_degrees: (0.0, 10.0),
        }
    }
}

impl SamplerConfig {
    /// `[min_feature_size/100, min(max_hole_diameter, 1 − 2·min_wall_thickness/100)]`
    pub fn hole_diameter_bounds(&self) -> (f64, f64) {
        let lo = self.min_feature_size / 100.0;
        let hi = self
            .max_hole_diameter
            .min(1.0 - 2.0 * self.min_wall_thickness / 100.0);
        (lo, hi)
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("min_wall_thickness", self.min_wall_thickness)?;
        check_finite("min_feature_size", self.min_feature_size)?;
        check_finite("max_hole_diameter", self.max_hole_diameter)?;
        if self.min_wall_thickness < 0.0 {
            return Err(UvGridError::invalid_config(
                "min_wall_thickness",
                "must not be negative",
            ));
        }
        if self.min_feature_size <= 0.0 {
            return Err(UvGridError::invalid_config(
                "min_feature_size",
                "must be positive",
            ));
        }

        let (lo, hi) = self.hole_diameter_bounds();
        if lo > hi {
            return Err(UvGridError::invalid_config(
                "min_feature_size",
                format!("minimum hole diameter {lo} exceeds the wall-thickness ceiling {hi}"),
            ));
        }

        check_range("extrude_size", self.extrude_size, 0.0, 1.0)?;
        if self.extrude_size.0 <= 0.0 {
            return Err(UvGridError::invalid_config(
                "extrude_size",
                "extents must be positive",
            ));
        }
        check_range("extrude_height_mm", self.extrude_height_mm, 0.0, f64::MAX)?;
        check_range("taper_angle_degrees", self.taper_angle_degrees, 0.0, 90.0)?;
        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(UvGridError::invalid_config(field, format!("{value} is not finite")))
    }
}

pub(crate) fn check_range(field: &str, (lo, hi): (f64, f64), floor: f64, ceil: f64) -> Result<()> {
    check_finite(field, lo)?;
    check_finite(field, hi)?;
    if lo > hi {
        return Err(UvGridError::invalid_config(
            field,
            format!("lower bound {lo} exceeds upper bound {hi}"),
        ));
    }
    if lo < floor || hi > ceil {
        return Err(UvGridError::invalid_config(
            field,
            format!("range [{lo}, {hi}] leaves [{floor}, {ceil}]"),
        ));
    }
    Ok(())
}

/// One sampled operation with its raster mask and affected vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationGroundTruth {
    pub op_type: OpType,
    /// Clamped to `[0,1]²`.
    pub uv_box: Aabb2<f64>,
    pub params: OpParams,
    pub mask: Grid,
    /// Vertices whose UV lies inside `uv_box`, boundary included. Derived
    /// from `uv_box`; recompute rather than edit.
    pub vertex_ids: Vec<usize>,
}

impl OperationGroundTruth {
    pub fn param_vector(&self) -> ParamVector {
        ParamVector::from_params(&self.params)
    }
}

/// Indices of the UVs inside `bounds`, boundary included, ascending.
pub fn vertices_in_box(uv: &[Point2<f64>], bounds: &Aabb2<f64>) -> Vec<usize> {
    uv.iter()
        .enumerate()
        .filter(|(_, p)| bounds.contains(p))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct OperationSampler {
    config: SamplerConfig,
}

impl OperationSampler {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// `None` when the grid has no occupied pixels.
    pub fn sample<R: Rng>(
        &self,
        op_type: OpType,
        mesh: &Mesh,
        grid: &OccupancyGrid,
        rng: &mut R,
    ) -> Option<OperationGroundTruth> {
        match op_type {
            OpType::AddHole => self.sample_hole(mesh, grid, rng),
            OpType::ExtrudeRegion => self.sample_extrude(mesh, grid, rng),
        }
    }

    /// Like [`sample`](Self::sample), for an operation named at the call
    /// boundary. Unknown names are rejected before anything is drawn.
    pub fn sample_named<R: Rng>(
        &self,
        op_type: &str,
        mesh: &Mesh,
        grid: &OccupancyGrid,
        rng: &mut R,
    ) -> Result<Option<OperationGroundTruth>> {
        let op_type: OpType = op_type.parse()?;
        Ok(self.sample(op_type, mesh, grid, rng))
    }

    pub fn sample_hole<R: Rng>(
        &self,
        mesh: &Mesh,
        grid: &OccupancyGrid,
        rng: &mut R,
    ) -> Option<OperationGroundTruth> {
        let center = pick_center(grid.occupancy(), rng)?;

        let (lo, hi) = self.config.hole_diameter_bounds();
        let diameter = rng.random_range(lo..=hi);
        let radius = diameter / 2.0;

        let uv_box = Aabb2::from_center(&center, radius, radius).clamp_to_unit();
        let mask = disc_mask(grid.resolution(), &center, radius);
        let vertex_ids = vertices_in_box(mesh.uv(), &uv_box);

        Some(OperationGroundTruth {
            op_type: OpType::AddHole,
            uv_box,
            params: OpParams::Hole(HoleParams {
                shape: HoleShape::Circular,
                diameter_mm: diameter * DIAMETER_SCALE_MM,
                through_all: true,
            }),
            mask,
            vertex_ids,
        })
    }

    pub fn sample_extrude<R: Rng>(
        &self,
        mesh: &Mesh,
        grid: &OccupancyGrid,
        rng: &mut R,
    ) -> Option<OperationGroundTruth> {
        let center = pick_center(grid.occupancy(), rng)?;

        let (size_lo, size_hi) = self.config.extrude_size;
        let size_u = rng.random_range(size_lo..=size_hi);
        let size_v = rng.random_range(size_lo..=size_hi);

        let uv_box = Aabb2::from_center(&center, size_u / 2.0, size_v / 2.0).clamp_to_unit();
        let mask = box_mask(grid.resolution(), &uv_box);
        let vertex_ids = vertices_in_box(mesh.uv(), &uv_box);

        let direction = if rng.random_bool(0.5) {
            ExtrudeDirection::OutwardSurfaceNormal
        } else {
            ExtrudeDirection::AxisZ
        };
        let (h_lo, h_hi) = self.config.extrude_height_mm;
        let (t_lo, t_hi) = self.config.taper_angle_degrees;

        Some(OperationGroundTruth {
            op_type: OpType::ExtrudeRegion,
            uv_box,
            params: OpParams::Extrude(ExtrudeParams {
                mode: ExtrudeMode::Solid,
                direction,
                height_mm: rng.random_range(h_lo..=h_hi),
                taper_angle_degrees: rng.random_range(t_lo..=t_hi),
                cap_type: CapType::Flat,
            }),
            mask,
            vertex_ids,
        })
    }
}

/// UV sample point of a uniformly chosen occupied pixel.
fn pick_center<R: Rng>(occupancy: &Grid, rng: &mut R) -> Option<Point2<f64>> {
    let occupied = occupancy.pixels_above(OCCUPANCY_THRESHOLD);
    if occupied.is_empty() {
        debug!(
            "no occupied pixels in {0}x{0} grid, nothing to sample",
            occupancy.resolution()
        );
        return None;
    }
    let (row, col) = occupied[rng.random_range(0..occupied.len())];
    Some(occupancy.sample_point(row, col))
}
