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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ops::OpType;

/// Millimetres per unit of normalized hole diameter.
pub const DIAMETER_SCALE_MM: f64 = 100.0;
/// Millimetres per unit of normalized extrusion height.
pub const HEIGHT_SCALE_MM: f64 = 100.0;
/// Degrees per unit of normalized taper angle.
pub const TAPER_SCALE_DEGREES: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleShape {
    Circular,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleParams {
    pub shape: HoleShape,
    pub diameter_mm: f64,
    pub through_all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrudeMode {
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrudeDirection {
    OutwardSurfaceNormal,
    AxisZ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapType {
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrudeParams {
    pub mode: ExtrudeMode,
    pub direction: ExtrudeDirection,
    pub height_mm: f64,
    pub taper_angle_degrees: f64,
    pub cap_type: CapType,
}

/// Operation-specific parameters. Serialized without a tag: the key set
/// identifies the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpParams {
    Hole(HoleParams),
    Extrude(ExtrudeParams),
}

impl OpParams {
    pub fn op_type(&self) -> OpType {
        match self {
            OpParams::Hole(_) => OpType::AddHole,
            OpParams::Extrude(_) => OpType::ExtrudeRegion,
        }
    }
}

pub const PARAM_VECTOR_LEN: usize = 5;

/// Refined parameters keyed by their envelope names (`diameterMm`, ...).
pub type RefinedParams = BTreeMap<String, f64>;

/// Fixed-layout normalized parameter encoding exchanged with the model.
///
/// | slot | meaning                      |
/// |------|------------------------------|
/// | 0    | hole diameter / 100 mm       |
/// | 1    | extrude height / 100 mm      |
/// | 2    | extrude taper / 90°          |
/// | 3, 4 | reserved, always zero        |
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamVector(pub [f32; PARAM_VECTOR_LEN]);

impl ParamVector {
    pub const DIAMETER: usize = 0;
    pub const HEIGHT: usize = 1;
    pub const TAPER: usize = 2;

    pub fn zeros() -> Self {
        ParamVector([0.0; PARAM_VECTOR_LEN])
    }

    pub fn from_params(params: &OpParams) -> Self {
        let mut v = Self::zeros();
        match params {
            OpParams::Hole(hole) => {
                v.0[Self::DIAMETER] = (hole.diameter_mm / DIAMETER_SCALE_MM) as f32;
            }
            OpParams::Extrude(extrude) => {
                v.0[Self::HEIGHT] = (extrude.height_mm / HEIGHT_SCALE_MM) as f32;
                v.0[Self::TAPER] = (extrude.taper_angle_degrees / TAPER_SCALE_DEGREES) as f32;
            }
        }
        v
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn mean(&self) -> f64 {
        self.0.iter().map(|&x| f64::from(x)).sum::<f64>() / PARAM_VECTOR_LEN as f64
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let var = self
            .0
            .iter()
            .map(|&x| {
                let d = f64::from(x) - mean;
                d * d
            })
            .sum::<f64>()
            / PARAM_VECTOR_LEN as f64;
        var.sqrt()
    }

    /// Denormalize the slots that `op_type` uses.
    pub fn decode(&self, op_type: OpType) -> RefinedParams {
        let slot = |i: usize| f64::from(self.0[i]);
        let mut out = RefinedParams::new();
        match op_type {
            OpType::AddHole => {
                out.insert("diameterMm".into(), slot(Self::DIAMETER) * DIAMETER_SCALE_MM);
            }
            OpType::ExtrudeRegion => {
                out.insert("heightMm".into(), slot(Self::HEIGHT) * HEIGHT_SCALE_MM);
                out.insert(
                    "taperAngleDegrees".into(),
                    slot(Self::TAPER) * TAPER_SCALE_DEGREES,
                );
            }
        }
        out
    }
}
