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

//! Canonical test parts with a planar UV projection.
//!
//! UVs are the XY coordinates divided by `max(length, width)`, so the longer
//! side spans the full unit interval. Dimensions must be positive; zero
//! dimensions are not rejected but produce degenerate UVs.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point2, Point3},
    mesh::Mesh,
};

/// A rectangular box: 8 corners, 2 triangles per side.
pub fn box_mesh(length: f64, width: f64, height: f64) -> Mesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(length, 0.0, 0.0),
        Point3::new(length, width, 0.0),
        Point3::new(0.0, width, 0.0),
        Point3::new(0.0, 0.0, height),
        Point3::new(length, 0.0, height),
        Point3::new(length, width, height),
        Point3::new(0.0, width, height),
    ];

    // bottom, top, front, back, left, right; two triangles each
    let faces = vec![
        [0, 1, 2],
        [0, 2, 3],
        [4, 7, 6],
        [4, 6, 5],
        [0, 4, 5],
        [0, 5, 1],
        [2, 6, 7],
        [2, 7, 3],
        [0, 3, 7],
        [0, 7, 4],
        [1, 5, 6],
        [1, 6, 2],
    ];

    let uv = planar_uv(&vertices, length.max(width));
    Mesh::from_parts_unchecked(vertices, faces, uv)
}

/// A single flat quad split along its diagonal. `thickness` does not enter the
/// geometry.
pub fn plate_mesh(length: f64, width: f64, _thickness: f64) -> Mesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(length, 0.0, 0.0),
        Point3::new(length, width, 0.0),
        Point3::new(0.0, width, 0.0),
    ];
    let faces = vec![[0, 1, 2], [0, 2, 3]];

    let uv = planar_uv(&vertices, length.max(width));
    Mesh::from_parts_unchecked(vertices, faces, uv)
}

fn planar_uv(vertices: &[Point3<f64>], scale: f64) -> Vec<Point2<f64>> {
    vertices
        .iter()
        .map(|v| Point2::new(v.x / scale, v.y / scale))
        .collect()
}

/// A parametric part with its dimensions, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParametricShape {
    Box {
        length: f64,
        width: f64,
        height: f64,
    },
    Plate {
        length: f64,
        width: f64,
        thickness: f64,
    },
}

impl ParametricShape {
    pub fn build(&self) -> Mesh {
        match *self {
            ParametricShape::Box {
                length,
                width,
                height,
            } => box_mesh(length, width, height),
            ParametricShape::Plate {
                length,
                width,
                thickness,
            } => plate_mesh(length, width, thickness),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParametricShape::Box { .. } => "box",
            ParametricShape::Plate { .. } => "plate",
        }
    }
}
