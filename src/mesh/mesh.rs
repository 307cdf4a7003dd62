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
    geometry::{Aabb2, Point2, Point3},
};

/// Added to the projection scale when UVs are derived from positions, so a
/// mesh sitting entirely at the origin does not divide by zero.
const PLANAR_UV_EPSILON: f64 = 1e-6;

/// Triangle mesh with one UV coordinate per vertex.
///
/// Construction validates that every face index is in range and that the UV
/// and vertex arrays line up, so downstream rasterization never has to
/// re-check. UVs outside `[0,1]²` are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
    uv: Vec<Point2<f64>>,
}

impl Mesh {
    pub fn new(
        vertices: Vec<Point3<f64>>,
        faces: Vec<[usize; 3]>,
        uv: Vec<Point2<f64>>,
    ) -> Result<Self> {
        let mesh = Self {
            vertices,
            faces,
            uv,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Build a mesh for input that carries no UVs: positions are projected onto
    /// XY and divided by the largest X/Y component.
    pub fn with_planar_uv(vertices: Vec<Point3<f64>>, faces: Vec<[usize; 3]>) -> Result<Self> {
        let max = vertices
            .iter()
            .flat_map(|v| [v.x, v.y])
            .fold(f64::NEG_INFINITY, f64::max);
        let scale = if max.is_finite() { max } else { 0.0 } + PLANAR_UV_EPSILON;
        let uv = vertices
            .iter()
            .map(|v| Point2::new(v.x / scale, v.y / scale))
            .collect();
        Self::new(vertices, faces, uv)
    }

    /// Callers guarantee the invariants; used by the parametric generators.
    pub(crate) fn from_parts_unchecked(
        vertices: Vec<Point3<f64>>,
        faces: Vec<[usize; 3]>,
        uv: Vec<Point2<f64>>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), uv.len());
        debug_assert!(faces.iter().flatten().all(|&i| i < vertices.len()));
        Self {
            vertices,
            faces,
            uv,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.uv.len() != self.vertices.len() {
            return Err(UvGridError::UvCountMismatch {
                uv: self.uv.len(),
                vertices: self.vertices.len(),
            });
        }
        let vertex_count = self.vertices.len();
        for (face, tri) in self.faces.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i >= vertex_count) {
                return Err(UvGridError::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn uv(&self) -> &[Point2<f64>] {
        &self.uv
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// UV corners of face `f`.
    pub fn face_uvs(&self, f: usize) -> [Point2<f64>; 3] {
        let [a, b, c] = self.faces[f];
        [self.uv[a], self.uv[b], self.uv[c]]
    }

    /// Bounding box of all UVs, `None` for an empty mesh.
    pub fn uv_bounds(&self) -> Option<Aabb2<f64>> {
        let (first, rest) = self.uv.split_first()?;
        Some(
            rest.iter()
                .fold(Aabb2::from_points(first, first), |acc, p| acc.expand_to(p)),
        )
    }
}
