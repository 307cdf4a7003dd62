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

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::warn;

use crate::{
    error::{Result, UvGridError},
    geometry::{Point2, Point3},
    mesh::Mesh,
};

/// Write a mesh to Wavefront OBJ, one `vt` per vertex.
pub fn write_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    // 1) positions
    for v in mesh.vertices() {
        writeln!(out, "v {:?} {:?} {:?}", v.x, v.y, v.z)?;
    }

    // 2) texture coordinates, index-aligned with positions
    for t in mesh.uv() {
        writeln!(out, "vt {:?} {:?}", t.x, t.y)?;
    }

    // 3) faces (1-based)
    for [a, b, c] in mesh.faces() {
        writeln!(
            out,
            "f {0}/{0} {1}/{1} {2}/{2}",
            a + 1,
            b + 1,
            c + 1
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Read a mesh from a Wavefront OBJ file.
pub fn read_obj<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let file = File::open(path)?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ text. Only `v`, `vt` and triangular `f` lines are used; anything
/// else is ignored.
///
/// A vertex takes its UV from the `vt` referenced alongside it in a face. A
/// vertex referenced with two different `vt` indices keeps the first one.
/// Without any `vt` lines the UVs are projected from the positions.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut vertices: Vec<Point3<f64>> = Vec::new();
    let mut tex: Vec<Point2<f64>> = Vec::new();
    let mut faces: Vec<[usize; 3]> = Vec::new();
    // texture indices of each face corner, with the face's line number
    let mut face_tex: Vec<([Option<usize>; 3], usize)> = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let l = line?;
        let mut parts = l.split_whitespace();
        match parts.next() {
            Some("v") => {
                let [x, y, z] = parse_floats::<3>(&mut parts, line_no)?;
                vertices.push(Point3::new(x, y, z));
            }
            Some("vt") => {
                let [u, v] = parse_floats::<2>(&mut parts, line_no)?;
                tex.push(Point2::new(u, v));
            }
            Some("f") => {
                let corners: Vec<&str> = parts.collect();
                if corners.len() != 3 {
                    return Err(UvGridError::parse(
                        line_no,
                        format!("expected a triangle, found {} corners", corners.len()),
                    ));
                }
                let mut tri = [0usize; 3];
                let mut tri_tex = [None; 3];
                for (k, corner) in corners.iter().enumerate() {
                    let (v, t) = parse_corner(corner, line_no)?;
                    tri[k] = v;
                    tri_tex[k] = t;
                }
                faces.push(tri);
                face_tex.push((tri_tex, line_no));
            }
            _ => {
                // comments, normals, groups, materials
            }
        }
    }

    if tex.is_empty() {
        return Mesh::with_planar_uv(vertices, faces);
    }

    let mut uv: Vec<Option<Point2<f64>>> = if tex.len() == vertices.len() {
        tex.iter().copied().map(Some).collect()
    } else {
        vec![None; vertices.len()]
    };
    let mut assigned = vec![false; vertices.len()];

    for (tri, (tri_tex, line_no)) in faces.iter().zip(&face_tex) {
        for (&v, &t) in tri.iter().zip(tri_tex) {
            let (Some(t), true) = (t, v < vertices.len()) else {
                continue;
            };
            let Some(&p) = tex.get(t) else {
                return Err(UvGridError::parse(
                    *line_no,
                    format!("texture index {} out of range ({} vt)", t + 1, tex.len()),
                ));
            };
            if !assigned[v] {
                uv[v] = Some(p);
                assigned[v] = true;
            } else if uv[v] != Some(p) {
                warn!("vertex {} has several UVs, keeping the first", v + 1);
            }
        }
    }

    let uv = uv
        .into_iter()
        .enumerate()
        .map(|(vertex, t)| t.ok_or(UvGridError::MissingTextureCoordinate { vertex }))
        .collect::<Result<Vec<_>>>()?;

    Mesh::new(vertices, faces, uv)
}

fn parse_floats<'a, const N: usize>(
    parts: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for slot in out.iter_mut() {
        let token = parts
            .next()
            .ok_or_else(|| UvGridError::parse(line, format!("expected {N} coordinates")))?;
        *slot = token
            .parse()
            .map_err(|_| UvGridError::parse(line, format!("`{token}` is not a number")))?;
    }
    Ok(out)
}

/// `i`, `i/t`, `i/t/n` or `i//n`, 1-based. Returns zero-based `(vertex, texture)`.
fn parse_corner(corner: &str, line: usize) -> Result<(usize, Option<usize>)> {
    let mut fields = corner.split('/');
    let index = |s: &str| -> Result<usize> {
        match s.parse::<usize>() {
            Ok(i) if i > 0 => Ok(i - 1),
            _ => Err(UvGridError::parse(
                line,
                format!("`{s}` is not a positive index"),
            )),
        }
    };

    let v = index(fields.next().unwrap_or(""))?;
    let t = match fields.next() {
        Some("") | None => None,
        Some(s) => Some(index(s)?),
    };
    Ok((v, t))
}
