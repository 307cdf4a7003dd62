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

use std::io::Cursor;

use uvgrid::UvGridError;
use uvgrid::io::{parse_obj, read_obj, write_obj};
use uvgrid::mesh::{box_mesh, plate_mesh};

#[test]
fn test_write_then_read_box() {
    let mesh = box_mesh(120.0, 80.0, 25.0);
    let path = std::env::temp_dir().join(format!("uvgrid_box_{}.obj", std::process::id()));

    write_obj(&mesh, &path).unwrap();
    let back = read_obj(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(back, mesh);
}

#[test]
fn test_face_texture_indices() {
    // vt order differs from v order; faces carry the mapping
    let text = "\
# quad
v 0 0 0
v 2 0 0
v 2 1 0
v 0 1 0
vt 1.0 0.5
vt 0.0 0.0
vt 0.0 0.5
vt 1.0 0.0
vn 0 0 1
f 1/2/1 2/4/1 3/1/1
f 1/2/1 3/1/1 4/3/1
";
    let mesh = parse_obj(Cursor::new(text)).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
    let uv: Vec<(f64, f64)> = mesh.uv().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(uv, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)]);
}

#[test]
fn test_missing_vt_falls_back_to_planar() {
    let text = "v 0 0 5\nv 4 0 5\nv 4 2 5\nf 1 2 3\n";
    let mesh = parse_obj(Cursor::new(text)).unwrap();
    assert!(mesh.uv()[1].x > 0.999 && mesh.uv()[1].x < 1.0);
    assert!((mesh.uv()[2].y - 0.5).abs() < 1e-6);
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    let err = parse_obj(Cursor::new("v 0 0 0\nv 1 0\n")).unwrap_err();
    assert!(matches!(err, UvGridError::Parse { line: 2, .. }));

    let err = parse_obj(Cursor::new("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3 4\n")).unwrap_err();
    assert!(matches!(err, UvGridError::Parse { line: 5, .. }));

    let err = parse_obj(Cursor::new("v 0 0 0\nv a 0 0\n")).unwrap_err();
    assert!(matches!(err, UvGridError::Parse { line: 2, .. }));

    let err = parse_obj(Cursor::new("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/9 3/1\n")).unwrap_err();
    assert!(matches!(err, UvGridError::Parse { line: 5, .. }));

    let err = parse_obj(Cursor::new("v 0 0 0\nv 1 0 0\nf 0 1 2\n")).unwrap_err();
    assert!(matches!(err, UvGridError::Parse { line: 3, .. }));
}

#[test]
fn test_invalid_topology_is_rejected() {
    let err = parse_obj(Cursor::new("v 0 0 0\nv 1 0 0\nf 1 2 3\n")).unwrap_err();
    assert!(matches!(
        err,
        UvGridError::FaceIndexOutOfRange {
            face: 0,
            index: 2,
            vertex_count: 2
        }
    ));
}

#[test]
fn test_vertex_without_uv() {
    let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 5 5 5\nvt 0 0\nvt 1 0\nvt 0 1\nf 1/1 2/2 3/3\n";
    let err = parse_obj(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, UvGridError::MissingTextureCoordinate { vertex: 3 }));
}

#[test]
fn test_missing_file() {
    let err = read_obj("/nonexistent/uvgrid/part.obj").unwrap_err();
    assert!(matches!(err, UvGridError::Io(_)));
}

#[test]
fn test_plate_survives_text_round_trip() {
    let mesh = plate_mesh(200.0, 150.0, 5.0);
    let path = std::env::temp_dir().join(format!("uvgrid_plate_{}.obj", std::process::id()));
    write_obj(&mesh, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
    assert!(text.contains("f 1/1 2/2 3/3"));
    assert_eq!(parse_obj(Cursor::new(text)).unwrap(), mesh);
}
