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

use uvgrid::UvGridError;
use uvgrid::geometry::{Point2, Point3};
use uvgrid::mesh::{Mesh, box_mesh, plate_mesh};
use uvgrid::raster::{
    DEFAULT_RESOLUTION, Grid, TriangleCoverage, rasterize_occupancy, rasterize_triangle, render,
};

fn flat_mesh(uv: Vec<Point2<f64>>, faces: Vec<[usize; 3]>) -> Mesh {
    let vertices = uv.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    Mesh::new(vertices, faces, uv).unwrap()
}

fn edge(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

#[test]
fn test_triangle_interior_set_and_outside_bbox_clear() {
    let a = Point2::new(0.1, 0.1);
    let b = Point2::new(0.8, 0.2);
    let c = Point2::new(0.3, 0.9);
    let r = 64;
    let grid = rasterize_occupancy(&flat_mesh(vec![a, b, c], vec![[0, 1, 2]]), r);

    let mut inside = 0;
    for row in 0..r {
        for col in 0..r {
            let p = grid.sample_point(row, col);
            let d = [edge(&a, &b, &p), edge(&b, &c, &p), edge(&c, &a, &p)];
            let strictly_inside = d.iter().all(|&x| x > 1e-9) || d.iter().all(|&x| x < -1e-9);
            let strictly_outside = d.iter().any(|&x| x > 1e-9) && d.iter().any(|&x| x < -1e-9);

            if strictly_inside {
                inside += 1;
                assert_eq!(grid[(row, col)], 1.0, "pixel ({row},{col}) should be set");
            }
            if strictly_outside {
                assert_eq!(grid[(row, col)], 0.0, "pixel ({row},{col}) should be clear");
            }
            if p.x < 0.1 || p.x > 0.8 || p.y < 0.1 || p.y > 0.9 {
                assert_eq!(grid[(row, col)], 0.0);
            }
        }
    }
    assert!(inside > 100);
    assert!(grid.is_binary());
}

#[test]
fn test_box_occupies_every_face_footprint() {
    let mesh = box_mesh(100.0, 100.0, 20.0);
    let r = DEFAULT_RESOLUTION;
    let grid = render(&mesh, r, &[]).unwrap();
    let occ = grid.occupancy();

    for f in 0..mesh.face_count() {
        let [a, b, c] = mesh.face_uvs(f);
        let cu = (a.x + b.x + c.x) / 3.0;
        let cv = (a.y + b.y + c.y) / 3.0;
        let col = ((cu * r as f64).floor() as usize).min(r - 1);
        let row = ((cv * r as f64).floor() as usize).min(r - 1);
        assert_eq!(occ[(row, col)], 1.0, "face {f} footprint is empty");
    }

    // a square box covers the whole unit square
    assert_eq!(occ.count_above(0.5), r * r);
}

#[test]
fn test_height_does_not_change_occupancy() {
    let low = rasterize_occupancy(&box_mesh(100.0, 100.0, 20.0), 128);
    let high = rasterize_occupancy(&box_mesh(100.0, 100.0, 75.0), 128);
    assert_eq!(low, high);

    let wide = rasterize_occupancy(&box_mesh(120.0, 60.0, 5.0), 128);
    let tall = rasterize_occupancy(&box_mesh(120.0, 60.0, 500.0), 128);
    assert_eq!(wide, tall);
}

#[test]
fn test_plate_occupancy_stops_at_short_side() {
    let grid = rasterize_occupancy(&plate_mesh(200.0, 150.0, 5.0), 256);
    assert_eq!(grid[(0, 0)], 1.0);
    assert_eq!(grid[(100, 200)], 1.0);
    assert_eq!(grid[(192, 255)], 1.0); // v = 0.75 exactly
    assert_eq!(grid[(193, 10)], 0.0);
    assert_eq!(grid[(255, 255)], 0.0);
}

#[test]
fn test_degenerate_triangle_is_skipped() {
    let uv = vec![
        Point2::new(0.1, 0.1),
        Point2::new(0.6, 0.1),
        Point2::new(0.1, 0.6),
        Point2::new(0.2, 0.2),
        Point2::new(0.4, 0.4),
        Point2::new(0.8, 0.8),
    ];
    let with_degenerate = flat_mesh(uv.clone(), vec![[0, 1, 2], [3, 4, 5], [3, 3, 3]]);
    let without = flat_mesh(uv, vec![[0, 1, 2]]);

    let a = rasterize_occupancy(&with_degenerate, 64);
    let b = rasterize_occupancy(&without, 64);
    assert_eq!(a, b);
    assert!(a.as_slice().iter().all(|v| v.is_finite()));
    assert!(a.is_binary());
}

#[test]
fn test_triangle_coverage_kinds() {
    let mut grid = Grid::zeros(32);
    let outside = rasterize_triangle(
        &mut grid,
        &Point2::new(2.0, 2.0),
        &Point2::new(3.0, 2.0),
        &Point2::new(2.0, 3.0),
    );
    assert_eq!(outside, TriangleCoverage::OutsideDomain);

    let flat = rasterize_triangle(
        &mut grid,
        &Point2::new(0.0, 0.0),
        &Point2::new(0.5, 0.5),
        &Point2::new(1.0, 1.0),
    );
    assert_eq!(flat, TriangleCoverage::Degenerate);
    assert_eq!(grid.count_above(0.0), 0);

    let drawn = rasterize_triangle(
        &mut grid,
        &Point2::new(0.0, 0.0),
        &Point2::new(0.5, 0.0),
        &Point2::new(0.0, 0.5),
    );
    assert_eq!(drawn, TriangleCoverage::Drawn);
    assert!(grid.count_above(0.5) > 0);
}

#[test]
fn test_triangle_crossing_domain_is_clipped() {
    let mesh = flat_mesh(
        vec![
            Point2::new(-0.5, -0.5),
            Point2::new(1.5, -0.5),
            Point2::new(-0.5, 1.5),
        ],
        vec![[0, 1, 2]],
    );
    let grid = rasterize_occupancy(&mesh, 32);
    assert_eq!(grid[(0, 0)], 1.0);
    assert_eq!(grid[(10, 10)], 1.0);
    assert_eq!(grid[(31, 31)], 0.0);
}

#[test]
fn test_accumulation_never_clears() {
    let uv = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
    ];
    let one = rasterize_occupancy(&flat_mesh(uv.clone(), vec![[0, 1, 2]]), 32);
    let both = rasterize_occupancy(&flat_mesh(uv, vec![[0, 1, 2], [1, 3, 2]]), 32);
    for (a, b) in one.as_slice().iter().zip(both.as_slice()) {
        assert!(b >= a);
    }
    assert!(both.count_above(0.5) > one.count_above(0.5));
}

#[test]
fn test_tag_channels_are_stacked_in_order() {
    let mesh = plate_mesh(100.0, 100.0, 2.0);
    let first = Grid::filled(16, 0.25);
    let second = Grid::filled(16, 0.75);

    let grid = render(&mesh, 16, &[first.clone(), second.clone()]).unwrap();
    assert_eq!(grid.shape(), (3, 16, 16));
    assert_eq!(grid.channel(1), Some(&first));
    assert_eq!(grid.channel(2), Some(&second));
    assert_eq!(grid.to_flat().len(), 3 * 16 * 16);
}

#[test]
fn test_tag_with_wrong_resolution_is_rejected() {
    let mesh = plate_mesh(100.0, 100.0, 2.0);
    let err = render(&mesh, 16, &[Grid::zeros(8)]).unwrap_err();
    assert!(matches!(
        err,
        UvGridError::GridShapeMismatch {
            expected: 256,
            found: 64
        }
    ));
}
