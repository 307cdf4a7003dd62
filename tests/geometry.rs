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

use uvgrid::geometry::util::{
    BarycentricFrame, barycentric_coords, is_degenerate_triangle, point_in_triangle,
};
use uvgrid::geometry::{Aabb2, Point2, Point3, Vector2};

#[test]
fn test_distance() {
    let p1 = Point2::new(0.0, 0.0);
    let p2 = Point2::new(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_vector_cross() {
    let v1 = Vector2::new(1.0, 0.0);
    let v2 = Vector2::new(0.0, 1.0);
    assert_eq!(v1.cross(&v2), 1.0);
    assert_eq!(v2.cross(&v1), -1.0);
    assert!(Vector2::new(0.0, 0.0).normalized().is_none());
}

#[test]
fn test_point_sub_gives_vector() {
    let a = Point2::new(1.0, 2.0);
    let b = Point2::new(4.0, 6.0);
    assert_eq!(b - a, Vector2::new(3.0, 4.0));
    assert_eq!(a + Vector2::new(3.0, 4.0), b);
}

#[test]
fn test_point3_projects_to_xy() {
    let p = Point3::new(1.5, -2.0, 7.0);
    assert_eq!(p.xy(), Point2::new(1.5, -2.0));
}

#[test]
fn test_barycentric_coords_of_vertices() {
    let v0 = Point2::new(0.0, 0.0);
    let v1 = Point2::new(1.0, 0.0);
    let v2 = Point2::new(0.0, 1.0);

    // a weights v2 - v0, b weights v1 - v0
    assert_eq!(barycentric_coords(&v0, &v0, &v1, &v2), Some((0.0, 0.0)));
    assert_eq!(barycentric_coords(&v1, &v0, &v1, &v2), Some((0.0, 1.0)));
    assert_eq!(barycentric_coords(&v2, &v0, &v1, &v2), Some((1.0, 0.0)));
}

#[test]
fn test_point_in_triangle_closed() {
    let v0 = Point2::new(0.0, 0.0);
    let v1 = Point2::new(1.0, 0.0);
    let v2 = Point2::new(0.0, 1.0);

    assert!(point_in_triangle(&Point2::new(0.25, 0.25), &v0, &v1, &v2));
    // edges and corners count as inside
    assert!(point_in_triangle(&Point2::new(0.5, 0.0), &v0, &v1, &v2));
    assert!(point_in_triangle(&Point2::new(0.5, 0.5), &v0, &v1, &v2));
    assert!(point_in_triangle(&v1, &v0, &v1, &v2));

    assert!(!point_in_triangle(&Point2::new(0.6, 0.6), &v0, &v1, &v2));
    assert!(!point_in_triangle(&Point2::new(-0.01, 0.5), &v0, &v1, &v2));
}

#[test]
fn test_winding_does_not_matter() {
    let v0 = Point2::new(0.1, 0.1);
    let v1 = Point2::new(0.9, 0.2);
    let v2 = Point2::new(0.4, 0.8);
    let p = Point2::new(0.45, 0.35);

    assert!(point_in_triangle(&p, &v0, &v1, &v2));
    assert!(point_in_triangle(&p, &v0, &v2, &v1));
    assert!(point_in_triangle(&p, &v2, &v1, &v0));
}

#[test]
fn test_degenerate_triangles() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(0.5, 0.5);
    let c = Point2::new(1.0, 1.0);

    assert!(is_degenerate_triangle(&a, &b, &c)); // collinear
    assert!(is_degenerate_triangle(&a, &a, &c)); // repeated vertex
    assert!(is_degenerate_triangle(&a, &a, &a));
    assert!(BarycentricFrame::new(&a, &b, &c).is_none());
    assert!(!point_in_triangle(&b, &a, &b, &c));

    let nan = Point2::new(f64::NAN, 0.0);
    assert!(is_degenerate_triangle(&a, &nan, &c));
}

#[test]
fn test_tiny_triangle_is_not_degenerate() {
    let s = 1e-4;
    let a = Point2::new(0.5, 0.5);
    let b = Point2::new(0.5 + s, 0.5);
    let c = Point2::new(0.5, 0.5 + s);
    assert!(!is_degenerate_triangle(&a, &b, &c));
}

#[test]
fn test_aabb_from_points_union_and_intersection() {
    let a = Aabb2::from_points(&Point2::new(0.0, 1.0), &Point2::new(2.0, -1.0));
    assert_eq!(a.min, Point2::new(0.0, -1.0));
    assert_eq!(a.max, Point2::new(2.0, 1.0));

    let b = Aabb2::from_points(&Point2::new(0.5, -0.5), &Point2::new(3.0, 0.5));
    let u = a.union(&b);
    assert_eq!(u.min, Point2::new(0.0, -1.0));
    assert_eq!(u.max, Point2::new(3.0, 1.0));

    let c = Aabb2::from_points(&Point2::new(2.5, 2.5), &Point2::new(3.0, 3.0));
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));

    // touching boxes intersect
    let d = Aabb2::from_points(&Point2::new(2.0, 1.0), &Point2::new(4.0, 4.0));
    assert!(a.intersects(&d));
}

#[test]
fn test_aabb_contains_is_inclusive() {
    let b = Aabb2::from_bounds(0.25, 0.75, 0.1, 0.2);
    assert!(b.contains(&Point2::new(0.25, 0.1)));
    assert!(b.contains(&Point2::new(0.75, 0.2)));
    assert!(b.contains(&Point2::new(0.5, 0.15)));
    assert!(!b.contains(&Point2::new(0.7500001, 0.15)));
    assert_eq!(b.bounds(), (0.25, 0.75, 0.1, 0.2));
}

#[test]
fn test_aabb_clamp_to_unit() {
    let b: Aabb2<f64> = Aabb2::from_center(&Point2::new(0.95, 0.02), 0.1, 0.1).clamp_to_unit();
    assert_eq!(b.u_max(), 1.0);
    assert_eq!(b.v_min(), 0.0);
    assert!((b.u_min() - 0.85).abs() < 1e-12);
    assert!((b.v_max() - 0.12).abs() < 1e-12);
}
