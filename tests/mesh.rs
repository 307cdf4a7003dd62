use uvgrid::UvGridError;
use uvgrid::geometry::{Point2, Point3};
use uvgrid::mesh::{Mesh, ParametricShape, box_mesh, plate_mesh};

fn unit_triangle() -> (Vec<Point3<f64>>, Vec<Point2<f64>>) {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let uv = vertices.iter().map(|v| v.xy()).collect();
    (vertices, uv)
}

#[test]
fn test_new_accepts_valid_mesh() {
    let (vertices, uv) = unit_triangle();
    let mesh = Mesh::new(vertices, vec![[0, 1, 2]], uv).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.face_uvs(0)[1], Point2::new(1.0, 0.0));
}

#[test]
fn test_new_rejects_face_index_out_of_range() {
    let (vertices, uv) = unit_triangle();
    let err = Mesh::new(vertices, vec![[0, 1, 2], [0, 2, 3]], uv).unwrap_err();
    match err {
        UvGridError::FaceIndexOutOfRange {
            face,
            index,
            vertex_count,
        } => {
            assert_eq!(face, 1);
            assert_eq!(index, 3);
            assert_eq!(vertex_count, 3);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_new_rejects_uv_count_mismatch() {
    let (vertices, mut uv) = unit_triangle();
    uv.pop();
    let err = Mesh::new(vertices, vec![[0, 1, 2]], uv).unwrap_err();
    assert!(matches!(
        err,
        UvGridError::UvCountMismatch {
            uv: 2,
            vertices: 3
        }
    ));
}

#[test]
fn test_out_of_range_uv_is_allowed() {
    let (vertices, _) = unit_triangle();
    let uv = vec![
        Point2::new(-0.5, 0.0),
        Point2::new(1.5, 0.0),
        Point2::new(0.0, 2.0),
    ];
    assert!(Mesh::new(vertices, vec![[0, 1, 2]], uv).is_ok());
}

#[test]
fn test_planar_uv_fallback() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 5.0),
        Point3::new(10.0, 0.0, 5.0),
        Point3::new(10.0, 4.0, 5.0),
    ];
    let mesh = Mesh::with_planar_uv(vertices, vec![[0, 1, 2]]).unwrap();
    let uv = mesh.uv();
    assert_eq!(uv[0], Point2::new(0.0, 0.0));
    assert!((uv[1].x - 1.0).abs() < 1e-6 && uv[1].x < 1.0);
    assert!((uv[2].y - 0.4).abs() < 1e-6);
}

#[test]
fn test_box_mesh_layout() {
    let mesh = box_mesh(100.0, 50.0, 20.0);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(mesh.vertices()[6], Point3::new(100.0, 50.0, 20.0));

    // normalized by the longer side
    assert_eq!(mesh.uv()[2], Point2::new(1.0, 0.5));
    assert_eq!(mesh.uv()[6], Point2::new(1.0, 0.5));
    assert!(mesh.validate().is_ok());

    let bounds = mesh.uv_bounds().unwrap();
    assert_eq!(bounds.bounds(), (0.0, 1.0, 0.0, 0.5));
}

#[test]
fn test_plate_mesh_layout() {
    let mesh = plate_mesh(200.0, 150.0, 5.0);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
    assert!(mesh.vertices().iter().all(|v| v.z == 0.0));
    assert_eq!(mesh.uv()[2], Point2::new(1.0, 0.75));

    // thickness does not enter the geometry
    assert_eq!(mesh, plate_mesh(200.0, 150.0, 50.0));
}

#[test]
fn test_parametric_shape_builds_matching_mesh() {
    let shape = ParametricShape::Box {
        length: 80.0,
        width: 120.0,
        height: 30.0,
    };
    assert_eq!(shape.build(), box_mesh(80.0, 120.0, 30.0));
    assert_eq!(shape.name(), "box");

    let plate = ParametricShape::Plate {
        length: 120.0,
        width: 100.0,
        thickness: 3.0,
    };
    assert_eq!(plate.build().face_count(), 2);
}
