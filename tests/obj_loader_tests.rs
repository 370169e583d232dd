use obj_buffers::{
    load_mesh_from_obj, load_mesh_from_obj_reader, load_scene_from_obj, MeshError,
};
use std::fs;
use tempfile::tempdir;

const TRIANGLE: &str = "\
# single triangle
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

const QUAD: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

const TWO_OBJECTS: &str = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o second
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";

/// Reversed winding, a vertex shared by two objects, and one unused vertex
const SHARED_AND_UNUSED: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 9 9 9
v 1 1 0
o first
f 3 2 1
o second
f 2 5 3
";

#[cfg(test)]
mod obj_loader_tests {
    use super::*;

    #[test]
    fn test_triangle_from_reader() {
        let (vertices, indices) = load_mesh_from_obj_reader(&mut TRIANGLE.as_bytes()).unwrap();

        assert_eq!(
            vertices.rows(),
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert_eq!(indices.rows(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_quad_is_triangulated() {
        let (vertices, indices) = load_mesh_from_obj_reader(&mut QUAD.as_bytes()).unwrap();

        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 2, "Quad should become two triangles");

        let mut used: Vec<u32> = indices.as_flat().to_vec();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3], "Both triangles together cover the quad");
    }

    #[test]
    fn test_objects_become_shapes_in_order() {
        let mut reader = TWO_OBJECTS.as_bytes();
        let scene = obj_buffers::parse_obj(&mut reader).unwrap();

        let names: Vec<&str> = scene.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);

        let (vertices, indices) = obj_buffers::build_buffers(&scene).unwrap();
        assert_eq!(vertices.len(), 6);
        assert_eq!(indices.rows(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(vertices.row(3), Some([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_comments_only_reports_no_faces() {
        let result = load_mesh_from_obj_reader(&mut "# empty\n".as_bytes());
        assert!(matches!(result, Err(MeshError::NoFaces)));
    }

    #[test]
    fn test_vertices_without_faces_reports_no_faces() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";
        let result = load_mesh_from_obj_reader(&mut text.as_bytes());
        assert!(matches!(result, Err(MeshError::NoFaces)));
    }

    #[test]
    fn test_face_past_last_vertex_is_recoverable() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
        let result = load_mesh_from_obj_reader(&mut text.as_bytes());
        assert!(matches!(
            result,
            Err(MeshError::FaceVertexOutOfRange { .. }) | Err(MeshError::Parse(_))
        ));
    }

    #[test]
    fn test_vertices_keep_file_order_and_indices() {
        let (vertices, indices) =
            load_mesh_from_obj_reader(&mut SHARED_AND_UNUSED.as_bytes()).unwrap();

        assert_eq!(vertices.len(), 5, "Every v line becomes one row");
        assert_eq!(
            vertices.rows(),
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [9.0, 9.0, 9.0],
                [1.0, 1.0, 0.0]
            ]
        );
        assert_eq!(indices.rows(), &[[2, 1, 0], [1, 4, 2]]);
    }

    #[test]
    fn test_shared_vertex_shapes_are_named_in_order() {
        let scene = obj_buffers::parse_obj(&mut SHARED_AND_UNUSED.as_bytes()).unwrap();

        let names: Vec<&str> = scene.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(scene.vertex_count(), 5);
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        fs::write(&path, TRIANGLE).unwrap();

        let (vertices, indices) = load_mesh_from_obj(&path).unwrap();

        assert_eq!(vertices.len(), 3);
        assert_eq!(indices.len(), 1);
    }

    #[test]
    fn test_missing_material_library_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("with_mtl.obj");
        fs::write(&path, format!("mtllib missing.mtl\nusemtl red\n{}", TRIANGLE)).unwrap();

        let (_, indices) = load_mesh_from_obj(&path).unwrap();

        assert_eq!(indices.rows(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_missing_file_is_recoverable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.obj");

        let err = load_mesh_from_obj(&path).unwrap_err();

        assert!(matches!(err, MeshError::Open { .. }));
        assert!(err.to_string().contains("cannot load the obj file"));
        assert!(err.to_string().contains("does_not_exist.obj"));
    }

    #[test]
    fn test_scene_from_path_keeps_shape_breakdown() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("two.obj");
        fs::write(&path, TWO_OBJECTS).unwrap();

        let scene = load_scene_from_obj(&path).unwrap();

        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.vertex_count(), 6);
        assert_eq!(scene.face_count(), 2);
    }
}
