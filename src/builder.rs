use crate::error::{MeshError, MeshResult};
use crate::scene::ParsedScene;
use crate::types::{IndexBuffer, Triangle, VertexBuffer};

/// Converts a triangulated scene into a vertex buffer and an index buffer.
///
/// Rows keep the input order: vertex `i` is `positions[3i..3i + 3]`, and
/// triangles are the faces of each shape in turn.
///
/// # Errors
///
/// Returns [`MeshError::NoFaces`] when the scene has no shapes.
///
/// # Panics
///
/// Panics if the parser broke its contract: a position array that is not a
/// whole number of vertices, a face without exactly three indices, or an
/// index outside the vertex buffer.
pub fn build_buffers(scene: &ParsedScene) -> MeshResult<(VertexBuffer, IndexBuffer)> {
    if scene.shapes.is_empty() {
        return Err(MeshError::NoFaces);
    }

    let positions = &scene.positions;
    let vertex_count = positions.len() / 3;
    assert_eq!(
        positions.len(),
        vertex_count * 3,
        "position array of length {} is not a whole number of vertices",
        positions.len()
    );

    let mut vertex_rows = Vec::with_capacity(vertex_count);
    vertex_rows.extend(positions.chunks_exact(3).map(|p| [p[0], p[1], p[2]]));
    let vertices = VertexBuffer::from_rows(vertex_rows);

    let mut triangle_count = 0;
    for shape in &scene.shapes {
        for (face_index, face) in shape.faces.iter().enumerate() {
            assert_eq!(
                face.len(),
                3,
                "face {} of shape '{}' has {} indices; expected a triangle",
                face_index,
                shape.name,
                face.len()
            );
            for &index in &face.indices {
                assert!(
                    index < vertex_count,
                    "face {} of shape '{}' references vertex {} but only {} exist",
                    face_index,
                    shape.name,
                    index,
                    vertex_count
                );
            }
        }
        triangle_count += shape.faces.len();
    }

    let mut index_rows: Vec<Triangle> = Vec::with_capacity(triangle_count);
    for shape in &scene.shapes {
        for face in &shape.faces {
            let i = &face.indices;
            index_rows.push([narrow(i[0]), narrow(i[1]), narrow(i[2])]);
        }
    }

    log::debug!(
        "Built {} vertices and {} triangles from {} shapes",
        vertices.len(),
        index_rows.len(),
        scene.shapes.len()
    );

    Ok((vertices, IndexBuffer::from_rows(index_rows)))
}

fn narrow(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or_else(|_| panic!("vertex index {} does not fit a 32-bit index buffer", index))
}
