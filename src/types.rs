use glam::Vec3;
use serde::Serialize;

use crate::math::AABB;
use crate::scene::ParsedScene;

/// One triangle as three indices into a [`VertexBuffer`].
pub type Triangle = [u32; 3];

/// Vertex positions, one `[x, y, z]` row per vertex
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexBuffer {
    rows: Vec<[f32; 3]>,
}

impl VertexBuffer {
    pub fn from_rows(rows: Vec<[f32; 3]>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[f32; 3]] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<[f32; 3]> {
        self.rows.get(index).copied()
    }

    /// Raw bytes for GPU upload (tightly packed `f32` triples)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rows)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.rows.iter().map(|&p| Vec3::from_array(p))
    }

    /// Bounds of all vertices, `None` for an empty buffer
    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.positions())
    }

    pub fn into_rows(self) -> Vec<[f32; 3]> {
        self.rows
    }
}

/// Triangle indices, one row per triangle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexBuffer {
    rows: Vec<Triangle>,
}

impl IndexBuffer {
    pub fn from_rows(rows: Vec<Triangle>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Triangle] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<Triangle> {
        self.rows.get(index).copied()
    }

    /// Indices as a flat list, three per triangle
    pub fn as_flat(&self) -> &[u32] {
        bytemuck::cast_slice(&self.rows)
    }

    /// Raw bytes for GPU upload (`u32` indices)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rows)
    }

    pub fn into_rows(self) -> Vec<Triangle> {
        self.rows
    }
}

/// Per-shape line of a [`MeshSummary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub name: String,
    pub triangles: usize,
}

/// Serializable bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsSummary {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Overview of a loaded mesh, as reported by the `obj-buffers` tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshSummary {
    pub vertices: usize,
    pub triangles: usize,
    pub shapes: Vec<ShapeSummary>,
    pub bounds: Option<BoundsSummary>,
}

impl MeshSummary {
    pub fn new(scene: &ParsedScene, vertices: &VertexBuffer, indices: &IndexBuffer) -> Self {
        let shapes = scene
            .shapes
            .iter()
            .map(|shape| ShapeSummary {
                name: shape.name.clone(),
                triangles: shape.faces.len(),
            })
            .collect();

        let bounds = vertices.bounds().map(|aabb| BoundsSummary {
            min: aabb.min.to_array(),
            max: aabb.max.to_array(),
        });

        Self {
            vertices: vertices.len(),
            triangles: indices.len(),
            shapes,
            bounds,
        }
    }
}
