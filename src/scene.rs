/// A polygon as a list of vertex indices. Triangulated input has exactly three.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn triangle(a: usize, b: usize, c: usize) -> Self {
        Self {
            indices: vec![a, b, c],
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A named group of faces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub name: String,
    pub faces: Vec<Face>,
}

impl Shape {
    pub fn new(name: impl Into<String>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            faces,
        }
    }
}

/// Parser output handed to the buffer builder.
///
/// `positions` is a flat `x, y, z` array shared by every shape; face indices
/// refer to vertices in it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedScene {
    pub positions: Vec<f32>,
    pub shapes: Vec<Shape>,
}

impl ParsedScene {
    pub fn new(positions: Vec<f32>, shapes: Vec<Shape>) -> Self {
        Self { positions, shapes }
    }

    /// Number of whole vertices in `positions`.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Total number of faces over all shapes.
    pub fn face_count(&self) -> usize {
        self.shapes.iter().map(|shape| shape.faces.len()).sum()
    }
}
