//! Recoverable errors raised while loading OBJ data.
//!
//! Parser-contract violations inside the buffer builder are not represented
//! here; those panic.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh loading.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors a caller can catch and report.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The scene contained no shapes with faces.
    #[error(
        "The OBJ data appears to have no faces; it could be missing faces or might not be an OBJ file"
    )]
    NoFaces,

    /// The input file could not be opened for reading.
    #[error("cannot load the obj file '{}'", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OBJ parser rejected the input.
    #[error("failed to parse OBJ data: {0}")]
    Parse(#[from] obj::ObjError),

    /// A face has fewer than three corners.
    #[error("face {face} has {vertices} vertices; at least 3 are needed")]
    DegenerateFace {
        /// Face number in file order.
        face: usize,
        /// Number of corners it listed.
        vertices: usize,
    },

    /// A face refers to a vertex the file never declared.
    #[error("face {face} references vertex {index} but the file declares {vertex_count}")]
    FaceVertexOutOfRange {
        /// Face number in file order.
        face: usize,
        /// Zero-based vertex index.
        index: usize,
        /// Number of `v` lines in the file.
        vertex_count: usize,
    },
}
