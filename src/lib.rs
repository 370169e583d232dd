pub mod builder;
pub mod cli;
pub mod error;
pub mod loaders;
pub mod math;
pub mod scene;
pub mod types;

pub use builder::build_buffers;
pub use error::{MeshError, MeshResult};
pub use loaders::{load_mesh_from_obj, load_mesh_from_obj_reader, load_scene_from_obj, parse_obj};
pub use scene::{Face, ParsedScene, Shape};
pub use types::{IndexBuffer, MeshSummary, Triangle, VertexBuffer};
