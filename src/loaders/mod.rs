pub mod obj;

pub use obj::{
    load_mesh_from_obj, load_mesh_from_obj_reader, load_scene_from_obj, parse_obj,
};
