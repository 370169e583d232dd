//! Wavefront OBJ loading.
//!
//! Tokenizing is done by the `obj` crate's raw parser, which keeps every `v`
//! line in file order and resolves face indices against that global list.
//! This module splits the polygons into shapes at `o`/`g` boundaries, fans
//! them into triangles and hands the result to the buffer builder. Material
//! libraries referenced by the file are never opened.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use obj::raw::object::{Group, Polygon, RawObj};

use crate::builder::build_buffers;
use crate::error::{MeshError, MeshResult};
use crate::scene::{Face, ParsedScene, Shape};
use crate::types::{IndexBuffer, VertexBuffer};

const DEFAULT_SHAPE_NAME: &str = "default";

/// Parses OBJ text into a triangulated scene.
///
/// Vertex positions are kept exactly as listed in the file, including ones
/// no face uses. Each run of polygons under one object or group name becomes
/// a [`Shape`]; polygons with more than three corners are split into a fan.
pub fn parse_obj<R: BufRead>(reader: &mut R) -> MeshResult<ParsedScene> {
    let raw = obj::raw::parse_obj(reader)?;

    let positions: Vec<f32> = raw
        .positions
        .iter()
        .flat_map(|&(x, y, z, _w)| [x, y, z])
        .collect();
    let vertex_count = raw.positions.len();

    let mut shapes = Vec::new();
    for (start, end) in shape_spans(&raw) {
        let mut faces = Vec::with_capacity(end - start);
        for face_index in start..end {
            let corners = polygon_vertices(&raw.polygons[face_index]);
            if corners.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face: face_index,
                    vertices: corners.len(),
                });
            }
            if let Some(&index) = corners.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::FaceVertexOutOfRange {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
            fan_triangulate(&corners, &mut faces);
        }

        let name = shape_name(&raw, start);
        log::debug!("  Shape {:?}: {} polygons, {} triangles", name, end - start, faces.len());
        shapes.push(Shape::new(name, faces));
    }

    let scene = ParsedScene::new(positions, shapes);
    log::debug!(
        "Parsed OBJ scene: {} shapes, {} vertices, {} faces",
        scene.shapes.len(),
        scene.vertex_count(),
        scene.face_count()
    );
    Ok(scene)
}

/// Position indices of a polygon's corners, ignoring texture and normal
/// references.
fn polygon_vertices(polygon: &Polygon) -> Vec<usize> {
    match polygon {
        Polygon::P(v) => v.clone(),
        Polygon::PT(v) => v.iter().map(|&(p, _)| p).collect(),
        Polygon::PN(v) => v.iter().map(|&(p, _)| p).collect(),
        Polygon::PTN(v) => v.iter().map(|&(p, _, _)| p).collect(),
    }
}

/// Splits a convex polygon into triangles sharing its first corner.
fn fan_triangulate(corners: &[usize], faces: &mut Vec<Face>) {
    let first = corners[0];
    for pair in corners[1..].windows(2) {
        faces.push(Face::triangle(first, pair[0], pair[1]));
    }
}

/// Polygon ranges `[start, end)` covering every polygon, cut wherever an
/// object or group begins.
fn shape_spans(raw: &RawObj) -> Vec<(usize, usize)> {
    let total = raw.polygons.len();
    let mut cuts: Vec<usize> = raw
        .meshes
        .values()
        .chain(raw.groups.values())
        .flat_map(|group| group.polygons.iter())
        .filter(|range| range.start < range.end)
        .map(|range| range.start)
        .filter(|&start| start < total)
        .collect();
    cuts.push(0);
    cuts.push(total);
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|(start, end)| start < end)
        .collect()
}

/// Name of the object holding `polygon`, else its group, else `"default"`.
fn shape_name(raw: &RawObj, polygon: usize) -> String {
    find_containing(&raw.meshes, polygon)
        .or_else(|| find_containing(&raw.groups, polygon))
        .unwrap_or_else(|| DEFAULT_SHAPE_NAME.to_string())
}

fn find_containing<'a>(
    groups: impl IntoIterator<Item = (&'a String, &'a Group)>,
    polygon: usize,
) -> Option<String> {
    groups
        .into_iter()
        .find(|(name, group)| {
            !name.is_empty()
                && group
                    .polygons
                    .iter()
                    .any(|range| range.start <= polygon && polygon < range.end)
        })
        .map(|(name, _)| name.clone())
}

/// Loads a path into a [`ParsedScene`] without building buffers.
pub fn load_scene_from_obj(path: impl AsRef<Path>) -> MeshResult<ParsedScene> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MeshError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let scene = parse_obj(&mut BufReader::new(file))?;
    log::info!(
        "Loaded OBJ file {:?}: {} shapes, {} vertices",
        path,
        scene.shapes.len(),
        scene.vertex_count()
    );
    Ok(scene)
}

/// Reads OBJ text and returns its vertex and index buffers.
pub fn load_mesh_from_obj_reader<R: BufRead>(
    reader: &mut R,
) -> MeshResult<(VertexBuffer, IndexBuffer)> {
    let scene = parse_obj(reader)?;
    build_buffers(&scene)
}

/// Loads an OBJ file and returns its vertex and index buffers.
pub fn load_mesh_from_obj(path: impl AsRef<Path>) -> MeshResult<(VertexBuffer, IndexBuffer)> {
    let scene = load_scene_from_obj(path)?;
    build_buffers(&scene)
}
