use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use obj_buffers::cli::Cli;
use obj_buffers::{build_buffers, load_scene_from_obj, IndexBuffer, MeshSummary, VertexBuffer};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scene = load_scene_from_obj(&cli.input)
        .with_context(|| format!("Failed to load {:?}", cli.input))?;
    let (vertices, indices) = build_buffers(&scene)
        .with_context(|| format!("Failed to build buffers for {:?}", cli.input))?;

    if let Some(dir) = &cli.write_buffers {
        write_buffers(dir, &vertices, &indices)?;
    }

    if !cli.quiet {
        let summary = MeshSummary::new(&scene, &vertices, &indices);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&cli.input, &summary);
        }
    }

    Ok(())
}

fn print_summary(path: &Path, summary: &MeshSummary) {
    println!("{}", path.display());
    println!("  Vertices:  {}", summary.vertices);
    println!("  Triangles: {}", summary.triangles);
    println!("  Shapes:    {}", summary.shapes.len());
    for shape in &summary.shapes {
        println!("    {:<24} {} triangles", shape.name, shape.triangles);
    }
    if let Some(bounds) = &summary.bounds {
        println!("  Bounds:    {:?} to {:?}", bounds.min, bounds.max);
    }
}

/// Writes both buffers as little-endian binary blobs
fn write_buffers(dir: &Path, vertices: &VertexBuffer, indices: &IndexBuffer) -> Result<()> {
    fs::create_dir_all(dir).context(format!("Failed to create {:?}", dir))?;

    let vertex_bytes: Vec<u8> = vertices
        .rows()
        .iter()
        .flatten()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let index_bytes: Vec<u8> = indices.as_flat().iter().flat_map(|i| i.to_le_bytes()).collect();

    let vertex_path = dir.join("vertices.bin");
    let index_path = dir.join("indices.bin");
    fs::write(&vertex_path, vertex_bytes).context(format!("Failed to write {:?}", vertex_path))?;
    fs::write(&index_path, index_bytes).context(format!("Failed to write {:?}", index_path))?;

    log::info!("Wrote {:?} and {:?}", vertex_path, index_path);
    Ok(())
}
