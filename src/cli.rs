// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "obj-buffers")]
#[command(about = "Convert an OBJ mesh into vertex and index buffers", long_about = None)]
pub struct Cli {
    /// OBJ file to load
    pub input: PathBuf,

    /// Print the summary as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Write vertices.bin and indices.bin into this directory
    #[arg(long = "write-buffers", value_name = "DIR")]
    pub write_buffers: Option<PathBuf>,

    /// Suppress the summary
    #[arg(long, short, default_value = "false")]
    pub quiet: bool,
}
