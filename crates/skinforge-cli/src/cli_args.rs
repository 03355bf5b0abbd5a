//! CLI argument definitions for the SkinForge command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};

/// SkinForge - Procedural Skin Map Renderer
#[derive(Parser)]
#[command(name = "skinforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render all seven maps of a document to PNG
    Render {
        /// Path to the document (JSON)
        #[arg(short, long)]
        input: String,

        /// Directory for the PNG files
        #[arg(short, long)]
        out_dir: String,

        /// File name stem (default: input file stem)
        #[arg(long)]
        stem: Option<String>,

        /// Override the document resolution
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Apply a built-in preset before rendering
        #[arg(short, long)]
        preset: Option<String>,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a low-resolution preview of the document's graph
    Preview {
        /// Path to the document (JSON)
        #[arg(short, long)]
        input: String,

        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// Preview edge length (default: 64)
        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Validate a document and report clamped fields and graph diagnostics
    Validate {
        /// Path to the document (JSON)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List built-in presets
    Presets {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the node catalog
    Catalog {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Export graph noise scale and seed into the pattern settings
    Apply {
        /// Path to the document (JSON)
        #[arg(short, long)]
        input: String,

        /// Output document path (default: overwrite the input)
        #[arg(short, long)]
        out: Option<String>,
    },
}
