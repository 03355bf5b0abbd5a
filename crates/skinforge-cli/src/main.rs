//! SkinForge CLI - Command-line interface for procedural skin maps
//!
//! This binary renders, previews, validates and converts SkinForge render
//! documents.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli_args::{Cli, Commands};
use skinforge_cli::commands;
use skinforge_cli::commands::render::RenderArgs;

/// Log filter for `-v` repetitions; `RUST_LOG` takes precedence.
fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render {
            input,
            out_dir,
            stem,
            resolution,
            preset,
            json,
        } => commands::render::run(&RenderArgs {
            input: &input,
            out_dir: &out_dir,
            stem: stem.as_deref(),
            resolution,
            preset: preset.as_deref(),
            json,
        }),
        Commands::Preview { input, out, size } => commands::preview::run(&input, &out, size),
        Commands::Validate { input, json } => commands::validate::run(&input, json),
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Catalog { json } => commands::catalog::run(json),
        Commands::Apply { input, out } => commands::apply::run(&input, out.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
