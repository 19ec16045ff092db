//! `license-collector` — gather the licenses of a project's third-party
//! dependencies into a single file.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the tool config and build the canonical text table ([`config`], [`license`]).
//! 3. Read each requested ecosystem's manifest ([`analyzer`]).
//! 4. Resolve each dependency: manual overrides first, then license files
//!    sniffed under the dependency root ([`resolver`], [`detector`]).
//! 5. Aggregate into license blocks and literal entries ([`aggregate`]).
//! 6. Render and write the output file ([`report`]).
//! 7. Exit `0` on success, `1` on any error, including a missing license.

mod aggregate;
mod analyzer;
mod cli;
mod collector;
mod config;
mod detector;
mod error;
mod license;
mod models;
mod report;
mod resolver;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use collector::{collect, write_output, CollectOptions};
use config::load_config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let texts = config.license_texts()?;

    let opts = CollectOptions {
        go_project: cli.go_project.clone(),
        npm_project: cli.npm_project.clone(),
        npm_node_modules: cli.npm_node_modules.clone(),
        quiet: cli.quiet,
    };

    let doc = collect(&opts, &texts)?;
    write_output(&doc, cli.format, &cli.out)?;

    report::terminal::render(&doc, &cli.out, cli.verbose, cli.quiet);

    Ok(())
}
