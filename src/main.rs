//! Command-line entry point for the extrusion part-number decoder.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
