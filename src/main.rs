//! tempconv CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, convert, print, and exit
//! with the appropriate status. For programmatic use, prefer the library API
//! (`tempconv::convert`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
