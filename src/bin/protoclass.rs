#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use protoclass::cli::args::CliArgs;
use protoclass::cli::driver::{self, EXIT_FAILURE, EXIT_SUCCESS};
use protoclass::cli::reporter::Reporter;

fn main() -> Result<()> {
    // Installs a subscriber only when PROTOCLASS_LOG or RUST_LOG is set.
    protoclass::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = !args.no_color && std::io::stdout().is_terminal();
    let reporter = Reporter::new(color);

    match driver::run(&args, &reporter) {
        Ok(outcome) => {
            if !outcome.output.is_empty() {
                println!("{}", outcome.output);
            }
            if outcome.exit_code != EXIT_SUCCESS {
                std::process::exit(outcome.exit_code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
