//! fsmkv - Entry Point
//!
//! Binary entry point for the `fsmkv` command line tool.

use clap::Parser;
use fsmkv::cli::{Cli, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fsmkv: {e}");
            ExitCode::FAILURE
        }
    }
}
