//! usolc binary.
//!
//! A drop-in stand-in for `solc`: it picks the installed compiler whose
//! version satisfies the source's `pragma solidity` declaration (and the
//! user's `-U` strategy) and hands it the rest of the command line.

mod run;

use std::process::ExitCode;

use miette::Result;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = run::collect_args()?;
    run::exec(&args)
}
