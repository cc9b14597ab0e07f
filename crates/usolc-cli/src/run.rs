//! Resolve a compiler for one invocation and run it.

use std::io::Read;
use std::process::{ExitCode, ExitStatus};

use console::Style;
use tempfile::TempPath;
use usolc_resolver::args::{self, ParsedArguments};
use usolc_resolver::resolver;
use usolc_resolver::standard_json::StandardJsonInput;
use usolc_resolver::version::SolcVersion;
use usolc_resolver::ResolveError;
use usolc_toolchain::config::GlobalConfig;
use usolc_toolchain::{discovery, installed};
use usolc_util::errors::{UsolcError, UsolcResult};
use usolc_util::process::CommandBuilder;

const SEPARATOR: &str = "#################################################";

/// Command-line arguments without the program name.
pub fn collect_args() -> UsolcResult<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string().map_err(|raw| {
                UsolcError::Generic {
                    message: format!("Argument is not valid UTF-8: {}", raw.to_string_lossy()),
                }
                .into()
            })
        })
        .collect()
}

pub fn exec(raw: &[String]) -> UsolcResult<ExitCode> {
    let parsed = match args::partition(raw) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(report(e)),
    };
    tracing::debug!(?parsed, "partitioned arguments");

    let config = GlobalConfig::load()?;
    let available = installed::list_installed(&config.toolchain)?;

    if parsed.verbose {
        print_available(&available);
    }

    let (chosen, scratch) = match select(&parsed, &available) {
        Ok(selection) => selection,
        Err(SelectError::Resolve(e)) => return Ok(report(e)),
        Err(SelectError::Other(e)) => return Err(e.into()),
    };

    if parsed.verbose {
        println!("solc version: {}", Style::new().green().bold().apply_to(&chosen));
        println!("{SEPARATOR}");
    }

    let binary = discovery::resolve_binary(&config.toolchain, &chosen)?;
    let mut command = CommandBuilder::new(binary).args(parsed.forwarded.iter().cloned());
    if let Some(ref path) = scratch {
        command = command.stdin_file(path);
    }
    let status = command.status()?;
    // The scratch file must outlive the child.
    drop(scratch);
    Ok(exit_code(status))
}

/// Pick the version, buffering stdin to a scratch file in standard-json mode.
fn select(
    parsed: &ParsedArguments,
    available: &[SolcVersion],
) -> Result<(SolcVersion, Option<TempPath>), SelectError> {
    if parsed.standard_json {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(UsolcError::Io)?;
        let input: StandardJsonInput = buf.parse()?;
        let rules = input.source_rules();
        let chosen = resolver::resolve_with_rules(available, &rules, &parsed.strategy)?;
        let scratch = usolc_util::fs::write_scratch(buf.as_bytes()).map_err(UsolcError::Io)?;
        return Ok((chosen, Some(scratch)));
    }

    let candidate = parsed.candidate.as_deref().map(std::path::Path::new);
    let chosen = resolver::resolve(available, candidate, &parsed.strategy)?;
    Ok((chosen, None))
}

enum SelectError {
    Resolve(ResolveError),
    Other(UsolcError),
}

impl From<ResolveError> for SelectError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}

impl From<UsolcError> for SelectError {
    fn from(e: UsolcError) -> Self {
        Self::Other(e)
    }
}

fn print_available(available: &[SolcVersion]) {
    let names: Vec<String> = available.iter().map(ToString::to_string).collect();
    println!("{SEPARATOR}");
    println!(
        "Available solc versions are: {}",
        Style::new().cyan().apply_to(format!("{names:?}"))
    );
}

/// Print a resolution failure and map it to exit code 1.
fn report(err: ResolveError) -> ExitCode {
    tracing::debug!(available = ?err.available(), "resolution failed");
    eprintln!("{:?}", miette::Report::new(err));
    ExitCode::FAILURE
}

fn exit_code(status: ExitStatus) -> ExitCode {
    if status.code().is_none() {
        tracing::warn!("solc terminated without an exit code: {status}");
    }
    ExitCode::from(code_byte(status.code()))
}

/// The child's exit code as a process exit byte. Codes outside `0..=255`
/// and a missing code (killed by a signal) map to 1.
fn code_byte(code: Option<i32>) -> u8 {
    code.and_then(|code| u8::try_from(code).ok()).unwrap_or(1)
}
