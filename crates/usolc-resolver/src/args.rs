//! Command-line partitioning.
//!
//! Splits the raw arguments into the wrapper's own flags and the arguments
//! forwarded to solc, and picks out the source file whose pragma decides
//! the compiler version.

use crate::error::{ResolveError, ResolveResult};
use crate::strategy::Strategy;

/// Version strategy flag; consumes the next argument.
pub const STRATEGY_FLAG: &str = "-U";
/// Prints the available and chosen versions before running solc.
pub const INFO_FLAG: &str = "-uinfo";
/// Read a standard-json document from stdin.
pub const STANDARD_JSON_FLAG: &str = "--standard-json";
/// Extension of files that can carry a version pragma.
pub const SOURCE_EXTENSION: &str = ".sol";

/// solc options whose value is the following argument.
const VALUE_FLAGS: &[&str] = &[
    "-o",
    "--output-dir",
    "--combined-json",
    "--allow-paths",
    "--base-path",
    "--include-path",
    "--evm-version",
    "--libraries",
    "--optimize-runs",
    "--revert-strings",
    "--debug-info",
    "--metadata-hash",
    "--model-checker-contracts",
    "--model-checker-engine",
    "--model-checker-targets",
    "--model-checker-timeout",
    "--stop-after",
    "--yul-dialect",
    "--machine",
];

/// The outcome of partitioning one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    /// First source file argument; the only one consulted for pragmas.
    pub candidate: Option<String>,
    pub strategy: Strategy,
    /// Arguments for solc, in their original order, without argv[0].
    pub forwarded: Vec<String>,
    pub verbose: bool,
    pub standard_json: bool,
}

enum State {
    Classify,
    StrategyValue,
    FlagValue,
}

/// Partition `args` (program name excluded).
pub fn partition<S: AsRef<str>>(args: &[S]) -> ResolveResult<ParsedArguments> {
    let mut candidate: Option<String> = None;
    let mut strategy_text: Option<String> = None;
    let mut forwarded = Vec::with_capacity(args.len());
    let mut verbose = false;
    let mut standard_json = false;
    let mut state = State::Classify;

    for arg in args.iter().map(AsRef::as_ref) {
        match state {
            State::StrategyValue => {
                strategy_text = Some(arg.to_string());
                state = State::Classify;
            }
            State::FlagValue => {
                forwarded.push(arg.to_string());
                state = State::Classify;
            }
            State::Classify => match arg {
                STRATEGY_FLAG => state = State::StrategyValue,
                INFO_FLAG => verbose = true,
                STANDARD_JSON_FLAG => {
                    standard_json = true;
                    forwarded.push(arg.to_string());
                }
                flag if VALUE_FLAGS.contains(&flag) => {
                    forwarded.push(arg.to_string());
                    state = State::FlagValue;
                }
                other => {
                    if candidate.is_none() && is_source_file(other) {
                        candidate = Some(other.to_string());
                    }
                    forwarded.push(other.to_string());
                }
            },
        }
    }

    if matches!(state, State::StrategyValue) {
        return Err(ResolveError::MissingStrategy);
    }

    let strategy = Strategy::parse(strategy_text.as_deref());
    tracing::debug!(?candidate, %strategy, verbose, standard_json, "partitioned arguments");

    Ok(ParsedArguments {
        candidate,
        strategy,
        forwarded,
        verbose,
        standard_json,
    })
}

/// `key=value` remappings are never source files, whatever they end with.
fn is_source_file(arg: &str) -> bool {
    arg.ends_with(SOURCE_EXTENSION) && !arg.contains('=')
}
