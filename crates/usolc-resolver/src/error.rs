//! Resolution failures.
//!
//! Every variant carries the context needed to explain the failure to the
//! user. The CLI reports these once on stderr and exits with code 1.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("Solidity file not found: {}", path.display())]
    #[diagnostic(code(usolc::file_not_found))]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(usolc::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot find pragma line that specifies version in {}", path.display())]
    #[diagnostic(code(usolc::declaration_not_found))]
    DeclarationNotFound { path: PathBuf },

    #[error("Invalid version range '{range}': {reason}")]
    #[diagnostic(
        code(usolc::invalid_range),
        help("Ranges use npm semver syntax, e.g. `^0.4.24`, `>=0.4.22 <0.6.0` or `0.4.21 || 0.5.*`")
    )]
    InvalidRange { range: String, reason: String },

    #[error(
        "Cannot find solc version that meets the requirement of the solidity file\n\
         Solidity file's requirement: {rule}"
    )]
    #[diagnostic(code(usolc::no_version_for_source))]
    NoVersionSatisfiesSource { available: Vec<String>, rule: String },

    #[error(
        "Cannot find solc version that meets both the requirement of the solidity file \
         and the user requirement\n\
         Solidity file's requirement: {}\n\
         User's requirement: {user_rule}",
        .source_rules.join(" && ")
    )]
    #[diagnostic(
        code(usolc::no_version_for_user),
        help("Relax the -U strategy or install a matching solc version")
    )]
    NoVersionSatisfiesUser {
        available: Vec<String>,
        source_rules: Vec<String>,
        user_rule: String,
    },

    #[error("Malformed standard-json input: {0}")]
    #[diagnostic(code(usolc::malformed_input))]
    MalformedInput(#[from] serde_json::Error),

    #[error("-U requires a version strategy, e.g. `-U ^0.4.24-`")]
    #[diagnostic(code(usolc::missing_strategy))]
    MissingStrategy,
}

impl ResolveError {
    /// The installed versions the failed selection was made from, if the
    /// failure is a selection failure.
    pub fn available(&self) -> Option<&[String]> {
        match self {
            Self::NoVersionSatisfiesSource { available, .. }
            | Self::NoVersionSatisfiesUser { available, .. } => Some(available),
            _ => None,
        }
    }
}

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
