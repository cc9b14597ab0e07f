use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for everything outside version resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum UsolcError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The usolc config file is unreadable or malformed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.usolc/config.toml (or $USOLC_HOME/config.toml) for syntax errors"))]
    Config { message: String },

    /// The installed solc versions could not be listed or located.
    #[error("Toolchain error: {message}")]
    Toolchain { message: String },

    /// The wrapped compiler could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type UsolcResult<T> = miette::Result<T>;
