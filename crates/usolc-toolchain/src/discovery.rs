//! Toolchain discovery: map a chosen version to its compiler binary.

use std::path::PathBuf;

use usolc_resolver::version::SolcVersion;
use usolc_util::errors::{UsolcError, UsolcResult};

use crate::config::ToolchainConfig;

/// Path of the binary for `version`, whether or not it exists.
///
/// The binary is named after the version exactly as written in the list.
pub fn binary_path(config: &ToolchainConfig, version: &SolcVersion) -> PathBuf {
    config
        .versions_dir
        .join(format!("{}{}", config.binary_prefix, version.as_str()))
}

/// Resolve the binary for `version`, failing if it is not on disk.
pub fn resolve_binary(config: &ToolchainConfig, version: &SolcVersion) -> UsolcResult<PathBuf> {
    let path = binary_path(config, version);
    if path.is_file() {
        return Ok(path);
    }
    Err(UsolcError::Toolchain {
        message: format!(
            "solc {version} is listed as installed but {} does not exist",
            path.display()
        ),
    }
    .into())
}
