//! The installed version list: one solc version per line, as shipped next
//! to the compiler binaries.

use std::path::Path;

use usolc_resolver::version::SolcVersion;
use usolc_util::errors::{UsolcError, UsolcResult};

use crate::config::ToolchainConfig;

/// Read the raw version strings from `path`.
pub fn read_version_list(path: &Path) -> UsolcResult<Vec<String>> {
    usolc_util::fs::read_lines(path).map_err(|e| {
        UsolcError::Toolchain {
            message: format!("Failed to read version list {}: {e}", path.display()),
        }
        .into()
    })
}

/// Parse version strings, skipping (and warning about) malformed entries.
pub fn parse_versions(lines: &[String]) -> Vec<SolcVersion> {
    lines
        .iter()
        .filter_map(|line| match SolcVersion::parse(line) {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::warn!("Ignoring invalid entry '{line}' in version list: {e}");
                None
            }
        })
        .collect()
}

/// All installed versions, in list order.
pub fn list_installed(config: &ToolchainConfig) -> UsolcResult<Vec<SolcVersion>> {
    let path = config.version_list_path();
    let versions = parse_versions(&read_version_list(&path)?);
    if versions.is_empty() {
        return Err(UsolcError::Toolchain {
            message: format!("No solc versions listed in {}", path.display()),
        }
        .into());
    }
    tracing::debug!(count = versions.len(), path = %path.display(), "loaded installed versions");
    Ok(versions)
}
