use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use usolc_util::errors::{UsolcError, UsolcResult};

/// Overrides the usolc home directory (`~/.usolc`).
pub const HOME_ENV: &str = "USOLC_HOME";
/// Overrides `[toolchain] versions-dir`.
pub const VERSIONS_DIR_ENV: &str = "USOLC_VERSIONS_DIR";

/// User configuration loaded from `~/.usolc/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

/// Compiler layout from `[toolchain]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Directory holding the `solc-<version>` binaries.
    #[serde(default = "default_versions_dir", rename = "versions-dir")]
    pub versions_dir: PathBuf,
    /// Installed version list; relative paths are taken from `versions-dir`.
    #[serde(default = "default_version_list", rename = "version-list")]
    pub version_list: PathBuf,
    #[serde(default = "default_binary_prefix", rename = "binary-prefix")]
    pub binary_prefix: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            versions_dir: default_versions_dir(),
            version_list: default_version_list(),
            binary_prefix: default_binary_prefix(),
        }
    }
}

fn default_versions_dir() -> PathBuf {
    PathBuf::from("/usr/local/bin/solc-versions")
}

fn default_version_list() -> PathBuf {
    PathBuf::from("solc_version_list")
}

fn default_binary_prefix() -> String {
    "solc-".to_string()
}

impl ToolchainConfig {
    /// Absolute location of the installed version list.
    pub fn version_list_path(&self) -> PathBuf {
        self.versions_dir.join(&self.version_list)
    }
}

impl GlobalConfig {
    /// Load the configuration from `~/.usolc/config.toml`, or return defaults if the file doesn't exist.
    ///
    /// `$USOLC_VERSIONS_DIR` takes precedence over the file.
    pub fn load() -> UsolcResult<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        if let Some(dir) = std::env::var_os(VERSIONS_DIR_ENV) {
            config.toolchain.versions_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// Load the configuration at `path`, or return defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> UsolcResult<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| UsolcError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            UsolcError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the usolc home directory: `$USOLC_HOME`, else `~/.usolc/`.
pub fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".usolc")
}
