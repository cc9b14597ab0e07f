//! Solc version parsing and ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::Version;

/// An installed solc version.
///
/// Parsing is loose: a leading `v` or `=` is ignored and missing minor or
/// patch components default to `0`. The original text is kept because it
/// names the compiler binary on disk.
///
/// Ordering and equality follow semver precedence. Build metadata does not
/// participate.
#[derive(Debug, Clone)]
pub struct SolcVersion {
    original: String,
    version: Version,
}

impl SolcVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let version = Version::new(major, minor, patch);
        Self {
            original: version.to_string(),
            version,
        }
    }

    pub fn parse(text: &str) -> Result<Self, semver::Error> {
        let original = text.trim().to_string();
        let version = Version::parse(&normalize_loose(&original))?;
        Ok(Self { original, version })
    }

    /// The text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The normalized semver value.
    pub fn semver(&self) -> &Version {
        &self.version
    }
}

/// Pad a partial version to three components and drop loose prefixes.
///
/// `v0.4` becomes `0.4.0`; `0.5.0-nightly.2018.11.13` is left as is.
pub(crate) fn normalize_loose(text: &str) -> String {
    let text = text.trim();
    let text = text.strip_prefix('=').unwrap_or(text).trim_start();
    let text = text
        .strip_prefix('v')
        .or_else(|| text.strip_prefix('V'))
        .unwrap_or(text);

    let split = text.find(['-', '+']).unwrap_or(text.len());
    let (core, rest) = text.split_at(split);
    let parts = core.split('.').count();
    let padding = ".0".repeat(3usize.saturating_sub(parts));
    format!("{core}{padding}{rest}")
}

impl PartialEq for SolcVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SolcVersion {}

impl Hash for SolcVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.major.hash(state);
        self.version.minor.hash(state);
        self.version.patch.hash(state);
        self.version.pre.hash(state);
    }
}

impl Ord for SolcVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.version;
        let b = &other.version;
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
            .then_with(|| a.pre.cmp(&b.pre))
    }
}

impl PartialOrd for SolcVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SolcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl FromStr for SolcVersion {
    type Err = semver::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
