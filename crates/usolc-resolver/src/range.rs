//! Version range matching and selection.
//!
//! Solidity pragmas use npm-style ranges: whitespace separates comparators
//! that must all hold, `||` separates alternatives, bare versions are exact
//! and `a - b` is an inclusive span. Each alternative is rewritten into a
//! Cargo-syntax [`VersionReq`] and matching is delegated to `semver`.

use std::fmt;

use semver::VersionReq;

use crate::error::{ResolveError, ResolveResult};
use crate::version::SolcVersion;

/// The range that matches every release.
pub const ANY: &str = "*";

const OPERATORS: [&str; 8] = ["~>", ">=", "<=", ">", "<", "=", "~", "^"];

/// A parsed npm-style version range.
#[derive(Debug, Clone)]
pub struct VersionRange {
    original: String,
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// The wildcard range.
    pub fn any() -> Self {
        Self {
            original: ANY.to_string(),
            alternatives: vec![VersionReq::STAR],
        }
    }

    /// Parse a range expression. An empty expression matches everything.
    pub fn parse(text: &str) -> ResolveResult<Self> {
        let invalid = |reason: String| ResolveError::InvalidRange {
            range: text.to_string(),
            reason,
        };

        let alternatives = text
            .split("||")
            .map(|set| {
                let translated = translate_set(set).map_err(invalid)?;
                tracing::trace!(from = set.trim(), to = %translated, "translated range");
                VersionReq::parse(&translated).map_err(|e| invalid(e.to_string()))
            })
            .collect::<ResolveResult<Vec<_>>>()?;

        Ok(Self {
            original: text.to_string(),
            alternatives,
        })
    }

    /// The expression exactly as written.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn matches(&self, version: &SolcVersion) -> bool {
        self.alternatives
            .iter()
            .any(|req| req.matches(version.semver()))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// The versions satisfying `range`, in their original order.
pub fn filter(versions: &[SolcVersion], range: &VersionRange) -> Vec<SolcVersion> {
    versions
        .iter()
        .filter(|v| range.matches(v))
        .cloned()
        .collect()
}

/// The greatest version satisfying `range`. Among equal versions the first
/// one wins.
pub fn max_satisfying(versions: &[SolcVersion], range: &VersionRange) -> Option<SolcVersion> {
    versions
        .iter()
        .filter(|v| range.matches(v))
        .fold(None, |best: Option<&SolcVersion>, v| match best {
            Some(b) if v <= b => Some(b),
            _ => Some(v),
        })
        .cloned()
}

/// The least version satisfying `range`. Among equal versions the first
/// one wins.
pub fn min_satisfying(versions: &[SolcVersion], range: &VersionRange) -> Option<SolcVersion> {
    let mut result: Option<SolcVersion> = None;
    for version in filter(versions, range) {
        let replace = match &result {
            Some(current) => version < *current,
            None => true,
        };
        if replace {
            result = Some(version);
        }
    }
    result
}

/// Rewrite one `||` alternative into Cargo requirement syntax.
fn translate_set(set: &str) -> Result<String, String> {
    let tokens = tokenize(set);

    if let [low, dash, high] = tokens.as_slice() {
        if dash == "-" {
            let low = translate_comparator(&format!(">={low}"))?;
            let high = translate_comparator(&format!("<={high}"))?;
            return Ok(join_comparators(vec![low, high]));
        }
    }

    let comparators = tokens
        .iter()
        .map(|token| translate_comparator(token))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join_comparators(comparators))
}

/// Split on whitespace and glue a detached operator (`>= 1.2.3`) back onto
/// its version. Commas are accepted as separators too.
fn tokenize(set: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending_op: Option<&str> = None;

    for word in set
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
    {
        if OPERATORS.contains(&word) {
            pending_op = Some(word);
            continue;
        }
        match pending_op.take() {
            Some(op) => tokens.push(format!("{op}{word}")),
            None => tokens.push(word.to_string()),
        }
    }
    if let Some(op) = pending_op {
        tokens.push(op.to_string());
    }
    tokens
}

/// `semver` rejects a bare `*` next to other comparators; it is redundant
/// there anyway.
fn join_comparators(comparators: Vec<String>) -> String {
    let specific: Vec<String> = comparators.into_iter().filter(|c| c != ANY).collect();
    if specific.is_empty() {
        ANY.to_string()
    } else {
        specific.join(", ")
    }
}

fn translate_comparator(token: &str) -> Result<String, String> {
    let op = OPERATORS
        .iter()
        .find(|op| token.starts_with(*op))
        .copied()
        .unwrap_or("");
    let partial = token[op.len()..].trim_start_matches(['v', 'V', '=']);
    if partial.is_empty() {
        return Err(format!("operator `{op}` is missing a version"));
    }

    let split = partial.find(['-', '+']).unwrap_or(partial.len());
    let (core, tail) = partial.split_at(split);

    let mut numbers: Vec<u64> = Vec::new();
    let mut wildcard = false;
    for part in core.split('.') {
        if matches!(part, "x" | "X" | "*") {
            wildcard = true;
            break;
        }
        let n = part
            .parse::<u64>()
            .map_err(|_| format!("`{part}` is not a version component"))?;
        numbers.push(n);
    }
    if numbers.len() > 3 {
        return Err(format!("`{core}` has more than three components"));
    }
    if !tail.is_empty() && (wildcard || numbers.len() < 3) {
        return Err(format!("`{partial}` has a pre-release on a partial version"));
    }

    if numbers.is_empty() {
        return Ok(match op {
            // Nothing is above or below every version.
            ">" | "<" => "<0.0.0-0".to_string(),
            _ => ANY.to_string(),
        });
    }

    let cargo_op = match op {
        "" | "=" => "=",
        "~>" | "~" => "~",
        other => other,
    };
    let version = numbers
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");
    Ok(format!("{cargo_op}{version}{tail}"))
}
