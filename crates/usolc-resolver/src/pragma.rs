//! `pragma solidity` extraction.
//!
//! Files are scanned line by line. A declaration is a line of the form
//! `pragma solidity <range>;` (keyword match is case-insensitive); the range
//! is captured verbatim up to the first `;`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ResolveError, ResolveResult};
use crate::range::ANY;

static PRAGMA_SOLIDITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*pragma\s+solidity\s+([^;]*);").unwrap());

/// The first declaration line in `path`, trailing newline included.
pub fn extract_pragma_line(path: &Path) -> ResolveResult<String> {
    scan_file(path, true)?
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::DeclarationNotFound {
            path: path.to_path_buf(),
        })
}

/// Every declaration line in `path`, in source order.
pub fn extract_pragma_lines(path: &Path) -> ResolveResult<Vec<String>> {
    let lines = scan_file(path, false)?;
    if lines.is_empty() {
        return Err(ResolveError::DeclarationNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(lines)
}

/// The range text of a declaration line, or `None` if it is not one.
pub fn rule_from_pragma(line: &str) -> Option<String> {
    PRAGMA_SOLIDITY
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// The range of the first declaration in `path`; `*` if there is none.
pub fn rule_from_file(path: &Path) -> ResolveResult<String> {
    match extract_pragma_line(path) {
        Ok(line) => Ok(rule_from_pragma(&line).unwrap_or_else(|| ANY.to_string())),
        Err(ResolveError::DeclarationNotFound { .. }) => {
            tracing::debug!(path = %path.display(), "no pragma, accepting any version");
            Ok(ANY.to_string())
        }
        Err(e) => Err(e),
    }
}

/// The ranges of every declaration in `path`; `["*"]` if there is none.
pub fn rules_from_file(path: &Path) -> ResolveResult<Vec<String>> {
    match extract_pragma_lines(path) {
        Ok(lines) => Ok(lines.iter().filter_map(|l| rule_from_pragma(l)).collect()),
        Err(ResolveError::DeclarationNotFound { .. }) => {
            tracing::debug!(path = %path.display(), "no pragma, accepting any version");
            Ok(vec![ANY.to_string()])
        }
        Err(e) => Err(e),
    }
}

/// The ranges declared in in-memory source text; `["*"]` if there is none.
pub fn rules_from_source(text: &str) -> Vec<String> {
    let rules: Vec<String> = text.split_inclusive('\n').filter_map(rule_from_pragma).collect();
    if rules.is_empty() {
        vec![ANY.to_string()]
    } else {
        rules
    }
}

fn scan_file(path: &Path, first_only: bool) -> ResolveResult<Vec<String>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ResolveError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ResolveError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    scan(BufReader::new(file), first_only).map_err(|source| ResolveError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn scan<R: BufRead>(mut reader: R, first_only: bool) -> std::io::Result<Vec<String>> {
    let mut found = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if PRAGMA_SOLIDITY.is_match(&line) {
            found.push(line.clone());
            if first_only {
                break;
            }
        }
    }
    Ok(found)
}
