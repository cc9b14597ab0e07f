use std::path::{Path, PathBuf};

use tempfile::TempDir;
use usolc_resolver::pragma::{
    extract_pragma_line, extract_pragma_lines, rule_from_file, rules_from_file,
};
use usolc_resolver::ResolveError;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn fixtures() -> (TempDir, Vec<(PathBuf, &'static str, &'static str)>) {
    let tmp = TempDir::new().unwrap();
    let cases = [
        ("exactly_one.sol", "pragma solidity 0.4.18;\n", "0.4.18"),
        ("caret_0.4.sol", "pragma solidity ^0.4.18;\n", "^0.4.18"),
        ("range.sol", "pragma solidity >=0.4.22 <0.6.0;\n", ">=0.4.22 <0.6.0"),
        (
            "range_or_one.sol",
            "pragma solidity 0.4.21 || >=0.4.25 <0.6.0;\n",
            "0.4.21 || >=0.4.25 <0.6.0",
        ),
    ];
    let files = cases
        .iter()
        .map(|(name, line, rule)| {
            let body = format!("// SPDX-License-Identifier: MIT\n{line}\ncontract Ballot {{}}\n");
            (write(tmp.path(), name, &body), *line, *rule)
        })
        .collect();
    (tmp, files)
}

#[test]
fn test_extract_pragma_line_includes_newline() {
    let (_tmp, files) = fixtures();
    for (path, line, _) in files {
        assert_eq!(extract_pragma_line(&path).unwrap(), line);
    }
}

#[test]
fn test_rule_from_file() {
    let (_tmp, files) = fixtures();
    for (path, _, rule) in files {
        assert_eq!(rule_from_file(&path).unwrap(), rule);
    }
}

#[test]
fn test_extract_pragma_line_not_found() {
    let tmp = TempDir::new().unwrap();
    let path = write(tmp.path(), "empty.sol", "contract Empty {}\n");
    let err = extract_pragma_line(&path).unwrap_err();
    assert!(matches!(err, ResolveError::DeclarationNotFound { .. }));
    let err = extract_pragma_lines(&path).unwrap_err();
    assert!(matches!(err, ResolveError::DeclarationNotFound { .. }));
}

#[test]
fn test_missing_declaration_defaults_to_any() {
    let tmp = TempDir::new().unwrap();
    let path = write(tmp.path(), "empty.sol", "");
    assert_eq!(rule_from_file(&path).unwrap(), "*");
    assert_eq!(rules_from_file(&path).unwrap(), vec!["*"]);
}

#[test]
fn test_missing_file_is_file_not_found() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("from_somerandomfilenamethat_shouldnt_exist.sol");
    assert!(matches!(
        extract_pragma_line(&path).unwrap_err(),
        ResolveError::FileNotFound { .. }
    ));
    assert!(matches!(
        rule_from_file(&path).unwrap_err(),
        ResolveError::FileNotFound { .. }
    ));
    assert!(matches!(
        rules_from_file(&path).unwrap_err(),
        ResolveError::FileNotFound { .. }
    ));
}

#[test]
fn test_multiple_declarations_in_order() {
    let tmp = TempDir::new().unwrap();
    let path = write(
        tmp.path(),
        "two.sol",
        "pragma solidity ^0.4.24;\ncontract A {}\npragma solidity 0.4.23;\ncontract B {}\n",
    );
    assert_eq!(
        extract_pragma_lines(&path).unwrap(),
        vec!["pragma solidity ^0.4.24;\n", "pragma solidity 0.4.23;\n"]
    );
    assert_eq!(rules_from_file(&path).unwrap(), vec!["^0.4.24", "0.4.23"]);
    assert_eq!(rule_from_file(&path).unwrap(), "^0.4.24");
}

#[test]
fn test_last_line_without_newline() {
    let tmp = TempDir::new().unwrap();
    let path = write(tmp.path(), "tail.sol", "contract A {}\npragma solidity ^0.5.0;");
    assert_eq!(extract_pragma_line(&path).unwrap(), "pragma solidity ^0.5.0;");
}
