use std::io::Write;
use std::path::Path;

use tempfile::TempPath;

/// Read a newline-delimited file into its lines.
///
/// Trailing `\n` and `\r` are stripped and blank lines are dropped.
pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Write `content` to a fresh scratch file and flush it to disk.
///
/// The file handle is closed before returning; the file itself lives until
/// the returned [`TempPath`] is dropped.
pub fn write_scratch(content: &[u8]) -> std::io::Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("usolc-stdin-")
        .suffix(".json")
        .tempfile()?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    let path = file.into_temp_path();
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote scratch file");
    Ok(path)
}
