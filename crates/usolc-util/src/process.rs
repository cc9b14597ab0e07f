use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::errors::UsolcError;

/// Builder for running the wrapped compiler.
///
/// The child inherits stdout and stderr. Stdin is inherited too unless a
/// file is supplied with [`CommandBuilder::stdin_file`].
pub struct CommandBuilder {
    program: PathBuf,
    args: Vec<String>,
    stdin: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Feed the child's stdin from the file at `path`.
    pub fn stdin_file(mut self, path: impl AsRef<Path>) -> Self {
        self.stdin = Some(path.as_ref().to_path_buf());
        self
    }

    /// Run the command to completion and return its exit status.
    pub fn status(&self) -> Result<ExitStatus, UsolcError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref path) = self.stdin {
            cmd.stdin(Stdio::from(File::open(path)?));
        }
        tracing::debug!(program = %self.program.display(), args = ?self.args, "spawning");
        cmd.status().map_err(|source| UsolcError::Spawn {
            program: self.program.display().to_string(),
            source,
        })
    }
}
