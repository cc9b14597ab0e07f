#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A fake solc installation plus a project directory to run in.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    /// Install a stub `solc-<v>` for each of `versions`, listed in that order.
    pub fn new(versions: &[&str]) -> Self {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("solc-versions");
        fs::create_dir_all(&dir).unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        fs::create_dir_all(root.path().join("project")).unwrap();

        let mut list = String::new();
        for version in versions {
            install_stub(&dir, version);
            list.push_str(version);
            list.push('\n');
        }
        fs::write(dir.join("solc_version_list"), list).unwrap();
        Self { root }
    }

    pub fn versions_dir(&self) -> std::path::PathBuf {
        self.root.path().join("solc-versions")
    }

    pub fn home(&self) -> std::path::PathBuf {
        self.root.path().join("home")
    }

    pub fn project(&self) -> std::path::PathBuf {
        self.root.path().join("project")
    }

    pub fn source(&self, name: &str, content: &str) {
        fs::write(self.project().join(name), content).unwrap();
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = usolc_cmd();
        cmd.current_dir(self.project())
            .env("USOLC_HOME", self.home())
            .env("USOLC_VERSIONS_DIR", self.versions_dir())
            .env_remove("RUST_LOG")
            .env_remove("FAKE_SOLC_EXIT");
        cmd
    }
}

#[allow(deprecated)]
pub fn usolc_cmd() -> Command {
    Command::cargo_bin("usolc").unwrap()
}

/// The stub echoes its version and arguments, or echoes stdin back in
/// standard-json mode. `$FAKE_SOLC_EXIT` sets its exit code.
fn install_stub(dir: &Path, version: &str) {
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--standard-json\" ]; then\n  cat\n  exit 0\nfi\n\
         echo \"solc-{version} $*\"\n\
         exit ${{FAKE_SOLC_EXIT:-0}}\n"
    );
    let path = dir.join(format!("solc-{version}"));
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}
