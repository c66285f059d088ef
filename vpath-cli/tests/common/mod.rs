//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "VPATH_STYLE",
    "VPATH_BOOT_VOLUME",
    "VPATH_VOLUME_PREFIX",
    "VPATH_HOST_DEFAULTS",
    "VPATH_OUTPUT_FORMAT",
    "VPATH_CONFIG_DIR",
    "VPATH_LOG_MODE",
];

/// Isolated environment: a project directory used as the working
/// directory and a separate user configuration directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands; project files go here.
    pub project_dir: PathBuf,
    /// Passed as `--config-dir`.
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        Self {
            temp_dir,
            project_dir,
            config_dir,
        }
    }

    /// The binary with no flags, run in the project directory with the
    /// `VPATH_*` environment cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("vpath").expect("Failed to find vpath binary");
        cmd.current_dir(&self.project_dir);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The binary with `--config-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Writes `vpath.yaml` in the project directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write(&self.project_dir, "vpath.yaml", contents)
    }

    /// Writes the user `config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write(&self.config_dir, "config.yaml", contents)
    }

    pub fn write(&self, dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

/// A Darwin project with boot volume `boot` and fixed prefixes, so output
/// does not depend on the host.
#[allow(dead_code)]
pub const DARWIN_PROJECT: &str = r#"
style: darwin
boot_volume: boot
host_defaults: false
volumes:
  - name: Data
    drive: 3
prefixes:
  8: ":boot:Users:me:src:"
  10: ":Data:builds:"
  "@": ":boot:Users:me:Library:Preferences:"
"#;
