//! Integration tests for the configuration system: file discovery,
//! merging, environment overrides, validation and context construction.
//!
//! Tests that touch `VPATH_*` variables are `#[serial]`; environment
//! variables are process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vpath::config::{Config, ConfigBuilder, OutputFormat};
use vpath::error::Error;
use vpath::{native, ErrorKind, Filename, PrefixId, StyleKind};

// ============================================================================
// Test Utilities
// ============================================================================

fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Sets an environment variable for the guard's lifetime.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// Builder isolated from the real home directory.
fn isolated(project: &Path, user: &Path) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_working_dir(project)
        .with_config_dir(user)
}

// ============================================================================
// Layering
// ============================================================================

#[test]
fn test_full_precedence_chain() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    write_config(
        user.path(),
        "config.yaml",
        "style: darwin\nboot_volume: user\noutput_format: json\nprefixes:\n  1: \":user:\"\n",
    );
    write_config(
        project.path(),
        "vpath.yaml",
        "boot_volume: project\nprefixes:\n  2: \":project:\"\n",
    );
    write_config(
        project.path(),
        "vpath.local.yaml",
        "prefixes:\n  2: \":local:\"\n",
    );

    let config = isolated(project.path(), user.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.style, Some(StyleKind::Darwin));
    assert_eq!(config.boot_volume.as_deref(), Some("project"));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
    let prefixes = config.prefixes.unwrap();
    assert_eq!(prefixes["1"], ":user:");
    assert_eq!(prefixes["2"], ":local:");
}

#[test]
fn test_discovery_from_nested_directory() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(project.path(), "vpath.yaml", "boot_volume: root\n");
    let nested = project.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let config = isolated(&nested, user.path()).skip_env().build().unwrap();
    assert_eq!(config.boot_volume.as_deref(), Some("root"));
}

#[test]
fn test_invalid_file_reports_path() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(project.path(), "vpath.yaml", "volumes: not-a-list\n");

    let err = isolated(project.path(), user.path())
        .skip_env()
        .build()
        .unwrap_err();
    match err {
        Error::Validation { field, .. } => assert!(field.ends_with("vpath.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_validation_rejects_duplicate_volumes() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(
        project.path(),
        "vpath.yaml",
        "volumes:\n  - name: A\n    drive: 3\n  - name: a\n    drive: 4\n",
    );
    let err = isolated(project.path(), user.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

// ============================================================================
// Environment
// ============================================================================

#[test]
#[serial]
fn test_environment_overrides_files() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(
        project.path(),
        "vpath.local.yaml",
        "boot_volume: local\nprefixes:\n  \"@\": \":local:prefs:\"\n",
    );

    let _boot = EnvGuard::new("VPATH_BOOT_VOLUME", "envboot");
    let _prefs = EnvGuard::new("VPATH_PREFIX_PREFS", ":envboot:prefs:");
    let _style = EnvGuard::new("VPATH_STYLE", "unix");

    let config = isolated(project.path(), user.path()).build().unwrap();
    assert_eq!(config.boot_volume.as_deref(), Some("envboot"));
    assert_eq!(config.style, Some(StyleKind::Unix));
    assert_eq!(config.prefixes.unwrap()["@"], ":envboot:prefs:");
}

#[test]
#[serial]
fn test_programmatic_overrides_environment() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let _boot = EnvGuard::new("VPATH_BOOT_VOLUME", "envboot");

    let config = isolated(project.path(), user.path())
        .with_config(Config {
            boot_volume: Some("code".to_string()),
            ..Config::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.boot_volume.as_deref(), Some("code"));
}

#[test]
#[serial]
fn test_bad_environment_value() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let _defaults = EnvGuard::new("VPATH_HOST_DEFAULTS", "sometimes");
    assert!(isolated(project.path(), user.path()).build().is_err());
}

// ============================================================================
// Context
// ============================================================================

#[test]
fn test_context_from_project_file() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(
        project.path(),
        "vpath.yaml",
        r#"
style: darwin
boot_volume: Macintosh HD
host_defaults: false
volumes:
  - name: Data
    drive: 3
native_prefixes:
  8: /Users/me/src
  11: /Volumes/Data/shared
prefixes:
  10: "8:build"
  "$": ":Macintosh HD:System:"
"#,
    );

    let ctx = isolated(project.path(), user.path())
        .skip_env()
        .build_context()
        .unwrap();

    let prefixes = ctx.prefixes();
    assert_eq!(prefixes.get(PrefixId::CURRENT), Some(":Macintosh HD:Users:me:src:"));
    assert_eq!(
        prefixes.get(PrefixId::new(10).unwrap()),
        Some(":Macintosh HD:Users:me:src:build:")
    );
    assert_eq!(prefixes.get(PrefixId::new(11).unwrap()), Some(":Data:shared:"));
    assert_eq!(prefixes.get(PrefixId::SYSTEM), Some(":Macintosh HD:System:"));
    assert!(prefixes.get(PrefixId::PREFS).is_none());

    let mut file = Filename::new("10:out.o");
    assert_eq!(file.native(&ctx).unwrap(), "/Users/me/src/build/out.o");
    assert_eq!(
        native::to_native(".D3:x:", &ctx).unwrap(),
        "/Volumes/Data/x"
    );
}

#[test]
fn test_context_host_defaults() {
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let ctx = isolated(project.path(), user.path())
        .skip_env()
        .build_context()
        .unwrap();
    assert!(ctx.prefixes().get(PrefixId::CURRENT).is_some());
    assert!(ctx.prefixes().get(PrefixId::BOOT).is_some());
}
