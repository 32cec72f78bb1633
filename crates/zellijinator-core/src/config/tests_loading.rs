//! Loading tests for settings: files, environment overrides, defaults

use std::path::PathBuf;

use serial_test::serial;

use super::{load_settings, load_toml_file, Settings};
use crate::Result;

const ENV_KEYS: [&str; 4] = [
    "ZELLIJINATOR_PROJECTS_DIR",
    "ZELLIJINATOR_LAYOUT_DIR",
    "ZELLIJINATOR_LAYOUT_RETENTION_HOURS",
    "ZELLIJINATOR_SHELL",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn write_settings(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

#[test]
fn test_partial_file_keeps_defaults() -> Result<()> {
    let (_dir, path) = write_settings("layout_retention_hours = 48\n")?;
    let settings = load_toml_file(&path)?;

    assert_eq!(settings.layout_retention_hours, 48);
    assert_eq!(settings.layout_dir, Settings::default().layout_dir);
    assert_eq!(settings.shell, None);
    Ok(())
}

#[test]
fn test_malformed_toml_is_parse_error() -> Result<()> {
    let (_dir, path) = write_settings("layout_retention_hours = [[[")?;
    let err = load_toml_file(&path).err();

    assert!(err.is_some_and(|e| e.to_string().contains("Failed to parse settings file")));
    Ok(())
}

#[test]
fn test_directory_path_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(load_toml_file(dir.path()).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_explicit_missing_file_is_error() {
    clear_env();
    let result = load_settings(Some(std::path::Path::new("/nonexistent/zellijinator.toml")));
    assert!(result.is_err_and(|e| e.exit_code() == 1));
}

#[test]
#[serial]
fn test_explicit_file_then_env_overrides() -> Result<()> {
    clear_env();
    let (_dir, path) = write_settings(
        "projects_dir = \"/srv/projects\"\nshell = \"/bin/zsh\"\nlayout_retention_hours = 12\n",
    )?;

    std::env::set_var("ZELLIJINATOR_SHELL", "/usr/bin/fish");
    std::env::set_var("ZELLIJINATOR_LAYOUT_DIR", "/var/tmp/layouts");
    let result = load_settings(Some(&path));
    clear_env();

    let settings = result?;
    assert_eq!(settings.projects_dir, PathBuf::from("/srv/projects"));
    assert_eq!(settings.layout_dir, PathBuf::from("/var/tmp/layouts"));
    assert_eq!(settings.layout_retention_hours, 12);
    assert_eq!(settings.shell.as_deref(), Some("/usr/bin/fish"));
    Ok(())
}

#[test]
#[serial]
fn test_invalid_retention_env_is_invalid_config() -> Result<()> {
    clear_env();
    let (_dir, path) = write_settings("")?;

    std::env::set_var("ZELLIJINATOR_LAYOUT_RETENTION_HOURS", "soon");
    let result = load_settings(Some(&path));
    clear_env();

    assert!(result.is_err_and(|e| e.to_string().contains("Invalid configuration")));
    Ok(())
}

#[test]
#[serial]
fn test_out_of_range_retention_fails_validation() -> Result<()> {
    clear_env();
    let (_dir, path) = write_settings("layout_retention_hours = 0\n")?;
    assert!(load_settings(Some(&path)).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_env_projects_dir_is_expanded() -> Result<()> {
    clear_env();
    let (_dir, path) = write_settings("")?;

    std::env::set_var("ZELLIJINATOR_TEST_BASE", "/opt/base");
    std::env::set_var("ZELLIJINATOR_PROJECTS_DIR", "$ZELLIJINATOR_TEST_BASE/projects");
    let result = load_settings(Some(&path));
    clear_env();
    std::env::remove_var("ZELLIJINATOR_TEST_BASE");

    assert_eq!(result?.projects_dir, PathBuf::from("/opt/base/projects"));
    Ok(())
}

#[test]
#[serial]
fn test_compile_options_prefers_settings_shell() {
    let settings = Settings {
        shell: Some("/bin/zsh".to_string()),
        ..Settings::default()
    };
    assert_eq!(settings.compile_options().shell, "/bin/zsh");
}

#[test]
#[serial]
fn test_compile_options_falls_back_to_shell_env() {
    let saved = std::env::var("SHELL").ok();

    std::env::set_var("SHELL", "/usr/local/bin/fish");
    let from_env = Settings::default().compile_options();

    std::env::remove_var("SHELL");
    let fallback = Settings::default().compile_options();

    if let Some(shell) = saved {
        std::env::set_var("SHELL", shell);
    }

    assert_eq!(from_env.shell, "/usr/local/bin/fish");
    assert_eq!(fallback.shell, "/bin/bash");
}

#[test]
fn test_retention_duration() {
    let settings = Settings::default();
    assert_eq!(settings.layout_retention().as_secs(), 24 * 60 * 60);
}
