//! End-to-end tests running the compiled `biucing` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn biucing(test_dir: &TempDir, args: &[&str]) -> Output {
    let config_home = test_dir.path().join("config");
    let home = test_dir.path().join("home");
    fs::create_dir_all(&config_home).unwrap();
    fs::create_dir_all(&home).unwrap();

    Command::new(env!("CARGO_BIN_EXE_biucing"))
        .args(args)
        .env("XDG_CONFIG_HOME", &config_home)
        .env("HOME", &home)
        .env("NO_COLOR", "1")
        .env_remove("BIUCING_LOG")
        .env_remove("BIUCING_LOG_FORMAT")
        .env_remove("BIUCING_LOG_OUTPUT")
        .output()
        .expect("failed to run biucing binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_override(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_domains_command() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["domains"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Available domains:"));
    assert!(out.contains("frontend"));
    assert!(out.contains("devops"));
}

#[test]
fn test_frontend_list() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["frontend", "list"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Frontend Stacks"));
    assert!(out.contains("vite [bundler]"));
    assert!(!out.contains("\u{1b}["), "NO_COLOR output must be plain");
}

#[test]
fn test_unknown_stack_exits_with_error() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["backend", "list", "--stack", "ghost"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Stack 'ghost' not found."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_suggest_is_identical_to_list() {
    let test_dir = TempDir::new().unwrap();
    let list = biucing(&test_dir, &["mobile", "list"]);
    let suggest = biucing(&test_dir, &["mobile", "suggest"]);

    assert!(list.status.success());
    assert!(suggest.status.success());
    assert_eq!(list.stdout, suggest.stdout);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["quantum", "list"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_export_creates_parent_directories() {
    let test_dir = TempDir::new().unwrap();
    let destination = test_dir.path().join("nested").join("deeper").join("catalog.toml");
    let output = biucing(
        &test_dir,
        &["configure", "export", destination.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Exported configuration"));
    let exported: toml::Table = toml::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert!(exported.contains_key("frontend"));
}

#[test]
fn test_export_respects_force() {
    let test_dir = TempDir::new().unwrap();
    let destination = test_dir.path().join("catalog.toml");
    fs::write(&destination, "keep = true\n").unwrap();
    let dest = destination.to_str().unwrap();

    let refused = biucing(&test_dir, &["configure", "export", dest]);
    assert_eq!(refused.status.code(), Some(1));
    assert!(stderr(&refused).contains("Destination exists"));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "keep = true\n");

    let forced = biucing(&test_dir, &["configure", "export", dest, "--force"]);
    assert!(forced.status.success(), "stderr: {}", stderr(&forced));
    assert!(fs::read_to_string(&destination).unwrap().contains("[frontend"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("missing.toml");
    let output = biucing(
        &test_dir,
        &["--config", missing.to_str().unwrap(), "domains"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Config path does not exist"));
}

#[test]
fn test_explicit_config_override_keeps_tools() {
    let test_dir = TempDir::new().unwrap();
    let config_file = test_dir.path().join("team").join("stacks.toml");
    write_override(
        &config_file,
        "[frontend.stacks.react]\ndescription = \"Team React baseline\"\n",
    );

    let output = biucing(
        &test_dir,
        &[
            "frontend",
            "list",
            "--stack",
            "react",
            "--config",
            config_file.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Team React baseline"));
    assert!(out.contains("vite [bundler]"));
    assert!(!out.contains("vue"));
}

#[test]
fn test_configure_path_prints_default_location() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["configure", "path"]);

    assert!(output.status.success());
    let expected = test_dir
        .path()
        .join("config")
        .join("biucing")
        .join("config.toml");
    assert_eq!(stdout(&output).trim_end(), expected.display().to_string());
}

#[test]
fn test_configure_show_json_parses() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["configure", "show", "--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(parsed["testing"]["stacks"]["e2e"].is_object());
}

#[test]
fn test_strict_config_without_file_fails() {
    let test_dir = TempDir::new().unwrap();
    let output = biucing(&test_dir, &["--strict-config", "domains"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error:"));
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    let test_dir = TempDir::new().unwrap();
    let destination = test_dir.path().join("catalog.yaml");
    let output = biucing(
        &test_dir,
        &["--quiet", "configure", "export", destination.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
    let exported: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert!(exported.get("backend").is_some());
}
