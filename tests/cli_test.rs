//! Integration tests for the gargoyle-deps binary
//!
//! - `plan` prints every step without running anything
//! - `plan --manifest` uses an alternative package list
//! - `check` reports missing archives and fails
//! - `build` with no archives exits non-zero naming the missing pattern

mod common;

use common::{TestProject, REORDERED_MANIFEST, SAMPLE_MANIFEST};
use predicates::prelude::*;
use std::process::{Command, Output};

/// Helper to run the binary with the given arguments
fn run(project: &TestProject, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gargoyle-deps"))
        .current_dir(project.source_dir())
        .env_remove("GARGOYLE_DEPS_PREFIX")
        .env_remove("GARGOYLE_DEPS_SOURCE_DIR")
        .args(args)
        .output()
        .expect("Failed to execute gargoyle-deps")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_plan_json_lists_builtin_packages() {
    let project = TestProject::new();
    let output = run(&project, &["--json", "plan", "--prefix", "/opt/garglk", "--jobs", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 15);
    assert_eq!(packages[0]["name"], "cmake");
    assert_eq!(
        packages[0]["steps"][0]["args"][2],
        "--parallel=3",
        "cmake bootstrap gets the job count"
    );
    assert_eq!(packages[1]["protocol"], "compiler-toolchain");
    assert_eq!(json["environment"]["LDFLAGS"], "-L/opt/garglk/lib");
}

#[test]
fn test_plan_text_shows_commands() {
    let project = TestProject::new();
    let output = run(&project, &["plan", "--prefix", "/opt/garglk", "-j", "2"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(predicate::str::contains("PATH=/opt/garglk/bin:/usr/bin:/bin:/usr/sbin:/sbin").eval(&text));
    assert!(predicate::str::contains("./configure --prefix=/opt/garglk --enable-freetype-config").eval(&text));
    assert!(predicate::str::contains("ln -s clang++ g++").eval(&text));
    assert!(predicate::str::contains("ln -s pkgconf pkg-config").eval(&text));
}

#[test]
fn test_plan_with_manifest() {
    let project = TestProject::new();
    let manifest = project.create_file("packages.toml", SAMPLE_MANIFEST);

    let output = run(
        &project,
        &["plan", "--prefix", "/opt/x", "-j", "1", "--manifest", manifest.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("1. zlib 1.2.13 (autoconf)"));
    assert!(text.contains("./configure --prefix=/opt/x --static"));
    assert!(text.contains("2. libpng 1.6.39 (cmake)"));
    assert!(!text.contains("llvm-project"));
}

#[test]
fn test_plan_rejects_reordered_manifest() {
    let project = TestProject::new();
    let manifest = project.create_file("packages.toml", REORDERED_MANIFEST);

    let output = run(&project, &["plan", "--manifest", manifest.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("before its dependency 'zlib'"));
}

#[test]
fn test_relative_prefix_rejected() {
    let project = TestProject::new();
    let output = run(&project, &["plan", "--prefix", "relative/dir"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("absolute"));
}

#[test]
fn test_check_reports_missing_archives() {
    let project = TestProject::new();
    let manifest = project.create_file("packages.toml", SAMPLE_MANIFEST);
    project.add_archive("zlib-1.2.13.tar.gz");

    let output = run(
        &project,
        &["check", "--manifest", manifest.to_str().unwrap(), "--prefix", "/opt/x"],
    );

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("Package order satisfies all dependencies"));
    assert!(text.contains("libpng (libpng-1.6.39*.tar.*)"));
}

#[test]
fn test_build_without_archives_fails_before_running_anything() {
    let project = TestProject::new();
    let prefix = project.prefix_dir();

    let output = run(&project, &["build", "--prefix", prefix.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cmake-3.25.2*.tar.*"));
    assert!(!stdout(&output).contains("tar xvf"));
}

#[test]
fn test_no_command_builds_with_defaults() {
    let project = TestProject::new();
    let prefix = project.prefix_dir();
    let manifest = project.create_file("packages.toml", SAMPLE_MANIFEST);

    let output = run(
        &project,
        &["--prefix", prefix.to_str().unwrap(), "--manifest", manifest.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("zlib-1.2.13*.tar.*"));
}

#[test]
fn test_source_dir_from_environment() {
    let project = TestProject::new();
    let manifest = project.create_file("packages.toml", SAMPLE_MANIFEST);
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_gargoyle-deps"))
        .current_dir(elsewhere.path())
        .env("GARGOYLE_DEPS_SOURCE_DIR", project.source_dir())
        .args(["--json", "check", "--prefix", "/opt/x", "--manifest"])
        .arg(&manifest)
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let archives = json["report"]["archives"].as_array().unwrap();
    assert_eq!(archives.len(), 2);
    assert_eq!(archives[0]["pattern"], "zlib-1.2.13*.tar.*");
}

#[test]
fn test_manifest_output_is_accepted_by_plan() {
    let project = TestProject::new();
    let output = run(&project, &["manifest"]);
    assert!(output.status.success());

    let manifest = project.create_file("builtin.toml", &stdout(&output));
    let plan = run(
        &project,
        &["--json", "plan", "--prefix", "/opt/x", "--manifest", manifest.to_str().unwrap()],
    );
    assert!(plan.status.success(), "stderr: {}", stderr(&plan));

    let json: serde_json::Value = serde_json::from_str(&stdout(&plan)).unwrap();
    assert_eq!(json["packages"].as_array().unwrap().len(), 15);
}
