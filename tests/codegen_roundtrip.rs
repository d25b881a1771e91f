//! Integration tests for the code generator, run against temporary
//! project layouts.

#![cfg(feature = "codegen")]

use std::fs;
use std::path::Path;

use attest::codegen::{self, emit, GenMode};
use attest::config::Config;
use tempfile::TempDir;

const COLOR_INTERFACE: &str = r#"//! Color assertions.

use crate::report::ReportEntry;

pub trait ColorAssertions: Send + Sync {
    /// The subject is vivid.
    fn to_be_vivid<S>(&self, subject: &S) -> ReportEntry
    where
        S: Clone;

    fn to_have_channel<S, N>(&self, subject: &mut S, channel: N, level: u8) -> ReportEntry
    where
        S: Clone,
        N: Into<String>;
}
"#;

const CASE_INTERFACE: &str = r#"use crate::report::ReportEntry;

pub trait CaseAssertions: Send + Sync {
    /// The subject is lowercase.
    fn to_be_lowercase<S>(&self, subject: &S) -> ReportEntry
    where
        S: AsRef<str>;
}
"#;

fn write_config(root: &Path, body: &str) {
    fs::write(root.join(".attest.yaml"), body).unwrap();
}

fn project_with(interfaces: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("logic")).unwrap();
    for (name, content) in interfaces {
        fs::write(dir.path().join("logic").join(name), content).unwrap();
    }
    write_config(
        dir.path(),
        "codegen:\n  targets:\n    - kind: lib\n      logic_dir: logic\n      gen_dir: logic/gen\n",
    );
    dir
}

fn load(root: &Path) -> (Config, Option<std::path::PathBuf>) {
    let (config, config_dir) = Config::discover(root).expect("config should be discovered");
    (config, Some(config_dir))
}

#[test]
fn generate_writes_glue_and_wiring() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    let (config, config_dir) = load(dir.path());

    let reports =
        codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome.written.len(), 2);

    let glue = fs::read_to_string(dir.path().join("logic/gen/color_assertions.rs")).unwrap();
    assert!(glue.starts_with(emit::GENERATED_HEADER));
    assert!(glue.contains("impl<S> Expectation<S> {"));
    assert!(glue.contains("pub fn to_be_vivid(self) -> Self"));
    assert!(glue.contains("pub fn to_have_channel<N>(mut self, channel: N, level: u8) -> Self"));
    assert!(glue.contains("registry::get_or_default::<DefaultColorAssertions>()"));
    assert!(glue.contains(".to_have_channel(self.subject_mut(), channel, level);"));

    let wiring = fs::read_to_string(dir.path().join("logic/gen/mod.rs")).unwrap();
    assert!(wiring.contains("pub mod color_assertions;"));
}

#[test]
fn generate_is_idempotent() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    let (config, config_dir) = load(dir.path());

    codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();
    let reports =
        codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();

    assert!(reports[0].outcome.written.is_empty());
    assert_eq!(reports[0].outcome.unchanged.len(), 2);
}

#[test]
fn check_agrees_with_generate() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    let (config, config_dir) = load(dir.path());

    codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();
    let reports =
        codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Check).unwrap();
    assert!(reports[0].outcome.stale.is_empty());
}

#[test]
fn check_reports_stale_and_missing_files() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    let (config, config_dir) = load(dir.path());

    // Nothing generated yet: everything is stale.
    let reports =
        codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Check).unwrap();
    assert_eq!(reports[0].outcome.stale.len(), 2);

    // Drift after generation is detected too.
    codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();
    fs::write(
        dir.path().join("logic/gen/color_assertions.rs"),
        "// edited by hand\n",
    )
    .unwrap();
    let reports =
        codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Check).unwrap();
    assert_eq!(reports[0].outcome.stale.len(), 1);
}

#[test]
fn check_mode_writes_nothing() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    let (config, config_dir) = load(dir.path());

    codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Check).unwrap();
    assert!(!dir.path().join("logic/gen").exists());
}

#[test]
fn package_directories_generate_into_subdirectories() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    fs::create_dir_all(dir.path().join("logic/text")).unwrap();
    fs::write(
        dir.path().join("logic/text/case_assertions.rs"),
        CASE_INTERFACE,
    )
    .unwrap();
    write_config(
        dir.path(),
        "codegen:\n  targets:\n    - kind: lib\n      logic_dir: logic\n      gen_dir: logic/gen\n      packages: [text]\n",
    );
    let (config, config_dir) = load(dir.path());

    codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();

    let glue = fs::read_to_string(dir.path().join("logic/gen/text/case_assertions.rs")).unwrap();
    assert!(glue.contains("pub fn to_be_lowercase(self) -> Self"));

    let package_mod = fs::read_to_string(dir.path().join("logic/gen/text/mod.rs")).unwrap();
    assert!(package_mod.contains("pub mod case_assertions;"));

    let wiring = fs::read_to_string(dir.path().join("logic/gen/mod.rs")).unwrap();
    assert!(wiring.contains("pub mod color_assertions;"));
    assert!(wiring.contains("pub mod text;"));
}

// =========================================================================
// Error handling
// =========================================================================

#[test]
fn unsupported_target_kind_aborts() {
    let dir = project_with(&[("color_assertions.rs", COLOR_INTERFACE)]);
    write_config(
        dir.path(),
        "codegen:\n  targets:\n    - kind: jvm\n      logic_dir: logic\n      gen_dir: logic/gen\n",
    );
    let (config, config_dir) = load(dir.path());

    let err = codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write)
        .unwrap_err();
    assert!(err.to_string().contains("unsupported target kind 'jvm'"));
    assert!(!dir.path().join("logic/gen").exists());
}

#[test]
fn malformed_interface_aborts_without_partial_output() {
    let malformed = "pub trait BrokenAssertions {\n    fn nope(&self) -> ReportEntry;\n}\n";
    let dir = project_with(&[
        ("broken_assertions.rs", malformed),
        ("color_assertions.rs", COLOR_INTERFACE),
    ]);
    let (config, config_dir) = load(dir.path());

    let err = codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write)
        .unwrap_err();
    assert!(err.to_string().contains("interface convention"));
    // The well-formed sibling must not have been written either.
    assert!(!dir.path().join("logic/gen").exists());
}

#[test]
fn missing_trait_aborts_with_expected_name() {
    let dir = project_with(&[("color_assertions.rs", "pub struct NotATrait;\n")]);
    let (config, config_dir) = load(dir.path());

    let err = codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write)
        .unwrap_err();
    assert!(err.to_string().contains("pub trait ColorAssertions"));
}

#[test]
fn missing_logic_dir_aborts() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "codegen:\n  targets:\n    - kind: lib\n      logic_dir: nowhere\n      gen_dir: gen\n",
    );
    let (config, config_dir) = load(dir.path());

    let err = codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write)
        .unwrap_err();
    assert!(err.to_string().contains("logic directory not found"));
}

#[test]
fn excluded_files_are_skipped() {
    let dir = project_with(&[
        ("color_assertions.rs", COLOR_INTERFACE),
        ("case_assertions.rs", CASE_INTERFACE),
    ]);
    write_config(
        dir.path(),
        "codegen:\n  exclude: [case_assertions.rs]\n  targets:\n    - kind: lib\n      logic_dir: logic\n      gen_dir: logic/gen\n",
    );
    let (config, config_dir) = load(dir.path());

    codegen::run(dir.path(), &config, config_dir.as_deref(), GenMode::Write).unwrap();
    assert!(dir.path().join("logic/gen/color_assertions.rs").exists());
    assert!(!dir.path().join("logic/gen/case_assertions.rs").exists());
}
