//! Build-time generation of fluent assertion glue.
//!
//! The generator scans a logic directory for interface files matching the
//! `*_assertions.rs` naming convention, parses their trait method
//! signatures, and emits companion files that map each interface method
//! onto [`Expectation`](crate::expect::Expectation) via the global
//! implementation registry. A generated `mod.rs` wires the emitted files
//! into the crate.
//!
//! Driven by the `attest` binary (`attest generate` / `attest check`);
//! [`run`] is the library entry point.

pub mod emit;
pub mod parse;
pub mod scan;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Error type for generation failures. All of these abort the build task.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("unsupported target kind '{0}', please extend src/codegen/mod.rs")]
    UnsupportedKind(String),

    #[error("{file}: expected `pub trait {expected}` matching the interface naming convention")]
    MissingTrait { file: String, expected: String },

    #[error("{file}: signature does not follow the interface convention: `{signature}`")]
    MalformedMethod { file: String, signature: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl GenError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Whether to write generated files or only compare them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// Write files that changed.
    Write,
    /// Report files that would change, without writing.
    Check,
}

/// Supported generation target kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Glue generated into the library itself, using `crate::` paths.
    Lib,
}

impl TargetKind {
    /// Parse a target kind from its configuration name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lib" => Some(TargetKind::Lib),
            _ => None,
        }
    }

    /// The configuration name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Lib => "lib",
        }
    }
}

/// Per-file results of running a target.
#[derive(Debug, Default)]
pub struct GenOutcome {
    /// Files written because they were missing or out of date.
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
    /// Files that would change (check mode only).
    pub stale: Vec<PathBuf>,
}

/// Result of running one configured target.
#[derive(Debug)]
pub struct TargetReport {
    pub kind: TargetKind,
    pub logic_dir: PathBuf,
    pub gen_dir: PathBuf,
    pub outcome: GenOutcome,
}

/// Run generation for every configured target.
///
/// Relative target directories resolve against `config_dir` when the config
/// was loaded from a file, else against `base`. Parsing and rendering happen
/// before any file is touched, so a malformed interface file aborts the run
/// without partial output.
pub fn run(
    base: &Path,
    config: &Config,
    config_dir: Option<&Path>,
    mode: GenMode,
) -> Result<Vec<TargetReport>, GenError> {
    let mut reports = Vec::new();

    for target in &config.codegen.targets {
        let kind = TargetKind::from_str(&target.kind)
            .ok_or_else(|| GenError::UnsupportedKind(target.kind.clone()))?;
        let logic_dir = Config::resolve_dir(&target.logic_dir, base, config_dir);
        let gen_dir = Config::resolve_dir(&target.gen_dir, base, config_dir);

        let outcome = generate_target(
            &logic_dir,
            &gen_dir,
            &target.packages,
            &config.codegen.exclude,
            mode,
        )?;
        reports.push(TargetReport {
            kind,
            logic_dir,
            gen_dir,
            outcome,
        });
    }

    Ok(reports)
}

fn generate_target(
    logic_dir: &Path,
    gen_dir: &Path,
    packages: &[String],
    exclude: &[String],
    mode: GenMode,
) -> Result<GenOutcome, GenError> {
    // Render everything first; only touch the filesystem once the whole
    // target parsed cleanly.
    let mut planned: Vec<(PathBuf, String)> = Vec::new();

    let mut modules = plan_package(logic_dir, gen_dir, exclude, &mut planned)?;
    for package in packages {
        let sub_modules = plan_package(
            &logic_dir.join(package),
            &gen_dir.join(package),
            exclude,
            &mut planned,
        )?;
        planned.push((
            gen_dir.join(package).join("mod.rs"),
            emit::render_mod(&sub_modules),
        ));
        modules.push(package.clone());
    }
    modules.sort();
    planned.push((gen_dir.join("mod.rs"), emit::render_mod(&modules)));

    let mut outcome = GenOutcome::default();
    for (path, content) in planned {
        apply(&path, &content, mode, &mut outcome)?;
    }
    Ok(outcome)
}

/// Parse one package directory and plan its glue files.
/// Returns the module names, sorted by file name.
fn plan_package(
    logic_dir: &Path,
    gen_dir: &Path,
    exclude: &[String],
    planned: &mut Vec<(PathBuf, String)>,
) -> Result<Vec<String>, GenError> {
    let mut modules = Vec::new();
    for path in scan::find_interface_files(logic_dir, exclude)? {
        let interface = parse::parse_interface_file(&path)?;
        let rendered = emit::render_glue(&interface);
        planned.push((gen_dir.join(format!("{}.rs", interface.module_name)), rendered));
        modules.push(interface.module_name);
    }
    Ok(modules)
}

fn apply(
    path: &Path,
    content: &str,
    mode: GenMode,
    outcome: &mut GenOutcome,
) -> Result<(), GenError> {
    let existing = fs::read_to_string(path).ok();
    if existing.as_deref() == Some(content) {
        outcome.unchanged.push(path.to_path_buf());
        return Ok(());
    }

    match mode {
        GenMode::Check => outcome.stale.push(path.to_path_buf()),
        GenMode::Write => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
            }
            fs::write(path, content).map_err(|e| GenError::io(path, e))?;
            outcome.written.push(path.to_path_buf());
        }
    }
    Ok(())
}
