use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use attest::codegen::{self, GenMode, TargetReport};
use attest::config::Config;

#[derive(Parser)]
#[command(name = "attest")]
#[command(about = "Code generation tasks for the attest assertion library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fluent glue for the assertion interfaces
    Generate {
        /// Root directory (default: current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Path to config file (default: auto-discover)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the logic directory for all targets
        #[arg(long)]
        logic_dir: Option<PathBuf>,

        /// Override the generated-sources directory for all targets
        #[arg(long)]
        gen_dir: Option<PathBuf>,
    },

    /// Verify the committed generated files are up to date
    Check {
        /// Root directory (default: current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Path to config file (default: auto-discover)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the logic directory for all targets
        #[arg(long)]
        logic_dir: Option<PathBuf>,

        /// Override the generated-sources directory for all targets
        #[arg(long)]
        gen_dir: Option<PathBuf>,
    },

    /// List configured codegen targets
    Targets {
        /// Root directory (default: current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Path to config file (default: auto-discover)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            root,
            config,
            logic_dir,
            gen_dir,
        } => run_generation(root, config, logic_dir, gen_dir, GenMode::Write),
        Commands::Check {
            root,
            config,
            logic_dir,
            gen_dir,
        } => run_generation(root, config, logic_dir, gen_dir, GenMode::Check),
        Commands::Targets { root, config } => {
            list_targets(root, config);
            Ok(())
        }
    }
}

/// Load config from explicit path or discover from directory.
fn load_or_discover_config(
    start_dir: &Path,
    explicit_path: Option<&Path>,
) -> (Config, Option<PathBuf>) {
    match explicit_path {
        Some(path) => Config::load(path)
            .map(|(c, d)| (c, Some(d)))
            .unwrap_or_else(|_| (Config::default(), None)),
        None => Config::discover(start_dir)
            .map(|(c, d)| (c, Some(d)))
            .unwrap_or_else(|| (Config::default(), None)),
    }
}

fn run_generation(
    root: Option<PathBuf>,
    config_path: Option<PathBuf>,
    logic_dir: Option<PathBuf>,
    gen_dir: Option<PathBuf>,
    mode: GenMode,
) -> Result<()> {
    let base = root.unwrap_or_else(|| PathBuf::from("."));
    let (config, config_dir) = load_or_discover_config(&base, config_path.as_deref());
    let config = config.with_overrides(logic_dir, gen_dir);

    let reports = codegen::run(&base, &config, config_dir.as_deref(), mode)?;
    let stale = print_reports(&reports, mode);

    if mode == GenMode::Check && stale > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Print per-target results. Returns the total number of stale files.
fn print_reports(reports: &[TargetReport], mode: GenMode) -> usize {
    let mut written = 0;
    let mut unchanged = 0;
    let mut stale = 0;

    println!();
    for report in reports {
        println!(
            "Target {} ({} -> {})",
            report.kind.as_str(),
            report.logic_dir.display(),
            report.gen_dir.display()
        );

        for path in &report.outcome.written {
            println!("  \x1b[32m✓\x1b[0m wrote {}", path.display());
        }
        for path in &report.outcome.stale {
            println!("  \x1b[31m✗\x1b[0m stale {}", path.display());
        }

        written += report.outcome.written.len();
        unchanged += report.outcome.unchanged.len();
        stale += report.outcome.stale.len();
    }

    println!();
    match mode {
        GenMode::Write => {
            println!("Generated: {} written, {} up to date", written, unchanged);
        }
        GenMode::Check if stale == 0 => {
            println!("\x1b[32mAll {} generated files up to date\x1b[0m", unchanged);
        }
        GenMode::Check => {
            println!(
                "\x1b[31m{} generated file(s) stale\x1b[0m - run `attest generate`",
                stale
            );
        }
    }
    stale
}

fn list_targets(root: Option<PathBuf>, config_path: Option<PathBuf>) {
    let base = root.unwrap_or_else(|| PathBuf::from("."));
    let (config, _) = load_or_discover_config(&base, config_path.as_deref());

    println!();
    println!("Configured targets:");
    for target in &config.codegen.targets {
        let packages = if target.packages.is_empty() {
            String::new()
        } else {
            format!(" (packages: {})", target.packages.join(", "))
        };
        println!(
            "  - {}: {} -> {}{}",
            target.kind,
            target.logic_dir.display(),
            target.gen_dir.display(),
            packages
        );
    }
    println!();
}
