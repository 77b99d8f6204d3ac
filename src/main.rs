//! Typewise - CLI

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use typewise::util::{config, logger};
use typewise::{run_checks, Exercise, RunSummary, NAME, VERSION};

/// Compile-time type computations, re-checked at runtime
#[derive(Parser, Debug)]
#[command(name = "typewise")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the assertion battery
    Check {
        /// Exercise to run (repeatable, default: all)
        #[arg(short, long, value_name = "EXERCISE")]
        exercise: Vec<Exercise>,

        /// Configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Stop at the first failed assertion
        #[arg(long, overrides_with = "no_fail_fast")]
        fail_fast: bool,

        /// Run every assertion, even if the config sets `fail_fast`
        #[arg(long, overrides_with = "fail_fast")]
        no_fail_fast: bool,
    },

    /// List the exercises
    List,

    /// Print version information
    Version,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let code = match args.command {
        Commands::Check {
            exercise,
            config: config_path,
            fail_fast,
            no_fail_fast,
        } => {
            let mut cfg = config::load_or_default(config_path.as_deref()).with_context(|| {
                format!(
                    "Failed to load config: {}",
                    config_path
                        .as_deref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                )
            })?;

            let level = if args.verbose {
                logger::LogLevel::Debug
            } else {
                cfg.log.level
            };
            logger::init_with_level(level);

            let fail_fast_flag = match (fail_fast, no_fail_fast) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cfg.check.override_fail_fast(fail_fast_flag);

            let selection = if exercise.is_empty() {
                cfg.check.exercises
            } else {
                exercise
            };
            let summary = run_checks(&selection, cfg.check.fail_fast);
            print_summary(&summary);

            if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::List => {
            for ex in Exercise::ALL {
                println!("{:<10} {:>3}  {}", ex.name(), ex.assertions().len(), ex.title());
            }
            ExitCode::SUCCESS
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

fn print_summary(summary: &RunSummary) {
    for (ex, report) in &summary.reports {
        println!("{} {}", ex.bold(), ex.title().dimmed());
        for message in &report.passed {
            println!("  {} {}", "ok".green(), message);
        }
        for failure in &report.failures {
            println!("  {} {}", "FAIL".red(), failure);
        }
        if report.skipped > 0 {
            println!("  {} {} assertion(s)", "skipped".yellow(), report.skipped);
        }
    }

    let totals = summary.totals();
    let status = if summary.is_success() {
        "passed".green().to_string()
    } else {
        "failed".red().to_string()
    };
    println!(
        "\n{}: {} passed, {} failed, {} skipped",
        status,
        totals.passed.len(),
        totals.failures.len(),
        totals.skipped
    );
}
