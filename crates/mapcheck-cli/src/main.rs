use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mapcheck_core::{Config, Report, RuleId};
use mapcheck_harness::ConventionHarness;
use mapcheck_provider::SnapshotProvider;

/// Mapcheck - naming and shape conventions for mapping metadata
#[derive(Parser)]
#[command(name = "mapcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: mapcheck.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the convention checks against a model snapshot
    Check {
        /// Path to the model snapshot (JSON export of the mapping contexts)
        #[arg(short, long, default_value = "model.json")]
        snapshot: PathBuf,

        /// Output file for report.json
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Also output markdown report
        #[arg(short, long)]
        markdown: Option<PathBuf>,
    },

    /// List the rule catalogue
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else if Path::new("mapcheck.toml").exists() {
        Config::from_file(Path::new("mapcheck.toml"))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    match cli.command {
        Commands::Check {
            snapshot,
            output,
            markdown,
        } => {
            check_command(
                &config,
                &snapshot,
                &output,
                markdown.as_deref(),
                cli.verbose,
            )
            .await
        }
        Commands::Rules => rules_command(),
    }
}

/// Check command - run the catalogue against a snapshot
async fn check_command(
    config: &Config,
    snapshot: &Path,
    output: &Path,
    markdown: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("{} {}", "Loading snapshot from:".cyan(), snapshot.display());
    }

    let skipped = config.skipped_rules()?;
    let rules: Vec<RuleId> = RuleId::ALL
        .iter()
        .copied()
        .filter(|rule| !skipped.contains(rule))
        .collect();

    if verbose && !skipped.is_empty() {
        eprintln!(
            "{} {}",
            "Skipping checks:".yellow(),
            skipped
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let provider = SnapshotProvider::new(snapshot);
    let mut harness = ConventionHarness::new(provider);

    harness
        .initialize(|exclusions| config.apply_exclusions(exclusions))
        .await?;

    if verbose {
        eprintln!(
            "{} {} context(s), running {} check(s)...",
            "Acquired".cyan(),
            harness.contexts().len(),
            rules.len()
        );
    }

    let report = harness.run_checks(&rules)?;
    harness.teardown().await?;

    // Save JSON report
    report.save_to_file(output)?;

    if verbose {
        eprintln!("{} {}", "Report saved to:".green(), output.display());
    }

    // Save markdown report if requested
    if let Some(md_path) = markdown {
        let markdown_content = generate_markdown_report(&report);
        std::fs::write(md_path, markdown_content)?;
        if verbose {
            eprintln!(
                "{} {}",
                "Markdown report saved to:".green(),
                md_path.display()
            );
        }
    }

    // Print summary
    print_report_summary(&report);

    // Exit with error code if any convention failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

/// Rules command - list the catalogue
fn rules_command() -> Result<()> {
    let rules = mapcheck_rules::catalogue();

    println!("{}", "Convention catalogue:".bold());
    println!();

    for rule in &rules {
        println!(
            "  {}  {}",
            rule.id().as_str().cyan(),
            rule.id().display_name()
        );
    }

    println!();
    println!("{} rules", rules.len());

    Ok(())
}

/// Print report summary to stdout
fn print_report_summary(report: &Report) {
    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Mapping Convention Report".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    println!("Version: {}", report.version);
    println!("Timestamp: {}", report.timestamp);
    println!();

    println!("{}", "Summary:".bold());
    println!("  Checks run:    {}", report.summary.checks_run);

    if report.summary.checks_failed > 0 {
        println!(
            "  Checks failed: {}",
            report.summary.checks_failed.to_string().red().bold()
        );
        println!(
            "  Violations:    {}",
            report.summary.total_violations.to_string().red()
        );
    } else {
        println!(
            "  Checks failed: {}",
            report.summary.checks_failed.to_string().green()
        );
        println!("  Violations:    {}", report.summary.total_violations);
    }

    println!(
        "  Model:         {} context(s), {} entit(ies)",
        report.summary.contexts_checked, report.summary.entities_checked
    );
    println!();

    if !report.has_failures() {
        println!("{}", "✓ All conventions hold!".green().bold());
    } else {
        println!("{}", "Failed checks:".bold());
        for check in report.checks.iter().filter(|c| !c.passed()) {
            println!(
                "  [{}] {}: {}",
                "FAIL".red().bold(),
                check.rule,
                check.rule_name
            );
            for violation in &check.violations {
                println!("    {}", violation);
            }
        }
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());
}

/// Generate markdown report
fn generate_markdown_report(report: &Report) -> String {
    let mut md = String::new();

    md.push_str("# Mapping Convention Report\n\n");
    md.push_str(&format!("**Version:** {}\n\n", report.version));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));

    md.push_str("## Summary\n\n");
    md.push_str(&format!("- Checks run: {}\n", report.summary.checks_run));
    md.push_str(&format!(
        "- Checks failed: {}\n",
        report.summary.checks_failed
    ));
    md.push_str(&format!(
        "- Violations: {}\n",
        report.summary.total_violations
    ));
    md.push_str(&format!(
        "- Model: {} context(s), {} entit(ies)\n",
        report.summary.contexts_checked, report.summary.entities_checked
    ));
    md.push('\n');

    if !report.has_failures() {
        md.push_str("✅ **All conventions hold!**\n");
    } else {
        md.push_str("## Failed checks\n\n");

        for check in report.checks.iter().filter(|c| !c.passed()) {
            md.push_str(&format!("### ❌ {} - {}\n\n", check.rule, check.rule_name));

            for violation in &check.violations {
                md.push_str(&format!("- {}\n", violation));
            }
            md.push('\n');
        }
    }

    md
}
