use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::{Config, Paths};
use crate::icon;
use crate::plan::{build_output_plan, Action, Artifact, OutputPlan};

pub fn run(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = Config::load_or_default(&cli.config_path())?;
    let paths = config.resolve(&cli.root());

    let plan = generate(&paths, dry_run)?;

    for warning in &plan.warnings {
        println!("{} {}", "!".yellow(), warning);
    }
    for artifact in &plan.artifacts {
        print_artifact(artifact);
    }

    if plan.has_changes() {
        println!("\n{}", plan.summary());
    } else {
        println!("\n{} All icons are already up to date.", "✓".green());
    }

    if dry_run {
        println!("\n{} Dry run, no files written.", "ℹ".blue());
        return Ok(());
    }

    println!("{} {}", "✓".green(), confirmation(&paths.out_dir));
    Ok(())
}

pub fn confirmation(out_dir: &Path) -> String {
    format!("Generated icon assets in {}", out_dir.display())
}

/// Loads the source, renders every target and, unless `dry_run` is set,
/// writes them all to `paths.out_dir`.
pub fn generate(paths: &Paths, dry_run: bool) -> Result<OutputPlan> {
    let source = icon::load_source(&paths.source)?;
    let plan = build_output_plan(source, &paths.out_dir)?;

    if !dry_run {
        plan.write(&paths.out_dir)?;
    }

    Ok(plan)
}

fn print_artifact(artifact: &Artifact) {
    let sizes = artifact
        .target
        .sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let label = format!(
        "{} ({} {})",
        artifact.target.name, artifact.target.kind, sizes
    );

    match artifact.action {
        Action::Create => println!("  {} {}", "+".green(), label),
        Action::Update => println!("  {} {}", "~".yellow(), label),
        Action::Unchanged => println!("  {} {}", "=".dimmed(), label.dimmed()),
    }
}
