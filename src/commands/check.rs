use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::targets::{self, Target, TargetKind};

#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub problem: Option<String>,
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config_path())?;
    let paths = config.resolve(&cli.root());

    let results = check_outputs(&paths.out_dir);
    let mut failures = 0;

    for result in &results {
        match &result.problem {
            None => println!("{} {}", "✓".green(), result.name),
            Some(problem) => {
                failures += 1;
                println!("{} {}: {}", "✗".red(), result.name, problem);
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} icons in {} are missing or invalid. Run `icongen` to regenerate them.",
            failures,
            results.len(),
            paths.out_dir.display()
        );
    }

    println!(
        "{} All icons in {} are valid.",
        "✓".green(),
        paths.out_dir.display()
    );
    Ok(())
}

/// Inspects every expected output in `out_dir` and reports one result per target.
pub fn check_outputs(out_dir: &Path) -> Vec<CheckResult> {
    targets::all()
        .into_iter()
        .map(|target| CheckResult {
            name: target.name,
            problem: check_target(out_dir, &target).err().map(|e| format!("{e:#}")),
        })
        .collect()
}

fn check_target(out_dir: &Path, target: &Target) -> Result<()> {
    let path = out_dir.join(target.name);
    if !path.exists() {
        bail!("not found at {}", path.display());
    }

    let found: BTreeSet<u32> = match target.kind {
        TargetKind::Png => {
            let (w, h) = image::image_dimensions(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if w != h {
                bail!("expected a square image, found {}x{}", w, h);
            }
            BTreeSet::from([w])
        }
        TargetKind::Ico => {
            let file =
                File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
            let dir = ico::IconDir::read(BufReader::new(file))
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            let mut sizes = BTreeSet::new();
            for entry in dir.entries() {
                if entry.width() != entry.height() {
                    bail!(
                        "expected square entries, found {}x{}",
                        entry.width(),
                        entry.height()
                    );
                }
                sizes.insert(entry.width());
            }
            sizes
        }
        TargetKind::Icns => {
            let file =
                File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
            let family = icns::IconFamily::read(BufReader::new(file))
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            family
                .available_icons()
                .iter()
                .map(|icon_type| icon_type.pixel_width())
                .collect()
        }
    };

    let expected: BTreeSet<u32> = target.sizes.iter().copied().collect();
    if found != expected {
        bail!(
            "expected sizes {}, found {}",
            format_sizes(&expected),
            format_sizes(&found)
        );
    }
    Ok(())
}

fn format_sizes(sizes: &BTreeSet<u32>) -> String {
    sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
