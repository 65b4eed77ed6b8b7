use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::container;
use crate::icon;
use crate::targets::{self, Target, TargetKind};

#[derive(Debug)]
pub struct OutputPlan {
    pub artifacts: Vec<Artifact>,
    pub warnings: Vec<String>,
}

/// One encoded output file, held in memory until written.
#[derive(Debug)]
pub struct Artifact {
    pub target: Target,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Unchanged,
}

impl OutputPlan {
    pub fn has_changes(&self) -> bool {
        self.artifacts
            .iter()
            .any(|a| !matches!(a.action, Action::Unchanged))
    }

    pub fn summary(&self) -> String {
        let mut creates = 0;
        let mut updates = 0;
        let mut unchanged = 0;

        for artifact in &self.artifacts {
            match artifact.action {
                Action::Create => creates += 1,
                Action::Update => updates += 1,
                Action::Unchanged => unchanged += 1,
            }
        }

        format!(
            "{} to create, {} to update, {} unchanged",
            creates, updates, unchanged
        )
    }

    /// Writes every artifact. Stops at the first failure; files already
    /// written stay on disk.
    pub fn write(&self, out_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        for artifact in &self.artifacts {
            std::fs::write(&artifact.path, &artifact.bytes)
                .with_context(|| format!("Failed to write {}", artifact.path.display()))?;
        }
        Ok(())
    }
}

fn hash_file(path: &Path) -> Result<Option<blake3::Hash>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(blake3::hash(&bytes)))
}

/// Renders every target from `source` and compares each against what is
/// currently in `out_dir`. Nothing is written.
pub fn build_output_plan(source: RgbaImage, out_dir: &Path) -> Result<OutputPlan> {
    let mut warnings = Vec::new();

    let (w, h) = source.dimensions();
    if w != h {
        warnings.push(format!(
            "Source icon is {}x{}, outputs will be stretched to squares",
            w, h
        ));
    }

    let working = icon::ensure_baseline(source);
    if working.dimensions() != (w, h) {
        warnings.push(format!(
            "Source icon is smaller than {edge}px, upscaled to {edge}x{edge} first",
            edge = targets::MIN_SOURCE_EDGE
        ));
    }

    let mut artifacts = Vec::new();
    for target in targets::all() {
        let bytes = render(&working, &target)
            .with_context(|| format!("Failed to render {}", target.name))?;
        let path = out_dir.join(target.name);

        let action = match hash_file(&path)? {
            None => Action::Create,
            Some(existing) if existing == blake3::hash(&bytes) => Action::Unchanged,
            Some(_) => Action::Update,
        };

        artifacts.push(Artifact {
            target,
            path,
            bytes,
            action,
        });
    }

    Ok(OutputPlan {
        artifacts,
        warnings,
    })
}

fn render(working: &RgbaImage, target: &Target) -> Result<Vec<u8>> {
    match target.kind {
        TargetKind::Png => icon::encode_png(&icon::resize_square(working, target.sizes[0])),
        TargetKind::Ico => container::encode_ico(working, target.sizes),
        TargetKind::Icns => container::encode_icns(working, target.sizes),
    }
}
