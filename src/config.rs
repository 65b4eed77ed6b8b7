use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_NAME: &str = "icongen.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Deserialize)]
pub struct IconsConfig {
    /// Source image, relative to the project root (default: "src-tauri/icons/icon.png")
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Output directory, relative to the project root (default: "src-tauri/icons")
    #[serde(default = "default_icon_dir")]
    pub dir: PathBuf,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            dir: default_icon_dir(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("src-tauri/icons/icon.png")
}

fn default_icon_dir() -> PathBuf {
    PathBuf::from("src-tauri/icons")
}

/// Fully resolved input and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub source: PathBuf,
    pub out_dir: PathBuf,
}

/// The project root of the tree this binary was built from: the parent of
/// the crate directory, recorded at compile time. An installed or moved
/// binary still points at that build tree, so pass `--root` in that case.
pub fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

impl Config {
    /// Loads the config if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Joins the configured paths onto `root`. Absolute paths are kept as-is.
    pub fn resolve(&self, root: &Path) -> Paths {
        Paths {
            source: root.join(&self.icons.source),
            out_dir: root.join(&self.icons.dir),
        }
    }

    pub fn default_template() -> String {
        r#"# icongen configuration
#
# Target sizes are fixed by the Tauri bundle layout and cannot be changed:
#   32x32.png, 128x128.png, 128x128@2x.png (256px),
#   icon.ico  (16, 24, 32, 48, 64, 128, 256),
#   icon.icns (16, 32, 64, 128, 256, 512)

[icons]
source = "src-tauri/icons/icon.png"   # Relative to the project root
dir = "src-tauri/icons"               # Where generated icons are written
"#
        .to_string()
    }
}
