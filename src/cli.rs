use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{default_root, CONFIG_NAME};

#[derive(Parser)]
#[command(
    name = "icongen",
    about = "Generate Tauri bundle icons (PNG, ICO, ICNS) from a single source image"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root containing src-tauri/
    #[arg(
        long,
        global = true,
        long_help = "\
Project root containing src-tauri/.

Defaults to the parent of the directory this tool was built in (the build
tree location, fixed at compile time). Pass --root when running an
installed or relocated binary."
    )]
    pub root: Option<PathBuf>,

    /// Path to config file (default: <root>/icongen.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate all icons from the source image (default)
    Generate {
        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify that the generated icons exist and have the expected sizes
    Check,

    /// Create an icongen.toml config file
    Init,
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_root)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.root().join(CONFIG_NAME))
    }
}
