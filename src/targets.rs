//! The fixed set of icons the Tauri bundler expects.

use std::fmt;

/// Sources smaller than this on their longest edge are upscaled to a square
/// of this size before any target is rendered.
pub const MIN_SOURCE_EDGE: u32 = 512;

/// Flat PNG outputs: file name -> square edge in pixels.
pub const PNG_TARGETS: &[(&str, u32)] = &[
    ("32x32.png", 32),
    ("128x128.png", 128),
    ("128x128@2x.png", 256),
];

pub const ICO_NAME: &str = "icon.ico";
pub const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

pub const ICNS_NAME: &str = "icon.icns";
pub const ICNS_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Png,
    Ico,
    Icns,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Png => write!(f, "PNG"),
            TargetKind::Ico => write!(f, "ICO"),
            TargetKind::Icns => write!(f, "ICNS"),
        }
    }
}

/// One output file and the square sizes it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: &'static str,
    pub kind: TargetKind,
    pub sizes: &'static [u32],
}

/// Every output file, in the order they are written.
pub fn all() -> Vec<Target> {
    let mut targets: Vec<Target> = PNG_TARGETS
        .iter()
        .map(|entry| Target {
            name: entry.0,
            kind: TargetKind::Png,
            sizes: std::slice::from_ref(&entry.1),
        })
        .collect();

    targets.push(Target {
        name: ICO_NAME,
        kind: TargetKind::Ico,
        sizes: ICO_SIZES,
    });
    targets.push(Target {
        name: ICNS_NAME,
        kind: TargetKind::Icns,
        sizes: ICNS_SIZES,
    });

    targets
}
