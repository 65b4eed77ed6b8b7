use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use icongen::commands::generate::{confirmation, generate};
use icongen::config::{Config, Paths};
use icongen::icon::FILTER;
use icongen::plan::Action;
use image::imageops;
use image::{Rgba, RgbaImage};

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([
            (x * 255 / w.max(1)) as u8,
            (y * 255 / h.max(1)) as u8,
            128,
            if (x + y) % 7 == 0 { 0 } else { 255 },
        ])
    })
}

fn setup(root: &Path, source: Option<RgbaImage>) -> Paths {
    let paths = Config::default().resolve(root);
    std::fs::create_dir_all(&paths.out_dir).unwrap();
    if let Some(img) = source {
        img.save(&paths.source).unwrap();
    }
    paths
}

fn output_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn ico_sizes(path: &Path) -> Vec<u32> {
    let dir = ico::IconDir::read(BufReader::new(File::open(path).unwrap())).unwrap();
    dir.entries().iter().map(|e| e.width()).collect()
}

fn icns_sizes(path: &Path) -> BTreeSet<u32> {
    let family = icns::IconFamily::read(BufReader::new(File::open(path).unwrap())).unwrap();
    family
        .available_icons()
        .iter()
        .map(|t| t.pixel_width())
        .collect()
}

#[test]
fn large_source_produces_all_five_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), Some(gradient(600, 600)));

    let plan = generate(&paths, false).unwrap();
    assert_eq!(plan.artifacts.len(), 5);
    assert!(plan.warnings.is_empty());

    let names = output_names(&paths.out_dir);
    for expected in [
        "32x32.png",
        "128x128.png",
        "128x128@2x.png",
        "icon.ico",
        "icon.icns",
        "icon.png",
    ] {
        assert!(names.contains(expected), "missing {expected}");
    }
    assert_eq!(names.len(), 6);

    for (name, size) in [
        ("32x32.png", 32),
        ("128x128.png", 128),
        ("128x128@2x.png", 256),
    ] {
        let img = image::open(paths.out_dir.join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (size, size), "{name}");
    }

    assert_eq!(
        ico_sizes(&paths.out_dir.join("icon.ico")),
        vec![16, 24, 32, 48, 64, 128, 256]
    );
    assert_eq!(
        icns_sizes(&paths.out_dir.join("icon.icns")),
        BTreeSet::from([16, 32, 64, 128, 256, 512])
    );
}

#[test]
fn small_source_still_yields_256_retina_png() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), Some(gradient(64, 64)));

    let plan = generate(&paths, false).unwrap();
    assert!(plan
        .warnings
        .iter()
        .any(|w| w.contains("upscaled to 512x512")));

    let img = image::open(paths.out_dir.join("128x128@2x.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(img.dimensions(), (256, 256));

    let source = gradient(64, 64);
    let baseline = imageops::resize(&source, 512, 512, FILTER);
    let two_step = imageops::resize(&baseline, 256, 256, FILTER);
    let direct = imageops::resize(&source, 256, 256, FILTER);
    assert_eq!(img, two_step);
    assert_ne!(img, direct);
}

#[test]
fn non_square_source_is_stretched_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), Some(gradient(800, 600)));

    let plan = generate(&paths, false).unwrap();
    assert!(plan.warnings.iter().any(|w| w.contains("800x600")));

    let img = image::open(paths.out_dir.join("128x128.png")).unwrap();
    assert_eq!((img.width(), img.height()), (128, 128));
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), None);

    let err = generate(&paths, false).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Source icon not found"));
    assert!(message.contains(&paths.source.display().to_string()));
    assert!(output_names(&paths.out_dir).is_empty());
}

#[test]
fn corrupt_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), None);
    std::fs::write(&paths.source, b"not an image").unwrap();

    let err = generate(&paths, false).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open icon"));
    assert_eq!(output_names(&paths.out_dir).len(), 1);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), Some(gradient(512, 512)));

    let first = generate(&paths, false).unwrap();
    assert!(first.artifacts.iter().all(|a| a.action == Action::Create));
    let before: Vec<Vec<u8>> = first
        .artifacts
        .iter()
        .map(|a| std::fs::read(&a.path).unwrap())
        .collect();

    let second = generate(&paths, false).unwrap();
    assert!(!second.has_changes());
    assert_eq!(second.summary(), "0 to create, 0 to update, 5 unchanged");

    for (artifact, old) in second.artifacts.iter().zip(before) {
        assert_eq!(std::fs::read(&artifact.path).unwrap(), old);
    }
}

#[test]
fn modified_output_is_reported_and_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), Some(gradient(512, 512)));
    let stale = paths.out_dir.join("32x32.png");
    std::fs::write(&stale, b"stale").unwrap();

    let plan = generate(&paths, false).unwrap();
    let artifact = plan
        .artifacts
        .iter()
        .find(|a| a.target.name == "32x32.png")
        .unwrap();
    assert_eq!(artifact.action, Action::Update);
    assert_eq!(std::fs::read(&stale).unwrap(), artifact.bytes);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup(dir.path(), Some(gradient(512, 512)));

    let plan = generate(&paths, true).unwrap();
    assert!(plan.has_changes());
    assert_eq!(plan.summary(), "5 to create, 0 to update, 0 unchanged");
    assert_eq!(
        output_names(&paths.out_dir),
        BTreeSet::from(["icon.png".to_string()])
    );
}

#[test]
fn missing_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let paths = Paths {
        source: dir.path().join("icon.png"),
        out_dir: dir.path().join("out/icons"),
    };
    gradient(512, 512).save(&paths.source).unwrap();

    generate(&paths, false).unwrap();
    assert_eq!(output_names(&paths.out_dir).len(), 5);
}

#[test]
fn confirmation_names_output_dir() {
    let out_dir = Path::new("/project/src-tauri/icons");
    assert_eq!(
        confirmation(out_dir),
        "Generated icon assets in /project/src-tauri/icons"
    );
}
