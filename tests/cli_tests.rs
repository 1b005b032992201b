// Process-level behavior: exit status, the missing-source diagnostic, and
// the console summary listing.

use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_favicon-gen"))
        .current_dir(dir)
        .output()
        .expect("run favicon-gen")
}

#[test]
fn test_missing_source_exits_with_status_1_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Source image not found"),
        "diagnostic missing: {stdout}"
    );
    assert!(stdout.contains("logo.jpg"), "resolved path missing: {stdout}");

    // no output files were attempted
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_run_produces_four_files_and_ordered_summary() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("logo.jpg");
    image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(512, 512, Rgba([255, 0, 0, 255])))
        .to_rgb8()
        .save(&source)
        .expect("write source image");

    let output = run_in(dir.path());
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let expected = [
        "favicon-16x16.png",
        "favicon-32x32.png",
        "apple-touch-icon-180x180.png",
        "favicon.ico",
    ];
    for name in expected {
        assert!(dir.path().join(name).exists(), "{name} was written");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);

    // one confirmation line per file, in generation order
    let mut last = 0;
    for name in expected {
        let pos = stdout.find(&format!("Saved {name}")).unwrap_or_else(|| {
            panic!("no confirmation for {name}: {stdout}");
        });
        assert!(pos >= last, "confirmation for {name} out of order");
        last = pos;
    }

    // summary lists all four absolute paths, in the same order
    let summary_start = stdout.find("Generated files:").expect("summary header");
    let listed: Vec<&str> = stdout[summary_start..]
        .lines()
        .skip(1)
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(listed.len(), 4);
    for (line, name) in listed.iter().zip(expected) {
        assert!(
            Path::new(line).is_absolute(),
            "summary line is absolute: {line}"
        );
        assert!(line.ends_with(name), "summary line {line} ends with {name}");
    }
}
