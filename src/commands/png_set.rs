//! Generate the fixed set of standalone PNG favicons.

use crate::config::PngTarget;
use crate::render::rasterize;
use std::path::Path;

/// Outcome counts for one PNG-set run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PngSetReport {
    pub written: usize,
    pub failed: usize,
}

/// Rasterize `svg_path` once per target, writing each PNG under `out_dir`.
///
/// Targets are independent: a failure is logged and the remaining targets
/// are still attempted. No retries.
pub fn run(svg_path: &Path, out_dir: &Path, targets: &[PngTarget]) -> PngSetReport {
    let mut report = PngSetReport::default();

    for target in targets {
        let output_path = out_dir.join(target.name);
        match rasterize(svg_path, &output_path, target.size, target.size) {
            Ok(_) => {
                println!(
                    "Generated: {} ({}x{})",
                    output_path.display(),
                    target.size,
                    target.size
                );
                report.written += 1;
            }
            Err(e) => {
                eprintln!("Failed to generate {}: {}", output_path.display(), e);
                report.failed += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use std::fs;
    use tempfile::tempdir;

    const TEST_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64" fill="#3a6ea5"/></svg>"##;

    const TARGETS: &[PngTarget] = &[
        PngTarget { name: "small.png", size: 16 },
        PngTarget { name: "medium.png", size: 48 },
        PngTarget { name: "large.png", size: 180 },
    ];

    #[test]
    fn writes_every_target_at_its_size() {
        let dir = tempdir().unwrap();
        let svg_path = dir.path().join("icon.svg");
        fs::write(&svg_path, TEST_SVG).unwrap();

        let report = run(&svg_path, dir.path(), TARGETS);

        assert_eq!(report, PngSetReport { written: 3, failed: 0 });
        for target in TARGETS {
            let data = fs::read(dir.path().join(target.name)).unwrap();
            let img = image::load_from_memory(&data).unwrap();
            assert_eq!(img.dimensions(), (target.size, target.size));
        }
    }

    #[test]
    fn failed_target_does_not_stop_siblings() {
        let dir = tempdir().unwrap();
        let svg_path = dir.path().join("icon.svg");
        fs::write(&svg_path, TEST_SVG).unwrap();

        // Middle target lands in a directory that does not exist.
        let targets: &[PngTarget] = &[
            PngTarget { name: "first.png", size: 16 },
            PngTarget { name: "missing-dir/broken.png", size: 32 },
            PngTarget { name: "last.png", size: 48 },
        ];

        let report = run(&svg_path, dir.path(), targets);

        assert_eq!(report, PngSetReport { written: 2, failed: 1 });
        assert!(dir.path().join("first.png").exists());
        assert!(dir.path().join("last.png").exists());
    }

    #[test]
    fn missing_source_fails_all_targets() {
        let dir = tempdir().unwrap();

        let report = run(Path::new("/nonexistent/icon.svg"), dir.path(), TARGETS);

        assert_eq!(report, PngSetReport { written: 0, failed: 3 });
    }
}
