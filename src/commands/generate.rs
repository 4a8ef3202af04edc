//! Top-level favicon generation flow.

use crate::commands::ico::{self, IcoReport};
use crate::commands::png_set::{self, PngSetReport};
use crate::config;
use std::path::{Path, PathBuf};

/// The one hard-fail condition of a run.
#[derive(Debug)]
pub enum GenerateError {
    /// The source SVG does not exist; nothing is written.
    SourceMissing(PathBuf),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::SourceMissing(path) => {
                write!(
                    f,
                    "source SVG not found: {} (run from the project root)",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Combined outcome of the PNG-set and ICO steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    pub png: PngSetReport,
    pub ico: IcoReport,
}

/// Generate the full favicon set under `<project_root>/public/`.
///
/// Aborts before any conversion if the source SVG is missing. Both steps
/// are attempted otherwise; individual conversion failures are logged by
/// the steps themselves and never turn the run into an error.
pub fn run(project_root: &Path) -> Result<GenerateReport, GenerateError> {
    let public_dir = project_root.join(config::PUBLIC_DIR);
    let svg_path = public_dir.join(config::SOURCE_FILENAME);

    if !svg_path.exists() {
        return Err(GenerateError::SourceMissing(svg_path));
    }

    println!("Processing source SVG: {}", svg_path.display());

    let png = png_set::run(&svg_path, &public_dir, config::PNG_TARGETS);
    let ico = ico::run(&svg_path, &public_dir, config::ICO_SIZES, config::ICO_FILENAME);

    Ok(GenerateReport { png, ico })
}
