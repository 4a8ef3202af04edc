//! Assemble the multi-frame favicon.ico.
//!
//! Each frame is rendered to a temporary PNG, decoded back in memory,
//! and appended to one ICO container. The temporary files are working
//! state only and are removed before this step returns, on success and
//! on failure alike.

use crate::config;
use crate::render::rasterize;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Errors from ICO assembly.
#[derive(Debug)]
pub enum IcoError {
    /// A frame's PNG bytes could not be decoded.
    Decode { size: u32, reason: String },
    /// A frame could not be encoded as an ICO directory entry.
    EncodeEntry { size: u32, reason: String },
    /// Failed to write the ICO file.
    Write(io::Error),
}

impl std::fmt::Display for IcoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IcoError::Decode { size, reason } => {
                write!(f, "Failed to decode {}x{} frame: {}", size, size, reason)
            }
            IcoError::EncodeEntry { size, reason } => {
                write!(f, "Failed to encode {}x{} frame: {}", size, size, reason)
            }
            IcoError::Write(e) => write!(f, "Failed to write ICO: {}", e),
        }
    }
}

impl std::error::Error for IcoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IcoError::Write(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcome of one ICO run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IcoReport {
    /// Frames embedded in the written container.
    pub frames: usize,
    /// Whether an ICO file was written at all.
    pub written: bool,
}

/// Render one frame per entry in `sizes` and combine them into
/// `out_dir/final_name`.
///
/// A size whose rendering fails is skipped; the container holds exactly
/// the successful frames, in the order `sizes` lists them. If every size
/// fails, no ICO file is written. Assembly errors are logged, never
/// propagated. Temporary `temp_<size>.png` files never survive this call.
pub fn run(svg_path: &Path, out_dir: &Path, sizes: &[u32], final_name: &str) -> IcoReport {
    let mut frames: Vec<(u32, Vec<u8>)> = Vec::new();
    for &size in sizes {
        let temp_path = out_dir.join(config::temp_png_name(size));
        match rasterize(svg_path, &temp_path, size, size) {
            Ok(png_data) => frames.push((size, png_data)),
            Err(e) => eprintln!("Failed to render {}x{} frame: {}", size, size, e),
        }
    }

    let final_path = out_dir.join(final_name);
    let report = match assemble(&frames, &final_path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to generate {}: {}", final_path.display(), e);
            IcoReport::default()
        }
    };

    // Scoped cleanup: temps go away no matter how assembly went.
    for &size in sizes {
        let temp_path = out_dir.join(config::temp_png_name(size));
        if temp_path.exists() {
            if let Err(e) = fs::remove_file(&temp_path) {
                eprintln!("Failed to remove {}: {}", temp_path.display(), e);
            }
        }
    }

    report
}

fn assemble(frames: &[(u32, Vec<u8>)], final_path: &Path) -> Result<IcoReport, IcoError> {
    if frames.is_empty() {
        println!("No frames rendered; skipping {}", final_path.display());
        return Ok(IcoReport::default());
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for (size, png_data) in frames {
        let img = image::load_from_memory(png_data).map_err(|e| IcoError::Decode {
            size: *size,
            reason: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let icon = IconImage::from_rgba_data(width, height, rgba.into_raw());
        let entry = IconDirEntry::encode(&icon).map_err(|e| IcoError::EncodeEntry {
            size: *size,
            reason: e.to_string(),
        })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(final_path).map_err(IcoError::Write)?;
    icon_dir.write(file).map_err(IcoError::Write)?;
    println!(
        "Generated: {} ({} frames)",
        final_path.display(),
        frames.len()
    );

    Ok(IcoReport { frames: frames.len(), written: true })
}
