//! SVG-to-PNG rasterization.
//!
//! Wraps the resvg rendering pipeline: parse the SVG, scale it onto a
//! pixmap of the requested dimensions, encode as PNG, write to disk.
//! The SVG is read and parsed on every call so that a failure stays
//! local to the one size being rendered.

use resvg::{tiny_skia, usvg};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Errors from rendering one size.
#[derive(Debug)]
pub enum RenderError {
    /// Failed to read the source SVG file.
    SvgRead(io::Error),
    /// Source file is not a well-formed SVG.
    SvgParse(String),
    /// Could not allocate a pixmap of the requested dimensions.
    PixmapAlloc { width: u32, height: u32 },
    /// PNG encoding failed.
    PngEncode(String),
    /// Failed to write the PNG to its destination.
    Write(io::Error),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SvgRead(e) => write!(f, "Failed to read SVG: {}", e),
            RenderError::SvgParse(msg) => write!(f, "Failed to parse SVG: {}", msg),
            RenderError::PixmapAlloc { width, height } => {
                write!(f, "Failed to allocate {}x{} pixmap", width, height)
            }
            RenderError::PngEncode(msg) => write!(f, "Failed to encode PNG: {}", msg),
            RenderError::Write(e) => write!(f, "Failed to write PNG: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::SvgRead(e) => Some(e),
            RenderError::Write(e) => Some(e),
            _ => None,
        }
    }
}

/// Render the SVG at `svg_path` to a `width` x `height` PNG.
///
/// Writes the encoded bytes to `output_path` and also returns them, so
/// callers assembling a multi-frame container can reuse the buffer
/// without re-reading the file.
pub fn rasterize(
    svg_path: &Path,
    output_path: &Path,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, RenderError> {
    let svg_data = fs::read(svg_path).map_err(RenderError::SvgRead)?;

    // Load system fonts so text elements in the SVG render correctly.
    let mut opt = usvg::Options::default();
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();

    let tree = usvg::Tree::from_data(&svg_data, &opt)
        .map_err(|e| RenderError::SvgParse(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::PixmapAlloc { width, height })?;

    // Scale from the SVG's intrinsic size to the requested pixel size.
    let scale_x = width as f32 / tree.size().width();
    let scale_y = height as f32 / tree.size().height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png_data = pixmap
        .encode_png()
        .map_err(|e| RenderError::PngEncode(e.to_string()))?;

    fs::write(output_path, &png_data).map_err(RenderError::Write)?;

    Ok(png_data)
}
