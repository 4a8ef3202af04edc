//! Fixed output tables and filesystem names.
//!
//! The set of favicon outputs is deliberate configuration, not incidental
//! literals: every operation takes its targets as a parameter so tests can
//! run with alternate size sets.

/// One PNG output: file name paired with a square pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngTarget {
    pub name: &'static str,
    pub size: u32,
}

/// Directory under the project root holding the source SVG and all outputs.
pub const PUBLIC_DIR: &str = "public";
/// Source vector image; must exist before any conversion runs.
pub const SOURCE_FILENAME: &str = "favicon.svg";
/// Final multi-frame icon container.
pub const ICO_FILENAME: &str = "favicon.ico";

/// The five PNG outputs, in generation order.
pub const PNG_TARGETS: &[PngTarget] = &[
    PngTarget { name: "favicon-16x16.png", size: 16 },
    PngTarget { name: "favicon-32x32.png", size: 32 },
    PngTarget { name: "apple-touch-icon.png", size: 180 },
    PngTarget { name: "android-chrome-192x192.png", size: 192 },
    PngTarget { name: "android-chrome-512x512.png", size: 512 },
];

/// Frame sizes for favicon.ico, ascending. This is also the frame order
/// inside the container.
pub const ICO_SIZES: &[u32] = &[16, 32, 48];

/// Name of the working PNG written for one ICO frame.
pub fn temp_png_name(size: u32) -> String {
    format!("temp_{}.png", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ico_sizes_are_ascending() {
        assert!(ICO_SIZES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn temp_name_embeds_size() {
        assert_eq!(temp_png_name(16), "temp_16.png");
        assert_eq!(temp_png_name(48), "temp_48.png");
    }
}
