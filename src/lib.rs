//! Generate website favicons from a single source SVG.
//!
//! Reads `public/favicon.svg`, writes five standalone PNGs at fixed sizes
//! and one multi-frame `favicon.ico` (16/32/48) back into `public/`.

pub mod commands;
pub mod config;
pub mod render;
