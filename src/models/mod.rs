//! Data models for logo palettes.

pub mod palette;

pub use palette::{Palette, PaletteEntry};
