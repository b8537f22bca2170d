//! Logo palette table.
//!
//! Each entry pairs a logo image filename with the colors used for the
//! config's module categories while that image is shown. The order of the
//! table defines the rotation order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in rotation: image filename and its category colors.
static BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("image0.png", &["#cb7a6b", "#eeeeee", "#cb7a6b"]),
    ("image1.png", &["#ccc3ff", "#eeeeee", "#ccc3ff"]),
];

/// One logo image and its ordered category colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Image filename (base name only, e.g. "image0.png").
    pub source: String,
    /// Colors assigned to module categories, in order.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl PaletteEntry {
    /// Creates a new palette entry.
    pub fn new(source: impl Into<String>, colors: &[&str]) -> Self {
        Self {
            source: source.into(),
            colors: colors.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Ordered, cyclic list of palette entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Creates a palette from explicit entries.
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// The palette compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ENTRIES
                .iter()
                .map(|(source, colors)| PaletteEntry::new(*source, colors))
                .collect(),
        )
    }

    /// Loads a palette from a JSON (or JSONC) array of
    /// `{ "source": ..., "colors": [...] }` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file: {}", path.display()))?;
        let entries: Vec<PaletteEntry> = json5::from_str(&content)
            .with_context(|| format!("Failed to parse palette file: {}", path.display()))?;
        Ok(Self::new(entries))
    }

    /// All entries in rotation order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, used as the fallback palette.
    pub fn first(&self) -> Option<&PaletteEntry> {
        self.entries.first()
    }

    /// Index of the entry whose `source` equals the base name of `filename`.
    pub fn position(&self, filename: &str) -> Option<usize> {
        let name = base_name(filename)?;
        self.entries.iter().position(|entry| entry.source == name)
    }

    /// Entry matching the base name of `filename` (case-sensitive).
    pub fn find(&self, filename: &str) -> Option<&PaletteEntry> {
        self.position(filename).map(|idx| &self.entries[idx])
    }

    /// Entry following the one matching `filename`, wrapping around.
    pub fn successor(&self, filename: &str) -> Option<&PaletteEntry> {
        let idx = self.position(filename)?;
        self.entries.get((idx + 1) % self.entries.len())
    }

    /// Colors for `filename`, falling back to the first entry's colors,
    /// or nothing when the palette is empty.
    pub fn colors_for(&self, filename: &str) -> &[String] {
        self.find(filename)
            .or_else(|| self.first())
            .map_or(&[][..], |entry| entry.colors.as_slice())
    }
}

/// Base filename of a path string, if it has one.
pub(crate) fn base_name(path: &str) -> Option<&str> {
    Path::new(path).file_name().and_then(|name| name.to_str())
}
