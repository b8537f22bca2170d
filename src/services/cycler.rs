//! Logo filename rotation.
//!
//! Advances a logo path to the next image in the palette's rotation order,
//! keeping the directory part of the path exactly as written.

use std::path::Path;

use crate::models::Palette;

/// Returns `source` with its filename replaced by the next image in the
/// rotation. Paths whose filename is not in the palette are returned as-is.
pub fn next_logo_source(source: &str, palette: &Palette) -> String {
    match palette.successor(source) {
        Some(next) => Path::new(source)
            .with_file_name(&next.source)
            .to_string_lossy()
            .into_owned(),
        None => source.to_string(),
    }
}
