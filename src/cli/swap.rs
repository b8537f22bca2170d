//! The logo swap command.

use crate::cli::common::{CliError, CliResult};
use crate::config::{default_config_path, ConfigDocument};
use crate::models::Palette;
use crate::services::{apply_category_colors, next_logo_source};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Rotate the logo image and recolor module keys
#[derive(Debug, Clone, Args)]
pub struct SwapArgs {
    /// Path to the fastfetch config file [default: config.jsonc]
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file with the logo rotation (array of {"source", "colors"})
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Print the updated config instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// What a swap changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapSummary {
    /// Config file that was edited
    pub config_path: PathBuf,
    /// `logo.source` before the swap
    pub previous_source: String,
    /// `logo.source` after the swap
    pub new_source: String,
    /// Colors written into the module categories
    pub colors: Vec<String>,
}

impl SwapSummary {
    /// One-line report printed after a successful run.
    pub fn report(&self) -> String {
        format!(
            "Updated config: swapped logo to {} and applied colors [{}] in {}",
            self.new_source,
            self.colors.join(", "),
            self.config_path.display()
        )
    }

    /// Report for `--dry-run`, where nothing is written.
    pub fn dry_run_report(&self) -> String {
        format!(
            "Dry run: would swap logo from {} to {} and apply colors [{}] in {} (not written)",
            self.previous_source,
            self.new_source,
            self.colors.join(", "),
            self.config_path.display()
        )
    }
}

impl SwapArgs {
    /// Execute the swap command
    pub fn execute(&self) -> CliResult<()> {
        let config_path = self.config.clone().unwrap_or_else(default_config_path);
        let palette = self.load_palette()?;

        let mut document = ConfigDocument::load(&config_path)?;
        let summary = swap_document(&mut document, &palette, &config_path)?;

        // Dry runs keep stdout pure JSON; the summary goes to stderr
        if self.dry_run {
            println!("{}", document.to_pretty_string()?);
            eprintln!("{}", summary.dry_run_report());
        } else {
            document.save(&config_path)?;
            println!("{}", summary.report());
        }

        Ok(())
    }

    fn load_palette(&self) -> CliResult<Palette> {
        match &self.palette {
            Some(path) => {
                let palette = Palette::from_json_file(path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                debug!(path = %path.display(), entries = palette.len(), "Loaded palette file");
                Ok(palette)
            }
            None => Ok(Palette::builtin()),
        }
    }
}

/// Rotates `logo.source` and recolors `modules` in place.
///
/// `config_path` is only recorded in the returned summary.
pub fn swap_document(
    document: &mut ConfigDocument,
    palette: &Palette,
    config_path: &Path,
) -> CliResult<SwapSummary> {
    let previous_source = document.logo_source()?.to_string();
    let new_source = next_logo_source(&previous_source, palette);
    if new_source == previous_source && palette.len() > 1 {
        warn!(source = %previous_source, "Logo is not in the rotation, leaving it unchanged");
    }
    document.set_logo_source(new_source.clone())?;
    info!(from = %previous_source, to = %new_source, "Swapped logo");

    let colors = palette.colors_for(&new_source).to_vec();
    if palette.find(&new_source).is_none() {
        debug!(source = %new_source, "No palette for logo, using first palette entry");
    }

    let modules = document.modules_mut()?;
    apply_category_colors(modules, &colors);
    info!(modules = modules.len(), colors = ?colors, "Applied category colors");

    Ok(SwapSummary {
        config_path: config_path.to_path_buf(),
        previous_source,
        new_source,
        colors,
    })
}
