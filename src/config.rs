//! Fastfetch config document handling.
//!
//! This module loads a fastfetch `config.jsonc` (comments and trailing commas
//! allowed), exposes the two fields the logo swap edits, and writes the
//! document back as strict, pretty-printed JSON.

use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::constants::{DEFAULT_CONFIG_FILENAME, LOGO_FIELD, LOGO_SOURCE_FIELD, MODULES_FIELD};

/// Errors raised while reading, inspecting or writing a config document.
#[derive(Debug)]
pub enum SwapError {
    /// Config file does not exist.
    NotFound(PathBuf),
    /// Config text is not valid JSON/JSONC.
    Parse(String),
    /// A required field is missing or has the wrong shape.
    MissingField(&'static str),
    /// The document could not be turned back into JSON text.
    Serialize(String),
    /// Reading or writing the file failed.
    Io(String),
}

impl std::fmt::Display for SwapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Parse(message) => write!(f, "Failed to parse JSON: {message}"),
            Self::MissingField(description) => write!(f, "{description}"),
            Self::Serialize(message) => write!(f, "Failed to serialize config: {message}"),
            Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SwapError {}

/// Message reported when `logo.source` is absent or not a string.
pub const MISSING_LOGO_SOURCE: &str = "No logo.source string found in config.";

/// Message reported when `modules` is absent or not an array.
pub const MISSING_MODULES: &str = "No modules list found in config.";

/// Config path used when none is given: `config.jsonc` in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILENAME)
}

/// A parsed fastfetch config.
///
/// Key order is preserved so that everything except the edited fields
/// round-trips unchanged. Comments are dropped on write.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Loads and parses the config at `path`.
    pub fn load(path: &Path) -> Result<Self, SwapError> {
        if !path.exists() {
            return Err(SwapError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SwapError::Io(format!("Failed to read {}: {e}", path.display())))?;
        debug!(path = %path.display(), bytes = content.len(), "Read config file");

        Self::parse(&content)
    }

    /// Parses config text. Accepts JSON with comments and trailing commas.
    pub fn parse(content: &str) -> Result<Self, SwapError> {
        let root: Value = json5::from_str(content).map_err(|e| SwapError::Parse(e.to_string()))?;
        Ok(Self { root })
    }

    /// The whole document.
    pub const fn root(&self) -> &Value {
        &self.root
    }

    fn logo_mut(&mut self) -> Result<&mut Map<String, Value>, SwapError> {
        match self.root.get_mut(LOGO_FIELD) {
            Some(Value::Object(logo)) if matches!(logo.get(LOGO_SOURCE_FIELD), Some(Value::String(_))) => {
                Ok(logo)
            }
            _ => Err(SwapError::MissingField(MISSING_LOGO_SOURCE)),
        }
    }

    /// Current `logo.source` path.
    pub fn logo_source(&self) -> Result<&str, SwapError> {
        self.root
            .get(LOGO_FIELD)
            .and_then(|logo| logo.get(LOGO_SOURCE_FIELD))
            .and_then(Value::as_str)
            .ok_or(SwapError::MissingField(MISSING_LOGO_SOURCE))
    }

    /// Replaces `logo.source`. Fails if there is no string to replace.
    pub fn set_logo_source(&mut self, source: impl Into<String>) -> Result<(), SwapError> {
        let logo = self.logo_mut()?;
        logo.insert(LOGO_SOURCE_FIELD.to_string(), Value::String(source.into()));
        Ok(())
    }

    /// Mutable access to the `modules` array.
    pub fn modules_mut(&mut self) -> Result<&mut Vec<Value>, SwapError> {
        match self.root.get_mut(MODULES_FIELD) {
            Some(Value::Array(modules)) => Ok(modules),
            _ => Err(SwapError::MissingField(MISSING_MODULES)),
        }
    }

    /// Serializes as JSON with two-space indentation and unescaped non-ASCII.
    pub fn to_pretty_string(&self) -> Result<String, SwapError> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| SwapError::Serialize(e.to_string()))
    }

    /// Writes the document to `path`, replacing the file atomically.
    ///
    /// Symlinks are followed: the file they point to is replaced and the
    /// link itself is left in place. The content goes to a temporary file
    /// next to that file first and is then renamed over it.
    pub fn save(&self, path: &Path) -> Result<(), SwapError> {
        let content = self.to_pretty_string()?;

        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
            SwapError::Io(format!("Failed to create temporary file in {}: {e}", dir.display()))
        })?;
        temp.write_all(content.as_bytes())
            .map_err(|e| SwapError::Io(format!("Failed to write config: {e}")))?;
        // Keep the original file mode; temp files are created private
        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| SwapError::Io(format!("Failed to set permissions: {e}")))?;
        }
        temp.persist(&target)
            .map_err(|e| SwapError::Io(format!("Failed to write {}: {e}", target.display())))?;

        debug!(path = %path.display(), target = %target.display(), bytes = content.len(), "Wrote config file");
        Ok(())
    }
}
