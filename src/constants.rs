//! Application-wide constants.
//!
//! This module defines the default config location and the field names
//! read from fastfetch configuration files.

/// Config file used when no path is given on the command line.
pub const DEFAULT_CONFIG_FILENAME: &str = "config.jsonc";

/// Value of a module's `type` field that marks a category separator.
pub const SEPARATOR_TYPE: &str = "custom";

/// Module field holding the type discriminator.
pub const MODULE_TYPE_FIELD: &str = "type";

/// Module field recolored for each category.
pub const KEY_COLOR_FIELD: &str = "keyColor";

/// Top-level field holding the logo settings.
pub const LOGO_FIELD: &str = "logo";

/// Field inside `logo` holding the image path.
pub const LOGO_SOURCE_FIELD: &str = "source";

/// Top-level field holding the module list.
pub const MODULES_FIELD: &str = "modules";
