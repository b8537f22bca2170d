//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the logoswap binary
pub fn logoswap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_logoswap")
}

/// Runs logoswap with `args` from `dir`.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(logoswap_bin())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A fastfetch config with a title, three categories and comments.
///
/// # Arguments
/// * `logo_source` - Value for `logo.source`
pub fn sample_config(logo_source: &str) -> String {
    format!(
        r##"// fastfetch config
{{
  "$schema": "https://github.com/fastfetch-cli/fastfetch/raw/dev/doc/json_schema.json",
  "logo": {{
    "type": "kitty-direct",
    "source": "{logo_source}", // rotated by logoswap
    "width": 30,
    "padding": {{ "top": 1 }}
  }},
  "display": {{ "separator": " ➜ " }},
  "modules": [
    "break",
    {{ "type": "title", "keyColor": "#000000" }},
    {{ "type": "custom", "format": "┌──────── Hardware ────────┐" }},
    {{ "type": "cpu", "key": "  CPU", "keyColor": "#000000" }},
    {{ "type": "gpu", "key": "  GPU", "keyColor": "#000000" }},
    {{ "type": "custom", "format": "├──────── Software ────────┤" }},
    {{ "type": "os", "key": "  OS", "keyColor": "#000000" }},
    {{ "type": "kernel", "key": "  Kernel" }},
    {{ "type": "custom", "format": "├────────── Misc ──────────┤" }},
    {{ "type": "uptime", "key": "  Uptime", "keyColor": "#000000" }},
    "colors",
  ],
}}
"##
    )
}

/// Writes `content` to `config.jsonc` in a fresh temp directory.
pub fn create_temp_config(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.jsonc");
    fs::write(&config_path, content).expect("Failed to write config file");
    (config_path, temp_dir)
}

/// Reads a config written by logoswap (strict JSON).
pub fn read_config(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read config file");
    serde_json::from_str(&content).expect("Output should be strict JSON")
}

/// `keyColor` values of all modules, `None` where a module has none.
pub fn key_colors(config: &serde_json::Value) -> Vec<Option<String>> {
    config["modules"]
        .as_array()
        .expect("modules should be an array")
        .iter()
        .map(|m| m.get("keyColor").and_then(|c| c.as_str()).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sample_config_parses() {
        let value: serde_json::Value =
            json5::from_str(&sample_config("image0.png")).expect("fixture should be valid JSONC");
        assert_eq!(value["logo"]["source"], "image0.png");
        assert_eq!(value["modules"].as_array().unwrap().len(), 11);
    }
}
