use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NormError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Substring of an input file name replaced to form the output name.
    #[serde(default = "default_input_marker")]
    pub input_marker: String,
    #[serde(default = "default_output_marker")]
    pub output_marker: String,
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_input_marker() -> String {
    "Input".to_string()
}

fn default_output_marker() -> String {
    "Output".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            input_marker: default_input_marker(),
            output_marker: default_output_marker(),
        }
    }
}

impl Settings {
    /// Output file name for `input_name`: the input marker becomes the output marker.
    pub fn output_file_name(&self, input_name: &str) -> String {
        if self.input_marker.is_empty() {
            return input_name.to_string();
        }
        input_name.replace(&self.input_marker, &self.output_marker)
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cardnorm")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// A missing or unreadable file falls back to the defaults.
fn load_settings_from(path: &Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| NormError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
