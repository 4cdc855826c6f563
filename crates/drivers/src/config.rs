use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use retro_grain_domain::FilterPreset;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "retro-grain.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_preset: FilterPreset,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_preset: FilterPreset::Retro,
            output_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `explicit` if given, else `retro-grain.toml` in the working
    /// directory. Only the implicit file may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        match fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text)
                .map_err(|error| format!("invalid config {}: {error}", path.display())),
            Err(error) if error.kind() == ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(error) => Err(format!("failed to read config {}: {error}", path.display())),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn output_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_dir.join(path)
        }
    }
}
