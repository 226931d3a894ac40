//! Configuration management for car-rental
//!
//! Config stored at: ~/.config/car-rental/config.json

use std::path::{Path, PathBuf};

use rental_infra::persistence::WriteMode;
use rental_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding cars.csv, customers.csv and bookings.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Rewrite backing files through a temp file and rename
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_format: OutputFormat::default(),
            atomic_writes: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("car-rental");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::Truncate
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Car Rental Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Data dir:       {}", self.data_dir.display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Atomic writes:  {}", self.atomic_writes)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
