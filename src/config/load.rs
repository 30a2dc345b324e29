use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::{CompressConfig, SlicerConfig};
use crate::cli::CompressionLevel;

/// A loaded configuration file with its associated directory.
///
/// The output directory in the config is relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SlicerConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        Self::from_json(&content, path)
    }

    fn from_json(content: &str, path: &Path) -> Result<Self> {
        let config: SlicerConfig = serde_json::from_str(content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }

    /// Compression level requested by the config, if any.
    pub fn compression(&self) -> Result<Option<CompressionLevel>> {
        match &self.config.compress {
            None => Ok(None),
            Some(CompressConfig::Level(n)) if *n <= 6 => Ok(Some(CompressionLevel::Level(*n))),
            Some(CompressConfig::Max(s)) if s.eq_ignore_ascii_case("max") => {
                Ok(Some(CompressionLevel::Max))
            }
            Some(other) => Err(anyhow::anyhow!(
                "invalid compress value {:?} in config file. Valid values: 0-6, \"max\"",
                other
            )),
        }
    }
}
