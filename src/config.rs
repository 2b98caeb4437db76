use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("toolshelf")
                .join("data"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Tools shown per category on the sections view
    pub section_preview: usize,
    /// Default size of `top` listings
    pub top_rated_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            section_preview: 3,
            top_rated_limit: 3,
        }
    }
}

impl Config {
    /// Load the explicit file if given, otherwise the first readable
    /// candidate, otherwise defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::candidates() {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Skipping config {}: {:#}", candidate.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// `<config_dir>/toolshelf/toolshelf.yml`, then `./toolshelf.yml`
    fn candidates() -> Vec<PathBuf> {
        let project = env!("CARGO_PKG_NAME");
        let file_name = format!("{}.yml", project);
        let mut candidates: Vec<PathBuf> = dirs::config_dir()
            .map(|dir| dir.join(project).join(&file_name))
            .into_iter()
            .collect();
        candidates.push(PathBuf::from(file_name));
        candidates
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
