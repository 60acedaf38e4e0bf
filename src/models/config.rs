use hue_engine::{DeltaEMetric, EngineError, ExtractOptions, SortKey};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::services::palette_source::{PaletteSourceConfig, DEFAULT_CDN_URLS};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for palette extraction
    pub extraction: ExtractionConfig,

    /// Where the reference palette comes from
    pub palette: PaletteConfig,

    /// HTTP server settings
    pub server: ServerConfig,
}

/// Extraction defaults, overridable per request or per CLI call
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of dominant colors
    pub k: usize,

    /// Maximum number of pixels fed to k-means
    pub sample_cap: usize,

    /// Longest image side after downscaling
    pub max_side: usize,

    /// Random seed for sampling and seeding
    pub seed: u64,

    /// "de2000" or "de76"
    pub metric: String,

    /// "weight", "hue" or "luminance"
    pub sort: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        let options = ExtractOptions::default();
        Self {
            k: options.k,
            sample_cap: options.sample_cap,
            max_side: options.max_side,
            seed: options.seed,
            metric: DeltaEMetric::default().as_str().to_string(),
            sort: SortKey::default().as_str().to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Engine options for these settings.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .k(self.k)
            .sample_cap(self.sample_cap)
            .max_side(self.max_side)
            .seed(self.seed)
    }

    pub fn metric(&self) -> Result<DeltaEMetric, EngineError> {
        self.metric.parse()
    }

    pub fn sort(&self) -> Result<SortKey, EngineError> {
        self.sort.parse()
    }
}

/// Reference palette settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    /// CDN candidates for Tailwind's `colors.js`, tried in order
    pub urls: Vec<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Local JSON palette (`family -> shade -> hex`); replaces the download
    pub file: Option<PathBuf>,

    /// Skip the download and use the built-in table
    pub offline: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_CDN_URLS.iter().map(|u| u.to_string()).collect(),
            timeout_secs: 6,
            file: None,
            offline: false,
        }
    }
}

impl PaletteConfig {
    /// Download settings for the palette source.
    pub fn source(&self) -> PaletteSourceConfig {
        PaletteSourceConfig {
            urls: self.urls.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: String,

    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Without a path, or when the file cannot be read or parsed, the
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        k = config.extraction.k,
                        metric = %config.extraction.metric,
                        offline = config.palette.offline,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
