//! Reference palette loading.
//!
//! The matcher binds every extracted color to a Tailwind token. The token
//! set is downloaded from a CDN copy of Tailwind's `colors.js`, read from a
//! local JSON file, or taken from a small built-in table when neither is
//! available.

use hue_engine::{EngineError, ReferencePalette};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::PaletteConfig;

/// `family -> [(shade, hex)]`, in source order.
pub type PaletteTable = Vec<(String, Vec<(u16, String)>)>;

/// CDN copies of Tailwind v3's color module, tried in order.
pub const DEFAULT_CDN_URLS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/tailwindcss@3.4.10/src/public/colors.js",
    "https://unpkg.com/tailwindcss@3.4.10/src/public/colors.js",
    "https://raw.githubusercontent.com/tailwindlabs/tailwindcss/master/src/public/colors.js",
];

/// Aliases kept by Tailwind for compatibility; they duplicate other families.
const DEPRECATED_FAMILIES: [&str; 5] = ["lightBlue", "warmGray", "trueGray", "coolGray", "blueGray"];

/// Built-in subset used when no download succeeds: shades 200, 400 and 600.
pub const FALLBACK_TAILWIND: [(&str, [&str; 3]); 22] = [
    ("slate", ["#e2e8f0", "#94a3b8", "#475569"]),
    ("gray", ["#e5e7eb", "#9ca3af", "#4b5563"]),
    ("zinc", ["#e4e4e7", "#a1a1aa", "#52525b"]),
    ("neutral", ["#e5e5e5", "#a3a3a3", "#525252"]),
    ("stone", ["#e7e5e4", "#a8a29e", "#57534e"]),
    ("red", ["#fecaca", "#f87171", "#dc2626"]),
    ("orange", ["#fed7aa", "#fb923c", "#ea580c"]),
    ("amber", ["#fde68a", "#f59e0b", "#d97706"]),
    ("yellow", ["#fef08a", "#facc15", "#ca8a04"]),
    ("lime", ["#d9f99d", "#84cc16", "#65a30d"]),
    ("green", ["#bbf7d0", "#22c55e", "#16a34a"]),
    ("emerald", ["#a7f3d0", "#10b981", "#059669"]),
    ("teal", ["#99f6e4", "#14b8a6", "#0d9488"]),
    ("cyan", ["#a5f3fc", "#22d3ee", "#0891b2"]),
    ("sky", ["#bae6fd", "#38bdf8", "#0284c7"]),
    ("blue", ["#bfdbfe", "#60a5fa", "#2563eb"]),
    ("indigo", ["#c7d2fe", "#818cf8", "#4f46e5"]),
    ("violet", ["#ddd6fe", "#a78bfa", "#7c3aed"]),
    ("purple", ["#e9d5ff", "#c084fc", "#9333ea"]),
    ("fuchsia", ["#fad6ff", "#e879f9", "#c026d3"]),
    ("pink", ["#fbcfe8", "#f472b6", "#db2777"]),
    ("rose", ["#fecdd3", "#fb7185", "#e11d48"]),
];

const FALLBACK_SHADES: [u16; 3] = [200, 400, 600];

/// Download settings
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSourceConfig {
    /// Candidate URLs, first success wins
    pub urls: Vec<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for PaletteSourceConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_CDN_URLS.iter().map(|u| u.to_string()).collect(),
            timeout: Duration::from_secs(6),
        }
    }
}

/// Where the loaded reference palette came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOrigin {
    /// Downloaded from this URL
    Remote { url: String },
    /// The built-in table
    Fallback,
    /// Read from a local JSON file
    File { path: PathBuf },
}

impl PaletteOrigin {
    /// Short machine label: "remote", "fallback" or "file".
    pub fn kind(&self) -> &'static str {
        match self {
            PaletteOrigin::Remote { .. } => "remote",
            PaletteOrigin::Fallback => "fallback",
            PaletteOrigin::File { .. } => "file",
        }
    }

    /// URL or path, if any.
    pub fn location(&self) -> Option<String> {
        match self {
            PaletteOrigin::Remote { url } => Some(url.clone()),
            PaletteOrigin::Fallback => None,
            PaletteOrigin::File { path } => Some(path.display().to_string()),
        }
    }
}

impl fmt::Display for PaletteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location() {
            Some(location) => write!(f, "{} ({})", self.kind(), location),
            None => f.write_str(self.kind()),
        }
    }
}

#[derive(Debug, Error)]
pub enum PaletteSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Could not parse colors.js: {0}")]
    Parse(String),

    #[error("Failed to read palette file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid palette file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid palette: {0}")]
    Engine(#[from] EngineError),
}

/// The built-in table as a [`PaletteTable`].
pub fn fallback_table() -> PaletteTable {
    FALLBACK_TAILWIND
        .iter()
        .map(|(family, hexes)| {
            let shades = FALLBACK_SHADES
                .iter()
                .zip(hexes.iter())
                .map(|(&shade, hex)| (shade, hex.to_string()))
                .collect();
            (family.to_string(), shades)
        })
        .collect()
}

/// Parse Tailwind's `colors.js` module into a table.
///
/// Only `family: { shade: '#hex', ... }` entries are kept; plain string
/// entries such as `black` or `transparent`, getters and the deprecated
/// aliases are skipped.
pub fn parse_colors_js(source: &str) -> Result<PaletteTable, PaletteSourceError> {
    let export = Regex::new(r"(?:module\.exports\s*=|export\s+default)\s*\{")
        .map_err(|e| PaletteSourceError::Parse(e.to_string()))?;
    let family = Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z0-9]*)\s*:\s*\{([^{}]*)\}")
        .map_err(|e| PaletteSourceError::Parse(e.to_string()))?;
    let shade = Regex::new(r#"(\d+)\s*:\s*['"](#[0-9A-Fa-f]{3,8})['"]"#)
        .map_err(|e| PaletteSourceError::Parse(e.to_string()))?;

    let start = export
        .find(source)
        .ok_or_else(|| PaletteSourceError::Parse("no exported object literal".to_string()))?
        .end();
    let body = &source[start..];

    let mut table = PaletteTable::new();
    for captures in family.captures_iter(body) {
        let name = &captures[1];
        if DEPRECATED_FAMILIES.contains(&name) {
            continue;
        }
        let shades: Vec<(u16, String)> = shade
            .captures_iter(&captures[2])
            .filter_map(|s| Some((s[1].parse::<u16>().ok()?, s[2].to_string())))
            .collect();
        if shades.is_empty() {
            continue;
        }
        table.push((name.to_string(), shades));
    }

    if table.is_empty() {
        return Err(PaletteSourceError::Parse("no color families found".to_string()));
    }
    Ok(table)
}

/// Parse a JSON palette file: `{ "family": { "shade": "#hex" } }`.
pub fn parse_palette_json(source: &str) -> Result<PaletteTable, PaletteSourceError> {
    let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(source)?;
    raw.into_iter()
        .map(|(family, shades)| {
            let mut shades = shades
                .into_iter()
                .map(|(shade, hex)| {
                    let shade = shade.trim().parse::<u16>().map_err(|_| {
                        PaletteSourceError::Parse(format!("{family}: shade {shade:?} is not a number"))
                    })?;
                    Ok((shade, hex))
                })
                .collect::<Result<Vec<_>, PaletteSourceError>>()?;
            shades.sort_by_key(|(shade, _)| *shade);
            Ok((family, shades))
        })
        .collect()
}

async fn fetch_one(client: &reqwest::Client, url: &str) -> Result<PaletteTable, PaletteSourceError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PaletteSourceError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    parse_colors_js(&body)
}

/// Download Tailwind's palette, trying each candidate URL in turn.
///
/// Never fails: when every candidate errors, a warning is logged and the
/// built-in table is returned with [`PaletteOrigin::Fallback`].
pub async fn fetch_tailwind_palette(config: &PaletteSourceConfig) -> (PaletteTable, PaletteOrigin) {
    let client = match reqwest::Client::builder().timeout(config.timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(%e, "Failed to build HTTP client, using built-in palette");
            return (fallback_table(), PaletteOrigin::Fallback);
        }
    };

    let mut last_error = None;
    for url in &config.urls {
        tracing::debug!(url = %url, "Fetching Tailwind palette");
        match fetch_one(&client, url).await {
            Ok(table) => {
                return (table, PaletteOrigin::Remote { url: url.clone() });
            }
            Err(e) => {
                tracing::debug!(url = %url, %e, "Palette candidate failed");
                last_error = Some(e);
            }
        }
    }

    tracing::warn!(
        candidates = config.urls.len(),
        last_error = ?last_error.map(|e| e.to_string()),
        "Could not download Tailwind palette, using built-in subset"
    );
    (fallback_table(), PaletteOrigin::Fallback)
}

fn load_file(path: &Path) -> Result<ReferencePalette, PaletteSourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| PaletteSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReferencePalette::from_table(parse_palette_json(&content)?)?)
}

fn fallback_palette() -> Result<ReferencePalette, PaletteSourceError> {
    Ok(ReferencePalette::from_table(fallback_table())?)
}

/// Resolve the reference palette for the given settings.
///
/// A configured file is authoritative and its errors are returned. Otherwise
/// the palette is downloaded unless `offline` is set; a downloaded table
/// that does not build into a palette is replaced by the built-in one.
pub async fn load_reference_palette(
    config: &PaletteConfig,
) -> Result<(Arc<ReferencePalette>, PaletteOrigin), PaletteSourceError> {
    let (palette, origin) = if let Some(path) = &config.file {
        (load_file(path)?, PaletteOrigin::File { path: path.clone() })
    } else if config.offline {
        (fallback_palette()?, PaletteOrigin::Fallback)
    } else {
        let (table, origin) = fetch_tailwind_palette(&config.source()).await;
        match ReferencePalette::from_table(table) {
            Ok(palette) => (palette, origin),
            Err(e) => {
                tracing::warn!(%e, %origin, "Downloaded palette is unusable, using built-in subset");
                (fallback_palette()?, PaletteOrigin::Fallback)
            }
        }
    };

    tracing::info!(entries = palette.len(), origin = %origin, "Reference palette loaded");
    Ok((Arc::new(palette), origin))
}
