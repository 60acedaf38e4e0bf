pub mod config;

pub use config::{AppConfig, ExtractionConfig, PaletteConfig, ServerConfig};
