//! CLI configuration.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "tienda.toml";

/// Configuration for the CLI storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Store name shown in headers.
    pub store_name: String,
    /// WhatsApp contact number for the "Contactar" action.
    pub whatsapp: String,
    /// Path to a catalog JSON file. When unset the built-in demo catalog
    /// is used.
    pub catalog: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_name: "Tienda M\u{f3}vil".to_string(),
            whatsapp: "+57 300 000 0000".to_string(),
            catalog: None,
        }
    }
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist; the default `tienda.toml` is optional
    /// and falls back to the built-in defaults when absent.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: CliConfig = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
