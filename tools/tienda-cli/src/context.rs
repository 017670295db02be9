//! Shared command context.

use anyhow::{Context as _, Result};

use tienda_commerce::catalog::Catalog;
use tienda_storefront::data::demo_catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Everything a command needs: config, catalog, and output handles.
pub struct Context {
    /// Loaded configuration.
    pub config: CliConfig,
    /// The catalog the commands run against.
    pub catalog: Catalog,
    /// Output formatter.
    pub output: Output,
}

impl Context {
    /// Load config and catalog.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = CliConfig::load(config_path)?;

        let catalog = match &config.catalog {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading catalog {}", path.display()))?;
                let catalog = Catalog::from_json(&raw)
                    .with_context(|| format!("parsing catalog {}", path.display()))?;
                output.debug(&format!(
                    "loaded {} products from {}",
                    catalog.len(),
                    path.display()
                ));
                catalog
            }
            None => {
                output.debug("using built-in demo catalog");
                demo_catalog()
            }
        };

        Ok(Self {
            config,
            catalog,
            output,
        })
    }
}
