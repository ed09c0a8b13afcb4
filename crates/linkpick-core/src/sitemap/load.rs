//! Reading site maps from TOML.

use anyhow::{Context, Result};
use std::path::Path;

use super::{SiteMap, SiteMapFile};

impl SiteMap {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let file: SiteMapFile = toml::from_str(data).context("parse site map TOML")?;
        Self::from_file(file)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read site map: {}", path.display()))?;
        let map = Self::from_toml_str(&data)
            .with_context(|| format!("load site map: {}", path.display()))?;
        tracing::debug!(path = %path.display(), pages = map.order.len(), "site map loaded");
        Ok(map)
    }
}
