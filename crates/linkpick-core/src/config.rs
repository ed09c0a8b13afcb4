use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::browse::DEFAULT_PER_PAGE;
use crate::conversion::ConversionPolicy;

/// Browse listing settings (optional `[chooser]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserConfig {
    /// Children shown per browse page.
    pub per_page: usize,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Global configuration loaded from `~/.config/linkpick/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkpickConfig {
    /// How URLs matching an internal page are handled: "disabled", "exact", "confirm" or "default".
    #[serde(default)]
    pub external_link_conversion: ConversionPolicy,
    /// Path prefix under which pages are served (e.g. "site" or "en/site"); empty for "/".
    #[serde(default)]
    pub serving_prefix: String,
    /// Host names of this site. Absolute URLs on other hosts are never converted. Empty = the site map's hostname.
    #[serde(default)]
    pub site_hosts: Vec<String>,
    /// Site map used when no `--site` is given on the command line.
    #[serde(default)]
    pub site_map: Option<PathBuf>,
    #[serde(default)]
    pub chooser: ChooserConfig,
}

impl Default for LinkpickConfig {
    fn default() -> Self {
        Self {
            external_link_conversion: ConversionPolicy::Default,
            serving_prefix: String::new(),
            site_hosts: Vec::new(),
            site_map: None,
            chooser: ChooserConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkpick")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkpickConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkpickConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<LinkpickConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LinkpickConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = LinkpickConfig::default();
        assert_eq!(cfg.external_link_conversion, ConversionPolicy::Default);
        assert_eq!(cfg.serving_prefix, "");
        assert!(cfg.site_hosts.is_empty());
        assert_eq!(cfg.chooser.per_page, 25);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkpickConfig {
            external_link_conversion: ConversionPolicy::Confirm,
            serving_prefix: "site".to_string(),
            site_hosts: vec!["localhost".to_string()],
            site_map: Some(PathBuf::from("/srv/site.toml")),
            chooser: ChooserConfig { per_page: 10 },
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkpickConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: LinkpickConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, LinkpickConfig::default());
    }

    #[test]
    fn legacy_empty_policy_disables_conversion() {
        let cfg: LinkpickConfig = toml::from_str(r#"external_link_conversion = """#).unwrap();
        assert_eq!(cfg.external_link_conversion, ConversionPolicy::Disabled);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            external_link_conversion = "exact"
            serving_prefix = "en/site"
            site_hosts = ["localhost", "example.com"]

            [chooser]
            per_page = 50
        "#;
        let cfg: LinkpickConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.external_link_conversion, ConversionPolicy::Exact);
        assert_eq!(cfg.serving_prefix, "en/site");
        assert_eq!(cfg.site_hosts.len(), 2);
        assert_eq!(cfg.chooser.per_page, 50);
        assert!(cfg.site_map.is_none());
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(toml::from_str::<LinkpickConfig>(r#"external_link_conversion = "maybe""#).is_err());
    }

    #[test]
    fn load_from_path() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"external_link_conversion = \"confirm\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.external_link_conversion, ConversionPolicy::Confirm);
    }

    #[test]
    fn load_from_missing_path_fails() {
        let err = load_from(Path::new("/nonexistent/linkpick/config.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read config"));
    }
}
