use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Substring that identifies the wish history API among all cached URLs.
pub const DEFAULT_URL_FILTER: &str = "gacha_info/api/getGachaLog";

/// Global configuration loaded from `~/.config/wishlinks/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlinksConfig {
    /// Directory containing the `Genshin Impact` install; used when `--root` is not given.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Only URLs containing this substring are considered.
    #[serde(default = "default_url_filter")]
    pub url_filter: String,
}

fn default_url_filter() -> String {
    DEFAULT_URL_FILTER.to_string()
}

impl Default for WishlinksConfig {
    fn default() -> Self {
        Self {
            root: None,
            url_filter: default_url_filter(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wishlinks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WishlinksConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WishlinksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WishlinksConfig = toml::from_str(&data)?;
    Ok(cfg)
}
