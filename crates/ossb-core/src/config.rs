use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/ossb/config.toml`.
///
/// Timeouts left unset fall back to libcurl defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OssbConfig {
    /// Connect timeout in seconds for the listing GET.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds for the listing GET.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Follow HTTP redirects when fetching a listing.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Redirect limit when `follow_redirects` is on.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional User-Agent header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for OssbConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: None,
            timeout_secs: None,
            follow_redirects: default_follow_redirects(),
            max_redirections: default_max_redirections(),
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ossb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OssbConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<OssbConfig> {
    if !path.exists() {
        let default_cfg = OssbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: OssbConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
