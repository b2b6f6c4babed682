use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration read from `~/.config/faviqon/config.toml`.
///
/// Every field has a default, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviqonConfig {
    /// Maximum number of favicon fetches in flight at once.
    pub max_concurrent_fetches: usize,
    /// Per-request timeout in seconds (connect + TLS + body).
    pub request_timeout_secs: u64,
    /// Skip TLS certificate and hostname verification.
    pub accept_invalid_certs: bool,
    /// Optional redirect hop limit; if missing, libcurl's default applies.
    pub max_redirections: Option<u32>,
}

impl Default for FaviqonConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 20,
            request_timeout_secs: 5,
            accept_invalid_certs: true,
            max_redirections: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("faviqon")?;
    Ok(xdg_dirs.get_config_home().join("faviqon").join("config.toml"))
}

/// Load configuration from the XDG config dir. A missing file means defaults;
/// nothing is ever written back.
pub fn load() -> Result<FaviqonConfig> {
    let path = config_path()?;
    load_from(&path)
}

/// Load configuration from an explicit path, falling back to defaults if absent.
pub fn load_from(path: &Path) -> Result<FaviqonConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(FaviqonConfig::default());
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FaviqonConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    if cfg.max_concurrent_fetches == 0 {
        anyhow::bail!(
            "{}: max_concurrent_fetches must be at least 1",
            path.display()
        );
    }
    // libcurl treats a zero timeout as "never time out".
    if cfg.request_timeout_secs == 0 {
        anyhow::bail!(
            "{}: request_timeout_secs must be at least 1",
            path.display()
        );
    }
    Ok(cfg)
}
