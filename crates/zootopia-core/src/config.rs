use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default lookup endpoint; queried as `{api_url}?name={animal}`.
pub const DEFAULT_API_URL: &str = "https://api.api-ninjas.com/v1/animals";

/// Token in the HTML template that the generated content replaces.
pub const DEFAULT_PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// Global configuration loaded from `~/.config/zootopia/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZooConfig {
    /// Name-filtered lookup endpoint (without query string).
    pub api_url: String,
    /// Environment variable holding the API key (sent as `X-Api-Key`).
    pub api_key_env: String,
    /// HTML template containing the placeholder token.
    pub template_path: PathBuf,
    /// Generated page; overwritten on every run.
    pub output_path: PathBuf,
    /// Placeholder token replaced by the generated cards.
    pub placeholder: String,
    /// Offer the interactive skin-type filter after each lookup.
    pub filter_by_skin_type: bool,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key_env: "API_KEY".to_string(),
            template_path: PathBuf::from("animals_template.html"),
            output_path: PathBuf::from("animals.html"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            filter_by_skin_type: false,
        }
    }
}

impl ZooConfig {
    /// Reads the API key from the process environment, loading `.env` first.
    ///
    /// Returns None when the variable is unset or blank; the lookup is then sent
    /// without a key and the service's rejection surfaces as a fetch failure.
    pub fn api_key(&self) -> Option<String> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("could not load .env: {}", e);
            }
        }
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Some(key.trim().to_string()),
            _ => {
                tracing::warn!("{} is not set; requests will be unauthenticated", self.api_key_env);
                None
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("zootopia")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ZooConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but with an explicit path (used by tests and `--config`-style callers).
pub fn load_or_init_at(path: &Path) -> Result<ZooConfig> {
    if !path.exists() {
        let default_cfg = ZooConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ZooConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
