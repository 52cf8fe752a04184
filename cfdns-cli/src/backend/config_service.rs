//! Configuration service
//!
//! Layers, later wins: built-in defaults, the JSON config file, then environment
//! variables. The token and zone id may still be missing afterwards; the
//! credential service asks for them on the console.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cfdns_provider::{CF_API_BASE, DEFAULT_TTL};
use serde::Deserialize;

/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "CFDNS_CONFIG";
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
pub const ENV_ZONE_ID: &str = "CLOUDFLARE_ZONE_ID";
pub const ENV_DEFAULT_TTL: &str = "CFDNS_DEFAULT_TTL";

/// Effective settings for one session.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub zone_id: Option<String>,
    pub api_token: Option<String>,
    /// TTL used when the add form's TTL prompt is left blank.
    pub default_ttl: u32,
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zone_id: None,
            api_token: None,
            default_ttl: DEFAULT_TTL,
            api_base_url: CF_API_BASE.to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("zone_id", &self.zone_id)
            .field(
                "api_token",
                &self.api_token.as_deref().map(cfdns_provider::mask_secret),
            )
            .field("default_ttl", &self.default_ttl)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// On-disk shape of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
struct FileConfig {
    zone_id: Option<String>,
    api_token: Option<String>,
    default_ttl: Option<u32>,
    api_base_url: Option<String>,
}

impl AppConfig {
    fn merge_file(&mut self, file: FileConfig) {
        if let Some(zone_id) = non_blank(file.zone_id) {
            self.zone_id = Some(zone_id);
        }
        if let Some(token) = non_blank(file.api_token) {
            self.api_token = Some(token);
        }
        if let Some(ttl) = file.default_ttl {
            self.default_ttl = ttl;
        }
        if let Some(url) = non_blank(file.api_base_url) {
            self.api_base_url = url;
        }
    }

    fn merge_env(&mut self, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(token) = non_blank(env(ENV_API_TOKEN)) {
            self.api_token = Some(token);
        }
        if let Some(zone_id) = non_blank(env(ENV_ZONE_ID)) {
            self.zone_id = Some(zone_id);
        }
        if let Some(ttl) = non_blank(env(ENV_DEFAULT_TTL)) {
            self.default_ttl = ttl
                .parse()
                .with_context(|| format!("{ENV_DEFAULT_TTL}='{ttl}' is not a valid TTL"))?;
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Source of the session configuration.
pub trait ConfigService: Send + Sync {
    fn load(&self) -> Result<AppConfig>;
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the JSON config file and the process environment.
pub struct LocalConfigService {
    path: Option<PathBuf>,
    env: EnvLookup,
}

impl LocalConfigService {
    /// Config file from `$CFDNS_CONFIG`, else `<config dir>/cfdns/config.json`.
    pub fn new() -> Self {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .or_else(default_config_file);
        Self {
            path,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    #[cfg(test)]
    pub fn with_sources(
        path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            path,
            env: Box::new(env),
        }
    }

    fn read_file(path: &Path) -> Result<Option<FileConfig>> {
        if !path.exists() {
            tracing::debug!("Config file does not exist: {:?}", path);
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let file = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(Some(file))
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.path {
            if let Some(file) = Self::read_file(path)? {
                tracing::debug!("Loaded config file {:?}", path);
                config.merge_file(file);
            }
        }

        config.merge_env(&*self.env)?;
        Ok(config)
    }
}

fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cfdns").join("config.json"))
}
