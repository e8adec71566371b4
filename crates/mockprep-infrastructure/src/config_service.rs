//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`, writing the defaults on
//! first use, and layers environment overrides on top.

use std::sync::{Arc, RwLock};

use mockprep_core::config::RootConfig;
use mockprep_core::error::Result;
use tracing::{debug, info};

use crate::paths::PrepPaths;

/// Overrides `api.base_url`.
pub const ENV_API_URL: &str = "MOCKPREP_API_URL";
/// Overrides `log_level`. Accepts any tracing filter directive.
pub const ENV_LOG: &str = "MOCKPREP_LOG";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: PrepPaths,
    /// Cached configuration, environment overrides included.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: PrepPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn paths(&self) -> &PrepPaths {
        &self.paths
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.load_config()?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Writes `config` to `config.toml` and drops the cache.
    pub fn save(&self, config: &RootConfig) -> Result<()> {
        let path = self.paths.config_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(config)?)?;
        debug!(path = %path.display(), "configuration saved");
        self.invalidate_cache();
        Ok(())
    }

    fn load_config(&self) -> Result<RootConfig> {
        let path = self.paths.config_file();
        if !path.exists() {
            let default_config = RootConfig::default();
            self.save(&default_config)?;
            info!(path = %path.display(), "wrote default configuration");
            return Ok(default_config);
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// Applies `MOCKPREP_*` overrides read through `lookup`. Blank values are
/// ignored.
pub fn apply_env_overrides(config: &mut RootConfig, lookup: impl Fn(&str) -> Option<String>) {
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    if let Some(url) = value(ENV_API_URL) {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(level) = value(ENV_LOG) {
        config.log_level = level;
    }
}
