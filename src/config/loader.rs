//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/warroom/config.toml)
//! 3. Project config (.warroom/config.toml)
//! 4. Environment variables (WARROOM_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::types::Config;
use crate::types::{Result, ResultExt, WarRoomError};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. WARROOM_WEBHOOK_URL -> webhook.url
        figment = figment.merge(Env::prefixed("WARROOM_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| WarRoomError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/warroom/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("warroom"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".warroom/config.toml")
    }

    /// Render the effective configuration as TOML or JSON
    pub fn render_config(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).config_context("Failed to render config")
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            WarRoomError::Config("Cannot determine global config directory".to_string())
        })?;

        fs::create_dir_all(&global_dir)?;

        let config_path = global_dir.join("config.toml");
        if !config_path.exists() || force {
            fs::write(&config_path, Self::default_global_config())?;
            info!("Created global config: {}", config_path.display());
        } else {
            info!("Global config exists: {}", config_path.display());
        }

        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Generate default global config content (TOML)
    fn default_global_config() -> String {
        r#"# warroom Global Configuration
# Project settings in .warroom/config.toml override these.

version = "1.0"

# Incoming webhook that receives the war-room announcement.
# Can also be set with WARROOM_WEBHOOK_URL.
[webhook]
# url = "https://hooks.slack.com/services/..."

[services]
# "before-classification" or "classified"
resolution = "before-classification"

[services.links]
vrf = "https://meet.google.com/bcc-cqid-okb"
feeds = "https://meet.google.com/jsg-cvtz-sxe"
keepers = "https://meet.google.com/nqa-mavr-qsr"
other = "https://meet.google.com/hqh-vcbr-mtx"

[editor]
# command = "code --wait"
# scratch_file = "/tmp/warroom-alert.txt"
"#
        .to_string()
    }
}
