//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/warroom/) and project (.warroom/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::links;
use crate::types::{Result, ServiceCategory, WarRoomError, is_url};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Notification endpoint
    pub webhook: WebhookConfig,

    /// Service categories and their communication links
    pub services: ServicesConfig,

    /// Scratch-file editing for alert dumps
    pub editor: EditorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            webhook: WebhookConfig::default(),
            services: ServicesConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

impl Config {
    /// Validate that configured URLs are usable.
    /// Returns `WarRoomError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.webhook.url
            && !is_url(url)
        {
            return Err(WarRoomError::Config(
                "webhook.url must be an absolute URL with a host".to_string(),
            ));
        }

        for category in ServiceCategory::ALL {
            let link = self.services.links.get(category);
            // Per-category links may be blank (falls back to `other`)
            let blank_ok = category != ServiceCategory::Other && link.is_empty();
            if !blank_ok && !is_url(link) {
                return Err(WarRoomError::Config(format!(
                    "services.links.{} must be a URL, got '{}'",
                    category.key(),
                    link
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Webhook Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Incoming-webhook URL (also WARROOM_WEBHOOK_URL)
    pub url: Option<String>,
}

// =============================================================================
// Services Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// When the communication link is looked up relative to classification
    pub resolution: LinkResolution,

    /// Default communication link per category
    pub links: ServiceLinks,
}

/// Which category the communication link is resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LinkResolution {
    /// Look up the category the record had before classification ran.
    /// Fresh records are unclassified, so this always yields the `other` link.
    #[default]
    BeforeClassification,
    /// Look up the category the classifier just assigned
    Classified,
}

impl std::fmt::Display for LinkResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkResolution::BeforeClassification => write!(f, "before-classification"),
            LinkResolution::Classified => write!(f, "classified"),
        }
    }
}

impl std::str::FromStr for LinkResolution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before-classification" => Ok(LinkResolution::BeforeClassification),
            "classified" => Ok(LinkResolution::Classified),
            _ => Err(format!(
                "Unknown link resolution: {}. Valid values: before-classification, classified",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLinks {
    pub vrf: String,
    pub feeds: String,
    pub keepers: String,
    pub other: String,
}

impl ServiceLinks {
    pub fn get(&self, category: ServiceCategory) -> &str {
        match category {
            ServiceCategory::Feeds => &self.feeds,
            ServiceCategory::Vrf => &self.vrf,
            ServiceCategory::Keepers => &self.keepers,
            ServiceCategory::Other => &self.other,
        }
    }
}

impl Default for ServiceLinks {
    fn default() -> Self {
        Self {
            vrf: links::VRF.to_string(),
            feeds: links::FEEDS.to_string(),
            keepers: links::KEEPERS.to_string(),
            other: links::OTHER.to_string(),
        }
    }
}

// =============================================================================
// Editor Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command; falls back to $EDITOR, then a platform default
    pub command: Option<String>,

    /// Scratch file the alert dump is pasted into
    pub scratch_file: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: None,
            scratch_file: std::env::temp_dir().join("warroom-alert.txt"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(
            config.services.resolution,
            LinkResolution::BeforeClassification
        );
        assert_eq!(config.services.links.other, links::OTHER);
        assert!(config.webhook.url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_link_resolution() {
        assert_eq!(
            LinkResolution::BeforeClassification.to_string(),
            "before-classification"
        );
        assert_eq!(
            "classified".parse::<LinkResolution>().unwrap(),
            LinkResolution::Classified
        );
        assert!("after".parse::<LinkResolution>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_webhook() {
        let mut config = Config::default();
        config.webhook.url = Some("hooks.slack.com/services/T0".to_string());
        assert!(matches!(config.validate(), Err(WarRoomError::Config(_))));
    }

    #[test]
    fn test_validate_links() {
        let mut config = Config::default();
        config.services.links.vrf = String::new();
        assert!(config.validate().is_ok());

        config.services.links.feeds = "jsg-cvtz-sxe".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.services.links.other = String::new();
        assert!(config.validate().is_err());
    }
}
