//! Incident Record Types
//!
//! The structured form of one alert dump. Built fresh per dump by the
//! extractor, completed by the classifier, then only read by renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service category inferred from the alert name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Feeds,
    Vrf,
    Keepers,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [Self::Feeds, Self::Vrf, Self::Keepers, Self::Other];

    /// Lower-case key used in config and the link table
    pub fn key(&self) -> &'static str {
        match self {
            Self::Feeds => "feeds",
            Self::Vrf => "vrf",
            Self::Keepers => "keepers",
            Self::Other => "other",
        }
    }

    /// Capitalized name shown in messages; `vrf` is all caps
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Feeds => "Feeds",
            Self::Vrf => "VRF",
            Self::Keepers => "Keepers",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feeds" => Ok(Self::Feeds),
            "vrf" => Ok(Self::Vrf),
            "keepers" => Ok(Self::Keepers),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown service category: {}. Valid values: feeds, vrf, keepers, other",
                s
            )),
        }
    }
}

/// Where the summary text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// Taken from the first `- summary = ` line
    #[default]
    Label,
    /// No usable summary line; every line of the dump joined together
    Fallback,
}

/// Structured incident built from one alert dump
///
/// Optional fields use the empty string for "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub summary: String,
    pub summary_source: SummarySource,

    pub alert_name: String,
    pub network_name: String,
    pub contract: String,
    pub contract_address: String,
    pub key_hash: String,
    /// No extraction rule fills this; kept because the VRF resolver prefers it
    pub key_underscore_hash: String,
    pub registry_address: String,

    /// `None` until the classifier recognises the alert name
    pub service_category: Option<ServiceCategory>,
    pub communication_link: String,
    pub incident_link: String,
}

impl IncidentRecord {
    /// Empty record carrying only the operator-supplied incident link
    pub fn new(incident_link: impl Into<String>) -> Self {
        Self {
            incident_link: incident_link.into(),
            ..Default::default()
        }
    }

    /// Service display name, or `""` when unclassified
    pub fn service_display(&self) -> &'static str {
        self.service_category
            .map(|c| c.display_name())
            .unwrap_or_default()
    }

    pub fn used_fallback_summary(&self) -> bool {
        self.summary_source == SummarySource::Fallback
    }
}

/// Category-specific identifier surfaced next to the generic alert fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerDetail {
    pub label: &'static str,
    pub value: String,
}

impl ExplorerDetail {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    /// The (empty, empty) pair
    pub fn none() -> Self {
        Self::default()
    }

    /// A detail is shown when its label is set, even if the value is empty
    pub fn is_present(&self) -> bool {
        !self.label.is_empty()
    }
}
