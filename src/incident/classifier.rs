//! Service Classification
//!
//! Infers the service category from the alert name and resolves the
//! communication link from an immutable [`ServiceCategoryTable`].

use std::collections::HashMap;

use tracing::debug;

use crate::config::{LinkResolution, ServiceLinks};
use crate::constants::{keywords, links};
use crate::types::{IncidentRecord, ServiceCategory};

// =============================================================================
// Service Category Table
// =============================================================================

/// Read-only mapping of service category to its default communication link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCategoryTable {
    links: HashMap<ServiceCategory, String>,
}

impl ServiceCategoryTable {
    pub fn new(entries: impl IntoIterator<Item = (ServiceCategory, String)>) -> Self {
        Self {
            links: entries.into_iter().collect(),
        }
    }

    /// Link for `category`; missing and empty entries are both `None`
    pub fn link_for(&self, category: ServiceCategory) -> Option<&str> {
        self.links
            .get(&category)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }

    /// The generic link every record falls back to
    pub fn other_link(&self) -> &str {
        self.link_for(ServiceCategory::Other).unwrap_or(links::OTHER)
    }
}

impl Default for ServiceCategoryTable {
    fn default() -> Self {
        Self::from(&ServiceLinks::default())
    }
}

impl From<&ServiceLinks> for ServiceCategoryTable {
    fn from(config: &ServiceLinks) -> Self {
        Self::new(
            ServiceCategory::ALL
                .into_iter()
                .map(|category| (category, config.get(category).to_string())),
        )
    }
}

// =============================================================================
// Classifier
// =============================================================================

/// Keyword-based service classifier
#[derive(Debug, Clone, Default)]
pub struct ServiceClassifier {
    table: ServiceCategoryTable,
    resolution: LinkResolution,
}

impl ServiceClassifier {
    pub fn new(table: ServiceCategoryTable, resolution: LinkResolution) -> Self {
        Self { table, resolution }
    }

    /// Infer a category from an alert name; first matching keyword group wins
    pub fn infer_category(alert_name: &str) -> Option<ServiceCategory> {
        let name = alert_name.to_lowercase();

        if keywords::FEEDS.iter().any(|kw| name.contains(kw)) {
            Some(ServiceCategory::Feeds)
        } else if name.contains(keywords::VRF) {
            Some(ServiceCategory::Vrf)
        } else if name.contains(keywords::KEEPERS) {
            Some(ServiceCategory::Keepers)
        } else {
            None
        }
    }

    /// Set `service_category` and `communication_link` on the record
    ///
    /// With [`LinkResolution::BeforeClassification`] the link is looked up
    /// from the category the record had *before* this call, so a freshly
    /// extracted record always ends up with the `other` link.
    pub fn classify(&self, record: &mut IncidentRecord) {
        if !record.alert_name.is_empty() {
            if self.resolution == LinkResolution::BeforeClassification {
                record.communication_link = self.lookup(record.service_category);
            }

            if let Some(category) = Self::infer_category(&record.alert_name) {
                record.service_category = Some(category);
            }

            if self.resolution == LinkResolution::Classified {
                record.communication_link = self.lookup(record.service_category);
            }

            debug!(
                alert_name = %record.alert_name,
                category = record.service_display(),
                "Classified alert"
            );
        }

        if record.communication_link.is_empty() {
            record.communication_link = self.table.other_link().to_string();
        }
    }

    fn lookup(&self, category: Option<ServiceCategory>) -> String {
        category
            .and_then(|c| self.table.link_for(c))
            .unwrap_or_default()
            .to_string()
    }
}
