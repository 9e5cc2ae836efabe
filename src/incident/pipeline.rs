//! Incident Pipeline
//!
//! raw lines → extraction → classification → finished [`IncidentRecord`].
//! Synchronous and side-effect free apart from logging; one call per dump.

use tracing::info;

use super::classifier::{ServiceCategoryTable, ServiceClassifier};
use super::extractor::AlertDetailExtractor;
use crate::config::Config;
use crate::types::IncidentRecord;

#[derive(Debug, Clone, Default)]
pub struct IncidentPipeline {
    classifier: ServiceClassifier,
}

impl IncidentPipeline {
    pub fn new(classifier: ServiceClassifier) -> Self {
        Self { classifier }
    }

    pub fn from_config(config: &Config) -> Self {
        let table = ServiceCategoryTable::from(&config.services.links);
        Self::new(ServiceClassifier::new(table, config.services.resolution))
    }

    /// Build the classified record for one alert dump
    pub fn run<S: AsRef<str>>(&self, lines: &[S], incident_link: &str) -> IncidentRecord {
        let mut record = AlertDetailExtractor::extract(lines, incident_link);
        self.classifier.classify(&mut record);

        info!(
            lines = lines.len(),
            service = record.service_display(),
            fallback_summary = record.used_fallback_summary(),
            "Built incident record"
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkResolution;
    use crate::constants::links;
    use crate::incident::ExplorerDetailResolver;
    use crate::types::{ExplorerDetail, ServiceCategory};

    const LINK: &str = "https://example.pagerduty.com/incidents/Q1";

    #[test]
    fn test_keepers_scenario() {
        let lines = [
            "- summary = \"DB down\"",
            "- alertname = UpkeepFailure",
            "- network_name = polygon-mainnet",
            "- registry_address = 0xREG",
        ];
        let record = IncidentPipeline::default().run(&lines, LINK);

        assert_eq!(record.summary, "'DB down'");
        assert_eq!(record.service_display(), "Keepers");
        assert_eq!(record.alert_name, "UpkeepFailure");
        assert_eq!(record.network_name, "polygon-mainnet");
        assert_eq!(
            ExplorerDetailResolver::resolve(&record),
            ExplorerDetail::new("registry_address", "0xREG")
        );
        assert_eq!(record.communication_link, links::OTHER);
    }

    #[test]
    fn test_feeds_deviation_scenario() {
        let lines = [
            "- summary = price deviates",
            "- alertname = HighOffchainAggregatorExpectedAnswerVsOnChainAnswerDeviation",
            "- contract = eth-usd",
            "- contract_address = 0xABC",
        ];
        let record = IncidentPipeline::default().run(&lines, LINK);

        assert_eq!(record.service_category, Some(ServiceCategory::Feeds));
        assert_eq!(record.service_display(), "Feeds");
        assert_eq!(
            ExplorerDetailResolver::resolve(&record),
            ExplorerDetail::new("contract_address", "0xABC")
        );
    }

    #[test]
    fn test_vrf_falls_through_to_keyhash() {
        let lines = ["- alertname = VRFV2PendingRequests", "- key_hash = 0xKH"];
        let record = IncidentPipeline::default().run(&lines, LINK);

        assert_eq!(record.key_underscore_hash, "");
        assert_eq!(
            ExplorerDetailResolver::resolve(&record),
            ExplorerDetail::new("keyhash", "0xKH")
        );
    }

    #[test]
    fn test_from_config_uses_resolution_setting() {
        let mut config = Config::default();
        config.services.resolution = LinkResolution::Classified;
        config.services.links.keepers = "https://meet.example.com/keepers".to_string();

        let record =
            IncidentPipeline::from_config(&config).run(&["- alertname = UpkeepFailure"], LINK);
        assert_eq!(record.communication_link, "https://meet.example.com/keepers");
    }
}
