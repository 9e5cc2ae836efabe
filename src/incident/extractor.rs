//! Alert Detail Extraction
//!
//! Best-effort parsing of a pasted alert dump into an [`IncidentRecord`].
//!
//! Two scans with deliberately different semantics:
//! - summary: the **first** line carrying `- summary` wins
//! - every other field: one pass over all lines, the **last** matching line wins
//!
//! Each line feeds at most one field: the first rule in [`FIELD_RULES`]
//! whose marker it contains.

use tracing::{debug, warn};

use crate::constants::{labels, summary};
use crate::types::{IncidentRecord, SummarySource};

/// One field rule: a line containing `marker` is handed to `apply`
pub struct FieldRule {
    pub field: &'static str,
    pub marker: &'static str,
    apply: fn(&mut IncidentRecord, &str),
}

/// Field rules in priority order
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "alert_name",
        marker: labels::ALERT_NAME_MARKER,
        apply: |record, line| {
            record.alert_name =
                value_after(line, labels::ALERT_NAME, labels::ALERT_NAME_MARKER).to_string()
        },
    },
    FieldRule {
        field: "network_name",
        marker: labels::NETWORK_NAME,
        apply: |record, line| {
            record.network_name =
                value_after(line, labels::NETWORK_NAME, labels::NETWORK_NAME).to_string()
        },
    },
    FieldRule {
        field: "network_name",
        marker: labels::JOB_MARKER,
        apply: apply_job,
    },
    FieldRule {
        field: "contract",
        marker: labels::CONTRACT_MARKER,
        apply: |record, line| {
            record.contract =
                value_after(line, labels::CONTRACT, labels::CONTRACT_MARKER).to_string()
        },
    },
    FieldRule {
        field: "contract_address",
        marker: labels::CONTRACT_ADDRESS,
        apply: |record, line| {
            record.contract_address =
                value_after(line, labels::CONTRACT_ADDRESS, labels::CONTRACT_ADDRESS).to_string()
        },
    },
    FieldRule {
        field: "key_hash",
        marker: labels::KEY_HASH,
        apply: |record, line| {
            record.key_hash = value_after(line, labels::KEY_HASH, labels::KEY_HASH).to_string()
        },
    },
    FieldRule {
        field: "registry_address",
        marker: labels::REGISTRY_ADDRESS,
        apply: |record, line| {
            record.registry_address =
                value_after(line, labels::REGISTRY_ADDRESS, labels::REGISTRY_ADDRESS).to_string()
        },
    },
];

/// `- job = ...` lines only carry a network when the job names an exporter
fn apply_job(record: &mut IncidentRecord, line: &str) {
    for prefix in labels::JOB_NETWORK_PREFIXES {
        if let Some(network) = line.split(prefix).nth(1) {
            record.network_name = network.to_string();
        }
    }
}

/// Text after the full label, or after the bare marker when the line uses
/// different spacing (`- alertname=Foo`). A repeated label ends the value.
fn value_after<'a>(line: &'a str, label: &str, marker: &str) -> &'a str {
    if let Some(value) = line.split(label).nth(1) {
        return value;
    }
    match line.split(marker).nth(1) {
        Some(rest) => rest.trim_start_matches(|c: char| c == '=' || c.is_whitespace()),
        None => "",
    }
}

/// Apply the summary substitutions in their fixed order
pub fn sanitize_summary(raw: &str) -> String {
    summary::SANITIZE_RULES
        .iter()
        .fold(raw.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Alert dump parser
pub struct AlertDetailExtractor;

impl AlertDetailExtractor {
    /// Parse `lines` into a record. Never fails; absent fields stay empty.
    pub fn extract<S: AsRef<str>>(lines: &[S], incident_link: &str) -> IncidentRecord {
        let mut record = IncidentRecord::new(incident_link);

        let (raw_summary, source) = Self::extract_summary(lines);
        record.summary = sanitize_summary(&raw_summary);
        record.summary_source = source;

        for line in lines {
            let line = line.as_ref();
            if let Some(rule) = FIELD_RULES.iter().find(|r| line.contains(r.marker)) {
                (rule.apply)(&mut record, line);
                debug!(field = rule.field, "Extracted alert field");
            }
        }

        record
    }

    fn extract_summary<S: AsRef<str>>(lines: &[S]) -> (String, SummarySource) {
        let labelled = lines
            .iter()
            .map(|line| line.as_ref())
            .find(|line| line.contains(labels::SUMMARY_MARKER))
            .map(|line| value_after(line, labels::SUMMARY, labels::SUMMARY_MARKER).replace('"', "'"))
            .filter(|summary| !summary.is_empty());

        if let Some(summary) = labelled {
            return (summary, SummarySource::Label);
        }

        warn!(
            "Missing alert summary when searching for label '{}'; using the whole dump",
            labels::SUMMARY_MARKER
        );

        let joined: String = lines
            .iter()
            .map(|line| format!("{} ", line.as_ref()))
            .collect();

        if joined.is_empty() {
            (summary::EMPTY_DUMP.to_string(), SummarySource::Fallback)
        } else {
            (joined, SummarySource::Fallback)
        }
    }
}
