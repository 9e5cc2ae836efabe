//! Global Constants
//!
//! Centralized literals for alert parsing, classification and messages.

/// Label markers recognised in an alert dump
pub mod labels {
    /// Marker that selects the summary line
    pub const SUMMARY_MARKER: &str = "- summary";
    /// Full summary label; the value is everything after it
    pub const SUMMARY: &str = "- summary = ";

    pub const ALERT_NAME_MARKER: &str = "- alertname";
    pub const ALERT_NAME: &str = "- alertname = ";

    pub const NETWORK_NAME: &str = "- network_name = ";

    pub const JOB_MARKER: &str = "- job =";
    /// Job prefixes whose suffix is the network name
    pub const JOB_NETWORK_PREFIXES: [&str; 2] =
        ["ocr_telemetry_prometheus_exporter_", "atlas_prod_otpe2_"];

    pub const CONTRACT_MARKER: &str = "- contract =";
    pub const CONTRACT: &str = "- contract = ";

    pub const CONTRACT_ADDRESS: &str = "- contract_address = ";
    pub const KEY_HASH: &str = "- key_hash = ";
    pub const REGISTRY_ADDRESS: &str = "- registry_address = ";
}

/// Alert-name keywords, matched against the lower-cased alert name
pub mod keywords {
    pub const FEEDS: [&str; 4] = [
        "feed",
        "offchainaggregatoranswerstalled",
        "highoffchainaggregatorexpectedanswervsonchainanswerdeviation",
        "consensusfailurewarning",
    ];
    pub const VRF: &str = "vrf";
    pub const KEEPERS: &str = "upkeep";
}

/// Default communication links per service category
pub mod links {
    pub const VRF: &str = "https://meet.google.com/bcc-cqid-okb";
    pub const FEEDS: &str = "https://meet.google.com/jsg-cvtz-sxe";
    pub const KEEPERS: &str = "https://meet.google.com/nqa-mavr-qsr";
    pub const OTHER: &str = "https://meet.google.com/hqh-vcbr-mtx";
}

/// Summary handling
pub mod summary {
    /// Used when the dump has no lines at all
    pub const EMPTY_DUMP: &str = "No alert details provided";

    /// Whole-string substitutions applied in this order
    pub const SANITIZE_RULES: [(&str, &str); 5] = [
        ("<", "less than"),
        (">", "greater than"),
        ("&", "&amp;"),
        ("\"", "\\\""),
        ("*", "\\*"),
    ];
}

/// Fixed message text
pub mod message {
    pub const CHAT_TEXT_PREFIX: &str = "New war room: ";
    pub const CHAT_HEADER: &str = "A new war-room has been created!";
    pub const MEET_EMOJI: &str = ":google-meet-intensifies:";
    pub const MEET_LABEL: &str = "Google Meets";
    pub const PLAIN_HEADER: &str = "There is a new incident!";
}
