//! Plain-text announcement for generic notification channels.

use super::MessageParts;
use crate::constants::message;
use crate::types::IncidentRecord;

pub fn render_plain(record: &IncidentRecord) -> String {
    let parts = MessageParts::new(record);

    let mut msg = format!("\n{}", message::PLAIN_HEADER);
    msg.push_str(&format!("\n\n{}\n{}", record.summary, record.incident_link));

    if !parts.service.is_empty() {
        msg.push_str(&format!("\n\nService: {}", parts.service));
    }

    if parts.has_details() {
        msg.push_str("\n\nDetails:");
    }
    if !record.alert_name.is_empty() {
        msg.push_str(&format!("\n- alertName = {}", record.alert_name));
    }
    if !record.network_name.is_empty() {
        msg.push_str(&format!("\n- networkName = {}", record.network_name));
    }
    if parts.explorer.is_present() {
        msg.push_str(&format!(
            "\n- {} = {}",
            parts.explorer.label, parts.explorer.value
        ));
    }

    msg.push_str("\n\nCommunications:");
    msg.push_str(&format!(
        "\n{}: {}",
        message::MEET_LABEL,
        record.communication_link
    ));

    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::links;
    use crate::incident::IncidentPipeline;

    const LINK: &str = "https://example.pagerduty.com/incidents/Q1";

    #[test]
    fn test_full_plain_message() {
        let lines = [
            "- summary = price deviates",
            "- alertname = HighOffchainAggregatorExpectedAnswerVsOnChainAnswerDeviation",
            "- network_name = ethereum-mainnet",
            "- contract = eth-usd",
            "- contract_address = 0xABC",
        ];
        let record = IncidentPipeline::default().run(&lines, LINK);

        let expected = format!(
            "\nThere is a new incident!\
             \n\nprice deviates\n{LINK}\
             \n\nService: Feeds\
             \n\nDetails:\
             \n- alertName = HighOffchainAggregatorExpectedAnswerVsOnChainAnswerDeviation\
             \n- networkName = ethereum-mainnet\
             \n- contract_address = 0xABC\
             \n\nCommunications:\
             \nGoogle Meets: {}",
            links::OTHER
        );
        assert_eq!(render_plain(&record), expected);
    }

    #[test]
    fn test_plain_without_details() {
        let record = IncidentPipeline::default().run(&["foo", "bar"], LINK);
        assert_eq!(
            render_plain(&record),
            format!(
                "\nThere is a new incident!\n\nfoo bar \n{LINK}\n\nCommunications:\nGoogle Meets: {}",
                links::OTHER
            )
        );
    }

    #[test]
    fn test_unclassified_alert_lists_name_only() {
        let record = IncidentPipeline::default().run(
            &["- summary = node offline", "- alertname = NodeDown"],
            LINK,
        );
        let msg = render_plain(&record);
        assert!(!msg.contains("Service:"));
        assert!(msg.contains("\n\nDetails:\n- alertName = NodeDown\n\nCommunications:"));
    }
}
