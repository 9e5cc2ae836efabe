//! Message Rendering
//!
//! Two pure renderers over the same composition order:
//! summary + incident link, service, details header, detail lines,
//! communications. Neither does any I/O.
//!
//! - `slack`: typed Block Kit payload for the chat webhook
//! - `plain`: newline-separated text for log-oriented channels

mod plain;
mod slack;

pub use plain::render_plain;
pub use slack::{Block, ChatPayload, TextObject, render_chat};

use crate::incident::ExplorerDetailResolver;
use crate::types::{ExplorerDetail, IncidentRecord, Result};

/// Output format for a rendered announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    /// Chat webhook JSON
    #[default]
    Slack,
    /// Plain text
    Plain,
}

impl std::str::FromStr for MessageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slack" | "chat" => Ok(MessageFormat::Slack),
            "plain" | "text" => Ok(MessageFormat::Plain),
            _ => Err(format!(
                "Unknown message format: {}. Valid values: slack, plain",
                s
            )),
        }
    }
}

impl MessageFormat {
    /// Render `record` in this format
    pub fn render(&self, record: &IncidentRecord) -> Result<String> {
        match self {
            MessageFormat::Slack => Ok(serde_json::to_string_pretty(&render_chat(record))?),
            MessageFormat::Plain => Ok(render_plain(record)),
        }
    }
}

/// Fields both renderers draw from, with the secondary field resolved
struct MessageParts<'a> {
    record: &'a IncidentRecord,
    service: &'static str,
    explorer: ExplorerDetail,
}

impl<'a> MessageParts<'a> {
    fn new(record: &'a IncidentRecord) -> Self {
        Self {
            record,
            service: record.service_display(),
            explorer: ExplorerDetailResolver::resolve(record),
        }
    }

    fn has_details(&self) -> bool {
        !self.record.alert_name.is_empty()
            || !self.record.network_name.is_empty()
            || self.explorer.is_present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::IncidentPipeline;

    #[test]
    fn test_message_format_from_str() {
        assert_eq!("slack".parse::<MessageFormat>(), Ok(MessageFormat::Slack));
        assert_eq!("TEXT".parse::<MessageFormat>(), Ok(MessageFormat::Plain));
        assert!("html".parse::<MessageFormat>().is_err());
    }

    #[test]
    fn test_render_slack_is_json() {
        let record = IncidentPipeline::default().run(
            &["- summary = disk full", "- alertname = NodeDown"],
            "https://example.pagerduty.com/incidents/Q1",
        );
        let json = MessageFormat::Slack.render(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "New war room: disk full");
    }

    #[test]
    fn test_has_details() {
        let record = IncidentRecord::new("https://example.com/i/1");
        assert!(!MessageParts::new(&record).has_details());

        let record = IncidentRecord {
            network_name: "polygon-mainnet".to_string(),
            ..IncidentRecord::new("https://example.com/i/1")
        };
        assert!(MessageParts::new(&record).has_details());
    }
}
