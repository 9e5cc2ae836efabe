//! Chat Webhook Payload
//!
//! Block Kit message with a header, the incident section, a divider and the
//! communications section. Newlines are real newlines in the strings;
//! serde_json escapes them on the wire.

use serde::{Deserialize, Serialize};

use super::MessageParts;
use crate::constants::message;
use crate::types::IncidentRecord;

/// Top-level webhook body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    /// Notification fallback text
    pub text: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { text: TextObject },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    Mrkdwn {
        text: String,
    },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text, .. } | Self::Mrkdwn { text } => text,
        }
    }
}

/// Build the chat payload for a classified record
pub fn render_chat(record: &IncidentRecord) -> ChatPayload {
    let parts = MessageParts::new(record);

    let mut incident = format!("<{}|*{}*>", record.incident_link, record.summary);

    if !parts.service.is_empty() {
        incident.push_str(&format!("\n\n*Service* \n{}", parts.service));
    }

    if parts.has_details() {
        incident.push_str("\n\n *Details*\n");
    }
    if !record.alert_name.is_empty() {
        incident.push_str(&format!("\n`alertname` = {}", record.alert_name));
    }
    if !record.network_name.is_empty() {
        incident.push_str(&format!("\n`network` = {}", record.network_name));
    }
    if parts.explorer.is_present() {
        incident.push_str(&format!(
            "\n`{}` = {}",
            parts.explorer.label, parts.explorer.value
        ));
    }

    let communications = format!(
        "*Communications*\n{}<{}|{}>",
        message::MEET_EMOJI,
        record.communication_link,
        message::MEET_LABEL
    );

    ChatPayload {
        text: format!("{}{}", message::CHAT_TEXT_PREFIX, record.summary),
        blocks: vec![
            Block::Header {
                text: TextObject::plain(message::CHAT_HEADER),
            },
            Block::Section {
                text: TextObject::mrkdwn(incident),
            },
            Block::Divider,
            Block::Section {
                text: TextObject::mrkdwn(communications),
            },
        ],
    }
}
