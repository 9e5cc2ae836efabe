//! Post Command
//!
//! Collect the incident link and alert dump, build the war-room message and
//! deliver it to the configured webhook.
//!
//! Usage:
//!   warroom post [--incident-link URL] [--dump FILE|-] [--webhook URL] [--dry-run]

use std::path::PathBuf;

use tokio::runtime::Runtime;
use tracing::info;

use super::{AlertInput, DumpSource};
use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::incident::IncidentPipeline;
use crate::notify::{Notifier, SlackWebhookNotifier};
use crate::render::render_chat;
use crate::types::{Result, WarRoomError};

#[derive(Debug, Clone, Default)]
pub struct PostOptions {
    pub incident_link: Option<String>,
    pub dump: Option<PathBuf>,
    /// Overrides `webhook.url`
    pub webhook: Option<String>,
    pub dry_run: bool,
}

pub fn run(options: PostOptions) -> Result<()> {
    let config = ConfigLoader::load()?;
    let output = Output::new();

    // Fail before the operator pastes anything
    let notifier = if options.dry_run {
        None
    } else {
        let webhook = options.webhook.or(config.webhook.url.clone()).ok_or_else(|| {
            WarRoomError::Config(
                "No webhook URL configured. Set webhook.url, WARROOM_WEBHOOK_URL or --webhook"
                    .to_string(),
            )
        })?;
        Some(SlackWebhookNotifier::new(webhook)?)
    };

    let input = AlertInput::gather(
        options.incident_link,
        DumpSource::from_arg(options.dump.as_deref()),
        &config.editor,
    )?;

    let record = IncidentPipeline::from_config(&config).run(&input.lines, &input.incident_link);

    let payload = render_chat(&record);

    let Some(notifier) = notifier else {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    };

    info!(channel = notifier.name(), "Delivering war-room message");

    let rt = Runtime::new()?;
    let status = rt.block_on(notifier.notify(&payload))?;
    output.delivery_status(status);

    Ok(())
}
