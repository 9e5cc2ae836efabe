//! warroom - War-Room Announcements from Alert Dumps
//!
//! Converts a pasted monitoring alert ("alert dump") into a structured
//! incident record, classifies it into a service category and renders a
//! chat and a plain-text announcement pointing responders at a call link.
//!
//! ## Quick Start
//!
//! ```ignore
//! use warroom::{IncidentPipeline, render_chat};
//!
//! let lines = ["- summary = DB down", "- alertname = UpkeepFailure"];
//! let record = IncidentPipeline::default().run(&lines, "https://example.pagerduty.com/incidents/Q1");
//! let payload = render_chat(&record);
//! ```
//!
//! ## Modules
//!
//! - [`incident`]: extraction, classification, secondary-field resolution
//! - [`render`]: chat payload and plain-text renderers
//! - [`notify`]: webhook delivery
//! - [`config`]: layered configuration
//! - [`cli`]: operator prompts, scratch-file editing, subcommands

pub mod cli;
pub mod config;
pub mod constants;
pub mod incident;
pub mod notify;
pub mod render;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LinkResolution};

// Error Types
pub use types::error::{Result, ResultExt, WarRoomError};

// Incident Model
pub use types::{ExplorerDetail, IncidentRecord, ServiceCategory, SummarySource};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use incident::{
    AlertDetailExtractor, ExplorerDetailResolver, IncidentPipeline, ServiceCategoryTable,
    ServiceClassifier,
};
pub use notify::{Notifier, SlackWebhookNotifier};
pub use render::{ChatPayload, MessageFormat, render_chat, render_plain};
