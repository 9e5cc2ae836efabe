//! Notification Delivery
//!
//! Defines the Notifier trait for handing a rendered announcement to an
//! external channel. A single attempt per call: no retry, no backoff.

mod webhook;

pub use webhook::SlackWebhookNotifier;

use async_trait::async_trait;

use crate::render::ChatPayload;
use crate::types::Result;

/// Delivers a chat payload and reports the endpoint's raw status code
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send once. Non-2xx responses are returned as `Ok(status)`;
    /// only transport failures are errors.
    async fn notify(&self, payload: &ChatPayload) -> Result<u16>;

    /// Channel name for logs
    fn name(&self) -> &str;
}
