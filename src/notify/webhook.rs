//! Incoming-webhook delivery
//!
//! POSTs the chat payload as JSON. The webhook URL embeds credentials, so it
//! is held as a secret and never appears in Debug output or logs.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use super::Notifier;
use crate::render::ChatPayload;
use crate::types::{Result, WarRoomError, is_url};

pub struct SlackWebhookNotifier {
    /// Webhook URL stored securely - never exposed in logs or debug output
    url: SecretString,
    client: reqwest::Client,
}

impl std::fmt::Debug for SlackWebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackWebhookNotifier")
            .field("url", &"[REDACTED]")
            .finish()
    }
}

impl SlackWebhookNotifier {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        // No request timeout: delivery blocks until the endpoint answers
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| WarRoomError::delivery(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(url, client)
    }

    /// Use a preconfigured HTTP client (proxy settings, TLS roots)
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Result<Self> {
        let url = url.into();
        if !is_url(&url) {
            return Err(WarRoomError::Config(
                "Webhook URL must be an absolute URL with a host".to_string(),
            ));
        }

        Ok(Self {
            url: SecretString::from(url),
            client,
        })
    }
}

#[async_trait]
impl Notifier for SlackWebhookNotifier {
    async fn notify(&self, payload: &ChatPayload) -> Result<u16> {
        let body = serde_json::to_vec(payload)?;
        debug!(bytes = body.len(), "Posting war-room message to webhook");

        let response = self
            .client
            .post(self.url.expose_secret())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the URL; strip it before surfacing
                WarRoomError::delivery(format!(
                    "Failed post request to webhook: {}",
                    e.without_url()
                ))
            })?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "Webhook accepted war-room message");
        } else {
            warn!(status = status.as_u16(), "Webhook returned non-success status");
        }

        Ok(status.as_u16())
    }

    fn name(&self) -> &str {
        "slack-webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::IncidentPipeline;
    use crate::render::render_chat;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn payload() -> ChatPayload {
        let record = IncidentPipeline::default().run(
            &["- summary = DB down", "- alertname = UpkeepFailure"],
            "https://example.pagerduty.com/incidents/Q1",
        );
        render_chat(&record)
    }

    fn local_notifier(addr: std::net::SocketAddr, path: &str) -> SlackWebhookNotifier {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        SlackWebhookNotifier::with_client(format!("http://{}{}", addr, path), client).unwrap()
    }

    /// Accept one request, reply with `status_line`, return the raw request
    async fn serve_once(listener: TcpListener, status_line: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_and_returns_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "200 OK"));

        let notifier = local_notifier(addr, "/services/T0/B0");
        let status = notifier.notify(&payload()).await.unwrap();
        assert_eq!(status, 200);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /services/T0/B0 HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));

        let body = request.split_once("\r\n\r\n").unwrap().1;
        let sent: ChatPayload = serde_json::from_str(body).unwrap();
        assert_eq!(sent, payload());
    }

    #[tokio::test]
    async fn test_non_success_status_is_passed_through() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "404 Not Found"));

        let notifier = local_notifier(addr, "/hook");
        assert_eq!(notifier.notify(&payload()).await.unwrap(), 404);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_transport_failure_is_delivery_error() {
        // bind then drop so the port is closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let notifier = local_notifier(addr, "/hook");
        let err = notifier.notify(&payload()).await.unwrap_err();
        assert!(matches!(err, WarRoomError::Delivery(_)));
        assert!(!err.to_string().contains(&addr.to_string()));
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(SlackWebhookNotifier::new("hooks.slack.com/services/T0").is_err());
    }

    #[test]
    fn test_debug_redacts_url() {
        let notifier =
            SlackWebhookNotifier::new("https://hooks.example.com/services/SECRET").unwrap();
        let debug = format!("{:?}", notifier);
        assert!(!debug.contains("SECRET"));
        assert_eq!(notifier.name(), "slack-webhook");
    }
}
