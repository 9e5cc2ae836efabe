use console::style;

/// Operator-facing console messages
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }

    /// Report a webhook status code without judging it beyond 2xx
    pub fn delivery_status(&self, status: u16) {
        if (200..300).contains(&status) {
            self.success(&format!("War-room message posted (HTTP {})", status));
        } else {
            self.warning(&format!("Webhook responded with HTTP {}", status));
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
