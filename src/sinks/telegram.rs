use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::traits::report_sink::ReportSink;

/// Posts the shopping list to a Telegram chat.
///
/// The report goes out inside a `<pre>` block so the fixed-width columns
/// stay aligned in the chat.
pub struct TelegramSink {
    client: Client,
    token: String,
    chat_id: String,
}

impl TelegramSink {
    /// Create a sink for an explicit bot token and chat
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Build from the `TG_TOKEN` and `CHAT_ID` environment variables,
    /// or `None` when either is unset
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("TG_TOKEN").ok()?;
        let chat_id = std::env::var("CHAT_ID").ok()?;
        Some(Self::new(token, chat_id))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[async_trait]
impl ReportSink for TelegramSink {
    async fn deliver(&self, report: &str) -> anyhow::Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);

        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": format!("<pre>{}</pre>", escape_html(report)),
            "parse_mode": "HTML",
            "disable_web_page_preview": true
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Telegram API error: Status {}", status);
            anyhow::bail!("telegram delivery failed: {} {}", status, body);
        }

        debug!("Shopping list delivered to Telegram chat {}", self.chat_id);
        Ok(())
    }
}
