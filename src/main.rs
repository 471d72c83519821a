use std::time::Duration;

use anyhow::anyhow;
use tracing::{info, warn};

use newsbrief::ai::GeminiClient;
use newsbrief::briefing::run_briefing;
use newsbrief::core::config::{AppConfig, BriefingConfig};
use newsbrief::telegram::TelegramClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    newsbrief::setup_logging();

    // Missing credentials are the only fatal condition, checked before any
    // network activity.
    let app = AppConfig::from_env().map_err(|e| anyhow!("missing configuration: {e}"))?;
    let config = BriefingConfig::default();

    // One configured client serves every HTTP boundary: feeds, Gemini,
    // Telegram.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let gemini = GeminiClient::new(http.clone(), app.gemini_api_key, config.gemini_model.clone());
    let telegram = TelegramClient::new(http.clone(), app.telegram_bot_token, app.telegram_chat_id);

    info!("starting daily briefing run");
    let report = run_briefing(&config, &http, &gemini, &telegram).await;

    if report.is_complete() {
        info!(delivered = report.delivered, "briefing delivered");
    } else {
        warn!(
            delivered = report.delivered,
            failed = report.failed,
            "briefing delivered with failures"
        );
    }

    Ok(())
}
