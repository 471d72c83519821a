/// newsbrief - a daily AI-news briefing bot for Telegram.
///
/// Once per run the pipeline:
/// 1. Collects entries from configured RSS/Atom feeds, grouped by category,
///    keeping only items published inside a rolling time window
/// 2. Asks Gemini for a short digest per category
/// 3. Composes the digests into one briefing document
/// 4. Splits the document into chunks that respect Telegram's 4096-character
///    cap, breaking only at section boundaries
/// 5. Delivers each chunk, falling back to plain text when Telegram rejects
///    the Markdown markup
///
/// Each run is stateless: the time window is derived from the clock at
/// startup and nothing is persisted between runs.
// Module declarations
pub mod ai;
pub mod briefing;
pub mod core;
pub mod errors;
pub mod feeds;
pub mod telegram;

/// Configure structured logging for the briefing process.
///
/// Sets up tracing-subscriber with a fmt layer and an `EnvFilter` honoring
/// `RUST_LOG`, defaulting to `info`. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
