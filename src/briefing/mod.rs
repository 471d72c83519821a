//! The briefing pipeline: compose, segment, deliver, and the per-run
//! orchestration tying them to collection and digest generation.

pub mod compose;
pub mod deliver;
pub mod segment;

use chrono::Duration;
use tracing::info;

use crate::ai::GeminiClient;
use crate::core::config::BriefingConfig;
use crate::core::models::TimeWindow;
use crate::feeds::collect_category;
use crate::telegram::MessageSender;

pub use deliver::DeliveryReport;

/// One full briefing run: collect and digest each category in order, then
/// compose, segment, and deliver. Everything is sequential; per-source,
/// per-category, and per-chunk failures are contained downstream, so this
/// never fails once configuration is in hand.
pub async fn run_briefing(
    config: &BriefingConfig,
    http: &reqwest::Client,
    gemini: &GeminiClient,
    sender: &dyn MessageSender,
) -> DeliveryReport {
    let window = TimeWindow::last(Duration::hours(config.window_hours));
    info!(window_start = %window.start, "collecting feeds");

    let mut digests = Vec::with_capacity(config.categories.len());
    for category in &config.categories {
        let block = collect_category(http, category, &window).await;
        let digest = gemini.generate_digest(&block).await;
        digests.push((category.clone(), digest));
    }

    let document = compose::compose(compose::briefing_header(window.now), &digests);
    let chunks = segment::segment(&document, config.message_limit, config.truncation_margin);
    info!(
        sections = document.sections.len(),
        chunks = chunks.len(),
        "briefing composed"
    );

    deliver::deliver(sender, &chunks, config.chunk_delay()).await
}
