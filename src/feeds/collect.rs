use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, warn};

use crate::core::config::CategoryConfig;
use crate::core::models::{RawBlock, TimeWindow};
use crate::errors::FeedError;

/// Width used when flattening entry summary HTML to plain text.
const SUMMARY_TEXT_WIDTH: usize = 200;

/// One syndication item, reduced to the fields the digest prompt needs.
/// Discarded after serialization into the category's raw block.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub summary: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl FeedItem {
    pub fn from_rss_item(item: &rss::Item) -> Self {
        // Primary: RFC 2822 pubDate. Fallback: Dublin Core date (ISO 8601),
        // which some feeds carry instead.
        let published = item
            .pub_date()
            .and_then(|value| DateTime::parse_from_rfc2822(value).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| {
                item.dublin_core_ext()
                    .and_then(|dc| dc.dates().first())
                    .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
                    .map(|dt| dt.with_timezone(&Utc))
            });

        Self {
            title: item.title().unwrap_or_default().to_owned(),
            link: item.link().unwrap_or_default().to_owned(),
            summary: item.description().map(ToOwned::to_owned),
            published,
        }
    }

    pub fn from_atom_entry(entry: &atom_syndication::Entry) -> Self {
        // Primary: published. Fallback: updated, which Atom requires, so an
        // Atom entry always resolves a timestamp.
        let published = entry
            .published()
            .copied()
            .unwrap_or_else(|| *entry.updated())
            .with_timezone(&Utc);

        Self {
            title: entry.title().to_string(),
            link: entry
                .links()
                .first()
                .map(|link| link.href().to_owned())
                .unwrap_or_default(),
            summary: entry.summary().map(|text| text.to_string()),
            published: Some(published),
        }
    }
}

/// Fetch every source of one category and serialize the entries published
/// inside the window, in feed order. A failing source is logged and skipped;
/// an empty block is a valid outcome.
pub async fn collect_category(
    client: &Client,
    category: &CategoryConfig,
    window: &TimeWindow,
) -> RawBlock {
    let mut text = String::new();
    let mut admitted = 0usize;

    for url in &category.sources {
        match fetch_source(client, url).await {
            Ok(items) => {
                for item in items {
                    let Some(published) = item.published else {
                        continue;
                    };
                    if !window.admits(published) {
                        continue;
                    }
                    text.push_str(&entry_record(&category.name, &item));
                    admitted += 1;
                }
            }
            Err(error) => {
                warn!(category = %category.name, url = %url, error = %error,
                    "failed to fetch source, skipping");
            }
        }
    }

    debug!(category = %category.name, entries = admitted, "collected category");
    RawBlock {
        category: category.name.clone(),
        text,
    }
}

async fn fetch_source(client: &Client, url: &str) -> Result<Vec<FeedItem>, FeedError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    parse_feed(&bytes)
}

/// Parse a feed body as RSS, falling back to Atom. Reports the RSS error
/// when neither format matches, since RSS is the common case.
pub(crate) fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedItem>, FeedError> {
    match rss::Channel::read_from(bytes) {
        Ok(channel) => Ok(channel.items().iter().map(FeedItem::from_rss_item).collect()),
        Err(rss_error) => match atom_syndication::Feed::read_from(bytes) {
            Ok(feed) => Ok(feed
                .entries()
                .iter()
                .map(FeedItem::from_atom_entry)
                .collect()),
            Err(_) => Err(FeedError::Parse(rss_error.to_string())),
        },
    }
}

/// Fixed-field record handed to the digest prompt, one per admitted entry.
fn entry_record(category: &str, item: &FeedItem) -> String {
    let summary = item
        .summary
        .as_deref()
        .map(flatten_summary)
        .unwrap_or_else(|| "No summary".to_string());

    format!(
        "[CATEGORY]: {category}\n\
         [TITLE]: {title}\n\
         [LINK]: {link}\n\
         [SUMMARY]: {summary}\n\
         ----------------------------------------\n\n",
        title = item.title,
        link = item.link,
    )
}

/// Feed summaries routinely arrive as HTML; the prompt wants plain text.
fn flatten_summary(raw: &str) -> String {
    html2text::from_read(raw.as_bytes(), SUMMARY_TEXT_WIDTH)
        .map(|text| text.trim().to_string())
        .unwrap_or_else(|_| raw.trim().to_string())
}
