use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Secrets required before anything touches the network. Missing values are
/// fatal at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map_err(|e| format!("GEMINI_API_KEY: {}", e))?,
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|e| format!("TELEGRAM_BOT_TOKEN: {}", e))?,
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID")
                .map_err(|e| format!("TELEGRAM_CHAT_ID: {}", e))?,
        })
    }
}

/// One topical group of feed sources. The icon is an explicit per-category
/// setting rather than derived from the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub icon: String,
    pub sources: Vec<String>,
}

impl CategoryConfig {
    pub fn new(name: &str, icon: &str, sources: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            sources: sources.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingConfig {
    pub categories: Vec<CategoryConfig>,
    /// Rolling retention window; entries older than this are dropped.
    pub window_hours: i64,
    /// Hard per-message character cap of the delivery endpoint.
    pub message_limit: usize,
    /// Headroom reserved for the truncation marker when a single section
    /// exceeds `message_limit`. Must be at least the marker length; values
    /// below it are clamped up at the call site.
    pub truncation_margin: usize,
    /// Pause between chunk sends, so chunks arrive in order.
    pub chunk_delay_ms: u64,
    pub gemini_model: String,
}

impl BriefingConfig {
    pub fn chunk_delay(&self) -> Duration {
        Duration::from_millis(self.chunk_delay_ms)
    }
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            window_hours: 24,
            message_limit: 4096,
            truncation_margin: 64,
            chunk_delay_ms: 1000,
            gemini_model: "gemini-1.5-flash".to_string(),
        }
    }
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new(
            "AI General (Global)",
            "\u{1F30D}",
            &[
                "https://techcrunch.com/category/artificial-intelligence/feed/",
                "https://arstechnica.com/ai/feed/",
                "https://www.theverge.com/rss/ai-artificial-intelligence/index.xml",
                "https://www.wired.com/feed/category/artificial-intelligence/rss",
                "https://www.zdnet.com/topic/artificial-intelligence/rss.xml",
                "https://www.technologyreview.com/topic/artificial-intelligence/feed/",
            ],
        ),
        CategoryConfig::new(
            "AI General (DACH)",
            "\u{1F1E9}\u{1F1EA}",
            &[
                "https://www.heise.de/thema/kuenstliche-intelligenz/rss.xml",
                "https://kiupdate.podigee.io/feed/mp3",
                "https://rss.golem.de/rss.php?feed=ATOM1.0",
                "https://t3n.de/rss/ressort/software-ki.xml",
            ],
        ),
        CategoryConfig::new(
            "AI Research (Primary Sources)",
            "\u{1F52C}",
            &[
                "https://openai.com/feed.xml?format=xml",
                "https://research.google/blog/rss/",
                "https://deepmind.google/blog/rss/",
                "https://news.mit.edu/topic/mitartificial-intelligence2-rss.xml",
                "https://ai.stanford.edu/blog/feed.xml",
                "https://developer.nvidia.com/blog/feed/",
            ],
        ),
        CategoryConfig::new(
            "Focus: Gemini",
            "\u{2728}",
            &[
                "https://blog.google/rss/",
                "https://blog.google/technology/developers/rss/",
                "https://workspaceupdates.googleblog.com/atom.xml",
            ],
        ),
        CategoryConfig::new(
            "Focus: Media Industry",
            "\u{1F4F0}",
            &[
                "https://www.niemanlab.org/feed/",
                "https://www.poynter.org/feed/",
                "https://www.aidataanalytics.network/rss/categories/data-science-ai",
                "https://www.artificialintelligence-news.com/feed/rss/",
                "https://www.artificial-intelligence.blog/ai-news/category/entertainment?format=rss",
                "https://feeds.megaphone.fm/marketingai",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_categories_with_sources() {
        let config = BriefingConfig::default();
        assert!(!config.categories.is_empty());
        for category in &config.categories {
            assert!(
                !category.sources.is_empty(),
                "category {} has no sources",
                category.name
            );
            assert!(!category.icon.is_empty());
        }
    }

    #[test]
    fn default_limits_match_telegram_cap() {
        let config = BriefingConfig::default();
        assert_eq!(config.message_limit, 4096);
        assert!(config.truncation_margin < config.message_limit);
    }
}
