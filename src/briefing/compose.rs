use chrono::{DateTime, Utc};
use chrono_tz::Europe::Berlin;

use crate::core::config::CategoryConfig;
use crate::core::models::{CategoryDigest, Document};

/// Token joining the header and the category sections. The segmenter splits
/// only at these boundaries.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Document body when every category came back empty.
pub const NO_NEWS_FALLBACK: &str = "No notable AI news in the last 24 hours.";

/// Assemble the briefing document: header plus one section per category
/// that produced a digest, in configuration order. Sections are stored
/// unseparated, so the rendered document never carries a trailing separator.
pub fn compose(header: String, digests: &[(CategoryConfig, CategoryDigest)]) -> Document {
    let mut sections = Vec::new();
    for (category, digest) in digests {
        let CategoryDigest::Ready(text) = digest else {
            continue;
        };
        sections.push(format!("{} *{}*\n{}", category.icon, category.name, text));
    }

    if sections.is_empty() {
        sections.push(NO_NEWS_FALLBACK.to_string());
    }

    Document { header, sections }
}

/// Briefing header with the run date rendered in the briefing's home
/// timezone. The process clock is UTC wherever this runs.
pub fn briefing_header(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&Berlin);
    format!("\u{1F916} *Your AI briefing for {}*", local.format("%d %B %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> CategoryConfig {
        CategoryConfig::new(name, "\u{1F4CC}", &[])
    }

    #[test]
    fn skips_empty_categories_and_keeps_order() {
        let digests = vec![
            (category("First"), CategoryDigest::Ready("one".into())),
            (category("Skipped"), CategoryDigest::Empty),
            (category("Second"), CategoryDigest::Ready("two".into())),
        ];
        let doc = compose("header".into(), &digests);

        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections[0].contains("*First*"));
        assert!(doc.sections[1].contains("*Second*"));
        assert!(!doc.render().contains("Skipped"));
    }

    #[test]
    fn rendered_document_has_no_trailing_separator() {
        let digests = vec![(category("Only"), CategoryDigest::Ready("text".into()))];
        let doc = compose("header".into(), &digests);
        let rendered = doc.render();
        assert!(rendered.ends_with("text"));
        assert!(!rendered.ends_with(SECTION_SEPARATOR));
    }

    #[test]
    fn all_empty_categories_fall_back_to_fixed_sentence() {
        let digests = vec![
            (category("A"), CategoryDigest::Empty),
            (category("B"), CategoryDigest::Empty),
        ];
        let doc = compose("header".into(), &digests);
        assert_eq!(doc.sections, vec![NO_NEWS_FALLBACK.to_string()]);
    }

    #[test]
    fn header_is_localized_date() {
        let now = "2026-08-25T23:30:00Z".parse().expect("valid timestamp");
        let header = briefing_header(now);
        // 23:30 UTC is already the next day in Berlin.
        assert!(header.contains("26 August 2026"), "got: {header}");
    }
}
