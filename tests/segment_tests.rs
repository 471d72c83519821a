use newsbrief::briefing::segment::{TRUNCATION_MARKER, segment};
use newsbrief::core::models::{Document, ParseMode};

/// Tests for the boundary-aware document splitting policy.

const LIMIT: usize = 4096;
const MARGIN: usize = 64;

fn doc(header: &str, sections: &[String]) -> Document {
    Document {
        header: header.to_string(),
        sections: sections.to_vec(),
    }
}

#[test]
fn short_document_is_one_rich_chunk() {
    // Scenario A: one section of 500 chars fits in a single message.
    let document = doc("", &["a".repeat(500)]);
    let chunks = segment(&document, LIMIT, MARGIN);

    assert_eq!(chunks.len(), 1, "fitting document must not be split");
    assert_eq!(chunks[0].mode, ParseMode::Markdown);
    assert_eq!(
        chunks[0].text,
        document.render(),
        "single chunk must equal the rendered document"
    );
}

#[test]
fn sections_pack_greedily_at_boundaries() {
    // Scenario B: three sections of 2000 chars pack as [1+2] [3].
    let sections = vec!["a".repeat(2000), "b".repeat(2000), "c".repeat(2000)];
    let document = doc("", &sections);
    let chunks = segment(&document, LIMIT, MARGIN);

    assert_eq!(chunks.len(), 2, "expected two chunks, got {}", chunks.len());
    assert!(chunks[0].text.contains(&sections[0]));
    assert!(chunks[0].text.contains(&sections[1]));
    assert!(chunks[1].text.contains(&sections[2]));
    assert!(
        chunks.iter().all(|c| c.mode == ParseMode::Markdown),
        "packing whole sections never downgrades the mode"
    );
}

#[test]
fn oversized_section_is_truncated_to_plain_mode() {
    // Scenario C: a single 10000-char section cannot be packed whole.
    let document = doc("", &["x".repeat(10_000)]);
    let chunks = segment(&document, LIMIT, MARGIN);

    assert_eq!(chunks.len(), 1);
    assert_eq!(
        chunks[0].mode,
        ParseMode::Plain,
        "truncated content must not be sent as rich text"
    );
    assert!(chunks[0].text.chars().count() <= LIMIT);
    assert!(
        chunks[0].text.ends_with(TRUNCATION_MARKER),
        "truncated chunk must carry the marker"
    );
}

#[test]
fn every_chunk_respects_the_limit() {
    let sections: Vec<String> = (0..7).map(|i| "s".repeat(900 + i * 700)).collect();
    let document = doc("header line", &sections);
    let chunks = segment(&document, 2048, MARGIN);

    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(
            chunk.text.chars().count() <= 2048,
            "chunk {} exceeds limit: {} chars",
            chunk.index,
            chunk.text.chars().count()
        );
    }
}

#[test]
fn concatenated_chunks_reproduce_the_document() {
    // No section is oversized here, so no truncation may occur and the
    // chunk texts must concatenate back to the rendered document.
    let sections = vec!["a".repeat(1500), "b".repeat(1500), "c".repeat(1500)];
    let document = doc("daily briefing", &sections);
    let chunks = segment(&document, 2000, MARGIN);

    assert!(chunks.len() > 1);
    let rejoined: String = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rejoined, document.render());
    for (i, section) in sections.iter().enumerate() {
        let holders = chunks.iter().filter(|c| c.text.contains(section)).count();
        assert_eq!(holders, 1, "section {i} must live in exactly one chunk");
    }
}

#[test]
fn oversized_section_does_not_disturb_neighbors() {
    let sections = vec!["a".repeat(1000), "x".repeat(9000), "b".repeat(1000)];
    let document = doc("", &sections);
    let chunks = segment(&document, LIMIT, MARGIN);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].mode, ParseMode::Markdown);
    assert_eq!(chunks[1].mode, ParseMode::Plain);
    assert_eq!(chunks[2].mode, ParseMode::Markdown);
    assert!(chunks[1].text.ends_with(TRUNCATION_MARKER));
    assert!(chunks[2].text.contains(&sections[2]));
}

#[test]
fn header_only_document_is_one_chunk() {
    let document = doc("just a header", &[]);
    let chunks = segment(&document, LIMIT, MARGIN);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "just a header");
    assert_eq!(chunks[0].mode, ParseMode::Markdown);
}
