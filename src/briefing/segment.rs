//! Boundary-aware splitting of the briefing document into chunks that
//! respect the delivery endpoint's hard character cap.
//!
//! Split points are section boundaries only: an arbitrary mid-text split
//! could sever paired Markdown markers and make the whole chunk unparsable.
//! Truncation is confined to the pathological case of a single oversized
//! section, and only that case downgrades the chunk to plain mode, since a
//! cut can land mid-token.

use crate::briefing::compose::SECTION_SEPARATOR;
use crate::core::models::{Chunk, Document, ParseMode};

/// Appended to a section that had to be cut to fit the limit.
pub const TRUNCATION_MARKER: &str = "\n\u{2026} (message truncated)";

/// Split `document` into ordered chunks of at most `limit` characters.
///
/// Policy, in priority order:
/// 1. The whole document fits: one rich chunk.
/// 2. Greedily pack whole sections (with their separators) into chunks.
/// 3. A section that alone exceeds `limit` is cut to `limit - margin`
///    characters, marked, and emitted as its own plain-mode chunk.
///
/// `margin` is clamped to at least the marker length so the marker always
/// fits.
pub fn segment(document: &Document, limit: usize, margin: usize) -> Vec<Chunk> {
    let full = document.render();
    if char_len(&full) <= limit {
        return vec![Chunk {
            text: full,
            mode: ParseMode::Markdown,
            index: 0,
        }];
    }

    let margin = margin.max(char_len(TRUNCATION_MARKER));
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for part in rendered_parts(document) {
        let part_len = char_len(&part);

        if part_len > limit {
            if !current.is_empty() {
                push_chunk(&mut chunks, std::mem::take(&mut current), ParseMode::Markdown);
                current_len = 0;
            }
            let kept: String = part.chars().take(limit.saturating_sub(margin)).collect();
            push_chunk(
                &mut chunks,
                format!("{kept}{TRUNCATION_MARKER}"),
                ParseMode::Plain,
            );
            continue;
        }

        if current_len + part_len > limit {
            push_chunk(&mut chunks, std::mem::take(&mut current), ParseMode::Markdown);
            current_len = 0;
        }
        current.push_str(&part);
        current_len += part_len;
    }

    if !current.is_empty() {
        push_chunk(&mut chunks, current, ParseMode::Markdown);
    }

    chunks
}

/// Header and sections in document order, each carrying its trailing
/// separator except the last, so concatenating all parts reproduces
/// `document.render()` exactly.
fn rendered_parts(document: &Document) -> Vec<String> {
    let mut parts: Vec<&str> = Vec::with_capacity(document.sections.len() + 1);
    if !document.header.is_empty() {
        parts.push(&document.header);
    }
    parts.extend(document.sections.iter().map(String::as_str));

    let last = parts.len().saturating_sub(1);
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            if i < last {
                format!("{part}{SECTION_SEPARATOR}")
            } else {
                part.to_string()
            }
        })
        .collect()
}

fn push_chunk(chunks: &mut Vec<Chunk>, text: String, mode: ParseMode) {
    let index = chunks.len();
    chunks.push(Chunk { text, mode, index });
}

/// The endpoint's limit counts characters, not bytes.
fn char_len(text: &str) -> usize {
    text.chars().count()
}
