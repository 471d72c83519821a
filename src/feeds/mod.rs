//! Feed collection: fetch configured RSS/Atom sources and reduce them to
//! per-category raw text blocks for summarization.

pub mod collect;

pub use collect::{FeedItem, collect_category};
