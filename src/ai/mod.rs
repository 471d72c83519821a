//! Gemini API client module
//!
//! Encapsulates the digest-generation call and its prompt.

pub mod client;
pub mod prompt;

pub use client::{DIGEST_BLOCKED_NOTICE, DIGEST_FAILURE_NOTICE, EMPTY_SENTINEL, GeminiClient};
