use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::ai::prompt::build_digest_prompt;
use crate::core::models::{CategoryDigest, RawBlock};
use crate::errors::BriefingError;

/// Literal phrase the model is instructed to reply with when a category has
/// nothing worth reporting. Matched case-sensitively as a substring.
pub const EMPTY_SENTINEL: &str = "no notable items";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shown in place of a digest when the API call fails outright.
pub const DIGEST_FAILURE_NOTICE: &str =
    "_The digest for this category could not be generated._";

/// Shown in place of a digest when the API returned no candidates, which is
/// how a content-policy rejection surfaces.
pub const DIGEST_BLOCKED_NOTICE: &str =
    "_The digest for this category was blocked by the content policy._";

/// Gemini API client for generating per-category digests.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    /// `client` is the process-wide HTTP client, so its timeout and pool
    /// settings apply here too.
    #[must_use]
    pub fn new(client: Client, api_key: String, model: String) -> Self {
        Self::with_base_url(client, api_key, model, API_BASE_URL.to_string())
    }

    /// Same client against a different endpoint, for tests.
    #[must_use]
    pub fn with_base_url(
        client: Client,
        api_key: String,
        model: String,
        base_url: String,
    ) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client,
        }
    }

    /// Turn one category's raw block into a digest. Never fails: an empty
    /// block short-circuits to the empty sentinel without a network call,
    /// and API failures degrade to fixed notices so the category still
    /// appears in the briefing.
    pub async fn generate_digest(&self, block: &RawBlock) -> CategoryDigest {
        if block.is_empty() {
            info!(category = %block.category, "no qualifying entries, skipping digest call");
            return CategoryDigest::Empty;
        }

        let prompt = build_digest_prompt(&block.category, &block.text);
        match self.request_digest(&prompt).await {
            Ok(Some(text)) => {
                if text.contains(EMPTY_SENTINEL) {
                    CategoryDigest::Empty
                } else {
                    CategoryDigest::Ready(text.trim().to_string())
                }
            }
            Ok(None) => {
                warn!(category = %block.category, "digest response carried no candidates");
                CategoryDigest::Ready(DIGEST_BLOCKED_NOTICE.to_string())
            }
            Err(error) => {
                warn!(category = %block.category, error = %error, "digest request failed");
                CategoryDigest::Ready(DIGEST_FAILURE_NOTICE.to_string())
            }
        }
    }

    /// One-shot `generateContent` call. `Ok(None)` means the API answered
    /// but produced no text candidate.
    async fn request_digest(&self, prompt: &str) -> Result<Option<String>, BriefingError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(BriefingError::Gemini(format!("{status}: {error_text}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BriefingError::Gemini(format!("unparsable response: {e}")))?;

        Ok(extract_text(&parsed))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// First candidate's text parts, concatenated. `None` when the candidate
/// list is empty or textless.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"*Story one*"},{"text":" and more"}]}}]}"#,
        )
        .expect("valid response json");
        assert_eq!(
            extract_text(&response).as_deref(),
            Some("*Story one* and more")
        );
    }

    #[test]
    fn empty_candidates_yield_none() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).expect("valid response json");
        assert_eq!(extract_text(&response), None);

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{}"#).expect("valid response json");
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn textless_candidate_yields_none() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#)
                .expect("valid response json");
        assert_eq!(extract_text(&response), None);
    }
}
