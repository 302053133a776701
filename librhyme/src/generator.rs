//! AI rhyme generator.
//!
//! Thin adapter over an OpenAI-style chat-completion endpoint. It is never
//! called by the rhyme engine; front ends use it to offer model-written
//! rhymes next to the rule-based ones.
//!
//! Uses `reqwest` blocking client, no async runtime needed.

use crate::config::GeneratorConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use rhyme_core::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a helpful multilingual rhyming assistant.";

/// Matches an opening ```json / ``` fence or a closing ``` fence.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(?:json)?\s*|\s*```$").expect("fence regex"));

/// Failures surfaced to the user, one message per cause.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("missing word or languages")]
    MissingInput,
    #[error("API key not configured (set {0})")]
    MissingApiKey(String),
    #[error("generator API error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("failed to parse generator response")]
    Parse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("generator request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One model-written rhyme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRhyme {
    pub rhyme: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Perfect and near rhymes for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageRhymes {
    pub perfect: Vec<GeneratedRhyme>,
    pub near: Vec<GeneratedRhyme>,
}

/// Results keyed by lowercase language name.
pub type GeneratedRhymes = BTreeMap<String, LanguageRhymes>;

/// Prompt asking for a JSON array of per-language rhyme objects.
pub fn build_prompt(word: &str, languages: &[Language]) -> String {
    let names: Vec<&str> = languages.iter().map(|l| l.display_name()).collect();
    format!(
        r#"You are a multilingual rhyming expert. Provide perfect and near rhymes for the word "{word}" in the following languages: {langs}.

For each language, return the results in this exact JSON format:
{{
  "language": "Language Name",
  "perfect": [
    {{"type": "perfect", "rhyme": "word", "example": "Example sentence using the rhyme"}}
  ],
  "near": [
    {{"type": "near", "rhyme": "word", "example": "Example sentence using the rhyme"}}
  ]
}}

Return an array of these language objects. No explanations, just the JSON array."#,
        word = word,
        langs = names.join(", ")
    )
}

/// Remove a surrounding Markdown code fence, if any.
pub fn strip_code_fence(content: &str) -> String {
    let trimmed = content.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    FENCE.replace_all(trimmed, "").trim().to_string()
}

/// Parse model output into per-language rhymes.
///
/// Accepts a JSON array or a single object. Entries without a `language`, or
/// with neither `perfect` nor `near`, are dropped; a non-array `perfect` or
/// `near` becomes an empty list, as do individual items without a `rhyme`.
pub fn parse_generated(content: &str) -> Result<GeneratedRhymes, GeneratorError> {
    let cleaned = strip_code_fence(content);
    let parsed: Value = serde_json::from_str(&cleaned).map_err(|source| GeneratorError::Parse {
        raw: cleaned.clone(),
        source,
    })?;

    let entries = match parsed {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => Vec::new(),
    };

    let mut out = GeneratedRhymes::new();
    for entry in entries {
        let Some(language) = entry.get("language").and_then(Value::as_str) else {
            continue;
        };
        let perfect = entry.get("perfect");
        let near = entry.get("near");
        if perfect.is_none() && near.is_none() {
            continue;
        }
        out.insert(
            language.to_lowercase(),
            LanguageRhymes {
                perfect: rhyme_list(perfect),
                near: rhyme_list(near),
            },
        );
    }
    Ok(out)
}

fn rhyme_list(value: Option<&Value>) -> Vec<GeneratedRhyme> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Client for the hosted rhyme generator.
pub struct RhymeGenerator {
    config: GeneratorConfig,
}

impl RhymeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Ask the model for rhymes of `word` in `languages` (blocking call with timeout).
    pub fn generate(
        &self,
        word: &str,
        languages: &[Language],
    ) -> Result<GeneratedRhymes, GeneratorError> {
        let word = word.trim();
        if word.is_empty() || languages.is_empty() {
            return Err(GeneratorError::MissingInput);
        }
        let api_key = std::env::var(&self.config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GeneratorError::MissingApiKey(self.config.api_key_env.clone()))?;

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(word, languages) },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .build()?;

        let response = client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "generator API error");
            return Err(GeneratorError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text()?;
        let data: Value = serde_json::from_str(&text).map_err(|source| GeneratorError::Parse {
            raw: text.clone(),
            source,
        })?;
        let content = data
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default();
        tracing::debug!(word, chars = content.len(), "generator response");

        parse_generated(content)
    }
}
