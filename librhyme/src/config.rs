use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rhyme-finder configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All engine thresholds from `rhyme_core::Config` (flattened via serde)
/// - The `[generator]` table for the AI rhyme generator
///
/// # Example
///
/// ```rust
/// use librhyme::RhymeConfig;
///
/// let config = RhymeConfig::from_toml_str("max_results = 5\n[generator]\nenabled = false\n").unwrap();
/// assert_eq!(config.base().max_results, 5);
/// assert!(!config.generator.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RhymeConfig {
    /// Engine thresholds and limits
    #[serde(flatten)]
    pub base: rhyme_core::Config,

    pub generator: GeneratorConfig,
}

/// Settings for the hosted chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Set to false to refuse generator calls entirely.
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_ms: u64,
    /// Environment variable holding the bearer token.
    pub api_key_env: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout_ms: 30_000,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl RhymeConfig {
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("serialize config")?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Convert this config into the base config for `rhyme_core::Engine`.
    pub fn into_base(self) -> rhyme_core::Config {
        self.base
    }

    pub fn base(&self) -> &rhyme_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut rhyme_core::Config {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = RhymeConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, RhymeConfig::default());
        assert_eq!(cfg.generator.api_key_env, "OPENAI_API_KEY");
        assert!(cfg.generator.enabled);
    }

    #[test]
    fn base_keys_sit_at_the_top_level() {
        let cfg = RhymeConfig::from_toml_str(
            "min_similarity = 0.75\n\n[generator]\nmodel = \"gpt-4o-mini\"\n",
        )
        .unwrap();
        assert_eq!(cfg.base().min_similarity, 0.75);
        assert_eq!(cfg.generator.model, "gpt-4o-mini");
        assert_eq!(cfg.generator.max_tokens, 1024);
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!("librhyme_cfg_{}.toml", std::process::id()));
        let mut cfg = RhymeConfig::default();
        cfg.base_mut().max_results = 12;
        cfg.save_toml(&path).unwrap();
        assert_eq!(RhymeConfig::load_toml(&path).unwrap(), cfg);
        let _ = std::fs::remove_file(path);
    }
}
