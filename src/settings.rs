use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PREFERENCES_FILE: &str = "preferences.json";

pub const MIN_RESULT_LIMIT: u32 = 10;
pub const MAX_RESULT_LIMIT: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    Baidu,
}

impl SearchEngine {
    /// Search url prefix; the percent-encoded query is appended to it.
    pub fn query_prefix(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::Baidu => "https://www.baidu.com/s?wd=",
        }
    }

    pub fn query_url(self, query: &str) -> String {
        format!("{}{}", self.query_prefix(), urlencoding::encode(query))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::Baidu => "baidu",
        }
    }
}

/// Unknown or missing engine names fall back to Google.
impl From<&str> for SearchEngine {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bing" => SearchEngine::Bing,
            "baidu" => SearchEngine::Baidu,
            _ => SearchEngine::Google,
        }
    }
}

impl From<Option<String>> for SearchEngine {
    fn from(name: Option<String>) -> Self {
        name.as_deref().map(SearchEngine::from).unwrap_or_default()
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchEngine::Google => write!(f, "Google"),
            SearchEngine::Bing => write!(f, "Bing"),
            SearchEngine::Baidu => write!(f, "Baidu"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Engine used when free text is neither a url nor a bare domain.
    #[serde(default)]
    pub search_engine: SearchEngine,
    /// Maximum number of rows rendered in the popup.
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    #[serde(default = "default_true")]
    pub show_type_labels: bool,
    #[serde(default = "default_true")]
    pub show_favicons: bool,
}

fn default_result_limit() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            search_engine: SearchEngine::Google,
            result_limit: default_result_limit(),
            show_type_labels: true,
            show_favicons: true,
        }
    }
}

impl Preferences {
    /// Load preferences from `path`. A missing or empty file yields the
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut prefs: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse preferences {}", path.display()))?;
        if prefs.validate().is_err() {
            tracing::warn!(
                "stored result limit {} is out of range; using {}",
                prefs.result_limit,
                default_result_limit()
            );
            prefs.result_limit = default_result_limit();
        }
        Ok(prefs)
    }

    /// Persist to `path`. Nothing is written when validation fails.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(MIN_RESULT_LIMIT..=MAX_RESULT_LIMIT).contains(&self.result_limit) {
            bail!(
                "result limit must be between {} and {}",
                MIN_RESULT_LIMIT,
                MAX_RESULT_LIMIT
            );
        }
        Ok(())
    }

    /// Overwrite `path` with the defaults and return them.
    pub fn reset(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let prefs = Self::default();
        prefs.save(path)?;
        Ok(prefs)
    }

    /// First-run initialisation: record Google as the search engine when the
    /// store has none, leaving every other key untouched. Returns whether the
    /// file was written.
    pub fn ensure_defaults(path: impl AsRef<Path>) -> anyhow::Result<bool> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        let mut map: serde_json::Map<String, serde_json::Value> = if content.trim().is_empty() {
            serde_json::Map::new()
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse preferences {}", path.display()))?
        };
        let has_engine = map
            .get("searchEngine")
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.is_empty());
        if has_engine {
            return Ok(false);
        }
        map.insert(
            "searchEngine".into(),
            serde_json::Value::String(SearchEngine::Google.as_str().into()),
        );
        std::fs::write(path, serde_json::to_string_pretty(&map)?)?;
        Ok(true)
    }
}
