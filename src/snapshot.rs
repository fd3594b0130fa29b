use crate::platform::{BookmarkNode, HistoryItem, PageSource, TabInfo};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A [`PageSource`] backed by a captured JSON document of tabs, bookmarks and
/// history, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotSource {
    #[serde(default)]
    pub tabs: Vec<TabInfo>,
    #[serde(default)]
    pub bookmarks: Vec<BookmarkNode>,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

impl SnapshotSource {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl PageSource for SnapshotSource {
    fn open_pages(&self) -> anyhow::Result<Vec<TabInfo>> {
        Ok(self.tabs.clone())
    }

    fn recent_bookmarks(&self, limit: usize) -> anyhow::Result<Vec<BookmarkNode>> {
        Ok(self.bookmarks.iter().take(limit).cloned().collect())
    }

    fn recent_history(&self, text: &str, limit: usize) -> anyhow::Result<Vec<HistoryItem>> {
        let needle = text.to_lowercase();
        Ok(self
            .history
            .iter()
            .filter(|h| {
                needle.is_empty()
                    || h.url.to_lowercase().contains(&needle)
                    || h.title
                        .as_deref()
                        .is_some_and(|t| t.to_lowercase().contains(&needle))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
