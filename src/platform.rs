//! Browser surfaces the launcher talks to.
//!
//! The records mirror what a browser reports for tabs, bookmarks and history
//! items, so a bridge can deserialize them straight from the browser's JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: i64,
    pub window_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

/// A bookmark tree node. Folders have no url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

/// Read-only queries against the browser.
///
/// Implementations are called from several threads at once during
/// aggregation.
pub trait PageSource: Send + Sync {
    /// Every open page in every window.
    fn open_pages(&self) -> anyhow::Result<Vec<TabInfo>>;
    /// The `limit` most recently added bookmark nodes, folders included.
    fn recent_bookmarks(&self, limit: usize) -> anyhow::Result<Vec<BookmarkNode>>;
    /// The `limit` most recent history items matching `text`. An empty text
    /// matches everything.
    fn recent_history(&self, text: &str, limit: usize) -> anyhow::Result<Vec<HistoryItem>>;
}

/// Side-effecting browser actions.
pub trait PageActions {
    /// Make page `page_id` the active page and focus `window_id`.
    fn activate_page(&self, page_id: &str, window_id: i64) -> anyhow::Result<()>;
    /// Open a new page at `url`.
    fn create_page(&self, url: &str) -> anyhow::Result<()>;
}
