use serde::{Deserialize, Serialize};

/// Which collection an entry was aggregated from.
///
/// The declaration order doubles as the ranking priority: open pages first,
/// then bookmarks, then history visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceKind {
    OpenPage,
    Bookmark,
    HistoryVisit,
}

impl SourceKind {
    pub fn priority(self) -> u8 {
        match self {
            SourceKind::OpenPage => 0,
            SourceKind::Bookmark => 1,
            SourceKind::HistoryVisit => 2,
        }
    }

    /// Icon shown when the entry has no favicon of its own.
    pub fn default_icon(self) -> &'static str {
        match self {
            SourceKind::OpenPage => "images/default-icon.svg",
            SourceKind::Bookmark => "images/bookmark-icon.svg",
            SourceKind::HistoryVisit => "images/history-icon.svg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::OpenPage => "Tab",
            SourceKind::Bookmark => "Bookmark",
            SourceKind::HistoryVisit => "History",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SourceKind::OpenPage => "result-type-tab",
            SourceKind::Bookmark => "result-type-bookmark",
            SourceKind::HistoryVisit => "result-type-history",
        }
    }
}

/// Kind-specific data carried by an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryKind {
    /// An open page lives in a browser window, which must be focused to
    /// switch to it.
    OpenPage { window_id: i64 },
    Bookmark,
    HistoryVisit,
}

/// One row candidate in the launcher list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl ListEntry {
    pub fn source_kind(&self) -> SourceKind {
        match self.kind {
            EntryKind::OpenPage { .. } => SourceKind::OpenPage,
            EntryKind::Bookmark => SourceKind::Bookmark,
            EntryKind::HistoryVisit => SourceKind::HistoryVisit,
        }
    }

    /// Window containing the page, only known for open pages.
    pub fn window_id(&self) -> Option<i64> {
        match self.kind {
            EntryKind::OpenPage { window_id } => Some(window_id),
            EntryKind::Bookmark | EntryKind::HistoryVisit => None,
        }
    }

    /// Case-insensitive substring match on title or url. `needle` must
    /// already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.url.to_lowercase().contains(needle)
    }
}
