use crate::entry::{EntryKind, ListEntry};
use crate::platform::{BookmarkNode, HistoryItem, PageSource, TabInfo};
use tracing::{debug, warn};

/// Number of bookmarks requested from the browser.
pub const BOOKMARK_FETCH_LIMIT: usize = 100;
/// Number of history visits requested from the browser.
pub const HISTORY_FETCH_LIMIT: usize = 100;

impl From<TabInfo> for ListEntry {
    fn from(tab: TabInfo) -> Self {
        ListEntry {
            id: tab.id.to_string(),
            title: tab.title.unwrap_or_default(),
            url: tab.url,
            icon_url: tab.fav_icon_url.filter(|u| !u.is_empty()),
            kind: EntryKind::OpenPage {
                window_id: tab.window_id,
            },
        }
    }
}

impl From<HistoryItem> for ListEntry {
    fn from(item: HistoryItem) -> Self {
        ListEntry {
            id: item.id,
            title: item.title.unwrap_or_default(),
            url: item.url,
            icon_url: None,
            kind: EntryKind::HistoryVisit,
        }
    }
}

/// Folder nodes have no url and are dropped.
fn bookmark_entry(node: BookmarkNode) -> Option<ListEntry> {
    let url = node.url.filter(|u| !u.is_empty())?;
    Some(ListEntry {
        id: node.id,
        title: node.title.unwrap_or_default(),
        url,
        icon_url: None,
        kind: EntryKind::Bookmark,
    })
}

fn settle<T>(name: &str, joined: std::thread::Result<anyhow::Result<Vec<T>>>) -> Vec<T> {
    match joined {
        Ok(Ok(items)) => {
            debug!(source = name, count = items.len(), "fetched");
            items
        }
        Ok(Err(e)) => {
            warn!(source = name, error = %e, "fetch failed; continuing without it");
            Vec::new()
        }
        Err(_) => {
            warn!(source = name, "fetch panicked; continuing without it");
            Vec::new()
        }
    }
}

/// Fetch open pages, recent bookmarks and recent history concurrently and
/// merge them into one list tagged by kind.
///
/// Entries are ordered open pages, bookmarks, history, each in the order the
/// source reported them. A source that fails contributes nothing.
pub fn aggregate<S: PageSource + ?Sized>(source: &S) -> Vec<ListEntry> {
    let (tabs, bookmarks, history) = std::thread::scope(|s| {
        let tabs = s.spawn(|| source.open_pages());
        let bookmarks = s.spawn(|| source.recent_bookmarks(BOOKMARK_FETCH_LIMIT));
        let history = s.spawn(|| source.recent_history("", HISTORY_FETCH_LIMIT));
        (tabs.join(), bookmarks.join(), history.join())
    });

    let tabs = settle("tabs", tabs);
    let bookmarks = settle("bookmarks", bookmarks);
    let history = settle("history", history);

    let mut entries = Vec::with_capacity(tabs.len() + bookmarks.len() + history.len());
    entries.extend(tabs.into_iter().map(ListEntry::from));
    entries.extend(bookmarks.into_iter().filter_map(bookmark_entry));
    entries.extend(history.into_iter().map(ListEntry::from));
    entries
}
