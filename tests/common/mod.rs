#![allow(dead_code)]

use std::sync::Mutex;
use tab_launcher::platform::{BookmarkNode, HistoryItem, PageActions, PageSource, TabInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Activate { page_id: String, window_id: i64 },
    Create { url: String },
}

/// In-memory browser that records every action it is asked to perform.
#[derive(Default)]
pub struct MockBrowser {
    pub tabs: Vec<TabInfo>,
    pub bookmarks: Vec<BookmarkNode>,
    pub history: Vec<HistoryItem>,
    pub fail_tabs: bool,
    pub fail_bookmarks: bool,
    pub fail_history: bool,
    pub fail_actions: bool,
    pub calls: Mutex<Vec<Call>>,
    pub requested_limits: Mutex<Vec<(&'static str, usize)>>,
}

impl MockBrowser {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Create { .. }))
            .count()
    }
}

impl PageSource for MockBrowser {
    fn open_pages(&self) -> anyhow::Result<Vec<TabInfo>> {
        if self.fail_tabs {
            anyhow::bail!("tabs unavailable");
        }
        Ok(self.tabs.clone())
    }

    fn recent_bookmarks(&self, limit: usize) -> anyhow::Result<Vec<BookmarkNode>> {
        self.requested_limits.lock().unwrap().push(("bookmarks", limit));
        if self.fail_bookmarks {
            anyhow::bail!("bookmarks unavailable");
        }
        Ok(self.bookmarks.iter().take(limit).cloned().collect())
    }

    fn recent_history(&self, _text: &str, limit: usize) -> anyhow::Result<Vec<HistoryItem>> {
        self.requested_limits.lock().unwrap().push(("history", limit));
        if self.fail_history {
            anyhow::bail!("history unavailable");
        }
        Ok(self.history.iter().take(limit).cloned().collect())
    }
}

impl PageActions for MockBrowser {
    fn activate_page(&self, page_id: &str, window_id: i64) -> anyhow::Result<()> {
        if self.fail_actions {
            anyhow::bail!("browser went away");
        }
        self.calls.lock().unwrap().push(Call::Activate {
            page_id: page_id.into(),
            window_id,
        });
        Ok(())
    }

    fn create_page(&self, url: &str) -> anyhow::Result<()> {
        if self.fail_actions {
            anyhow::bail!("browser went away");
        }
        self.calls.lock().unwrap().push(Call::Create { url: url.into() });
        Ok(())
    }
}

pub fn tab(id: i64, window_id: i64, title: &str, url: &str) -> TabInfo {
    TabInfo {
        id,
        window_id,
        title: Some(title.into()),
        url: url.into(),
        fav_icon_url: None,
    }
}

pub fn bookmark(id: &str, title: &str, url: &str) -> BookmarkNode {
    BookmarkNode {
        id: id.into(),
        title: Some(title.into()),
        url: Some(url.into()),
    }
}

pub fn folder(id: &str, title: &str) -> BookmarkNode {
    BookmarkNode {
        id: id.into(),
        title: Some(title.into()),
        url: None,
    }
}

pub fn visit(id: &str, title: &str, url: &str) -> HistoryItem {
    HistoryItem {
        id: id.into(),
        title: Some(title.into()),
        url: url.into(),
    }
}

/// Two tabs, two bookmarks (plus a folder) and two history visits, several of
/// which mention "rust".
pub fn sample_browser() -> MockBrowser {
    MockBrowser {
        tabs: vec![
            tab(1, 10, "Rust Playground", "https://play.rust-lang.org"),
            tab(2, 11, "Inbox", "https://mail.example.com"),
        ],
        bookmarks: vec![
            bookmark("b1", "The Rust Book", "https://doc.rust-lang.org/book"),
            folder("b2", "Reading"),
            bookmark("b3", "Weather", "https://weather.example.com"),
        ],
        history: vec![
            visit("h1", "Crates", "https://crates.io/search?q=RUST"),
            visit("h2", "News", "https://news.example.com"),
        ],
        ..Default::default()
    }
}
