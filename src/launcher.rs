use crate::entry::{EntryKind, ListEntry};
use crate::platform::PageActions;
use crate::settings::{Preferences, SearchEngine};
use anyhow::{bail, Context};
use tracing::debug;

/// What a confirmed row or free-text input did in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// An existing page was brought to the front.
    Activated { page_id: String, window_id: i64 },
    /// A new page was opened.
    Created { url: String },
}

/// Turn free text into the url that should be opened.
///
/// Absolute urls are returned verbatim. Text without whitespace that contains
/// a dot (not in leading position) is taken as a bare domain and gets an
/// `https://` scheme. Anything else becomes a query for `engine`.
pub fn resolve_free_text(input: &str, engine: SearchEngine) -> String {
    if url::Url::parse(input).is_ok() {
        return input.to_string();
    }
    if looks_like_domain(input) {
        return format!("https://{input}");
    }
    engine.query_url(input)
}

fn looks_like_domain(input: &str) -> bool {
    !input.chars().any(char::is_whitespace) && input.contains('.') && !input.starts_with('.')
}

/// Carries out confirmed selections against the browser.
pub struct Navigator<'a, A: PageActions + ?Sized> {
    actions: &'a A,
    preferences: &'a Preferences,
}

impl<'a, A: PageActions + ?Sized> Navigator<'a, A> {
    pub fn new(actions: &'a A, preferences: &'a Preferences) -> Self {
        Self {
            actions,
            preferences,
        }
    }

    /// Switch to an open page, or open a bookmark/history location in a new
    /// page.
    pub fn open(&self, entry: &ListEntry) -> anyhow::Result<Navigation> {
        match entry.kind {
            EntryKind::OpenPage { window_id } => {
                debug!(page = %entry.id, window_id, "activating open page");
                self.actions
                    .activate_page(&entry.id, window_id)
                    .with_context(|| format!("failed to activate page {}", entry.id))?;
                Ok(Navigation::Activated {
                    page_id: entry.id.clone(),
                    window_id,
                })
            }
            EntryKind::Bookmark | EntryKind::HistoryVisit => self.create(&entry.url),
        }
    }

    /// Open free text as a url, a bare domain or a web search.
    pub fn open_free_text(&self, input: &str) -> anyhow::Result<Navigation> {
        let url = resolve_free_text(input, self.preferences.search_engine);
        self.create(&url)
    }

    fn create(&self, url: &str) -> anyhow::Result<Navigation> {
        debug!(url, "opening new page");
        self.actions
            .create_page(url)
            .with_context(|| format!("failed to open {url}"))?;
        Ok(Navigation::Created {
            url: url.to_string(),
        })
    }
}

/// [`PageActions`] for desktop use: new pages open in the system's default
/// browser. The launcher has no handle on existing browser pages, so
/// activation is unsupported.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl PageActions for SystemOpener {
    fn activate_page(&self, page_id: &str, _window_id: i64) -> anyhow::Result<()> {
        bail!("cannot activate page {page_id} from outside the browser")
    }

    fn create_page(&self, url: &str) -> anyhow::Result<()> {
        open::that(url)?;
        Ok(())
    }
}
