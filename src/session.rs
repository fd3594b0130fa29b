use crate::aggregator::aggregate;
use crate::entry::ListEntry;
use crate::launcher::{Navigation, Navigator};
use crate::platform::{PageActions, PageSource};
use crate::ranking::rank;
use crate::render::{self, ResultRow};
use crate::selection::Selection;
use crate::settings::Preferences;
use tracing::debug;

/// Keys the popup reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

/// State of one popup from opening to navigation.
pub struct PopupSession {
    preferences: Preferences,
    entries: Vec<ListEntry>,
    query: String,
    results: Vec<ListEntry>,
    selection: Selection,
    closed: bool,
}

impl PopupSession {
    /// Aggregate the browser's pages and show the open ones.
    pub fn start<S: PageSource + ?Sized>(source: &S, preferences: Preferences) -> Self {
        let entries = aggregate(source);
        debug!(count = entries.len(), "aggregated entries");
        Self::with_entries(entries, preferences)
    }

    pub fn with_entries(entries: Vec<ListEntry>, preferences: Preferences) -> Self {
        let mut session = Self {
            preferences,
            entries,
            query: String::new(),
            results: Vec::new(),
            selection: Selection::default(),
            closed: false,
        };
        session.refresh();
        session
    }

    /// Replace the input text and re-render the list.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_string();
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut results = rank(&self.entries, self.query.trim());
        results.truncate(self.preferences.result_limit as usize);
        self.selection.reset(results.len());
        self.results = results;
    }

    /// Handle a key press. Returns the navigation performed, if any; after a
    /// navigation the session is closed and ignores further keys.
    pub fn handle_key<A: PageActions + ?Sized>(
        &mut self,
        key: Key,
        actions: &A,
    ) -> anyhow::Result<Option<Navigation>> {
        if self.closed {
            return Ok(None);
        }
        match key {
            Key::ArrowDown => self.selection.move_down(),
            Key::ArrowUp => self.selection.move_up(),
            Key::Enter => return self.confirm(actions),
            Key::Other => {}
        }
        Ok(None)
    }

    fn confirm<A: PageActions + ?Sized>(
        &mut self,
        actions: &A,
    ) -> anyhow::Result<Option<Navigation>> {
        let navigator = Navigator::new(actions, &self.preferences);
        let input = self.query.trim();
        let nav = match self.selected_entry() {
            Some(entry) => navigator.open(entry)?,
            None if !input.is_empty() => navigator.open_free_text(input)?,
            None => return Ok(None),
        };
        self.closed = true;
        Ok(Some(nav))
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.selection.selected().and_then(|i| self.results.get(i))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Everything aggregated when the popup opened.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// The currently rendered list.
    pub fn results(&self) -> &[ListEntry] {
        &self.results
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        render::rows(&self.results, &self.preferences)
    }

    pub fn html(&self) -> String {
        render::render_html(&self.rows(), self.selected())
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
