//! Keyboard quick-launcher over a browser's open pages, bookmarks and
//! history.
//!
//! A [`session::PopupSession`] aggregates the three collections from a
//! [`platform::PageSource`], ranks them against the typed query and, on
//! Enter, switches to or opens a page through [`platform::PageActions`].

pub mod aggregator;
pub mod entry;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod ranking;
pub mod render;
pub mod selection;
pub mod session;
pub mod settings;
pub mod snapshot;

pub use entry::{EntryKind, ListEntry, SourceKind};
pub use launcher::{Navigation, Navigator};
pub use session::{Key, PopupSession};
pub use settings::{Preferences, SearchEngine};
