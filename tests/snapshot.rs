use tab_launcher::snapshot::SnapshotSource;
use tab_launcher::{PopupSession, Preferences, SourceKind};
use tempfile::tempdir;

const SNAPSHOT: &str = r#"{
  "tabs": [
    { "id": 4, "windowId": 2, "title": "GitHub", "url": "https://github.com", "favIconUrl": "https://github.com/favicon.ico" }
  ],
  "bookmarks": [
    { "id": "10", "title": "Bookmarks bar" },
    { "id": "11", "title": "GitHub Docs", "url": "https://docs.github.com" }
  ],
  "history": [
    { "id": "20", "url": "https://github.com/rust-lang/rust" }
  ]
}"#;

#[test]
fn snapshot_feeds_a_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let source = SnapshotSource::load(&path).unwrap();
    let mut session = PopupSession::start(&source, Preferences::default());
    assert_eq!(session.entries().len(), 3);
    assert_eq!(session.results().len(), 1);
    assert_eq!(
        session.results()[0].icon_url.as_deref(),
        Some("https://github.com/favicon.ico")
    );

    session.set_query("github");
    let kinds: Vec<SourceKind> = session.results().iter().map(|e| e.source_kind()).collect();
    assert_eq!(
        kinds,
        vec![SourceKind::OpenPage, SourceKind::Bookmark, SourceKind::HistoryVisit]
    );
    assert_eq!(session.rows()[2].title, "Untitled");
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, SNAPSHOT).unwrap();
    let source = SnapshotSource::load(&path).unwrap();

    let copy = dir.path().join("copy.json");
    source.save(&copy).unwrap();
    let reloaded = SnapshotSource::load(&copy).unwrap();
    assert_eq!(reloaded.tabs, source.tabs);
    assert_eq!(reloaded.bookmarks, source.bookmarks);
    assert_eq!(reloaded.history, source.history);
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(SnapshotSource::load(dir.path().join("absent.json")).is_err());
}
