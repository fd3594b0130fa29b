use crate::entry::{ListEntry, SourceKind};

/// Filter and order `entries` for `query`.
///
/// The query is matched as given apart from case; callers trim user input.
/// An empty query shows the open pages only, as aggregated. Otherwise every
/// entry whose title or url contains the query (ignoring case) is kept and
/// the survivors are stably sorted by source priority, so entries of the
/// same kind keep their aggregation order.
pub fn rank(entries: &[ListEntry], query: &str) -> Vec<ListEntry> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return entries
            .iter()
            .filter(|e| e.source_kind() == SourceKind::OpenPage)
            .cloned()
            .collect();
    }
    let mut matched: Vec<ListEntry> = entries
        .iter()
        .filter(|e| e.matches(&needle))
        .cloned()
        .collect();
    matched.sort_by_key(|e| e.source_kind().priority());
    matched
}
