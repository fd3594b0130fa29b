use crate::entry::{ListEntry, SourceKind};
use crate::settings::Preferences;

pub const UNTITLED: &str = "Untitled";
pub const FALLBACK_ICON: &str = "images/default-icon.svg";
pub const NO_RESULTS: &str = "No matching results, press Enter to open in a new tab";

/// A display-ready row of the popup list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub url: String,
    pub kind: SourceKind,
    /// `None` when favicons are turned off.
    pub icon: Option<String>,
    /// `None` when type labels are turned off.
    pub label: Option<&'static str>,
}

impl ResultRow {
    pub fn new(entry: &ListEntry, prefs: &Preferences) -> Self {
        let kind = entry.source_kind();
        let title = if entry.title.is_empty() {
            UNTITLED.to_string()
        } else {
            entry.title.clone()
        };
        let icon = prefs.show_favicons.then(|| {
            entry
                .icon_url
                .clone()
                .unwrap_or_else(|| kind.default_icon().to_string())
        });
        Self {
            title,
            url: entry.url.clone(),
            kind,
            icon,
            label: prefs.show_type_labels.then(|| kind.label()),
        }
    }
}

pub fn rows(entries: &[ListEntry], prefs: &Preferences) -> Vec<ResultRow> {
    entries.iter().map(|e| ResultRow::new(e, prefs)).collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the result list. `selected` marks the highlighted row.
pub fn render_html(rows: &[ResultRow], selected: Option<usize>) -> String {
    if rows.is_empty() {
        return format!(r#"<div class="no-results">{NO_RESULTS}</div>"#);
    }
    let mut html = String::new();
    for (i, row) in rows.iter().enumerate() {
        let class = if selected == Some(i) {
            "result-item selected"
        } else {
            "result-item"
        };
        html.push_str(&format!(r#"<div class="{class}">"#));
        if let Some(icon) = &row.icon {
            html.push_str(&format!(
                r#"<img class="result-icon" src="{}" onerror="this.src='{FALLBACK_ICON}'">"#,
                escape_html(icon)
            ));
        }
        html.push_str(&format!(
            r#"<div class="result-content"><div class="result-title">{}</div>"#,
            escape_html(&row.title)
        ));
        html.push_str(&format!(
            r#"<div class="result-url">{}</div></div>"#,
            escape_html(&row.url)
        ));
        if let Some(label) = row.label {
            html.push_str(&format!(
                r#"<div class="result-type {}">{label}</div>"#,
                row.kind.css_class()
            ));
        }
        html.push_str("</div>");
    }
    html
}
