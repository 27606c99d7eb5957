//! Table of contents generation for note pages
//!
//! Extraction and rendering are separate steps over a plain `PageOutline`
//! so either can be exercised without a document:
//!
//! 1. `collect_headings` flattens the h2/h3 headings of every section after
//!    the first (the title block).
//! 2. `assign_ids` gives id-less headings `heading-{n}`.
//! 3. `build_entries` numbers the entries and `render_html` produces the
//!    `<nav>` markup that replaces the side region's content.

use crate::config::TocConfig;
use crate::text;
use tracing::debug;

/// Heading levels that appear in the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Parse a tag name such as `H2` or `h3`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

/// A heading as found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    pub level: HeadingLevel,
    /// Raw text content; trimmed when rendered
    pub text: String,
    /// Existing `id`, `None` when absent or empty
    pub id: Option<String>,
}

impl HeadingRecord {
    pub fn new(level: HeadingLevel, text: impl Into<String>, id: Option<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.filter(|id| !id.is_empty()),
        }
    }
}

/// Headings of one `<section>`, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutline {
    pub headings: Vec<HeadingRecord>,
}

/// What the TOC builder needs to know about a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOutline {
    pub has_layout_marker: bool,
    pub has_main: bool,
    pub has_aside: bool,
    pub sections: Vec<SectionOutline>,
}

impl PageOutline {
    /// Whether the page has all the regions the TOC needs
    pub fn is_applicable(&self) -> bool {
        self.has_layout_marker && self.has_main && self.has_aside
    }
}

/// One rendered line of the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: HeadingLevel,
    /// Anchor target, without `#`
    pub id: String,
    /// Link text including any numeric prefix
    pub label: String,
}

/// Everything the binding layer must apply to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocPlan {
    /// `(index into the collected headings, new id)` for headings lacking one
    pub assigned_ids: Vec<(usize, String)>,
    pub entries: Vec<TocEntry>,
    /// Replacement content for the side region
    pub html: String,
}

/// Flatten h2/h3 headings across sections, skipping the title section
pub fn collect_headings(sections: &[SectionOutline]) -> Vec<HeadingRecord> {
    sections
        .iter()
        .skip(1)
        .flat_map(|section| section.headings.iter().cloned())
        .collect()
}

/// Give each id-less heading `heading-{n}`, `n` being its 1-based position
/// among all collected headings regardless of level
pub fn assign_ids(headings: &mut [HeadingRecord]) -> Vec<(usize, String)> {
    let mut assigned = Vec::new();
    for (index, heading) in headings.iter_mut().enumerate() {
        if heading.id.is_none() {
            let id = format!("heading-{}", index + 1);
            heading.id = Some(id.clone());
            assigned.push((index, id));
        }
    }
    assigned
}

fn is_all_digits(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Number and label the entries
///
/// h2 entries are numbered `1.`, `2.`, ... counting h2s only. An h3 entry
/// is prefixed with its own id only when that id is all digits.
pub fn build_entries(headings: &[HeadingRecord]) -> Vec<TocEntry> {
    let mut h2_counter = 0;
    headings
        .iter()
        .enumerate()
        .map(|(index, heading)| {
            let id = heading
                .id
                .clone()
                .unwrap_or_else(|| format!("heading-{}", index + 1));
            let shown = text::trim(&heading.text);
            let label = match heading.level {
                HeadingLevel::H2 => {
                    h2_counter += 1;
                    format!("{}. {}", h2_counter, shown)
                }
                HeadingLevel::H3 if is_all_digits(&id) => format!("{}. {}", id, shown),
                HeadingLevel::H3 => shown.to_string(),
            };
            TocEntry {
                level: heading.level,
                id,
                label,
            }
        })
        .collect()
}

/// Render entries as the sidebar `<nav>` markup
pub fn render_html(entries: &[TocEntry], config: &TocConfig) -> String {
    let mut html = format!(
        "<nav><ol class=\"{}\">",
        escape_attr(&config.list_class)
    );
    for entry in entries {
        let link = format!(
            "<a href=\"#{}\">{}</a>",
            escape_attr(&entry.id),
            escape_text(&entry.label)
        );
        match entry.level {
            HeadingLevel::H2 => html.push_str(&format!("<li>{}</li>", link)),
            HeadingLevel::H3 => html.push_str(&format!(
                "<li class=\"{}\">{}</li>",
                escape_attr(&config.sub_item_class),
                link
            )),
        }
    }
    html.push_str("</ol></nav>");
    html
}

/// Plan the table of contents for a page
///
/// Returns `None` when the page is not a note layout, lacks a main or side
/// region, or has no headings after the title section. None of these are
/// errors; the page simply gets no TOC.
pub fn plan(page: &PageOutline, config: &TocConfig) -> Option<TocPlan> {
    if !page.is_applicable() {
        debug!(
            layout = page.has_layout_marker,
            main = page.has_main,
            aside = page.has_aside,
            "page has no TOC regions"
        );
        return None;
    }

    let mut headings = collect_headings(&page.sections);
    if headings.is_empty() {
        debug!("no headings to list");
        return None;
    }

    let assigned_ids = assign_ids(&mut headings);
    let entries = build_entries(&headings);
    let html = render_html(&entries, config);
    debug!(
        entries = entries.len(),
        assigned = assigned_ids.len(),
        "table of contents built"
    );

    Some(TocPlan {
        assigned_ids,
        entries,
        html,
    })
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
