//! Page window described by the host's `page`, `pageSize` and `totalRows`

use std::ops::Range;

use crate::dom::{Document, NodeId};
use crate::markup::CLASS_PAGINATION_SUMMARY;
use crate::options::TableOptions;

pub const DEFAULT_PAGE_SIZES: [u64; 3] = [25, 50, 100];

/// Positive entries of `sizes`, or the defaults when none remain
pub fn valid_page_sizes(sizes: &[i64]) -> Vec<u64> {
    let valid: Vec<u64> = sizes.iter().filter_map(|&s| u64::try_from(s).ok()).filter(|&s| s > 0).collect();
    if valid.is_empty() {
        DEFAULT_PAGE_SIZES.to_vec()
    } else {
        valid
    }
}

/// `requested` when it is one of `valid`, else the first valid size
pub fn resolve_page_size(valid: &[u64], requested: Option<u64>) -> u64 {
    match requested {
        Some(size) if valid.contains(&size) => size,
        _ => valid.first().copied().unwrap_or(DEFAULT_PAGE_SIZES[0]),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based, always within `1..=total_pages`
    pub page: u64,
    pub page_size: u64,
    pub total_rows: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// Clamp `page` into range. A zero `page_size` uses the first default size.
    pub fn new(page: u64, page_size: u64, total_rows: u64) -> Self {
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZES[0] } else { page_size };
        let total_pages = total_rows.div_ceil(page_size).max(1);
        Self { page: page.clamp(1, total_pages), page_size, total_rows, total_pages }
    }

    /// Pagination for a table whose options carry `totalRows`; `None` otherwise
    pub fn from_options(options: &TableOptions, page_sizes: &[i64]) -> Option<Self> {
        let total_rows = options.total_rows?;
        let valid = valid_page_sizes(page_sizes);
        let page_size = resolve_page_size(&valid, options.page_size);
        Some(Self::new(options.page.unwrap_or(1), page_size, total_rows))
    }

    /// Zero-based row indices shown on the current page
    pub fn rows(&self) -> Range<u64> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(self.total_rows);
        let end = start.saturating_add(self.page_size).min(self.total_rows);
        start..end
    }

    /// "21–40 de 140"; nothing for an empty table
    pub fn summary(&self) -> Option<String> {
        if self.total_rows == 0 {
            return None;
        }
        let rows = self.rows();
        Some(format!("{}–{} de {}", rows.start + 1, rows.end, self.total_rows))
    }
}

/// Write the summary into `container`, reusing an existing summary element.
/// Returns the element, or `None` when there is nothing to show.
pub fn render_summary(doc: &mut Document, container: NodeId, pagination: &Pagination) -> Option<NodeId> {
    let text = pagination.summary()?;
    let existing = doc
        .element_children(container)
        .into_iter()
        .find(|&c| doc.has_class(c, CLASS_PAGINATION_SUMMARY));
    let summary = match existing {
        Some(summary) => summary,
        None => {
            let summary = doc.create_element("div");
            doc.add_class(summary, CLASS_PAGINATION_SUMMARY);
            doc.append_child(container, summary);
            summary
        }
    };
    doc.set_text(summary, &text);
    Some(summary)
}
