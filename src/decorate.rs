//! Cell decoration
//!
//! Each non-empty data cell keeps its raw text in `data-andes-tooltip` and is
//! then tried as a number, a date and a status, in that order. The first hit
//! rewrites the cell and the rest are skipped.

use tracing::trace;

use crate::classify::{classify_status, Tone};
use crate::dom::{Document, NodeId};
use crate::markup::{ATTR_TOOLTIP, CLASS_CELL, CLASS_CELL_NUMERIC, CLASS_CHIP};
use crate::parse::{format_date_text, format_number_text, NumberLocale};
use crate::structure::data_cells;

/// What a cell's text was recognized as, with its rewritten form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Numeric(String),
    Date(String),
    Status(Tone),
    Plain,
}

/// Pure classification of trimmed cell text, in fixed priority order
pub fn classify_cell(text: &str, locale: &NumberLocale) -> CellKind {
    if let Some(formatted) = format_number_text(text, locale) {
        return CellKind::Numeric(formatted);
    }
    if let Some(formatted) = format_date_text(text) {
        return CellKind::Date(formatted);
    }
    match classify_status(text) {
        Some(tone) => CellKind::Status(tone),
        None => CellKind::Plain,
    }
}

/// Decorate one cell. Empty and whitespace-only cells are left alone and
/// yield `None`.
pub fn decorate_cell(doc: &mut Document, cell: NodeId, locale: &NumberLocale) -> Option<CellKind> {
    let content = doc.text_content(cell);
    let raw = content.trim();
    if raw.is_empty() {
        return None;
    }

    doc.set_attribute(cell, ATTR_TOOLTIP, raw);
    doc.set_attribute(cell, "tabindex", "0");
    doc.add_class(cell, CLASS_CELL);

    let kind = classify_cell(raw, locale);
    match &kind {
        CellKind::Numeric(formatted) => {
            doc.set_text(cell, formatted);
            doc.add_class(cell, CLASS_CELL_NUMERIC);
        }
        CellKind::Date(formatted) => doc.set_text(cell, formatted),
        CellKind::Status(tone) => {
            doc.clear_children(cell);
            let chip = doc.create_element("span");
            doc.add_class(chip, CLASS_CHIP);
            doc.add_class(chip, &tone.chip_class());
            doc.set_text(chip, raw);
            doc.append_child(cell, chip);
        }
        CellKind::Plain => {}
    }
    trace!(?cell, ?kind, "decorated cell");
    Some(kind)
}

/// Counts per category from one decoration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationSummary {
    pub numeric: usize,
    pub date: usize,
    pub status: usize,
    pub plain: usize,
    pub empty: usize,
}

pub fn decorate_cells(doc: &mut Document, table: NodeId, locale: &NumberLocale) -> DecorationSummary {
    let mut summary = DecorationSummary::default();
    for cell in data_cells(doc, table) {
        match decorate_cell(doc, cell, locale) {
            Some(CellKind::Numeric(_)) => summary.numeric += 1,
            Some(CellKind::Date(_)) => summary.date += 1,
            Some(CellKind::Status(_)) => summary.status += 1,
            Some(CellKind::Plain) => summary.plain += 1,
            None => summary.empty += 1,
        }
    }
    summary
}
