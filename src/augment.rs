//! Row and table level augmentation: sort-control tooltips, action buttons
//! and top-row highlighting

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{RowAction, SortLabels};
use crate::dom::{Document, NodeId};
use crate::markup::{
    ATTR_ACTION, CLASS_ACTION_BUTTON, CLASS_ACTION_GROUP, CLASS_CELL_ACTIONS, CLASS_ROW_HIGHLIGHT,
};
use crate::structure::{body_rows, header_cells, row_cells};

/// Sort direction as announced by a sort control's accessible label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

static DESCENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdesc(?:end\w*)?\b").expect("valid descending pattern"));
static ASCENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\basc(?:end\w*)?\b").expect("valid ascending pattern"));

impl SortDirection {
    /// Only whole direction words count ("asc", "ascending", "descendente"),
    /// so column names such as "Cascada" in the label are ignored
    pub fn from_label(label: &str) -> Option<Self> {
        if DESCENDING.is_match(label) {
            Some(SortDirection::Descending)
        } else if ASCENDING.is_match(label) {
            Some(SortDirection::Ascending)
        } else {
            None
        }
    }
}

/// The sort toggle embedded in a header cell, if any
fn sort_control(doc: &Document, header: NodeId) -> Option<NodeId> {
    doc.find_first(header, |el| {
        (el.is("button") || el.attribute("role") == Some("button")) && el.attribute("aria-label").is_some()
    })
}

/// Set the tooltip of every header sort control from its current direction.
/// Returns how many controls were retitled.
pub fn retitle_sort_controls(doc: &mut Document, table: NodeId, labels: &SortLabels) -> usize {
    let mut retitled = 0;
    for header in header_cells(doc, table) {
        let Some(control) = sort_control(doc, header) else { continue };
        let direction = doc.attribute(control, "aria-label").and_then(SortDirection::from_label);
        let title = match direction {
            Some(SortDirection::Ascending) => &labels.ascending,
            Some(SortDirection::Descending) => &labels.descending,
            None => continue,
        };
        doc.set_attribute(control, "title", title);
        retitled += 1;
    }
    retitled
}

/// Index of the header whose trimmed text equals `label`, ignoring case
pub fn find_actions_column(doc: &Document, table: NodeId, label: &str) -> Option<usize> {
    let wanted = label.trim().to_lowercase();
    header_cells(doc, table)
        .into_iter()
        .position(|th| doc.text_content(th).trim().to_lowercase() == wanted)
}

fn build_action_button(doc: &mut Document, action: &RowAction) -> NodeId {
    let button = doc.create_element("button");
    doc.set_attribute(button, "type", "button");
    doc.add_class(button, CLASS_ACTION_BUTTON);
    doc.add_class(button, &format!("{}--{}", CLASS_ACTION_BUTTON, action.id));
    doc.set_attribute(button, ATTR_ACTION, &action.id);
    doc.set_attribute(button, "title", &action.tooltip);
    doc.set_attribute(button, "aria-label", &action.tooltip);
    if !action.glyph.is_empty() {
        doc.set_text(button, &action.glyph);
    }
    button
}

/// Replace the content of each row's `column` cell with the action buttons.
/// Rows too short to have that column are skipped. Returns rows filled.
pub fn inject_actions(doc: &mut Document, table: NodeId, column: usize, actions: &[RowAction]) -> usize {
    let mut filled = 0;
    for row in body_rows(doc, table) {
        let Some(&cell) = row_cells(doc, row).get(column) else {
            debug!(?row, column, "row has no actions cell");
            continue;
        };
        doc.clear_children(cell);
        doc.add_class(cell, CLASS_CELL_ACTIONS);

        let group = doc.create_element("div");
        doc.add_class(group, CLASS_ACTION_GROUP);
        for action in actions {
            let button = build_action_button(doc, action);
            doc.append_child(group, button);
        }
        doc.append_child(cell, group);
        filled += 1;
    }
    filled
}

/// Mark the first `count` data rows. Returns rows marked.
pub fn highlight_top_rows(doc: &mut Document, table: NodeId, count: usize) -> usize {
    let rows: Vec<NodeId> = body_rows(doc, table).into_iter().take(count).collect();
    for &row in &rows {
        doc.add_class(row, CLASS_ROW_HIGHLIGHT);
    }
    rows.len()
}
