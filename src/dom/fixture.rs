//! Test helpers that build host-style table markup

use super::{Document, NodeId, Overflow, ScrollMetrics};
use crate::markup::ATTR_TEST_ID;

/// Handles into a table built by [`build_table`]
#[derive(Debug, Clone)]
pub(crate) struct TableFixture {
    pub container: NodeId,
    pub scroller: NodeId,
    pub table: NodeId,
    pub header_cells: Vec<NodeId>,
    pub rows: Vec<NodeId>,
}

impl TableFixture {
    pub fn cell(&self, doc: &Document, row: usize, col: usize) -> NodeId {
        doc.element_children(self.rows[row])[col]
    }

    /// Give the scroll wrapper real overflow so it qualifies as a scroll region
    pub fn make_scrollable(&self, doc: &mut Document, scroll_width: f64, client_width: f64) {
        doc.set_overflow_x(self.scroller, Overflow::Auto);
        doc.set_scroll_metrics(self.scroller, ScrollMetrics::new(0.0, scroll_width, client_width));
    }
}

/// Build a detached `stTable` container:
/// `div[data-testid] > div > table > (thead > tr > th*) + (tbody > tr > td*)`
pub(crate) fn build_table(doc: &mut Document, headers: &[&str], rows: &[&[&str]]) -> TableFixture {
    build_table_with_id(doc, "stTable", headers, rows)
}

pub(crate) fn build_table_with_id(
    doc: &mut Document,
    test_id: &str,
    headers: &[&str],
    rows: &[&[&str]],
) -> TableFixture {
    let container = doc.create_element("div");
    doc.set_attribute(container, ATTR_TEST_ID, test_id);
    let scroller = doc.create_element("div");
    doc.append_child(container, scroller);
    let table = doc.create_element("table");
    doc.append_child(scroller, table);

    let thead = doc.create_element("thead");
    doc.append_child(table, thead);
    let head_row = doc.create_element("tr");
    doc.append_child(thead, head_row);
    let mut header_cells = Vec::new();
    for label in headers {
        let th = doc.create_element("th");
        doc.set_text(th, label);
        doc.append_child(head_row, th);
        header_cells.push(th);
    }

    let tbody = doc.create_element("tbody");
    doc.append_child(table, tbody);
    let mut row_ids = Vec::new();
    for values in rows {
        let tr = doc.create_element("tr");
        for value in values.iter() {
            let td = doc.create_element("td");
            doc.set_text(td, value);
            doc.append_child(tr, td);
        }
        doc.append_child(tbody, tr);
        row_ids.push(tr);
    }

    TableFixture { container, scroller, table, header_cells, rows: row_ids }
}

/// Attach a sort button with the given accessible label inside a header cell
pub(crate) fn add_sort_button(doc: &mut Document, th: NodeId, aria_label: &str) -> NodeId {
    let button = doc.create_element("button");
    doc.set_attribute(button, "aria-label", aria_label);
    doc.append_child(th, button);
    button
}
