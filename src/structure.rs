//! Navigation over host-rendered `<table>` markup

use crate::dom::{Document, NodeId};

/// The first `<table>` inside a container
pub fn find_table(doc: &Document, container: NodeId) -> Option<NodeId> {
    doc.find_first(container, |el| el.is("table"))
}

fn is_cell(doc: &Document, id: NodeId) -> bool {
    doc.element(id).is_some_and(|el| el.is("td") || el.is("th"))
}

/// `th`/`td` children of a row, in column order
pub fn row_cells(doc: &Document, row: NodeId) -> Vec<NodeId> {
    doc.element_children(row)
        .into_iter()
        .filter(|&c| is_cell(doc, c))
        .collect()
}

/// Cells of the first header row (`thead > tr`)
pub fn header_cells(doc: &Document, table: NodeId) -> Vec<NodeId> {
    doc.find_first(table, |el| el.is("thead"))
        .and_then(|thead| doc.find_first(thead, |el| el.is("tr")))
        .map(|row| row_cells(doc, row))
        .unwrap_or_default()
}

fn in_thead(doc: &Document, table: NodeId, row: NodeId) -> bool {
    let mut current = doc.parent(row);
    while let Some(id) = current {
        if id == table {
            return false;
        }
        if doc.element(id).is_some_and(|el| el.is("thead")) {
            return true;
        }
        current = doc.parent(id);
    }
    false
}

/// Data rows in document order; header rows are excluded
pub fn body_rows(doc: &Document, table: NodeId) -> Vec<NodeId> {
    doc.find_all(table, |el| el.is("tr"))
        .into_iter()
        .filter(|&row| !in_thead(doc, table, row))
        .collect()
}

/// Every `td` of every data row
pub fn data_cells(doc: &Document, table: NodeId) -> Vec<NodeId> {
    body_rows(doc, table)
        .into_iter()
        .flat_map(|row| row_cells(doc, row))
        .filter(|&cell| doc.element(cell).is_some_and(|el| el.is("td")))
        .collect()
}
