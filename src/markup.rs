//! Attribute and class names shared with the host page and its stylesheet.
//!
//! Class names are the styling boundary: themes target them directly, so
//! they must not change.

use crate::dom::{Document, Element, NodeId};

pub const ATTR_READY: &str = "data-andes-ready";
pub const ATTR_VARIANT: &str = "data-andes-variant";
pub const ATTR_OPTIONS: &str = "data-andes-options";
pub const ATTR_TABLE_ID: &str = "data-andes-table-id";
pub const ATTR_TOOLTIP: &str = "data-andes-tooltip";
pub const ATTR_ACTION: &str = "data-andes-action";
pub const ATTR_TEST_ID: &str = "data-testid";

pub const CLASS_CELL: &str = "andes-table__cell";
pub const CLASS_CELL_NUMERIC: &str = "andes-table__cell--numeric";
pub const CLASS_CELL_ACTIONS: &str = "andes-table__cell--actions";
pub const CLASS_ROW_HIGHLIGHT: &str = "andes-table__row--highlight";
pub const CLASS_ACTION_GROUP: &str = "andes-table__actions";
pub const CLASS_ACTION_BUTTON: &str = "andes-table__action";
pub const CLASS_CHIP: &str = "andes-chip";
pub const CLASS_SHADOW_LEFT: &str = "andes-table--shadow-left";
pub const CLASS_SHADOW_RIGHT: &str = "andes-table--shadow-right";
pub const CLASS_PAGINATION_SUMMARY: &str = "andes-table__pagination-summary";

/// Table rendering variant carried by `data-andes-variant`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Andes,
    Unstyled,
}

impl Variant {
    /// Anything other than `"unstyled"`, including a missing attribute, is the default path
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("unstyled") => Variant::Unstyled,
            _ => Variant::Andes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Andes => "andes",
            Variant::Unstyled => "unstyled",
        }
    }
}

/// Whether `el` carries one of the host framework's table test ids
pub fn is_table_container(el: &Element, test_ids: &[String]) -> bool {
    el.attribute(ATTR_TEST_ID)
        .is_some_and(|id| test_ids.iter().any(|t| t == id))
}

/// Table containers at or below `root`, in document order
pub fn find_containers(doc: &Document, root: NodeId, test_ids: &[String]) -> Vec<NodeId> {
    let mut found = Vec::new();
    if doc.element(root).is_some_and(|el| is_table_container(el, test_ids)) {
        found.push(root);
    }
    found.extend(doc.find_all(root, |el| is_table_container(el, test_ids)));
    found
}
