//! Host-side helpers that tag rendered containers before enhancement runs

use crate::dom::{Document, NodeId};
use crate::markup::{find_containers, is_table_container, Variant, ATTR_OPTIONS, ATTR_TABLE_ID, ATTR_VARIANT};
use crate::options::{OptionsError, TableOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub table_id: String,
    pub variant: Variant,
    pub options: TableOptions,
}

/// Write `meta` onto the most recently rendered container under `root`.
/// Returns the tagged container, or `None` when there is none yet.
pub fn inject_metadata(
    doc: &mut Document,
    root: NodeId,
    test_ids: &[String],
    meta: &TableMetadata,
) -> Result<Option<NodeId>, OptionsError> {
    let Some(target) = find_containers(doc, root, test_ids).pop() else {
        return Ok(None);
    };
    let options = serde_json::to_string(&meta.options)?;
    doc.set_attribute(target, ATTR_TABLE_ID, &meta.table_id);
    doc.set_attribute(target, ATTR_VARIANT, meta.variant.as_str());
    doc.set_attribute(target, ATTR_OPTIONS, &options);
    Ok(Some(target))
}

/// Opt the first container following `marker` out of enhancement
pub fn mark_unstyled_after(doc: &mut Document, marker: NodeId, test_ids: &[String]) -> Option<NodeId> {
    let mut sibling = doc.next_element_sibling(marker);
    while let Some(id) = sibling {
        if doc.element(id).is_some_and(|el| is_table_container(el, test_ids)) {
            doc.set_attribute(id, ATTR_VARIANT, Variant::Unstyled.as_str());
            return Some(id);
        }
        sibling = doc.next_element_sibling(id);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnhancerConfig;
    use crate::dom::fixture::{build_table, build_table_with_id};

    #[test]
    fn test_inject_targets_last_container() {
        let mut doc = Document::new();
        let body = doc.body();
        let ids = EnhancerConfig::default().container_test_ids;
        let first = build_table(&mut doc, &["A"], &[&["1"]]);
        let last = build_table_with_id(&mut doc, "stDataFrameResizable", &["A"], &[&["1"]]);
        doc.append_child(body, first.container);
        doc.append_child(body, last.container);

        let meta = TableMetadata {
            table_id: "andes-1".to_string(),
            variant: Variant::Andes,
            options: TableOptions { has_actions: true, highlight_top_rows: Some(3), ..Default::default() },
        };
        let target = inject_metadata(&mut doc, body, &ids, &meta).unwrap();

        assert_eq!(target, Some(last.container));
        assert_eq!(doc.attribute(first.container, ATTR_TABLE_ID), None);
        assert_eq!(doc.attribute(last.container, ATTR_VARIANT), Some("andes"));
        let written = TableOptions::parse(doc.attribute(last.container, ATTR_OPTIONS).unwrap()).unwrap();
        assert_eq!(written, meta.options);
    }

    #[test]
    fn test_inject_without_container() {
        let mut doc = Document::new();
        let body = doc.body();
        let meta = TableMetadata {
            table_id: "andes-2".to_string(),
            variant: Variant::Andes,
            options: TableOptions::default(),
        };

        let ids = EnhancerConfig::default().container_test_ids;
        assert_eq!(inject_metadata(&mut doc, body, &ids, &meta).unwrap(), None);
    }

    #[test]
    fn test_mark_unstyled_after_marker() {
        let mut doc = Document::new();
        let body = doc.body();
        let ids = EnhancerConfig::default().container_test_ids;
        let before = build_table(&mut doc, &["A"], &[]);
        let marker = doc.create_element("div");
        let spacer = doc.create_element("p");
        let target = build_table(&mut doc, &["A"], &[]);
        let after = build_table(&mut doc, &["A"], &[]);
        for id in [before.container, marker, spacer, target.container, after.container] {
            doc.append_child(body, id);
        }

        assert_eq!(mark_unstyled_after(&mut doc, marker, &ids), Some(target.container));

        assert_eq!(doc.attribute(target.container, ATTR_VARIANT), Some("unstyled"));
        assert_eq!(doc.attribute(before.container, ATTR_VARIANT), None);
        assert_eq!(doc.attribute(after.container, ATTR_VARIANT), None);
    }

    #[test]
    fn test_mark_unstyled_without_following_container() {
        let mut doc = Document::new();
        let body = doc.body();
        let marker = doc.create_element("div");
        doc.append_child(body, marker);

        let ids = EnhancerConfig::default().container_test_ids;
        assert_eq!(mark_unstyled_after(&mut doc, marker, &ids), None);
    }
}
