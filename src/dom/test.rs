use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_append_child_moves_node_between_parents() {
    let mut doc = Document::new();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    let child = doc.create_element("span");

    doc.append_child(a, child);
    doc.append_child(b, child);

    assert!(doc.children(a).is_empty());
    assert_eq!(doc.children(b), &[child]);
    assert_eq!(doc.parent(child), Some(b));
}

#[test]
fn test_append_child_refuses_cycles() {
    let mut doc = Document::new();
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    doc.append_child(outer, inner);

    doc.append_child(inner, outer);

    assert_eq!(doc.parent(outer), None);
    assert_eq!(doc.parent(inner), Some(outer));
}

#[test]
fn test_set_text_replaces_content() {
    let mut doc = Document::new();
    let td = doc.create_element("td");
    let chip = doc.create_element("span");
    doc.append_child(td, chip);

    doc.set_text(td, "  42 ");

    assert_eq!(doc.text_content(td), "  42 ");
    assert_eq!(doc.element_children(td), Vec::<NodeId>::new());
}

#[test]
fn test_descendants_are_in_document_order() {
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let first = doc.create_element("p");
    let nested = doc.create_element("b");
    let second = doc.create_element("p");
    doc.append_child(root, first);
    doc.append_child(first, nested);
    doc.append_child(root, second);

    assert_eq!(doc.descendants(root), vec![first, nested, second]);
    assert_eq!(doc.find_first(root, |el| el.is("p")), Some(first));
    assert_eq!(doc.find_all(root, |el| el.is("p")), vec![first, second]);
}

#[test]
fn test_next_element_sibling_skips_text() {
    let mut doc = Document::new();
    let body = doc.body();
    let marker = doc.create_element("div");
    let text = doc.create_text("\n");
    let target = doc.create_element("section");
    doc.append_child(body, marker);
    doc.append_child(body, text);
    doc.append_child(body, target);

    assert_eq!(doc.next_element_sibling(marker), Some(target));
    assert_eq!(doc.next_element_sibling(target), None);
}

#[test]
fn test_class_helpers_do_not_duplicate() {
    let mut doc = Document::new();
    let el = doc.create_element("div");
    doc.add_class(el, "a");
    doc.add_class(el, "a");
    doc.toggle_class(el, "b", true);
    doc.toggle_class(el, "a", false);

    let classes = doc.element(el).map(|e| e.classes().to_vec()).unwrap_or_default();
    assert_eq!(classes, vec!["b".to_string()]);
}

#[test]
fn test_observer_records_only_connected_insertions() {
    let mut doc = Document::new();
    let body = doc.body();
    let handle = doc.observe(body);

    let detached = doc.create_element("div");
    let inner = doc.create_element("span");
    doc.append_child(detached, inner);
    assert!(doc.take_records(handle).is_empty());

    doc.append_child(body, detached);
    let records = doc.take_records(handle);
    assert_eq!(records, vec![MutationRecord { target: body, added: vec![detached] }]);
    assert!(doc.take_records(handle).is_empty());
}

#[test]
fn test_disconnect_stops_recording() {
    let mut doc = Document::new();
    let body = doc.body();
    let handle = doc.observe(body);
    doc.disconnect(handle);

    let el = doc.create_element("div");
    doc.append_child(body, el);

    assert!(doc.take_records(handle).is_empty());
}

#[test]
fn test_scroll_to_clamps_and_dispatches() {
    let mut doc = Document::new();
    let el = doc.create_element("div");
    doc.set_scroll_metrics(el, ScrollMetrics::new(0.0, 500.0, 200.0));

    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    doc.add_event_listener(
        EventTarget::Node(el),
        EventKind::Scroll,
        Rc::new(move |_doc: &mut Document| seen.set(seen.get() + 1)),
    );

    doc.scroll_to(el, 9999.0);
    assert_eq!(doc.scroll_metrics(el).scroll_left, 300.0);
    doc.scroll_to(el, -5.0);
    assert_eq!(doc.scroll_metrics(el).scroll_left, 0.0);
    assert_eq!(calls.get(), 2);
    assert_eq!(doc.listener_count(EventTarget::Window, EventKind::Resize), 0);
}

#[test]
fn test_outer_html_serializes_classes_and_attributes() {
    let mut doc = Document::new();
    let span = doc.create_element("span");
    doc.add_class(span, "andes-chip");
    doc.set_attribute(span, "title", "a \"b\"");
    doc.set_text(span, "x < y");

    assert_eq!(
        doc.outer_html(span),
        "<span class=\"andes-chip\" title=\"a &quot;b&quot;\">x &lt; y</span>"
    );
}
