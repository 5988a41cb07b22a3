//! In-memory document model
//!
//! Stands in for the browser DOM: an arena of element and text nodes with
//! attributes, class lists, computed horizontal overflow, scroll geometry,
//! event listeners and subtree mutation subscriptions. Everything the
//! enhancer does to a page goes through this surface.

mod events;
mod mutation;
mod node;

#[cfg(test)]
pub(crate) mod fixture;
#[cfg(test)]
mod test;

use std::collections::HashMap;

pub use events::{EventKind, EventTarget, Listener};
pub use mutation::{MutationRecord, ObserverHandle};
pub use node::{Element, NodeId, Overflow, ScrollMetrics};

use mutation::Subscription;
use node::{Node, NodeData};

#[derive(Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    subscriptions: Vec<Subscription>,
    next_handle: u64,
    listeners: HashMap<(EventTarget, EventKind), Vec<Listener>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only a `<body>` element
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Element(Element::new("body")))],
            body: NodeId(0),
            subscriptions: Vec::new(),
            next_handle: 0,
            listeners: HashMap::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node::new(data));
        NodeId(self.nodes.len() - 1)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.node(id)?.data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Child elements in document order, skipping text nodes
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.children(parent)
            .iter()
            .skip_while(|&&c| c != id)
            .skip(1)
            .copied()
            .find(|&c| self.is_element(c))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first. Observers whose root contains `parent` get a
    /// record of the insertion.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.is_inclusive_ancestor(child, parent) {
            return;
        }
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        if let Some(old) = self.parent(child) {
            if let Some(old_node) = self.node_mut(old) {
                old_node.children.retain(|&c| c != child);
            }
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        self.record_insertion(parent, child);
    }

    /// Detach every child of `id`
    pub fn clear_children(&mut self, id: NodeId) {
        let children = match self.node_mut(id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            if let Some(node) = self.node_mut(child) {
                node.parent = None;
            }
        }
    }

    /// Replace the content of `id` with a single text node
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        let text_node = self.create_text(text);
        self.append_child(id, text_node);
    }

    /// Concatenated text of `id` and all of its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else { return };
        match &node.data {
            NodeData::Text(t) => out.push_str(t),
            NodeData::Element(_) => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// True when `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// All descendants of `root` in document (pre-)order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Descendant elements of `root` matching `pred`, in document order
    pub fn find_all<F>(&self, root: NodeId, pred: F) -> Vec<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(&pred))
            .collect()
    }

    /// First descendant element of `root` matching `pred`
    pub fn find_first<F>(&self, root: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.element(id).is_some_and(&pred))
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attribute(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attribute(name, value);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.add_class(class);
        }
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        if let Some(el) = self.element_mut(id) {
            el.toggle_class(class, on);
        }
    }

    pub fn set_overflow_x(&mut self, id: NodeId, overflow: Overflow) {
        if let Some(el) = self.element_mut(id) {
            el.overflow_x = overflow;
        }
    }

    pub fn scroll_metrics(&self, id: NodeId) -> ScrollMetrics {
        self.element(id).map(|el| el.metrics).unwrap_or_default()
    }

    pub fn set_scroll_metrics(&mut self, id: NodeId, metrics: ScrollMetrics) {
        if let Some(el) = self.element_mut(id) {
            el.metrics = metrics;
        }
    }

    /// Scroll `id` horizontally to `left` (clamped to the scrollable range)
    /// and fire its scroll listeners
    pub fn scroll_to(&mut self, id: NodeId, left: f64) {
        let Some(el) = self.element_mut(id) else { return };
        let max = el.metrics.max_scroll_left();
        el.metrics.scroll_left = left.clamp(0.0, max);
        self.dispatch_event(EventTarget::Node(id), EventKind::Scroll);
    }

    pub fn add_event_listener(&mut self, target: EventTarget, kind: EventKind, listener: Listener) {
        self.listeners.entry((target, kind)).or_default().push(listener);
    }

    pub fn listener_count(&self, target: EventTarget, kind: EventKind) -> usize {
        self.listeners.get(&(target, kind)).map_or(0, Vec::len)
    }

    /// Run every listener registered for `kind` on `target`, in registration order
    pub fn dispatch_event(&mut self, target: EventTarget, kind: EventKind) {
        let listeners = self.listeners.get(&(target, kind)).cloned().unwrap_or_default();
        for listener in listeners {
            listener(self);
        }
    }

    /// Subscribe to child insertions anywhere under `root`
    pub fn observe(&mut self, root: NodeId) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.subscriptions.push(Subscription { handle, root, pending: Vec::new() });
        handle
    }

    /// Drain the records queued for `handle` since the last call
    pub fn take_records(&mut self, handle: ObserverHandle) -> Vec<MutationRecord> {
        self.subscriptions
            .iter_mut()
            .find(|s| s.handle == handle)
            .map(|s| std::mem::take(&mut s.pending))
            .unwrap_or_default()
    }

    pub fn disconnect(&mut self, handle: ObserverHandle) {
        self.subscriptions.retain(|s| s.handle != handle);
    }

    fn record_insertion(&mut self, parent: NodeId, child: NodeId) {
        let roots: Vec<(usize, NodeId)> = self
            .subscriptions
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.root))
            .collect();
        for (i, root) in roots {
            if self.is_inclusive_ancestor(root, parent) {
                self.subscriptions[i].pending.push(MutationRecord {
                    target: parent,
                    added: vec![child],
                });
            }
        }
    }

    /// Serialize `id` and its subtree as HTML
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else { return };
        match &node.data {
            NodeData::Text(t) => out.push_str(&escape(t, false)),
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                if !el.classes().is_empty() {
                    out.push_str(&format!(" class=\"{}\"", escape(&el.classes().join(" "), true)));
                }
                for (name, value) in el.attributes() {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(value, true)));
                }
                out.push('>');
                for &child in &node.children {
                    self.write_html(child, out);
                }
                out.push_str(&format!("</{}>", el.tag));
            }
        }
    }
}

fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
