use std::rc::Rc;

use super::{Document, NodeId};

/// Where a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Window,
    Node(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
}

/// Event callback. Listeners run on the UI thread with full access to the
/// document, the same way browser handlers can read and write the DOM.
pub type Listener = Rc<dyn Fn(&mut Document)>;
