use crate::dom::{Document, NodeId};

/// Finds the element that actually scrolls a table horizontally.
///
/// Kept behind a trait so the enhancement pipeline can run against
/// documents without a layout engine.
pub trait LayoutProbe {
    fn find_scrollable_region(&self, doc: &Document, container: NodeId) -> Option<NodeId>;
}

/// Probe backed by computed `overflow-x` and scroll geometry
#[derive(Debug, Clone, Copy)]
pub struct ComputedStyleProbe {
    /// Overflow narrower than this many pixels does not count
    pub tolerance: f64,
}

impl ComputedStyleProbe {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for ComputedStyleProbe {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl LayoutProbe for ComputedStyleProbe {
    /// First `div` under `container` with `overflow-x: auto|scroll` whose
    /// content is wider than its box by more than the tolerance
    fn find_scrollable_region(&self, doc: &Document, container: NodeId) -> Option<NodeId> {
        doc.find_first(container, |el| {
            el.is("div")
                && el.overflow_x.is_scrollable()
                && el.metrics.scroll_width - el.metrics.client_width > self.tolerance
        })
    }
}
