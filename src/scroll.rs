//! Edge shadows for horizontally clipped tables

use std::rc::Rc;

use tracing::debug;

use crate::dom::{Document, EventKind, EventTarget, NodeId, ScrollMetrics};
use crate::layout::LayoutProbe;
use crate::markup::{CLASS_SHADOW_LEFT, CLASS_SHADOW_RIGHT};

/// Which edges currently hide content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowState {
    pub left: bool,
    pub right: bool,
}

impl ShadowState {
    pub fn from_metrics(m: &ScrollMetrics, tolerance: f64) -> Self {
        Self {
            left: m.scroll_left > tolerance,
            right: m.scroll_left + m.client_width < m.scroll_width - tolerance,
        }
    }
}

/// Recompute the shadows of `container` from `region`'s current geometry
pub fn update_shadows(doc: &mut Document, container: NodeId, region: NodeId, tolerance: f64) -> ShadowState {
    let state = ShadowState::from_metrics(&doc.scroll_metrics(region), tolerance);
    doc.toggle_class(container, CLASS_SHADOW_LEFT, state.left);
    doc.toggle_class(container, CLASS_SHADOW_RIGHT, state.right);
    state
}

/// Wire shadows for `container`: apply once, then again on every scroll of the
/// region and every window resize. Without a scrollable region nothing is
/// attached. Returns the region.
pub fn attach_scroll_shadows(
    doc: &mut Document,
    container: NodeId,
    probe: &dyn LayoutProbe,
    tolerance: f64,
) -> Option<NodeId> {
    let Some(region) = probe.find_scrollable_region(doc, container) else {
        debug!(?container, "no scrollable region");
        return None;
    };

    update_shadows(doc, container, region, tolerance);

    let refresh = Rc::new(move |doc: &mut Document| {
        update_shadows(doc, container, region, tolerance);
    });
    doc.add_event_listener(EventTarget::Node(region), EventKind::Scroll, refresh.clone());
    doc.add_event_listener(EventTarget::Window, EventKind::Resize, refresh);

    Some(region)
}
