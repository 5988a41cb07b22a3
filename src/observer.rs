//! Mutation-driven enhancement service
//!
//! The host renders tables asynchronously and re-renders them often, so the
//! service sweeps once at start and then re-scans every inserted subtree.

use tracing::{debug, info};

use crate::dom::{Document, NodeId, ObserverHandle};
use crate::enhance::{Enhancer, Outcome};
use crate::markup::find_containers;

pub struct TableObserver {
    root: NodeId,
    enhancer: Enhancer,
    handle: Option<ObserverHandle>,
}

impl TableObserver {
    /// Service scoped to `root`; nothing happens until [`start`](Self::start)
    pub fn new(root: NodeId, enhancer: Enhancer) -> Self {
        Self { root, enhancer, handle: None }
    }

    pub fn enhancer(&self) -> &Enhancer {
        &self.enhancer
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Enhance the containers already present, then subscribe to insertions
    /// under the root. Returns how many containers were enhanced. Calling it
    /// again while running does nothing.
    pub fn start(&mut self, doc: &mut Document) -> usize {
        if self.is_running() {
            return 0;
        }
        let enhanced = self.enhance_within(doc, self.root);
        self.handle = Some(doc.observe(self.root));
        info!(root = ?self.root, enhanced, "table observer started");
        enhanced
    }

    /// Deliver queued mutation batches. Writes made while enhancing queue
    /// further records, so this drains until the queue is empty.
    pub fn process_pending(&mut self, doc: &mut Document) -> usize {
        let Some(handle) = self.handle else { return 0 };
        let mut enhanced = 0;
        loop {
            let records = doc.take_records(handle);
            if records.is_empty() {
                break;
            }
            debug!(records = records.len(), "mutation batch");
            for node in records.into_iter().flat_map(|r| r.added) {
                if doc.is_element(node) {
                    enhanced += self.enhance_within(doc, node);
                }
            }
        }
        enhanced
    }

    pub fn stop(&mut self, doc: &mut Document) {
        if let Some(handle) = self.handle.take() {
            doc.disconnect(handle);
            info!(root = ?self.root, "table observer stopped");
        }
    }

    fn enhance_within(&mut self, doc: &mut Document, node: NodeId) -> usize {
        let containers = find_containers(doc, node, &self.enhancer.config().container_test_ids);
        containers
            .into_iter()
            .filter(|&c| matches!(self.enhancer.enhance(doc, c), Outcome::Enhanced(_)))
            .count()
    }
}
