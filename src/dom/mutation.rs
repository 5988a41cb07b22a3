use super::NodeId;

/// Handle returned by [`Document::observe`](super::Document::observe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(pub(crate) u64);

/// One `childList` change: `added` were appended under `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub target: NodeId,
    pub added: Vec<NodeId>,
}

/// A live subtree subscription and its undelivered records
#[derive(Debug, Clone)]
pub(crate) struct Subscription {
    pub handle: ObserverHandle,
    pub root: NodeId,
    pub pending: Vec<MutationRecord>,
}
