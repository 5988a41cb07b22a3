//! Post-processing for host-rendered dashboard tables
//!
//! Raw cell text is rewritten with locale-aware numbers, normalized dates and
//! status chips; rows gain highlighting and action buttons; clipped tables get
//! edge shadows and paged tables a row-range summary. [`TableObserver`] drives [`Enhancer`] from document mutations
//! so every table is processed exactly once.

pub mod augment;
pub mod classify;
pub mod config;
pub mod decorate;
pub mod dom;
pub mod enhance;
pub mod layout;
pub mod logging;
pub mod markup;
pub mod metadata;
pub mod observer;
pub mod options;
pub mod pagination;
pub mod parse;
pub mod scroll;
pub mod structure;

pub use classify::{classify_status, Tone};
pub use config::{ConfigError, EnhancerConfig};
pub use decorate::{classify_cell, CellKind};
pub use dom::{Document, NodeId};
pub use enhance::{ContainerState, EnhancementReport, Enhancer, Outcome, SkipReason};
pub use layout::{ComputedStyleProbe, LayoutProbe};
pub use observer::TableObserver;
pub use options::TableOptions;
pub use pagination::Pagination;
