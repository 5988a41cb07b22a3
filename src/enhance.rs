//! Per-container enhancement
//!
//! A container moves `Unseen -> Enhancing -> Enhanced` or `Unseen -> Skipped`.
//! The transition out of `Unseen` happens in one step before any DOM write,
//! so a container that shows up twice in the same mutation batch is only
//! ever processed once.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, info_span};

use crate::augment::{find_actions_column, highlight_top_rows, inject_actions, retitle_sort_controls};
use crate::config::EnhancerConfig;
use crate::decorate::{decorate_cells, DecorationSummary};
use crate::dom::{Document, NodeId};
use crate::layout::{ComputedStyleProbe, LayoutProbe};
use crate::markup::{Variant, ATTR_OPTIONS, ATTR_READY, ATTR_TABLE_ID, ATTR_VARIANT};
use crate::options::TableOptions;
use crate::pagination::{render_summary, Pagination};
use crate::scroll::attach_scroll_shadows;
use crate::structure::find_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerState {
    #[default]
    Unseen,
    Enhancing,
    Enhanced,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unstyled,
    NoTable,
}

/// What one enhancement pass did
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementReport {
    pub table_id: Option<String>,
    pub options: TableOptions,
    pub sort_controls_retitled: usize,
    pub actions_column: Option<usize>,
    pub cells: DecorationSummary,
    pub action_rows: usize,
    pub highlighted_rows: usize,
    pub scroll_region: Option<NodeId>,
    /// Present when the options carry `totalRows`
    pub pagination: Option<Pagination>,
    pub pagination_summary: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Enhanced(EnhancementReport),
    Skipped(SkipReason),
    /// The container was already handled; nothing was touched
    AlreadyHandled(ContainerState),
}

pub struct Enhancer {
    config: EnhancerConfig,
    probe: Box<dyn LayoutProbe>,
    states: HashMap<NodeId, ContainerState>,
}

impl Enhancer {
    pub fn new(config: EnhancerConfig) -> Self {
        let probe = ComputedStyleProbe::new(config.scroll_tolerance_px);
        Self::with_probe(config, Box::new(probe))
    }

    pub fn with_probe(config: EnhancerConfig, probe: Box<dyn LayoutProbe>) -> Self {
        Self { config, probe, states: HashMap::new() }
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    pub fn state(&self, container: NodeId) -> ContainerState {
        self.states.get(&container).copied().unwrap_or_default()
    }

    /// Leave `Unseen` atomically. Containers already carrying the ready
    /// attribute (marked by an earlier enhancer) count as enhanced.
    fn begin(&mut self, doc: &mut Document, container: NodeId) -> Result<NodeId, Outcome> {
        let entry = match self.states.entry(container) {
            Entry::Occupied(e) => return Err(Outcome::AlreadyHandled(*e.get())),
            Entry::Vacant(v) => v,
        };

        if doc.attribute(container, ATTR_READY) == Some("true") {
            entry.insert(ContainerState::Enhanced);
            return Err(Outcome::AlreadyHandled(ContainerState::Enhanced));
        }
        if Variant::from_attribute(doc.attribute(container, ATTR_VARIANT)) == Variant::Unstyled {
            entry.insert(ContainerState::Skipped);
            return Err(Outcome::Skipped(SkipReason::Unstyled));
        }
        let Some(table) = find_table(doc, container) else {
            entry.insert(ContainerState::Skipped);
            return Err(Outcome::Skipped(SkipReason::NoTable));
        };

        entry.insert(ContainerState::Enhancing);
        doc.set_attribute(container, ATTR_READY, "true");
        Ok(table)
    }

    /// Enhance `container` at most once. Every step may no-op on its own
    /// without stopping the ones after it.
    pub fn enhance(&mut self, doc: &mut Document, container: NodeId) -> Outcome {
        let table = match self.begin(doc, container) {
            Ok(table) => table,
            Err(outcome) => {
                debug!(?container, ?outcome, "container not enhanced");
                return outcome;
            }
        };

        let table_id = doc.attribute(container, ATTR_TABLE_ID).map(str::to_string);
        let span = info_span!("enhance", ?container, table_id = table_id.as_deref().unwrap_or(""));
        let _guard = span.enter();

        let options = TableOptions::from_attribute(doc.attribute(container, ATTR_OPTIONS));
        debug!(has_actions = options.has_actions, highlight = ?options.highlight_top_rows, "options");

        let sort_controls_retitled = retitle_sort_controls(doc, table, &self.config.sort_labels);
        let actions_column = find_actions_column(doc, table, &self.config.actions_label);
        let cells = decorate_cells(doc, table, &self.config.locale);

        let action_rows = match actions_column {
            Some(column) if options.has_actions => inject_actions(doc, table, column, &self.config.actions),
            None if options.has_actions => {
                debug!(label = %self.config.actions_label, "actions enabled but no actions column");
                0
            }
            _ => 0,
        };

        let highlighted_rows = highlight_top_rows(doc, table, options.highlight_count());
        let scroll_region =
            attach_scroll_shadows(doc, container, &*self.probe, self.config.scroll_tolerance_px);

        let pagination = Pagination::from_options(&options, &self.config.page_sizes);
        if let Some(p) = &pagination {
            debug!(page = p.page, page_size = p.page_size, total_pages = p.total_pages, "pagination");
        }
        let pagination_summary = pagination.as_ref().and_then(|p| render_summary(doc, container, p));

        self.states.insert(container, ContainerState::Enhanced);

        let report = EnhancementReport {
            table_id,
            options,
            sort_controls_retitled,
            actions_column,
            cells,
            action_rows,
            highlighted_rows,
            scroll_region,
            pagination,
            pagination_summary,
        };
        debug!(?report, "container enhanced");
        Outcome::Enhanced(report)
    }
}
