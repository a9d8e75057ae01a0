//! Document-level entry point: one [`TableSorter`] per qualifying table.

use tabledom::{closest, Element, Event, EventResult, Handler};

use crate::config::SorterConfig;
use crate::controller::TableSorter;
use crate::state::SortState;

/// Attaches sorting to every table of a document when it loads and routes
/// header activations to the owning table's sorter.
#[derive(Debug, Clone, Default)]
pub struct SortController {
    config: SorterConfig,
    sorters: Vec<TableSorter>,
}

impl SortController {
    pub fn new(config: SorterConfig) -> Self {
        Self {
            config,
            sorters: Vec::new(),
        }
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    pub fn sorters(&self) -> &[TableSorter] {
        &self.sorters
    }

    pub fn sorter(&self, table_id: &str) -> Option<&TableSorter> {
        self.sorters.iter().find(|s| s.table_id() == table_id)
    }

    /// State of a sortable header anywhere in the document.
    pub fn state_of(&self, header_id: &str) -> SortState {
        self.sorters
            .iter()
            .find(|s| s.owns_header(header_id))
            .map_or(SortState::None, |s| s.state_of(header_id))
    }

    /// Scan `root` for tables and build a sorter for each one that has
    /// sortable headers and a body. Other tables are left alone.
    /// Attaching again replaces the previous sorters.
    pub fn attach(&mut self, root: &mut Element) {
        self.sorters.clear();
        attach_tables(root, &self.config, &mut self.sorters);
        log::debug!("[tablesort] attached to {} tables", self.sorters.len());
    }

    /// Route an activation of `target` (or anything inside a sortable
    /// header) to the sorter owning that header.
    pub fn activate(&mut self, root: &mut Element, target: &str) -> EventResult {
        let found = self.sorters.iter().enumerate().find_map(|(idx, sorter)| {
            closest(root, target, |el| sorter.owns_header(&el.id)).map(|header| (idx, header))
        });

        let Some((idx, header)) = found else {
            log::trace!("[tablesort] '{target}' is not inside a sortable header");
            return EventResult::Ignored;
        };

        self.sorters[idx].on_header_click(root, &header)
    }
}

impl Handler for SortController {
    fn on_ready(&mut self, root: &mut Element) {
        self.attach(root);
    }

    fn on_event(&mut self, root: &mut Element, event: &Event) -> EventResult {
        match event.activation_target() {
            Some(target) => self.activate(root, target),
            None => EventResult::Ignored,
        }
    }
}

/// Depth-first walk building a sorter for every table, nested ones included.
fn attach_tables(element: &mut Element, config: &SorterConfig, sorters: &mut Vec<TableSorter>) {
    if element.is("table") {
        match TableSorter::new(element, config) {
            Ok(sorter) => sorters.push(sorter),
            Err(err) => log::debug!("[tablesort] skipping table: {err}"),
        }
    }

    for child in element.children_mut() {
        attach_tables(child, config, sorters);
    }
}
