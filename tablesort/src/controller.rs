//! Per-table sort controller.

use tabledom::query::{class, first_descendant};
use tabledom::{find_element, find_element_mut, Element, EventResult};

use crate::config::SorterConfig;
use crate::error::SortError;
use crate::key::{row_key, sort_by_keys};
use crate::state::{SortPolicy, SortState};
use crate::table::TableModel;

/// Sort controller for one table.
///
/// Owns the table's sortable headers, the single active `(header, state)`
/// pair and, under [`SortPolicy::Cycle`], the row order captured when the
/// sorter was created. That order is stamped onto the rows themselves as an
/// ordinal attribute, so it survives rows that share an ID.
/// Sorters share nothing with each other.
#[derive(Debug, Clone)]
pub struct TableSorter {
    model: TableModel,
    config: SorterConfig,
    /// Index into `model.headers` and its state. At most one header is sorted.
    active: Option<(usize, SortState)>,
    /// Number of rows stamped with their initial position.
    snapshot: Option<usize>,
}

impl TableSorter {
    /// Build a sorter for `table`. Fails if the table has nothing to sort.
    ///
    /// Under [`SortPolicy::Cycle`] every body row gets its position written
    /// to the configured order attribute.
    pub fn new(table: &mut Element, config: &SorterConfig) -> Result<Self, SortError> {
        let model = TableModel::scan(table, config)?;

        let snapshot = if config.policy.keeps_snapshot() {
            find_element_mut(table, &model.body_id).map(|body| stamp_rows(body, &config.order_attr))
        } else {
            None
        };

        log::debug!(
            "[tablesort] table '{}': {} sortable headers, snapshot: {}",
            model.table_id,
            model.headers.len(),
            snapshot.unwrap_or(0)
        );

        Ok(Self {
            model,
            config: config.clone(),
            active: None,
            snapshot,
        })
    }

    pub fn table_id(&self) -> &str {
        &self.model.table_id
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn policy(&self) -> SortPolicy {
        self.config.policy
    }

    /// Number of rows captured for restoring, or None without a snapshot.
    pub fn snapshot(&self) -> Option<usize> {
        self.snapshot
    }

    pub fn owns_header(&self, id: &str) -> bool {
        self.model.header(id).is_some()
    }

    /// The sorted header and its state, if any.
    pub fn active(&self) -> Option<(&str, SortState)> {
        self.active
            .map(|(idx, state)| (self.model.headers[idx].id.as_str(), state))
    }

    /// Current state of the given header. Unknown headers are `None`.
    pub fn state_of(&self, header_id: &str) -> SortState {
        self.model
            .header_index(header_id)
            .map_or(SortState::None, |idx| self.state_at(idx))
    }

    fn state_at(&self, idx: usize) -> SortState {
        match self.active {
            Some((active, state)) if active == idx => state,
            _ => SortState::None,
        }
    }

    /// Activate a sortable header: advance its state, reset every other
    /// header, then reorder or restore the rows. Anything that prevents
    /// this leaves the table untouched.
    pub fn on_header_click(&mut self, root: &mut Element, header_id: &str) -> EventResult {
        match self.activate(root, header_id) {
            Ok(state) => {
                log::debug!(
                    "[tablesort] table '{}' header '{}' -> {:?}",
                    self.model.table_id,
                    header_id,
                    state
                );
                EventResult::Consumed
            }
            Err(err) => {
                log::debug!("[tablesort] ignoring activation: {err}");
                EventResult::Ignored
            }
        }
    }

    fn activate(&mut self, root: &mut Element, header_id: &str) -> Result<SortState, SortError> {
        let idx = self
            .model
            .header_index(header_id)
            .ok_or_else(|| SortError::UnknownHeader {
                table: self.model.table_id.clone(),
                header: header_id.to_string(),
            })?;

        let column = self.model.headers[idx]
            .column
            .ok_or_else(|| SortError::HeaderNotInRow {
                table: self.model.table_id.clone(),
                header: header_id.to_string(),
            })?;

        if find_element(root, &self.model.table_id).is_none() {
            return Err(SortError::Detached {
                table: self.model.table_id.clone(),
            });
        }

        let next = self.state_at(idx).next(self.config.policy);

        if next.is_sorted() {
            self.sort_rows(root, column, next)?;
            self.active = Some((idx, next));
        } else {
            self.restore(root)?;
            self.active = None;
        }

        self.project(root);
        Ok(next)
    }

    /// Reorder the body rows by `column`. The body is rebuilt in full.
    fn sort_rows(&self, root: &mut Element, column: usize, state: SortState) -> Result<(), SortError> {
        let body = self.body_mut(root)?;
        let (rows, rest) = split_rows(body.take_children());

        let keyed = rows
            .into_iter()
            .map(|row| {
                let key = row_key(&row, column, &self.config);
                (row, key)
            })
            .collect();

        let mut children = sort_by_keys(keyed, state);
        log::trace!(
            "[tablesort] sorted {} rows of '{}' by column {column}",
            children.len(),
            self.model.table_id
        );
        children.extend(rest);
        body.set_children(children);
        Ok(())
    }

    /// Put the rows back in snapshot order.
    ///
    /// Rows that left the table since the snapshot are simply absent; rows
    /// without a stamp (added since) follow the stamped rows in their
    /// current relative order. Without a snapshot this does nothing.
    pub fn restore(&self, root: &mut Element) -> Result<(), SortError> {
        if self.snapshot.is_none() {
            return Ok(());
        }

        let order_attr = &self.config.order_attr;
        let body = self.body_mut(root)?;
        let (mut rows, rest) = split_rows(body.take_children());

        // Stable, so rows with equal or missing stamps keep their order
        rows.sort_by_key(|row| match ordinal(row, order_attr) {
            Some(pos) => (false, pos),
            None => (true, 0),
        });
        rows.extend(rest);

        body.set_children(rows);
        Ok(())
    }

    /// Write the current state into the markup: state classes on every
    /// sortable header and the matching glyph in its indicator.
    /// Running it twice changes nothing.
    pub fn project(&self, root: &mut Element) {
        for (idx, header) in self.model.headers.iter().enumerate() {
            let state = self.state_at(idx);
            let Some(th) = find_element_mut(root, &header.id) else {
                continue;
            };

            th.remove_class(&self.config.ascending_class);
            th.remove_class(&self.config.descending_class);
            match state {
                SortState::Ascending => {
                    th.add_class(self.config.ascending_class.clone());
                }
                SortState::Descending => {
                    th.add_class(self.config.descending_class.clone());
                }
                SortState::None => {}
            }

            let Some(icon_id) =
                first_descendant(th, class(&self.config.icon_class)).map(|el| el.id.clone())
            else {
                continue;
            };
            if let Some(icon) = find_element_mut(th, &icon_id) {
                icon.set_text(state.glyph());
            }
        }
    }

    fn body_mut<'a>(&self, root: &'a mut Element) -> Result<&'a mut Element, SortError> {
        find_element_mut(root, &self.model.body_id).ok_or_else(|| SortError::MissingBody {
            table: self.model.table_id.clone(),
        })
    }
}

/// Write each body row's position to `attr`. Returns the number of rows.
fn stamp_rows(body: &mut Element, attr: &str) -> usize {
    let mut count = 0;
    for row in body.children_mut().iter_mut().filter(|el| el.is("tr")) {
        row.set_attr(attr, count.to_string());
        count += 1;
    }
    count
}

fn ordinal(row: &Element, attr: &str) -> Option<usize> {
    row.get_attr(attr).and_then(|v| v.parse().ok())
}

/// Separate `tr` children from anything else in the body.
fn split_rows(children: Vec<Element>) -> (Vec<Element>, Vec<Element>) {
    children.into_iter().partition(|el| el.is("tr"))
}
