//! What a sorter knows about its table, captured when the document loads.

use tabledom::query::{tag, tag_with_class};
use tabledom::{descendants_within, first_descendant_within, Element};

use crate::config::SorterConfig;
use crate::error::SortError;

/// A header cell that opted into sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableHeader {
    pub id: String,
    /// Position among the header row's cells, or None if the header sits
    /// outside the header row.
    pub column: Option<usize>,
    /// Value of the column attribute, if present.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub table_id: String,
    pub body_id: String,
    pub headers: Vec<SortableHeader>,
}

impl TableModel {
    /// Inspect a `table` element.
    ///
    /// Fails when the table has no sortable headers or no `tbody`; either
    /// way there is nothing to sort. Tables nested inside this one are not
    /// looked into: their headers and bodies belong to their own sorter.
    pub fn scan(table: &Element, config: &SorterConfig) -> Result<Self, SortError> {
        let sortable = descendants_within(
            table,
            tag_with_class("th", &config.sortable_class),
            tag("table"),
        );
        if sortable.is_empty() {
            return Err(SortError::NoSortableHeaders {
                table: table.id.clone(),
            });
        }

        let body = first_descendant_within(table, tag("tbody"), tag("table")).ok_or_else(|| SortError::MissingBody {
            table: table.id.clone(),
        })?;

        let header_row: Vec<&str> = first_descendant_within(table, tag("thead"), tag("table"))
            .and_then(|thead| first_descendant_within(thead, tag("tr"), tag("table")))
            .map(|row| {
                row.children()
                    .iter()
                    .filter(|el| el.is("th"))
                    .map(|el| el.id.as_str())
                    .collect()
            })
            .unwrap_or_default();

        let headers = sortable
            .into_iter()
            .map(|th| SortableHeader {
                id: th.id.clone(),
                column: header_row.iter().position(|id| *id == th.id),
                name: th.get_attr(&config.column_attr).map(str::to_string),
            })
            .collect();

        Ok(Self {
            table_id: table.id.clone(),
            body_id: body.id.clone(),
            headers,
        })
    }

    pub fn header(&self, id: &str) -> Option<&SortableHeader> {
        self.headers.iter().find(|h| h.id == id)
    }

    pub fn header_index(&self, id: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.id == id)
    }
}
