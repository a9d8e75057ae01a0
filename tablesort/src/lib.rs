//! Click-to-sort for tables in a [`tabledom`] document.
//!
//! Header cells opt in with the `sortable` class. Activating one cycles its
//! sort state and reorders the rows of the table body by that column:
//!
//! ```ignore
//! use tabledom::{Document, Event};
//! use tablesort::{SortController, SorterConfig};
//!
//! let mut doc = Document::new(page);
//! doc.add_handler(SortController::new(SorterConfig::default()));
//! doc.load();
//! doc.dispatch(&Event::click("name-header"));
//! ```

mod config;
mod controller;
mod error;
mod handler;
mod key;
mod state;
mod table;

pub use config::SorterConfig;
pub use controller::TableSorter;
pub use error::SortError;
pub use handler::SortController;
pub use key::{compare_keys, sort_key};
pub use state::{SortPolicy, SortState};
pub use table::{SortableHeader, TableModel};
