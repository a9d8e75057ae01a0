//! Reasons a table or an activation is skipped.
//!
//! None of these reach the caller of [`Document::dispatch`](tabledom::Document::dispatch):
//! they are logged and turned into a no-op.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("Table '{table}' has no sortable headers")]
    NoSortableHeaders { table: String },

    #[error("Table '{table}' has no tbody")]
    MissingBody { table: String },

    #[error("Table '{table}' is no longer in the document")]
    Detached { table: String },

    #[error("Header '{header}' is not part of the header row of table '{table}'")]
    HeaderNotInRow { table: String, header: String },

    #[error("Header '{header}' is not sortable in table '{table}'")]
    UnknownHeader { table: String, header: String },
}

