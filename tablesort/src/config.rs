//! Sorter configuration: which markup opts in and how state is shown.

use crate::state::SortPolicy;

/// Markup contract and behaviour for a [`SortController`](crate::SortController).
///
/// The defaults match the conventional markup:
///
/// ```html
/// <th class="sortable" data-column="name">Name <span class="sort-icon">↕</span></th>
/// <td data-sort-value="02">February</td>
/// ```
#[derive(Debug, Clone)]
pub struct SorterConfig {
    /// How repeated activations move through the sort states.
    pub policy: SortPolicy,

    /// Class marking a `th` as sortable.
    pub sortable_class: String,

    /// Attribute naming the column. Only used for diagnostics; the column
    /// index comes from the header's position in the header row.
    pub column_attr: String,

    /// Class of the indicator element inside a sortable header.
    pub icon_class: String,

    /// Cell attribute that overrides the displayed text as sort key.
    pub sort_value_attr: String,

    /// Class set on a header sorted ascending.
    pub ascending_class: String,

    /// Class set on a header sorted descending.
    pub descending_class: String,

    /// Row attribute holding the row's initial position, written when the
    /// document loads under [`SortPolicy::Cycle`].
    pub order_attr: String,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            policy: SortPolicy::Cycle,
            sortable_class: "sortable".into(),
            column_attr: "data-column".into(),
            icon_class: "sort-icon".into(),
            sort_value_attr: "data-sort-value".into(),
            ascending_class: "sorted-asc".into(),
            descending_class: "sorted-desc".into(),
            order_attr: "data-sort-order".into(),
        }
    }
}

impl SorterConfig {
    pub fn new(policy: SortPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Set the sort policy.
    pub fn policy(mut self, policy: SortPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn sortable_class(mut self, class: impl Into<String>) -> Self {
        self.sortable_class = class.into();
        self
    }

    pub fn icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_class = class.into();
        self
    }

    pub fn sort_value_attr(mut self, attr: impl Into<String>) -> Self {
        self.sort_value_attr = attr.into();
        self
    }

    pub fn order_attr(mut self, attr: impl Into<String>) -> Self {
        self.order_attr = attr.into();
        self
    }

    /// Set the classes used for ascending and descending headers.
    pub fn state_classes(mut self, ascending: impl Into<String>, descending: impl Into<String>) -> Self {
        self.ascending_class = ascending.into();
        self.descending_class = descending.into();
        self
    }
}
