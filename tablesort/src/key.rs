//! Sort keys and row ordering.

use std::cmp::Ordering;

use tabledom::Element;

use crate::config::SorterConfig;
use crate::state::SortState;

/// The string a cell sorts by.
///
/// A non-empty override attribute wins; otherwise the cell's text, trimmed
/// and lower-cased.
pub fn sort_key(cell: &Element, config: &SorterConfig) -> String {
    match cell.get_attr(&config.sort_value_attr) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => cell.text_content().trim().to_lowercase(),
    }
}

/// Key of the cell at `column` in `row`, or None if the row is too short.
pub fn row_key(row: &Element, column: usize, config: &SorterConfig) -> Option<String> {
    row.children()
        .iter()
        .filter(|el| el.is("td") || el.is("th"))
        .nth(column)
        .map(|cell| sort_key(cell, config))
}

/// Compare two keys for the given direction. A missing key ties with
/// anything, and `SortState::None` treats every pair as equal.
pub fn compare_keys(a: Option<&str>, b: Option<&str>, state: SortState) -> Ordering {
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };

    match state {
        SortState::None => Ordering::Equal,
        SortState::Ascending => a.cmp(b),
        SortState::Descending => b.cmp(a),
    }
}

/// Stable insertion sort of `items` by their keys.
///
/// Ties never move an item past another, so a key that ties with
/// everything stays where it is and never breaks the ordering of the rest
/// of its run.
pub(crate) fn sort_by_keys<T>(items: Vec<(T, Option<String>)>, state: SortState) -> Vec<T> {
    let mut sorted: Vec<(T, Option<String>)> = Vec::with_capacity(items.len());

    for item in items {
        let mut at = sorted.len();
        while at > 0
            && compare_keys(item.1.as_deref(), sorted[at - 1].1.as_deref(), state) == Ordering::Less
        {
            at -= 1;
        }
        sorted.insert(at, item);
    }

    sorted.into_iter().map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(values: &[Option<&str>]) -> Vec<(usize, Option<String>)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (i, v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn ascending_and_descending() {
        let items = keyed(&[Some("bob"), Some("amy"), Some("cid")]);
        assert_eq!(sort_by_keys(items.clone(), SortState::Ascending), vec![1, 0, 2]);
        assert_eq!(sort_by_keys(items, SortState::Descending), vec![2, 0, 1]);
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let items = keyed(&[Some("b"), Some("a"), Some("b"), Some("a")]);
        assert_eq!(sort_by_keys(items, SortState::Ascending), vec![1, 3, 0, 2]);
    }

    #[test]
    fn missing_keys_stay_put() {
        let items = keyed(&[Some("b"), None, Some("a")]);
        assert_eq!(sort_by_keys(items, SortState::Ascending), vec![0, 1, 2]);
    }

    #[test]
    fn string_order_is_not_numeric() {
        let items = keyed(&[Some("9"), Some("10"), Some("02")]);
        assert_eq!(sort_by_keys(items, SortState::Ascending), vec![2, 1, 0]);
    }

    #[test]
    fn override_and_fallback() {
        let config = SorterConfig::default();
        let month = Element::td("February").attr("data-sort-value", "02");
        let padded = Element::td("  Mixed Case  ");
        let empty_override = Element::td(" Text ").attr("data-sort-value", "");

        assert_eq!(sort_key(&month, &config), "02");
        assert_eq!(sort_key(&padded, &config), "mixed case");
        assert_eq!(sort_key(&empty_override, &config), "text");
    }

    #[test]
    fn row_key_short_row() {
        let config = SorterConfig::default();
        let row = Element::tr().child(Element::td("only"));
        assert_eq!(row_key(&row, 0, &config), Some("only".into()));
        assert_eq!(row_key(&row, 1, &config), None);
    }
}
