#![allow(dead_code)]

use tabledom::{find_element, Document, Element};
use tablesort::{SortController, SorterConfig};

pub fn sortable_th(id: &str, label: &str, column: &str) -> Element {
    Element::th(format!("{label} "))
        .id(id)
        .class("sortable")
        .attr("data-column", column)
        .child(Element::span("↕").id(format!("{id}-icon")).class("sort-icon"))
}

/// Table `t` with a sortable "name" column, a plain "notes" column and a
/// sortable "month" column whose cells carry zero-padded override keys.
pub fn people_table() -> Element {
    let rows = [
        ("r-bob", "Bob", "second", "October", "10"),
        ("r-amy", "Amy", "first", "February", "02"),
        ("r-cid", "Cid", "third", "March", "03"),
    ];

    Element::table()
        .id("t")
        .child(
            Element::thead().child(
                Element::tr()
                    .child(sortable_th("h-name", "Name", "name"))
                    .child(Element::th("Notes").id("h-notes"))
                    .child(sortable_th("h-month", "Month", "month")),
            ),
        )
        .child(Element::tbody().id("t-body").children_from(rows.iter().map(
            |(id, name, notes, month, key)| {
                Element::tr()
                    .id(*id)
                    .child(Element::td(format!("  {name}\n")))
                    .child(Element::td(*notes))
                    .child(Element::td(*month).attr("data-sort-value", *key))
            },
        )))
}

pub fn page(tables: impl IntoIterator<Item = Element>) -> Element {
    Element::new("body").id("page").children_from(tables)
}

pub fn loaded(root: Element, config: SorterConfig) -> Document {
    let mut doc = Document::new(root);
    doc.add_handler(SortController::new(config));
    doc.load();
    doc
}

pub fn row_ids(doc: &Document, body: &str) -> Vec<String> {
    find_element(doc.root(), body)
        .map(|b| b.children().iter().map(|r| r.id.clone()).collect())
        .unwrap_or_default()
}

/// Text of column `col` for each row of `body`, trimmed.
pub fn column(doc: &Document, body: &str, col: usize) -> Vec<String> {
    find_element(doc.root(), body)
        .map(|b| {
            b.children()
                .iter()
                .map(|r| {
                    r.children()
                        .get(col)
                        .map(|c| c.text_content().trim().to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn glyph(doc: &Document, header: &str) -> String {
    find_element(doc.root(), &format!("{header}-icon"))
        .map(Element::text_content)
        .unwrap_or_default()
}

pub fn classes(doc: &Document, id: &str) -> Vec<String> {
    find_element(doc.root(), id)
        .map(|e| e.classes.clone())
        .unwrap_or_default()
}
