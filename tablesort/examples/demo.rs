use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{find_element, text_table, Document, Element, Event};
use tablesort::{SortController, SortPolicy, SorterConfig};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("tablesort-demo.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let policy = match std::env::args().nth(1).as_deref() {
        Some("toggle") => SortPolicy::Toggle,
        _ => SortPolicy::Cycle,
    };

    let mut doc = Document::new(Element::new("body").id("page").child(months()));
    doc.add_handler(SortController::new(SorterConfig::new(policy)));
    doc.load();

    show(&doc, "initial");
    for target in ["h-name", "h-name", "h-month-icon", "h-month", "h-month"] {
        doc.dispatch(&Event::click(target));
        show(&doc, &format!("click {target}"));
    }

    Ok(())
}

fn show(doc: &Document, label: &str) {
    if let Some(table) = find_element(doc.root(), "months") {
        println!("== {label}\n{}\n", text_table(table));
    }
}

fn header(id: &str, label: &str, column: &str) -> Element {
    Element::th(format!("{label} "))
        .id(id)
        .class("sortable")
        .attr("data-column", column)
        .child(Element::span("↕").id(format!("{id}-icon")).class("sort-icon"))
}

fn months() -> Element {
    let rows = [
        ("Bob", "October", "10"),
        ("Amy", "February", "02"),
        ("Cid", "March", "03"),
        ("Dee", "December", "12"),
    ];

    Element::table()
        .id("months")
        .child(
            Element::thead().child(
                Element::tr()
                    .child(header("h-name", "Name", "name"))
                    .child(header("h-month", "Month", "month")),
            ),
        )
        .child(Element::tbody().children_from(rows.iter().map(|(name, month, key)| {
            Element::tr()
                .child(Element::td(*name))
                .child(Element::td(*month).attr("data-sort-value", *key))
        })))
}
