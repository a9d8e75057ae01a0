use crate::element::Element;
use crate::query::{first_descendant, tag};
use crate::text::{collapse_whitespace, display_width, pad_to_width};

/// Render a `table` element as aligned plain text.
///
/// The first `thead` row becomes the header line, followed by a separator
/// and every `tr` of the first `tbody`. Cells are padded by display width
/// so wide characters line up in a terminal.
pub fn text_table(table: &Element) -> String {
    let header: Vec<String> = first_descendant(table, tag("thead"))
        .and_then(|thead| first_descendant(thead, tag("tr")))
        .map(row_cells)
        .unwrap_or_default();

    let body: Vec<Vec<String>> = first_descendant(table, tag("tbody"))
        .map(|tbody| {
            tbody
                .children()
                .iter()
                .filter(|el| el.is("tr"))
                .map(row_cells)
                .collect()
        })
        .unwrap_or_default();

    let columns = body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for row in std::iter::once(&header).chain(body.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    if !header.is_empty() {
        lines.push(format_row(&header, &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
    }
    for row in &body {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn row_cells(row: &Element) -> Vec<String> {
    row.children()
        .iter()
        .filter(|el| el.is("td") || el.is("th"))
        .map(|cell| collapse_whitespace(&cell.text_content()))
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| pad_to_width(cells.get(i).map(String::as_str).unwrap_or(""), *w))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

