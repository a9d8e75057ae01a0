use tabledom::{text_table, to_html, Element};

// ============================================================================
// HTML
// ============================================================================

#[test]
fn test_to_html_orders_and_escapes_attributes() {
    let cell = Element::td("a < b & c")
        .id("c1")
        .class("num")
        .class("wide")
        .attr("data-sort-value", "\"02\"")
        .attr("colspan", "2");

    assert_eq!(
        to_html(&cell),
        "<td id=\"c1\" class=\"num wide\" colspan=\"2\" data-sort-value=\"&quot;02&quot;\">a &lt; b &amp; c</td>"
    );
}

#[test]
fn test_to_html_nested() {
    let row = Element::tr()
        .id("r")
        .child(Element::td("x").id("a"))
        .child(Element::td("y").id("b"));
    assert_eq!(
        to_html(&row),
        "<tr id=\"r\"><td id=\"a\">x</td><td id=\"b\">y</td></tr>"
    );
}

// ============================================================================
// Text projection
// ============================================================================

#[test]
fn test_text_table_alignment() {
    let table = Element::table()
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("Name ").child(Element::span("↕")))
                    .child(Element::th("City")),
            ),
        )
        .child(
            Element::tbody()
                .child(Element::tr().child(Element::td("Amy")).child(Element::td("東京")))
                .child(Element::tr().child(Element::td("Bobby")).child(Element::td("Oslo"))),
        );

    let expected = [
        "Name ↕ | City",
        "-------+-----",
        "Amy    | 東京",
        "Bobby  | Oslo",
    ]
    .join("\n");
    assert_eq!(text_table(&table), expected);
}

#[test]
fn test_text_table_without_body() {
    let table = Element::table().child(Element::thead().child(Element::tr().child(Element::th("A"))));
    assert_eq!(text_table(&table), "A\n-");
}
