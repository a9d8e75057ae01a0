use crate::element::{Content, Element};

/// Serialize an element tree as HTML.
///
/// `id` and `class` come first, the remaining attributes follow in key order.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    write_attr(out, "id", &element.id);
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (key, value) in &element.attrs {
        if key == "id" || key == "class" {
            continue;
        }
        write_attr(out, key, value);
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, out, false),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    escape_into(value, out, true);
    out.push('"');
}

fn escape_into(text: &str, out: &mut String, in_attr: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
