use crate::element::{ancestors, find_element, Element};

/// Find the first descendant of `root` (excluding `root`) matching `pred`,
/// in document order.
pub fn first_descendant<'a, P>(root: &'a Element, pred: P) -> Option<&'a Element>
where
    P: Fn(&Element) -> bool,
{
    first_descendant_inner(root, &pred)
}

fn first_descendant_inner<'a, P>(element: &'a Element, pred: &P) -> Option<&'a Element>
where
    P: Fn(&Element) -> bool,
{
    for child in element.children() {
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = first_descendant_inner(child, pred) {
            return Some(found);
        }
    }
    None
}

/// Collect all descendants of `root` (excluding `root`) matching `pred`,
/// in document order.
pub fn descendants<'a, P>(root: &'a Element, pred: P) -> Vec<&'a Element>
where
    P: Fn(&Element) -> bool,
{
    let mut out = Vec::new();
    collect_descendants(root, &pred, &mut out);
    out
}

fn collect_descendants<'a, P>(element: &'a Element, pred: &P, out: &mut Vec<&'a Element>)
where
    P: Fn(&Element) -> bool,
{
    for child in element.children() {
        if pred(child) {
            out.push(child);
        }
        collect_descendants(child, pred, out);
    }
}

/// Like [`descendants`], but never enters a descendant matching `boundary`.
/// Used to keep a table's lookups out of the tables nested inside it.
pub fn descendants_within<'a, P, B>(root: &'a Element, pred: P, boundary: B) -> Vec<&'a Element>
where
    P: Fn(&Element) -> bool,
    B: Fn(&Element) -> bool,
{
    let mut out = Vec::new();
    collect_within(root, &pred, &boundary, &mut out);
    out
}

/// Like [`first_descendant`], but never enters a descendant matching
/// `boundary`.
pub fn first_descendant_within<'a, P, B>(root: &'a Element, pred: P, boundary: B) -> Option<&'a Element>
where
    P: Fn(&Element) -> bool,
    B: Fn(&Element) -> bool,
{
    first_within(root, &pred, &boundary)
}

fn first_within<'a, P, B>(element: &'a Element, pred: &P, boundary: &B) -> Option<&'a Element>
where
    P: Fn(&Element) -> bool,
    B: Fn(&Element) -> bool,
{
    for child in element.children() {
        if boundary(child) {
            continue;
        }
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = first_within(child, pred, boundary) {
            return Some(found);
        }
    }
    None
}

fn collect_within<'a, P, B>(element: &'a Element, pred: &P, boundary: &B, out: &mut Vec<&'a Element>)
where
    P: Fn(&Element) -> bool,
    B: Fn(&Element) -> bool,
{
    for child in element.children() {
        if boundary(child) {
            continue;
        }
        if pred(child) {
            out.push(child);
        }
        collect_within(child, pred, boundary, out);
    }
}

/// Find the nearest ancestor-or-self of the element with `id` that matches
/// `pred`. Returns its ID, or None if `id` is not in the tree or no element
/// on the path matches.
pub fn closest<P>(root: &Element, id: &str, pred: P) -> Option<String>
where
    P: Fn(&Element) -> bool,
{
    let path = ancestors(root, id)?;

    // Walk from the target back up towards the root
    path.into_iter()
        .rev()
        .find(|candidate| find_element(root, candidate).is_some_and(&pred))
}

/// Matches elements with the given tag.
pub fn tag(name: &str) -> impl Fn(&Element) -> bool + '_ {
    move |el| el.is(name)
}

/// Matches elements carrying the given class.
pub fn class(name: &str) -> impl Fn(&Element) -> bool + '_ {
    move |el| el.has_class(name)
}

/// Matches `tag.class`.
pub fn tag_with_class<'a>(tag: &'a str, class: &'a str) -> impl Fn(&Element) -> bool + 'a {
    move |el| el.is(tag) && el.has_class(class)
}
