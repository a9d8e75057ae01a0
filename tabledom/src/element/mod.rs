mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.children_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// IDs on the path from `root` down to the element with `id`, both inclusive.
/// Returns None if `id` is not in the tree.
pub fn ancestors(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }

    for child in element.children() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}
