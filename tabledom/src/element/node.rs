use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Element {
    /// Create an element with the given tag name. The ID is generated from
    /// the tag and stays unique for the lifetime of the process.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            content: Content::None,
        }
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn th(label: impl Into<String>) -> Self {
        Self::new("th").text(label)
    }

    pub fn td(value: impl Into<String>) -> Self {
        Self::new("td").text(value)
    }

    pub fn span(value: impl Into<String>) -> Self {
        Self::new("span").text(value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    // Text
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.content = Content::Text(value.into());
        self
    }

    /// Replace the content of this element with a single text run.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.content = Content::Text(value.into());
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // A text run is kept as a leading span so mixed content survives
                if let Content::Text(text) = std::mem::take(&mut self.content) {
                    self.content = Content::Children(vec![Element::span(text), child]);
                } else {
                    self.content = Content::Children(vec![child]);
                }
            }
        }
        self
    }

    pub fn children_from(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Take all children out of this element, leaving it empty.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    /// Replace all children of this element.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }
}
