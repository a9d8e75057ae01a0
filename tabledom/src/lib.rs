pub mod document;
pub mod element;
pub mod event;
pub mod query;
pub mod render;
pub mod text;

pub use document::{Document, Handler};
pub use element::{ancestors, find_element, find_element_mut, Content, Element};
pub use event::{Event, EventResult, Key};
pub use query::{
    closest, descendants, descendants_within, first_descendant, first_descendant_within,
};
pub use render::{text_table, to_html};
