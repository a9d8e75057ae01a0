mod html;
mod table;

pub use html::to_html;
pub use table::text_table;
