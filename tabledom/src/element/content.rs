#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}
