//! Template trait for rendering exported selections

use serde::Serialize;

/// What every template is given to work with.
#[derive(Debug, Serialize)]
pub struct Context<'i> {
    pub title: String,
    pub legend: Vec<Legend>,
    pub categories: Vec<Group<'i>>,
}

#[derive(Debug, Serialize)]
pub struct Legend {
    pub tag: &'static str,
    pub label: &'static str,
}

/// The records belonging to one category, in export order.
#[derive(Debug, Serialize)]
pub struct Group<'i> {
    pub name: &'i str,
    pub rows: Vec<Row<'i>>,
}

#[derive(Debug, Serialize)]
pub struct Row<'i> {
    pub subcategory: &'i str,
    pub option: &'i str,
    pub tag: &'static str,
    pub label: &'static str,
}

/// Trait for templates that turn a set of selections into a report
pub trait Template {
    /// Render the context into the finished report
    fn render(&self, context: &Context) -> Result<String, tinytemplate::error::Error>;
}
