//! Templates for rendering exported selections into reports

mod sheet;
mod template;

pub use sheet::{Markdown, Sheet};
pub use template::{Context, Group, Legend, Row, Template};

use crate::export::Record;
use crate::language::Colour;

/// Render a set of exported records using the specified template. Records
/// are grouped under their category, categories appearing in the order the
/// records first mention them.
pub fn fill(
    template: &impl Template,
    name: Option<&str>,
    records: &[Record],
) -> Result<String, tinytemplate::error::Error> {
    let context = build_context(name, records);
    template.render(&context)
}

pub fn build_context<'i>(name: Option<&str>, records: &[Record<'i>]) -> Context<'i> {
    let title = match name {
        Some(name) if !name.is_empty() => format!("Questionnaire for {}", name),
        _ => "Questionnaire".to_string(),
    };

    let legend = Colour::ALL
        .iter()
        .map(|colour| Legend {
            tag: colour.tag(),
            label: colour.label(),
        })
        .collect();

    let mut categories: Vec<Group<'i>> = Vec::new();

    for record in records {
        let row = Row {
            subcategory: record.subcategory,
            option: record.option,
            tag: record
                .selected_color
                .tag(),
            label: record
                .selected_color
                .label(),
        };

        match categories
            .iter_mut()
            .find(|group| group.name == record.category)
        {
            Some(group) => group
                .rows
                .push(row),
            None => categories.push(Group {
                name: record.category,
                rows: vec![row],
            }),
        }
    }

    Context {
        title,
        legend,
        categories,
    }
}
