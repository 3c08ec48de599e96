//! Plain text and Markdown reports

use serde_json::Value;
use tinytemplate::{format_unescaped, TinyTemplate};

use super::{Context, Template};

static SHEET: &str = r#"{title}

{{ for entry in legend }}[{entry.tag}] {entry.label}
{{ endfor }}{{ for category in categories }}
{category.name}
{{ for row in category.rows }}  [{row.tag}] {row.option}
{{ endfor }}{{ endfor }}"#;

static MARKDOWN: &str = r#"# {title}

| Colour | Meaning |
| --- | --- |
{{ for entry in legend }}| {entry.tag} | {entry.label} |
{{ endfor }}{{ for category in categories }}
## {category.name | cell}

| Option | Subcategory | Choice |
| --- | --- | --- |
{{ for row in category.rows }}| {row.option | cell} | {row.subcategory | cell} | {row.label} |
{{ endfor }}{{ endfor }}"#;

// A pipe inside a table cell would end the cell early.
fn format_cell(value: &Value, output: &mut String) -> tinytemplate::error::Result<()> {
    match value {
        Value::String(text) => {
            output.push_str(&text.replace('|', "\\|"));
            Ok(())
        }
        _ => format_unescaped(value, output),
    }
}

fn fill_template(
    name: &'static str,
    text: &'static str,
    context: &Context,
) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_formatter("cell", format_cell);
    tt.add_template(name, text)?;
    tt.render(name, context)
}

/// Plain text listing of each category's options with the colour chosen.
pub struct Sheet;

impl Template for Sheet {
    fn render(&self, context: &Context) -> Result<String, tinytemplate::error::Error> {
        fill_template("sheet", SHEET, context)
    }
}

/// The same report as a Markdown document with tables.
pub struct Markdown;

impl Template for Markdown {
    fn render(&self, context: &Context) -> Result<String, tinytemplate::error::Error> {
        fill_template("markdown", MARKDOWN, context)
    }
}
