//! Code formatter for questionnaire files

use crate::formatting::*;
use crate::language::*;

/// Convert a Document into tagged fragments of canonical source. Categories
/// after the first and every subcategory are preceded by a blank line.
pub fn format_with_renderer(document: &Document) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for category in &document.categories {
        output.format_category(category);
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    fn is_empty(&self) -> bool {
        self.fragments
            .is_empty()
    }

    fn format_category(&mut self, category: &Category) {
        // separate from whatever category came before
        if !self.is_empty() {
            self.append_newline();
        }

        self.append(Syntax::Marker, "#");
        self.append(Syntax::Neutral, " ");
        self.append(Syntax::Category, category.name);
        self.append_newline();

        for subcategory in &category.subcategories {
            self.format_subcategory(subcategory);
        }
    }

    fn format_subcategory(&mut self, subcategory: &Subcategory) {
        self.append_newline();

        self.append(Syntax::Marker, "(");
        self.append(Syntax::Subcategory, subcategory.name);
        self.append(Syntax::Marker, ")");
        self.append_newline();

        for item in &subcategory.items {
            self.format_item(item);
        }
    }

    fn format_item(&mut self, item: &Item) {
        self.append(Syntax::Marker, "*");
        self.append(Syntax::Neutral, " ");
        self.append(Syntax::Option, item.text);
        self.append_newline();

        if let Some(explanation) = item.explanation {
            self.append(Syntax::Marker, "?");
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::Explanation, explanation);
            self.append_newline();
        }
    }
}
