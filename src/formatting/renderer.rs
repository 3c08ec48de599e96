//! Renderers for colourizing questionnaire source

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Marker => content // punctuation - #999999 (grey) bold
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .bold()
                .to_string(),
            Syntax::Category => content // markup.heading - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Subcategory => content // entity.name.section - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Option => content
                .bright_white()
                .to_string(),
            Syntax::Explanation => content // comment - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .italic()
                .to_string(),
        }
    }
}

/// We do the code formatting in two passes. First we convert from our
/// Document types into a Vec of "fragments" (Syntax tag, String pairs). Then
/// second we apply the specified renderer to each pair to result in an
/// embellished/highlighted String.
pub fn render(renderer: &impl Render, document: &Document) -> String {
    // Pass 1: Format Document to tagged fragments
    let fragments = formatter::format_with_renderer(document);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
