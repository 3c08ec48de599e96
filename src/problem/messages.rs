use questionnaire::formatting::{Render, Syntax};
use questionnaire::parsing::parser::ParsingError;

// Lay out a small sample of the file format, styled by the given renderer.
fn example(renderer: &dyn Render, lines: &[(char, Syntax, &str)]) -> String {
    let mut result = String::new();

    for (marker, syntax, text) in lines {
        result.push_str("    ");
        match marker {
            '(' => {
                result.push_str(&renderer.style(Syntax::Marker, "("));
                result.push_str(&renderer.style(*syntax, text));
                result.push_str(&renderer.style(Syntax::Marker, ")"));
            }
            _ => {
                result.push_str(&renderer.style(Syntax::Marker, &marker.to_string()));
                result.push(' ');
                result.push_str(&renderer.style(*syntax, text));
            }
        }
        result.push('\n');
    }

    result
        .trim_end()
        .to_string()
}

fn full_example(renderer: &dyn Render) -> String {
    example(
        renderer,
        &[
            ('#', Syntax::Category, "Food"),
            ('(', Syntax::Subcategory, "Breakfast"),
            ('*', Syntax::Option, "Pancakes"),
            ('?', Syntax::Explanation, "With maple syrup"),
        ],
    )
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::EmptyCategoryName(_) => (
            "Category name cannot be empty".to_string(),
            format!(
                r#"
A category is declared by a '#' followed by its name, for example:

{}

There was nothing after the '#' on this line.
                "#,
                example(renderer, &[('#', Syntax::Category, "Food")])
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::EmptySubcategoryName(_) => (
            "Subcategory name cannot be empty".to_string(),
            format!(
                r#"
A subcategory is declared by enclosing its name in parenthesis, for example:

{}

The parenthesis on this line don't contain anything.
                "#,
                example(renderer, &[('(', Syntax::Subcategory, "Breakfast")])
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::EmptyOptionText(_) => (
            "Option text cannot be empty".to_string(),
            format!(
                r#"
An option is declared by a '*' followed by the text of the option, for
example:

{}

There was nothing after the '*' on this line.
                "#,
                example(renderer, &[('*', Syntax::Option, "Pancakes")])
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::EmptyExplanationText(_) => (
            "Explanation text cannot be empty".to_string(),
            format!(
                r#"
An explanation is declared by a '?' followed by the text explaining the
option immediately before it, for example:

{}

There was nothing after the '?' on this line. If the option doesn't need an
explanation, remove the line.
                "#,
                example(
                    renderer,
                    &[
                        ('*', Syntax::Option, "Pancakes"),
                        ('?', Syntax::Explanation, "With maple syrup")
                    ]
                )
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::SubcategoryBeforeCategory(_) => (
            "Subcategory found before a category".to_string(),
            format!(
                r#"
Each subcategory must follow a category. Declare the category it belongs to
first:

{}
                "#,
                full_example(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::OptionBeforeSubcategory(_) => (
            "Option found before a subcategory".to_string(),
            format!(
                r#"
Each option must be placed under a subcategory, and that subcategory under a
category:

{}

Starting a new category means a new subcategory has to be declared before
any further options.
                "#,
                full_example(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::ExplanationBeforeOption(_) => (
            "Explanation found before an option".to_string(),
            format!(
                r#"
An explanation attaches to the option on the line before it:

{}

Explanations can't attach to options from a previous subcategory or
category; a new category or subcategory line in between means there is no
option for this explanation to go with.
                "#,
                full_example(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}
