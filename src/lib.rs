//! Parsing and tooling for a small text format describing questionnaires:
//! categories marked with `#`, subcategories in `(parentheses)`, options
//! marked with `*`, and an optional `?` explanation following an option.

pub mod export;
pub mod formatting;
pub mod language;
pub mod parsing;
pub mod templating;
