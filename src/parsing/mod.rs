//! parser for questionnaire files

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};
use crate::parsing::parser::ParsingError;

pub mod parser;
mod scope;

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Document created by parse() below can borrow from it.
/// A filename of "-" reads standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Not valid text".to_string(),
                    details: "the file must be UTF-8 encoded".to_string(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Document object, or return the first error
/// encountered.
pub fn parse(content: &str) -> Result<Document<'_>, ParsingError> {
    let result = parser::parse_questionnaire(content);

    match result {
        Ok(document) => {
            if document.is_empty() {
                debug!("No content found");
            } else {
                let categories = document
                    .categories
                    .len();
                let items = document.count_items();
                debug!(
                    "Found {} categor{} with {} option{}",
                    categories,
                    if categories == 1 { "y" } else { "ies" },
                    items,
                    if items == 1 { "" } else { "s" }
                );
            }
            Ok(document)
        }
        Err(error) => {
            debug!(?error);
            Err(error)
        }
    }
}
