use std::fmt;

use crate::language::*;
use crate::parsing::scope::{Last, Scope};

/// Parse questionnaire text into a Document. Parsing stops at the first
/// line which doesn't fit the structure built so far.
pub fn parse_questionnaire<'i>(content: &'i str) -> Result<Document<'i>, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);
    input.parse_from_start()
}

/// Things that can go wrong. Each carries the byte offset of the offending
/// line's first non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    EmptyCategoryName(usize),
    EmptySubcategoryName(usize),
    EmptyOptionText(usize),
    EmptyExplanationText(usize),
    SubcategoryBeforeCategory(usize),
    OptionBeforeSubcategory(usize),
    ExplanationBeforeOption(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::EmptyCategoryName(offset) => *offset,
            ParsingError::EmptySubcategoryName(offset) => *offset,
            ParsingError::EmptyOptionText(offset) => *offset,
            ParsingError::EmptyExplanationText(offset) => *offset,
            ParsingError::SubcategoryBeforeCategory(offset) => *offset,
            ParsingError::OptionBeforeSubcategory(offset) => *offset,
            ParsingError::ExplanationBeforeOption(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::EmptyCategoryName(_) => "category name cannot be empty".to_string(),
            ParsingError::EmptySubcategoryName(_) => {
                "subcategory name cannot be empty".to_string()
            }
            ParsingError::EmptyOptionText(_) => "option text cannot be empty".to_string(),
            ParsingError::EmptyExplanationText(_) => {
                "explanation text cannot be empty".to_string()
            }
            ParsingError::SubcategoryBeforeCategory(_) => {
                "subcategory found before a category".to_string()
            }
            ParsingError::OptionBeforeSubcategory(_) => {
                "option found before a subcategory".to_string()
            }
            ParsingError::ExplanationBeforeOption(_) => {
                "explanation found before an option".to_string()
            }
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ParsingError {}

/// What a single trimmed line says to do. The payload is whatever follows
/// the marker, already trimmed, and may well be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'i> {
    Category(&'i str),
    Subcategory(&'i str),
    Option(&'i str),
    Explanation(&'i str),
    Unrecognized,
}

/// Decide what a line is from its first character (and, for subcategories,
/// its last). The checks are made in this order, so "#(x)" is a category.
/// There is no escaping; text that begins with a marker is read as one.
pub fn classify(line: &str) -> Directive<'_> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('#') {
        Directive::Category(rest.trim())
    } else if line.starts_with('(') && line.ends_with(')') {
        Directive::Subcategory(line[1..line.len() - 1].trim())
    } else if let Some(rest) = line.strip_prefix('*') {
        Directive::Option(rest.trim())
    } else if let Some(rest) = line.strip_prefix('?') {
        Directive::Explanation(rest.trim())
    } else {
        Directive::Unrecognized
    }
}

#[derive(Debug)]
pub struct Parser<'i> {
    original: &'i str,
    offset: usize,
    scope: Scope,
    document: Document<'i>,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            original: "",
            offset: 0,
            scope: Scope::new(),
            document: Document::default(),
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.offset = 0;
        self.scope = Scope::new();
        self.document = Document::default();
    }

    pub fn parse_from_start(&mut self) -> Result<Document<'i>, ParsingError> {
        let original = self.original;

        // a byte order mark is not part of the first line
        let body = original
            .strip_prefix('\u{feff}')
            .unwrap_or(original);
        let mut start = original.len() - body.len();

        for line in body.split('\n') {
            let trimmed = line.trim();

            if !trimmed.is_empty() {
                let indent = line.len()
                    - line
                        .trim_start()
                        .len();
                self.offset = start + indent;
                self.read_line(trimmed)?;
            }

            start += line.len() + 1;
        }

        Ok(std::mem::take(&mut self.document))
    }

    pub fn read_line(&mut self, line: &'i str) -> Result<(), ParsingError> {
        match classify(line) {
            Directive::Category(name) => self.read_category(name),
            Directive::Subcategory(name) => self.read_subcategory(name),
            Directive::Option(text) => self.read_option(text),
            Directive::Explanation(text) => self.read_explanation(text),
            Directive::Unrecognized => Ok(()),
        }
    }

    fn read_category(&mut self, name: &'i str) -> Result<(), ParsingError> {
        if name.is_empty() {
            return Err(ParsingError::EmptyCategoryName(self.offset));
        }

        let index = self
            .document
            .categories
            .insert(Category::new(name));
        self.scope
            .enter_category(index);

        Ok(())
    }

    fn read_subcategory(&mut self, name: &'i str) -> Result<(), ParsingError> {
        let category = self
            .scope
            .category()
            .ok_or(ParsingError::SubcategoryBeforeCategory(self.offset))?;

        if name.is_empty() {
            return Err(ParsingError::EmptySubcategoryName(self.offset));
        }

        let category = self
            .document
            .categories
            .at_mut(category)
            .ok_or(ParsingError::SubcategoryBeforeCategory(self.offset))?;

        let index = category
            .subcategories
            .insert(Subcategory::new(name));
        self.scope
            .enter_subcategory(index);

        Ok(())
    }

    fn read_option(&mut self, text: &'i str) -> Result<(), ParsingError> {
        let (category, subcategory) = self
            .scope
            .subcategory()
            .ok_or(ParsingError::OptionBeforeSubcategory(self.offset))?;

        if text.is_empty() {
            return Err(ParsingError::EmptyOptionText(self.offset));
        }

        let items = &mut self
            .document
            .categories
            .at_mut(category)
            .and_then(|category| {
                category
                    .subcategories
                    .at_mut(subcategory)
            })
            .ok_or(ParsingError::OptionBeforeSubcategory(self.offset))?
            .items;

        items.push(Item::new(text));
        let index = items.len() - 1;

        self.scope
            .record_item(index);

        Ok(())
    }

    fn read_explanation(&mut self, text: &'i str) -> Result<(), ParsingError> {
        let Last::Item {
            category,
            subcategory,
            index,
        } = self
            .scope
            .last()
        else {
            return Err(ParsingError::ExplanationBeforeOption(self.offset));
        };

        if text.is_empty() {
            return Err(ParsingError::EmptyExplanationText(self.offset));
        }

        let item = self
            .document
            .categories
            .at_mut(category)
            .and_then(|category| {
                category
                    .subcategories
                    .at_mut(subcategory)
            })
            .and_then(|subcategory| {
                subcategory
                    .items
                    .get_mut(index)
            })
            .ok_or(ParsingError::ExplanationBeforeOption(self.offset))?;

        item.explanation = Some(text);

        Ok(())
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser::new()
    }
}
