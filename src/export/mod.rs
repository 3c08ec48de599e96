//! Flattening a questionnaire and the ratings given to its options into a
//! list of records, ready to be serialized.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::language::*;

/// One option as seen during the walk over a Document.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a, 'i> {
    pub category: &'i str,
    pub subcategory: &'i str,
    pub index: usize,
    pub item: &'a Item<'i>,
}

/// A rated option. Serializes with the field names downstream consumers of
/// exports expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<'i> {
    pub category: &'i str,
    pub subcategory: &'i str,
    pub option: &'i str,
    #[serde(rename = "selectedColor")]
    pub selected_color: Colour,
}

/// Walk the Document in order, asking `choose` for the colour of each
/// option.
pub fn flatten<'i, F>(document: &Document<'i>, mut choose: F) -> Vec<Record<'i>>
where
    F: FnMut(&Position<'_, 'i>) -> Colour,
{
    let mut records = Vec::with_capacity(document.count_items());

    for category in &document.categories {
        for subcategory in &category.subcategories {
            for (index, item) in subcategory
                .items
                .iter()
                .enumerate()
            {
                let position = Position {
                    category: category.name,
                    subcategory: subcategory.name,
                    index,
                    item,
                };
                let selected_color = choose(&position);

                records.push(Record {
                    category: category.name,
                    subcategory: subcategory.name,
                    option: item.text,
                    selected_color,
                });
            }
        }
    }

    records
}

// What a previously exported record looks like coming back in.
#[derive(Deserialize)]
struct Answer {
    category: String,
    subcategory: String,
    option: String,
    #[serde(rename = "selectedColor", default)]
    selected_color: Colour,
}

/// The colours a respondent has chosen, keyed by category, subcategory, and
/// option text. Options that were never chosen are White. Two options with
/// identical text in the same subcategory share a choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    choices: HashMap<String, HashMap<String, HashMap<String, Colour>>>,
}

impl Selections {
    pub fn new() -> Selections {
        Selections::default()
    }

    /// Read the JSON array written by a previous export.
    pub fn from_json(content: &str) -> Result<Selections, SelectionsError> {
        let answers: Vec<Answer> = serde_json::from_str(content)?;

        let mut selections = Selections::new();
        for answer in answers {
            selections.select(
                &answer.category,
                &answer.subcategory,
                &answer.option,
                answer.selected_color,
            );
        }

        Ok(selections)
    }

    pub fn select(&mut self, category: &str, subcategory: &str, option: &str, colour: Colour) {
        self.choices
            .entry(category.to_string())
            .or_default()
            .entry(subcategory.to_string())
            .or_default()
            .insert(option.to_string(), colour);
    }

    pub fn colour(&self, category: &str, subcategory: &str, option: &str) -> Colour {
        self.choices
            .get(category)
            .and_then(|subcategories| subcategories.get(subcategory))
            .and_then(|options| options.get(option))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.choices
            .is_empty()
    }

    pub fn flatten<'i>(&self, document: &Document<'i>) -> Vec<Record<'i>> {
        flatten(document, |position| {
            self.colour(
                position.category,
                position.subcategory,
                position
                    .item
                    .text,
            )
        })
    }
}
