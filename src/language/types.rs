//! Types representing a parsed questionnaire

use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// The root of a parsed questionnaire: its categories, in the order they were
/// first declared.
#[derive(Eq, Debug, PartialEq, Clone, Default)]
pub struct Document<'i> {
    pub categories: Listing<'i, Category<'i>>,
}

impl<'i> Document<'i> {
    pub fn category(&self, name: &str) -> Option<&Category<'i>> {
        self.categories
            .get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.categories
            .is_empty()
    }

    /// Total number of options across every category and subcategory.
    pub fn count_items(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| category.subcategories.iter())
            .map(|subcategory| {
                subcategory
                    .items
                    .len()
            })
            .sum()
    }
}

#[derive(Eq, Debug, PartialEq, Clone)]
pub struct Category<'i> {
    pub name: &'i str,
    pub subcategories: Listing<'i, Subcategory<'i>>,
}

impl<'i> Category<'i> {
    pub fn new(name: &'i str) -> Category<'i> {
        Category {
            name,
            subcategories: Listing::new(),
        }
    }

    pub fn subcategory(&self, name: &str) -> Option<&Subcategory<'i>> {
        self.subcategories
            .get(name)
    }
}

#[derive(Eq, Debug, PartialEq, Clone)]
pub struct Subcategory<'i> {
    pub name: &'i str,
    pub items: Vec<Item<'i>>,
}

impl<'i> Subcategory<'i> {
    pub fn new(name: &'i str) -> Subcategory<'i> {
        Subcategory {
            name,
            items: Vec::new(),
        }
    }
}

/// A single selectable option, and the explanation attached to it if there
/// was one.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Item<'i> {
    #[serde(rename = "option")]
    pub text: &'i str,
    pub explanation: Option<&'i str>,
}

impl<'i> Item<'i> {
    pub fn new(text: &'i str) -> Item<'i> {
        Item {
            text,
            explanation: None,
        }
    }
}

/// Anything that can be stored in a Listing is looked up by its name.
pub trait Named<'i> {
    fn name(&self) -> &'i str;
}

impl<'i> Named<'i> for Category<'i> {
    fn name(&self) -> &'i str {
        self.name
    }
}

impl<'i> Named<'i> for Subcategory<'i> {
    fn name(&self) -> &'i str {
        self.name
    }
}

/// A sequence of named entries which is also addressable by name. The Vec
/// carries the order in which names were first seen; the map carries the
/// position of each name within it. Inserting a name that is already present
/// replaces that entry where it stands rather than moving it to the end.
#[derive(Eq, Debug, PartialEq, Clone)]
pub struct Listing<'i, T> {
    entries: Vec<T>,
    positions: HashMap<&'i str, usize>,
}

impl<'i, T> Default for Listing<'i, T> {
    fn default() -> Self {
        Listing {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<'i, T> Listing<'i, T>
where
    T: Named<'i>,
{
    pub fn new() -> Listing<'i, T> {
        Listing::default()
    }

    /// Add an entry, returning its position. An existing entry of the same
    /// name is discarded in favour of the new one.
    pub(crate) fn insert(&mut self, value: T) -> usize {
        let name = value.name();

        match self
            .positions
            .get(name)
        {
            Some(&index) => {
                self.entries[index] = value;
                index
            }
            None => {
                let index = self
                    .entries
                    .len();
                self.entries
                    .push(value);
                self.positions
                    .insert(name, index);
                index
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        let index = *self
            .positions
            .get(name)?;
        self.entries
            .get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions
            .get(name)
            .copied()
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.entries
            .get(index)
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries
            .get_mut(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &'i str> + '_ {
        self.entries
            .iter()
            .map(|entry| entry.name())
    }
}

impl<'i, T> Listing<'i, T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries
            .iter()
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }
}

impl<'a, 'i, T> IntoIterator for &'a Listing<'i, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'i, T> FromIterator<T> for Listing<'i, T>
where
    T: Named<'i>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut listing = Listing::new();
        for value in iter {
            listing.insert(value);
        }
        listing
    }
}

// The output shape handed to renderers is a nested object keyed by name,
// which is what a Listing serializes as. Order is the Listing's order.

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.categories
                .iter()
                .map(|category| (category.name, category)),
        )
    }
}

impl Serialize for Category<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.subcategories
                .iter()
                .map(|subcategory| (subcategory.name, subcategory)),
        )
    }
}

impl Serialize for Subcategory<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
