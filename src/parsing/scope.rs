/// Where the most recently declared option lives, if an explanation line
/// would currently have anything to attach to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Last {
    Absent,
    Item {
        category: usize,
        subcategory: usize,
        index: usize,
    },
}

/// The context the parser is in as it walks down the lines of a
/// questionnaire. Positions are indices into the Document being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scope {
    category: Option<usize>,
    subcategory: Option<usize>,
    last: Last,
}

impl Scope {
    pub(crate) fn new() -> Scope {
        Scope {
            category: None,
            subcategory: None,
            last: Last::Absent,
        }
    }

    pub(crate) fn category(&self) -> Option<usize> {
        self.category
    }

    /// Both the category and subcategory, but only if we are inside both.
    pub(crate) fn subcategory(&self) -> Option<(usize, usize)> {
        match (self.category, self.subcategory) {
            (Some(category), Some(subcategory)) => Some((category, subcategory)),
            _ => None,
        }
    }

    pub(crate) fn last(&self) -> Last {
        self.last
    }

    pub(crate) fn enter_category(&mut self, category: usize) {
        self.category = Some(category);
        self.subcategory = None;
        self.last = Last::Absent;
    }

    pub(crate) fn enter_subcategory(&mut self, subcategory: usize) {
        self.subcategory = Some(subcategory);
        self.last = Last::Absent;
    }

    /// Note an option just appended at `index` within the current
    /// subcategory. Outside of a subcategory there is nothing to point at.
    pub(crate) fn record_item(&mut self, index: usize) {
        self.last = match self.subcategory() {
            Some((category, subcategory)) => Last::Item {
                category,
                subcategory,
                index,
            },
            None => Last::Absent,
        };
    }
}
