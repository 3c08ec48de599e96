use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The rating a respondent gives an option. These are presented as coloured
/// buttons, and the colour name is what gets recorded in exports. Reading a
/// colour back in goes through `FromStr`, so any capitalisation is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Colour {
    #[default]
    White,
    Blue,
    Green,
    Yellow,
    Red,
}

impl Colour {
    pub const ALL: [Colour; 5] = [
        Colour::White,
        Colour::Blue,
        Colour::Green,
        Colour::Yellow,
        Colour::Red,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Colour::White => "white",
            Colour::Blue => "blue",
            Colour::Green => "green",
            Colour::Yellow => "yellow",
            Colour::Red => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Colour::White => "Not Entered",
            Colour::Blue => "Favorite",
            Colour::Green => "Like",
            Colour::Yellow => "Interested",
            Colour::Red => "No",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColour(pub String);

impl fmt::Display for UnknownColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colour '{}'", self.0)
    }
}

impl std::error::Error for UnknownColour {}

impl FromStr for Colour {
    type Err = UnknownColour;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Colour::ALL
            .into_iter()
            .find(|colour| {
                colour
                    .tag()
                    .eq_ignore_ascii_case(tag)
            })
            .ok_or_else(|| UnknownColour(tag.to_string()))
    }
}

impl TryFrom<String> for Colour {
    type Error = UnknownColour;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}
