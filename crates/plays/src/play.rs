use core::convert::Infallible;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use theater_core::ValueObject;

/// Genre of a play.
///
/// Parsing never fails: genres without a pricing rule are kept verbatim as
/// `Unrecognized` so the pricing engine can reject them by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
    Unrecognized(String),
}

impl Genre {
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::Unrecognized(other) => other,
        }
    }
}

impl From<&str> for Genre {
    fn from(value: &str) -> Self {
        match value {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            other => Genre::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for Genre {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            _ => Genre::Unrecognized(value),
        }
    }
}

impl From<Genre> for String {
    fn from(value: Genre) -> Self {
        match value {
            Genre::Unrecognized(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for Genre {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Genre::from(s))
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A play as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl ValueObject for Play {}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<Genre>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Tragedy)
    }

    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Comedy)
    }
}
