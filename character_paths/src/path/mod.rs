//! Path module - grammar parsing of character paths into search criteria.

mod parser;

pub use parser::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolver::Relation;

/// Structured search intent extracted from a path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Modifier-stripped name of the rightmost segment.
    pub character_name: String,

    /// The path rebuilt without the relation modifier, slash-prefixed.
    pub path_without_modifier: String,

    /// Relation keyword from the rightmost segment, e.g. `Nemesis`.
    pub relation: Option<String>,

    /// Family qualifier; the leftmost qualified segment wins.
    pub family_name: Option<String>,
}

impl SearchCriteria {
    /// Check if the path designated nothing at all.
    pub fn is_empty(&self) -> bool {
        self.character_name.is_empty() && self.path_without_modifier.is_empty()
    }

    /// The relation modifier, if its keyword is a known relation.
    pub fn relation(&self) -> Option<Relation> {
        self.relation.as_deref().and_then(Relation::from_keyword)
    }

    /// Non-empty names of `path_without_modifier`, left to right.
    pub fn path_names(&self, separator: char) -> Vec<&str> {
        self.path_without_modifier
            .split(separator)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Errors raised for paths outside the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Malformed segment {segment:?}: expected `name` or `family{separator}name`")]
    MalformedSegment { segment: String, separator: char },
}
