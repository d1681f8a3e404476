//! Raw character records and the loading boundary.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

use super::CastGraph;

/// Location of the bundled sample cast, relative to the workspace root.
pub const DEFAULT_CAST_FILE: &str = "resources/strange_characters.json";

/// A character as it appears in a cast file, before any linking.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterRecord {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_monster: bool,
    /// First name of the nemesis, resolved once the whole cast is known.
    #[serde(default)]
    pub nemesis: Option<String>,
    /// First names of the children, resolved once the whole cast is known.
    #[serde(default)]
    pub children: Option<Vec<String>>,
}

impl CharacterRecord {
    /// Create a record with only a first name.
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Default::default()
        }
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Mark the record as a monster.
    pub fn monster(mut self) -> Self {
        self.is_monster = true;
        self
    }

    /// Set the nemesis name.
    pub fn with_nemesis(mut self, nemesis: impl Into<String>) -> Self {
        self.nemesis = Some(nemesis.into());
        self
    }

    /// Append a child name.
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    /// Declared nemesis name, if non-empty.
    pub fn nemesis_name(&self) -> Option<&str> {
        self.nemesis.as_deref().filter(|name| !name.is_empty())
    }

    /// Declared child names; empty when none were given.
    pub fn child_names(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Errors raised while reading a cast file.
#[derive(Error, Debug)]
pub enum CastError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid cast data: {0}")]
    Json(#[from] serde_json::Error),
}

impl CastGraph {
    /// Decode a JSON array of records and build the graph from it.
    pub fn from_json_str(json: &str) -> Result<Self, CastError> {
        let records: Vec<CharacterRecord> = serde_json::from_str(json)?;
        Ok(Self::build(records))
    }

    /// Decode records from any reader and build the graph from them.
    pub fn from_reader(reader: impl Read) -> Result<Self, CastError> {
        let records: Vec<CharacterRecord> = serde_json::from_reader(reader)?;
        Ok(Self::build(records))
    }

    /// Read a cast file and build the graph from it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CastError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}
