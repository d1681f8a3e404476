//! # Character Paths
//!
//! Resolves slash-delimited character paths such as
//! `/Wheeler:Karen/Wheeler:Nancy` or `/Joyce/Will{Nemesis}` against a
//! [`CastGraph`].
//!
//! ## Core Components
//!
//! - **path**: Grammar parser turning a path string into `SearchCriteria`
//! - **resolver**: Anchor lookup (plain or family-scoped) plus relation modifiers
//! - **config**: Separator and reconstruction options, loadable from TOML
//!
//! ## Path Grammar
//!
//! ```text
//! path          = { "/" segment } ;
//! segment       = plainName | qualifiedName ;
//! qualifiedName = lastName ":" localName ;
//! ```
//!
//! Only the rightmost segment may carry a `{Relation}` suffix.

pub mod config;
pub mod path;
pub mod resolver;

pub use config::*;
pub use path::*;
pub use resolver::*;

pub use cast_graph::{
    CastError, CastGraph, Character, CharacterId, CharacterRecord, DEFAULT_CAST_FILE,
};

/// Build the linked cast from raw records.
pub fn load_graph(records: impl IntoIterator<Item = CharacterRecord>) -> CastGraph {
    CastGraph::build(records)
}

/// Resolve `path` against `graph` with the default configuration.
///
/// Returns `None` when the path is malformed or designates no character.
pub fn find_by_path<'g>(graph: &'g CastGraph, path: &str) -> Option<&'g Character> {
    CharacterResolver::new(graph).find_by_path(path)
}
