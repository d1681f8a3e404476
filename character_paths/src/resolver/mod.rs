//! Character Resolver - turns search criteria into at most one character.
//!
//! Resolution has two independent steps:
//! 1. **Anchor**: find the character named by the path, either across the
//!    whole cast or within the qualified family
//! 2. **Relation**: if the rightmost segment carried a known modifier,
//!    follow it from the anchor
//!
//! A path that designates nobody is not an error; it resolves to `None`.

mod relation;

pub use relation::*;

use cast_graph::{CastGraph, Character};
use tracing::{debug, trace};

use crate::config::ResolverConfig;
use crate::path::{PathParser, SearchCriteria};

/// Resolves paths against one cast graph.
///
/// The resolver only borrows the graph, so any number of resolvers may share it.
#[derive(Debug, Clone)]
pub struct CharacterResolver<'g> {
    graph: &'g CastGraph,
    parser: PathParser,
}

impl<'g> CharacterResolver<'g> {
    /// Create a resolver with default configuration.
    pub fn new(graph: &'g CastGraph) -> Self {
        Self {
            graph,
            parser: PathParser::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.parser = PathParser::new(config);
        self
    }

    /// The graph being resolved against.
    pub fn graph(&self) -> &'g CastGraph {
        self.graph
    }

    /// Parse `path` and resolve it. Malformed paths resolve to `None`.
    pub fn find_by_path(&self, path: &str) -> Option<&'g Character> {
        match self.parser.parse(path) {
            Ok(criteria) => self.resolve(&criteria),
            Err(err) => {
                debug!(path, %err, "malformed character path");
                None
            }
        }
    }

    /// Resolve parsed criteria to a character.
    pub fn resolve(&self, criteria: &SearchCriteria) -> Option<&'g Character> {
        let anchor = match criteria.family_name.as_deref() {
            Some(family_name) => self.find_in_family(family_name, criteria),
            None => self.graph.find(&criteria.character_name),
        }?;

        trace!(anchor = %anchor, relation = ?criteria.relation, "anchor resolved");

        match criteria.relation() {
            Some(relation) => relation.follow(self.graph, anchor),
            None => Some(anchor),
        }
    }

    /// Family-scoped lookup: the path must name exactly an anchor and a target.
    fn find_in_family(&self, family_name: &str, criteria: &SearchCriteria) -> Option<&'g Character> {
        let family = self.graph.find_family_by_last_name(Some(family_name));

        let names = criteria.path_names(self.parser.config().segment_separator);
        let [_, target] = names.as_slice() else {
            debug!(
                family = family_name,
                names = names.len(),
                "family path must name exactly two characters"
            );
            return None;
        };

        CastGraph::find_relatives_named(target, &family)
            .into_iter()
            .next()
    }
}
