//! Path grammar parser.
//!
//! Segments are scanned right to left in a single pass. The rightmost segment
//! is the only one inspected for a `{Relation}` suffix; braces anywhere else
//! are part of the name.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::{PathError, SearchCriteria};
use crate::config::{Reconstruction, ResolverConfig};

static RELATION_MODIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<base>.*)\{(?P<relation>[^{}]*)\}$").expect("relation modifier pattern")
});

/// Parser for character paths.
#[derive(Debug, Clone, Default)]
pub struct PathParser {
    config: ResolverConfig,
}

impl PathParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Parse a path into search criteria.
    ///
    /// The empty path (or one made only of separators) yields empty criteria.
    pub fn parse(&self, path: &str) -> Result<SearchCriteria, PathError> {
        let separator = self.config.segment_separator;
        let segments: Vec<&str> = path.split(separator).filter(|s| !s.is_empty()).collect();

        let mut criteria = SearchCriteria::default();
        let mut names: Vec<&str> = Vec::with_capacity(segments.len());
        let mut rightmost = "";

        for (position, segment) in segments.iter().copied().rev().enumerate() {
            let (family, local) = self.split_family(segment)?;

            let name = if position == 0 {
                let (base, relation) = split_relation(local);
                rightmost = base;
                criteria.relation = relation.map(str::to_string);
                base
            } else {
                local
            };

            names.push(match self.config.reconstruction {
                Reconstruction::PerSegment => name,
                Reconstruction::Literal => rightmost,
            });

            // Scanning leftwards, so the last qualifier seen is the leftmost one
            if let Some(family) = family {
                criteria.family_name = Some(family.to_string());
            }
        }

        criteria.character_name = rightmost.to_string();
        criteria.path_without_modifier = names
            .iter()
            .rev()
            .map(|name| format!("{separator}{name}"))
            .collect();

        trace!(path, ?criteria, "parsed character path");
        Ok(criteria)
    }

    /// Split `Family:Name` into its qualifier and local name.
    fn split_family<'p>(&self, segment: &'p str) -> Result<(Option<&'p str>, &'p str), PathError> {
        let separator = self.config.family_separator;
        let parts: Vec<&str> = segment.split(separator).collect();

        match parts.as_slice() {
            [local] => Ok((None, *local)),
            [family, local] if !family.is_empty() && !local.is_empty() => {
                Ok((Some(*family), *local))
            }
            _ => Err(PathError::MalformedSegment {
                segment: segment.to_string(),
                separator,
            }),
        }
    }
}

/// Split `Name{Relation}` into the base name and the relation keyword.
/// An empty `{}` carries no relation.
fn split_relation(local: &str) -> (&str, Option<&str>) {
    match RELATION_MODIFIER.captures(local) {
        Some(captures) => {
            let base = captures.name("base").map_or("", |m| m.as_str());
            let relation = captures
                .name("relation")
                .map(|m| m.as_str())
                .filter(|r| !r.is_empty());
            (base, relation)
        }
        None => (local, None),
    }
}

/// Parse a path with the default configuration.
pub fn parse_path(path: &str) -> Result<SearchCriteria, PathError> {
    PathParser::default().parse(path)
}
