//! Cast Graph - the arena holding every character and the links between them.
//!
//! The graph is built in two phases:
//! 1. **Nodes**: one `Character` per record, in record order
//! 2. **Links**: nemesis and children edges resolved by first name, with the
//!    reverse parents index maintained alongside every child edge
//!
//! After `build` returns nothing mutates the graph again.

mod finder;
mod record;

pub use record::*;

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::entities::{Character, CharacterId};

/// The complete, linked cast.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CastGraph {
    /// All characters, indexed by `CharacterId`.
    characters: Vec<Character>,

    /// Reverse index: child -> parents, in the order the edges were added.
    parents: Vec<Vec<CharacterId>>,
}

impl CastGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a linked graph from raw records.
    ///
    /// References that do not resolve to a character are dropped.
    pub fn build(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let records: Vec<CharacterRecord> = records.into_iter().collect();

        let characters: Vec<Character> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Character::new(CharacterId(index), record.first_name.clone())
                    .with_last_name(record.last_name.clone().unwrap_or_default())
                    .with_monster(record.is_monster)
            })
            .collect();

        let mut graph = Self {
            parents: vec![Vec::new(); characters.len()],
            characters,
        };

        // First match in scan order wins for duplicated first names
        let mut by_first_name: HashMap<String, CharacterId> = HashMap::new();
        for character in &graph.characters {
            by_first_name
                .entry(character.first_name.clone())
                .or_insert(character.id);
        }

        for record in &records {
            let Some(&owner) = by_first_name.get(&record.first_name) else {
                continue;
            };

            if let Some(nemesis_name) = record.nemesis_name() {
                match by_first_name.get(nemesis_name) {
                    Some(&nemesis) => graph.characters[owner.index()].set_nemesis(nemesis),
                    None => debug!(
                        character = %record.first_name,
                        nemesis = nemesis_name,
                        "dropping unresolved nemesis"
                    ),
                }
            }

            for child_name in record.child_names() {
                match by_first_name.get(child_name.as_str()) {
                    Some(&child) => graph.link_child(owner, child),
                    None => debug!(
                        character = %record.first_name,
                        child = %child_name,
                        "dropping unresolved child"
                    ),
                }
            }
        }

        info!(characters = graph.len(), "cast graph built");
        graph
    }

    /// Add a parent -> child edge and its reverse entry. Repeated edges are ignored.
    fn link_child(&mut self, parent: CharacterId, child: CharacterId) {
        if self.characters[parent.index()].children().contains(&child) {
            return;
        }
        self.characters[parent.index()].add_child(child);
        self.parents[child.index()].push(parent);
    }

    /// Get character by ID.
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.index())
    }

    /// All characters in graph order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Get the total number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if the graph has no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The character's nemesis.
    pub fn nemesis_of(&self, character: &Character) -> Option<&Character> {
        character.nemesis().and_then(|id| self.get(id))
    }

    /// The character's children, in declaration order.
    pub fn children_of<'a>(
        &'a self,
        character: &'a Character,
    ) -> impl Iterator<Item = &'a Character> + 'a {
        character.children().iter().filter_map(|id| self.get(*id))
    }

    /// Every character that lists this one among its children.
    pub fn parents_of(&self, character: &Character) -> impl Iterator<Item = &Character> + '_ {
        self.parents
            .get(character.id.index())
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(|id| self.get(*id))
    }

    /// All other children of this character's parents, without duplicates.
    pub fn siblings_of(&self, character: &Character) -> Vec<&Character> {
        let mut siblings: Vec<&Character> = Vec::new();
        for parent in self.parents_of(character) {
            for child in self.children_of(parent) {
                if child.id != character.id && !siblings.iter().any(|s| s.id == child.id) {
                    siblings.push(child);
                }
            }
        }
        siblings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byers() -> CastGraph {
        CastGraph::build(vec![
            CharacterRecord::new("Joyce")
                .with_last_name("Byers")
                .with_child("Will")
                .with_child("Jonathan"),
            CharacterRecord::new("Will")
                .with_last_name("Byers")
                .with_nemesis("Mindflayer"),
            CharacterRecord::new("Jonathan").with_last_name("Byers"),
            CharacterRecord::new("Mindflayer").monster(),
        ])
    }

    fn names<'a>(characters: impl IntoIterator<Item = &'a Character>) -> Vec<&'a str> {
        characters.into_iter().map(|c| c.first_name.as_str()).collect()
    }

    #[test]
    fn test_build_preserves_order() {
        let graph = byers();
        assert_eq!(graph.len(), 4);
        assert_eq!(
            names(graph.characters()),
            vec!["Joyce", "Will", "Jonathan", "Mindflayer"]
        );
        for (index, character) in graph.characters().iter().enumerate() {
            assert_eq!(character.id, CharacterId(index));
        }
    }

    #[test]
    fn test_nemesis_link() {
        let graph = byers();
        let will = graph.find("Will").unwrap();
        assert_eq!(graph.nemesis_of(will).unwrap().first_name, "Mindflayer");

        let joyce = graph.find("Joyce").unwrap();
        assert!(graph.nemesis_of(joyce).is_none());
    }

    #[test]
    fn test_children_and_parents() {
        let graph = byers();
        let joyce = graph.find("Joyce").unwrap();
        assert_eq!(names(graph.children_of(joyce)), vec!["Will", "Jonathan"]);

        let will = graph.find("Will").unwrap();
        assert_eq!(names(graph.parents_of(will)), vec!["Joyce"]);
        assert_eq!(graph.parents_of(joyce).count(), 0);
    }

    #[test]
    fn test_siblings_exclude_self() {
        let graph = byers();
        let will = graph.find("Will").unwrap();
        assert_eq!(names(graph.siblings_of(will)), vec!["Jonathan"]);
    }

    #[test]
    fn test_siblings_through_two_parents_are_not_duplicated() {
        let graph = CastGraph::build(vec![
            CharacterRecord::new("Karen")
                .with_last_name("Wheeler")
                .with_child("Nancy")
                .with_child("Mike"),
            CharacterRecord::new("Ted")
                .with_last_name("Wheeler")
                .with_child("Nancy")
                .with_child("Mike"),
            CharacterRecord::new("Nancy").with_last_name("Wheeler"),
            CharacterRecord::new("Mike").with_last_name("Wheeler"),
        ]);

        let nancy = graph.find("Nancy").unwrap();
        assert_eq!(names(graph.parents_of(nancy)), vec!["Karen", "Ted"]);
        assert_eq!(names(graph.siblings_of(nancy)), vec!["Mike"]);
    }

    #[test]
    fn test_unresolved_references_are_dropped() {
        let graph = CastGraph::build(vec![
            CharacterRecord::new("Dustin")
                .with_nemesis("Nobody")
                .with_child("Ghost")
                .with_child("Mews"),
            CharacterRecord::new("Mews"),
        ]);

        let dustin = graph.find("Dustin").unwrap();
        assert!(graph.nemesis_of(dustin).is_none());
        assert_eq!(names(graph.children_of(dustin)), vec!["Mews"]);
    }

    #[test]
    fn test_parents_mirror_children() {
        let graph = byers();
        for character in graph.characters() {
            let expected: Vec<CharacterId> = graph
                .characters()
                .iter()
                .filter(|p| p.children().contains(&character.id))
                .map(|p| p.id)
                .collect();
            let actual: Vec<CharacterId> = graph.parents_of(character).map(|p| p.id).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_duplicate_first_names_stay_separate_nodes() {
        let graph = CastGraph::build(vec![
            CharacterRecord::new("Will").with_last_name("Byers"),
            CharacterRecord::new("Will").with_last_name("Other"),
            CharacterRecord::new("Joyce").with_child("Will"),
        ]);

        assert_eq!(graph.len(), 3);
        let joyce = graph.find("Joyce").unwrap();
        let children: Vec<_> = graph.children_of(joyce).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].last_name.as_deref(), Some("Byers"));
    }

    #[test]
    fn test_repeated_child_edge_is_ignored() {
        let graph = CastGraph::build(vec![
            CharacterRecord::new("Joyce").with_child("Will").with_child("Will"),
            CharacterRecord::new("Will"),
        ]);

        let will = graph.find("Will").unwrap();
        assert_eq!(graph.parents_of(will).count(), 1);
    }

    #[test]
    fn test_empty_input() {
        let graph = CastGraph::build(Vec::new());
        assert!(graph.is_empty());
        assert!(graph.find("Anyone").is_none());
    }

    #[test]
    fn test_independent_builds() {
        let first = byers();
        let second = byers();
        let a = first.find("Will").unwrap();
        let b = second.find("Will").unwrap();
        assert_eq!(a, b);
        assert!(!std::ptr::eq(a, b));
    }
}
