//! Finder queries - first-name, family, and relation lookups over the cast.
//!
//! Every query scans in graph order, so "first match" is always the earliest
//! record with the requested name.

use tracing::trace;

use super::CastGraph;
use crate::entities::Character;

impl CastGraph {
    /// First character with the given first name.
    pub fn find(&self, first_name: &str) -> Option<&Character> {
        let found = self.characters().iter().find(|c| c.first_name == first_name);
        trace!(first_name, found = found.is_some(), "find by first name");
        found
    }

    /// Members of `family` with the given first name, in family order.
    pub fn find_relatives_named<'a>(
        first_name: &str,
        family: &[&'a Character],
    ) -> Vec<&'a Character> {
        family
            .iter()
            .copied()
            .filter(|c| c.first_name == first_name)
            .collect()
    }

    /// First parent of the first character with the given first name.
    pub fn find_parent(&self, first_name: &str) -> Option<&Character> {
        let child = self.find(first_name)?;
        self.parents_of(child).next()
    }

    /// Characters sharing a last name.
    ///
    /// With `None`, the "family" is every character without a last name that
    /// is not a monster.
    pub fn find_family_by_last_name(&self, last_name: Option<&str>) -> Vec<&Character> {
        self.characters()
            .iter()
            .filter(|c| match last_name {
                Some(name) => c.is_in_family(name),
                None => c.last_name.is_none() && !c.is_monster,
            })
            .collect()
    }

    /// All monsters in the cast.
    pub fn find_monsters(&self) -> Vec<&Character> {
        self.characters().iter().filter(|c| c.is_monster).collect()
    }

    /// Parents, children, then siblings of the first character with the given
    /// first name. Each relative appears once.
    pub fn find_family_by_character(&self, first_name: &str) -> Vec<&Character> {
        let Some(person) = self.find(first_name) else {
            return Vec::new();
        };

        let mut family: Vec<&Character> = Vec::new();
        let relatives = self
            .parents_of(person)
            .chain(self.children_of(person))
            .chain(self.siblings_of(person));
        for relative in relatives {
            if !family.iter().any(|c| c.id == relative.id) {
                family.push(relative);
            }
        }
        family
    }
}
