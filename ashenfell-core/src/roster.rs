//! The hero roster: owned storage for every created hero.
//!
//! Heroes live here for their whole lifetime and are shared across
//! encounters by [`HeroId`]. The roster survives battles, so heroes carry
//! their wounds from one encounter to the next until they recover.

use thiserror::Error;

use crate::character::Character;

/// Maximum number of heroes a roster holds.
pub const MAX_HEROES: usize = 5;

/// A stable, copyable reference to a roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeroId(usize);

impl HeroId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Errors from roster operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("the roster is full ({MAX_HEROES} heroes)")]
    Full,

    #[error("only playable classes can join the roster")]
    NotPlayable,
}

#[derive(Debug, Default)]
pub struct Roster {
    heroes: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hero, returning its id.
    pub fn add(&mut self, hero: Character) -> Result<HeroId, RosterError> {
        if !hero.class().is_playable() {
            return Err(RosterError::NotPlayable);
        }
        if self.heroes.len() >= MAX_HEROES {
            return Err(RosterError::Full);
        }
        self.heroes.push(hero);
        Ok(HeroId(self.heroes.len() - 1))
    }

    pub fn get(&self, id: HeroId) -> Option<&Character> {
        self.heroes.get(id.0)
    }

    pub fn get_mut(&mut self, id: HeroId) -> Option<&mut Character> {
        self.heroes.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeroId, &Character)> {
        self.heroes
            .iter()
            .enumerate()
            .map(|(i, hero)| (HeroId(i), hero))
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heroes.len() >= MAX_HEROES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassKind;

    #[test]
    fn ids_are_stable() {
        let mut roster = Roster::new();
        let a = roster
            .add(Character::new(ClassKind::Warrior, "Brakka"))
            .unwrap();
        let b = roster
            .add(Character::new(ClassKind::Mage, "Selva"))
            .unwrap();

        assert_eq!(roster.get(a).unwrap().name(), "Brakka");
        assert_eq!(roster.get(b).unwrap().name(), "Selva");
    }

    #[test]
    fn capacity_is_enforced() {
        let mut roster = Roster::new();
        for i in 0..MAX_HEROES {
            roster
                .add(Character::new(ClassKind::Archer, format!("Hero {i}")))
                .unwrap();
        }
        assert!(roster.is_full());
        assert_eq!(
            roster.add(Character::new(ClassKind::Archer, "One Too Many")),
            Err(RosterError::Full)
        );
    }

    #[test]
    fn enemies_cannot_join() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.add(Character::new(ClassKind::Enemy, "Infiltrator")),
            Err(RosterError::NotPlayable)
        );
    }
}
