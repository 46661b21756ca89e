//! The owned game context: roster, scripted levels, and the active hero.
//!
//! A `GameSession` is created at startup, handed to the UI driver, and
//! torn down at shutdown. Nothing about the game lives outside it.

use std::path::Path;

use thiserror::Error;

use crate::character::Character;
use crate::class::{ClassKind, StatBlock};
use crate::combat::{resolve_round, HeroAction, RoundReport};
use crate::encounter::Encounter;
use crate::roster::{HeroId, Roster, RosterError};
use crate::save::{self, SaveError};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no hero selected")]
    NoActiveHero,

    #[error("no such hero")]
    UnknownHero,

    #[error("no such level: {0}")]
    NoSuchLevel(usize),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

pub struct GameSession {
    roster: Roster,
    levels: Vec<Encounter>,
    active_hero: Option<HeroId>,
}

impl GameSession {
    /// A fresh session: empty roster, the scripted level list, no
    /// selection.
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            levels: scripted_levels(),
            active_hero: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn levels(&self) -> &[Encounter] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&Encounter> {
        self.levels.get(index)
    }

    pub fn level_mut(&mut self, index: usize) -> Option<&mut Encounter> {
        self.levels.get_mut(index)
    }

    /// Create a hero and add it to the roster.
    pub fn create_hero(
        &mut self,
        class: ClassKind,
        name: impl Into<String>,
    ) -> Result<HeroId, SessionError> {
        Ok(self.roster.add(Character::new(class, name))?)
    }

    /// Make a roster hero the active player.
    pub fn select_hero(&mut self, id: HeroId) -> Result<(), SessionError> {
        if self.roster.get(id).is_none() {
            return Err(SessionError::UnknownHero);
        }
        self.active_hero = Some(id);
        Ok(())
    }

    pub fn active_hero(&self) -> Option<HeroId> {
        self.active_hero
    }

    pub fn active_hero_character(&self) -> Option<&Character> {
        self.active_hero.and_then(|id| self.roster.get(id))
    }

    /// Bind the active hero to a level, ready for combat.
    pub fn enter_battle(&mut self, level: usize) -> Result<(), SessionError> {
        let id = self.active_hero.ok_or(SessionError::NoActiveHero)?;
        let count = self.levels.len();
        let encounter = self
            .levels
            .get_mut(level)
            .ok_or(SessionError::NoSuchLevel(level))?;
        encounter.set_hero(id);
        tracing::debug!(level, of = count, "entering battle");
        Ok(())
    }

    /// Resolve one combat round on a level: the bound hero acts, then the
    /// enemy counter-attacks if it survived.
    pub fn play_round(
        &mut self,
        level: usize,
        action: HeroAction,
    ) -> Result<RoundReport, SessionError> {
        let encounter = self
            .levels
            .get_mut(level)
            .ok_or(SessionError::NoSuchLevel(level))?;
        let id = encounter.hero().ok_or(SessionError::NoActiveHero)?;
        let hero = self.roster.get_mut(id).ok_or(SessionError::UnknownHero)?;
        Ok(resolve_round(hero, encounter.enemy_mut(), action))
    }

    /// Write the roster and level completion flags to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        save::save_game(path, &self.roster, &self.levels)?;
        Ok(())
    }

    /// Overlay saved state onto this session.
    ///
    /// Returns `false` when there is no save file. On success the roster
    /// is replaced, the hero selection is cleared, and the completion
    /// flags are applied to the levels in order. A corrupt file leaves the
    /// session untouched.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<bool, SessionError> {
        let Some(state) = save::load_game(path, self.levels.len())? else {
            return Ok(false);
        };

        let mut roster = Roster::new();
        for hero in state.heroes {
            roster.add(hero)?;
        }
        self.roster = roster;
        self.active_hero = None;

        for (encounter, won) in self.levels.iter_mut().zip(state.completed) {
            encounter.set_won(won);
        }
        Ok(true)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed level list, in play order.
fn scripted_levels() -> Vec<Encounter> {
    vec![
        Encounter::new(
            "The Goblin Warrens",
            "Mist hangs between the crooked trees. In a moonlit clearing a \
             goblin rises from its den, blade already drawn.",
            "The goblin lies still among the roots. Dawn finds the hero \
             leaning on a twisted trunk, catching breath for the road ahead.",
            Character::with_stats(
                ClassKind::Enemy,
                "Goblin",
                StatBlock {
                    health: 25,
                    mana: 15,
                    strength: 5,
                    shield: 2,
                },
            ),
        ),
        Encounter::new(
            "The Drowned Cave",
            "Water drips from unseen stalactites and bats stir overhead. By \
             a guttering fire an orc waits, tusks catching the light.",
            "The orc's fire burns down to embers. Bloodied but standing, the \
             hero gathers their gear and walks back toward daylight.",
            Character::with_stats(
                ClassKind::Enemy,
                "Orc",
                StatBlock {
                    health: 75,
                    mana: 45,
                    strength: 15,
                    shield: 5,
                },
            ),
        ),
        Encounter::new(
            "The Frozen Summit",
            "Wind screams across the peak. The red dragon unfolds from the \
             ice, scales glittering, and roars a challenge.",
            "Ash drifts over the snow where the dragon fell. The hero stands \
             at the summit, blade still smoking, the world spread out below.",
            Character::with_stats(
                ClassKind::Enemy,
                "Dragon",
                StatBlock {
                    health: 100,
                    mana: 60,
                    strength: 30,
                    shield: 10,
                },
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::RoundOutcome;

    #[test]
    fn scripted_levels_are_fixed() {
        let session = GameSession::new();
        assert_eq!(session.levels().len(), 3);
        assert_eq!(session.level(0).unwrap().enemy().name(), "Goblin");
        assert_eq!(session.level(2).unwrap().enemy().health(), 100);
    }

    #[test]
    fn battle_requires_a_selected_hero() {
        let mut session = GameSession::new();
        assert!(matches!(
            session.enter_battle(0),
            Err(SessionError::NoActiveHero)
        ));
    }

    #[test]
    fn warrior_one_shots_the_goblin() {
        let mut session = GameSession::new();
        let id = session.create_hero(ClassKind::Warrior, "Brakka").unwrap();
        session.select_hero(id).unwrap();
        session.enter_battle(0).unwrap();

        // 40 * 2 - 2 = 78 against 25 health.
        let report = session.play_round(0, HeroAction::Attack).unwrap();
        assert_eq!(report.outcome, RoundOutcome::Victory);

        session.level_mut(0).unwrap().set_won(true);
        assert!(session.level(0).unwrap().has_won());
    }

    #[test]
    fn unknown_level_is_an_error() {
        let mut session = GameSession::new();
        let id = session.create_hero(ClassKind::Mage, "Selva").unwrap();
        session.select_hero(id).unwrap();
        assert!(matches!(
            session.enter_battle(7),
            Err(SessionError::NoSuchLevel(7))
        ));
    }
}
