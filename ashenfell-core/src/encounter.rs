//! Scripted encounters: one hero against one enemy, replayable.

use crate::character::Character;
use crate::roster::HeroId;

/// A scripted battle with narrative framing.
///
/// The encounter owns its enemy and a pristine stats snapshot taken at
/// construction. The snapshot is never mutated afterward, so the enemy can
/// always be restored to its exact starting state for replay. The hero is
/// referenced by roster id, never owned.
#[derive(Debug, Clone)]
pub struct Encounter {
    name: String,
    prologue: String,
    epilogue: String,
    enemy: Character,
    initial_enemy: Character,
    hero: Option<HeroId>,
    won: bool,
}

impl Encounter {
    /// Build an encounter, taking ownership of the enemy and snapshotting
    /// its starting stats.
    pub fn new(
        name: impl Into<String>,
        prologue: impl Into<String>,
        epilogue: impl Into<String>,
        enemy: Character,
    ) -> Self {
        let initial_enemy = enemy.clone();
        Self {
            name: name.into(),
            prologue: prologue.into(),
            epilogue: epilogue.into(),
            enemy,
            initial_enemy,
            hero: None,
            won: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prologue(&self) -> &str {
        &self.prologue
    }

    pub fn epilogue(&self) -> &str {
        &self.epilogue
    }

    pub fn enemy(&self) -> &Character {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut Character {
        &mut self.enemy
    }

    /// Replace the owned enemy. The pristine snapshot is unaffected;
    /// `reset_enemy` still restores the original.
    pub fn set_enemy(&mut self, enemy: Character) {
        self.enemy = enemy;
    }

    /// Assign the active hero. The roster keeps ownership.
    pub fn set_hero(&mut self, hero: HeroId) {
        self.hero = Some(hero);
    }

    pub fn hero(&self) -> Option<HeroId> {
        self.hero
    }

    pub fn set_won(&mut self, won: bool) {
        self.won = won;
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Discard the current enemy and rebuild it from the snapshot.
    ///
    /// Available at any time, no matter how damaged the enemy is or
    /// whether the level was won; the `won` flag is untouched.
    pub fn reset_enemy(&mut self) {
        self.enemy = self.initial_enemy.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassKind, StatBlock};

    fn orc_lair() -> Encounter {
        Encounter::new(
            "The Drowned Cave",
            "Water drips somewhere in the dark.",
            "The cave falls silent.",
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
        )
    }

    #[test]
    fn reset_restores_exact_starting_stats() {
        let mut level = orc_lair();
        level.enemy_mut().take_damage(1000);
        level.enemy_mut().consume_mana(45);
        assert_eq!(level.enemy().health(), 0);

        level.reset_enemy();

        assert_eq!(level.enemy().name(), "Orc");
        assert_eq!(level.enemy().health(), 75);
        assert_eq!(level.enemy().mana(), 45);
        assert_eq!(level.enemy().strength(), 15);
        assert_eq!(level.enemy().shield(), 5);
    }

    #[test]
    fn reset_leaves_won_untouched() {
        let mut level = orc_lair();
        level.set_won(true);
        level.enemy_mut().take_damage(1000);

        level.reset_enemy();

        assert!(level.has_won());
        assert_eq!(level.enemy().health(), 75);
    }

    #[test]
    fn replacing_the_enemy_keeps_the_snapshot() {
        let mut level = orc_lair();
        level.set_enemy(Character::new(ClassKind::Enemy, "Impostor"));

        level.reset_enemy();

        assert_eq!(level.enemy().name(), "Orc");
        assert_eq!(level.enemy().health(), 75);
    }

    #[test]
    fn hero_assignment_is_by_id() {
        let mut level = orc_lair();
        assert!(level.hero().is_none());

        let mut roster = crate::roster::Roster::new();
        let id = roster
            .add(Character::new(ClassKind::Warrior, "Brakka"))
            .unwrap();
        level.set_hero(id);
        assert_eq!(level.hero(), Some(id));
    }
}
