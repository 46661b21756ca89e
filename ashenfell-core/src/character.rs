//! Combatants: stats, damage primitives, and per-class battle policy.

use std::fmt;

use crate::class::{ClassKind, StatBlock};

/// A hero or enemy in a battle.
///
/// All mutation goes through [`take_damage`](Character::take_damage),
/// [`consume_mana`](Character::consume_mana),
/// [`attack`](Character::attack), and [`recover`](Character::recover).
/// Health and mana never leave `[0, max]`.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    class: ClassKind,
    health: i32,
    mana: i32,
    strength: i32,
    shield: i32,
    max_health: i32,
    max_mana: i32,
}

impl Character {
    /// A fresh character with the class starting stats.
    pub fn new(class: ClassKind, name: impl Into<String>) -> Self {
        Self::with_stats(class, name, class.base_stats())
    }

    /// A character with explicit stats, used for save reconstruction and
    /// for the scripted enemies.
    ///
    /// Playable classes keep the class table as their recovery ceiling, so
    /// a damaged hero rebuilt from a save still recovers toward full. An
    /// enemy's ceiling is whatever it was constructed with: it recovers
    /// toward its own starting stats, nothing else.
    pub fn with_stats(class: ClassKind, name: impl Into<String>, stats: StatBlock) -> Self {
        let caps = if class.is_playable() {
            class.base_stats()
        } else {
            stats
        };
        Self {
            name: name.into(),
            class,
            health: stats.health.max(0).min(caps.health),
            mana: stats.mana.max(0).min(caps.mana),
            strength: stats.strength,
            shield: stats.shield,
            max_health: caps.health,
            max_mana: caps.mana,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> ClassKind {
        self.class
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn shield(&self) -> i32 {
        self.shield
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    /// Current stats as a flat block, in save-file field order.
    pub fn stats(&self) -> StatBlock {
        StatBlock {
            health: self.health,
            mana: self.mana,
            strength: self.strength,
            shield: self.shield,
        }
    }

    /// Health as a fraction of the ceiling, for gauge display.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health > 0 {
            self.health as f64 / self.max_health as f64
        } else {
            0.0
        }
    }

    /// Mana as a fraction of the ceiling, for gauge display.
    pub fn mana_ratio(&self) -> f64 {
        if self.max_mana > 0 {
            self.mana as f64 / self.max_mana as f64
        } else {
            0.0
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply incoming damage through the shield.
    ///
    /// The shield fully absorbs any hit at or below its value and is not
    /// worn down by doing so; anything above it comes off health, floored
    /// at zero.
    pub fn take_damage(&mut self, amount: i32) {
        if amount > self.shield {
            self.health = (self.health - (amount - self.shield)).max(0);
        }
    }

    /// Spend mana, floored at zero.
    ///
    /// Attack dispatch only spends when the balance covers the cost; the
    /// floor is a safety clamp, not an overdraft policy.
    pub fn consume_mana(&mut self, amount: i32) {
        self.mana = (self.mana - amount).max(0);
    }

    /// Strike a target.
    ///
    /// A defeated attacker or a defeated target makes this a silent no-op.
    /// Playable classes deal double strength and pay the class mana cost
    /// when the balance covers it (the comparison is inclusive: mana equal
    /// to the cost still empowers the strike); otherwise they deal flat
    /// strength with mana untouched. Enemies always deal flat strength.
    pub fn attack(&mut self, target: &mut Character) {
        if !self.is_alive() || !target.is_alive() {
            return;
        }
        match self.class.heavy_attack_cost() {
            Some(cost) if self.mana >= cost => {
                target.take_damage(self.strength * 2);
                self.consume_mana(cost);
            }
            _ => target.take_damage(self.strength),
        }
    }

    /// Regain health and mana by the class increments, clamped to the
    /// ceilings. Does nothing for the defeated.
    pub fn recover(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.health = (self.health + self.class.health_regen()).min(self.max_health);
        self.mana = (self.mana + self.class.mana_regen()).min(self.max_mana);
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} the {}  |  HP {}/{}  MP {}/{}  STR {}  SHD {}",
            self.name,
            self.class,
            self.health,
            self.max_health,
            self.mana,
            self.max_mana,
            self.strength,
            self.shield
        )
    }
}
