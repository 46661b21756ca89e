//! Character classes and their stat tables.
//!
//! Every number that distinguishes one class from another lives here:
//! starting stats, the mana cost of the empowered attack, and the per-turn
//! recovery increments.

use strum::{Display, EnumString};

/// A flat set of combat statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    pub health: i32,
    pub mana: i32,
    pub strength: i32,
    pub shield: i32,
}

/// The class tag carried by every character.
///
/// Set at construction and never changed; used to dispatch attack/recover
/// behavior and to label heroes in save files. The textual form of a
/// playable tag is exactly what the save format stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ClassKind {
    Warrior,
    Archer,
    Mage,
    Enemy,
}

impl ClassKind {
    /// The classes a player can pick at the creation screen.
    pub fn playable() -> [ClassKind; 3] {
        [ClassKind::Warrior, ClassKind::Archer, ClassKind::Mage]
    }

    /// Enemies exist only inside encounters; everything else can join the
    /// roster.
    pub fn is_playable(&self) -> bool {
        !matches!(self, ClassKind::Enemy)
    }

    /// Starting stats for a fresh character of this class.
    ///
    /// For `Enemy` this is the generic template; scripted encounters build
    /// their enemies with explicit stats instead.
    pub fn base_stats(&self) -> StatBlock {
        match self {
            ClassKind::Warrior => StatBlock {
                health: 80,
                mana: 30,
                strength: 40,
                shield: 20,
            },
            ClassKind::Archer => StatBlock {
                health: 60,
                mana: 50,
                strength: 30,
                shield: 15,
            },
            ClassKind::Mage => StatBlock {
                health: 65,
                mana: 100,
                strength: 20,
                shield: 10,
            },
            ClassKind::Enemy => StatBlock {
                health: 30,
                mana: 0,
                strength: 15,
                shield: 5,
            },
        }
    }

    /// Mana cost of the empowered (double-strength) attack.
    ///
    /// `None` for enemies, which always strike at flat strength.
    pub fn heavy_attack_cost(&self) -> Option<i32> {
        match self {
            ClassKind::Warrior => Some(10),
            ClassKind::Archer => Some(20),
            ClassKind::Mage => Some(30),
            ClassKind::Enemy => None,
        }
    }

    /// Health restored by one `recover` call.
    pub fn health_regen(&self) -> i32 {
        match self {
            ClassKind::Warrior => 20,
            ClassKind::Archer => 15,
            ClassKind::Mage => 10,
            ClassKind::Enemy => 20,
        }
    }

    /// Mana restored by one `recover` call.
    pub fn mana_regen(&self) -> i32 {
        match self {
            ClassKind::Warrior => 10,
            ClassKind::Archer => 10,
            ClassKind::Mage => 20,
            ClassKind::Enemy => 0,
        }
    }
}
