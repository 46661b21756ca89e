//! Turn-based battle engine for the Ashenfell terminal RPG.
//!
//! This crate provides:
//! - Character classes with fixed stat tables and recovery policies
//! - Damage, mana, and recovery primitives with hard clamping invariants
//! - One-round combat resolution with an event log
//! - Replayable scripted encounters with pristine enemy snapshots
//! - A hero roster and binary save/load
//!
//! # Quick Start
//!
//! ```
//! use ashenfell_core::{ClassKind, GameSession, HeroAction, RoundOutcome};
//!
//! let mut session = GameSession::new();
//! let id = session.create_hero(ClassKind::Warrior, "Brakka")?;
//! session.select_hero(id)?;
//! session.enter_battle(0)?;
//!
//! // A fresh Warrior one-shots the first enemy with an empowered strike.
//! let report = session.play_round(0, HeroAction::Attack)?;
//! assert_eq!(report.outcome, RoundOutcome::Victory);
//! # Ok::<(), ashenfell_core::SessionError>(())
//! ```

pub mod character;
pub mod class;
pub mod combat;
pub mod encounter;
pub mod roster;
pub mod save;
pub mod session;

// Primary public API
pub use character::Character;
pub use class::{ClassKind, StatBlock};
pub use combat::{resolve_round, BattleEvent, HeroAction, RoundOutcome, RoundReport};
pub use encounter::Encounter;
pub use roster::{HeroId, Roster, RosterError, MAX_HEROES};
pub use save::{SaveError, SavedState};
pub use session::{GameSession, SessionError};
