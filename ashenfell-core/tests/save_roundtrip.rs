//! Save/load tests against the public session API.

use ashenfell_core::{ClassKind, GameSession, HeroAction, SessionError};
use tempfile::TempDir;

#[test]
fn session_round_trip_restores_roster_and_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.bin");

    let mut session = GameSession::new();
    let warrior = session.create_hero(ClassKind::Warrior, "X").unwrap();
    session.create_hero(ClassKind::Archer, "Wren").unwrap();
    session.select_hero(warrior).unwrap();

    // Wound the warrior and win the first level.
    session.enter_battle(2).unwrap();
    session.play_round(2, HeroAction::Attack).unwrap();
    session.level_mut(0).unwrap().set_won(true);

    let wounded_health = session.active_hero_character().unwrap().health();
    assert!(wounded_health < 80);

    session.save_to(&path).unwrap();

    let mut restored = GameSession::new();
    assert!(restored.load_from(&path).unwrap());

    assert_eq!(restored.roster().len(), 2);
    let heroes: Vec<_> = restored.roster().iter().map(|(_, h)| h).collect();
    assert_eq!(heroes[0].name(), "X");
    assert_eq!(heroes[0].class(), ClassKind::Warrior);
    assert_eq!(heroes[0].health(), wounded_health);
    assert_eq!(heroes[1].name(), "Wren");
    assert_eq!(heroes[1].class(), ClassKind::Archer);

    assert!(restored.level(0).unwrap().has_won());
    assert!(!restored.level(1).unwrap().has_won());
    assert!(!restored.level(2).unwrap().has_won());

    // Loading clears the selection; the player picks again.
    assert!(restored.active_hero().is_none());
}

#[test]
fn loading_without_a_file_is_a_clean_no_op() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::new();
    session.create_hero(ClassKind::Mage, "Selva").unwrap();

    let loaded = session.load_from(dir.path().join("missing.bin")).unwrap();

    assert!(!loaded);
    assert_eq!(session.roster().len(), 1);
}

#[test]
fn corrupt_save_leaves_the_session_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.bin");

    // A file that is definitely not a save.
    std::fs::write(&path, b"not a save file").unwrap();

    let mut session = GameSession::new();
    session.create_hero(ClassKind::Warrior, "Brakka").unwrap();
    session.level_mut(1).unwrap().set_won(true);

    let err = session.load_from(&path).unwrap_err();
    assert!(matches!(err, SessionError::Save(_)));

    // Roster and flags survive the failed load.
    assert_eq!(session.roster().len(), 1);
    assert!(session.level(1).unwrap().has_won());
}

#[test]
fn reloaded_wounded_hero_recovers_toward_class_maximum() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.bin");

    let mut session = GameSession::new();
    let id = session.create_hero(ClassKind::Warrior, "Brakka").unwrap();
    session.select_hero(id).unwrap();
    session.enter_battle(2).unwrap();
    session.play_round(2, HeroAction::Attack).unwrap();
    session.save_to(&path).unwrap();

    let mut restored = GameSession::new();
    restored.load_from(&path).unwrap();

    let (id, hero) = restored.roster().iter().next().unwrap();
    assert!(hero.health() < 80);
    assert_eq!(hero.max_health(), 80, "the class ceiling, not the saved health");

    restored.select_hero(id).unwrap();
    restored.enter_battle(0).unwrap();
    for _ in 0..10 {
        restored.play_round(0, HeroAction::Recover).unwrap();
    }
    let hero = restored.active_hero_character().unwrap();
    assert_eq!(hero.health(), 80);
    assert_eq!(hero.mana(), 30);
}
