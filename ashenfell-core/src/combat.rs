//! One-round battle resolution.
//!
//! A round is strictly ordered: the hero acts first, and the enemy
//! counter-attacks only if it survived. There is no simultaneous
//! resolution and no second action on either side.

use crate::character::Character;

/// The action a player picks for the hero's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    Attack,
    Recover,
}

/// How a resolved round left the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Ongoing,
    Victory,
    Defeat,
}

/// One observable thing that happened during a round, in order.
///
/// Events are derived from stat deltas, so a strike that the shield fully
/// absorbed reports as absorbed even if the attacker spent mana on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    HeroStruck {
        target: String,
        damage: i32,
        empowered: bool,
    },
    HeroAttackAbsorbed {
        target: String,
    },
    HeroRecovered {
        health: i32,
        mana: i32,
    },
    EnemyStruck {
        attacker: String,
        damage: i32,
    },
    EnemyAttackAbsorbed {
        attacker: String,
    },
    EnemyDefeated {
        name: String,
    },
    HeroDefeated {
        name: String,
    },
}

/// The record of a fully resolved round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub events: Vec<BattleEvent>,
    pub outcome: RoundOutcome,
}

/// Resolve one full round: hero action, then the enemy's counter-attack if
/// the enemy is still standing.
///
/// If the hero's action defeats the enemy the enemy never acts and the
/// round ends in `Victory`; if the counter-attack drops the hero to zero
/// the round ends in `Defeat`.
pub fn resolve_round(
    hero: &mut Character,
    enemy: &mut Character,
    action: HeroAction,
) -> RoundReport {
    let mut events = Vec::new();

    if !hero.is_alive() {
        return RoundReport {
            events,
            outcome: RoundOutcome::Defeat,
        };
    }

    match action {
        HeroAction::Attack => {
            let enemy_health = enemy.health();
            let hero_mana = hero.mana();
            hero.attack(enemy);

            let damage = enemy_health - enemy.health();
            if damage > 0 {
                events.push(BattleEvent::HeroStruck {
                    target: enemy.name().to_string(),
                    damage,
                    empowered: hero.mana() < hero_mana,
                });
            } else {
                events.push(BattleEvent::HeroAttackAbsorbed {
                    target: enemy.name().to_string(),
                });
            }
        }
        HeroAction::Recover => {
            let health = hero.health();
            let mana = hero.mana();
            hero.recover();
            events.push(BattleEvent::HeroRecovered {
                health: hero.health() - health,
                mana: hero.mana() - mana,
            });
        }
    }

    if !enemy.is_alive() {
        events.push(BattleEvent::EnemyDefeated {
            name: enemy.name().to_string(),
        });
        return RoundReport {
            events,
            outcome: RoundOutcome::Victory,
        };
    }

    let hero_health = hero.health();
    enemy.attack(hero);
    let damage = hero_health - hero.health();
    if damage > 0 {
        events.push(BattleEvent::EnemyStruck {
            attacker: enemy.name().to_string(),
            damage,
        });
    } else {
        events.push(BattleEvent::EnemyAttackAbsorbed {
            attacker: enemy.name().to_string(),
        });
    }

    if !hero.is_alive() {
        events.push(BattleEvent::HeroDefeated {
            name: hero.name().to_string(),
        });
        return RoundReport {
            events,
            outcome: RoundOutcome::Defeat,
        };
    }

    RoundReport {
        events,
        outcome: RoundOutcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassKind, StatBlock};

    fn goblin() -> Character {
        Character::with_stats(
            ClassKind::Enemy,
            "Goblin",
            StatBlock {
                health: 25,
                mana: 15,
                strength: 5,
                shield: 2,
            },
        )
    }

    #[test]
    fn lethal_strike_skips_the_counter_attack() {
        let mut hero = Character::new(ClassKind::Warrior, "Brakka");
        let mut enemy = goblin();

        let report = resolve_round(&mut hero, &mut enemy, HeroAction::Attack);

        assert_eq!(report.outcome, RoundOutcome::Victory);
        assert_eq!(hero.health(), 80, "a dead enemy must not act");
        assert!(matches!(
            report.events[0],
            BattleEvent::HeroStruck {
                damage: 78,
                empowered: true,
                ..
            }
        ));
        assert!(matches!(
            report.events[1],
            BattleEvent::EnemyDefeated { .. }
        ));
    }

    #[test]
    fn surviving_enemy_counter_attacks() {
        let mut hero = Character::new(ClassKind::Mage, "Selva");
        let mut enemy = Character::with_stats(
            ClassKind::Enemy,
            "Orc",
            StatBlock {
                health: 75,
                mana: 45,
                strength: 15,
                shield: 5,
            },
        );

        // Empowered mage strike: 40 - 5 = 35, orc survives at 40 and hits
        // back for 15 - 10 = 5.
        let report = resolve_round(&mut hero, &mut enemy, HeroAction::Attack);

        assert_eq!(report.outcome, RoundOutcome::Ongoing);
        assert_eq!(enemy.health(), 40);
        assert_eq!(hero.health(), 60);
        assert!(matches!(
            report.events[1],
            BattleEvent::EnemyStruck { damage: 5, .. }
        ));
    }

    #[test]
    fn recovery_still_lets_the_enemy_act() {
        let mut hero = Character::with_stats(
            ClassKind::Warrior,
            "Brakka",
            StatBlock {
                health: 40,
                mana: 0,
                strength: 40,
                shield: 20,
            },
        );
        let mut enemy = Character::with_stats(
            ClassKind::Enemy,
            "Ogre",
            StatBlock {
                health: 50,
                mana: 0,
                strength: 35,
                shield: 0,
            },
        );

        let report = resolve_round(&mut hero, &mut enemy, HeroAction::Recover);

        assert_eq!(report.outcome, RoundOutcome::Ongoing);
        assert!(matches!(
            report.events[0],
            BattleEvent::HeroRecovered {
                health: 20,
                mana: 10
            }
        ));
        // Recovered to 60, then hit for 35 - 20 = 15.
        assert_eq!(hero.health(), 45);
    }

    #[test]
    fn counter_attack_can_end_the_battle() {
        let mut hero = Character::with_stats(
            ClassKind::Archer,
            "Wren",
            StatBlock {
                health: 5,
                mana: 0,
                strength: 30,
                shield: 15,
            },
        );
        let mut enemy = Character::with_stats(
            ClassKind::Enemy,
            "Dragon",
            StatBlock {
                health: 100,
                mana: 60,
                strength: 30,
                shield: 10,
            },
        );

        let report = resolve_round(&mut hero, &mut enemy, HeroAction::Attack);

        assert_eq!(report.outcome, RoundOutcome::Defeat);
        assert!(!hero.is_alive());
        assert!(matches!(
            report.events.last(),
            Some(BattleEvent::HeroDefeated { .. })
        ));
    }

    #[test]
    fn fully_absorbed_attacks_are_reported() {
        let mut hero = Character::with_stats(
            ClassKind::Warrior,
            "Brakka",
            StatBlock {
                health: 80,
                mana: 0,
                strength: 10,
                shield: 20,
            },
        );
        let mut enemy = Character::with_stats(
            ClassKind::Enemy,
            "Sentinel",
            StatBlock {
                health: 30,
                mana: 0,
                strength: 15,
                shield: 12,
            },
        );

        let report = resolve_round(&mut hero, &mut enemy, HeroAction::Attack);

        // 10 <= 12 absorbed on the way in; 15 <= 20 absorbed on the way back.
        assert!(matches!(
            report.events[0],
            BattleEvent::HeroAttackAbsorbed { .. }
        ));
        assert!(matches!(
            report.events[1],
            BattleEvent::EnemyAttackAbsorbed { .. }
        ));
        assert_eq!(report.outcome, RoundOutcome::Ongoing);
    }
}
