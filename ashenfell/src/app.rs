//! Application state and scene flow.

use ashenfell_core::{
    BattleEvent, ClassKind, GameSession, HeroAction, HeroId, RoundOutcome,
};

use crate::ui::theme::GameTheme;

/// Which screen the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    MainMenu,
    HeroSelect,
    HeroCreate,
    LevelSelect,
    Battle,
    Victory,
    GameOver,
}

/// What a battle log line is about, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Player,
    Enemy,
    System,
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub text: String,
    pub kind: LogKind,
}

/// Steps of the hero creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateStage {
    #[default]
    Name,
    Class,
}

/// Hero creation wizard state.
#[derive(Debug, Default)]
pub struct Creation {
    pub name: String,
    pub stage: CreateStage,
}

/// Longest hero name the creator accepts.
pub const MAX_NAME_LEN: usize = 50;

/// Main application state.
pub struct App {
    pub session: GameSession,
    pub scene: Scene,
    pub theme: GameTheme,
    pub should_quit: bool,

    /// Level currently being fought or just finished.
    pub current_level: Option<usize>,
    pub battle_log: Vec<LogLine>,
    pub creation: Creation,

    status: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            scene: Scene::MainMenu,
            theme: GameTheme::default(),
            should_quit: false,
            current_level: None,
            battle_log: Vec::new(),
            creation: Creation::default(),
            status: None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Move to a scene, dropping any stale status message.
    pub fn goto(&mut self, scene: Scene) {
        self.scene = scene;
        self.clear_status();
    }

    pub fn invalid_choice(&mut self) {
        self.set_status("Invalid choice, please try again.");
    }

    // =========================================================================
    // Hero selection and creation
    // =========================================================================

    /// Handle a 1-based pick on the hero select screen.
    pub fn pick_hero_slot(&mut self, slot: usize) {
        let roster_len = self.session.roster().len();
        if slot >= 1 && slot <= roster_len {
            let id = self
                .session
                .roster()
                .iter()
                .nth(slot - 1)
                .map(|(id, _)| id);
            if let Some(id) = id {
                self.select_hero(id);
            }
        } else if slot == roster_len + 1 && !self.session.roster().is_full() {
            self.begin_creation();
        } else {
            self.invalid_choice();
        }
    }

    fn select_hero(&mut self, id: HeroId) {
        match self.session.select_hero(id) {
            Ok(()) => self.goto(Scene::LevelSelect),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn begin_creation(&mut self) {
        self.creation = Creation::default();
        self.goto(Scene::HeroCreate);
    }

    pub fn creation_type_char(&mut self, c: char) {
        if self.creation.name.chars().count() < MAX_NAME_LEN && !c.is_control() {
            self.creation.name.push(c);
        }
    }

    pub fn creation_backspace(&mut self) {
        self.creation.name.pop();
    }

    /// Confirm the typed name and move on to class choice.
    pub fn creation_submit_name(&mut self) {
        if self.creation.name.trim().is_empty() {
            self.set_status("A hero needs a name.");
            return;
        }
        self.creation.name = self.creation.name.trim().to_string();
        self.creation.stage = CreateStage::Class;
        self.clear_status();
    }

    /// Handle a 1-based class pick and finish creation.
    pub fn creation_pick_class(&mut self, slot: usize) {
        let Some(class) = slot
            .checked_sub(1)
            .and_then(|i| ClassKind::playable().get(i).copied())
        else {
            self.invalid_choice();
            return;
        };
        let name = std::mem::take(&mut self.creation.name);
        match self.session.create_hero(class, name) {
            Ok(id) => {
                tracing::info!(%class, "hero created");
                self.select_hero(id);
            }
            Err(e) => {
                self.goto(Scene::HeroSelect);
                self.set_status(e.to_string());
            }
        }
    }

    // =========================================================================
    // Battle flow
    // =========================================================================

    /// Handle a 1-based pick on the level select screen.
    pub fn pick_level(&mut self, slot: usize) {
        if slot >= 1 && slot <= self.session.levels().len() {
            self.open_level(slot - 1);
        } else {
            self.invalid_choice();
        }
    }

    fn open_level(&mut self, index: usize) {
        let hero_alive = self
            .session
            .active_hero_character()
            .map(|h| h.is_alive())
            .unwrap_or(false);
        if !hero_alive {
            self.goto(Scene::HeroSelect);
            self.set_status("Your hero is in no state to fight. Choose another.");
            return;
        }

        if let Err(e) = self.session.enter_battle(index) {
            self.set_status(e.to_string());
            return;
        }

        self.current_level = Some(index);
        self.battle_log.clear();
        if let Some(level) = self.session.level(index) {
            self.push_log(level.prologue().to_string(), LogKind::System);
        }
        self.goto(Scene::Battle);
    }

    /// Play one round with the chosen action and narrate the result.
    pub fn battle_action(&mut self, action: HeroAction) {
        let Some(index) = self.current_level else {
            return;
        };

        let report = match self.session.play_round(index, action) {
            Ok(report) => report,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };

        for event in &report.events {
            let (text, kind) = narrate(event);
            self.push_log(text, kind);
        }

        match report.outcome {
            RoundOutcome::Ongoing => {}
            RoundOutcome::Victory => {
                if let Some(level) = self.session.level_mut(index) {
                    level.set_won(true);
                    level.reset_enemy();
                }
                tracing::info!(level = index, "battle won");
                self.goto(Scene::Victory);
            }
            RoundOutcome::Defeat => {
                if let Some(level) = self.session.level_mut(index) {
                    level.reset_enemy();
                }
                tracing::info!(level = index, "battle lost");
                self.goto(Scene::GameOver);
            }
        }
    }

    /// Leave the battle without finishing it. The enemy is restored and
    /// the completion flag is untouched.
    pub fn flee_battle(&mut self) {
        if let Some(index) = self.current_level.take() {
            if let Some(level) = self.session.level_mut(index) {
                level.reset_enemy();
            }
        }
        self.goto(Scene::LevelSelect);
        self.set_status("You slip away from the fight.");
    }

    pub fn push_log(&mut self, text: String, kind: LogKind) {
        self.battle_log.push(LogLine { text, kind });
    }
}

/// Turn a battle event into a log line.
fn narrate(event: &BattleEvent) -> (String, LogKind) {
    match event {
        BattleEvent::HeroStruck {
            target,
            damage,
            empowered: true,
        } => (
            format!("You channel your power and strike the {target} for {damage} damage!"),
            LogKind::Player,
        ),
        BattleEvent::HeroStruck {
            target,
            damage,
            empowered: false,
        } => (
            format!("You strike the {target} for {damage} damage."),
            LogKind::Player,
        ),
        BattleEvent::HeroAttackAbsorbed { target } => (
            format!("The {target}'s guard absorbs your blow."),
            LogKind::Player,
        ),
        BattleEvent::HeroRecovered { health, mana } => (
            format!("You catch your breath (+{health} health, +{mana} mana)."),
            LogKind::Player,
        ),
        BattleEvent::EnemyStruck { attacker, damage } => (
            format!("The {attacker} hits you for {damage} damage."),
            LogKind::Enemy,
        ),
        BattleEvent::EnemyAttackAbsorbed { attacker } => (
            format!("Your shield turns the {attacker}'s attack aside."),
            LogKind::Enemy,
        ),
        BattleEvent::EnemyDefeated { name } => {
            (format!("The {name} falls!"), LogKind::System)
        }
        BattleEvent::HeroDefeated { name } => {
            (format!("{name} has been defeated..."), LogKind::System)
        }
    }
}
