//! Event handling: one keypress per scene.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use ashenfell_core::HeroAction;

use crate::app::{App, CreateStage, Scene};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    Redraw,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(_, _) => EventResult::Redraw,
        _ => EventResult::Continue,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    // Ctrl-C always quits, whatever the scene.
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match app.scene {
        Scene::MainMenu => handle_main_menu(app, key),
        Scene::HeroSelect => handle_hero_select(app, key),
        Scene::HeroCreate => handle_hero_create(app, key),
        Scene::LevelSelect => handle_level_select(app, key),
        Scene::Battle => handle_battle(app, key),
        Scene::Victory => {
            app.goto(Scene::LevelSelect);
            EventResult::Redraw
        }
        Scene::GameOver => {
            app.goto(Scene::MainMenu);
            EventResult::Redraw
        }
    }
}

fn handle_main_menu(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('1') => {
            app.goto(Scene::HeroSelect);
            EventResult::Redraw
        }
        KeyCode::Char('2') | KeyCode::Char('q') => {
            app.should_quit = true;
            EventResult::Quit
        }
        _ => {
            app.invalid_choice();
            EventResult::Redraw
        }
    }
}

fn handle_hero_select(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c.to_digit(10).unwrap_or(0) as usize;
            app.pick_hero_slot(slot);
            EventResult::Redraw
        }
        KeyCode::Esc => {
            app.goto(Scene::MainMenu);
            EventResult::Redraw
        }
        _ => {
            app.invalid_choice();
            EventResult::Redraw
        }
    }
}

fn handle_hero_create(app: &mut App, key: KeyEvent) -> EventResult {
    match app.creation.stage {
        CreateStage::Name => match key.code {
            KeyCode::Enter => {
                app.creation_submit_name();
                EventResult::Redraw
            }
            KeyCode::Backspace => {
                app.creation_backspace();
                EventResult::Redraw
            }
            KeyCode::Esc => {
                app.goto(Scene::HeroSelect);
                EventResult::Redraw
            }
            KeyCode::Char(c) => {
                app.creation_type_char(c);
                EventResult::Redraw
            }
            _ => EventResult::Continue,
        },
        CreateStage::Class => match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let slot = c.to_digit(10).unwrap_or(0) as usize;
                app.creation_pick_class(slot);
                EventResult::Redraw
            }
            KeyCode::Esc => {
                app.creation.stage = CreateStage::Name;
                EventResult::Redraw
            }
            _ => {
                app.invalid_choice();
                EventResult::Redraw
            }
        },
    }
}

fn handle_level_select(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c.to_digit(10).unwrap_or(0) as usize;
            app.pick_level(slot);
            EventResult::Redraw
        }
        KeyCode::Esc => {
            app.goto(Scene::HeroSelect);
            EventResult::Redraw
        }
        _ => {
            app.invalid_choice();
            EventResult::Redraw
        }
    }
}

fn handle_battle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('1') => {
            app.battle_action(HeroAction::Attack);
            EventResult::Redraw
        }
        KeyCode::Char('2') => {
            app.battle_action(HeroAction::Recover);
            EventResult::Redraw
        }
        KeyCode::Char('3') | KeyCode::Esc => {
            app.flee_battle();
            EventResult::Redraw
        }
        _ => {
            app.set_status("Invalid choice, try again.");
            EventResult::Redraw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashenfell_core::GameSession;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn main_menu_routes_digits() {
        let mut app = App::new(GameSession::new());
        handle_event(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.scene, Scene::HeroSelect);
    }

    #[test]
    fn unknown_keys_reprompt() {
        let mut app = App::new(GameSession::new());
        handle_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.scene, Scene::MainMenu);
        assert!(app.status().is_some());
    }

    #[test]
    fn quit_from_main_menu() {
        let mut app = App::new(GameSession::new());
        let result = handle_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(result, EventResult::Quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = App::new(GameSession::new());
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        handle_event(&mut app, release);
        assert_eq!(app.scene, Scene::MainMenu);
    }
}
