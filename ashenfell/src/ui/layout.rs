//! Layout calculations for the Ashenfell TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout for the menu scenes: header art, body, status line.
pub struct MenuLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl MenuLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Title banner
                Constraint::Min(6),    // Menu body
                Constraint::Length(1), // Status line
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status: chunks[2],
        }
    }
}

/// Layout for the battle scene.
pub struct BattleLayout {
    pub title: Rect,
    pub log: Rect,
    pub hero_panel: Rect,
    pub enemy_panel: Rect,
    pub prompt: Rect,
    pub status: Rect,
}

impl BattleLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Level name
                Constraint::Min(8),    // Log + panels
                Constraint::Length(3), // Action prompt
                Constraint::Length(1), // Status line
            ])
            .split(area);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content[1]);

        Self {
            title: chunks[0],
            log: content[0],
            hero_panel: panels[0],
            enemy_panel: panels[1],
            prompt: chunks[2],
            status: chunks[3],
        }
    }
}

/// A fixed-size rect centered in `area`, clamped to it.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
