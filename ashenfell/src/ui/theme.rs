//! Color theme and styling for the Ashenfell TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::app::LogKind;

/// Game UI color theme.
#[derive(Debug, Clone)]
pub struct GameTheme {
    pub border: Color,
    pub title: Color,

    // Gauge colors
    pub hp_healthy: Color,
    pub hp_wounded: Color,
    pub hp_critical: Color,
    pub mana: Color,

    // Text colors
    pub player_text: Color,
    pub enemy_text: Color,
    pub system_text: Color,
    pub danger: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::Yellow,

            hp_healthy: Color::Green,
            hp_wounded: Color::Yellow,
            hp_critical: Color::Red,
            mana: Color::Cyan,

            player_text: Color::Cyan,
            enemy_text: Color::LightRed,
            system_text: Color::Gray,
            danger: Color::Red,
        }
    }
}

impl GameTheme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Gauge color for a health ratio.
    pub fn hp_color(&self, ratio: f64) -> Color {
        if ratio > 0.5 {
            self.hp_healthy
        } else if ratio > 0.25 {
            self.hp_wounded
        } else {
            self.hp_critical
        }
    }

    pub fn mana_style(&self) -> Style {
        Style::default().fg(self.mana)
    }

    /// Style for a battle log line.
    pub fn log_style(&self, kind: LogKind) -> Style {
        match kind {
            LogKind::Player => Style::default().fg(self.player_text),
            LogKind::Enemy => Style::default().fg(self.enemy_text),
            LogKind::System => Style::default()
                .fg(self.system_text)
                .add_modifier(Modifier::ITALIC),
        }
    }

    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(self.hp_wounded)
            .add_modifier(Modifier::BOLD)
    }

    pub fn danger_style(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }
}
