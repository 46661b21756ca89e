//! Combatant stat panel with health and mana gauges.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use ashenfell_core::Character;

use crate::ui::theme::GameTheme;

/// Compact panel for one combatant.
pub struct StatPanelWidget<'a> {
    character: &'a Character,
    theme: &'a GameTheme,
}

impl<'a> StatPanelWidget<'a> {
    pub fn new(character: &'a Character, theme: &'a GameTheme) -> Self {
        Self { character, theme }
    }
}

impl Widget for StatPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " {} ({}) ",
                self.character.name(),
                self.character.class()
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // HP gauge
                Constraint::Length(1), // MP gauge (blank for manaless enemies)
                Constraint::Length(1), // Strength / shield
                Constraint::Min(0),
            ])
            .split(inner);

        let hp_ratio = self.character.health_ratio();
        Gauge::default()
            .gauge_style(Style::default().fg(self.theme.hp_color(hp_ratio)))
            .ratio(hp_ratio)
            .label(format!(
                "HP {}/{}",
                self.character.health(),
                self.character.max_health()
            ))
            .render(chunks[0], buf);

        if self.character.max_mana() > 0 {
            Gauge::default()
                .gauge_style(self.theme.mana_style())
                .ratio(self.character.mana_ratio())
                .label(format!(
                    "MP {}/{}",
                    self.character.mana(),
                    self.character.max_mana()
                ))
                .render(chunks[1], buf);
        }

        let stats = Line::from(vec![
            Span::raw("STR "),
            Span::styled(
                self.character.strength().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  SHD "),
            Span::styled(
                self.character.shield().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(stats).render(chunks[2], buf);
    }
}
