//! A bordered, numbered menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::GameTheme;

/// A titled list of choices with an optional hint footer.
pub struct MenuWidget<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    hint: Option<&'a str>,
    theme: &'a GameTheme,
}

impl<'a> MenuWidget<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>, theme: &'a GameTheme) -> Self {
        Self {
            title,
            lines,
            hint: None,
            theme,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let mut lines = self.lines;
        if let Some(hint) = self.hint {
            lines.push(Line::from(""));
            lines.push(Line::styled(hint, self.theme.hint_style()));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
