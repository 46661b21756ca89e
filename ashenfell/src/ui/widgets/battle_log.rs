//! Scrolling battle log.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::LogLine;
use crate::ui::theme::GameTheme;

/// Shows the tail of the battle log that fits in the area.
pub struct BattleLogWidget<'a> {
    lines: &'a [LogLine],
    theme: &'a GameTheme,
}

impl<'a> BattleLogWidget<'a> {
    pub fn new(lines: &'a [LogLine], theme: &'a GameTheme) -> Self {
        Self { lines, theme }
    }
}

impl Widget for BattleLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Battle ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        // Keep the newest lines visible; wrapping can only push older ones
        // further out of view, so trimming by line count is enough.
        let visible = inner.height as usize;
        let start = self.lines.len().saturating_sub(visible);

        let lines: Vec<Line> = self.lines[start..]
            .iter()
            .map(|entry| Line::styled(entry.text.clone(), self.theme.log_style(entry.kind)))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
