use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered label/value box for headline dataset metrics.
pub struct MetricBox<'a> {
    title: &'a str,
    value: Option<String>,
}

impl<'a> MetricBox<'a> {
    pub fn new(title: &'a str, value: Option<String>) -> Self {
        Self { title, value }
    }
}

impl Widget for MetricBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 8 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.value {
            Some(value) => Line::from(vec![Span::styled(value, Theme::highlight())]),
            None => Line::from(vec![Span::styled("N/A", Theme::dim())]),
        };
        Paragraph::new(line).render(inner, buf);
    }
}
