use crate::models::Dataset;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Scrollable raw data table.
pub struct DataScreen<'a> {
    pub dataset: Option<&'a Dataset>,
    pub scroll_offset: usize,
}

impl<'a> DataScreen<'a> {
    pub fn new(dataset: Option<&'a Dataset>) -> Self {
        Self {
            dataset,
            scroll_offset: 0,
        }
    }

    pub fn with_scroll(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }
}

impl Widget for DataScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(6),    // Table
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let total = self.dataset.map(|ds| ds.len()).unwrap_or(0);
        let title = Line::from(vec![
            Span::styled("Raw Data", Theme::title()),
            Span::styled(
                format!(" (row {} of {})", self.scroll_offset.min(total) + 1, total.max(1)),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_table(chunks[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Scroll ", Theme::nav_label()),
            Span::styled("[PgUp/PgDn]", Theme::nav_key()),
            Span::styled("Page ", Theme::nav_label()),
            Span::styled("[1-5]", Theme::nav_key()),
            Span::styled("Screens ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl DataScreen<'_> {
    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let dataset = match self.dataset {
            Some(ds) if !ds.is_empty() => ds,
            _ => {
                let para = Paragraph::new(Span::styled("No data available", Theme::dim()));
                para.render(inner, buf);
                return;
            }
        };

        let header = Row::new(vec![
            Cell::from("Date"),
            Cell::from("N"),
            Cell::from("P"),
            Cell::from("K"),
            Cell::from("Temp"),
            Cell::from("Humid"),
            Cell::from("Wind"),
            Cell::from("Yield"),
            Cell::from("Soil"),
            Cell::from("Crop"),
        ])
        .style(Theme::header());

        // One header row plus the visible window of data rows
        let visible = inner.height.saturating_sub(1) as usize;
        let rows: Vec<Row> = dataset
            .records
            .iter()
            .skip(self.scroll_offset)
            .take(visible)
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.date.format("%Y-%m-%d").to_string()).style(Theme::dim()),
                    Cell::from(format!("{:.1}", r.n)),
                    Cell::from(format!("{:.1}", r.p)),
                    Cell::from(format!("{:.1}", r.k)),
                    Cell::from(format!("{:.1}", r.temperature)),
                    Cell::from(format!("{:.1}", r.humidity)),
                    Cell::from(format!("{:.1}", r.wind_speed)),
                    Cell::from(format!("{:.1}", r.crop_yield)),
                    Cell::from(format!("{:.1}", r.soil_quality)),
                    Cell::from(r.crop_type.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(11),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Min(8),
        ];

        let table = Table::new(rows, widths).header(header);
        table.render(inner, buf);
    }
}
