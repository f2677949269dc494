use crate::models::Dataset;
use crate::ui::components::MetricBox;
use crate::ui::screens::render_nav;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct OverviewScreen<'a> {
    pub dataset: Option<&'a Dataset>,
    pub dataset_error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

impl<'a> OverviewScreen<'a> {
    pub fn new(dataset: Option<&'a Dataset>, dataset_error: Option<&'a str>) -> Self {
        Self {
            dataset,
            dataset_error,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for OverviewScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Metrics row
                Constraint::Min(8),    // Description and fertilizer info
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_metrics(chunks[1], buf);
        self.render_info(chunks[2], buf);
        self.render_status_message(chunks[3], buf);
        render_nav(chunks[4], buf);
    }
}

impl OverviewScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("CropCast - Fertilizer Recommendation System", Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = match self.dataset {
            Some(ds) => format!("Dataset: {}", ds.source_path),
            None => "No dataset loaded".to_string(),
        };
        let para = Paragraph::new(Span::styled(info, Theme::dim())).block(block);
        para.render(area, buf);
    }

    fn render_metrics(&self, area: Rect, buf: &mut Buffer) {
        let metric_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let timespan = self.dataset.and_then(|ds| {
            ds.date_range().map(|(min, max)| {
                format!("{} - {}", min.format("%b %Y"), max.format("%b %Y"))
            })
        });
        MetricBox::new("Data Timespan", timespan).render(metric_chunks[0], buf);

        let mean_n = self
            .dataset
            .and_then(|ds| ds.mean_nitrogen())
            .map(|n| format!("{:.2}", n));
        MetricBox::new("Average Nitrogen (N)", mean_n).render(metric_chunks[1], buf);

        let count = self.dataset.map(|ds| ds.len().to_string());
        MetricBox::new("Data Points", count).render(metric_chunks[2], buf);
    }

    fn render_info(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("About", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Analyzes historical crop and soil data to predict optimal fertilizer \
                 requirements for the next 6 months using time series forecasting.",
                Theme::normal(),
            )),
            Line::from(vec![]),
            Line::from(Span::styled("Fertilizer Information", Theme::header())),
            Line::from(vec![
                Span::styled("N (Nitrogen): ", Theme::highlight()),
                Span::styled(
                    "Essential for leaf growth and chlorophyll production.",
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled("P (Phosphorus): ", Theme::highlight()),
                Span::styled(
                    "Supports root development and flowering.",
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled("K (Potassium): ", Theme::highlight()),
                Span::styled(
                    "Improves overall plant health and disease resistance.",
                    Theme::normal(),
                ),
            ]),
        ];

        if let Some(err) = self.dataset_error {
            lines.push(Line::from(vec![]));
            lines.push(Line::from(Span::styled(
                format!("Error loading data: {}", err),
                Theme::error(),
            )));
            lines.push(Line::from(Span::styled(
                "Please check the file path or provide a valid CSV file.",
                Theme::dim(),
            )));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        para.render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("OFFLINE") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            let para = Paragraph::new(Span::styled(msg, style));
            para.render(area, buf);
        }
    }
}
