use crate::logic::MonthlyStat;
use crate::models::{NutrientForecast, Recommendation};
use crate::ui::components::series_bounds;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset as ChartDataset, GraphType, List, ListItem,
        Paragraph, Row, Table, Widget, Wrap,
    },
};

/// Forecast chart with confidence bounds, prediction tables, and the
/// per-month fertilizer recommendations.
pub struct ForecastScreen<'a> {
    pub monthly: &'a [MonthlyStat],
    pub forecast: Option<&'a NutrientForecast>,
    pub forecast_error: Option<&'a str>,
    pub recommendations: &'a [Recommendation],
    pub selected_index: usize,
}

impl<'a> ForecastScreen<'a> {
    pub fn new(
        monthly: &'a [MonthlyStat],
        forecast: Option<&'a NutrientForecast>,
        recommendations: &'a [Recommendation],
    ) -> Self {
        Self {
            monthly,
            forecast,
            forecast_error: None,
            recommendations,
            selected_index: 0,
        }
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.forecast_error = error;
        self
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for ForecastScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),      // Title
                Constraint::Percentage(45), // Chart and tables
                Constraint::Min(9),         // Recommendations
                Constraint::Length(1),      // Nav
            ])
            .split(area);

        let fetched = self
            .forecast
            .map(|f| f.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Never".to_string());
        let title = Line::from(vec![
            Span::styled("Forecasted Fertilizer Requirements", Theme::title()),
            Span::styled(" - Fetched: ", Theme::dim()),
            Span::styled(fetched, Theme::normal()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        match self.forecast {
            Some(forecast) => {
                let top = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                    .split(chunks[1]);

                self.render_chart(forecast, top[0], buf);
                self.render_tables(forecast, top[1], buf);
                self.render_recommendations(chunks[2], buf);
            }
            None => {
                self.render_unavailable(chunks[1].union(chunks[2]), buf);
            }
        }

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Select Month ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh Forecast ", Theme::nav_label()),
            Span::styled("[1-5]", Theme::nav_key()),
            Span::styled("Screens ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl ForecastScreen<'_> {
    fn render_chart(&self, forecast: &NutrientForecast, area: Rect, buf: &mut Buffer) {
        // Historical months occupy x = 0..h; forecast months continue after
        let historical: Vec<(f64, f64)> = self
            .monthly
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, m.n))
            .collect();

        let offset = historical.len() as f64;
        let predicted: Vec<(f64, f64)> = forecast
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (offset + i as f64, p.predicted_value))
            .collect();
        let lower: Vec<(f64, f64)> = forecast
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (offset + i as f64, p.lower_ci))
            .collect();
        let upper: Vec<(f64, f64)> = forecast
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (offset + i as f64, p.upper_ci))
            .collect();

        let (x_bounds, y_bounds) = series_bounds(&[&historical, &predicted, &lower, &upper]);

        let datasets = vec![
            ChartDataset::default()
                .name("Historical N")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::HISTORICAL))
                .data(&historical),
            ChartDataset::default()
                .name("Forecast N")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::FORECAST))
                .data(&predicted),
            ChartDataset::default()
                .name("Lower CI")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::CONFIDENCE))
                .data(&lower),
            ChartDataset::default()
                .name("Upper CI")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::CONFIDENCE))
                .data(&upper),
        ];

        let x_labels = vec![
            Line::from(
                self.monthly
                    .first()
                    .map(|m| m.month.clone())
                    .unwrap_or_else(|| "Month 1".to_string()),
            ),
            Line::from("Month 6".to_string()),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title("Nitrogen (N) Forecast for Next 6 Months")
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .x_axis(
                Axis::default()
                    .bounds(x_bounds)
                    .labels(x_labels)
                    .style(Theme::border()),
            )
            .y_axis(
                Axis::default()
                    .bounds(y_bounds)
                    .labels(vec![
                        Line::from(format!("{:.0}", y_bounds[0])),
                        Line::from(format!("{:.0}", y_bounds[1])),
                    ])
                    .style(Theme::border()),
            );

        chart.render(area, buf);
    }

    fn render_tables(&self, forecast: &NutrientForecast, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Predicted Values")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let header = Row::new(vec![
            Cell::from("Month"),
            Cell::from("N Value"),
            Cell::from("Lower CI"),
            Cell::from("Upper CI"),
        ])
        .style(Theme::header());

        let rows: Vec<Row> = forecast
            .labeled_points()
            .into_iter()
            .map(|(label, point)| {
                Row::new(vec![
                    Cell::from(label),
                    Cell::from(format!("{:.2}", point.predicted_value))
                        .style(Theme::highlight()),
                    Cell::from(format!("{:.2}", point.lower_ci)).style(Theme::dim()),
                    Cell::from(format!("{:.2}", point.upper_ci)).style(Theme::dim()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(9),
        ];

        let table = Table::new(rows, widths).header(header);
        table.render(inner, buf);
    }

    fn render_recommendations(&self, area: Rect, buf: &mut Buffer) {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Fertilizer Recommendations")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.recommendations.is_empty() {
            let para = Paragraph::new(Span::styled("No recommendations", Theme::dim()));
            para.render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let band_style = Style::default().fg(rec.band.color());
                let line = Line::from(vec![
                    Span::styled(format!("{} ", rec.period_label), Theme::normal()),
                    Span::styled(format!("{:.2}", rec.predicted_value), band_style),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items);
        list.render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let rec = self.recommendations.get(self.selected_index);

        let title = match rec {
            Some(r) => format!("Recommendation for {}", r.period_label),
            None => "Recommendation".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rec = match rec {
            Some(r) => r,
            None => {
                let para = Paragraph::new(Span::styled(
                    "Select a month to view its recommendation",
                    Theme::dim(),
                ));
                para.render(inner, buf);
                return;
            }
        };

        let mut lines = vec![Line::from(vec![Span::styled(
            rec.band.as_str(),
            Style::default().fg(rec.band.color()),
        )])];
        lines.push(Line::from(vec![]));
        for text_line in rec.advisory_text.lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Theme::normal(),
            )));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        para.render(inner, buf);
    }

    fn render_unavailable(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Forecast Unavailable")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            "Unable to get forecast data. Make sure the API server is running.",
            Theme::error(),
        ))];

        if let Some(err) = self.forecast_error {
            lines.push(Line::from(vec![]));
            lines.push(Line::from(Span::styled(err.to_string(), Theme::warning())));
        }

        lines.push(Line::from(vec![]));
        lines.push(Line::from(Span::styled(
            "To start the API server, run the following command in a terminal:",
            Theme::dim(),
        )));
        lines.push(Line::from(vec![]));
        lines.push(Line::from(Span::styled(
            "    uvicorn main:app --host 0.0.0.0 --port 8000",
            Theme::highlight(),
        )));
        lines.push(Line::from(vec![]));
        lines.push(Line::from(Span::styled(
            "Then press [r] to retry the forecast fetch.",
            Theme::dim(),
        )));

        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        para.render(inner, buf);
    }
}
