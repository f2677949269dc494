use crate::logic::MonthlyStat;
use crate::ui::components::{month_axis_labels, series_bounds};
use crate::ui::screens::render_nav;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph, Widget},
};

/// Monthly nutrient and environmental trend charts.
pub struct TrendsScreen<'a> {
    pub monthly: &'a [MonthlyStat],
}

impl<'a> TrendsScreen<'a> {
    pub fn new(monthly: &'a [MonthlyStat]) -> Self {
        Self { monthly }
    }

    fn series(&self, pick: fn(&MonthlyStat) -> f64) -> Vec<(f64, f64)> {
        self.monthly
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, pick(m)))
            .collect()
    }

    fn month_labels(&self) -> Vec<String> {
        self.monthly.iter().map(|m| m.month.clone()).collect()
    }
}

impl Widget for TrendsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Percentage(55),
                Constraint::Percentage(40),
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Monthly Trends", Theme::title()),
            Span::styled(
                format!(" ({} months)", self.monthly.len()),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        if self.monthly.is_empty() {
            let para = Paragraph::new(Span::styled(
                "No data available - load a dataset first",
                Theme::dim(),
            ));
            para.render(chunks[1], buf);
        } else {
            self.render_nutrients(chunks[1], buf);
            self.render_environment(chunks[2], buf);
        }

        render_nav(chunks[3], buf);
    }
}

impl TrendsScreen<'_> {
    fn render_nutrients(&self, area: Rect, buf: &mut Buffer) {
        let n_series = self.series(|m| m.n);
        let p_series = self.series(|m| m.p);
        let k_series = self.series(|m| m.k);

        let (x_bounds, y_bounds) = series_bounds(&[&n_series, &p_series, &k_series]);

        let datasets = vec![
            ChartDataset::default()
                .name("Nitrogen (N)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::NITROGEN))
                .data(&n_series),
            ChartDataset::default()
                .name("Phosphorus (P)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::PHOSPHORUS))
                .data(&p_series),
            ChartDataset::default()
                .name("Potassium (K)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::POTASSIUM))
                .data(&k_series),
        ];

        let x_labels: Vec<Line> = month_axis_labels(&self.month_labels())
            .into_iter()
            .map(Line::from)
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title("Monthly Fertilizer Requirements")
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

    fn render_environment(&self, area: Rect, buf: &mut Buffer) {
        let temp_series = self.series(|m| m.temperature);
        let humidity_series = self.series(|m| m.humidity);

        let (x_bounds, y_bounds) = series_bounds(&[&temp_series, &humidity_series]);

        let datasets = vec![
            ChartDataset::default()
                .name("Temperature")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::TEMPERATURE))
                .data(&temp_series),
            ChartDataset::default()
                .name("Humidity")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::HUMIDITY))
                .data(&humidity_series),
        ];

        let x_labels: Vec<Line> = month_axis_labels(&self.month_labels())
            .into_iter()
            .map(Line::from)
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title("Environmental Factors")
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
}
