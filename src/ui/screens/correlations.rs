use crate::logic::CorrelationMatrix;
use crate::models::{Dataset, NumericColumn};
use crate::ui::components::{series_bounds, CorrelationHeatmap};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph, Widget},
};

/// Correlation heatmap plus a scatter explorer with selectable axes.
pub struct CorrelationsScreen<'a> {
    pub dataset: Option<&'a Dataset>,
    pub matrix: Option<&'a CorrelationMatrix>,
    pub x_column: NumericColumn,
    pub y_column: NumericColumn,
}

impl<'a> CorrelationsScreen<'a> {
    pub fn new(dataset: Option<&'a Dataset>, matrix: Option<&'a CorrelationMatrix>) -> Self {
        Self {
            dataset,
            matrix,
            x_column: NumericColumn::Nitrogen,
            y_column: NumericColumn::CropYield,
        }
    }

    pub fn with_axes(mut self, x: NumericColumn, y: NumericColumn) -> Self {
        self.x_column = x;
        self.y_column = y;
        self
    }
}

impl Widget for CorrelationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![Span::styled("Correlation Analysis", Theme::title())]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        match self.matrix {
            Some(matrix) => CorrelationHeatmap::new(matrix).render(content[0], buf),
            None => {
                let para = Paragraph::new(Span::styled("No data available", Theme::dim()));
                para.render(content[0], buf);
            }
        }

        self.render_scatter(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[x]", Theme::nav_key()),
            Span::styled("Cycle X-axis ", Theme::nav_label()),
            Span::styled("[y]", Theme::nav_key()),
            Span::styled("Cycle Y-axis ", Theme::nav_label()),
            Span::styled("[1-5]", Theme::nav_key()),
            Span::styled("Screens ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl CorrelationsScreen<'_> {
    fn render_scatter(&self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "Relationship: {} vs {}",
            self.x_column.as_str(),
            self.y_column.as_str()
        );

        let dataset = match self.dataset {
            Some(ds) if !ds.is_empty() => ds,
            _ => {
                let block = Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Theme::border());
                let inner = block.inner(area);
                block.render(area, buf);
                Paragraph::new(Span::styled("No data available", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        // One series per crop type so points can be colored by category
        let crop_types = dataset.crop_types();
        let series: Vec<(String, Vec<(f64, f64)>)> = crop_types
            .iter()
            .map(|crop| {
                let points = dataset
                    .records
                    .iter()
                    .filter(|r| &r.crop_type == crop)
                    .map(|r| (self.x_column.value(r), self.y_column.value(r)))
                    .collect();
                (crop.clone(), points)
            })
            .collect();

        let all_points: Vec<&[(f64, f64)]> = series.iter().map(|(_, p)| p.as_slice()).collect();
        let (x_bounds, y_bounds) = series_bounds(&all_points);

        let datasets: Vec<ChartDataset> = series
            .iter()
            .enumerate()
            .map(|(i, (crop, points))| {
                ChartDataset::default()
                    .name(crop.clone())
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Theme::crop_color(i)))
                    .data(points)
            })
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .x_axis(
                Axis::default()
                    .bounds(x_bounds)
                    .labels(vec![
                        Line::from(format!("{:.1}", x_bounds[0])),
                        Line::from(format!("{:.1}", x_bounds[1])),
                    ])
                    .style(Theme::border()),
            )
            .y_axis(
                Axis::default()
                    .bounds(y_bounds)
                    .labels(vec![
                        Line::from(format!("{:.1}", y_bounds[0])),
                        Line::from(format!("{:.1}", y_bounds[1])),
                    ])
                    .style(Theme::border()),
            );

        chart.render(area, buf);
    }
}
