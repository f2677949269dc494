use crate::logic::CorrelationMatrix;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

/// Correlation matrix rendered as a color-coded table, one row per column.
pub struct CorrelationHeatmap<'a> {
    matrix: &'a CorrelationMatrix,
}

impl<'a> CorrelationHeatmap<'a> {
    pub fn new(matrix: &'a CorrelationMatrix) -> Self {
        Self { matrix }
    }
}

impl Widget for CorrelationHeatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Correlation Between Variables")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut header_cells = vec![Cell::from("")];
        header_cells.extend(
            self.matrix
                .columns
                .iter()
                .map(|c| Cell::from(short_label(c.as_str()))),
        );
        let header = Row::new(header_cells).style(Theme::header());

        let rows: Vec<Row> = (0..self.matrix.size())
            .map(|i| {
                let mut cells =
                    vec![Cell::from(short_label(self.matrix.columns[i].as_str()))
                        .style(Theme::header())];
                for j in 0..self.matrix.size() {
                    let r = self.matrix.get(i, j);
                    cells.push(
                        Cell::from(format!("{:+.2}", r))
                            .style(Style::default().fg(Theme::correlation_color(r))),
                    );
                }
                Row::new(cells)
            })
            .collect();

        let mut widths = vec![Constraint::Length(6)];
        widths.extend(std::iter::repeat(Constraint::Length(6)).take(self.matrix.size()));

        let table = Table::new(rows, widths).header(header);
        table.render(inner, buf);
    }
}

/// Abbreviate long column names so eight columns fit on screen.
fn short_label(name: &str) -> &str {
    match name {
        "Temperature" => "Temp",
        "Humidity" => "Humid",
        "Wind_Speed" => "Wind",
        "Crop_Yield" => "Yield",
        "Soil_Quality" => "Soil",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_fit_columns() {
        assert_eq!(short_label("N"), "N");
        assert_eq!(short_label("Temperature"), "Temp");
        assert_eq!(short_label("Crop_Yield"), "Yield");
        for label in ["N", "P", "K", "Temp", "Humid", "Wind", "Yield", "Soil"] {
            assert!(label.len() <= 5);
        }
    }
}
