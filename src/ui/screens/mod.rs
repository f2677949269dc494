pub mod correlations;
pub mod data;
pub mod forecast;
pub mod overview;
pub mod trends;

pub use correlations::CorrelationsScreen;
pub use data::DataScreen;
pub use forecast::ForecastScreen;
pub use overview::OverviewScreen;
pub use trends::TrendsScreen;

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Shared bottom navigation bar.
pub fn render_nav(area: Rect, buf: &mut Buffer) {
    let nav = Line::from(vec![
        Span::styled("[1]", Theme::nav_key()),
        Span::styled("Overview ", Theme::nav_label()),
        Span::styled("[2]", Theme::nav_key()),
        Span::styled("Trends ", Theme::nav_label()),
        Span::styled("[3]", Theme::nav_key()),
        Span::styled("Correlations ", Theme::nav_label()),
        Span::styled("[4]", Theme::nav_key()),
        Span::styled("Data ", Theme::nav_label()),
        Span::styled("[5]", Theme::nav_key()),
        Span::styled("Forecast ", Theme::nav_label()),
        Span::styled("[r]", Theme::nav_key()),
        Span::styled("Refresh ", Theme::nav_label()),
        Span::styled("[q]", Theme::nav_key()),
        Span::styled("Quit", Theme::nav_label()),
    ]);

    Paragraph::new(nav).render(area, buf);
}
