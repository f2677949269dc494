use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Nutrient series colors
    pub const NITROGEN: Color = Color::Green;
    pub const PHOSPHORUS: Color = Color::Yellow;
    pub const POTASSIUM: Color = Color::Magenta;

    // Environmental series colors
    pub const TEMPERATURE: Color = Color::Red;
    pub const HUMIDITY: Color = Color::Blue;

    // Forecast series colors
    pub const HISTORICAL: Color = Color::Blue;
    pub const FORECAST: Color = Color::Red;
    pub const CONFIDENCE: Color = Color::DarkGray;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    /// Color for a Pearson correlation value: strong positive in red,
    /// strong negative in blue, weak in gray (RdBu-style scale).
    pub fn correlation_color(r: f64) -> Color {
        if r > 0.7 {
            Color::Red
        } else if r > 0.3 {
            Color::LightRed
        } else if r > -0.3 {
            Color::Gray
        } else if r > -0.7 {
            Color::LightBlue
        } else {
            Color::Blue
        }
    }

    /// Palette for scatter points grouped by crop type.
    pub fn crop_color(index: usize) -> Color {
        const PALETTE: [Color; 6] = [
            Color::Green,
            Color::Yellow,
            Color::Cyan,
            Color::Magenta,
            Color::LightRed,
            Color::LightBlue,
        ];
        PALETTE[index % PALETTE.len()]
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }
}
