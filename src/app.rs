use crate::config::Config;
use crate::logic::{correlation_matrix, generate_recommendations, monthly_stats};
use crate::logic::{CorrelationMatrix, MonthlyStat};
use crate::models::{Dataset, NumericColumn, NutrientForecast, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Trends,
    Correlations,
    Data,
    Forecast,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Overview),
            '2' => Some(Screen::Trends),
            '3' => Some(Screen::Correlations),
            '4' => Some(Screen::Data),
            '5' => Some(Screen::Forecast),
            _ => None,
        }
    }
}

pub struct CorrelationsState {
    pub x_column: NumericColumn,
    pub y_column: NumericColumn,
}

impl CorrelationsState {
    pub fn new() -> Self {
        Self {
            x_column: NumericColumn::Nitrogen,
            y_column: NumericColumn::CropYield,
        }
    }

    pub fn cycle_x(&mut self) {
        self.x_column = self.x_column.next();
    }

    pub fn cycle_y(&mut self) {
        self.y_column = self.y_column.next();
    }
}

pub struct DataState {
    pub scroll_offset: usize,
}

impl DataState {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_down(&mut self, step: usize, max: usize) {
        let limit = max.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + step).min(limit);
    }

    pub fn scroll_up(&mut self, step: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(step);
    }
}

pub struct ForecastState {
    pub selected_index: usize,
}

impl ForecastState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    // Data
    pub dataset: Option<Dataset>,
    pub dataset_error: Option<String>,
    pub monthly: Vec<MonthlyStat>,
    pub correlation: Option<CorrelationMatrix>,
    pub forecast: Option<NutrientForecast>,
    pub forecast_error: Option<String>,
    pub recommendations: Vec<Recommendation>,

    // Screen states
    pub correlations_state: CorrelationsState,
    pub data_state: DataState,
    pub forecast_state: ForecastState,

    // UI state
    pub status_message: Option<String>,
    pub refreshing: bool,
    pub needs_refresh: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            screen: Screen::Overview,
            should_quit: false,
            config,
            dataset: None,
            dataset_error: None,
            monthly: Vec::new(),
            correlation: None,
            forecast: None,
            forecast_error: None,
            recommendations: Vec::new(),
            correlations_state: CorrelationsState::new(),
            data_state: DataState::new(),
            forecast_state: ForecastState::new(),
            status_message: None,
            refreshing: false,
            needs_refresh: false,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Refreshing forecast...");
    }

    /// Install a loaded dataset and precompute the derived aggregates.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.monthly = monthly_stats(&dataset.records);
        self.correlation = Some(correlation_matrix(&dataset.records));
        self.dataset = Some(dataset);
        self.dataset_error = None;
        self.data_state.scroll_offset = 0;
    }

    /// Record a dataset load failure; downstream sections render degraded.
    pub fn set_dataset_error(&mut self, error: String) {
        self.dataset = None;
        self.dataset_error = Some(error);
        self.monthly.clear();
        self.correlation = None;
    }

    /// Install a fetched forecast and regenerate the recommendations.
    pub fn update_forecast(&mut self, forecast: NutrientForecast) {
        self.recommendations = generate_recommendations(&forecast);
        self.forecast = Some(forecast);
        self.forecast_error = None;
        self.forecast_state.selected_index = 0;
    }

    /// Record a forecast fetch failure; the forecast screen shows the error.
    pub fn set_forecast_error(&mut self, error: String) {
        self.forecast = None;
        self.forecast_error = Some(error);
        self.recommendations.clear();
        self.forecast_state.selected_index = 0;
    }

    pub fn record_count(&self) -> usize {
        self.dataset.as_ref().map(|d| d.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastPoint, HistoricalRecord};

    fn sample_dataset() -> Dataset {
        let record = HistoricalRecord {
            date: "2023-05-01".parse().unwrap(),
            n: 55.0,
            p: 30.0,
            k: 20.0,
            temperature: 72.0,
            humidity: 60.0,
            wind_speed: 5.0,
            crop_yield: 100.0,
            soil_quality: 7.0,
            crop_type: "Corn".to_string(),
        };
        Dataset::new(vec![record], "test.csv")
    }

    fn sample_forecast() -> NutrientForecast {
        NutrientForecast::new(
            (0..6)
                .map(|i| ForecastPoint {
                    predicted_value: 60.0 + i as f64,
                    lower_ci: 50.0,
                    upper_ci: 70.0,
                })
                .collect(),
        )
    }

    #[test]
    fn set_dataset_computes_aggregates() {
        let mut app = App::new(Config::default());
        app.set_dataset(sample_dataset());
        assert_eq!(app.monthly.len(), 1);
        assert!(app.correlation.is_some());
        assert!(app.dataset_error.is_none());
        assert_eq!(app.record_count(), 1);
    }

    #[test]
    fn dataset_error_clears_aggregates() {
        let mut app = App::new(Config::default());
        app.set_dataset(sample_dataset());
        app.set_dataset_error("missing file".into());
        assert!(app.dataset.is_none());
        assert!(app.monthly.is_empty());
        assert!(app.correlation.is_none());
    }

    #[test]
    fn update_forecast_generates_recommendations() {
        let mut app = App::new(Config::default());
        app.update_forecast(sample_forecast());
        assert_eq!(app.recommendations.len(), 6);
        assert!(app.forecast_error.is_none());
        assert_eq!(app.recommendations[0].period_label, "Month 1");
    }

    #[test]
    fn forecast_error_clears_recommendations() {
        let mut app = App::new(Config::default());
        app.update_forecast(sample_forecast());
        app.set_forecast_error("connection refused".into());
        assert!(app.forecast.is_none());
        assert!(app.recommendations.is_empty());
    }

    #[test]
    fn screen_keys() {
        assert_eq!(Screen::from_key('1'), Some(Screen::Overview));
        assert_eq!(Screen::from_key('5'), Some(Screen::Forecast));
        assert_eq!(Screen::from_key('x'), None);
    }

    #[test]
    fn data_scroll_clamps_to_bounds() {
        let mut state = DataState::new();
        state.scroll_down(10, 5);
        assert_eq!(state.scroll_offset, 4);
        state.scroll_up(100);
        assert_eq!(state.scroll_offset, 0);
    }
}
