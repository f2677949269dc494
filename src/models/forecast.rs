use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of future months the forecast service predicts.
pub const FORECAST_HORIZON_MONTHS: usize = 6;

/// One predicted nitrogen value with its confidence bounds.
/// Produced by the external forecast service; consumed read-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub predicted_value: f64,
    pub lower_ci: f64,
    pub upper_ci: f64,
}

/// The 6-month nitrogen forecast as returned by the service.
/// Points are implicitly ordered as Month 1..6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientForecast {
    pub fetched_at: DateTime<Utc>,
    pub points: Vec<ForecastPoint>,
}

impl NutrientForecast {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self {
            fetched_at: Utc::now(),
            points,
        }
    }

    /// Positional label for the point at `index`: "Month 1", "Month 2", ...
    pub fn period_label(index: usize) -> String {
        format!("Month {}", index + 1)
    }

    /// Points paired with their period labels, in forecast order.
    pub fn labeled_points(&self) -> Vec<(String, ForecastPoint)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (Self::period_label(i), *p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_labels_are_one_based() {
        assert_eq!(NutrientForecast::period_label(0), "Month 1");
        assert_eq!(NutrientForecast::period_label(5), "Month 6");
    }

    #[test]
    fn labeled_points_preserve_order() {
        let forecast = NutrientForecast::new(vec![
            ForecastPoint {
                predicted_value: 60.0,
                lower_ci: 55.0,
                upper_ci: 65.0,
            },
            ForecastPoint {
                predicted_value: 45.0,
                lower_ci: 40.0,
                upper_ci: 50.0,
            },
        ]);
        let labeled = forecast.labeled_points();
        assert_eq!(labeled.len(), 2);
        assert_eq!(labeled[0].0, "Month 1");
        assert_eq!(labeled[0].1.predicted_value, 60.0);
        assert_eq!(labeled[1].0, "Month 2");
        assert_eq!(labeled[1].1.predicted_value, 45.0);
    }
}
