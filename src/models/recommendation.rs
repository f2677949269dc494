use serde::{Deserialize, Serialize};

/// Nitrogen requirement band for a forecasted value.
///
/// Band edges use strict greater-than comparisons: a value exactly at a
/// threshold belongs to the band below it (70.0 classifies as ModerateHigh,
/// not High).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NitrogenBand {
    High,
    ModerateHigh,
    Moderate,
    LowModerate,
}

impl NitrogenBand {
    pub fn classify(predicted_value: f64) -> Self {
        if predicted_value > 70.0 {
            NitrogenBand::High
        } else if predicted_value > 55.0 {
            NitrogenBand::ModerateHigh
        } else if predicted_value > 40.0 {
            NitrogenBand::Moderate
        } else {
            NitrogenBand::LowModerate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NitrogenBand::High => "High Nitrogen Required",
            NitrogenBand::ModerateHigh => "Moderate-High Nitrogen Required",
            NitrogenBand::Moderate => "Moderate Nitrogen Required",
            NitrogenBand::LowModerate => "Low-Moderate Nitrogen Required",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            NitrogenBand::High => Color::Red,
            NitrogenBand::ModerateHigh => Color::Yellow,
            NitrogenBand::Moderate => Color::Green,
            NitrogenBand::LowModerate => Color::Cyan,
        }
    }
}

impl std::fmt::Display for NitrogenBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fertilizer advice for one forecast period.
/// Recomputed from the forecast on every refresh; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub period_label: String,
    pub predicted_value: f64,
    pub band: NitrogenBand,
    pub advisory_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_strict_boundaries() {
        // Exact thresholds fall to the lower band
        assert_eq!(NitrogenBand::classify(70.0), NitrogenBand::ModerateHigh);
        assert_eq!(NitrogenBand::classify(55.0), NitrogenBand::Moderate);
        assert_eq!(NitrogenBand::classify(40.0), NitrogenBand::LowModerate);

        // Just above a threshold belongs to the higher band
        assert_eq!(NitrogenBand::classify(70.01), NitrogenBand::High);
        assert_eq!(NitrogenBand::classify(55.01), NitrogenBand::ModerateHigh);
        assert_eq!(NitrogenBand::classify(40.01), NitrogenBand::Moderate);
    }

    #[test]
    fn classify_extremes() {
        assert_eq!(NitrogenBand::classify(0.0), NitrogenBand::LowModerate);
        assert_eq!(NitrogenBand::classify(-12.5), NitrogenBand::LowModerate);
        assert_eq!(NitrogenBand::classify(1_000.0), NitrogenBand::High);
    }

    #[test]
    fn band_labels() {
        assert_eq!(NitrogenBand::High.as_str(), "High Nitrogen Required");
        assert!(NitrogenBand::ModerateHigh.as_str().contains("Moderate-High"));
        assert!(NitrogenBand::LowModerate.as_str().contains("Low-Moderate"));
    }
}
