use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily sensor observation from the historical crop dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub crop_yield: f64,
    pub soil_quality: f64,
    pub crop_type: String,
}

/// The eight numeric dataset columns, in header order.
/// Drives the correlation matrix and the scatter axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericColumn {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    WindSpeed,
    CropYield,
    SoilQuality,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 8] = [
        NumericColumn::Nitrogen,
        NumericColumn::Phosphorus,
        NumericColumn::Potassium,
        NumericColumn::Temperature,
        NumericColumn::Humidity,
        NumericColumn::WindSpeed,
        NumericColumn::CropYield,
        NumericColumn::SoilQuality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericColumn::Nitrogen => "N",
            NumericColumn::Phosphorus => "P",
            NumericColumn::Potassium => "K",
            NumericColumn::Temperature => "Temperature",
            NumericColumn::Humidity => "Humidity",
            NumericColumn::WindSpeed => "Wind_Speed",
            NumericColumn::CropYield => "Crop_Yield",
            NumericColumn::SoilQuality => "Soil_Quality",
        }
    }

    pub fn value(&self, record: &HistoricalRecord) -> f64 {
        match self {
            NumericColumn::Nitrogen => record.n,
            NumericColumn::Phosphorus => record.p,
            NumericColumn::Potassium => record.k,
            NumericColumn::Temperature => record.temperature,
            NumericColumn::Humidity => record.humidity,
            NumericColumn::WindSpeed => record.wind_speed,
            NumericColumn::CropYield => record.crop_yield,
            NumericColumn::SoilQuality => record.soil_quality,
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The loaded dataset. Immutable after load; one per session.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<HistoricalRecord>,
    pub source_path: String,
}

impl Dataset {
    pub fn new(records: Vec<HistoricalRecord>, source_path: impl Into<String>) -> Self {
        Self {
            records,
            source_path: source_path.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last observation dates, if any records exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    pub fn mean_nitrogen(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        Some(self.records.iter().map(|r| r.n).sum::<f64>() / self.records.len() as f64)
    }

    /// Distinct crop type labels, in first-seen order.
    pub fn crop_types(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.crop_type) {
                seen.push(record.crop_type.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, n: f64, crop: &str) -> HistoricalRecord {
        HistoricalRecord {
            date: date.parse().unwrap(),
            n,
            p: 30.0,
            k: 20.0,
            temperature: 72.0,
            humidity: 60.0,
            wind_speed: 5.0,
            crop_yield: 100.0,
            soil_quality: 7.0,
            crop_type: crop.to_string(),
        }
    }

    #[test]
    fn date_range_spans_records() {
        let ds = Dataset::new(
            vec![
                record("2023-03-15", 50.0, "Wheat"),
                record("2023-01-01", 60.0, "Corn"),
                record("2023-06-30", 70.0, "Wheat"),
            ],
            "test.csv",
        );
        let (min, max) = ds.date_range().unwrap();
        assert_eq!(min, "2023-01-01".parse().unwrap());
        assert_eq!(max, "2023-06-30".parse().unwrap());
    }

    #[test]
    fn empty_dataset_has_no_range_or_mean() {
        let ds = Dataset::new(Vec::new(), "test.csv");
        assert!(ds.date_range().is_none());
        assert!(ds.mean_nitrogen().is_none());
    }

    #[test]
    fn mean_nitrogen_averages_records() {
        let ds = Dataset::new(
            vec![record("2023-01-01", 40.0, "Corn"), record("2023-01-02", 60.0, "Corn")],
            "test.csv",
        );
        assert_eq!(ds.mean_nitrogen(), Some(50.0));
    }

    #[test]
    fn crop_types_deduplicated_in_order() {
        let ds = Dataset::new(
            vec![
                record("2023-01-01", 40.0, "Corn"),
                record("2023-01-02", 60.0, "Wheat"),
                record("2023-01-03", 50.0, "Corn"),
            ],
            "test.csv",
        );
        assert_eq!(ds.crop_types(), vec!["Corn", "Wheat"]);
    }

    #[test]
    fn numeric_column_cycles_through_all() {
        let mut col = NumericColumn::Nitrogen;
        for _ in 0..NumericColumn::ALL.len() {
            col = col.next();
        }
        assert_eq!(col, NumericColumn::Nitrogen);
    }

    #[test]
    fn numeric_column_reads_record_fields() {
        let r = record("2023-01-01", 42.0, "Corn");
        assert_eq!(NumericColumn::Nitrogen.value(&r), 42.0);
        assert_eq!(NumericColumn::CropYield.value(&r), 100.0);
        assert_eq!(NumericColumn::SoilQuality.as_str(), "Soil_Quality");
    }
}
