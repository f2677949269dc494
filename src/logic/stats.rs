use crate::models::{HistoricalRecord, NumericColumn};
use std::collections::BTreeMap;

/// Mean sensor values for one calendar month of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStat {
    /// Month label in `YYYY-MM` form.
    pub month: String,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub crop_yield: f64,
}

/// Group records by calendar month and average each tracked column.
/// Results are sorted chronologically.
pub fn monthly_stats(records: &[HistoricalRecord]) -> Vec<MonthlyStat> {
    // BTreeMap keyed by YYYY-MM keeps months sorted
    let mut groups: BTreeMap<String, Vec<&HistoricalRecord>> = BTreeMap::new();
    for record in records {
        let month = record.date.format("%Y-%m").to_string();
        groups.entry(month).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(month, group)| {
            let count = group.len() as f64;
            MonthlyStat {
                month,
                n: group.iter().map(|r| r.n).sum::<f64>() / count,
                p: group.iter().map(|r| r.p).sum::<f64>() / count,
                k: group.iter().map(|r| r.k).sum::<f64>() / count,
                temperature: group.iter().map(|r| r.temperature).sum::<f64>() / count,
                humidity: group.iter().map(|r| r.humidity).sum::<f64>() / count,
                crop_yield: group.iter().map(|r| r.crop_yield).sum::<f64>() / count,
            }
        })
        .collect()
}

/// Pairwise Pearson correlations over the eight numeric columns.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<NumericColumn>,
    /// values[i][j] is the correlation of columns[i] with columns[j].
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }
}

pub fn correlation_matrix(records: &[HistoricalRecord]) -> CorrelationMatrix {
    let columns = NumericColumn::ALL.to_vec();
    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|col| records.iter().map(|r| col.value(r)).collect())
        .collect();

    let values = columns
        .iter()
        .enumerate()
        .map(|(i, _)| {
            columns
                .iter()
                .enumerate()
                .map(|(j, _)| pearson(&series[i], &series[j]))
                .collect()
        })
        .collect();

    CorrelationMatrix { columns, values }
}

/// Pearson correlation coefficient. Zero-variance or empty series yield 0.0
/// rather than NaN so the heatmap always renders.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let len = x.len().min(y.len());
    if len == 0 {
        return 0.0;
    }

    let n = len as f64;
    let mean_x = x[..len].iter().sum::<f64>() / n;
    let mean_y = y[..len].iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..len {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, n: f64, temperature: f64) -> HistoricalRecord {
        HistoricalRecord {
            date: date.parse().unwrap(),
            n,
            p: 30.0,
            k: 20.0,
            temperature,
            humidity: 60.0,
            wind_speed: 5.0,
            crop_yield: 100.0,
            soil_quality: 7.0,
            crop_type: "Corn".to_string(),
        }
    }

    #[test]
    fn monthly_stats_groups_and_averages() {
        let records = vec![
            record("2023-01-05", 40.0, 70.0),
            record("2023-01-20", 60.0, 74.0),
            record("2023-02-10", 80.0, 80.0),
        ];
        let stats = monthly_stats(&records);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].month, "2023-01");
        assert_eq!(stats[0].n, 50.0);
        assert_eq!(stats[0].temperature, 72.0);
        assert_eq!(stats[1].month, "2023-02");
        assert_eq!(stats[1].n, 80.0);
    }

    #[test]
    fn monthly_stats_sorted_across_years() {
        let records = vec![
            record("2024-01-01", 10.0, 60.0),
            record("2023-12-01", 20.0, 50.0),
        ];
        let stats = monthly_stats(&records);
        assert_eq!(stats[0].month, "2023-12");
        assert_eq!(stats[1].month, "2024-01");
    }

    #[test]
    fn pearson_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_perfect_anticorrelation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_degenerate_series() {
        assert_eq!(pearson(&[], &[]), 0.0);
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]), 0.0);
    }

    #[test]
    fn correlation_matrix_diagonal_is_one() {
        let records = vec![
            record("2023-01-01", 40.0, 70.0),
            record("2023-01-02", 55.0, 75.0),
            record("2023-01-03", 62.0, 81.0),
        ];
        let matrix = correlation_matrix(&records);
        assert_eq!(matrix.size(), 8);
        // Columns with variance correlate perfectly with themselves
        assert!((matrix.get(0, 0) - 1.0).abs() < 1e-9);
        // Matrix is symmetric
        assert!((matrix.get(0, 3) - matrix.get(3, 0)).abs() < 1e-9);
    }
}
