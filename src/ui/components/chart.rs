//! Axis helpers shared by the trend and forecast charts.

/// Combined [min, max] bounds over several (x, y) series, padded so the
/// extreme points do not sit on the chart border.
pub fn series_bounds(series: &[&[(f64, f64)]]) -> ([f64; 2], [f64; 2]) {
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;

    for s in series {
        for (x, y) in s.iter() {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }
    }

    if x_min > x_max {
        // All series empty
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let y_pad = ((y_max - y_min) * 0.05).max(1.0);
    ([x_min, x_max], [y_min - y_pad, y_max + y_pad])
}

/// First, middle, and last labels for a month-indexed x axis.
pub fn month_axis_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_series() {
        let a = [(0.0, 10.0), (1.0, 20.0)];
        let b = [(2.0, 5.0)];
        let ([x_min, x_max], [y_min, y_max]) = series_bounds(&[&a, &b]);
        assert_eq!(x_min, 0.0);
        assert_eq!(x_max, 2.0);
        assert!(y_min < 5.0);
        assert!(y_max > 20.0);
    }

    #[test]
    fn bounds_of_empty_series_are_unit() {
        let ([x_min, x_max], _) = series_bounds(&[]);
        assert_eq!((x_min, x_max), (0.0, 1.0));
    }

    #[test]
    fn month_labels_pick_ends_and_middle() {
        let labels: Vec<String> = (1..=5).map(|i| format!("2023-0{}", i)).collect();
        let picked = month_axis_labels(&labels);
        assert_eq!(picked, vec!["2023-01", "2023-03", "2023-05"]);
    }
}
