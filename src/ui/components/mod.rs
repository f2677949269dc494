pub mod chart;
pub mod heatmap;
pub mod metric;

pub use chart::{month_axis_labels, series_bounds};
pub use heatmap::CorrelationHeatmap;
pub use metric::MetricBox;
