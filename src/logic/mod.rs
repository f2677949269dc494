pub mod advisor;
pub mod stats;

pub use advisor::generate_recommendations;
pub use stats::{correlation_matrix, monthly_stats, CorrelationMatrix, MonthlyStat};
