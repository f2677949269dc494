pub mod dataset;
pub mod forecast_api;

pub use dataset::load_dataset;
pub use forecast_api::ForecastApiClient;
