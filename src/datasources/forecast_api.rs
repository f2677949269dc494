use crate::config::ForecastApiConfig;
use crate::error::{CropCastError, Result};
use crate::models::{ForecastPoint, NutrientForecast, FORECAST_HORIZON_MONTHS};
use serde::Deserialize;

pub struct ForecastApiClient {
    client: reqwest::Client,
    config: ForecastApiConfig,
}

// Forecast service response structures
#[derive(Debug, Deserialize)]
struct ApiForecastResponse {
    forecast: Vec<ApiForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastItem {
    predicted_value: f64,
    lower_ci: f64,
    upper_ci: f64,
}

impl ForecastApiClient {
    pub fn new(config: ForecastApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the 6-month nitrogen forecast from the remote service.
    pub async fn fetch_forecast(&self) -> Result<NutrientForecast> {
        let url = self.config.forecast_url();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CropCastError::DataSourceUnavailable(format!("Forecast API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CropCastError::DataSourceUnavailable(format!(
                "Forecast API returned {}: {}",
                status, body
            )));
        }

        let api_response: ApiForecastResponse = response.json().await.map_err(|e| {
            CropCastError::DataSourceUnavailable(format!(
                "Failed to parse forecast response: {}",
                e
            ))
        })?;

        convert_response(api_response)
    }

    /// Test connection to the forecast service.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = self.config.forecast_url();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CropCastError::DataSourceUnavailable(format!("Forecast API: {}", e)))?;

        Ok(response.status().is_success())
    }
}

fn convert_response(response: ApiForecastResponse) -> Result<NutrientForecast> {
    // The service predicts exactly six months; anything else is malformed
    if response.forecast.len() != FORECAST_HORIZON_MONTHS {
        return Err(CropCastError::InvalidData(format!(
            "Expected {} forecast periods, got {}",
            FORECAST_HORIZON_MONTHS,
            response.forecast.len()
        )));
    }

    let points = response
        .forecast
        .into_iter()
        .map(|item| ForecastPoint {
            predicted_value: item.predicted_value,
            lower_ci: item.lower_ci,
            upper_ci: item.upper_ci,
        })
        .collect();

    Ok(NutrientForecast::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: f64) -> ApiForecastItem {
        ApiForecastItem {
            predicted_value: value,
            lower_ci: value - 4.0,
            upper_ci: value + 4.0,
        }
    }

    #[test]
    fn response_json_deserializes() {
        let body = r#"{"forecast": [
            {"predicted_value": 68.2, "lower_ci": 61.0, "upper_ci": 75.4},
            {"predicted_value": 64.9, "lower_ci": 57.1, "upper_ci": 72.7},
            {"predicted_value": 61.3, "lower_ci": 52.8, "upper_ci": 69.8},
            {"predicted_value": 58.0, "lower_ci": 48.9, "upper_ci": 67.1},
            {"predicted_value": 55.2, "lower_ci": 45.6, "upper_ci": 64.8},
            {"predicted_value": 52.7, "lower_ci": 42.5, "upper_ci": 62.9}
        ]}"#;
        let response: ApiForecastResponse = serde_json::from_str(body).unwrap();
        let forecast = convert_response(response).unwrap();
        assert_eq!(forecast.points.len(), 6);
        assert_eq!(forecast.points[0].predicted_value, 68.2);
        assert_eq!(forecast.points[5].upper_ci, 62.9);
    }

    #[test]
    fn wrong_cardinality_rejected() {
        let response = ApiForecastResponse {
            forecast: vec![item(60.0), item(58.0)],
        };
        let err = convert_response(response).unwrap_err();
        assert!(matches!(err, CropCastError::InvalidData(_)));
    }

    #[test]
    fn client_creation() {
        let client = ForecastApiClient::new(ForecastApiConfig {
            base_url: "http://localhost:8000".into(),
            enabled: true,
        });
        assert!(client.config.enabled);
    }
}
