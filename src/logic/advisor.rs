use crate::models::{NitrogenBand, NutrientForecast, Recommendation};

/// Band-independent guidance appended verbatim to every advisory.
pub const SOIL_HEALTH_GUIDANCE: &str = "Additional Soil Health Recommendations:
- Maintain proper soil pH (6.0-7.0) for optimal nutrient availability
- Ensure adequate soil moisture for nutrient uptake
- Consider micronutrient supplements if deficiency symptoms are present
- Practice sustainable soil management to improve long-term fertility";

/// Generate fertilizer advice for every forecast period, in forecast order.
///
/// Pure and total: any finite predicted value maps to exactly one band and
/// one advisory string. No state is retained between calls.
pub fn generate_recommendations(forecast: &NutrientForecast) -> Vec<Recommendation> {
    forecast
        .labeled_points()
        .into_iter()
        .map(|(period_label, point)| {
            let band = NitrogenBand::classify(point.predicted_value);
            Recommendation {
                period_label,
                predicted_value: point.predicted_value,
                band,
                advisory_text: advisory_text(band, point.predicted_value),
            }
        })
        .collect()
}

/// The full advisory for one period: band-specific guidance with the
/// predicted value interpolated, followed by the soil health block.
pub fn advisory_text(band: NitrogenBand, predicted_value: f64) -> String {
    format!(
        "{}\n\n{}",
        band_guidance(band, predicted_value),
        SOIL_HEALTH_GUIDANCE
    )
}

fn band_guidance(band: NitrogenBand, value: f64) -> String {
    match band {
        NitrogenBand::High => format!(
            "High Nitrogen Required: {:.2}\n\
             \n\
             - Apply high-nitrogen fertilizers like Ammonium Nitrate or Urea\n\
             - Recommended application rate: 2.5-3.0 kg per acre\n\
             - Apply in split doses to prevent nitrogen runoff\n\
             - Monitor plants for signs of excess nitrogen (excessive vegetative growth)\n\
             - Consider soil testing before application",
            value
        ),
        NitrogenBand::ModerateHigh => format!(
            "Moderate-High Nitrogen Required: {:.2}\n\
             \n\
             - Apply balanced NPK fertilizer with higher N content (e.g., 20-10-10)\n\
             - Recommended application rate: 2.0-2.5 kg per acre\n\
             - Focus on slow-release nitrogen sources\n\
             - For leafy crops, consider foliar nitrogen application\n\
             - Monitor soil moisture to maximize nitrogen uptake",
            value
        ),
        NitrogenBand::Moderate => format!(
            "Moderate Nitrogen Required: {:.2}\n\
             \n\
             - Apply balanced NPK fertilizer (e.g., 15-15-15)\n\
             - Recommended application rate: 1.5-2.0 kg per acre\n\
             - Incorporate organic matter to improve nitrogen retention\n\
             - Consider crop rotation with legumes in future planning\n\
             - Monitor for signs of nitrogen deficiency (yellowing of older leaves)",
            value
        ),
        NitrogenBand::LowModerate => format!(
            "Low-Moderate Nitrogen Required: {:.2}\n\
             \n\
             - Apply light nitrogen fertilization (e.g., 10-10-10)\n\
             - Recommended application rate: 1.0-1.5 kg per acre\n\
             - Consider organic alternatives like compost or manure\n\
             - Implement cover crops to build soil nitrogen naturally\n\
             - Avoid over-application which may lead to nutrient runoff",
            value
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastPoint;

    fn forecast_of(values: &[f64]) -> NutrientForecast {
        NutrientForecast::new(
            values
                .iter()
                .map(|&v| ForecastPoint {
                    predicted_value: v,
                    lower_ci: v - 5.0,
                    upper_ci: v + 5.0,
                })
                .collect(),
        )
    }

    #[test]
    fn high_band_text() {
        let recs = generate_recommendations(&forecast_of(&[85.3]));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].advisory_text.contains("High Nitrogen"));
        assert!(recs[0].advisory_text.contains("85.30"));
        assert!(recs[0].advisory_text.contains("Ammonium Nitrate"));
    }

    #[test]
    fn moderate_high_band_text() {
        let recs = generate_recommendations(&forecast_of(&[62.0]));
        assert!(recs[0].advisory_text.contains("Moderate-High"));
        assert!(recs[0].advisory_text.contains("20-10-10"));
    }

    #[test]
    fn moderate_band_text() {
        let recs = generate_recommendations(&forecast_of(&[47.5]));
        assert!(recs[0].advisory_text.contains("Moderate Nitrogen"));
        assert!(!recs[0].advisory_text.contains("Moderate-High"));
        assert!(recs[0].advisory_text.contains("15-15-15"));
    }

    #[test]
    fn low_moderate_band_text() {
        for value in [40.0, 0.0, -3.2] {
            let recs = generate_recommendations(&forecast_of(&[value]));
            assert!(
                recs[0].advisory_text.contains("Low-Moderate"),
                "value {} should fall in the lowest band",
                value
            );
        }
    }

    #[test]
    fn exact_threshold_excluded_from_higher_band() {
        // 70.0 is not "High"; 70.01 is.
        let recs = generate_recommendations(&forecast_of(&[70.0, 70.01]));
        assert_eq!(recs[0].band, NitrogenBand::ModerateHigh);
        assert_eq!(recs[1].band, NitrogenBand::High);
    }

    #[test]
    fn soil_health_suffix_on_every_band() {
        let recs = generate_recommendations(&forecast_of(&[85.0, 62.0, 47.0, 20.0]));
        for rec in &recs {
            assert!(rec.advisory_text.contains(SOIL_HEALTH_GUIDANCE));
        }
    }

    #[test]
    fn one_recommendation_per_period_in_order() {
        let recs = generate_recommendations(&forecast_of(&[72.0, 64.0, 58.0, 51.0, 44.0, 38.0]));
        assert_eq!(recs.len(), 6);
        let labels: Vec<&str> = recs.iter().map(|r| r.period_label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Month 1", "Month 2", "Month 3", "Month 4", "Month 5", "Month 6"]
        );
    }

    #[test]
    fn empty_forecast_yields_no_recommendations() {
        let recs = generate_recommendations(&forecast_of(&[]));
        assert!(recs.is_empty());
    }
}
