use crate::error::{CropCastError, Result};
use crate::models::{Dataset, HistoricalRecord};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const EXPECTED_HEADER: [&str; 10] = [
    "Date",
    "N",
    "P",
    "K",
    "Temperature",
    "Humidity",
    "Wind_Speed",
    "Crop_Yield",
    "Soil_Quality",
    "Crop_Type",
];

/// Load the historical crop dataset from a CSV file, streaming line by line.
///
/// The header row must match the documented schema exactly. Any row that
/// fails to parse aborts the load with the offending row number.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        CropCastError::InvalidData(format!("Cannot open dataset {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| CropCastError::InvalidData("Dataset is empty".into()))??;
    validate_header(&header)?;

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is row 1; data starts at row 2
        let row = index + 2;
        let record = parse_record(&line)
            .map_err(|e| CropCastError::InvalidData(format!("Row {}: {}", row, e)))?;
        records.push(record);
    }

    tracing::debug!(
        "Loaded {} records from {}",
        records.len(),
        path.display()
    );

    Ok(Dataset::new(records, path.display().to_string()))
}

fn validate_header(header: &str) -> Result<()> {
    let fields: Vec<&str> = header.split(',').map(str::trim).collect();
    if fields != EXPECTED_HEADER {
        return Err(CropCastError::InvalidData(format!(
            "Unexpected CSV header: expected '{}', got '{}'",
            EXPECTED_HEADER.join(","),
            header
        )));
    }
    Ok(())
}

/// Parse one data row. Fields are positional per the header schema.
pub fn parse_record(line: &str) -> std::result::Result<HistoricalRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != EXPECTED_HEADER.len() {
        return Err(format!(
            "expected {} fields, got {}",
            EXPECTED_HEADER.len(),
            fields.len()
        ));
    }

    let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d")
        .map_err(|e| format!("invalid Date '{}': {}", fields[0], e))?;

    let numeric = |idx: usize| -> std::result::Result<f64, String> {
        fields[idx]
            .parse::<f64>()
            .map_err(|_| format!("invalid {} value '{}'", EXPECTED_HEADER[idx], fields[idx]))
    };

    Ok(HistoricalRecord {
        date,
        n: numeric(1)?,
        p: numeric(2)?,
        k: numeric(3)?,
        temperature: numeric(4)?,
        humidity: numeric(5)?,
        wind_speed: numeric(6)?,
        crop_yield: numeric(7)?,
        soil_quality: numeric(8)?,
        crop_type: fields[9].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ROW: &str = "2023-04-15,62.5,31.2,24.8,74.3,58.1,6.2,112.4,7.8,Wheat";

    #[test]
    fn parse_valid_row() {
        let record = parse_record(SAMPLE_ROW).unwrap();
        assert_eq!(record.date, "2023-04-15".parse().unwrap());
        assert_eq!(record.n, 62.5);
        assert_eq!(record.soil_quality, 7.8);
        assert_eq!(record.crop_type, "Wheat");
    }

    #[test]
    fn parse_rejects_short_row() {
        let err = parse_record("2023-04-15,62.5,31.2").unwrap_err();
        assert!(err.contains("expected 10 fields"));
    }

    #[test]
    fn parse_rejects_bad_date() {
        let row = "15/04/2023,62.5,31.2,24.8,74.3,58.1,6.2,112.4,7.8,Wheat";
        let err = parse_record(row).unwrap_err();
        assert!(err.contains("invalid Date"));
    }

    #[test]
    fn parse_rejects_non_numeric_field() {
        let row = "2023-04-15,high,31.2,24.8,74.3,58.1,6.2,112.4,7.8,Wheat";
        let err = parse_record(row).unwrap_err();
        assert!(err.contains("invalid N value"));
    }

    #[test]
    fn header_validation() {
        assert!(validate_header(&EXPECTED_HEADER.join(",")).is_ok());
        assert!(validate_header("Date,N,P,K").is_err());
    }
}
