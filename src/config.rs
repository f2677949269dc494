use crate::error::{CropCastError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub forecast: ForecastApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Path to the historical crop/soil CSV file
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastApiConfig {
    /// Base URL of the forecast service, e.g. http://localhost:8000
    pub base_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ForecastApiConfig {
    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(CropCastError::Config(format!(
                "Config file not found at {:?}. Run `cropcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropCastError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| CropCastError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cropcast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| CropCastError::Config("Cannot determine config directory".into()))?
            .join("cropcast")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/cropcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropCastError::Config("Cannot determine config directory".into()))?
            .join("cropcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up CropCast!");
        println!();

        println!("Historical Dataset");
        let dataset_path: String = Input::new()
            .with_prompt("  CSV path")
            .default("output.csv".into())
            .interact_text()
            .map_err(|e| CropCastError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Forecast API");
        let base_url: String = Input::new()
            .with_prompt("  Base URL")
            .default("http://localhost:8000".into())
            .interact_text()
            .map_err(|e| CropCastError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            dataset: DatasetConfig { path: dataset_path },
            forecast: ForecastApiConfig {
                base_url,
                enabled: true,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CropCastError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# CropCast Configuration\n# Generated by `cropcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig {
                path: "output.csv".into(),
            },
            forecast: ForecastApiConfig {
                base_url: "http://localhost:8000".into(),
                enabled: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_url_strips_trailing_slash() {
        let cfg = ForecastApiConfig {
            base_url: "http://localhost:8000/".into(),
            enabled: true,
        };
        assert_eq!(cfg.forecast_url(), "http://localhost:8000/forecast");
    }

    #[test]
    fn config_parses_yaml() {
        let yaml = "dataset:\n  path: data/crops.csv\nforecast:\n  base_url: http://api:8000\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dataset.path, "data/crops.csv");
        assert_eq!(config.forecast.base_url, "http://api:8000");
        // enabled defaults to true when omitted
        assert!(config.forecast.enabled);
    }

    #[test]
    fn env_var_substitution() {
        std::env::set_var("CROPCAST_TEST_PATH", "from_env.csv");
        let content = "path: ${CROPCAST_TEST_PATH}";
        let result = Config::substitute_env_vars(content);
        assert_eq!(result, "path: from_env.csv");
    }
}
