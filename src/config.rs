use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Resolved to today at invocation time when absent.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            start_date: default_start_date(),
            end_date: None,
        }
    }
}

fn default_symbol() -> String {
    "^NSEI".to_string()
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Loads the configuration file, falling back to defaults when it does not
/// exist. A present but malformed file is an error.
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
