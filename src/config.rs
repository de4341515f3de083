use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::ApiSettings;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vim_mode: bool,
    /// Probability (0.0..=1.0) that a simulated call fails
    pub failure_rate: f64,
    pub latency: LatencyConfig,
    /// Lead dataset to serve instead of the bundled one
    pub dataset_path: Option<PathBuf>,
    /// Location of the key-value store (default: platform data dir)
    pub storage_path: Option<PathBuf>,
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            failure_rate: 0.1,
            latency: LatencyConfig::default(),
            dataset_path: None,
            storage_path: None,
            toast_duration_ms: 3000,
        }
    }
}

/// Artificial delay per simulated call, in milliseconds
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub fetch_leads: u64,
    pub update_lead: u64,
    pub create_opportunity: u64,
    pub fetch_opportunities: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            fetch_leads: 800,
            update_lead: 500,
            create_opportunity: 600,
            fetch_opportunities: 400,
        }
    }
}

impl Config {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            failure_rate: self.failure_rate,
            fetch_leads_delay: Duration::from_millis(self.latency.fetch_leads),
            update_lead_delay: Duration::from_millis(self.latency.update_lead),
            create_opportunity_delay: Duration::from_millis(self.latency.create_opportunity),
            fetch_opportunities_delay: Duration::from_millis(self.latency.fetch_opportunities),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.failure_rate, 0.1);
        assert_eq!(config.latency.fetch_leads, 800);
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_partial_latency_override() {
        let config: Config = serde_yaml::from_str(
            "failure_rate: 0.5\nlatency:\n  update_lead: 50\n",
        )
        .unwrap();
        let settings = config.api_settings();
        assert_eq!(settings.failure_rate, 0.5);
        assert_eq!(settings.update_lead_delay, Duration::from_millis(50));
        assert_eq!(settings.fetch_leads_delay, Duration::from_millis(800));
    }
}
