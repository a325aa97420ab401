use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::recommender::{DEFAULT_HIGH_MATCH_THRESHOLD, DEFAULT_RECOMMENDED_THRESHOLD};
use crate::models::{AttendanceWeights, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub attendance: AttendanceConfig,
}

/// Match score points per signal
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_level_weight")]
    pub level: f64,
    #[serde(default = "default_event_type_weight")]
    pub event_type: f64,
    #[serde(default = "default_locality_weight")]
    pub locality: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            level: default_level_weight(),
            event_type: default_event_type_weight(),
            locality: default_locality_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            level: config.level,
            event_type: config.event_type,
            locality: config.locality,
        }
    }
}

fn default_skills_weight() -> f64 { 40.0 }
fn default_level_weight() -> f64 { 30.0 }
fn default_event_type_weight() -> f64 { 20.0 }
fn default_locality_weight() -> f64 { 10.0 }

/// Attendance probability factors
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    #[serde(default = "default_match_factor")]
    pub match_score: f64,
    #[serde(default = "default_history_factor")]
    pub history: f64,
    #[serde(default = "default_popularity_factor")]
    pub popularity: f64,
    #[serde(default = "default_rating_points")]
    pub rating: f64,
    #[serde(default = "default_history_target")]
    pub history_target: f64,
    #[serde(default = "default_neutral_history_rate")]
    pub neutral_history_rate: f64,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_factor(),
            history: default_history_factor(),
            popularity: default_popularity_factor(),
            rating: default_rating_points(),
            history_target: default_history_target(),
            neutral_history_rate: default_neutral_history_rate(),
        }
    }
}

impl From<&AttendanceConfig> for AttendanceWeights {
    fn from(config: &AttendanceConfig) -> Self {
        Self {
            match_score: config.match_score,
            history: config.history,
            popularity: config.popularity,
            rating: config.rating,
            history_target: config.history_target,
            neutral_history_rate: config.neutral_history_rate,
        }
    }
}

fn default_match_factor() -> f64 { 0.4 }
fn default_history_factor() -> f64 { 0.3 }
fn default_popularity_factor() -> f64 { 0.2 }
fn default_rating_points() -> f64 { 10.0 }
fn default_history_target() -> f64 { 20.0 }
fn default_neutral_history_rate() -> f64 { 50.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_recommended_threshold")]
    pub recommended_threshold: u8,
    #[serde(default = "default_high_match_threshold")]
    pub high_match_threshold: u8,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            recommended_threshold: default_recommended_threshold(),
            high_match_threshold: default_high_match_threshold(),
        }
    }
}

fn default_recommended_threshold() -> u8 { DEFAULT_RECOMMENDED_THRESHOLD }
fn default_high_match_threshold() -> u8 { DEFAULT_HIGH_MATCH_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    Pretty,
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EVENTHUB_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EVENTHUB__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EVENTHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EVENTHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
