use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct LifecycleConfig {
    pub segment: SegmentThresholds,
    pub roadmap: RoadmapSchedule,
    pub urgency: UrgencyThresholds,
    pub theme: String,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentThresholds {
    pub superfan_spend: Decimal,
    pub superfan_orders: u32,
    pub fan_orders: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapSchedule {
    pub first_email_minutes: i64,
    pub second_email_hours: i64,
    pub final_reminder_hours: i64,
    pub expiry_days: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrgencyThresholds {
    pub hot_hours: i64,
    pub warm_hours: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl RoadmapSchedule {
    pub fn first_email(&self) -> TimeDelta {
        TimeDelta::minutes(self.first_email_minutes)
    }

    pub fn second_email(&self) -> TimeDelta {
        TimeDelta::hours(self.second_email_hours)
    }

    pub fn final_reminder(&self) -> TimeDelta {
        TimeDelta::hours(self.final_reminder_hours)
    }

    pub fn expiry(&self) -> TimeDelta {
        TimeDelta::days(self.expiry_days)
    }
}

impl UrgencyThresholds {
    pub fn hot(&self) -> TimeDelta {
        TimeDelta::hours(self.hot_hours)
    }

    pub fn warm(&self) -> TimeDelta {
        TimeDelta::hours(self.warm_hours)
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            segment: SegmentThresholds {
                superfan_spend: Decimal::from(200),
                superfan_orders: 5,
                fan_orders: 2,
            },
            roadmap: RoadmapSchedule {
                first_email_minutes: 30,
                second_email_hours: 24,
                final_reminder_hours: 48,
                expiry_days: 7,
            },
            urgency: UrgencyThresholds { hot_hours: 1, warm_hours: 24 },
            theme: "journey".to_string(),
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub theme: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    segment: Option<SegmentPatch>,
    roadmap: Option<RoadmapPatch>,
    urgency: Option<UrgencyPatch>,
    theme: Option<String>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct SegmentPatch {
    superfan_spend: Option<Decimal>,
    superfan_orders: Option<u32>,
    fan_orders: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct RoadmapPatch {
    first_email_minutes: Option<i64>,
    second_email_hours: Option<i64>,
    final_reminder_hours: Option<i64>,
    expiry_days: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct UrgencyPatch {
    hot_hours: Option<i64>,
    warm_hours: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl LifecycleConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("stagepass.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(segment) = patch.segment {
            if let Some(superfan_spend) = segment.superfan_spend {
                self.segment.superfan_spend = superfan_spend;
            }
            if let Some(superfan_orders) = segment.superfan_orders {
                self.segment.superfan_orders = superfan_orders;
            }
            if let Some(fan_orders) = segment.fan_orders {
                self.segment.fan_orders = fan_orders;
            }
        }

        if let Some(roadmap) = patch.roadmap {
            if let Some(first_email_minutes) = roadmap.first_email_minutes {
                self.roadmap.first_email_minutes = first_email_minutes;
            }
            if let Some(second_email_hours) = roadmap.second_email_hours {
                self.roadmap.second_email_hours = second_email_hours;
            }
            if let Some(final_reminder_hours) = roadmap.final_reminder_hours {
                self.roadmap.final_reminder_hours = final_reminder_hours;
            }
            if let Some(expiry_days) = roadmap.expiry_days {
                self.roadmap.expiry_days = expiry_days;
            }
        }

        if let Some(urgency) = patch.urgency {
            if let Some(hot_hours) = urgency.hot_hours {
                self.urgency.hot_hours = hot_hours;
            }
            if let Some(warm_hours) = urgency.warm_hours {
                self.urgency.warm_hours = warm_hours;
            }
        }

        if let Some(theme) = patch.theme {
            self.theme = theme;
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(theme) = read_env("STAGEPASS_THEME") {
            self.theme = theme;
        }
        if let Some(level) = read_env("STAGEPASS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = read_env("STAGEPASS_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }
        if let Some(value) = read_env("STAGEPASS_SUPERFAN_SPEND") {
            self.segment.superfan_spend = value.parse().map_err(|_| {
                ConfigError::InvalidEnvOverride { key: "STAGEPASS_SUPERFAN_SPEND".to_string(), value }
            })?;
        }
        if let Some(value) = read_env("STAGEPASS_SUPERFAN_ORDERS") {
            self.segment.superfan_orders = value.parse().map_err(|_| {
                ConfigError::InvalidEnvOverride {
                    key: "STAGEPASS_SUPERFAN_ORDERS".to_string(),
                    value,
                }
            })?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.segment.fan_orders < 2 {
            return Err(ConfigError::Validation(
                "segment.fan_orders must be at least 2 (1 order is the new-fan tier)".to_string(),
            ));
        }
        if self.segment.superfan_orders <= self.segment.fan_orders {
            return Err(ConfigError::Validation(
                "segment.superfan_orders must exceed segment.fan_orders".to_string(),
            ));
        }
        if self.segment.superfan_spend <= Decimal::ZERO {
            return Err(ConfigError::Validation(
                "segment.superfan_spend must be positive".to_string(),
            ));
        }

        let first = self.roadmap.first_email();
        let second = self.roadmap.second_email();
        let last = self.roadmap.final_reminder();
        let expiry = self.roadmap.expiry();
        if !(first < second && second < last && last < expiry) {
            return Err(ConfigError::Validation(
                "roadmap thresholds must be strictly increasing up to the expiry horizon"
                    .to_string(),
            ));
        }

        if self.urgency.hot() >= self.urgency.warm() {
            return Err(ConfigError::Validation(
                "urgency.hot_hours must be below urgency.warm_hours".to_string(),
            ));
        }

        Ok(())
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = read_env("STAGEPASS_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from("stagepass.toml");
    default.exists().then_some(default)
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}
