use std::env;
use thiserror::Error;
use warikan_domain::{
    RoundingMode, SettlementContext,
    services::{DEFAULT_DEAD_ZONE_UNITS, MAX_SETTLEMENT_SCALE},
};

const SCALE_VAR: &str = "WARIKAN_SCALE";
const ROUNDING_VAR: &str = "WARIKAN_ROUNDING";
const DEAD_ZONE_VAR: &str = "WARIKAN_DEAD_ZONE";
const OUTPUT_VAR: &str = "WARIKAN_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("WARIKAN_SCALE must be a non-negative integer, got '{0}'")]
    InvalidScale(String),
    #[error("WARIKAN_SCALE must be at most {max}, got {0}", max = MAX_SETTLEMENT_SCALE)]
    ScaleOutOfRange(u32),
    #[error("WARIKAN_ROUNDING must be 'half-up' or 'half-even', got '{0}'")]
    InvalidRounding(String),
    #[error("WARIKAN_DEAD_ZONE must be an integer of at least 1, got '{0}'")]
    InvalidDeadZone(String),
    #[error("WARIKAN_OUTPUT must be 'text' or 'json', got '{0}'")]
    InvalidOutput(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settlement policy and output format for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub context: SettlementContext,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset or blank values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let scale = match read(SCALE_VAR) {
            Some(raw) => parse_scale(&raw)?,
            None => 0,
        };
        let rounding_mode = match read(ROUNDING_VAR) {
            Some(raw) => parse_rounding(&raw)?,
            None => RoundingMode::default(),
        };
        let dead_zone = match read(DEAD_ZONE_VAR) {
            Some(raw) => parse_dead_zone(&raw)?,
            None => DEFAULT_DEAD_ZONE_UNITS,
        };
        let output = match read(OUTPUT_VAR) {
            Some(raw) => parse_output(&raw)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            context: SettlementContext {
                scale,
                rounding_mode,
                dead_zone,
            },
            output,
        })
    }
}

fn parse_scale(raw: &str) -> Result<u32, ConfigError> {
    let scale: u32 = raw
        .parse()
        .map_err(|_| ConfigError::InvalidScale(raw.to_owned()))?;
    if scale > MAX_SETTLEMENT_SCALE {
        return Err(ConfigError::ScaleOutOfRange(scale));
    }
    Ok(scale)
}

fn parse_rounding(raw: &str) -> Result<RoundingMode, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "half-up" => Ok(RoundingMode::HalfUp),
        "half-even" => Ok(RoundingMode::HalfEven),
        _ => Err(ConfigError::InvalidRounding(raw.to_owned())),
    }
}

fn parse_dead_zone(raw: &str) -> Result<i64, ConfigError> {
    raw.parse::<i64>()
        .ok()
        .filter(|units| *units >= 1)
        .ok_or_else(|| ConfigError::InvalidDeadZone(raw.to_owned()))
}

fn parse_output(raw: &str) -> Result<OutputFormat, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidOutput(raw.to_owned())),
    }
}
