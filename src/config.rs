use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::leaderboard::{Period, QueryOptions, RequestFilter, ResponseOrdering};
use crate::ranking::Category;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Leaderboard service
    pub base_url: String,
    pub http_timeout: Option<Duration>,

    // Query
    pub period: Period,
    pub page: u32,
    pub limit: u32,
    pub auto_fetch: bool,
    pub response_ordering: ResponseOrdering,

    // Presentation
    pub category: Category,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per ranked contributor
    #[default]
    Text,
    /// HTML fragment rendered with the leaderboard components
    Html,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Leaderboard service
            base_url: env_or_default("LEADERBOARD_BASE_URL", "http://localhost:3000"),
            http_timeout: parse_optional_env_u64("HTTP_TIMEOUT_SECS")?.map(Duration::from_secs),

            // Query
            period: parse_period(&env_or_default("LEADERBOARD_PERIOD", "all-time"))?,
            page: parse_env_u32("LEADERBOARD_PAGE", DEFAULT_PAGE)?,
            limit: parse_env_u32("LEADERBOARD_LIMIT", DEFAULT_LIMIT)?,
            auto_fetch: parse_env_bool("LEADERBOARD_AUTO_FETCH", true)?,
            response_ordering: parse_ordering(&env_or_default(
                "LEADERBOARD_RESPONSE_ORDERING",
                "latest-issued",
            ))?,

            // Presentation
            category: parse_category(&env_or_default("LEADERBOARD_CATEGORY", "top-givers"))?,
            output: parse_output(&env_or_default("LEADERBOARD_OUTPUT", "text"))?,
        })
    }

    /// Defaults for every field, without reading the environment.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            http_timeout: None,
            period: Period::AllTime,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            auto_fetch: true,
            response_ordering: ResponseOrdering::LatestIssued,
            category: Category::TopGivers,
            output: OutputFormat::Text,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "LEADERBOARD_BASE_URL".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "LEADERBOARD_BASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if self.page == 0 {
            return Err(ConfigError::InvalidValue {
                name: "LEADERBOARD_PAGE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.limit == 0 {
            return Err(ConfigError::InvalidValue {
                name: "LEADERBOARD_LIMIT".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The filter the first fetch uses.
    #[must_use]
    pub const fn filter(&self) -> RequestFilter {
        RequestFilter::new(self.period, self.page, self.limit)
    }

    /// Query options derived from this configuration.
    #[must_use]
    pub const fn query_options(&self) -> QueryOptions {
        QueryOptions {
            filter: self.filter(),
            auto_fetch: self.auto_fetch,
            ordering: self.response_ordering,
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_optional_env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => {
            val.parse().map(Some).map_err(|e| ConfigError::ParseInt {
                name: name.to_string(),
                source: e,
            })
        }
        _ => Ok(None),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}

fn parse_period(value: &str) -> Result<Period, ConfigError> {
    value.parse().map_err(|e: crate::leaderboard::UnknownPeriod| {
        ConfigError::InvalidValue {
            name: "LEADERBOARD_PERIOD".to_string(),
            message: e.to_string(),
        }
    })
}

fn parse_ordering(value: &str) -> Result<ResponseOrdering, ConfigError> {
    value.parse().map_err(|e: crate::leaderboard::UnknownOrdering| {
        ConfigError::InvalidValue {
            name: "LEADERBOARD_RESPONSE_ORDERING".to_string(),
            message: e.to_string(),
        }
    })
}

fn parse_category(value: &str) -> Result<Category, ConfigError> {
    value.parse().map_err(|e: crate::ranking::UnknownCategory| {
        ConfigError::InvalidValue {
            name: "LEADERBOARD_CATEGORY".to_string(),
            message: e.to_string(),
        }
    })
}

fn parse_output(value: &str) -> Result<OutputFormat, ConfigError> {
    match value.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "html" => Ok(OutputFormat::Html),
        _ => Err(ConfigError::InvalidValue {
            name: "LEADERBOARD_OUTPUT".to_string(),
            message: format!("must be 'text' or 'html', got '{value}'"),
        }),
    }
}
