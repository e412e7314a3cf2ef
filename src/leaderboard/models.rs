//! Wire types for the leaderboard endpoint.
//!
//! The envelope is validated here, at the trust boundary: anything that does
//! not match the schema becomes [`FetchError::Parse`] instead of flowing
//! through as partially-filled data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::FetchError;
use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE, FALLBACK_ERROR_MESSAGE};

/// Time window a leaderboard is aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[default]
    #[serde(rename = "all-time")]
    AllTime,
}

impl Period {
    /// All periods, in tab order.
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Monthly, Self::AllTime];

    /// Value sent in the `period` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::AllTime => "all-time",
        }
    }

    /// Display label for period tabs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "This Week",
            Self::Monthly => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period '{0}', expected weekly, monthly or all-time")]
pub struct UnknownPeriod(pub String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "all-time" => Ok(Self::AllTime),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}

/// Parameters of a single leaderboard request.
///
/// Values are passed through unvalidated; the service decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestFilter {
    pub period: Period,
    pub page: u32,
    pub limit: u32,
}

impl RequestFilter {
    #[must_use]
    pub const fn new(period: Period, page: u32, limit: u32) -> Self {
        Self {
            period,
            page,
            limit,
        }
    }

    /// Query string pairs, in the order they are sent.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("period", self.period.as_str().to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::new(Period::AllTime, DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// Opaque identifier that may arrive as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One contributor's aggregate record for a period.
///
/// `total_contributions >= post_count` is an upstream property and is not
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: Identifier,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub post_count: u64,
    pub total_contributions: u64,
    /// Badges are only counted, so their contents are left undecoded.
    #[serde(default)]
    pub badges: Vec<serde_json::Value>,
}

/// Payload of a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    /// Entries already ranked by the service; position is rank.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Number of entries matching the filter, regardless of page size.
    pub total: u64,
}

impl LeaderboardResponse {
    /// Whether the service holds more entries than this page returned.
    #[must_use]
    pub fn has_more(&self) -> bool {
        (self.leaderboard.len() as u64) < self.total
    }

    fn validate(&self) -> Result<(), FetchError> {
        for entry in &self.leaderboard {
            if entry.name.trim().is_empty() {
                return Err(FetchError::Parse(format!(
                    "Malformed leaderboard response: entry {} has an empty name",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

/// The `{ success, data?, error? }` envelope every response is wrapped in.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<LeaderboardResponse>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LeaderboardEnvelope {
    /// Decode an envelope from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Parse`] if the body is not a valid envelope.
    pub fn decode(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Unwrap the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Application`] when the service reported failure
    /// and [`FetchError::Parse`] when a success envelope carries no usable data.
    pub fn into_result(self) -> Result<LeaderboardResponse, FetchError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            return Err(FetchError::Application(message));
        }

        let data = self.data.ok_or_else(|| {
            FetchError::Parse("Malformed leaderboard response: missing data".to_string())
        })?;
        data.validate()?;
        Ok(data)
    }
}
