use thiserror::Error;

/// Why a leaderboard fetch did not produce data.
///
/// The query state only ever stores the rendered message; the variants exist
/// so callers using [`LeaderboardSource::fetch`](super::LeaderboardSource::fetch)
/// directly can tell the failure classes apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection, DNS, timeout, body read).
    #[error("{0}")]
    Transport(String),
    /// The service answered but reported failure.
    #[error("{0}")]
    Application(String),
    /// The response body did not match the expected envelope.
    #[error("{0}")]
    Parse(String),
}

impl FetchError {
    /// Short class name, used as a structured logging field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Application(_) => "application",
            Self::Parse(_) => "parse",
        }
    }

    /// The human-readable message shown to users.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(m) | Self::Application(m) | Self::Parse(m) => m,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Leaderboard request timed out".to_string()
        } else if err.is_connect() {
            "Could not connect to the leaderboard service".to_string()
        } else {
            format!("Leaderboard request failed: {err}")
        };
        Self::Transport(message)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("Malformed leaderboard response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = FetchError::Application("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(err.message(), "rate limited");
        assert_eq!(err.kind(), "application");
    }

    #[test]
    fn test_from_serde_error_is_parse() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "parse");
        assert!(err.message().starts_with("Malformed leaderboard response"));
    }
}
