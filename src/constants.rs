//! Shared constants used across the application.

/// User agent string sent with leaderboard requests.
pub const USER_AGENT: &str = concat!("community-leaderboard/", env!("CARGO_PKG_VERSION"));

/// Path of the leaderboard endpoint, relative to the configured base URL.
pub const LEADERBOARD_ENDPOINT: &str = "/api/leaderboard";

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when none is given.
pub const DEFAULT_LIMIT: u32 = 50;

/// Message surfaced when the service reports failure without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch leaderboard";

/// Message shown in place of the ranked list when a period has no entries.
pub const EMPTY_LEADERBOARD_MESSAGE: &str = "No contributors found for this period.";
