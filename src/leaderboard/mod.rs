//! Leaderboard query client.
//!
//! [`LeaderboardClient`] talks to the leaderboard endpoint over HTTP;
//! [`LeaderboardQuery`] drives it and keeps the observable request state.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::{LeaderboardClient, LeaderboardSource};
pub use error::FetchError;
pub use models::{
    Identifier, LeaderboardEntry, LeaderboardEnvelope, LeaderboardResponse, Period,
    RequestFilter, UnknownPeriod,
};
pub use query::{
    LeaderboardQuery, LeaderboardView, QueryOptions, RequestLifecycle, ResponseOrdering,
    UnknownOrdering,
};
