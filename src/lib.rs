//! Community leaderboard library.
//!
//! Fetches ranked contributor leaderboards from the leaderboard service,
//! tracks the request lifecycle, and derives render-ready rows (rank, tier
//! marker, category metric, badge count) for each category tab.

pub mod components;
pub mod config;
pub mod constants;
pub mod leaderboard;
pub mod ranking;
