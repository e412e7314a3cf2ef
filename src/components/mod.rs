//! Rendering components for the leaderboard.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: The full leaderboard panel
//! - `tabs`: Period and category tab navigation
//! - `badge`: Rank tier, verified and stat badges
//! - `card`: Row cards, empty state and loading skeleton
//! - `alert`: Error panel with a retry action
//! - `text`: Plain-text rendering
//!
//! # Example
//!
//! ```ignore
//! use maud::Render;
//! use community_leaderboard::components::LeaderboardPanel;
//! use community_leaderboard::ranking::{Category, LeaderboardPage};
//!
//! let page = LeaderboardPage::from_view(&query.snapshot(), Category::TopGivers);
//! let html = LeaderboardPanel::new(&page).render().into_string();
//! ```

pub mod alert;
pub mod badge;
pub mod card;
pub mod layout;
pub mod tabs;
pub mod text;

pub use alert::ErrorPanel;
pub use badge::{RankBadge, StatBadge, VerifiedBadge};
pub use card::{EmptyState, LeaderboardList, LeaderboardRowCard, LoadingSkeleton};
pub use layout::LeaderboardPanel;
pub use tabs::{category_tabs, leaderboard_href, period_tabs, Tab, TabGroup};
pub use text::render_text;

/// Re-export maud for convenience
pub use maud::{html, Markup, Render};
