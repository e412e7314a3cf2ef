use crate::leaderboard::{LeaderboardView, Period};

use super::category::Category;
use super::rows::LeaderboardBody;

/// What the leaderboard panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Loading,
    /// Shown with a "Try Again" action that re-issues the current filter.
    Failed { message: String },
    Ready(LeaderboardBody),
}

/// Everything needed to render one leaderboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage {
    pub period: Period,
    pub category: Category,
    pub state: PageState,
    pub has_more: bool,
    pub total_count: u64,
}

impl LeaderboardPage {
    /// Derive the page from a query snapshot.
    ///
    /// Loading wins over a stale error, and an error wins over entries left
    /// from an earlier success.
    #[must_use]
    pub fn from_view(view: &LeaderboardView, category: Category) -> Self {
        let state = if view.loading {
            PageState::Loading
        } else if let Some(message) = &view.error {
            PageState::Failed {
                message: message.clone(),
            }
        } else {
            PageState::Ready(LeaderboardBody::derive(&view.entries, category))
        };

        Self {
            period: view.filter.period,
            category,
            state,
            has_more: view.has_more(),
            total_count: view.total_count,
        }
    }
}
