//! The full leaderboard panel: heading, filters and body.

use maud::{html, Markup, Render};

use super::alert::ErrorPanel;
use super::card::{LeaderboardList, LoadingSkeleton};
use super::tabs::{category_tabs, period_tabs};
use crate::ranking::{LeaderboardPage, PageState};

/// Renders a [`LeaderboardPage`].
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardPanel<'a> {
    pub page: &'a LeaderboardPage,
}

impl<'a> LeaderboardPanel<'a> {
    #[must_use]
    pub const fn new(page: &'a LeaderboardPage) -> Self {
        Self { page }
    }
}

impl Render for LeaderboardPanel<'_> {
    fn render(&self) -> Markup {
        let page = self.page;

        // Errors replace the whole panel, filters included.
        if let PageState::Failed { message } = &page.state {
            return ErrorPanel::new(message).render();
        }

        html! {
            section class="leaderboard" {
                header {
                    h1 { "Leaderboards" }
                    p { "Celebrate the most active members of our community" }
                }
                (period_tabs(page.period, page.category))
                (category_tabs(page.period, page.category))
                div class="leaderboard-panel" {
                    h2 { (page.category.label()) }
                    @match &page.state {
                        PageState::Loading => (LoadingSkeleton::default()),
                        PageState::Ready(body) => (LeaderboardList::new(body)),
                        PageState::Failed { .. } => {},
                    }
                    @if page.has_more {
                        p class="leaderboard-more" {
                            "Showing the top " (shown_rows(page)) " of " (page.total_count)
                        }
                    }
                }
            }
        }
    }
}

fn shown_rows(page: &LeaderboardPage) -> usize {
    match &page.state {
        PageState::Ready(body) => body.rows().len(),
        PageState::Loading | PageState::Failed { .. } => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::{Identifier, LeaderboardEntry, Period};
    use crate::ranking::{Category, LeaderboardBody};

    fn page(state: PageState) -> LeaderboardPage {
        LeaderboardPage {
            period: Period::Weekly,
            category: Category::Requestors,
            state,
            has_more: false,
            total_count: 0,
        }
    }

    #[test]
    fn test_failed_page_is_error_panel_only() {
        let html = LeaderboardPanel::new(&page(PageState::Failed {
            message: "rate limited".to_string(),
        }))
        .render()
        .into_string();
        assert!(html.contains("Try Again"));
        assert!(!html.contains("leaderboard-tabs"));
    }

    #[test]
    fn test_loading_page_shows_skeleton() {
        let html = LeaderboardPanel::new(&page(PageState::Loading))
            .render()
            .into_string();
        assert!(html.contains("leaderboard-skeleton"));
        assert!(html.contains(">Requestors<"));
    }

    #[test]
    fn test_has_more_footer() {
        let entries = vec![LeaderboardEntry {
            id: Identifier::Number(1_i64.into()),
            name: "Ann".to_string(),
            avatar_url: None,
            post_count: 1,
            total_contributions: 1,
            badges: Vec::new(),
        }];
        let mut page = page(PageState::Ready(LeaderboardBody::derive(
            &entries,
            Category::Requestors,
        )));
        page.has_more = true;
        page.total_count = 120;

        let html = LeaderboardPanel::new(&page).render().into_string();
        assert!(html.contains("Showing the top 1 of 120"));
    }
}
