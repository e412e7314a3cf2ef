//! Card components for leaderboard rows, empty state and loading skeleton.

use maud::{html, Markup, Render};

use super::badge::{RankBadge, StatBadge, VerifiedBadge};
use crate::ranking::{LeaderboardBody, PresentationRow};

/// One ranked contributor.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardRowCard<'a> {
    pub row: &'a PresentationRow,
}

impl<'a> LeaderboardRowCard<'a> {
    #[must_use]
    pub const fn new(row: &'a PresentationRow) -> Self {
        Self { row }
    }
}

impl Render for LeaderboardRowCard<'_> {
    fn render(&self) -> Markup {
        let row = self.row;

        html! {
            li class="leaderboard-row" data-rank=(row.rank) data-tier=(row.tier.name()) data-id=(row.id.to_string()) {
                div class="leaderboard-rank" { (RankBadge::new(row.tier)) }
                div class="leaderboard-avatar" {
                    @if let Some(src) = row.avatar_url.as_deref() {
                        img src=(src) alt=(row.name) loading="lazy";
                    }
                    @if row.verified {
                        span class="avatar-check" { "\u{2713}" }
                    }
                }
                div class="leaderboard-user" {
                    h3 {
                        (row.name)
                        @if row.verified {
                            " " (VerifiedBadge)
                        }
                    }
                    p class="leaderboard-handle" { (row.handle) }
                }
                div class="leaderboard-stats" {
                    (StatBadge::primary(row.primary_metric_value, row.primary_metric_label))
                    (StatBadge::badges(row.badge_count))
                }
            }
        }
    }
}

/// Rendered when a period has no contributors.
#[derive(Debug, Clone, Copy)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="leaderboard-empty" {
                p { (self.message) }
            }
        }
    }
}

/// Ranked list, or the empty state when there is nothing to rank.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardList<'a> {
    pub body: &'a LeaderboardBody,
}

impl<'a> LeaderboardList<'a> {
    #[must_use]
    pub const fn new(body: &'a LeaderboardBody) -> Self {
        Self { body }
    }
}

impl Render for LeaderboardList<'_> {
    fn render(&self) -> Markup {
        match self.body {
            LeaderboardBody::Empty { message } => EmptyState::new(message).render(),
            LeaderboardBody::Ranked(rows) => html! {
                ol class="leaderboard-list" {
                    @for row in rows {
                        (LeaderboardRowCard::new(row))
                    }
                }
            },
        }
    }
}

/// Placeholder rows shown while a fetch is in flight.
#[derive(Debug, Clone, Copy)]
pub struct LoadingSkeleton {
    pub rows: usize,
}

impl Default for LoadingSkeleton {
    fn default() -> Self {
        Self { rows: 5 }
    }
}

impl Render for LoadingSkeleton {
    fn render(&self) -> Markup {
        html! {
            div class="leaderboard-skeleton" aria-busy="true" {
                @for _ in 0..self.rows {
                    div class="skeleton-row" {}
                }
            }
        }
    }
}
