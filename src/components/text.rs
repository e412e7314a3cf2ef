//! Plain-text rendering of a leaderboard page, for terminals and logs.

use std::fmt::Write;

use crate::ranking::{LeaderboardBody, LeaderboardPage, PageState};

/// Render a page as aligned text, one line per contributor.
#[must_use]
pub fn render_text(page: &LeaderboardPage) -> String {
    let mut out = format!("{} ({})\n", page.category.label(), page.period.label());

    match &page.state {
        PageState::Loading => out.push_str("Loading...\n"),
        PageState::Failed { message } => {
            let _ = writeln!(out, "Unable to Load Leaderboard: {message}");
        }
        PageState::Ready(LeaderboardBody::Empty { message }) => {
            out.push_str(message);
            out.push('\n');
        }
        PageState::Ready(LeaderboardBody::Ranked(rows)) => {
            for row in rows {
                let verified = if row.verified { " \u{2713}" } else { "" };
                let _ = writeln!(
                    out,
                    "{:>5}  {}{} {}  {} {}  {} Badges",
                    row.tier,
                    row.name,
                    verified,
                    row.handle,
                    row.primary_metric_value,
                    row.primary_metric_label,
                    row.badge_count,
                );
            }
            if page.has_more {
                let _ = writeln!(out, "... {} total", page.total_count);
            }
        }
    }

    out
}
