use std::fmt;

use crate::constants::EMPTY_LEADERBOARD_MESSAGE;
use crate::leaderboard::{Identifier, LeaderboardEntry};

use super::category::{Category, Metric};

/// Rank decoration. Ranks 1-3 get a podium marker, the rest a plain ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierMarker {
    Crown,
    Medal,
    Award,
    Ordinal(usize),
}

impl TierMarker {
    #[must_use]
    pub const fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::Crown,
            2 => Self::Medal,
            3 => Self::Award,
            n => Self::Ordinal(n),
        }
    }

    /// Whether this is one of the three podium markers.
    #[must_use]
    pub const fn is_podium(&self) -> bool {
        !matches!(self, Self::Ordinal(_))
    }

    /// Stable name, rendered as the `data-tier` attribute.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Crown => "crown",
            Self::Medal => "medal",
            Self::Award => "award",
            Self::Ordinal(_) => "ordinal",
        }
    }
}

impl fmt::Display for TierMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crown => f.pad("\u{1F451}"), // 👑
            Self::Medal => f.pad("\u{1F948}"), // 🥈
            Self::Award => f.pad("\u{1F949}"), // 🥉
            Self::Ordinal(n) => f.pad(&format!("#{n}")),
        }
    }
}

/// Render-ready facts for one leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRow {
    /// 1-based position in the service's ordering.
    pub rank: usize,
    pub tier: TierMarker,
    /// Cosmetic marker shown for the podium.
    pub verified: bool,
    pub id: Identifier,
    pub name: String,
    pub handle: String,
    pub avatar_url: Option<String>,
    pub primary_metric: Metric,
    pub primary_metric_value: u64,
    pub primary_metric_label: &'static str,
    pub badge_count: usize,
}

impl PresentationRow {
    #[must_use]
    pub fn new(rank: usize, entry: &LeaderboardEntry, category: Category) -> Self {
        let tier = TierMarker::for_rank(rank);
        let metric = category.primary_metric();
        Self {
            rank,
            tier,
            verified: tier.is_podium(),
            id: entry.id.clone(),
            name: entry.name.clone(),
            handle: display_handle(&entry.name),
            avatar_url: entry.avatar_url.clone(),
            primary_metric: metric,
            primary_metric_value: metric.value(entry),
            primary_metric_label: metric.label(),
            badge_count: entry.badges.len(),
        }
    }
}

/// One row per entry, ranked by position. Entries are never re-sorted.
#[must_use]
pub fn derive_rows(entries: &[LeaderboardEntry], category: Category) -> Vec<PresentationRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| PresentationRow::new(i + 1, entry, category))
        .collect()
}

/// Body of the leaderboard panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardBody {
    /// No entries for the period. Terminal, not an error.
    Empty { message: &'static str },
    Ranked(Vec<PresentationRow>),
}

impl LeaderboardBody {
    #[must_use]
    pub fn derive(entries: &[LeaderboardEntry], category: Category) -> Self {
        if entries.is_empty() {
            Self::Empty {
                message: EMPTY_LEADERBOARD_MESSAGE,
            }
        } else {
            Self::Ranked(derive_rows(entries, category))
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[PresentationRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Ranked(rows) => rows,
        }
    }
}

/// `@` handle shown under a contributor's name.
///
/// Lower-cases the name and drops its first space, so "Mary Ann Lee" becomes
/// "@maryann lee".
#[must_use]
pub fn display_handle(name: &str) -> String {
    format!("@{}", name.to_lowercase().replacen(' ', "", 1))
}
