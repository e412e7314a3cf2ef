use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::leaderboard::LeaderboardEntry;

/// Leaderboard category tabs.
///
/// Every category views the same fetched dataset; the category only decides
/// which metric is shown as primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    TopGivers,
    Giveaways,
    Requestors,
    Requests,
    Trending,
}

impl Category {
    /// All categories, in tab order.
    pub const ALL: [Self; 5] = [
        Self::TopGivers,
        Self::Giveaways,
        Self::Requestors,
        Self::Requests,
        Self::Trending,
    ];

    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::TopGivers => "top-givers",
            Self::Giveaways => "giveaways",
            Self::Requestors => "requestors",
            Self::Requests => "requests",
            Self::Trending => "trending",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TopGivers => "Top Givers",
            Self::Giveaways => "Giveaways",
            Self::Requestors => "Requestors",
            Self::Requests => "Requests",
            Self::Trending => "Trending",
        }
    }

    /// The metric displayed as the headline number for this category.
    #[must_use]
    pub const fn primary_metric(&self) -> Metric {
        match self {
            Self::TopGivers => Metric::PostCount,
            Self::Giveaways | Self::Requestors | Self::Requests | Self::Trending => {
                Metric::TotalContributions
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == lowered)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A numeric field of [`LeaderboardEntry`] that can headline a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PostCount,
    TotalContributions,
}

impl Metric {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PostCount => "Giveaways",
            Self::TotalContributions => "Total",
        }
    }

    /// Field accessor for this metric.
    #[must_use]
    pub fn accessor(&self) -> fn(&LeaderboardEntry) -> u64 {
        match self {
            Self::PostCount => |entry: &LeaderboardEntry| entry.post_count,
            Self::TotalContributions => |entry: &LeaderboardEntry| entry.total_contributions,
        }
    }

    #[must_use]
    pub fn value(&self, entry: &LeaderboardEntry) -> u64 {
        (self.accessor())(entry)
    }
}
