//! Badge components for rank tiers, verification and row statistics.

use maud::{html, Markup, Render};

use crate::ranking::TierMarker;

impl TierMarker {
    /// Get the CSS class for this marker.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Crown => "rank-badge rank-crown",
            Self::Medal => "rank-badge rank-medal",
            Self::Award => "rank-badge rank-award",
            Self::Ordinal(_) => "rank-badge rank-ordinal",
        }
    }

    /// Get the title/tooltip for this marker.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Crown => "First place",
            Self::Medal => "Second place",
            Self::Award => "Third place",
            Self::Ordinal(_) => "Rank",
        }
    }
}

/// The rank column: a podium icon for ranks 1-3, `#N` otherwise.
#[derive(Debug, Clone, Copy)]
pub struct RankBadge {
    pub tier: TierMarker,
}

impl RankBadge {
    #[must_use]
    pub const fn new(tier: TierMarker) -> Self {
        Self { tier }
    }
}

impl Render for RankBadge {
    fn render(&self) -> Markup {
        html! {
            span class=(self.tier.css_class()) title=(self.tier.title()) {
                (self.tier.to_string())
            }
        }
    }
}

/// "Verified" pill shown next to podium names.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifiedBadge;

impl Render for VerifiedBadge {
    fn render(&self) -> Markup {
        html! {
            span class="verified-badge" title="Verified" {
                "\u{2713}" " Verified" // ✓
            }
        }
    }
}

/// A number with a caption underneath, e.g. "10 / Giveaways".
#[derive(Debug, Clone, Copy)]
pub struct StatBadge {
    pub value: u64,
    pub label: &'static str,
    pub class: &'static str,
}

impl StatBadge {
    /// The category-dependent headline metric.
    #[must_use]
    pub const fn primary(value: u64, label: &'static str) -> Self {
        Self {
            value,
            label,
            class: "stat stat-primary",
        }
    }

    /// Number of badges held.
    #[must_use]
    pub const fn badges(count: usize) -> Self {
        Self {
            value: count as u64,
            label: "Badges",
            class: "stat stat-badges",
        }
    }
}

impl Render for StatBadge {
    fn render(&self) -> Markup {
        html! {
            div class=(self.class) {
                div class="stat-value" { (self.value) }
                div class="stat-label" { (self.label) }
            }
        }
    }
}
