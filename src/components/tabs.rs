//! Tab components for switching leaderboard period and category.
//!
//! Tabs are plain links carrying the full `period`/`category` selection in
//! the query string, so each tab renders the other axis unchanged.

use maud::{html, Markup, Render};

use crate::leaderboard::Period;
use crate::ranking::Category;

/// A single tab in a tab group.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Display label for the tab
    pub label: &'static str,
    /// URL/href for the tab link
    pub href: String,
    /// Whether this tab is currently active
    pub active: bool,
}

impl Tab {
    /// Create a new tab.
    #[must_use]
    pub fn new(label: &'static str, href: String) -> Self {
        Self {
            label,
            href,
            active: false,
        }
    }

    /// Set the tab as active.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

impl Render for Tab {
    fn render(&self) -> Markup {
        let class = if self.active {
            "leaderboard-tab active"
        } else {
            "leaderboard-tab"
        };

        html! {
            a class=(class) href=(self.href) aria-current=[self.active.then_some("page")] {
                (self.label)
            }
        }
    }
}

/// A group of tabs for navigation.
#[derive(Debug, Clone, Default)]
pub struct TabGroup {
    pub tabs: Vec<Tab>,
    pub aria_label: Option<&'static str>,
}

impl TabGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    #[must_use]
    pub fn with_aria_label(mut self, label: &'static str) -> Self {
        self.aria_label = Some(label);
        self
    }
}

impl Render for TabGroup {
    fn render(&self) -> Markup {
        html! {
            nav class="leaderboard-tabs" aria-label=[self.aria_label] {
                @for tab in &self.tabs {
                    (tab)
                }
            }
        }
    }
}

/// Link to the leaderboard for a period and category.
#[must_use]
pub fn leaderboard_href(period: Period, category: Category) -> String {
    format!("?period={}&category={}", period.as_str(), category.slug())
}

/// Period tabs ("This Week", "This Month", "All Time").
#[must_use]
pub fn period_tabs(active: Period, category: Category) -> TabGroup {
    Period::ALL
        .into_iter()
        .fold(TabGroup::new().with_aria_label("Period"), |group, period| {
            let tab = Tab::new(period.label(), leaderboard_href(period, category));
            group.push_tab(if period == active { tab.active() } else { tab })
        })
}

/// Category tabs ("Top Givers", "Giveaways", ...).
#[must_use]
pub fn category_tabs(period: Period, active: Category) -> TabGroup {
    Category::ALL
        .into_iter()
        .fold(TabGroup::new().with_aria_label("Category"), |group, category| {
            let tab = Tab::new(category.label(), leaderboard_href(period, category));
            group.push_tab(if category == active { tab.active() } else { tab })
        })
}
