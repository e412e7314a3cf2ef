//! Request lifecycle for a leaderboard query.
//!
//! A [`LeaderboardQuery`] owns the filter and the observable state bundle
//! (`entries`, `loading`, `error`, `total_count`). Every trigger spawns an
//! independent fetch; nothing is de-duplicated, throttled or cancelled.
//! How out-of-order completions are applied is governed by
//! [`ResponseOrdering`].

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::client::LeaderboardSource;
use super::error::FetchError;
use super::models::{LeaderboardEntry, LeaderboardResponse, Period, RequestFilter};

/// Policy for applying fetches that resolve out of dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Apply a resolution only if it belongs to the most recently issued fetch.
    #[default]
    LatestIssued,
    /// Apply every resolution; whichever resolves last wins, even if it was
    /// dispatched earlier and carries older data.
    LastResolved,
}

impl ResponseOrdering {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LatestIssued => "latest-issued",
            Self::LastResolved => "last-resolved",
        }
    }
}

impl fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown response ordering '{0}', expected latest-issued or last-resolved")]
pub struct UnknownOrdering(pub String);

impl FromStr for ResponseOrdering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest-issued" => Ok(Self::LatestIssued),
            "last-resolved" => Ok(Self::LastResolved),
            _ => Err(UnknownOrdering(s.to_string())),
        }
    }
}

/// Construction options for a [`LeaderboardQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub filter: RequestFilter,
    /// Fetch on mount and whenever the filter changes.
    pub auto_fetch: bool,
    pub ordering: ResponseOrdering,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            filter: RequestFilter::default(),
            auto_fetch: true,
            ordering: ResponseOrdering::default(),
        }
    }
}

impl QueryOptions {
    #[must_use]
    pub const fn with_filter(mut self, filter: RequestFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn with_auto_fetch(mut self, auto_fetch: bool) -> Self {
        self.auto_fetch = auto_fetch;
        self
    }

    #[must_use]
    pub const fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

/// Point-in-time snapshot of a query's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardView {
    /// The filter the next fetch (or `refetch`) will use.
    pub filter: RequestFilter,
    /// Entries from the last applied successful fetch.
    pub entries: Vec<LeaderboardEntry>,
    pub loading: bool,
    pub error: Option<String>,
    pub total_count: u64,
    /// Filter that produced `entries`, if any fetch has succeeded yet.
    pub resolved_filter: Option<RequestFilter>,
}

impl LeaderboardView {
    fn new(filter: RequestFilter) -> Self {
        Self {
            filter,
            entries: Vec::new(),
            loading: false,
            error: None,
            total_count: 0,
            resolved_filter: None,
        }
    }

    /// Whether the service holds more entries than are currently loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        (self.entries.len() as u64) < self.total_count
    }

    /// Collapse the snapshot into a single lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> RequestLifecycle<'_> {
        if self.loading {
            RequestLifecycle::Loading
        } else if let Some(message) = self.error.as_deref() {
            RequestLifecycle::Failed { message }
        } else if self.resolved_filter.is_some() {
            RequestLifecycle::Success {
                entries: &self.entries,
                total: self.total_count,
            }
        } else {
            RequestLifecycle::Idle
        }
    }
}

/// The lifecycle state a query is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestLifecycle<'a> {
    Idle,
    Loading,
    Success {
        entries: &'a [LeaderboardEntry],
        total: u64,
    },
    Failed {
        message: &'a str,
    },
}

struct Shared {
    state: watch::Sender<LeaderboardView>,
    issued: AtomicU64,
    ordering: ResponseOrdering,
}

impl Shared {
    fn resolve(
        &self,
        generation: u64,
        filter: RequestFilter,
        result: Result<LeaderboardResponse, FetchError>,
    ) {
        self.state.send_if_modified(|view| {
            let latest = self.issued.load(Ordering::SeqCst);
            if self.ordering == ResponseOrdering::LatestIssued && generation != latest {
                debug!(generation, latest, "Discarding stale leaderboard response");
                return false;
            }

            view.loading = false;
            match result {
                Ok(data) => {
                    info!(
                        generation,
                        period = %filter.period,
                        page = filter.page,
                        entries = data.leaderboard.len(),
                        total = data.total,
                        "Leaderboard loaded"
                    );
                    view.entries = data.leaderboard;
                    view.total_count = data.total;
                    view.error = None;
                    view.resolved_filter = Some(filter);
                }
                Err(err) => {
                    warn!(generation, kind = err.kind(), "Leaderboard fetch failed: {err}");
                    view.error = Some(err.message().to_string());
                }
            }
            true
        });
    }
}

/// A leaderboard query bound to a data source.
///
/// Fetches are spawned onto the current Tokio runtime, so every method that
/// can trigger one must be called from within a runtime.
pub struct LeaderboardQuery {
    source: Arc<dyn LeaderboardSource>,
    shared: Arc<Shared>,
    auto_fetch: bool,
}

impl LeaderboardQuery {
    /// Create a query. Nothing is fetched until [`mount`](Self::mount).
    #[must_use]
    pub fn new(source: Arc<dyn LeaderboardSource>, options: QueryOptions) -> Self {
        let (state, _) = watch::channel(LeaderboardView::new(options.filter));
        Self {
            source,
            shared: Arc::new(Shared {
                state,
                issued: AtomicU64::new(0),
                ordering: options.ordering,
            }),
            auto_fetch: options.auto_fetch,
        }
    }

    /// Start the initial fetch, unless auto-fetch is disabled.
    pub fn mount(&self) -> Option<JoinHandle<()>> {
        self.auto_fetch.then(|| self.dispatch())
    }

    /// Re-issue the current filter. Always fetches, regardless of auto-fetch.
    pub fn refetch(&self) -> JoinHandle<()> {
        self.dispatch()
    }

    /// Replace the filter.
    ///
    /// A changed filter triggers a fetch when auto-fetch is enabled; setting
    /// the same filter again does nothing.
    pub fn set_filter(&self, filter: RequestFilter) -> Option<JoinHandle<()>> {
        let changed = self.shared.state.send_if_modified(|view| {
            if view.filter == filter {
                return false;
            }
            view.filter = filter;
            true
        });

        if !changed {
            return None;
        }
        debug!(period = %filter.period, page = filter.page, limit = filter.limit, "Leaderboard filter changed");
        self.auto_fetch.then(|| self.dispatch())
    }

    pub fn set_period(&self, period: Period) -> Option<JoinHandle<()>> {
        self.set_filter(RequestFilter {
            period,
            ..self.filter()
        })
    }

    pub fn set_page(&self, page: u32) -> Option<JoinHandle<()>> {
        self.set_filter(RequestFilter {
            page,
            ..self.filter()
        })
    }

    pub fn set_limit(&self, limit: u32) -> Option<JoinHandle<()>> {
        self.set_filter(RequestFilter {
            limit,
            ..self.filter()
        })
    }

    /// The current filter.
    #[must_use]
    pub fn filter(&self) -> RequestFilter {
        self.shared.state.borrow().filter
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LeaderboardView {
        self.shared.state.borrow().clone()
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LeaderboardView> {
        self.shared.state.subscribe()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.shared.state.borrow().has_more()
    }

    #[must_use]
    pub fn ordering(&self) -> ResponseOrdering {
        self.shared.ordering
    }

    #[must_use]
    pub fn auto_fetch(&self) -> bool {
        self.auto_fetch
    }

    fn dispatch(&self) -> JoinHandle<()> {
        let mut generation = 0;
        let mut filter = RequestFilter::default();
        // Generation and filter are taken under the same lock so a concurrent
        // filter change cannot pair a newer generation with an older filter.
        self.shared.state.send_modify(|view| {
            generation = self.shared.issued.fetch_add(1, Ordering::SeqCst) + 1;
            filter = view.filter;
            view.loading = true;
            view.error = None;
        });

        debug!(
            generation,
            period = %filter.period,
            page = filter.page,
            limit = filter.limit,
            "Dispatching leaderboard fetch"
        );

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            let result = source.fetch(&filter).await;
            shared.resolve(generation, filter, result);
        })
    }
}
