//! Presentation facts derived from a ranked entry list.
//!
//! Nothing here fetches or re-sorts: rank is position in the list the
//! service returned, and the active [`Category`] only picks which metric
//! headlines each row.

pub mod category;
pub mod page;
pub mod rows;

pub use category::{Category, Metric, UnknownCategory};
pub use page::{LeaderboardPage, PageState};
pub use rows::{derive_rows, display_handle, LeaderboardBody, PresentationRow, TierMarker};
