//! Error panel shown when the leaderboard cannot be loaded.

use maud::{html, Markup, Render};

/// Persistent error panel with a manual retry action.
///
/// The "Try Again" button carries `data-action="refetch"`; the host page is
/// expected to wire it to [`LeaderboardQuery::refetch`](crate::leaderboard::LeaderboardQuery::refetch).
/// Nothing retries automatically.
#[derive(Debug, Clone)]
pub struct ErrorPanel<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> ErrorPanel<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self {
            title: "Unable to Load Leaderboard",
            message,
        }
    }
}

impl Render for ErrorPanel<'_> {
    fn render(&self) -> Markup {
        html! {
            article class="error leaderboard-error" role="alert" {
                h3 { (self.title) }
                p class="error-message" { (self.message) }
                button type="button" class="retry" data-action="refetch" { "Try Again" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_panel_render() {
        let html = ErrorPanel::new("rate limited").render().into_string();
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Unable to Load Leaderboard"));
        assert!(html.contains(">rate limited<"));
        assert!(html.contains("data-action=\"refetch\""));
        assert!(html.contains("Try Again"));
    }

    #[test]
    fn test_error_panel_escapes_message() {
        let html = ErrorPanel::new("<script>").render().into_string();
        assert!(html.contains("&lt;script&gt;"));
    }
}
