//! End-to-end tests: HTTP fetch through query state to derived page rows.

use std::sync::Arc;

use community_leaderboard::components::{render_text, LeaderboardPanel, Render};
use community_leaderboard::config::Config;
use community_leaderboard::leaderboard::{
    LeaderboardClient, LeaderboardQuery, Period, QueryOptions, RequestFilter,
};
use community_leaderboard::ranking::{Category, LeaderboardBody, LeaderboardPage, PageState, TierMarker};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query_for(server: &MockServer, filter: RequestFilter) -> LeaderboardQuery {
    let config = Config {
        base_url: server.uri(),
        ..Config::for_testing()
    };
    let client = LeaderboardClient::new(&config).expect("Failed to create client");
    LeaderboardQuery::new(Arc::new(client), QueryOptions::default().with_filter(filter))
}

fn weekly() -> RequestFilter {
    RequestFilter::new(Period::Weekly, 1, 50)
}

fn ann_and_bo() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "leaderboard": [
                {"id": 1, "name": "Ann", "post_count": 10, "total_contributions": 40, "badges": ["b1", "b2"]},
                {"id": 2, "name": "Bo", "post_count": 5, "total_contributions": 5, "badges": []}
            ],
            "total": 2
        }
    })
}

#[tokio::test]
async fn test_weekly_top_givers_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboard"))
        .and(query_param("period", "weekly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ann_and_bo()))
        .expect(1)
        .mount(&server)
        .await;

    let query = query_for(&server, weekly());
    query.mount().unwrap().await.unwrap();

    let view = query.snapshot();
    assert!(!view.has_more());
    assert_eq!(view.total_count, 2);

    let page = LeaderboardPage::from_view(&view, Category::TopGivers);
    let PageState::Ready(LeaderboardBody::Ranked(rows)) = &page.state else {
        panic!("expected ranked rows, got {:?}", page.state);
    };

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "Ann");
    assert_eq!(rows[0].tier, TierMarker::Crown);
    assert_eq!(rows[0].primary_metric_value, 10);
    assert_eq!(rows[0].primary_metric_label, "Giveaways");
    assert_eq!(rows[0].badge_count, 2);

    assert_eq!(rows[1].rank, 2);
    assert_eq!(rows[1].name, "Bo");
    assert_eq!(rows[1].tier, TierMarker::Medal);
    assert_eq!(rows[1].primary_metric_value, 5);
    assert_eq!(rows[1].badge_count, 0);
    assert!(!page.has_more);

    // Switching category relabels the same data without another request.
    let trending = LeaderboardPage::from_view(&view, Category::Trending);
    let PageState::Ready(body) = &trending.state else {
        panic!("expected ready page");
    };
    assert_eq!(body.rows()[0].primary_metric_value, 40);
    assert_eq!(body.rows()[0].primary_metric_label, "Total");
}

#[tokio::test]
async fn test_failure_after_success_shows_error_and_keeps_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ann_and_bo()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "error": "rate limited"})),
        )
        .mount(&server)
        .await;

    let query = query_for(&server, weekly());
    query.mount().unwrap().await.unwrap();
    query.refetch().await.unwrap();

    let view = query.snapshot();
    assert_eq!(view.error.as_deref(), Some("rate limited"));
    assert!(!view.loading);
    assert_eq!(view.entries.len(), 2);

    let page = LeaderboardPage::from_view(&view, Category::TopGivers);
    let html = LeaderboardPanel::new(&page).render().into_string();
    assert!(html.contains("rate limited"));
    assert!(html.contains("Try Again"));
}

#[tokio::test]
async fn test_empty_period_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"leaderboard": [], "total": 0}
        })))
        .mount(&server)
        .await;

    let query = query_for(&server, RequestFilter::new(Period::Monthly, 1, 50));
    query.mount().unwrap().await.unwrap();

    let view = query.snapshot();
    assert_eq!(view.error, None);

    let page = LeaderboardPage::from_view(&view, Category::Requests);
    assert!(matches!(
        page.state,
        PageState::Ready(LeaderboardBody::Empty { .. })
    ));
    assert!(render_text(&page).contains("No contributors found for this period."));

    let html = LeaderboardPanel::new(&page).render().into_string();
    assert!(html.contains("leaderboard-empty"));
    assert!(!html.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_has_more_when_total_exceeds_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "leaderboard": [
                    {"id": "a", "name": "Ann", "post_count": 3, "total_contributions": 9, "badges": []},
                    {"id": "b", "name": "Bo", "post_count": 2, "total_contributions": 8, "badges": []}
                ],
                "total": 7
            }
        })))
        .mount(&server)
        .await;

    let query = query_for(&server, RequestFilter::new(Period::AllTime, 1, 2));
    query.mount().unwrap().await.unwrap();

    assert!(query.has_more());
    let page = LeaderboardPage::from_view(&query.snapshot(), Category::TopGivers);
    assert!(page.has_more);
    assert_eq!(page.total_count, 7);
}
