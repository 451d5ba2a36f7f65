use global_news_dashboard::constants::FETCH_ERROR_MESSAGE;
use global_news_dashboard::views::sources_view;
use global_news_dashboard::{Dashboard, NetworkError, NewsClient, ViewState};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

const LONG_PERIOD: Duration = Duration::from_secs(3600);

fn sample_body() -> serde_json::Value {
    json!({
        "total_articles": 12,
        "topic_clusters": 2,
        "global_perspectives": [
            {
                "title": "Global Topic: climate summit",
                "summary": "Delegates disagree on targets.",
                "sources": ["A", "B"],
                "keywords": ["climate", "summit"]
            },
            {
                "title": "Global Topic: grain exports",
                "summary": "Shipping resumes.",
                "sources": ["A", "C"],
                "keywords": ["grain", "climate"]
            }
        ]
    })
}

fn client(server: &MockServer, timeout: Duration) -> NewsClient {
    NewsClient::new(server.base_url(), timeout).unwrap()
}

/// Poll the dashboard until it leaves `Loading` or the deadline passes.
async fn wait_for_settled(dashboard: &Dashboard) -> ViewState {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let state = dashboard.state();
        if !state.is_loading() || Instant::now() > deadline {
            return state;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn fetch_parses_aggregate_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/news/aggregate");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(sample_body());
        })
        .await;

    let data = client(&server, Duration::from_secs(5))
        .fetch_aggregated_news()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(data.total_articles, 12);
    assert_eq!(data.topic_clusters, 2);
    assert_eq!(sources_view(&data), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn server_error_is_a_status_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/news/aggregate");
            then.status(500).body("{\"detail\": \"scraper down\"}");
        })
        .await;

    let err = client(&server, Duration::from_secs(5))
        .fetch_aggregated_news()
        .await
        .unwrap_err();

    match err {
        NetworkError::Status { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/news/aggregate"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/news/aggregate");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = client(&server, Duration::from_secs(5))
        .fetch_aggregated_news()
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/news/aggregate");
            then.status(200)
                .json_body(sample_body())
                .delay(Duration::from_secs(2));
        })
        .await;

    let err = client(&server, Duration::from_millis(200))
        .fetch_aggregated_news()
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "got {err:?}");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    // Port 9 (discard) on localhost is expected to refuse connections
    let client = NewsClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = client.fetch_aggregated_news().await.unwrap_err();
    assert!(matches!(err, NetworkError::Transport(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dashboard_loads_from_service() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/news/aggregate");
            then.status(200).json_body(sample_body());
        })
        .await;

    let mut dashboard = Dashboard::new(
        Arc::new(client(&server, Duration::from_secs(5))),
        LONG_PERIOD,
    );
    dashboard.activate(&tokio::runtime::Handle::current());

    let state = wait_for_settled(&dashboard).await;
    let data = state.loaded().expect("dashboard should be loaded");
    assert_eq!(data.global_perspectives.len(), 2);
    mock.assert_calls_async(1).await;

    dashboard.deactivate();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dashboard_hides_raw_errors() {
    let cases: Vec<(u16, &str, Duration)> = vec![
        (500, "{\"detail\": \"Internal Server Error\"}", Duration::ZERO),
        (200, "{ truncated", Duration::ZERO),
        (200, "{}", Duration::from_secs(2)),
    ];

    for (status, body, delay) in cases {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/news/aggregate");
                then.status(status).body(body).delay(delay);
            })
            .await;

        let mut dashboard = Dashboard::new(
            Arc::new(client(&server, Duration::from_millis(300))),
            LONG_PERIOD,
        );
        dashboard.activate(&tokio::runtime::Handle::current());

        let state = wait_for_settled(&dashboard).await;
        assert_eq!(state, ViewState::Error(FETCH_ERROR_MESSAGE.to_string()));
        dashboard.deactivate();
    }
}
