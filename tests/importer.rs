use chrono::NaiveDate;
use neo_impact_calculator::config::FeedConfig;
use neo_impact_calculator::importer::{FeedWindow, ImportError, feed_url};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn window_accepts_spans_up_to_the_limit() {
    let window = FeedWindow::new(date(2025, 8, 23), date(2025, 8, 30), 7).expect("7-day span");
    assert_eq!(window.span_days(), 7);

    let single = FeedWindow::new(date(2025, 8, 23), date(2025, 8, 23), 7).expect("same-day span");
    assert_eq!(single.span_days(), 0);
}

#[test]
fn window_rejects_oversized_and_inverted_spans() {
    let too_wide = FeedWindow::new(date(2025, 8, 1), date(2025, 8, 9), 7);
    assert!(matches!(
        too_wide,
        Err(ImportError::WindowTooWide { max: 7, got: 8 })
    ));

    let inverted = FeedWindow::new(date(2025, 8, 9), date(2025, 8, 1), 7);
    assert!(matches!(inverted, Err(ImportError::WindowInverted { .. })));
}

#[test]
fn starting_at_builds_the_widest_window() {
    let window = FeedWindow::starting_at(date(2025, 12, 29), 7);
    assert_eq!(window.start, date(2025, 12, 29));
    assert_eq!(window.end, date(2026, 1, 5));
    assert_eq!(window.span_days(), 7);
}

#[test]
fn feed_url_matches_the_neows_query_shape() {
    let config = FeedConfig::default();
    let window = FeedWindow::new(date(2025, 8, 23), date(2025, 8, 30), 7).unwrap();
    assert_eq!(
        feed_url(&config, &window),
        "https://api.nasa.gov/neo/rest/v1/feed?start_date=2025-08-23&end_date=2025-08-30&api_key=DEMO_KEY"
    );

    let custom = FeedConfig {
        base_url: "http://localhost:9000/feed".to_string(),
        api_key: "secret".to_string(),
        ..FeedConfig::default()
    };
    assert!(feed_url(&custom, &window).starts_with("http://localhost:9000/feed?start_date="));
    assert!(feed_url(&custom, &window).ends_with("api_key=secret"));
}
