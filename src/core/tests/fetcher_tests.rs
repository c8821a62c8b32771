// src/core/tests/fetcher_tests.rs

use super::{tweet, ScriptedSource, TimelineSource};
use crate::core::error::Error;
use crate::core::fetcher::{fetch, SearchCursor};
use crate::core::logger::ActivityLog;
use crate::models::{FetchPolicy, SearchRequest};
use tempfile::TempDir;

fn temp_log() -> (TempDir, ActivityLog) {
    let dir = TempDir::new().unwrap();
    let log = ActivityLog::new(dir.path().join("logs.txt"));
    (dir, log)
}

#[tokio::test]
async fn test_failure_after_n_items_keeps_the_first_n() {
    let (_dir, log) = temp_log();
    let source = ScriptedSource::new(vec![
        Ok(vec![tweet(30)]),
        Ok(vec![tweet(20)]),
        Ok(vec![tweet(10)]),
        Err(Error::Http("connection reset by peer".to_string())),
    ]);
    let request = SearchRequest::new("#test");

    let tweets = fetch(&source, &request, 10, FetchPolicy::Lenient, &log).await.unwrap();
    let ids: Vec<u64> = tweets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![30, 20, 10]);
    assert!(!log.path().exists(), "Lenient fetch must not touch the activity log");
}

#[tokio::test]
async fn test_failure_on_first_pull_yields_nothing() {
    let (_dir, log) = temp_log();
    let source = ScriptedSource::new(vec![Err(Error::Api {
        status: 401,
        message: "Could not authenticate you.".to_string(),
    })]);

    let tweets = fetch(&source, &SearchRequest::new("#test"), 5, FetchPolicy::Lenient, &log)
        .await
        .unwrap();
    assert!(tweets.is_empty());
}

#[tokio::test]
async fn test_stops_at_max_results() {
    let (_dir, log) = temp_log();
    let source = TimelineSource::new(7);

    let tweets = fetch(&source, &SearchRequest::new("#test"), 5, FetchPolicy::Lenient, &log)
        .await
        .unwrap();
    let ids: Vec<u64> = tweets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![70, 60, 50, 40, 30]);
    assert_eq!(*source.calls.borrow(), vec![(5, None)]);
}

#[tokio::test]
async fn test_paginates_below_the_oldest_id() {
    let (_dir, log) = temp_log();
    let source = TimelineSource::new(250);

    let tweets = fetch(&source, &SearchRequest::new("#test"), 230, FetchPolicy::Lenient, &log)
        .await
        .unwrap();
    assert_eq!(tweets.len(), 230);
    assert_eq!(tweets.first().unwrap().id, 2500);
    assert_eq!(tweets.last().unwrap().id, 210);
    assert!(tweets.windows(2).all(|w| w[0].id > w[1].id));
    assert_eq!(
        *source.calls.borrow(),
        vec![(100, None), (100, Some(1509)), (30, Some(509))]
    );
}

#[tokio::test]
async fn test_stops_when_results_run_out() {
    let (_dir, log) = temp_log();
    let source = TimelineSource::new(3);

    let tweets = fetch(&source, &SearchRequest::new("#test"), 10, FetchPolicy::Lenient, &log)
        .await
        .unwrap();
    assert_eq!(tweets.len(), 3);
    assert_eq!(*source.calls.borrow(), vec![(10, None), (7, Some(9))]);
}

#[tokio::test]
async fn test_zero_max_results_sends_nothing() {
    let (_dir, log) = temp_log();
    let source = TimelineSource::new(3);

    let tweets = fetch(&source, &SearchRequest::new("#test"), 0, FetchPolicy::Lenient, &log)
        .await
        .unwrap();
    assert!(tweets.is_empty());
    assert!(source.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_lenient_mid_pagination_failure() {
    let (_dir, log) = temp_log();
    let source = TimelineSource::new(7).failing_after(2);

    let tweets = fetch(&source, &SearchRequest::new("#test"), 5, FetchPolicy::Lenient, &log)
        .await
        .unwrap();
    assert_eq!(tweets.len(), 2);
    assert!(!log.path().exists());
}

#[tokio::test]
async fn test_strict_mode_surfaces_the_failure() {
    let (_dir, log) = temp_log();
    let source = TimelineSource::new(7).failing_after(2);

    let err = fetch(&source, &SearchRequest::new("#test"), 5, FetchPolicy::Strict, &log)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 429, .. }));

    let written = std::fs::read_to_string(log.path()).unwrap();
    assert!(written.contains("[E]: Search failed after 2 tweets"));
}

#[tokio::test]
async fn test_cursor_yields_one_tweet_at_a_time() {
    let source = TimelineSource::new(2);
    let request = SearchRequest::new("#test");
    let mut cursor = SearchCursor::new(&source, &request, 5);

    assert_eq!(cursor.next_tweet().await.unwrap().map(|t| t.id), Some(20));
    assert_eq!(cursor.next_tweet().await.unwrap().map(|t| t.id), Some(10));
    assert_eq!(cursor.next_tweet().await.unwrap(), None);
    assert_eq!(cursor.next_tweet().await.unwrap(), None);
    assert_eq!(source.calls.borrow().len(), 2);
}
