use finsense_rs::{NewsBuilder, SentimentLabel};
use httpmock::{Method::GET, MockServer};

use crate::common::{client_for, fixture};

#[tokio::test]
async fn general_feed_omits_ticker_and_sends_default_limit() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/news-with-sentiment")
            .query_param("limit", "12")
            .query_param_missing("ticker");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_general"));
    });

    let client = client_for(&server);
    let feed = NewsBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    assert_eq!(feed.ticker, None);
    assert_eq!(feed.count, 3);
    assert_eq!(feed.articles.len(), 3);

    // server order is kept as-is
    let titles: Vec<_> = feed.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Fed holds rates steady as inflation cools",
            "Chipmakers rally on record AI demand",
            "Regional lender misses earnings estimates",
        ]
    );
    assert_eq!(feed.articles[1].sentiment.label, SentimentLabel::Positive);
    assert!((feed.articles[1].sentiment.score - 0.934).abs() < 1e-9);
    assert_eq!(feed.articles[2].description, None);
}

#[tokio::test]
async fn ticker_filter_is_trimmed_and_labels_normalized() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/news-with-sentiment")
            .query_param("ticker", "NVDA")
            .query_param("limit", "5");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_NVDA"));
    });

    let client = client_for(&server);
    let feed = NewsBuilder::new(&client)
        .ticker("  NVDA ")
        .limit(5)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(feed.ticker.as_deref(), Some("NVDA"));
    assert_eq!(feed.articles[0].sentiment.label, SentimentLabel::Positive);
    // unknown labels fall back to neutral instead of failing the whole page
    assert_eq!(feed.articles[1].sentiment.label, SentimentLabel::Neutral);
    // duplicate urls are kept
    assert_eq!(feed.articles[0].url, feed.articles[1].url);
    assert_eq!(feed.articles[1].published_at, "not-a-date");
}

#[tokio::test]
async fn blank_ticker_means_no_filter() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/news-with-sentiment")
            .query_param_missing("ticker");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_general"));
    });

    let client = client_for(&server);
    NewsBuilder::new(&client).ticker("   ").fetch().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn empty_result_is_not_an_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/news-with-sentiment");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_empty"));
    });

    let client = client_for(&server);
    let feed = NewsBuilder::new(&client).ticker("ZZZZ").fetch().await.unwrap();
    assert!(feed.is_empty());
    assert_eq!(feed.count, 0);
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/news-with-sentiment");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_empty"));
    });

    let client = finsense_rs::FsClient::builder()
        .base_url(url::Url::parse(&format!("{}/api/v1", server.base_url())).unwrap())
        .build()
        .unwrap();
    NewsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();
}
