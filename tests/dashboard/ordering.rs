use std::collections::HashMap;
use std::time::Duration;

use finsense_rs::core::SentimentService;
use finsense_rs::dashboard::{Effect, Outcome, execute};
use finsense_rs::{DashboardState, FsError, NewsFeed, NewsView, Sentiment, SentimentLabel};
use futures::future::BoxFuture;

use crate::common::{article, feed};

/// Answers each ticker after a fixed per-ticker delay.
struct DelayedService {
    delays: HashMap<String, Duration>,
}

impl SentimentService for DelayedService {
    fn fetch_news<'a>(
        &'a self,
        ticker: Option<&'a str>,
    ) -> BoxFuture<'a, Result<NewsFeed, FsError>> {
        Box::pin(async move {
            let t = ticker.unwrap_or_default();
            if let Some(d) = self.delays.get(t) {
                tokio::time::sleep(*d).await;
            }
            Ok(feed(
                Some(t),
                vec![article(&format!("{t} headline"), SentimentLabel::Neutral, 0.5)],
            ))
        })
    }

    fn predict<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Result<Sentiment, FsError>> {
        Box::pin(async { Err(FsError::Data("unused".into())) })
    }
}

#[test]
fn earlier_request_arriving_late_is_discarded() {
    let (state, a) = DashboardState::default().submit_search("A");
    let (state, b) = state.submit_search("B");
    let (Effect::FetchNews(a), Effect::FetchNews(b)) = (a, b) else {
        panic!("expected news fetches")
    };
    assert!(b.seq > a.seq);

    // B lands first
    let state = state.apply(Outcome::News {
        seq: b.seq,
        result: Ok(feed(Some("B"), vec![article("B headline", SentimentLabel::Positive, 0.8)])),
    });
    // then the stale A response
    let state = state.apply(Outcome::News {
        seq: a.seq,
        result: Ok(feed(Some("A"), vec![article("A headline", SentimentLabel::Negative, 0.8)])),
    });

    assert_eq!(state.news().active_ticker(), Some("B"));
    assert_eq!(state.news().articles()[0].title, "B headline");
}

#[test]
fn stale_failure_does_not_mask_newer_request() {
    let (state, a) = DashboardState::default().submit_search("A");
    let (state, _b) = state.submit_search("B");
    let Effect::FetchNews(a) = a else {
        panic!("expected news fetch")
    };
    let state = state.apply(Outcome::News {
        seq: a.seq,
        result: Err(FsError::Data("late".into())),
    });
    assert_eq!(state.news().last_error(), None);
    assert!(state.news().is_loading());
    assert_eq!(state.news_view(), NewsView::Loading);
}

#[tokio::test]
async fn concurrent_fetches_apply_in_arrival_order_but_last_issued_wins() {
    let service = DelayedService {
        delays: HashMap::from([
            ("A".to_string(), Duration::from_millis(150)),
            ("B".to_string(), Duration::from_millis(10)),
        ]),
    };

    let (state, a) = DashboardState::default().submit_search("A");
    let (mut state, b) = state.submit_search("B");

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let run = |effect| {
        let tx = tx.clone();
        let service = &service;
        async move {
            let outcome = execute(service, effect).await;
            tx.send(outcome).unwrap();
        }
    };
    tokio::join!(run(a), run(b));
    drop(tx);

    let mut arrival = Vec::new();
    while let Some(outcome) = rx.recv().await {
        if let Outcome::News { result: Ok(f), .. } = &outcome {
            arrival.push(f.ticker.clone().unwrap_or_default());
        }
        state = state.apply(outcome);
    }

    assert_eq!(arrival, ["B", "A"]);
    assert_eq!(state.news().active_ticker(), Some("B"));
    assert!(!state.news().is_loading());
}
