use finsense_rs::{Action, Dashboard, NewsView, Sentiment, SentimentLabel, ViewMode};

use crate::common::{Call, ScriptedService, article, feed, status_error};

#[tokio::test]
async fn mount_then_search_then_retry() {
    let service = ScriptedService::new();
    service
        .push_news(Ok(feed(None, vec![article("General", SentimentLabel::Neutral, 0.5)])))
        .push_news(Err(status_error(500, "Internal Server Error")))
        .push_news(Ok(feed(Some("NVDA"), vec![article("Nvidia", SentimentLabel::Positive, 0.9)])));

    let mut dash = Dashboard::new(service);

    let state = dash.dispatch(Action::Mount).await;
    assert!(matches!(state.news_view(), NewsView::Results(a) if a[0].title == "General"));

    let state = dash.dispatch(Action::SubmitSearch("NVDA".into())).await;
    assert!(matches!(state.news_view(), NewsView::Error(_)));

    let state = dash.dispatch(Action::Retry).await;
    assert_eq!(state.news().active_ticker(), Some("NVDA"));

    assert_eq!(
        dash.service().calls(),
        [
            Call::News(None),
            Call::News(Some("NVDA".into())),
            Call::News(Some("NVDA".into())),
        ]
    );
}

#[tokio::test]
async fn begin_exposes_loading_state_before_network() {
    let service = ScriptedService::new();
    service.push_news(Ok(feed(None, vec![])));
    let mut dash = Dashboard::new(service);

    let effect = dash.begin(Action::Mount).expect("mount fetches");
    assert_eq!(dash.state().news_view(), NewsView::Loading);
    assert!(dash.service().calls().is_empty());

    let state = dash.complete(effect).await;
    assert_eq!(state.news_view(), NewsView::Empty);
}

#[tokio::test]
async fn whitespace_analysis_makes_zero_calls() {
    let mut dash = Dashboard::new(ScriptedService::new());
    dash.dispatch(Action::SelectMode(ViewMode::Custom)).await;
    dash.dispatch(Action::EditAnalysis("   ".into())).await;
    let state = dash.dispatch(Action::SubmitAnalysis).await;

    assert!(state.analysis().result().is_none());
    assert!(dash.service().calls().is_empty());
}

#[tokio::test]
async fn analysis_uses_first_prediction() {
    let service = ScriptedService::new();
    service.push_prediction(Ok(Sentiment {
        label: SentimentLabel::Positive,
        score: 0.87,
    }));
    let mut dash = Dashboard::new(service);

    dash.dispatch(Action::SelectMode(ViewMode::Custom)).await;
    dash.dispatch(Action::EditAnalysis("Record quarter".into())).await;
    let state = dash.dispatch(Action::SubmitAnalysis).await;

    let result = state.analysis().result().copied().unwrap();
    assert_eq!(result.label, SentimentLabel::Positive);
    assert_eq!(result.confidence_pct(), 87);
    assert_eq!(dash.service().calls(), [Call::Predict("Record quarter".into())]);
}
