use crate::{
    core::{FsClient, FsError, Sentiment, SentimentLabel, client::constants::PREDICT_PATH, net},
    predict::wire,
};

pub(super) async fn predict(client: &FsClient, text: &str) -> Result<Sentiment, FsError> {
    if text.trim().is_empty() {
        return Err(FsError::EmptyInput);
    }

    let url = client.endpoint(PREDICT_PATH)?;
    let payload = wire::PredictPayload { text };

    let nodes: Vec<wire::PredictionNode> =
        net::send_json(client.http().post(url).json(&payload)).await?;

    let first = nodes
        .into_iter()
        .next()
        .ok_or_else(|| FsError::Data("prediction response contained no results".into()))?;

    Ok(Sentiment {
        label: SentimentLabel::parse(&first.label),
        score: first.score,
    })
}
