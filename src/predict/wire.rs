use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct PredictPayload<'a> {
    pub(crate) text: &'a str,
}

/// One entry of the classifier pipeline output; only the first is used.
#[derive(Deserialize)]
pub(crate) struct PredictionNode {
    pub(crate) label: String,
    pub(crate) score: f64,
}
