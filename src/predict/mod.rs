mod api;
mod wire;

use crate::{FsClient, FsError, Sentiment};

/// A builder for classifying a single piece of free text.
pub struct PredictBuilder {
    client: FsClient,
    text: String,
}

impl PredictBuilder {
    /// Creates a `PredictBuilder` for `text`. The text is sent as given, untrimmed.
    pub fn new(client: &FsClient, text: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            text: text.into(),
        }
    }

    /// Sends the text to the classifier and returns the top result.
    ///
    /// # Errors
    ///
    /// Returns `FsError::EmptyInput` without touching the network if the text is
    /// blank, `FsError::Data` if the service answers with an empty list, and the
    /// usual transport, status and JSON errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(len = self.text.len())))]
    pub async fn fetch(self) -> Result<Sentiment, FsError> {
        api::predict(&self.client, &self.text).await
    }
}
