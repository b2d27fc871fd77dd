use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::FsError;

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Send a request, turning transport failures and non-2xx statuses into `FsError`.
pub(crate) async fn send(req: reqwest::RequestBuilder) -> Result<reqwest::Response, FsError> {
    let resp = req.send().await.map_err(map_transport)?;

    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(FsError::Status {
        status: status.as_u16(),
        reason: status
            .canonical_reason()
            .map_or_else(|| format!("status {}", status.as_u16()), str::to_string),
        url,
        detail: error_detail(&body),
    })
}

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, FsError> {
    resp.text().await.map_err(map_transport)
}

/// Send a request and decode its JSON body into `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    req: reqwest::RequestBuilder,
) -> Result<T, FsError> {
    let resp = send(req).await?;
    let body = get_text(resp).await?;
    serde_json::from_str(&body).map_err(FsError::Json)
}

fn map_transport(e: reqwest::Error) -> FsError {
    if e.is_timeout() {
        let url = e.url().map(ToString::to_string).unwrap_or_default();
        return FsError::Timeout { url };
    }
    FsError::Http(e)
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        // validation errors come back as a list of objects
        other => Some(other.to_string()),
    }
}
