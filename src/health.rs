//! Liveness probe for the sentiment service root endpoint.

use serde::{Deserialize, Serialize};

use crate::core::{FsClient, FsError, net};

/// The body returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Human-readable banner, e.g. which news backend the service uses.
    pub message: String,
    /// `"active"` when the service is up.
    pub status: String,
}

impl ServiceStatus {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// Fetch the service status.
///
/// # Errors
///
/// Returns an error if the service is unreachable, answers with a non-2xx
/// status, or the body is not the expected JSON object.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn status(client: &FsClient) -> Result<ServiceStatus, FsError> {
    let url = client.base_url().clone();
    net::send_json(client.http().get(url)).await
}
