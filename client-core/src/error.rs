use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy surfaced by every store operation.
///
/// Stores do not retry or swallow failures; the caller maps
/// `Unauthorized` to a re-login flow and `ServiceUnavailable` to an
/// outage screen, everything else to a generic message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication required")]
    Unauthorized,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// Classify a non-2xx HTTP status, consuming the response body as the
    /// server-side message where one is available.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::SERVICE_UNAVAILABLE => ClientError::ServiceUnavailable,
            StatusCode::NOT_FOUND => {
                let url = response.url().path().to_string();
                ClientError::NotFound(url)
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                ClientError::Server {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    /// True when the caller should route the user back through login.
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}
