//! Shared HTTP response helpers.
//!
//! Centralizes the status check (non-success → [`ClientError::Api`]) and JSON
//! decoding (shape mismatch → [`ClientError::Parse`]) so resource modules stay
//! focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Return the response unchanged on success, or an [`ClientError::Api`]
/// carrying the status code and raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON body, reporting which URL produced an unexpected shape.
pub async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    url: &str,
) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })
}
