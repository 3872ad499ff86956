//! Token login and logout.
//!
//! Login is the only unauthenticated call. It exchanges a username and
//! password for an API token and stores both in the client's [`Session`].
//!
//! [`Session`]: crate::Session

use serde::{Deserialize, Serialize};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, read_json},
};

const LOGIN_PATH: &str = "/api-token-auth/";
const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

impl ApiClient {
    /// Log in and store the returned token in the session.
    ///
    /// On failure the session is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for rejected credentials, or any
    /// transport/parse error.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let url = format!("{}{LOGIN_PATH}", self.base_url);
        let mut request = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password });
        if let Some(csrf) = &self.csrf_token {
            request = request.header(CSRF_HEADER, csrf.as_str());
        }
        tracing::debug!(%url, username, "POST login");

        let resp = check_response(request.send().await?).await?;
        let body: TokenResponse = read_json(resp, &url).await?;
        self.session.sign_in(username, body.token);
        tracing::info!(username, "logged in");
        Ok(())
    }

    /// Forget the current credentials. Purely local; the server token stays
    /// valid until revoked there.
    pub fn logout(&self) {
        if let Some(username) = self.session.username() {
            tracing::info!(%username, "logged out");
        }
        self.session.clear();
    }
}
