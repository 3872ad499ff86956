//! Resource records and the generic request plumbing shared by every
//! resource module.
//!
//! A [`Resource`] says where a collection lives and how its list responses
//! are wrapped. The `impl ApiClient` block here builds URLs, attaches the
//! session's `Authorization` header, and decodes responses; it never caches
//! or rewrites payloads beyond stripping the `results` envelope.

use std::fmt::Display;

use align_core::Page;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ApiClient;
use crate::error::ClientError;
use crate::http::{check_response, read_json};

/// How the collection path ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/api/<name>/`
    TrailingSlash,
    /// `/api/<name>`
    Bare,
}

/// How a collection GET wraps its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{count, next, previous, results: [...]}`; only `results` is returned.
    Results,
    /// The body is returned as sent.
    Raw,
}

/// A named REST resource on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub path_style: PathStyle,
    pub envelope: Envelope,
}

impl Resource {
    /// Paginated collection under `/api/<name>/`.
    #[must_use]
    pub const fn paged(name: &'static str) -> Self {
        Self {
            name,
            path_style: PathStyle::TrailingSlash,
            envelope: Envelope::Results,
        }
    }

    /// Unwrapped collection under `/api/<name>/`.
    #[must_use]
    pub const fn raw(name: &'static str) -> Self {
        Self {
            name,
            path_style: PathStyle::TrailingSlash,
            envelope: Envelope::Raw,
        }
    }

    #[must_use]
    pub const fn without_trailing_slash(mut self) -> Self {
        self.path_style = PathStyle::Bare;
        self
    }

    /// Collection URL under `base_url`.
    #[must_use]
    pub fn collection_url(&self, base_url: &str) -> String {
        match self.path_style {
            PathStyle::TrailingSlash => format!("{base_url}/api/{}/", self.name),
            PathStyle::Bare => format!("{base_url}/api/{}", self.name),
        }
    }

    /// Item URL: the collection URL followed by the id.
    #[must_use]
    pub fn item_url(&self, base_url: &str, id: impl Display) -> String {
        match self.path_style {
            PathStyle::TrailingSlash => format!("{}{id}", self.collection_url(base_url)),
            PathStyle::Bare => format!("{}/{id}", self.collection_url(base_url)),
        }
    }
}

pub const DOCUMENT: Resource = Resource::paged("document");
pub const LEADERBOARD: Resource = Resource::raw("leaderboard").without_trailing_slash();
pub const NODE: Resource = Resource::paged("node");
pub const JUDGMENT: Resource = Resource::paged("judgment");
pub const RECOMMEND: Resource = Resource::raw("recommend");
pub const MODEL: Resource = Resource::raw("model");
pub const USER_POINTS: Resource = Resource::raw("user-points");
pub const SECTION_REVIEW: Resource = Resource::raw("section-review");

/// Append `params` as a URL-encoded query string.
pub(crate) fn with_query(mut url: String, params: &[(&str, String)]) -> String {
    for (idx, (key, value)) in params.iter().enumerate() {
        url.push(if idx == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

impl ApiClient {
    #[must_use]
    pub fn collection_url(&self, resource: Resource) -> String {
        resource.collection_url(&self.base_url)
    }

    #[must_use]
    pub fn item_url(&self, resource: Resource, id: impl Display) -> String {
        resource.item_url(&self.base_url, id)
    }

    /// Headers every authenticated request carries, built from the current
    /// session token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] when the session has no token,
    /// or [`ClientError::InvalidToken`] when it cannot be sent as a header.
    pub fn auth_headers(&self) -> Result<HeaderMap, ClientError> {
        let value = HeaderValue::from_str(&self.session.authorization()?)
            .map_err(|e| ClientError::InvalidToken(e.to_string()))?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server returns a
    /// non-success status, or the body is not a `T`.
    pub async fn get_item<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: impl Display,
    ) -> Result<T, ClientError> {
        let url = self.item_url(resource, id);
        self.get_json(resource, &url).await
    }

    /// GET the collection with `params`, unwrapping the envelope the resource
    /// declares.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server returns a
    /// non-success status, or the body is not the expected list.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: Resource,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ClientError> {
        let url = with_query(self.collection_url(resource), params);
        match resource.envelope {
            Envelope::Results => Ok(self
                .get_json::<Page<T>>(resource, &url)
                .await?
                .into_results()),
            Envelope::Raw => self.get_json(resource, &url).await,
        }
    }

    /// Authenticated GET of `url`, decoded as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
    ) -> Result<T, ClientError> {
        let headers = self.auth_headers()?;
        tracing::debug!(resource = resource.name, %url, "GET");
        let resp = check_response(self.http.get(url).headers(headers).send().await?).await?;
        read_json(resp, url).await
    }

    /// Authenticated POST of a JSON body to the resource's collection URL.
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: Resource,
        body: &B,
    ) -> Result<T, ClientError> {
        let headers = self.auth_headers()?;
        let url = self.collection_url(resource);
        tracing::debug!(resource = resource.name, %url, "POST");
        let resp = check_response(
            self.http
                .post(&url)
                .headers(headers)
                .json(body)
                .send()
                .await?,
        )
        .await?;
        read_json(resp, &url).await
    }
}
