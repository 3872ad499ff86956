//! # align-client
//!
//! REST client for the curriculum alignment judgment API.
//!
//! One generic [`ApiClient`] talks to every resource. Each resource is a
//! [`Resource`] record (name, URL style, response envelope), and the
//! resource-specific operations live in their own modules as `impl ApiClient`
//! blocks:
//! - documents and the leaderboard
//! - curriculum nodes, including the comparison-node selection policy
//! - pairwise judgments
//! - recommendations and the scoring models behind them
//! - user points
//! - document section review
//!
//! Every call is a single round trip. Authenticated calls read the token from
//! the shared [`Session`] at request time.

pub mod resource;
pub mod selection;
pub mod session;

mod auth;
mod documents;
mod error;
mod http;
mod judgments;
mod leaderboard;
mod models;
mod nodes;
mod recommendations;
mod section_review;
mod users;

pub use error::ClientError;
pub use judgments::UI_VERSION_HASH;
pub use nodes::DEFAULT_SCHEDULER;
pub use recommendations::{DEFAULT_RECOMMENDATION_MODEL, RecommendationQuery};
pub use resource::{Envelope, PathStyle, Resource};
pub use session::{Credentials, Session};

use std::time::Duration;

use align_config::{AlignConfig, ApiConfig};
use align_core::enums::BuildEnvironment;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the alignment backend.
///
/// Cloning is cheap; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    environment: BuildEnvironment,
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Client for `base_url` with default timeout and user agent and an
    /// unauthenticated session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let api = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::build(&api, BuildEnvironment::default())
    }

    /// Client configured from a loaded [`AlignConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn from_config(config: &AlignConfig) -> Result<Self, ClientError> {
        Self::build(&config.api, config.build.environment)
    }

    fn build(api: &ApiConfig, environment: BuildEnvironment) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.as_str())
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: api.normalized_base_url().to_string(),
            session: Session::new(),
            environment,
            csrf_token: api.csrf_token().map(str::to_string),
        })
    }

    /// Use an existing session handle instead of a fresh one.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub const fn with_environment(mut self, environment: BuildEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Token for the `X-CSRFToken` header sent on login.
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn environment(&self) -> BuildEnvironment {
        self.environment
    }
}
