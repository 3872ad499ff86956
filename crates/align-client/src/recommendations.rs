//! Node recommendation resource.

use align_core::entities::Recommendations;

use crate::{
    ApiClient,
    error::ClientError,
    resource::{RECOMMEND, with_query},
};

/// Model used when the caller does not name one.
pub const DEFAULT_RECOMMENDATION_MODEL: &str = "tf_idf_sample_negs_no_training";

/// Parameters of a recommendation query.
///
/// With neither `count` nor `threshold` set the server returns its default
/// top 10.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub model: String,
    pub count: Option<u32>,
    pub threshold: Option<f64>,
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self::for_model(DEFAULT_RECOMMENDATION_MODEL)
    }
}

impl RecommendationQuery {
    #[must_use]
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            count: None,
            threshold: None,
        }
    }

    fn params(&self, node_id: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("target", node_id.to_string()),
            ("model", self.model.clone()),
        ];
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        if let Some(threshold) = self.threshold {
            params.push(("threshold", threshold.to_string()));
        }
        params
    }
}

impl ApiClient {
    /// Recommendations for `node_id` scored by `model`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_recommendations(
        &self,
        node_id: i64,
        model: &str,
    ) -> Result<Recommendations, ClientError> {
        self.get_recommendations_with(node_id, &RecommendationQuery::for_model(model))
            .await
    }

    /// Recommendations for `node_id` with explicit count/threshold options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_recommendations_with(
        &self,
        node_id: i64,
        query: &RecommendationQuery,
    ) -> Result<Recommendations, ClientError> {
        let url = with_query(self.collection_url(RECOMMEND), &query.params(node_id));
        self.get_json(RECOMMEND, &url).await
    }
}
