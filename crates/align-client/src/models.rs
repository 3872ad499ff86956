//! Scoring model resource.

use align_core::entities::TrainedModel;

use crate::{ApiClient, error::ClientError, resource::MODEL};

impl ApiClient {
    /// List the scoring models a recommendation query can name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_models(&self) -> Result<Vec<TrainedModel>, ClientError> {
        self.list(MODEL, &[]).await
    }
}
