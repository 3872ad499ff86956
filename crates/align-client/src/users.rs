//! Current-user points resource.

use align_core::entities::UserPoints;

use crate::{ApiClient, error::ClientError, resource::USER_POINTS};

impl ApiClient {
    /// Points earned by the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_current_user_stats(&self) -> Result<UserPoints, ClientError> {
        let url = self.collection_url(USER_POINTS);
        self.get_json(USER_POINTS, &url).await
    }
}
