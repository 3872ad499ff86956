//! Curriculum document resource.

use align_core::entities::Document;

use crate::{ApiClient, error::ClientError, resource::DOCUMENT};

impl ApiClient {
    /// List curriculum documents (first page only).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        self.list(DOCUMENT, &[]).await
    }
}
