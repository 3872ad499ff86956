//! Judgment leaderboard resource.

use align_core::entities::LeaderboardEntry;

use crate::{ApiClient, error::ClientError, resource::LEADERBOARD};

impl ApiClient {
    /// Fetch the leaderboard as the server sends it, ordered by judgment count.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ClientError> {
        self.list(LEADERBOARD, &[]).await
    }
}
