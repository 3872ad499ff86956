//! Curriculum document section review resource.
//!
//! The server decides which section a reviewer gets; the client only fetches
//! the assignment and posts edits back.

use align_core::entities::{SectionAssignment, SectionReview, SectionReviewOutcome};

use crate::{ApiClient, error::ClientError, resource::SECTION_REVIEW};

impl ApiClient {
    /// The section assigned to the current user, or the reason none is
    /// available.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_random_section_for_review(&self) -> Result<SectionAssignment, ClientError> {
        let url = self.collection_url(SECTION_REVIEW);
        self.get_json(SECTION_REVIEW, &url).await
    }

    /// Save reviewed text for a section. `finalize: None` saves a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn submit_section_review(
        &self,
        section_id: i64,
        section_text: &str,
        finalize: Option<bool>,
    ) -> Result<SectionReviewOutcome, ClientError> {
        let review = SectionReview::new(section_id, section_text, finalize);
        self.post_json(SECTION_REVIEW, &review).await
    }

    /// Save the text and release the section so another reviewer can pick it up.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn abandon_section_review(
        &self,
        section_id: i64,
        section_text: &str,
    ) -> Result<SectionReviewOutcome, ClientError> {
        let review = SectionReview::abandon(section_id, section_text);
        self.post_json(SECTION_REVIEW, &review).await
    }
}
