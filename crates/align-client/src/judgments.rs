//! Pairwise judgment resource.

use align_core::entities::{Judgment, JudgmentPayload, NewJudgment};
use align_core::enums::{BuildEnvironment, JudgmentMode};
use serde_json::Value;

use crate::{ApiClient, error::ClientError, resource::JUDGMENT};

/// Version tag of the judgment UI protocol, sent with every judgment.
pub const UI_VERSION_HASH: &str = "2019_11_with_rubric";

/// Wrap the reviewer's fields with the protocol metadata.
///
/// Caller `extra_fields` are kept; `is_dev_build` is always set from the
/// build environment.
fn build_payload(judgment: &NewJudgment, environment: BuildEnvironment) -> JudgmentPayload {
    let mut extra_fields = judgment.extra_fields.clone();
    extra_fields.insert(
        "is_dev_build".to_string(),
        Value::Bool(environment.is_dev_build()),
    );
    JudgmentPayload {
        node1: judgment.node1,
        node2: judgment.node2,
        rating: judgment.rating,
        confidence: judgment.confidence,
        ui_name: judgment.ui_name.clone(),
        ui_version_hash: UI_VERSION_HASH.to_string(),
        mode: JudgmentMode::RapidFeedback,
        extra_fields,
    }
}

impl ApiClient {
    /// Submit a judgment once. Rating and confidence ranges are validated by
    /// the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server rejects
    /// the judgment, or the response cannot be parsed.
    pub async fn submit_judgment(&self, judgment: &NewJudgment) -> Result<Judgment, ClientError> {
        let payload = build_payload(judgment, self.environment);
        self.post_json(JUDGMENT, &payload).await
    }
}
