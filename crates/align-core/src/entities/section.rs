use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title and country of the document a section belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub country: String,
}

/// A document section handed out for human review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionForReview {
    pub section_id: i64,
    pub section_text: String,
    #[serde(default)]
    pub section_name: String,
    #[serde(default)]
    pub document: Option<SectionDocument>,
    /// First scanned chunk only; superseded by `image_urls`.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Names of the enclosing sections, outermost first.
    #[serde(default)]
    pub ancestors: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the server answers when asked for a section to review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SectionAssignment {
    Available(Box<SectionForReview>),
    /// Nothing is waiting for review; `error` is a human-readable reason.
    Unavailable { error: String },
}

impl SectionAssignment {
    #[must_use]
    pub fn section(&self) -> Option<&SectionForReview> {
        match self {
            Self::Available(section) => Some(&**section),
            Self::Unavailable { .. } => None,
        }
    }
}

/// The body POSTed when a reviewer saves a section.
///
/// `finalize` is always a concrete boolean on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionReview {
    pub section_id: i64,
    pub section_text: String,
    pub finalize: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub abandon: bool,
}

impl SectionReview {
    /// A missing `finalize` means "save without finalizing".
    #[must_use]
    pub fn new(section_id: i64, section_text: impl Into<String>, finalize: Option<bool>) -> Self {
        Self {
            section_id,
            section_text: section_text.into(),
            finalize: finalize.unwrap_or(false),
            abandon: false,
        }
    }

    /// Save the text and put the section back into the shared pool.
    #[must_use]
    pub fn abandon(section_id: i64, section_text: impl Into<String>) -> Self {
        Self {
            abandon: true,
            ..Self::new(section_id, section_text, Some(false))
        }
    }
}

/// Server acknowledgement of a section review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionReviewOutcome {
    pub success: bool,
    /// Awarded only when the review was finalized.
    #[serde(default)]
    pub points: Option<i64>,
}
