//! Entity structs for the alignment backend's REST resources.
//!
//! The server owns every record; these structs only describe what travels
//! over the wire. Records with server-defined fields the client does not
//! model keep them in a flattened `extra` map so nothing is dropped.

mod document;
mod judgment;
mod leaderboard;
mod node;
mod recommendation;
mod section;
mod trained_model;
mod user;

pub use document::Document;
pub use judgment::{Judgment, JudgmentPayload, NewJudgment};
pub use leaderboard::LeaderboardEntry;
pub use node::{Node, NodeSummary};
pub use recommendation::Recommendations;
pub use section::{
    SectionAssignment, SectionDocument, SectionForReview, SectionReview, SectionReviewOutcome,
};
pub use trained_model::TrainedModel;
pub use user::UserPoints;
