use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the judgment leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub number_of_judgments: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
