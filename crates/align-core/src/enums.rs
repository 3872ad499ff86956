//! Enums shared between the config layer and the client.
//!
//! All enums use `snake_case` serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// BuildEnvironment
// ---------------------------------------------------------------------------

/// Which kind of build is submitting data.
///
/// Judgments carry an `is_dev_build` flag derived from this so the backend can
/// separate test traffic from real reviewer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildEnvironment {
    Development,
    Production,
}

impl BuildEnvironment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Anything that is not a production build counts as a dev build.
    #[must_use]
    pub const fn is_dev_build(self) -> bool {
        !matches!(self, Self::Production)
    }
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl fmt::Display for BuildEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Structural role of a curriculum node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The curriculum document's own root.
    Document,
    /// Grade level or age group.
    Level,
    /// Subject matter, e.g. math or physics.
    Subject,
    /// Section or subsection.
    Topic,
    /// An individual standard entry.
    Unit,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Level => "level",
            Self::Subject => "subject",
            Self::Topic => "topic",
            Self::Unit => "unit",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(Self::Document),
            "level" => Ok(Self::Level),
            "subject" => Ok(Self::Subject),
            "topic" => Ok(Self::Topic),
            "unit" => Ok(Self::Unit),
            other => Err(format!("unknown node kind: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// JudgmentMode
// ---------------------------------------------------------------------------

/// How a judgment was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentMode {
    /// Quick pairwise comparison from the review UI.
    RapidFeedback,
}

impl JudgmentMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RapidFeedback => "rapid_feedback",
        }
    }
}

impl fmt::Display for JudgmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
