//! # align-core
//!
//! Wire entities and shared enums for the curriculum alignment API.
//!
//! This crate holds the types exchanged with the alignment backend:
//! - Entity structs mirroring the backend serializers (documents, nodes,
//!   judgments, section reviews, leaderboard rows, trained models, points)
//! - The paginated list envelope
//! - Small enums for build environment, node kind, and judgment mode
//!
//! No I/O happens here; `align-client` does the HTTP work.

pub mod entities;
pub mod enums;
pub mod envelope;

pub use envelope::Page;
