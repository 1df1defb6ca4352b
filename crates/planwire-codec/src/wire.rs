//! On-the-wire document shapes.
//!
//! Field names and declaration order here are the protocol. The outbound
//! document carries borrowed snapshots so encoding never clones the
//! capture; the inbound shapes own their strings because they outlive the
//! parsed text only briefly.

use serde::{Deserialize, Serialize};

use planwire_queue::QueueItemSnapshot;

/// Outbound envelope: `{"queue": [...]}`.
#[derive(Debug, Serialize)]
pub(crate) struct QueueDocument<'a> {
    pub queue: &'a [QueueItemSnapshot],
}

/// Inbound envelope: `{"solution": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SolutionDocument {
    pub solution: Vec<SolutionEntry>,
}

/// One solver decision.
///
/// Unknown keys are tolerated so the solver side can grow its schema
/// without breaking older bridges.
#[derive(Debug, Deserialize)]
pub(crate) struct SolutionEntry {
    pub id: u64,
    /// Echo of the job name. Informational only; decisions key on `id`.
    pub name: Option<String>,
    /// Target node name, or the not-assigned marker.
    pub node: String,
}
