//! Queue model for the planwire solver bridge.
//!
//! This crate owns the data the bridge exchanges with an external
//! assignment solver: read-once snapshots of the live build queue, and
//! the table of node assignments the solver hands back.
//!
//! # Components
//!
//! - [`source`]: traits the host queue implements so its items and nodes
//!   can be snapshotted without copying host internals
//! - [`snapshot`]: point-in-time views of queue items and candidate
//!   nodes, captured fresh for every exchange
//! - [`assignments`]: the id-to-node decision table, with an explicit
//!   marker for items the solver declined to place
//! - [`error`]: error types shared across the model

pub mod assignments;
pub mod error;
pub mod snapshot;
pub mod source;

pub use assignments::{Assignment, NodeAssignments, NodeAssignmentsBuilder, UNASSIGNED};
pub use error::{QueueError, QueueResult};
pub use snapshot::{NodeSnapshot, QueueItemSnapshot};
pub use source::{LiveItem, LiveNode};
