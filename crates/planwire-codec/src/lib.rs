//! planwire-codec: the JSON boundary between the build queue and an
//! external assignment solver.
//!
//! Renders read-once snapshots of the live queue as the outbound
//! document and parses the solver's answer back into a
//! [`NodeAssignments`](planwire_queue::NodeAssignments) table. Nothing
//! here talks to a solver process; transport is the caller's concern.
//!
//! # Exchange
//!
//! ```text
//! serialize:   &[&dyn LiveItem] + NodeAssignments → {"queue":[...]}
//! deserialize: {"solution":[...]}                 → NodeAssignments
//! ```
//!
//! Serialization is deterministic for a given queue state, so the same
//! state never re-triggers the solver with a different document.

pub mod error;
pub mod serializer;
mod wire;

pub use error::{CodecError, CodecResult};
pub use serializer::{deserialize, serialize};
