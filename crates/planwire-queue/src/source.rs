//! Live handles into the CI server's queue and executor model.
//!
//! The scheduler core owns the real queue items and nodes; this crate only
//! sees them through these object-safe traits. Idle-executor counts change
//! continuously as builds start and finish, so snapshots read them once at
//! capture time and never cache them.

/// Live view of one executor node.
pub trait LiveNode {
    /// Unique display identity of the node.
    fn name(&self) -> &str;

    /// Total executor slots configured on the node.
    fn executors(&self) -> u32;

    /// Idle executor slots right now, or `None` when the node cannot report
    /// executor accounting (offline, or disconnected mid-read).
    fn free_executors(&self) -> Option<u32>;
}

/// Live view of one pending queue item.
pub trait LiveItem {
    /// Unique identity of the queued job, stable across solver round-trips.
    fn id(&self) -> u64;

    /// Scheduling priority from the external priority source; opaque here.
    fn priority(&self) -> i32;

    /// Epoch milliseconds when the job entered the queue.
    fn in_queue_since(&self) -> i64;

    /// Human-readable job name. May be empty.
    fn name(&self) -> &str;

    /// Nodes the item is currently eligible to run on under its label
    /// constraints, in any order.
    fn compatible_nodes(&self) -> Vec<&dyn LiveNode>;
}
