//! Point-in-time snapshots of queue items and their candidate nodes.
//!
//! Snapshots are built fresh on every serialize call from live handles and
//! discarded after encoding. Capture is deterministic for a given live
//! state: candidate nodes are sorted by display name, so identical inputs
//! always render identical documents. Serde field names and declaration
//! order are the wire contract of the snapshot document.

use serde::Serialize;
use tracing::warn;

use crate::assignments::NodeAssignments;
use crate::error::{QueueError, QueueResult};
use crate::source::{LiveItem, LiveNode};

/// Capacity view of one candidate node at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub name: String,
    /// Configured executor slots.
    pub executors: u32,
    /// Idle slots at capture time. Never exceeds `executors`.
    pub free_executors: u32,
}

impl NodeSnapshot {
    /// Read one node's identity and capacity.
    ///
    /// Fails with [`QueueError::NodeUnavailable`] when the node cannot
    /// report its idle-executor count. The free count is read once, never
    /// cached, and clamped to the configured total: the live value races
    /// with builds starting and finishing.
    pub fn capture(node: &dyn LiveNode) -> QueueResult<Self> {
        let free = node
            .free_executors()
            .ok_or_else(|| QueueError::NodeUnavailable(node.name().to_string()))?;
        let executors = node.executors();

        Ok(Self {
            name: node.name().to_string(),
            executors,
            free_executors: free.min(executors),
        })
    }
}

/// One pending job and its candidate nodes at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItemSnapshot {
    pub id: u64,
    pub priority: i32,
    /// Epoch milliseconds when the job entered the queue.
    pub in_queue_since: i64,
    pub name: String,
    /// Candidate nodes, sorted by name ascending. May be empty.
    pub nodes: Vec<NodeSnapshot>,
    /// Previously resolved node, when the assignment table holds one.
    pub assigned: Option<String>,
}

impl QueueItemSnapshot {
    /// Capture one queue item together with its candidate nodes and any
    /// previously resolved assignment.
    ///
    /// A candidate that cannot report executor accounting is dropped from
    /// `nodes` and logged; an unreachable node is simply not offered to the
    /// solver. `assigned` is `None` when the table has no entry for this
    /// item or the entry is explicitly unassigned.
    pub fn capture(item: &dyn LiveItem, assignments: &NodeAssignments) -> Self {
        let id = item.id();

        let mut nodes = Vec::new();
        for node in item.compatible_nodes() {
            match NodeSnapshot::capture(node) {
                Ok(snapshot) => nodes.push(snapshot),
                Err(err) => warn!(item = id, %err, "dropping candidate node"),
            }
        }
        nodes.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            id,
            priority: item.priority(),
            in_queue_since: item.in_queue_since(),
            name: item.name().to_string(),
            nodes,
            assigned: assignments.assigned_node(id).map(str::to_owned),
        }
    }
}
