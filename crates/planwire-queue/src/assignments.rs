//! Job-to-node assignment table built from a solver round-trip.
//!
//! The solver answers with one decision per queue item: a node name, or the
//! `not-assigned` sentinel when it declined to place the job. The table keeps
//! those decisions queryable by item id. Internally "never recorded" and
//! "recorded but unassigned" stay distinct; only the wire collapses the
//! latter to the sentinel string.

use std::collections::HashMap;

use crate::error::{QueueError, QueueResult};

/// Wire sentinel the solver uses for "no node chosen".
pub const UNASSIGNED: &str = "not-assigned";

/// One solver decision for a queue item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Run on the named node.
    Node(String),
    /// Explicitly left unplaced by the solver.
    Unassigned,
}

impl Assignment {
    /// Parse a wire node value; the sentinel maps to [`Assignment::Unassigned`].
    pub fn from_wire(node: impl Into<String>) -> Self {
        let node = node.into();
        if node == UNASSIGNED {
            Assignment::Unassigned
        } else {
            Assignment::Node(node)
        }
    }

    /// Wire representation: the node name, or the sentinel.
    pub fn as_wire(&self) -> &str {
        match self {
            Assignment::Node(name) => name,
            Assignment::Unassigned => UNASSIGNED,
        }
    }

    /// The assigned node, when there is one.
    pub fn node(&self) -> Option<&str> {
        match self {
            Assignment::Node(name) => Some(name),
            Assignment::Unassigned => None,
        }
    }
}

/// Immutable job-id to node decision table from one solver round-trip.
///
/// Ids are unique within a table. Instances are cheap to clone and safe to
/// share across threads; a fresh table replaces the old one after each
/// round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAssignments {
    entries: HashMap<u64, Assignment>,
}

impl NodeAssignments {
    /// Start building a table.
    pub fn builder() -> NodeAssignmentsBuilder {
        NodeAssignmentsBuilder::default()
    }

    /// Number of recorded ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the id was recorded at all, assigned or not.
    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    /// The recorded decision for an id.
    pub fn get(&self, id: u64) -> Option<&Assignment> {
        self.entries.get(&id)
    }

    /// Wire-level node value for an id: the node name, or the sentinel when
    /// the solver explicitly declined to place the job. Fails with
    /// [`QueueError::UnknownId`] when the id was never recorded.
    pub fn node_for(&self, id: u64) -> QueueResult<&str> {
        self.entries
            .get(&id)
            .map(Assignment::as_wire)
            .ok_or(QueueError::UnknownId(id))
    }

    /// The node actually assigned to an id; `None` when the id is unknown to
    /// the table or explicitly unassigned. This is the view the snapshot
    /// serializer renders as JSON null.
    pub fn assigned_node(&self, id: u64) -> Option<&str> {
        self.entries.get(&id).and_then(Assignment::node)
    }

    /// Iterate recorded decisions, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Assignment)> {
        self.entries.iter().map(|(id, assignment)| (*id, assignment))
    }
}

/// Collects decisions one at a time, then freezes into [`NodeAssignments`].
#[derive(Debug, Default)]
pub struct NodeAssignmentsBuilder {
    entries: HashMap<u64, Assignment>,
}

impl NodeAssignmentsBuilder {
    /// Record a decision for `id`. Re-assigning an id replaces the previous
    /// value. The wire sentinel is stored as [`Assignment::Unassigned`].
    pub fn assign(mut self, id: u64, node: impl Into<String>) -> Self {
        self.entries.insert(id, Assignment::from_wire(node));
        self
    }

    /// Freeze into an immutable table.
    pub fn build(self) -> NodeAssignments {
        NodeAssignments {
            entries: self.entries,
        }
    }
}
