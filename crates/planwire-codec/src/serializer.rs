//! Document exchange with the external solver.
//!
//! [`serialize`] renders the live queue as the outbound document and
//! [`deserialize`] parses the returned solution into a
//! [`NodeAssignments`] table. Both directions are stateless free
//! functions over shared references, so callers on different threads can
//! encode against the same table without coordination.

use tracing::debug;

use planwire_queue::{LiveItem, NodeAssignments, QueueItemSnapshot};

use crate::error::{CodecError, CodecResult};
use crate::wire::{QueueDocument, SolutionDocument};

/// Render the live queue as the outbound solver document.
///
/// Every item is snapshotted fresh from its live handles at call time.
/// Item order is preserved and each item's candidate nodes are sorted by
/// name, so the same queue state always encodes to the same bytes.
/// `assignments` supplies the previously resolved node for items the
/// solver has placed before.
pub fn serialize(items: &[&dyn LiveItem], assignments: &NodeAssignments) -> CodecResult<String> {
    let queue: Vec<QueueItemSnapshot> = items
        .iter()
        .map(|item| QueueItemSnapshot::capture(*item, assignments))
        .collect();

    debug!(items = queue.len(), "encoding queue document");

    serde_json::to_string(&QueueDocument { queue: &queue })
        .map_err(|err| CodecError::Encode(err.to_string()))
}

/// Parse a solver solution document into an assignment table.
///
/// Entries are applied in document order, so a duplicated id keeps the
/// last decision. The solver's not-assigned marker is recorded as an
/// explicit unassigned entry rather than dropped: an item the solver
/// declined to place is still a known item, distinct from one the solver
/// never saw.
pub fn deserialize(text: &str) -> CodecResult<NodeAssignments> {
    let document: SolutionDocument =
        serde_json::from_str(text).map_err(|err| CodecError::MalformedDocument(err.to_string()))?;

    let mut builder = NodeAssignments::builder();
    for entry in document.solution {
        debug!(
            id = entry.id,
            name = entry.name.as_deref().unwrap_or(""),
            node = %entry.node,
            "recording solver decision"
        );
        builder = builder.assign(entry.id, entry.node);
    }
    Ok(builder.build())
}
