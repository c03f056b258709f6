use crate::{NodeId, Rank, INITIAL_RANK, NO_PREVIOUS_RANK};
use derive_new::new;
use std::sync::Arc;

/// The state of one graph node between two supersteps.
///
/// `out_edges` is shared: it is fixed by the loader and only ever handed along from one
/// superstep to the next, never modified. Duplicate targets are kept, each receives its own
/// share of the node's rank.
#[derive(new, Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub current_rank: Rank,
    pub previous_rank: Rank,
    pub out_edges: Arc<[NodeId]>,
}

impl NodeRecord {
    /// A freshly loaded record with the initial rank and no previous rank.
    pub fn initial(id: NodeId, out_edges: Vec<NodeId>) -> Self {
        Self::new(id, INITIAL_RANK, NO_PREVIOUS_RANK, out_edges.into())
    }

    /// Nodes without out-edges cannot hand out their rank explicitly.
    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.out_edges.is_empty()
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }
}

/// A message sent during a superstep. The target node is carried next to the message.
#[derive(Debug, Clone, PartialEq)]
pub enum RankMessage {
    /// Sent by a node to itself so that the aggregation can rebuild the full record.
    SelfCarry { rank: Rank, out_edges: Arc<[NodeId]> },
    /// A share of a predecessor's rank.
    Contribution { share: Rank },
}
