mod iteration_stats;
mod node_record;

// Public exports from root of the crate.
pub use iteration_stats::{change_rate, IterationStats};
pub use node_record::{NodeRecord, RankMessage};

// Universally used types.
pub type NodeId = u64;
pub type Rank = f64;
pub type Superstep = usize;

/// Value of `previous_rank` for a record that has not been through a superstep yet.
pub const NO_PREVIOUS_RANK: Rank = -1_000_000.0;
/// Rank every node starts with after loading.
pub const INITIAL_RANK: Rank = 1.0;

pub const DEFAULT_DAMPING: Rank = 0.9;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_THRESHOLD: Rank = 0.01;
pub const DEFAULT_MAX_ITERATIONS: Superstep = 200;
/// The first superstep compares against the loaded ranks, so it may not end the iteration.
pub const DEFAULT_MIN_ITERATIONS: Superstep = 2;

/// Returns `true` if `rank` is the "no prior value" marker.
#[inline]
#[allow(clippy::float_cmp)]
pub fn is_no_previous_rank(rank: Rank) -> bool {
    rank == NO_PREVIOUS_RANK
}

/// The two halves of a superstep.
///
/// A superstep first expands every record of a partition into messages (`propagate`), which
/// are then regrouped by target node and folded back into one record per node (`aggregate`).
/// Both halves must be pure functions of their inputs so that a failed partition can simply be
/// re-executed.
///
/// # Examples
/// ```notest
/// impl SuperstepComputation for PageRank {
///     fn propagate<E: FnMut(NodeId, RankMessage)>(&self, record: &NodeRecord, emit: E) { .. }
///     fn aggregate(..) -> Result<Option<NodeRecord>, Self::Error> { .. }
/// }
/// ```
pub trait SuperstepComputation: Send + Sync {
    /// Error raised by `aggregate` when the message set for a node is inconsistent.
    type Error: Send;

    /// Emits all messages produced by `record`, each tagged with its target node.
    fn propagate<E: FnMut(NodeId, RankMessage)>(&self, record: &NodeRecord, emit: E);

    /// Folds every message addressed to `node` in one superstep into the node's new record.
    ///
    /// `leak` is the uniform mass correction broadcast for this superstep. Returns `None` if no
    /// record should exist for `node`.
    fn aggregate(
        &self,
        node: NodeId,
        messages: Vec<RankMessage>,
        leak: Rank,
    ) -> Result<Option<NodeRecord>, Self::Error>;
}
