use crate::{is_no_previous_rank, NodeRecord, Rank};
use derive_new::new;

/// Convergence summary of one superstep.
///
/// All three fields reduce with associative and commutative operators (max, count, sum), so
/// partial stats computed for each partition can be merged in any order.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    pub max_change_rate: Rank,
    pub node_count: i64,
    pub total_rank: Rank,
}

impl Default for IterationStats {
    fn default() -> Self {
        Self::empty()
    }
}

impl IterationStats {
    /// The identity of `merge`.
    pub const fn empty() -> Self {
        Self { max_change_rate: 0.0, node_count: 0, total_rank: 0.0 }
    }

    /// Stats of a single record.
    pub fn for_record(record: &NodeRecord) -> Self {
        Self {
            max_change_rate: change_rate(record.current_rank, record.previous_rank),
            node_count: 1,
            total_rank: record.current_rank,
        }
    }

    /// Combines two partial stats.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            max_change_rate: self.max_change_rate.max(other.max_change_rate),
            node_count: self.node_count + other.node_count,
            total_rank: self.total_rank + other.total_rank,
        }
    }

    /// Adds one record to the partial stats.
    #[must_use]
    pub fn add_record(self, record: &NodeRecord) -> Self {
        self.merge(Self::for_record(record))
    }

    /// Mass lost in the superstep, spread uniformly over all nodes.
    #[allow(clippy::cast_precision_loss)]
    pub fn leak(&self) -> Rank {
        if self.node_count > 0 {
            let node_count = self.node_count as Rank;
            (node_count - self.total_rank) / node_count
        } else {
            0.0
        }
    }
}

impl std::iter::FromIterator<IterationStats> for IterationStats {
    fn from_iter<I: IntoIterator<Item = IterationStats>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::merge)
    }
}

/// Relative change between two consecutive ranks of a node.
///
/// A node that has no previous rank yet has not settled at all, so its change is unbounded.
#[allow(clippy::float_cmp)]
pub fn change_rate(current: Rank, previous: Rank) -> Rank {
    if is_no_previous_rank(previous) {
        return Rank::INFINITY;
    }
    let diff = (current - previous).abs();
    if previous == 0.0 {
        if diff == 0.0 {
            0.0
        } else {
            Rank::INFINITY
        }
    } else {
        diff / previous.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::change_rate;
    use crate::{IterationStats, NodeRecord, NO_PREVIOUS_RANK};

    fn record(current: f64, previous: f64) -> NodeRecord {
        NodeRecord::new(1, current, previous, Vec::new().into())
    }

    #[test]
    fn change_rates() {
        assert!((change_rate(1.1, 1.0) - 0.1).abs() < 1e-12);
        assert!((change_rate(0.9, 1.0) - 0.1).abs() < 1e-12);
        assert_eq!(change_rate(0.5, NO_PREVIOUS_RANK), f64::INFINITY);
        assert_eq!(change_rate(0.0, 0.0), 0.0);
        assert_eq!(change_rate(0.2, 0.0), f64::INFINITY);
    }

    #[test]
    fn merge_is_order_independent() {
        let records = vec![record(1.5, 1.0), record(0.25, 0.5), record(2.0, 2.0)];
        let forward: IterationStats = records.iter().map(IterationStats::for_record).collect();
        let backward: IterationStats =
            records.iter().rev().map(IterationStats::for_record).collect();
        assert_eq!(forward, backward);
        assert_eq!(forward.node_count, 3);
        assert!((forward.max_change_rate - 0.5).abs() < 1e-12);
        assert!((forward.total_rank - 3.75).abs() < 1e-12);

        let partial = IterationStats::empty().add_record(&records[0]);
        let rest = IterationStats::empty().add_record(&records[1]).add_record(&records[2]);
        assert_eq!(partial.merge(rest), forward);
    }

    #[test]
    fn leak() {
        assert_eq!(IterationStats::empty().leak(), 0.0);
        let stats = IterationStats::new(0.3, 4, 3.0);
        assert!((stats.leak() - 0.25).abs() < 1e-12);
    }
}
