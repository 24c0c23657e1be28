use crate::nodes::{Node, NodeId};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanupReport {
    pub generated: usize,
    pub discarded: usize,
}

impl CleanupReport {
    pub fn remaining(&self) -> usize {
        self.generated - self.discarded
    }
}

/// Discards nodes that ended up without any connection
pub struct GraphCleaner;

impl GraphCleaner {
    pub fn clean(nodes: Vec<Node>) -> (Vec<Node>, CleanupReport) {
        let generated = nodes.len();

        // Mark first, then filter
        let isolated: HashSet<NodeId> = nodes
            .iter()
            .filter(|n| n.connection_count() == 0)
            .map(|n| n.id)
            .collect();

        let survivors: Vec<Node> = nodes
            .into_iter()
            .filter(|n| !isolated.contains(&n.id))
            .collect();

        let report = CleanupReport {
            generated,
            discarded: isolated.len(),
        };
        log::info!("{} of {} nodes discarded", report.discarded, report.generated);

        (survivors, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{NodeVariant, link};
    use glam::Vec2;

    fn nodes(count: u32) -> Vec<Node> {
        (0..count)
            .map(|i| Node::new(NodeId(i), NodeVariant::Town, Vec2::new(i as f32, 0.0), 2, 3.0))
            .collect()
    }

    #[test]
    fn test_isolated_nodes_removed_in_order() {
        let mut nodes = nodes(5);
        assert!(link(&mut nodes, 0, 3));
        assert!(link(&mut nodes, 3, 4));

        let (survivors, report) = GraphCleaner::clean(nodes);

        let ids: Vec<NodeId> = survivors.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NodeId(0), NodeId(3), NodeId(4)]);
        assert_eq!(report.discarded, 2);
        assert_eq!(report.generated, 5);
        assert_eq!(report.remaining(), 3);
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let mut nodes = nodes(6);
        assert!(link(&mut nodes, 1, 2));
        assert!(link(&mut nodes, 4, 5));

        let (once, _) = GraphCleaner::clean(nodes);
        let (twice, report) = GraphCleaner::clean(once.clone());

        assert_eq!(once, twice);
        assert_eq!(report.discarded, 0);
    }

    #[test]
    fn test_all_isolated_leaves_nothing() {
        let (survivors, report) = GraphCleaner::clean(nodes(10));
        assert!(survivors.is_empty());
        assert_eq!(report.discarded, 10);
    }
}
