use crate::generation::config::GenerationConfig;
use crate::nodes::{Node, link};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Instant;

/// Why the connection pass stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// Every node reached the minimum degree
    DegreeSatisfied,
    /// All nodes were visited
    NodesExhausted,
    /// The consecutive-failure budget ran out
    TimedOut,
}

impl fmt::Display for ConnectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionOutcome::DegreeSatisfied => write!(f, "minimum degree satisfied"),
            ConnectionOutcome::NodesExhausted => write!(f, "all nodes visited"),
            ConnectionOutcome::TimedOut => write!(f, "connection attempts timed out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionReport {
    pub outcome: ConnectionOutcome,
    pub connections_made: usize,
    pub nodes_processed: usize,
    /// Processed nodes that gained at least one link
    pub nodes_connected: usize,
    pub total_nodes: usize,
}

impl ConnectionReport {
    pub fn is_degraded(&self) -> bool {
        self.outcome == ConnectionOutcome::TimedOut
    }
}

/// Candidate ordered by distance, then scan position. The heap is a max-heap,
/// so the worst kept candidate sits on top and is evicted first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f32,
    index: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Indices of the `k` nearest nodes not yet linked to `nodes[origin]`,
/// nearest first. Equal distances keep the earlier node.
pub fn nearest_candidates(nodes: &[Node], origin: usize, k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }

    let node = &nodes[origin];
    let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);

    for (index, other) in nodes.iter().enumerate() {
        if index == origin || node.is_connected(other.id) {
            continue;
        }
        let candidate = Candidate {
            distance: node.distance(other),
            index,
        };
        if heap.len() < k {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            heap.pop();
            heap.push(candidate);
        }
    }

    heap.into_sorted_vec().into_iter().map(|c| c.index).collect()
}

/// Greedily links each node to its nearest reachable neighbours
pub struct GraphConnector<'a> {
    config: &'a GenerationConfig,
}

impl<'a> GraphConnector<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    pub fn connect(&self, nodes: &mut [Node]) -> ConnectionReport {
        let start_time = Instant::now();
        let timeout = self.config.connection_attempt_timeout;
        let mut failed_attempts = 0u32;
        let mut report = ConnectionReport {
            outcome: ConnectionOutcome::NodesExhausted,
            connections_made: 0,
            nodes_processed: 0,
            nodes_connected: 0,
            total_nodes: nodes.len(),
        };

        log::info!("Connecting {} nodes", nodes.len());

        for i in 0..nodes.len() {
            if self.lowest_degree(nodes) >= self.config.min_node_connections as usize {
                report.outcome = ConnectionOutcome::DegreeSatisfied;
                break;
            }
            if failed_attempts >= timeout {
                report.outcome = ConnectionOutcome::TimedOut;
                break;
            }
            if nodes[i].is_full() {
                continue;
            }

            failed_attempts = 0;
            report.nodes_processed += 1;
            let mut linked_here = 0;

            for candidate in nearest_candidates(nodes, i, nodes[i].remaining_capacity()) {
                if failed_attempts >= timeout || nodes[i].is_full() {
                    break;
                }

                // Either endpoint's reach is enough
                let distance = nodes[i].distance(&nodes[candidate]);
                if distance > nodes[i].connection_range
                    && distance > nodes[candidate].connection_range
                {
                    failed_attempts += 1;
                    continue;
                }

                if nodes[candidate].is_full() {
                    failed_attempts += 1;
                    continue;
                }

                if link(nodes, i, candidate) {
                    failed_attempts = 0;
                    linked_here += 1;
                    report.connections_made += 1;
                }
            }

            log::debug!(
                "Node {} linked to {} neighbours ({} consecutive failures)",
                nodes[i].id,
                linked_here,
                failed_attempts
            );
            if linked_here > 0 {
                report.nodes_connected += 1;
            }
        }

        // The last processed node can exhaust the budget or complete the graph
        // with no later iteration left to notice
        if report.outcome == ConnectionOutcome::NodesExhausted && !nodes.is_empty() {
            if failed_attempts >= timeout {
                report.outcome = ConnectionOutcome::TimedOut;
            } else if self.lowest_degree(nodes) >= self.config.min_node_connections as usize {
                report.outcome = ConnectionOutcome::DegreeSatisfied;
            }
        }

        match report.outcome {
            ConnectionOutcome::TimedOut => log::warn!(
                "Failed to connect nodes in required attempts. {} connections made, {} of {} nodes connected",
                report.connections_made,
                report.nodes_connected,
                report.total_nodes
            ),
            outcome => log::info!(
                "Connected nodes in {}ms with {} connections ({})",
                start_time.elapsed().as_millis(),
                report.connections_made,
                outcome
            ),
        }

        report
    }

    /// Smallest degree in the set; an empty set has nothing left to satisfy
    fn lowest_degree(&self, nodes: &[Node]) -> usize {
        nodes
            .iter()
            .map(Node::connection_count)
            .min()
            .unwrap_or(usize::MAX)
    }
}
