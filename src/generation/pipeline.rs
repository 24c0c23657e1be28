use crate::errors::NodeMapResult;
use crate::events::{GenerationListener, NodeMapEvent};
use crate::generation::cleaner::{CleanupReport, GraphCleaner};
use crate::generation::config::GenerationConfig;
use crate::generation::connector::{ConnectionReport, GraphConnector};
use crate::generation::placer::{NodePlacer, PlacementReport};
use crate::map::{MaskSource, SpatialMask};
use crate::nodes::{Node, NodeVariant};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::time::Instant;

/// Headline counts of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub requested: usize,
    pub generated: usize,
    pub connections: usize,
    pub discarded: usize,
    pub remaining: usize,
    pub towns: usize,
    pub villages: usize,
    pub degraded: bool,
}

/// Final node list plus what each stage reported
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub nodes: Vec<Node>,
    pub placement: PlacementReport,
    pub connection: ConnectionReport,
    pub cleanup: CleanupReport,
}

impl GenerationOutcome {
    /// Fewer nodes than requested, or the connection pass timed out
    pub fn is_degraded(&self) -> bool {
        self.placement.is_degraded() || self.connection.is_degraded()
    }

    pub fn summary(&self) -> GenerationSummary {
        let towns = self
            .nodes
            .iter()
            .filter(|n| n.variant == NodeVariant::Town)
            .count();
        GenerationSummary {
            requested: self.placement.requested,
            generated: self.placement.placed,
            connections: self.connection.connections_made,
            discarded: self.cleanup.discarded,
            remaining: self.nodes.len(),
            towns,
            villages: self.nodes.len() - towns,
            degraded: self.is_degraded(),
        }
    }
}

/// Runs placement, connection and cleanup in sequence
pub struct GenerationPipeline<R = Pcg64> {
    config: GenerationConfig,
    rng: R,
    listeners: Vec<Box<dyn GenerationListener>>,
}

impl GenerationPipeline<Pcg64> {
    /// Validate `config` and seed a fresh generator
    pub fn new(config: GenerationConfig, seed: u64) -> NodeMapResult<Self> {
        Self::with_rng(config, Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> GenerationPipeline<R> {
    pub fn with_rng(config: GenerationConfig, rng: R) -> NodeMapResult<Self> {
        config.validate_config()?;
        Ok(Self {
            config,
            rng,
            listeners: Vec::new(),
        })
    }

    pub fn add_listener(&mut self, listener: impl GenerationListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Generate a node map over `source`, stretched to the configured map size.
    /// Runs again continue the same random stream.
    pub fn generate<S: MaskSource>(&mut self, source: &S) -> GenerationOutcome {
        let start_time = Instant::now();
        let mask = SpatialMask::new(source, self.config.map_width, self.config.map_height);

        let (mut nodes, placement) = NodePlacer::new(&self.config).place(&mask, &mut self.rng);
        self.emit(NodeMapEvent::PlacementFinished(placement));

        let connection = GraphConnector::new(&self.config).connect(&mut nodes);
        self.emit(NodeMapEvent::ConnectionFinished(connection));

        let (nodes, cleanup) = GraphCleaner::clean(nodes);
        self.emit(NodeMapEvent::CleanupFinished(cleanup));

        let outcome = GenerationOutcome {
            nodes,
            placement,
            connection,
            cleanup,
        };
        let summary = outcome.summary();

        if summary.degraded {
            log::warn!(
                "Node map generated with degraded result: {} of {} nodes kept ({} requested)",
                summary.remaining,
                summary.generated,
                summary.requested
            );
        } else {
            log::info!(
                "Node map generated in {}ms: {} nodes, {} connections",
                start_time.elapsed().as_millis(),
                summary.remaining,
                summary.connections
            );
        }

        self.emit(NodeMapEvent::NodeMapGenerated(summary));
        outcome
    }

    fn emit(&mut self, event: NodeMapEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}
