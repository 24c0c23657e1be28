use crate::generation::config::GenerationConfig;
use crate::map::{MaskSource, SpatialMask};
use crate::nodes::{Node, NodeFactory, NodeId};
use glam::Vec2;
use rand::Rng;
use std::time::Instant;

/// Counts from one placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementReport {
    pub requested: usize,
    pub placed: usize,
    pub cycles: u32,
    pub rejected_by_mask: u32,
    pub rejected_by_distance: u32,
}

impl PlacementReport {
    /// The cycle budget ran out before the target count was reached
    pub fn is_degraded(&self) -> bool {
        self.placed < self.requested
    }
}

/// Scatters nodes over buildable map cells, keeping them `min_node_distance` apart
pub struct NodePlacer<'a> {
    config: &'a GenerationConfig,
    factory: NodeFactory,
}

impl<'a> NodePlacer<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            factory: NodeFactory::from_config(config),
        }
    }

    pub fn place<S: MaskSource, R: Rng + ?Sized>(
        &self,
        mask: &SpatialMask<S>,
        rng: &mut R,
    ) -> (Vec<Node>, PlacementReport) {
        let start_time = Instant::now();
        let mut report = PlacementReport {
            requested: self.config.nodes_to_generate,
            ..Default::default()
        };
        // Each cycle places at most one node
        let mut nodes: Vec<Node> = Vec::with_capacity(
            self.config
                .nodes_to_generate
                .min(self.config.max_generation_cycles as usize),
        );

        log::info!("Generating {} nodes", self.config.nodes_to_generate);

        while nodes.len() < self.config.nodes_to_generate
            && report.cycles < self.config.max_generation_cycles
        {
            report.cycles += 1;

            let variant = self.factory.sample_variant(rng);
            let position = Vec2::new(
                rng.gen_range(0.0..self.config.map_width as f32),
                rng.gen_range(0.0..self.config.map_height as f32),
            );

            if !mask.is_buildable(position) {
                report.rejected_by_mask += 1;
                continue;
            }

            if self.is_too_close(&nodes, position) {
                report.rejected_by_distance += 1;
                continue;
            }

            let id = NodeId(nodes.len() as u32);
            nodes.push(self.factory.create(id, variant, position, rng));
        }

        report.placed = nodes.len();

        if report.is_degraded() {
            log::warn!(
                "Failed to generate nodes in required cycles. {} of {} nodes generated \
                 ({} rejected by mask, {} by distance)",
                report.placed,
                report.requested,
                report.rejected_by_mask,
                report.rejected_by_distance
            );
        } else {
            log::info!(
                "Generated {} nodes in {}ms with {} cycles",
                report.placed,
                start_time.elapsed().as_millis(),
                report.cycles
            );
        }

        (nodes, report)
    }

    fn is_too_close(&self, nodes: &[Node], position: Vec2) -> bool {
        nodes
            .iter()
            .any(|n| n.position.distance(position) < self.config.min_node_distance)
    }
}
