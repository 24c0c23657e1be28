use super::{Node, NodeId, NodeVariant};
use crate::config::range_types::TownProbability;
use crate::generation::config::GenerationConfig;
use glam::Vec2;
use rand::Rng;
use std::ops::RangeInclusive;

/// Creates nodes with capacity and reach drawn from the configured ranges
#[derive(Debug, Clone)]
pub struct NodeFactory {
    capacity: RangeInclusive<u32>,
    range: RangeInclusive<f32>,
    town_probability: TownProbability,
}

impl NodeFactory {
    pub fn new(
        capacity: RangeInclusive<u32>,
        range: RangeInclusive<f32>,
        town_probability: TownProbability,
    ) -> Self {
        Self {
            capacity,
            range,
            town_probability,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            config.connection_capacity(),
            config.connection_range(),
            config.town_probability,
        )
    }

    /// Pick Town with the configured probability, Village otherwise
    pub fn sample_variant<R: Rng + ?Sized>(&self, rng: &mut R) -> NodeVariant {
        if rng.gen_bool(self.town_probability.get()) {
            NodeVariant::Town
        } else {
            NodeVariant::Village
        }
    }

    pub fn create<R: Rng + ?Sized>(
        &self,
        id: NodeId,
        variant: NodeVariant,
        position: Vec2,
        rng: &mut R,
    ) -> Node {
        let max_connections = rng.gen_range(self.capacity.clone());
        let connection_range = rng.gen_range(self.range.clone());
        Node::new(id, variant, position, max_connections, connection_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_created_nodes_respect_ranges() {
        let factory = NodeFactory::new(2..=4, 1.5..=6.0, TownProbability::default());
        let mut rng = Pcg64::seed_from_u64(7);

        for i in 0..200 {
            let node = factory.create(NodeId(i), NodeVariant::Village, Vec2::ZERO, &mut rng);
            assert!((2..=4).contains(&node.max_connections));
            assert!((1.5..=6.0).contains(&node.connection_range));
            assert_eq!(node.connection_count(), 0);
        }
    }

    #[test]
    fn test_variant_split_follows_probability() {
        let factory = NodeFactory::new(1..=3, 3.0..=5.0, TownProbability::new(0.25));
        let mut rng = Pcg64::seed_from_u64(12345);

        let towns = (0..4000)
            .filter(|_| factory.sample_variant(&mut rng) == NodeVariant::Town)
            .count();
        assert!((800..1200).contains(&towns), "got {towns} towns out of 4000");
    }

    #[test]
    fn test_extreme_probabilities() {
        let mut rng = Pcg64::seed_from_u64(1);
        let all_towns = NodeFactory::new(1..=1, 1.0..=1.0, TownProbability::new(1.0));
        let no_towns = NodeFactory::new(1..=1, 1.0..=1.0, TownProbability::new(0.0));
        for _ in 0..50 {
            assert_eq!(all_towns.sample_variant(&mut rng), NodeVariant::Town);
            assert_eq!(no_towns.sample_variant(&mut rng), NodeVariant::Village);
        }
    }

    #[test]
    fn test_same_seed_same_node() {
        let factory = NodeFactory::new(1..=5, 2.0..=8.0, TownProbability::default());
        let a = factory.create(NodeId(0), NodeVariant::Town, Vec2::ONE, &mut Pcg64::seed_from_u64(9));
        let b = factory.create(NodeId(0), NodeVariant::Town, Vec2::ONE, &mut Pcg64::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
