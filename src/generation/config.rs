//! Generation parameters shared by every pipeline stage.

use crate::config::range_types::TownProbability;
use crate::errors::{NodeMapError, NodeMapResult};
use crate::generation::constants::*;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use validator::Validate;

/// Immutable configuration bundle consumed by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of nodes the placer tries to create.
    pub nodes_to_generate: usize,
    /// Total placement attempts before giving up, accepted or not.
    #[validate(range(min = 1))]
    pub max_generation_cycles: u32,
    #[validate(range(min = 1))]
    pub map_width: u32,
    #[validate(range(min = 1))]
    pub map_height: u32,
    /// Nodes closer than this are rejected at placement.
    #[validate(range(min = 0.0))]
    pub min_node_distance: f32,
    /// Upper bound of the per-node connection range.
    #[validate(range(min = 0.0))]
    pub max_connection_distance: f32,
    /// Lower bound of the per-node degree capacity. Connection stops early
    /// once every node holds at least this many links.
    #[validate(range(min = 1))]
    pub min_node_connections: u32,
    #[validate(range(min = 1))]
    pub max_node_connections: u32,
    /// Consecutive failed connection attempts tolerated before giving up.
    #[validate(range(min = 1))]
    pub connection_attempt_timeout: u32,
    pub town_probability: TownProbability,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            nodes_to_generate: DEFAULT_NODES_TO_GENERATE,
            max_generation_cycles: DEFAULT_MAX_GENERATION_CYCLES,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            min_node_distance: DEFAULT_MIN_NODE_DISTANCE,
            max_connection_distance: DEFAULT_MAX_CONNECTION_DISTANCE,
            min_node_connections: DEFAULT_MIN_NODE_CONNECTIONS,
            max_node_connections: DEFAULT_MAX_NODE_CONNECTIONS,
            connection_attempt_timeout: DEFAULT_CONNECTION_ATTEMPT_TIMEOUT,
            town_probability: TownProbability::default(),
        }
    }
}

impl GenerationConfig {
    /// Check field ranges and cross-field constraints before any work starts
    pub fn validate_config(&self) -> NodeMapResult<()> {
        self.validate().map_err(|validation_errors| {
            let error_details = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                    format!("{field}: {}", error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            NodeMapError::InvalidConfig {
                reason: error_details,
            }
        })?;

        if !self.min_node_distance.is_finite() || !self.max_connection_distance.is_finite() {
            return Err(NodeMapError::InvalidConfig {
                reason: "Distances must be finite".to_string(),
            });
        }

        if self.min_node_connections > self.max_node_connections {
            return Err(NodeMapError::InvalidConfig {
                reason: format!(
                    "min_node_connections ({}) exceeds max_node_connections ({})",
                    self.min_node_connections, self.max_node_connections
                ),
            });
        }

        if self.min_node_distance >= self.max_connection_distance {
            return Err(NodeMapError::InvalidConfig {
                reason: format!(
                    "min_node_distance ({}) must be less than max_connection_distance ({}), \
                     otherwise no placed node can reach another",
                    self.min_node_distance, self.max_connection_distance
                ),
            });
        }

        if !(0.0..=1.0).contains(&self.town_probability.get()) {
            return Err(NodeMapError::InvalidConfig {
                reason: format!(
                    "town_probability {} is outside [0.0, 1.0]",
                    self.town_probability
                ),
            });
        }

        Ok(())
    }

    /// Range the per-node degree capacity is drawn from
    pub fn connection_capacity(&self) -> RangeInclusive<u32> {
        self.min_node_connections..=self.max_node_connections
    }

    /// Range the per-node connection reach is drawn from
    pub fn connection_range(&self) -> RangeInclusive<f32> {
        self.min_node_distance..=self.max_connection_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate_config().is_ok());
        assert_eq!(config.nodes_to_generate, 50);
        assert_eq!(config.connection_capacity(), 1..=3);
    }

    #[test]
    fn test_zero_map_dimensions_rejected() {
        let config = GenerationConfig {
            map_width: 0,
            ..Default::default()
        };
        let err = config.validate_config().unwrap_err();
        assert!(err.to_string().contains("map_width"));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let config = GenerationConfig {
            min_node_distance: -1.0,
            ..Default::default()
        };
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_min_distance_must_be_below_connection_distance() {
        let config = GenerationConfig {
            min_node_distance: 5.0,
            max_connection_distance: 5.0,
            ..Default::default()
        };
        let err = config.validate_config().unwrap_err();
        assert!(matches!(err, NodeMapError::InvalidConfig { .. }));
        assert!(err.to_string().contains("min_node_distance"));
    }

    #[test]
    fn test_inverted_degree_bounds_rejected() {
        let config = GenerationConfig {
            min_node_connections: 4,
            max_node_connections: 2,
            ..Default::default()
        };
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GenerationConfig = toml::from_str("nodes_to_generate = 12").unwrap();
        assert_eq!(config.nodes_to_generate, 12);
        assert_eq!(config.map_width, DEFAULT_MAP_WIDTH);
    }
}
