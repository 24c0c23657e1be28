pub mod config;
pub mod errors;
pub mod events;
pub mod generation;
pub mod map;
pub mod nodes;

// Selective re-exports for external consumers

pub use errors::{NodeMapError, NodeMapResult};
pub use events::{GenerationListener, NodeMapEvent};
pub use generation::{GenerationConfig, GenerationOutcome, GenerationPipeline};
pub use map::{BuildableGrid, HeightMap, MaskSource, SpatialMask};
pub use nodes::{Node, NodeId, NodeVariant};
