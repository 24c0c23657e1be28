//! Node map generation: placement, connection and cleanup.

pub mod cleaner;
pub mod config;
pub mod connector;
pub mod constants;
pub mod pipeline;
pub mod placer;

pub use cleaner::{CleanupReport, GraphCleaner};
pub use config::GenerationConfig;
pub use connector::{ConnectionOutcome, ConnectionReport, GraphConnector};
pub use pipeline::{GenerationOutcome, GenerationPipeline, GenerationSummary};
pub use placer::{NodePlacer, PlacementReport};
