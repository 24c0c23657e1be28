use crate::generation::cleaner::CleanupReport;
use crate::generation::connector::ConnectionReport;
use crate::generation::pipeline::GenerationSummary;
use crate::generation::placer::PlacementReport;

/// Progress and completion signals emitted by the generation pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeMapEvent {
    PlacementFinished(PlacementReport),
    ConnectionFinished(ConnectionReport),
    CleanupFinished(CleanupReport),
    /// Emitted once per run, after the final node list is ready
    NodeMapGenerated(GenerationSummary),
}

/// Receives pipeline events. Implemented for any `FnMut(&NodeMapEvent)`.
pub trait GenerationListener {
    fn on_event(&mut self, event: &NodeMapEvent);
}

impl<F: FnMut(&NodeMapEvent)> GenerationListener for F {
    fn on_event(&mut self, event: &NodeMapEvent) {
        self(event)
    }
}
