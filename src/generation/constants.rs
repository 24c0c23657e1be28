/// Constants for node map generation
/// Default values for placement
pub const DEFAULT_NODES_TO_GENERATE: usize = 50;
pub const DEFAULT_MAX_GENERATION_CYCLES: u32 = 1000;
pub const DEFAULT_MAP_WIDTH: u32 = 100;
pub const DEFAULT_MAP_HEIGHT: u32 = 100;
pub const DEFAULT_MIN_NODE_DISTANCE: f32 = 3.0;

/// Default values for connection
pub const DEFAULT_MAX_CONNECTION_DISTANCE: f32 = 5.0;
pub const DEFAULT_MIN_NODE_CONNECTIONS: u32 = 1;
pub const DEFAULT_MAX_NODE_CONNECTIONS: u32 = 3;
pub const DEFAULT_CONNECTION_ATTEMPT_TIMEOUT: u32 = 20;

/// Render colors (RGBA)
pub const TOWN_COLOR: [u8; 4] = [255, 215, 0, 255];
pub const VILLAGE_COLOR: [u8; 4] = [0, 128, 255, 255];
pub const CONNECTION_COLOR: [u8; 4] = [255, 0, 0, 255];
