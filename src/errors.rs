use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeMapError {
    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    #[error("Config file not found at path: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Invalid generation config: {reason}")]
    InvalidConfig { reason: String },

    // Mask-related errors
    #[error("Invalid mask data: {reason}")]
    InvalidMaskData { reason: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    // CLI argument errors
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

/// Result type alias for all operations
pub type NodeMapResult<T> = Result<T, NodeMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodemap_error_display() {
        let err = NodeMapError::InvalidConfig {
            reason: "map_width must be positive".to_string(),
        };
        assert!(err.to_string().contains("Invalid generation config"));

        let err = NodeMapError::ConfigDirNotFound;
        assert_eq!(err.to_string(), "Failed to get config directory");
    }
}
