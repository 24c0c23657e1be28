pub mod range_types;

use crate::errors::{NodeMapError, NodeMapResult};
use crate::generation::config::GenerationConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().and_then(|mut path| {
        path.push("nodemap");
        fs::create_dir_all(&path).ok()?;
        path.push("config.toml");
        Some(path)
    })
}

/// Load the user config, falling back to defaults when it is missing or unreadable
pub fn load_config() -> GenerationConfig {
    if let Some(config_path) = get_config_path() {
        if config_path.exists() {
            match load_config_from(&config_path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring config at {}: {e}", config_path.display()),
            }
        }
    }
    GenerationConfig::default()
}

pub fn load_config_from(path: &Path) -> NodeMapResult<GenerationConfig> {
    if !path.exists() {
        return Err(NodeMapError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str::<GenerationConfig>(&contents)?)
}

/// Write `config` to `path`, or to the user config location when `path` is None
pub fn save_config(config: &GenerationConfig, path: Option<&Path>) -> NodeMapResult<PathBuf> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => get_config_path().ok_or(NodeMapError::ConfigDirNotFound)?,
    };
    let contents = toml::to_string_pretty(config)?;
    fs::write(&config_path, contents)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::range_types::TownProbability;

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("nodemap-test-{}.toml", std::process::id()));
        let config = GenerationConfig {
            nodes_to_generate: 17,
            min_node_distance: 2.5,
            town_probability: TownProbability::new(0.5),
            ..Default::default()
        };

        let written = save_config(&config, Some(&path)).unwrap();
        let loaded = load_config_from(&written).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here/nodemap.toml");
        match load_config_from(path) {
            Err(NodeMapError::ConfigFileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("expected ConfigFileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_is_deserialization_error() {
        let path = std::env::temp_dir().join(format!("nodemap-bad-{}.toml", std::process::id()));
        fs::write(&path, "nodes_to_generate = \"many\"").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(NodeMapError::DeserializationFailed(_))));
    }
}
