use std::path::Path;

use anyhow::{Context, Result};
use simulation::SimConfig;

/// Load the simulation config from a JSON file, or the defaults when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = SimConfig::from_json(&json)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    tracing::info!(path = %path.display(), "loaded simulation config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), SimConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("petsim-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"event_probability": 0.5}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.event_probability, 0.5);
        assert_eq!(config.initial_hunger, 50);
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/petsim.json");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
