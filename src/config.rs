use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Cocoon configuration (loaded from .cocoon.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CocoonConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Container runtime executable used to pull images and run scans
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Skip the image pull step before scanning
    #[serde(default)]
    pub skip_pull: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            binary: default_binary(),
            skip_pull: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_format(),
        }
    }
}

fn default_binary() -> String {
    "docker".to_string()
}

fn default_format() -> String {
    "terminal".to_string()
}

impl CocoonConfig {
    /// Try to load .cocoon.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<CocoonConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from the given path to find .cocoon.toml
fn find_config_file(start: &Path) -> Option<std::path::PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(".cocoon.toml");
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Create a default .cocoon.toml in the current directory
pub fn init_config() -> Result<()> {
    let config_path = std::env::current_dir()?.join(".cocoon.toml");

    if config_path.exists() {
        println!("⚠️  .cocoon.toml already exists in this directory");
        return Ok(());
    }

    let default_config = r#"# Cocoon configuration

[runtime]
# Container runtime used to pull images and run scans ("docker", "podman", ...)
binary = "docker"

# Skip the image pull step before scanning
# skip_pull = false

[output]
# Default output format: "terminal" or "json"
format = "terminal"
"#;

    std::fs::write(&config_path, default_config)?;
    println!("✅ Created .cocoon.toml");
    println!("   Edit it to customize runtime and output defaults.");

    Ok(())
}
