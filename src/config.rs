use std::{env, fs, path::PathBuf};

use crate::prelude::*;
use microbench::GroupingKey;
use nestify::nest;
use serde::{Deserialize, Serialize};

nest! {
    #[derive(Debug, Default, Deserialize, Serialize)]*
    #[serde(rename_all = "kebab-case", default)]*
    /// Persistent configuration for the arewefastyet CLI.
    ///
    /// Stored at `~/.config/arewefastyet/config.yaml` following the XDG Base
    /// Directory Specification. Every key is optional.
    pub struct AwfyConfig {
        pub reduce: pub struct ReduceConfig {
            pub grouping: GroupingKey,
        }
    }
}

/// Get the path to the configuration file.
///
/// If config_name is None, returns ~/.config/arewefastyet/config.yaml
/// If config_name is Some, returns ~/.config/arewefastyet/{config_name}.yaml
fn get_configuration_file_path(config_name: Option<&str>) -> Result<PathBuf> {
    let config_dir = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = env::var("HOME").context("HOME env variable not set")?;
            PathBuf::from(home).join(".config")
        }
    };
    let config_dir = config_dir.join("arewefastyet");

    Ok(match config_name {
        Some(name) => config_dir.join(format!("{name}.yaml")),
        None => config_dir.join("config.yaml"),
    })
}

impl AwfyConfig {
    /// Load the configuration. If it does not exist, return a default configuration.
    ///
    /// A `grouping_override` from the command line takes precedence over the file.
    pub fn load_with_override(
        config_name: Option<&str>,
        grouping_override: Option<GroupingKey>,
    ) -> Result<Self> {
        let config_path = get_configuration_file_path(config_name)?;

        let mut config = match fs::read(&config_path) {
            Ok(config_str) => {
                let config: AwfyConfig = serde_yaml::from_slice(&config_str).with_context(|| {
                    format!("Failed to parse config at {}", config_path.display())
                })?;
                debug!("Config loaded from {}", config_path.display());
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file not found at {}", config_path.display());
                AwfyConfig::default()
            }
            Err(e) => bail!("Failed to load config: {e}"),
        };

        if let Some(grouping) = grouping_override {
            config.reduce.grouping = grouping;
        }

        Ok(config)
    }
}
