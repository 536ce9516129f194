//! Driver configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::GraphResult;

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "pathgraph.toml";

/// Which graph flavor a script operates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    /// String edge labels, `FindPath` runs the fewest-hops search.
    #[default]
    Labeled,
    /// Numeric edge costs, `FindPath` runs the minimum-cost search.
    Weighted,
}

/// Settings for the script driver and dataset commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Directory `LoadGraph` resolves dataset file names against.
    pub data_dir: PathBuf,

    /// Graph flavor for scripts.
    pub mode: ScriptMode,

    /// Print the interactive/file banner before running a script.
    pub banner: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            mode: ScriptMode::Labeled,
            banner: true,
        }
    }
}

impl DriverConfig {
    /// Load from a TOML file. Missing keys take their default values.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load the given file, or `pathgraph.toml` in the working directory if
    /// present, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
