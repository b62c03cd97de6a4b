use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tcogen::OptsGenerator;

/// Name of the optional project file read from the walk root.
pub const CONFIG_FILE: &str = "tcogen.toml";

/// Project context for a generator run
pub struct ProjectContext {
    /// Directory to walk
    pub root: PathBuf,
    /// Path to the config file, whether or not it exists
    pub config_path: PathBuf,
    /// Loaded configuration, or defaults when the file is absent
    pub config: TcogenConfig,
}

/// Configuration stored in tcogen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TcogenConfig {
    #[serde(default)]
    pub generate: GenerateSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSettings {
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default)]
    pub follow_links: bool,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            follow_links: false,
        }
    }
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["target".to_string()]
}

impl ProjectContext {
    /// Load context for `root`, or the current directory when absent
    pub fn load(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };
        Self::from_root(root)
    }

    /// Create context from a known root
    pub fn from_root(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("{} is not a directory", root.display());
        }

        let config_path = root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str::<TcogenConfig>(&content).with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            TcogenConfig::default()
        };

        Ok(Self {
            root,
            config_path,
            config,
        })
    }

    /// Whether settings came from a file rather than defaults
    pub fn has_config_file(&self) -> bool {
        self.config_path.exists()
    }

    /// Generator configured from this context
    pub fn generator(&self) -> OptsGenerator {
        let settings = &self.config.generate;
        tcogen::generate_opts()
            .root(&self.root)
            .exclude_dirs(settings.exclude_dirs.iter().cloned())
            .follow_links(settings.follow_links)
    }
}
