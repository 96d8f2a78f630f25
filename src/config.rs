//! `uplink.toml` settings
//!
//! Resolution order for the config file:
//! 1. `--config <path>` (must exist)
//! 2. `UPLINK_CONFIG` environment variable (must exist)
//! 3. `./uplink.toml` (optional; defaults apply when absent)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_ARGUMENT_BLOCK_PREFIX;

pub const ENV_UPLINK_CONFIG: &str = "UPLINK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "uplink.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UplinkConfig {
    /// Command catalog definition file
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Ids starting with this prefix are argument blocks
    #[serde(default = "default_argument_block_prefix")]
    pub argument_block_prefix: String,
    /// Default destination for `encode` output
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_argument_block_prefix() -> String {
    DEFAULT_ARGUMENT_BLOCK_PREFIX.to_string()
}

impl Default for UplinkConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            argument_block_prefix: default_argument_block_prefix(),
            output: None,
        }
    }
}

impl UplinkConfig {
    /// Load using the standard resolution order
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(ENV_UPLINK_CONFIG).map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Resolution with the environment lookup already done
    pub fn resolve(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        default: &Path,
    ) -> Result<Self> {
        if let Some(path) = explicit.or(from_env) {
            return Self::from_path(path);
        }

        if default.exists() {
            Self::from_path(default)
        } else {
            tracing::debug!(path = %default.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Read a config file; relative paths inside it resolve against its directory
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        config.catalog = config.catalog.map(|p| rebase(base, p));
        config.output = config.output.map(|p| rebase(base, p));

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid uplink config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.argument_block_prefix.trim().is_empty() {
            bail!("argument_block_prefix cannot be empty");
        }
        Ok(())
    }

    /// Catalog path, preferring an explicit override
    pub fn catalog_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.clone())
            .context(
                "No command catalog configured. Pass --catalog or set 'catalog' in uplink.toml",
            )
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
