//! Shared setup for command implementations.
//!
//! Every command that touches the catalog resolves it the same way:
//! config file first, then command-line overrides on top.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::UplinkConfig;
use crate::encoder::EncodeWarning;

/// Global options that locate the config and catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogArgs {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub prefix: Option<String>,
}

/// Resolved config plus the loaded catalog
pub struct Workspace {
    pub config: UplinkConfig,
    pub catalog: Catalog,
    pub catalog_path: PathBuf,
}

impl Workspace {
    pub fn open(args: &CatalogArgs) -> Result<Self> {
        let mut config = UplinkConfig::load(args.config.as_deref())?;
        if let Some(prefix) = &args.prefix {
            if prefix.trim().is_empty() {
                anyhow::bail!("--prefix cannot be empty");
            }
            config.argument_block_prefix = prefix.clone();
        }

        let catalog_path = config.catalog_path(args.catalog.as_deref())?;
        let catalog = Catalog::load(&catalog_path, &config.argument_block_prefix)
            .with_context(|| format!("Failed to load catalog '{}'", catalog_path.display()))?;

        tracing::debug!(
            path = %catalog_path.display(),
            commands = catalog.len(),
            "catalog loaded"
        );

        Ok(Self {
            config,
            catalog,
            catalog_path,
        })
    }
}

/// Print warnings to stderr, one per line; dropped lines are marked with `✗`
pub fn print_warnings(warnings: &[EncodeWarning]) {
    for warning in warnings {
        eprintln!("{} {}", warning_marker(warning), warning);
    }
}

fn warning_marker(warning: &EncodeWarning) -> ColoredString {
    if warning.skipped_line() {
        "✗".red().bold()
    } else {
        "⚠".yellow().bold()
    }
}
