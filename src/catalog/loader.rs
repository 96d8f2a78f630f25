//! Catalog definition file loading

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::types::CommandDefinition;

/// Supported definition file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
    Toml,
}

impl DefinitionFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "" => bail!(
                "Cannot determine catalog format of '{}': file has no extension",
                path.display()
            ),
            other => bail!(
                "Unsupported catalog format '.{other}' for '{}'. Use .json, .yaml or .toml",
                path.display()
            ),
        }
    }
}

/// TOML has no top-level arrays, so definitions live under `[[commands]]`
#[derive(Deserialize)]
struct TomlDefinitions {
    #[serde(default)]
    commands: Vec<CommandDefinition>,
}

/// Read command definitions from a file
pub fn read_definitions(path: &Path) -> Result<Vec<CommandDefinition>> {
    let format = DefinitionFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    parse_definitions(&content, format)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Parse command definitions from in-memory content
pub fn parse_definitions(content: &str, format: DefinitionFormat) -> Result<Vec<CommandDefinition>> {
    let definitions: Vec<CommandDefinition> = match format {
        DefinitionFormat::Json => {
            serde_json::from_str(content).context("Invalid JSON command definitions")?
        }
        DefinitionFormat::Yaml => {
            serde_yaml::from_str(content).context("Invalid YAML command definitions")?
        }
        DefinitionFormat::Toml => {
            let wrapper: TomlDefinitions =
                toml::from_str(content).context("Invalid TOML command definitions")?;
            wrapper.commands
        }
    };

    Ok(definitions)
}
