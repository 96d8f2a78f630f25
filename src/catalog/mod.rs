//! Command catalog: the read-only schema table the encoder works from
//!
//! This module handles:
//! - Loading command definitions (JSON, YAML or TOML)
//! - Validating definitions
//! - Classifying each command as standalone or argument block
//! - Exact-match lookup by command id

pub mod loader;
mod types;
mod validation;


use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub use loader::{parse_definitions, read_definitions, DefinitionFormat};
pub use types::{
    CatalogError, CommandDefinition, CommandRole, CommandSpec, DropdownOption, ParameterKind,
    ParameterSpec, ValidationError, DEFAULT_ARGUMENT_BLOCK_PREFIX,
};
pub use validation::validate;

/// Immutable lookup table from command id to schema
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<CommandSpec>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate definitions and build the catalog
    ///
    /// Ids starting with `argument_block_prefix` become [`CommandRole::ArgumentBlock`].
    pub fn from_definitions(
        definitions: Vec<CommandDefinition>,
        argument_block_prefix: &str,
    ) -> Result<Self, CatalogError> {
        validate(&definitions, argument_block_prefix).map_err(CatalogError::Validation)?;

        let mut commands = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for def in definitions {
            let role = if def.id.starts_with(argument_block_prefix) {
                CommandRole::ArgumentBlock
            } else {
                // validate() guarantees a non-empty token for standalone commands
                CommandRole::Standalone {
                    int_token: def.int_token.unwrap_or_default().trim().to_string(),
                }
            };

            index.insert(def.id.clone(), commands.len());
            commands.push(CommandSpec {
                id: def.id,
                name: def.name,
                family: def.family,
                role,
                parameters: def.parameters,
                example: def.example,
            });
        }

        tracing::debug!(
            commands = commands.len(),
            prefix = argument_block_prefix,
            "command catalog built"
        );

        Ok(Self { commands, index })
    }

    /// Load and validate a catalog definition file
    pub fn load(path: &Path, argument_block_prefix: &str) -> Result<Self> {
        let definitions = read_definitions(path)?;
        Self::from_definitions(definitions, argument_block_prefix)
            .with_context(|| format!("Invalid command catalog: {}", path.display()))
    }

    /// Exact-match lookup by command id
    pub fn lookup(&self, id: &str) -> Result<&CommandSpec, CatalogError> {
        self.index
            .get(id)
            .map(|&i| &self.commands[i])
            .ok_or_else(|| CatalogError::UnknownCommand(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in definition order
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Commands grouped by family, families alphabetical and commands sorted by name.
    ///
    /// Ordering ignores case; exact byte order only breaks ties.
    pub fn families(&self) -> Vec<(&str, Vec<&CommandSpec>)> {
        let mut groups: BTreeMap<&str, Vec<&CommandSpec>> = BTreeMap::new();
        for spec in &self.commands {
            groups.entry(spec.family.as_str()).or_default().push(spec);
        }

        let mut families: Vec<_> = groups
            .into_iter()
            .map(|(family, mut specs)| {
                specs.sort_by(|a, b| display_order(&a.name, &b.name));
                (family, specs)
            })
            .collect();
        families.sort_by(|a, b| display_order(a.0, b.0));
        families
    }
}

fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
