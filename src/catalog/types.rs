//! Command catalog type definitions

use serde::{Deserialize, Serialize};

/// Reserved id prefix marking argument-block commands
pub const DEFAULT_ARGUMENT_BLOCK_PREFIX: &str = "CMD000";

/// Input kind of a command parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Free-form text input
    #[default]
    #[serde(alias = "text")]
    Text,
    #[serde(alias = "number")]
    Number,
    #[serde(alias = "boolean")]
    Boolean,
    /// Fixed choice list; the encoded token is the selected option's value
    #[serde(alias = "dropdown")]
    Dropdown,
    /// Any other input type (date, time, ...); encodes like text
    #[serde(other)]
    Other,
}

/// One selectable choice of a dropdown parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Label shown to the operator
    #[serde(rename = "Name")]
    pub label: String,
    /// Token emitted on the wire
    #[serde(rename = "Command")]
    pub value: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// One parameter of a command schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "Type", default)]
    pub kind: ParameterKind,
    #[serde(default)]
    pub description: String,
    /// Delimiter wrapped around non-dropdown values, e.g. a quote character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DropdownOption>,
}

impl ParameterSpec {
    /// Enclosure to apply when rendering, if any.
    ///
    /// Dropdown values are emitted verbatim and never enclosed.
    pub fn effective_enclosure(&self) -> Option<&str> {
        match self.kind {
            ParameterKind::Dropdown => None,
            _ => self.enclosure.as_deref().filter(|e| !e.is_empty()),
        }
    }
}

/// Command definition record as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Family", default)]
    pub family: String,
    /// Wire token substituted for the id; unused by argument blocks
    #[serde(
        rename = "Int",
        default,
        deserialize_with = "deserialize_int_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub int_token: Option<String>,
    #[serde(rename = "Parameters", default)]
    pub parameters: Vec<ParameterSpec>,
    #[serde(rename = "Example", default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Libraries write `Int` either as a string or as a bare number
fn deserialize_int_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawToken {
        Text(String),
        Integer(i64),
    }

    Ok(Option::<RawToken>::deserialize(deserializer)?.map(|raw| match raw {
        RawToken::Text(text) => text,
        RawToken::Integer(n) => n.to_string(),
    }))
}

/// How a command participates in the batch fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRole {
    /// An independent command, emitted as its wire token plus parameters
    Standalone { int_token: String },
    /// Parameter values that open a new wire string for the commands after it.
    /// The command id itself never reaches the wire.
    ArgumentBlock,
}

/// Validated catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: String,
    pub name: String,
    pub family: String,
    pub role: CommandRole,
    pub parameters: Vec<ParameterSpec>,
    pub example: Option<String>,
}

impl CommandSpec {
    pub fn is_argument_block(&self) -> bool {
        matches!(self.role, CommandRole::ArgumentBlock)
    }

    /// Wire token for standalone commands
    pub fn int_token(&self) -> Option<&str> {
        match &self.role {
            CommandRole::Standalone { int_token } => Some(int_token),
            CommandRole::ArgumentBlock => None,
        }
    }
}

/// Catalog validation error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub command_id: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = &self.command_id {
            write!(f, "Command '{}': {}", id, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised by catalog construction and lookup
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("catalog has {} validation error(s):\n{}", .0.len(), format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
