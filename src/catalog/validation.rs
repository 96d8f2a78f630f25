//! Catalog definition validation

use std::collections::HashSet;

use super::types::{CommandDefinition, ParameterKind, ValidationError};

/// Validate a set of command definitions
///
/// Every problem is collected so an operator can fix the whole file in one pass.
/// `argument_block_prefix` decides which ids are exempt from the `Int` requirement.
pub fn validate(
    definitions: &[CommandDefinition],
    argument_block_prefix: &str,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if definitions.is_empty() {
        errors.push(ValidationError {
            message: "No commands defined".to_string(),
            command_id: None,
        });
    }

    let mut seen = HashSet::new();
    for def in definitions {
        if def.id.trim().is_empty() {
            errors.push(ValidationError {
                message: format!("Command ID cannot be empty (name: '{}')", def.name),
                command_id: None,
            });
            continue;
        }

        if !seen.insert(def.id.as_str()) {
            errors.push(ValidationError {
                message: "Duplicate command ID".to_string(),
                command_id: Some(def.id.clone()),
            });
        }

        if def.id.chars().any(char::is_whitespace) {
            errors.push(ValidationError {
                message: "Command ID cannot contain whitespace".to_string(),
                command_id: Some(def.id.clone()),
            });
        }

        if def.name.trim().is_empty() {
            errors.push(ValidationError {
                message: "Command name cannot be empty".to_string(),
                command_id: Some(def.id.clone()),
            });
        }

        let is_argument_block = def.id.starts_with(argument_block_prefix);
        let has_int = def.int_token.as_deref().is_some_and(|t| !t.trim().is_empty());
        if !is_argument_block && !has_int {
            errors.push(ValidationError {
                message: "Standalone command requires an 'Int' wire token".to_string(),
                command_id: Some(def.id.clone()),
            });
        }

        validate_parameters(def, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_parameters(def: &CommandDefinition, errors: &mut Vec<ValidationError>) {
    let mut names = HashSet::new();

    for param in &def.parameters {
        let error = |message: String| ValidationError {
            message,
            command_id: Some(def.id.clone()),
        };

        if param.name.trim().is_empty() {
            errors.push(error("Parameter name cannot be empty".to_string()));
            continue;
        }

        if !names.insert(param.name.as_str()) {
            errors.push(error(format!("Duplicate parameter '{}'", param.name)));
        }

        match param.kind {
            ParameterKind::Dropdown => {
                if param.options.is_empty() {
                    errors.push(error(format!(
                        "Dropdown parameter '{}' has no options",
                        param.name
                    )));
                }
                if param.enclosure.as_deref().is_some_and(|e| !e.is_empty()) {
                    errors.push(error(format!(
                        "Dropdown parameter '{}' cannot declare an enclosure",
                        param.name
                    )));
                }
                for option in &param.options {
                    if option.value.trim().is_empty() {
                        errors.push(error(format!(
                            "Option '{}' of parameter '{}' has an empty command value",
                            option.label, param.name
                        )));
                    }
                }
            }
            _ => {
                if !param.options.is_empty() {
                    errors.push(error(format!(
                        "Parameter '{}' declares options but is not a dropdown",
                        param.name
                    )));
                }
            }
        }
    }
}
