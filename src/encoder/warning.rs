//! Per-line encoding warnings

use std::fmt;

/// Recoverable problem found while encoding one input line.
///
/// None of these abort a batch: the offending line is skipped or padded and
/// encoding carries on. `line` is the 1-based position in the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeWarning {
    #[error("line {line}: unknown command '{command_id}', line skipped")]
    UnknownCommand { line: usize, command_id: String },

    #[error(
        "line {line}: command '{command_id}' expects {expected} parameter(s) but {supplied} were supplied"
    )]
    ParameterCountMismatch {
        line: usize,
        command_id: String,
        expected: usize,
        supplied: usize,
    },

    #[error("line {line}: no command id found, line skipped")]
    MalformedLine { line: usize },
}

impl EncodeWarning {
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownCommand { line, .. }
            | Self::ParameterCountMismatch { line, .. }
            | Self::MalformedLine { line } => *line,
        }
    }

    /// Whether the line this warning refers to was dropped from the output
    pub fn skipped_line(&self) -> bool {
        !matches!(self, Self::ParameterCountMismatch { .. })
    }
}

/// Difference between schema arity and supplied value count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    pub expected: usize,
    pub supplied: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} value(s), got {}", self.expected, self.supplied)
    }
}
