//! Per-command line rendering

use std::fmt;

use crate::catalog::{CommandSpec, ParameterKind, ParameterSpec};

use super::warning::CountMismatch;

/// One rendered command: its catalog id plus positional parameter tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub command_id: String,
    pub tokens: Vec<String>,
}

impl RenderedLine {
    /// Parameter tokens joined by single spaces
    pub fn remainder(&self) -> String {
        self.tokens.join(" ")
    }

    /// Split a previously rendered text line back into id and tokens.
    ///
    /// The id is the first whitespace-delimited word. Everything after the single
    /// separator that follows it is kept as-is and split on single spaces, so an
    /// unenclosed value containing spaces ends up as several tokens. That matches
    /// what the wire receives either way. Trailing spaces are empty parameter
    /// positions and are kept; only the line terminator is stripped. Returns
    /// `None` for blank lines.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim_start().trim_end_matches(['\r', '\n']);
        if text.trim_end().is_empty() {
            return None;
        }

        let (command_id, rest) = match text.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, Some(rest)),
            None => (text, None),
        };

        Some(Self {
            command_id: command_id.to_string(),
            tokens: rest
                .map(|r| r.split(' ').map(str::to_string).collect())
                .unwrap_or_default(),
        })
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_id)?;
        for token in &self.tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

/// Render a staged command against its schema.
///
/// Values are positional. Missing values render as empty tokens and surplus values
/// are ignored; either case is reported through the returned [`CountMismatch`].
pub fn render_line<S: AsRef<str>>(
    spec: &CommandSpec,
    values: &[S],
) -> (RenderedLine, Option<CountMismatch>) {
    let tokens = spec
        .parameters
        .iter()
        .enumerate()
        .map(|(i, param)| render_token(param, values.get(i).map_or("", |v| v.as_ref())))
        .collect();

    let mismatch = (values.len() != spec.parameters.len()).then_some(CountMismatch {
        expected: spec.parameters.len(),
        supplied: values.len(),
    });

    let line = RenderedLine {
        command_id: spec.id.clone(),
        tokens,
    };

    (line, mismatch)
}

/// Dropdown values are already resolved option values and pass through untouched
fn render_token(param: &ParameterSpec, value: &str) -> String {
    if param.kind == ParameterKind::Dropdown {
        return value.to_string();
    }

    let value = value.trim();
    match param.effective_enclosure() {
        Some(enclosure) => format!("{enclosure}{value}{enclosure}"),
        None => value.to_string(),
    }
}
