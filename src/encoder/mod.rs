//! Command encoder: staged commands to uplink wire strings
//!
//! Encoding runs in two steps:
//! - [`render_line`] turns one staged command into a [`RenderedLine`]
//! - [`fold`] merges rendered lines into wire strings, applying the
//!   argument-block rule
//!
//! Both steps are pure. Problems with individual lines never abort a batch; they
//! are collected as [`EncodeWarning`]s next to the wire strings.

mod fold;
mod line;
mod warning;


use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

pub use fold::{fold, BatchOutput};
pub use line::{render_line, RenderedLine};
pub use warning::{CountMismatch, EncodeWarning};

/// A command picked by the operator, values in schema parameter order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedCommand {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_values")]
    pub values: Vec<String>,
}

/// Batch files may write numbers and booleans unquoted
fn deserialize_values<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    let raw = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| match v {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Bool(b) => b.to_string(),
        })
        .collect())
}

impl StagedCommand {
    pub fn new(id: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Render every staged command and fold the result into wire strings
pub fn encode_batch(catalog: &Catalog, staged: &[StagedCommand]) -> BatchOutput {
    let mut warnings = Vec::new();
    let mut rendered = Vec::with_capacity(staged.len());

    for (i, command) in staged.iter().enumerate() {
        let position = i + 1;
        let spec = match catalog.lookup(&command.id) {
            Ok(spec) => spec,
            Err(_) => {
                tracing::warn!(
                    line = position,
                    command_id = %command.id,
                    "command not found in catalog, skipping"
                );
                warnings.push(EncodeWarning::UnknownCommand {
                    line: position,
                    command_id: command.id.clone(),
                });
                continue;
            }
        };

        let (line, mismatch) = render_line(spec, &command.values);
        if let Some(mismatch) = mismatch {
            tracing::warn!(
                line = position,
                command_id = %command.id,
                "parameter count mismatch: {mismatch}"
            );
            warnings.push(EncodeWarning::ParameterCountMismatch {
                line: position,
                command_id: command.id.clone(),
                expected: mismatch.expected,
                supplied: mismatch.supplied,
            });
        }
        rendered.push((position, line));
    }

    let mut output = fold::fold_numbered(rendered.iter().map(|(p, l)| (*p, l)), catalog);
    warnings.append(&mut output.warnings);
    warnings.sort_by_key(EncodeWarning::line);
    output.warnings = warnings;
    output
}

/// Fold already-rendered text lines, one command per line
///
/// Each line is split back into id and parameter tokens with
/// [`RenderedLine::parse`]. Blank lines are reported as malformed and skipped.
pub fn encode_lines<S: AsRef<str>>(catalog: &Catalog, lines: &[S]) -> BatchOutput {
    let mut warnings = Vec::new();
    let mut parsed = Vec::with_capacity(lines.len());

    for (i, text) in lines.iter().enumerate() {
        let position = i + 1;
        match RenderedLine::parse(text.as_ref()) {
            Some(line) => parsed.push((position, line)),
            None => {
                tracing::warn!(line = position, "line has no command id, skipping");
                warnings.push(EncodeWarning::MalformedLine { line: position });
            }
        }
    }

    let mut output = fold::fold_numbered(parsed.iter().map(|(p, l)| (*p, l)), catalog);
    warnings.append(&mut output.warnings);
    warnings.sort_by_key(EncodeWarning::line);
    output.warnings = warnings;
    output
}
