//! Batch fold: rendered lines to wire strings

use crate::catalog::{Catalog, CommandRole};

use super::line::RenderedLine;
use super::warning::EncodeWarning;

/// Wire strings produced by a fold plus every warning raised on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutput {
    pub wire: Vec<String>,
    pub warnings: Vec<EncodeWarning>,
}

/// Fold rendered lines into wire strings.
///
/// Standalone commands are translated to their wire token and appended to the
/// running payload. An argument-block command closes the payload built so far and
/// starts a new one from its own parameter tokens; its id never reaches the wire.
/// Lines whose id is not in the catalog are skipped and reported.
pub fn fold(lines: &[RenderedLine], catalog: &Catalog) -> BatchOutput {
    fold_numbered(lines.iter().enumerate().map(|(i, l)| (i + 1, l)), catalog)
}

/// Same as [`fold`], with each line carrying its caller-side position for warnings
pub(crate) fn fold_numbered<'a, I>(lines: I, catalog: &Catalog) -> BatchOutput
where
    I: IntoIterator<Item = (usize, &'a RenderedLine)>,
{
    let mut output = BatchOutput::default();
    let mut current = String::new();

    for (position, line) in lines {
        let spec = match catalog.lookup(&line.command_id) {
            Ok(spec) => spec,
            Err(_) => {
                tracing::warn!(
                    line = position,
                    command_id = %line.command_id,
                    "command not found in catalog, skipping"
                );
                output.warnings.push(EncodeWarning::UnknownCommand {
                    line: position,
                    command_id: line.command_id.clone(),
                });
                continue;
            }
        };

        match &spec.role {
            CommandRole::ArgumentBlock => {
                if !current.is_empty() {
                    output.wire.push(std::mem::take(&mut current));
                }
                current = line.remainder();
            }
            CommandRole::Standalone { int_token } => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(int_token);
                current.push(' ');
                current.push_str(&line.remainder());
            }
        }
    }

    if !current.is_empty() {
        output.wire.push(current);
    }

    output.wire = output
        .wire
        .into_iter()
        .map(|w| w.trim().to_string())
        .collect();

    output
}
