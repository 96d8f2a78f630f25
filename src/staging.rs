//! Staged batch files
//!
//! A batch is either:
//! - YAML (`.yaml` / `.yml`): a list of `{ id, values }` records, encoded through
//!   the structured path
//! - plain text (anything else): one rendered command line per line, `#` comments
//!   and blank lines ignored

use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::Catalog;
use crate::encoder::{encode_batch, encode_lines, BatchOutput, StagedCommand};

/// Contents of a staged batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedBatch {
    Structured(Vec<StagedCommand>),
    Lines(Vec<String>),
}

impl StagedBatch {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read staged batch: {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::parse_yaml(&content)
                .with_context(|| format!("Failed to parse staged batch: {}", path.display()))
        } else {
            Ok(Self::parse_lines(&content))
        }
    }

    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::Structured(Vec::new()));
        }
        let commands: Vec<StagedCommand> =
            serde_yaml::from_str(content).context("Invalid YAML staged batch")?;
        Ok(Self::Structured(commands))
    }

    pub fn parse_lines(content: &str) -> Self {
        let lines = content
            .lines()
            .map(str::trim_start)
            .filter(|l| !l.trim_end().is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self::Lines(lines)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Structured(commands) => commands.len(),
            Self::Lines(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn encode(&self, catalog: &Catalog) -> BatchOutput {
        match self {
            Self::Structured(commands) => encode_batch(catalog, commands),
            Self::Lines(lines) => encode_lines(catalog, lines),
        }
    }
}
